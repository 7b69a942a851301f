// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod app;
pub mod config;
pub mod errors;
pub mod gc;
pub mod prompt;
pub mod report;
mod runner;
pub mod seq;
pub mod source;
pub mod ui;

use crate::errors::GcError;

pub fn run() -> Result<(), GcError> {
    runner::run()
}
