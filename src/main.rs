// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Errors end the program normally: the message is shown and the exit status stays 0.
fn main() {
    if let Err(e) = gccompute::run() {
        println!("\nError: {}", e);
    }
}
