// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::GcError;
use crate::seq::collection::DuplicatePolicy;
use crate::seq::fasta::DEFAULT_WRAP_WIDTH;
use crate::seq::random::DEFAULT_SEED;

pub const CONFIG_FILENAME: &str = ".gccomputeconfig";
pub const DEFAULT_EXPORT_PATH: &str = "random_sequence.fasta";

const DEFAULT_PREVIEW_LINES: usize = 2;

// Settings from the optional JSON config file. Every key is optional, e.g.:
//
//  { "wrap_width": 60, "seed": 7, "duplicate_headers": "reject" }
#[derive(Clone, Debug, PartialEq)]
pub struct GcConfig {
    pub wrap_width: usize,
    pub seed: u64,
    pub duplicate_headers: DuplicatePolicy,
    pub preview_lines: usize,
    pub export_path: PathBuf,
}

impl Default for GcConfig {
    fn default() -> Self {
        GcConfig {
            wrap_width: DEFAULT_WRAP_WIDTH,
            seed: DEFAULT_SEED,
            duplicate_headers: DuplicatePolicy::default(),
            preview_lines: DEFAULT_PREVIEW_LINES,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

impl GcConfig {
    pub fn from_file(path: &Path) -> Result<Self, GcError> {
        let text = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| GcError::Config(format!("{}: {}", path.display(), e)))?;
        GcConfig::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, GcError> {
        let mut config = GcConfig::default();
        if !value.is_object() {
            return Err(GcError::Config(String::from("expected a JSON object")));
        }
        if let Some(width) = value.get("wrap_width") {
            config.wrap_width = positive_int(width, "wrap_width")?;
        }
        if let Some(seed) = value.get("seed") {
            config.seed = seed
                .as_u64()
                .ok_or_else(|| GcError::Config(String::from("seed must be a non-negative integer")))?;
        }
        if let Some(policy) = value.get("duplicate_headers") {
            config.duplicate_headers = policy
                .as_str()
                .ok_or_else(|| GcError::Config(String::from("duplicate_headers must be a string")))?
                .parse()?;
        }
        if let Some(lines) = value.get("preview_lines") {
            config.preview_lines = positive_int(lines, "preview_lines")?;
        }
        if let Some(path) = value.get("export_path") {
            config.export_path = path
                .as_str()
                .map(PathBuf::from)
                .ok_or_else(|| GcError::Config(String::from("export_path must be a string")))?;
        }
        Ok(config)
    }
}

fn positive_int(value: &Value, key: &str) -> Result<usize, GcError> {
    value
        .as_u64()
        .filter(|v| *v > 0)
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| GcError::Config(format!("{} must be a positive integer", key)))
}

// Looks in $HOME first, then in the current directory.
pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILENAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILENAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
