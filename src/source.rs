// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, str::FromStr};

use crate::errors::GcError;
use crate::seq::alphabet::{check_alphabet, normalize_line};
use crate::seq::record::{SeqRecord, RECORD_DELIMITER};

/// The three ways of supplying a sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SourceMode {
    Manual,
    File,
    Random,
}

use SourceMode::{File, Manual, Random};

impl SourceMode {
    pub const ALL: [SourceMode; 3] = [Manual, File, Random];

    pub fn key(&self) -> char {
        match self {
            Manual => 'A',
            File => 'B',
            Random => 'C',
        }
    }

    pub fn menu_entry(&self) -> &'static str {
        match self {
            Manual => "Enter your own DNA sequence in FASTA format (up to 1 billion bases)",
            File => "Load and process a FASTA file (up to 1GB uncompressed)",
            Random => "Generate a random DNA sequence (50,000-1,000,000,000 bases)",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Manual => File,
            File => Random,
            Random => Manual,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Manual => Random,
            File => Manual,
            Random => File,
        }
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Manual => "Paste FASTA",
            File => "Load File",
            Random => "Random",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SourceMode {
    type Err = GcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Manual),
            "B" => Ok(File),
            "C" => Ok(Random),
            _ => Err(GcError::InvalidModeSelection(s.trim().to_string())),
        }
    }
}

pub fn check_header(header: &str) -> Result<String, GcError> {
    let header = header.trim();
    if header.starts_with(RECORD_DELIMITER) {
        Ok(header.to_string())
    } else {
        Err(GcError::InvalidHeader(header.to_string()))
    }
}

/// Builds a record from a typed-in header and sequence lines (which are trimmed, upper-cased
/// and concatenated).
pub fn manual_record<S: AsRef<str>>(header: &str, lines: &[S]) -> Result<SeqRecord, GcError> {
    let header = check_header(header)?;
    let sequence: String = lines
        .iter()
        .map(|line| normalize_line(line.as_ref()))
        .collect();
    check_alphabet(&header, &sequence)?;
    Ok(SeqRecord::new(header, sequence))
}
