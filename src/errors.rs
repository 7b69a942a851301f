// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GcError {
    #[error("Invalid input '{0}'. Please enter 'A', 'B', or 'C'.")]
    InvalidModeSelection(String),

    #[error("FASTA header must start with '>': {0}")]
    InvalidHeader(String),

    #[error("Invalid DNA character '{found}' at position {position} in sequence: {header}")]
    InvalidAlphabet {
        header: String,
        found: char,
        position: usize,
    },

    #[error("The file was not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("File exceeds 1GB ({size} bytes, limit {limit}). Please use a smaller file.")]
    SizeLimit { size: u64, limit: u64 },

    #[error("No sequences found in the FASTA input.")]
    EmptyInput,

    #[error("Length must be between {min} and {max} bases (got {value}).")]
    OutOfRangeLength { value: u64, min: u64, max: u64 },

    #[error("Not a valid integer length: '{0}'")]
    InvalidLength(String),

    #[error("Duplicate FASTA header: {0}")]
    DuplicateHeader(String),

    #[error("Unexpected end of input")]
    EndOfInput,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GcError {
    // Recoverable errors send the user back to the prompt that produced them; the rest end the
    // session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            GcError::EndOfInput | GcError::Config(_) | GcError::Io(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::GcError;
    use std::io;

    #[test]
    fn taxonomy_errors_are_recoverable() {
        assert!(GcError::InvalidModeSelection(String::from("D")).is_recoverable());
        assert!(GcError::EmptyInput.is_recoverable());
        assert!(GcError::SizeLimit { size: 2, limit: 1 }.is_recoverable());
        assert!(!GcError::EndOfInput.is_recoverable());
        assert!(!GcError::from(io::Error::new(io::ErrorKind::Other, "boom")).is_recoverable());
    }

    #[test]
    fn alphabet_error_names_header() {
        let err = GcError::InvalidAlphabet {
            header: String::from(">seq1"),
            found: 'X',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid DNA character 'X' at position 3 in sequence: >seq1"
        );
    }
}
