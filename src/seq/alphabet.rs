// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::sync::OnceLock;

use regex::bytes::Regex;

use crate::errors::GcError;

/// Bases accepted in a sequence, after upper-casing. N stands for an unknown base.
pub const DNA_ALPHABET: [u8; 5] = *b"ATCGN";

fn invalid_base_regex() -> &'static Regex {
    static INVALID_BASE: OnceLock<Regex> = OnceLock::new();
    // Byte-oriented, so that the first byte of a multi-byte char also counts as a mismatch.
    INVALID_BASE.get_or_init(|| {
        let class: String = DNA_ALPHABET.iter().map(|&b| b as char).collect();
        Regex::new(&format!("(?-u)[^{}]", class)).expect("alphabet is plain ASCII letters")
    })
}

/// Trims surrounding whitespace from a sequence line and upper-cases it.
pub fn normalize_line(line: &str) -> String {
    line.trim().to_ascii_uppercase()
}

/// Checks that every character of `sequence` (already upper-cased) is in [`DNA_ALPHABET`].
///
/// The error reports the first offending character and its 1-based position; nothing is ever
/// silently dropped.
pub fn check_alphabet(header: &str, sequence: &str) -> Result<(), GcError> {
    match invalid_base_regex().find(sequence.as_bytes()) {
        None => Ok(()),
        Some(m) => {
            // Everything before the match is ASCII, so the byte offset is also a char offset
            // and a char boundary.
            let offset = m.start();
            let found = sequence[offset..].chars().next().unwrap_or('?');
            Err(GcError::InvalidAlphabet {
                header: header.to_string(),
                found,
                position: offset + 1,
            })
        }
    }
}
