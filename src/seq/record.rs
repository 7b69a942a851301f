// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// A record for sequences: the full header line (delimiter included) and the normalized bases.

pub const RECORD_DELIMITER: char = '>';

#[derive(Clone, Debug, PartialEq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

impl SeqRecord {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        SeqRecord {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
