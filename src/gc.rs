// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use serde::Serialize;

use crate::seq::collection::SeqCollection;
use crate::seq::record::SeqRecord;

/// Percentage (0-100) of bases that are G or C. An empty sequence has a GC content of 0.
///
/// Bases are expected to be upper-case already (see `seq::alphabet`).
pub fn gc_content(sequence: &[u8]) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc_count = sequence
        .iter()
        .filter(|&&base| matches!(base, b'G' | b'C'))
        .count();
    100.0 * gc_count as f64 / sequence.len() as f64
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GcResult {
    pub header: String,
    pub length: usize,
    pub gc_content: f64,
}

impl GcResult {
    pub fn from_record(record: &SeqRecord) -> Self {
        GcResult {
            header: record.header.clone(),
            length: record.len(),
            gc_content: gc_content(record.sequence.as_bytes()),
        }
    }
}

pub fn analyze(collection: &SeqCollection) -> Vec<GcResult> {
    collection.iter().map(GcResult::from_record).collect()
}
