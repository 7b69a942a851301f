// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use log::warn;

use crate::errors::GcError;
use crate::seq::record::SeqRecord;

/// What to do when a batch contains the same header twice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DuplicatePolicy {
    /// The later record replaces the earlier one's bases; the header keeps its first position.
    #[default]
    Overwrite,
    Reject,
}

impl FromStr for DuplicatePolicy {
    type Err = GcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(DuplicatePolicy::Overwrite),
            "reject" => Ok(DuplicatePolicy::Reject),
            other => Err(GcError::Config(format!(
                "unknown duplicate header policy '{}' (expected 'overwrite' or 'reject')",
                other
            ))),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DuplicatePolicy::Overwrite => "overwrite",
            DuplicatePolicy::Reject => "reject",
        };
        write!(f, "{}", s)
    }
}

// The records of one input batch (a file, a paste, a single manual entry or a generated
// sequence), keyed by header, in input order.
#[derive(Clone, Debug, Default)]
pub struct SeqCollection {
    records: IndexMap<String, SeqRecord>,
    policy: DuplicatePolicy,
}

impl SeqCollection {
    pub fn new(policy: DuplicatePolicy) -> Self {
        SeqCollection {
            records: IndexMap::new(),
            policy,
        }
    }

    pub fn single(record: SeqRecord) -> Self {
        let mut records = IndexMap::new();
        records.insert(record.header.clone(), record);
        SeqCollection {
            records,
            policy: DuplicatePolicy::default(),
        }
    }

    pub fn insert(&mut self, record: SeqRecord) -> Result<(), GcError> {
        if self.records.contains_key(&record.header) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(GcError::DuplicateHeader(record.header));
                }
                DuplicatePolicy::Overwrite => {
                    warn!("Duplicate header {}: keeping the later sequence", record.header);
                }
            }
        }
        self.records.insert(record.header.clone(), record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, header: &str) -> Option<&SeqRecord> {
        self.records.get(header)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeqRecord> {
        self.records.values()
    }

    pub fn headers(&self) -> Vec<&str> {
        self.records.keys().map(String::as_str).collect()
    }
}
