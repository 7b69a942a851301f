// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::debug;
use rand::Rng;
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro256PlusPlus,
};

use crate::errors::GcError;
use crate::seq::record::SeqRecord;

pub const MIN_RANDOM_LENGTH: u64 = 50_000;
pub const MAX_RANDOM_LENGTH: u64 = 1_000_000_000;
pub const DEFAULT_SEED: u64 = 42;

const BASES: [u8; 4] = *b"ATCG";

/// Parses a requested sequence length. Digit separators ('_' or ',') are allowed, so
/// "1,000,000" and "1_000_000" both work.
pub fn parse_length(text: &str) -> Result<usize, GcError> {
    let digits: String = text
        .trim()
        .chars()
        .filter(|c| *c != '_' && *c != ',')
        .collect();
    let value: u64 = digits
        .parse()
        .map_err(|_| GcError::InvalidLength(text.trim().to_string()))?;
    check_length(value)
}

pub fn check_length(value: u64) -> Result<usize, GcError> {
    if (MIN_RANDOM_LENGTH..=MAX_RANDOM_LENGTH).contains(&value) {
        usize::try_from(value).map_err(|_| GcError::OutOfRangeLength {
            value,
            min: MIN_RANDOM_LENGTH,
            max: MAX_RANDOM_LENGTH,
        })
    } else {
        Err(GcError::OutOfRangeLength {
            value,
            min: MIN_RANDOM_LENGTH,
            max: MAX_RANDOM_LENGTH,
        })
    }
}

/// Generates uniformly random DNA.
///
/// Every call to [`bases`](Self::bases) starts from a fresh Xoshiro256++ seeded with the same
/// value, so a given (seed, length) pair always yields the same sequence. The header numeral is
/// drawn from a different, caller-supplied generator and is not reproducible.
#[derive(Clone, Copy, Debug)]
pub struct RandomSequenceGenerator {
    seed: u64,
}

impl Default for RandomSequenceGenerator {
    fn default() -> Self {
        RandomSequenceGenerator::new(DEFAULT_SEED)
    }
}

impl RandomSequenceGenerator {
    pub fn new(seed: u64) -> Self {
        RandomSequenceGenerator { seed }
    }

    pub fn bases(&self, length: usize) -> String {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.seed);
        (0..length)
            .map(|_| BASES[rng.next_u32() as usize % BASES.len()] as char)
            .collect()
    }

    pub fn generate<R: Rng + ?Sized>(&self, length: usize, label_rng: &mut R) -> SeqRecord {
        debug!("Generating {} random bases (seed {})", length, self.seed);
        let sequence = self.bases(length);
        SeqRecord::new(random_header(label_rng), sequence)
    }
}

pub fn random_header<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(">Random_DNA_Seq_{:02}", rng.random_range(1..=99u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds() {
        assert!(check_length(49_999).is_err());
        assert_eq!(check_length(50_000).unwrap(), 50_000);
        assert_eq!(check_length(1_000_000_000).unwrap(), 1_000_000_000);
        assert!(matches!(
            check_length(1_000_000_001),
            Err(GcError::OutOfRangeLength { value: 1_000_000_001, .. })
        ));
    }

    #[test]
    fn parse_length_accepts_separators() {
        assert_eq!(parse_length(" 50000 ").unwrap(), 50_000);
        assert_eq!(parse_length("1_000_000").unwrap(), 1_000_000);
        assert_eq!(parse_length("1,000,000,000").unwrap(), 1_000_000_000);
    }

    #[test]
    fn parse_length_rejects_non_integers() {
        for bad in ["", "abc", "5e4", "50000.0", "-50000"] {
            assert!(
                matches!(parse_length(bad), Err(GcError::InvalidLength(_))),
                "accepted {:?}",
                bad
            );
        }
        assert!(matches!(
            parse_length("49999"),
            Err(GcError::OutOfRangeLength { .. })
        ));
    }

    #[test]
    fn same_seed_same_bases() {
        let gen = RandomSequenceGenerator::new(DEFAULT_SEED);
        let a = gen.bases(10_000);
        let b = gen.bases(10_000);
        assert_eq!(a, b);
        assert_eq!(a.len(), 10_000);
        // A shorter draw is a prefix of a longer one.
        assert!(a.starts_with(&gen.bases(100)));
    }

    #[test]
    fn other_seed_other_bases() {
        let a = RandomSequenceGenerator::new(42).bases(1_000);
        let b = RandomSequenceGenerator::new(43).bases(1_000);
        assert_ne!(a, b);
    }

    #[test]
    fn bases_cover_alphabet_only() {
        let seq = RandomSequenceGenerator::default().bases(10_000);
        for base in ['A', 'T', 'C', 'G'] {
            assert!(seq.contains(base));
        }
        assert!(seq.chars().all(|c| "ATCG".contains(c)));
    }

    #[test]
    fn header_numeral_is_two_digits() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        for _ in 0..200 {
            let header = random_header(&mut rng);
            let num = header.strip_prefix(">Random_DNA_Seq_").unwrap();
            assert_eq!(num.len(), 2);
            let n: u32 = num.parse().unwrap();
            assert!((1..=99).contains(&n));
        }
    }

    #[test]
    fn generate_does_not_disturb_bases() {
        let gen = RandomSequenceGenerator::default();
        let mut label_rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let rec1 = gen.generate(1_000, &mut label_rng);
        let rec2 = gen.generate(1_000, &mut label_rng);
        assert_eq!(rec1.sequence, rec2.sequence);
        assert!(rec1.header.starts_with(">Random_DNA_Seq_"));
    }
}
