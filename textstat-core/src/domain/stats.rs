//! The statistics record produced by every analysis pass

use crate::domain::monoid::{Monoid, MonoidReduce};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Flat aggregate of the eight counters collected over a line sequence
///
/// A record starts out as all zeros, is mutated by exactly one analysis unit
/// while it scans its lines, and is treated as a value afterwards. Records
/// from independent units merge by field-wise addition, see [`Monoid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatisticsRecord {
    /// Maximal runs of consecutive non-blank lines
    pub paragraph_count: usize,
    /// Every line seen, blank or not
    pub line_count: usize,
    /// Whitespace-delimited tokens
    pub word_count: usize,
    /// Characters of the trimmed non-blank lines
    pub char_count: usize,
    /// Letters
    pub alpha_count: usize,
    /// Digits that are not also letters
    pub digit_count: usize,
    /// Letters among a, e, i, o, u in either case
    pub vowel_count: usize,
    /// All other letters
    pub non_vowel_count: usize,
}

impl StatisticsRecord {
    /// Creates an all-zero record
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when every counter is zero
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Checks the structural invariants of a record
    ///
    /// Letters split exactly into vowels and non-vowels, and letters plus
    /// digits never exceed the character count.
    pub fn is_consistent(&self) -> bool {
        self.alpha_count == self.vowel_count + self.non_vowel_count
            && self.char_count >= self.alpha_count + self.digit_count
    }

    /// Compares every counter except `paragraph_count`
    ///
    /// These are the counters that do not depend on where a line sequence
    /// was split into chunks.
    pub fn agrees_ignoring_paragraphs(&self, other: &Self) -> bool {
        Self {
            paragraph_count: 0,
            ..*self
        } == Self {
            paragraph_count: 0,
            ..*other
        }
    }
}

impl Monoid for StatisticsRecord {
    fn identity() -> Self {
        Self::default()
    }

    fn combine(&self, other: &Self) -> Self {
        Self {
            paragraph_count: self.paragraph_count + other.paragraph_count,
            line_count: self.line_count + other.line_count,
            word_count: self.word_count + other.word_count,
            char_count: self.char_count + other.char_count,
            alpha_count: self.alpha_count + other.alpha_count,
            digit_count: self.digit_count + other.digit_count,
            vowel_count: self.vowel_count + other.vowel_count,
            non_vowel_count: self.non_vowel_count + other.non_vowel_count,
        }
    }
}

impl MonoidReduce for StatisticsRecord {}

impl Add for StatisticsRecord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(&rhs)
    }
}

impl AddAssign for StatisticsRecord {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.combine(&rhs);
    }
}

impl Sum for StatisticsRecord {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::identity(), |acc, record| acc.combine(&record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(seed: usize) -> StatisticsRecord {
        StatisticsRecord {
            paragraph_count: seed,
            line_count: seed + 1,
            word_count: seed * 2,
            char_count: seed * 10,
            alpha_count: seed * 5,
            digit_count: seed,
            vowel_count: seed * 2,
            non_vowel_count: seed * 3,
        }
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = StatisticsRecord::new();
        assert!(record.is_empty());
        assert!(record.is_consistent());
        assert_eq!(record, StatisticsRecord::identity());
    }

    #[test]
    fn test_combine_is_fieldwise_addition() {
        let combined = sample(1).combine(&sample(2));
        assert_eq!(combined.paragraph_count, 3);
        assert_eq!(combined.line_count, 5);
        assert_eq!(combined.word_count, 6);
        assert_eq!(combined.char_count, 30);
        assert_eq!(combined.alpha_count, 15);
        assert_eq!(combined.digit_count, 3);
        assert_eq!(combined.vowel_count, 6);
        assert_eq!(combined.non_vowel_count, 9);
    }

    #[test]
    fn test_monoid_laws() {
        let (a, b, c) = (sample(1), sample(4), sample(7));

        assert_eq!(a.combine(&StatisticsRecord::identity()), a);
        assert_eq!(StatisticsRecord::identity().combine(&a), a);
        assert_eq!(a.combine(&b).combine(&c), a.combine(&b.combine(&c)));
        assert_eq!(a.combine(&b), b.combine(&a));
    }

    #[test]
    fn test_operators_match_combine() {
        let mut acc = sample(2);
        acc += sample(3);
        assert_eq!(acc, sample(2).combine(&sample(3)));
        assert_eq!(sample(2) + sample(3), acc);

        let total: StatisticsRecord = (1..=3).map(sample).sum();
        assert_eq!(total, StatisticsRecord::reduce((1..=3).map(sample)));
    }

    #[test]
    fn test_consistency_detects_broken_split() {
        let broken = StatisticsRecord {
            alpha_count: 3,
            vowel_count: 1,
            non_vowel_count: 1,
            char_count: 3,
            ..Default::default()
        };
        assert!(!broken.is_consistent());

        let too_few_chars = StatisticsRecord {
            char_count: 1,
            alpha_count: 1,
            non_vowel_count: 1,
            digit_count: 1,
            ..Default::default()
        };
        assert!(!too_few_chars.is_consistent());
    }

    #[test]
    fn test_agrees_ignoring_paragraphs() {
        let a = sample(3);
        let b = StatisticsRecord {
            paragraph_count: 99,
            ..a
        };
        assert!(a.agrees_ignoring_paragraphs(&b));
        assert_ne!(a, b);

        let c = StatisticsRecord {
            word_count: a.word_count + 1,
            ..a
        };
        assert!(!a.agrees_ignoring_paragraphs(&c));
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(sample(1)).unwrap();
        for field in [
            "paragraph_count",
            "line_count",
            "word_count",
            "char_count",
            "alpha_count",
            "digit_count",
            "vowel_count",
            "non_vowel_count",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }

        let back: StatisticsRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample(1));
    }
}
