//! Line and character classification shared by every analyzer
//!
//! A single analysis unit (the whole document, or one chunk) owns a
//! [`StatisticsRecord`] and a [`ParagraphState`]. Each line is fed through
//! [`classify_line`], which updates both in place.

use crate::domain::stats::StatisticsRecord;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Classification of a single character of a trimmed line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Letter in `aeiouAEIOU`
    Vowel,
    /// Any other letter (general category `L*`)
    Consonant,
    /// Decimal digit (general category `Nd`)
    Digit,
    /// Punctuation, symbols, marks, other numbers and interior whitespace
    Other,
}

impl CharClass {
    /// Classify a character by its Unicode general category
    ///
    /// Letter numbers such as `Ⅻ`, superscripts, fractions and combining
    /// marks are neither letters nor digits.
    pub fn of(ch: char) -> Self {
        match get_general_category(ch) {
            GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter => {
                if is_vowel(ch) {
                    CharClass::Vowel
                } else {
                    CharClass::Consonant
                }
            }
            GeneralCategory::DecimalNumber => CharClass::Digit,
            _ => CharClass::Other,
        }
    }

    /// Check if this class is a letter
    pub fn is_letter(self) -> bool {
        matches!(self, CharClass::Vowel | CharClass::Consonant)
    }
}

/// Check if character is one of the five vowels, ignoring case
fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Tracks whether the previous line of the current unit was non-blank
///
/// Starts outside a paragraph. A new paragraph is counted on every
/// blank-to-non-blank transition within the unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParagraphState {
    in_paragraph: bool,
}

impl ParagraphState {
    /// Creates a state positioned outside any paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while inside a run of non-blank lines
    pub fn in_paragraph(&self) -> bool {
        self.in_paragraph
    }

    /// Leaves the current paragraph, if any
    pub fn reset(&mut self) {
        self.in_paragraph = false;
    }

    /// Marks a non-blank line and reports whether it opened a new paragraph
    fn enter(&mut self) -> bool {
        let opened = !self.in_paragraph;
        self.in_paragraph = true;
        opened
    }
}

/// Feed one line through the classifier
///
/// Always counts the line. Blank lines (empty after trimming) only close
/// the current paragraph. Non-blank lines contribute their words and the
/// characters between the first and last non-whitespace character.
pub fn classify_line(line: &str, state: &mut ParagraphState, stats: &mut StatisticsRecord) {
    stats.line_count += 1;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        state.reset();
        return;
    }

    if state.enter() {
        stats.paragraph_count += 1;
    }

    stats.word_count += trimmed.split_whitespace().count();

    for ch in trimmed.chars() {
        stats.char_count += 1;
        match CharClass::of(ch) {
            CharClass::Vowel => {
                stats.alpha_count += 1;
                stats.vowel_count += 1;
            }
            CharClass::Consonant => {
                stats.alpha_count += 1;
                stats.non_vowel_count += 1;
            }
            CharClass::Digit => stats.digit_count += 1,
            CharClass::Other => {}
        }
    }
}

/// One analysis unit: a record plus its paragraph state
///
/// A fresh scanner is used for the whole document by the sequential
/// analyzer and for every chunk by the chunked analyzer.
#[derive(Debug, Clone, Default)]
pub struct LineScanner {
    stats: StatisticsRecord,
    state: ParagraphState,
}

impl LineScanner {
    /// Creates a scanner with an empty record, outside any paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one line
    pub fn step(&mut self, line: &str) {
        classify_line(line, &mut self.state, &mut self.stats);
    }

    /// Process every line in order
    pub fn scan<L: AsRef<str>>(&mut self, lines: &[L]) {
        for line in lines {
            self.step(line.as_ref());
        }
    }

    /// The counters collected so far
    pub fn stats(&self) -> &StatisticsRecord {
        &self.stats
    }

    /// Current paragraph state
    pub fn paragraph_state(&self) -> ParagraphState {
        self.state
    }

    /// Finish the unit and return its record
    pub fn finish(self) -> StatisticsRecord {
        self.stats
    }
}

/// Scan a line slice as one isolated unit
pub fn scan_lines<L: AsRef<str>>(lines: &[L]) -> StatisticsRecord {
    let mut scanner = LineScanner::new();
    scanner.scan(lines);
    scanner.finish()
}
