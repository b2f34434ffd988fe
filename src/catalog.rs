//! Word catalog
//!
//! Read-only view over the externally supplied word list, plus an integrity
//! check for catalog data files. The scheduler never mutates the catalog.

use std::collections::{HashMap, HashSet};

use crate::types::{Level, Word};

// ============================================================
// ValidationReport
// ============================================================

/// Result of a catalog integrity check
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Violations that break scheduler assumptions (duplicate ids, empty fields)
    pub errors: Vec<String>,
    /// Cosmetic gaps (missing phonetic, no examples)
    pub warnings: Vec<String>,
    /// Word count per level, in `Level::ALL` order
    pub level_counts: [usize; 3],
    /// Spellings that appear in more than one entry
    pub duplicate_words: Vec<String>,
}

impl ValidationReport {
    /// True when no errors were found (warnings are acceptable)
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

// ============================================================
// Catalog
// ============================================================

/// Immutable word catalog
pub struct Catalog {
    words: Vec<Word>,
}

impl Catalog {
    /// Wrap an externally supplied word list
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Parse a catalog from its serialized JSON form
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let words: Vec<Word> = serde_json::from_str(json)?;
        Ok(Self::new(words))
    }

    /// All words, in catalog order
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Total entry count
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by id
    pub fn get(&self, id: i64) -> Option<&Word> {
        self.words.iter().find(|w| w.id == id)
    }

    /// Words belonging to one level
    pub fn words_for_level(&self, level: Level) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |w| w.level == level)
    }

    /// Entry count for one level
    pub fn count_for_level(&self, level: Level) -> usize {
        self.words_for_level(level).count()
    }

    /// Check catalog integrity: unique ids, required fields, level coverage.
    ///
    /// Duplicate ids are errors because the ledger identifies words purely by
    /// id; everything else degrades to a warning or informational listing.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        let mut seen_ids: HashSet<i64> = HashSet::new();
        let mut spelling_counts: HashMap<&str, usize> = HashMap::new();

        for (index, word) in self.words.iter().enumerate() {
            if !seen_ids.insert(word.id) {
                report
                    .errors
                    .push(format!("duplicate id {} (word: {})", word.id, word.word));
            }

            if word.word.is_empty() {
                report
                    .errors
                    .push(format!("missing word at index {} (id: {})", index, word.id));
            }

            if word.meaning.is_empty() {
                report.errors.push(format!(
                    "missing meaning for word: {} (id: {})",
                    word.word, word.id
                ));
            }

            if word.phonetic.is_empty() {
                report.warnings.push(format!(
                    "missing phonetic for word: {} (id: {})",
                    word.word, word.id
                ));
            }

            if word.examples.is_empty() {
                report.warnings.push(format!(
                    "no examples for word: {} (id: {})",
                    word.word, word.id
                ));
            }

            let level_index = Level::ALL
                .iter()
                .position(|l| *l == word.level)
                .unwrap_or(0);
            report.level_counts[level_index] += 1;

            *spelling_counts.entry(word.word.as_str()).or_insert(0) += 1;
        }

        report.duplicate_words = spelling_counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(spelling, _)| spelling.to_string())
            .collect();
        report.duplicate_words.sort();

        report
    }
}

// ============================================================
// Tests
// ============================================================
