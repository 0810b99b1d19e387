//! Stopword loading and membership testing (spec.md §4.2).
//!
//! A `StopwordSet` is built once from a file (one word per line), normalized
//! the same way the tokenizer normalizes tokens, and reused read-only across
//! an analysis.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;

use super::error::{AnalysisError, CoreResult};

/// A normalized, deduplicated set of stopwords.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Builds an empty set. Useful when no stopwords file is configured.
    pub fn empty() -> Self {
        Self { words: FxHashSet::default() }
    }

    /// Loads one word per line from `path`, rstripping CR/LF, lowercasing
    /// ASCII letters, and discarding blank lines and duplicates.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AnalysisError::StopwordsUnavailable(format!("{}: {e}", path.display()))
        })?;

        let mut words = FxHashSet::default();
        for raw_line in contents.lines() {
            let line = rstrip_cr(raw_line);
            if line.is_empty() {
                continue;
            }
            words.insert(lowercase_ascii(line));
        }

        Ok(Self { words })
    }

    /// True if `word` (already lowercased by the tokenizer) is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// `str::lines()` already strips `\n` and a trailing `\r`; this handles a
/// stray leftover `\r` from a CRLF file read without line-ending translation.
fn rstrip_cr(s: &str) -> &str {
    s.strip_suffix('\r').unwrap_or(s)
}

fn lowercase_ascii(s: &str) -> String {
    s.bytes()
        .map(|b| if b.is_ascii_uppercase() { b.to_ascii_lowercase() } else { b })
        .map(char::from)
        .collect()
}
