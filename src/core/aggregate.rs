//! Cross-page aggregation (spec.md §4.5).
//!
//! Folds each page's word/bigram list into one domain-level list by summing
//! counts for equal keys. Uses a hash-based merge rather than the linear
//! per-item scan the legacy aggregate.c/bigram_aggregate.c perform, the way
//! the stats `Accumulator` in the teacher repo merges per-chunk maps by key.

use rustc_hash::FxHashMap;

use super::types::{BigramCount, WordCount};

/// Sums word counts across `lists`, one entry per distinct word.
pub fn aggregate_words(lists: &[Vec<WordCount>]) -> Vec<WordCount> {
    let mut merged: FxHashMap<&str, u64> = FxHashMap::default();
    for list in lists {
        for wc in list {
            *merged.entry(wc.word.as_str()).or_insert(0) += wc.count;
        }
    }
    merged
        .into_iter()
        .map(|(word, count)| WordCount { word: word.to_string(), count })
        .collect()
}

/// Sums bigram counts across `lists`, one entry per distinct (w1, w2) pair.
pub fn aggregate_bigrams(lists: &[Vec<BigramCount>]) -> Vec<BigramCount> {
    let mut merged: FxHashMap<(&str, &str), u64> = FxHashMap::default();
    for list in lists {
        for bc in list {
            if bc.count == 0 {
                continue;
            }
            *merged.entry((bc.w1.as_str(), bc.w2.as_str())).or_insert(0) += bc.count;
        }
    }
    merged
        .into_iter()
        .map(|((w1, w2), count)| BigramCount { w1: w1.to_string(), w2: w2.to_string(), count })
        .collect()
}
