//! String-keyed word and bigram counting (spec.md §4.3).
//!
//! This is the baseline pipeline: words and bigrams are counted directly by
//! their owned `String` keys in a hash map, rather than through an
//! interning dictionary. It must produce results identical (up to ordering,
//! which [`super::super::topk`] normalizes) to [`super::id_counter::count`]
//! for the same input, per spec.md invariant 4.

use rustc_hash::FxHashMap;

use super::super::filter::should_drop;
use super::super::stopwords::StopwordSet;
use super::super::types::{BigramCount, WordCount};

/// Counts word and bigram frequencies for one page's raw token sequence
/// using plain string keys. Mirrors [`super::id_counter::count`]'s
/// no-bridging rule: a dropped token resets the previous-token register.
pub fn count(
    raw_tokens: &[String],
    stopwords: &StopwordSet,
    want_bigrams: bool,
) -> (Vec<WordCount>, Option<Vec<BigramCount>>) {
    let mut words: FxHashMap<&str, u64> = FxHashMap::default();
    let mut bigrams: FxHashMap<(&str, &str), u64> = FxHashMap::default();

    let mut prev: Option<&str> = None;
    for tok in raw_tokens {
        if should_drop(tok, stopwords) {
            prev = None;
            continue;
        }

        *words.entry(tok.as_str()).or_insert(0) += 1;

        if want_bigrams {
            if let Some(p) = prev {
                *bigrams.entry((p, tok.as_str())).or_insert(0) += 1;
            }
            prev = Some(tok.as_str());
        }
    }

    let word_list = words
        .into_iter()
        .map(|(word, count)| WordCount { word: word.to_string(), count })
        .collect();

    let bigram_list = want_bigrams.then(|| {
        bigrams
            .into_iter()
            .map(|((w1, w2), count)| BigramCount { w1: w1.to_string(), w2: w2.to_string(), count })
            .collect()
    });

    (word_list, bigram_list)
}
