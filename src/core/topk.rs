//! Deterministic Top-K selection (spec.md §4.6/§4.7).
//!
//! Words sort by count descending, then word ascending (byte-lexicographic).
//! Bigrams sort by count descending, then w1 ascending, then w2 ascending.
//! Both functions deep-copy the surviving entries and leave `list` unchanged.
//! `k == 0` returns an empty list; callers that mean "no limit" must resolve
//! `k` to `list.len()` before calling, per spec.md §4.7.

use std::cmp::Ordering;

use super::types::{BigramCount, WordCount};

fn cmp_words(a: &WordCount, b: &WordCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

fn cmp_bigrams(a: &BigramCount, b: &BigramCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.w1.cmp(&b.w1)).then_with(|| a.w2.cmp(&b.w2))
}

/// Returns the top `k` words from `list`, sorted and deep-copied.
pub fn top_k_words(list: &[WordCount], k: usize) -> Vec<WordCount> {
    if list.is_empty() || k == 0 {
        return Vec::new();
    }
    let mut sorted: Vec<WordCount> = list.to_vec();
    sorted.sort_by(cmp_words);
    sorted.truncate(k);
    sorted
}

/// Returns the top `k` bigrams from `list`, sorted and deep-copied.
pub fn top_k_bigrams(list: &[BigramCount], k: usize) -> Vec<BigramCount> {
    if list.is_empty() || k == 0 {
        return Vec::new();
    }
    let mut sorted: Vec<BigramCount> = list.to_vec();
    sorted.sort_by(cmp_bigrams);
    sorted.truncate(k);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wc(word: &str, count: u64) -> WordCount {
        WordCount { word: word.to_string(), count }
    }

    fn bc(w1: &str, w2: &str, count: u64) -> BigramCount {
        BigramCount { w1: w1.to_string(), w2: w2.to_string(), count }
    }

    #[test]
    fn sorts_by_count_desc_then_word_asc() {
        let list = vec![wc("b", 3), wc("a", 3), wc("z", 5), wc("m", 1)];
        let out = top_k_words(&list, 10);
        assert_eq!(out, vec![wc("z", 5), wc("a", 3), wc("b", 3), wc("m", 1)]);
    }

    #[test]
    fn truncates_to_k() {
        let list = vec![wc("a", 1), wc("b", 2), wc("c", 3)];
        let out = top_k_words(&list, 2);
        assert_eq!(out, vec![wc("c", 3), wc("b", 2)]);
    }

    #[test]
    fn k_zero_yields_empty() {
        let list = vec![wc("a", 1)];
        assert!(top_k_words(&list, 0).is_empty());
    }

    #[test]
    fn input_list_is_left_unchanged() {
        let list = vec![wc("b", 1), wc("a", 2)];
        let _ = top_k_words(&list, 1);
        assert_eq!(list, vec![wc("b", 1), wc("a", 2)]);
    }

    #[test]
    fn bigrams_tie_break_on_w1_then_w2() {
        let list = vec![bc("b", "x", 2), bc("a", "z", 2), bc("a", "y", 2)];
        let out = top_k_bigrams(&list, 10);
        assert_eq!(out, vec![bc("a", "y", 2), bc("a", "z", 2), bc("b", "x", 2)]);
    }
}
