//! Stopword/too-short/numeric filtering applied after tokenization
//! (spec.md §4.2).
//!
//! The predicate is shared by both the in-place filter (string pipeline's
//! word counting, which only ever needs the filtered sequence) and the
//! id pipeline's bigram walk, which consults the same predicate per token
//! without allocating a filtered copy (spec.md invariant 4 requires both
//! pipelines observe the identical token-level decision).

use super::stopwords::StopwordSet;

const MIN_TOKEN_LEN_CODEPOINTS: usize = 2;

fn is_all_ascii_digits(tok: &str) -> bool {
    !tok.is_empty() && tok.bytes().all(|b| b.is_ascii_digit())
}

/// True if `tok` should be dropped: too short, all-digits, or a stopword.
pub fn should_drop(tok: &str, stopwords: &StopwordSet) -> bool {
    tok.chars().count() < MIN_TOKEN_LEN_CODEPOINTS
        || is_all_ascii_digits(tok)
        || stopwords.contains(tok)
}

/// Returns a new `Vec` holding only the tokens that survive filtering,
/// preserving order. `tokens` is left unchanged.
pub fn filter_copy(tokens: &[String], stopwords: &StopwordSet) -> Vec<String> {
    tokens.iter().filter(|t| !should_drop(t, stopwords)).cloned().collect()
}

/// Filters `tokens` in place, preserving order of the surviving tokens.
pub fn filter_in_place(tokens: &mut Vec<String>, stopwords: &StopwordSet) {
    tokens.retain(|t| !should_drop(t, stopwords));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sw(words: &[&str]) -> StopwordSet {
        // StopwordSet has no public insert; build via a temp file instead.
        let contents = words.join("\n");
        let mut path = std::env::temp_dir();
        path.push(format!("pagefreq-filter-test-{:p}", contents.as_str()));
        std::fs::write(&path, contents).unwrap();
        let loaded = StopwordSet::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        loaded
    }

    #[test]
    fn drops_short_tokens() {
        let set = sw(&[]);
        assert!(should_drop("a", &set));
        assert!(!should_drop("ab", &set));
    }

    #[test]
    fn drops_numeric_tokens() {
        let set = sw(&[]);
        assert!(should_drop("2025", &set));
        assert!(!should_drop("2025x", &set));
    }

    #[test]
    fn drops_stopwords() {
        let set = sw(&["the", "and"]);
        assert!(should_drop("the", &set));
        assert!(!should_drop("cat", &set));
    }

    #[test]
    fn filter_copy_preserves_order_and_leaves_input_untouched() {
        let set = sw(&["the"]);
        let toks = vec!["the".to_string(), "cat".to_string(), "sat".to_string()];
        let out = filter_copy(&toks, &set);
        assert_eq!(out, vec!["cat".to_string(), "sat".to_string()]);
        assert_eq!(toks.len(), 3);
    }

    #[test]
    fn filter_in_place_drops_matching_tokens() {
        let set = sw(&["the"]);
        let mut toks = vec!["the".to_string(), "cat".to_string(), "1".to_string()];
        filter_in_place(&mut toks, &set);
        assert_eq!(toks, vec!["cat".to_string()]);
    }
}
