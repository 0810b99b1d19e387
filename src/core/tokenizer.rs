//! Unicode-aware tokenization (spec.md §4.1).
//!
//! A token boundary is ASCII whitespace, ASCII punctuation, or one of the
//! UTF-8 dashes U+2013/U+2014/U+2015. ASCII letters are lowercased; other
//! bytes pass through verbatim. Tokens under 2 codepoints are dropped here
//! so the raw sequence already respects the minimum-length rule that the
//! filter re-checks (spec.md §9).

use super::types::TokenStats;

const DASH_EN: u32 = 0x2013;
const DASH_EM: u32 = 0x2014;
const DASH_HORIZONTAL_BAR: u32 = 0x2015;

fn is_ascii_split_byte(b: u8) -> bool {
    b.is_ascii_whitespace() || b.is_ascii_punctuation()
}

/// Returns the byte length of the UTF-8 dash separator starting at
/// `bytes[i]`, or 0 if there isn't one there.
fn dash_len_at(bytes: &[u8], i: usize) -> usize {
    if i + 3 > bytes.len() {
        return 0;
    }
    if bytes[i] != 0xE2 || bytes[i + 1] != 0x80 {
        return 0;
    }
    match bytes[i + 2] {
        0x93 | 0x94 | 0x95 => 3,
        _ => 0,
    }
}

fn is_split_at(bytes: &[u8], i: usize) -> Option<usize> {
    let d = dash_len_at(bytes, i);
    if d > 0 {
        return Some(d);
    }
    if is_ascii_split_byte(bytes[i]) {
        return Some(1);
    }
    None
}

fn lowercase_ascii(tok: &str) -> String {
    tok.bytes()
        .map(|b| if b.is_ascii_uppercase() { b.to_ascii_lowercase() } else { b })
        .map(char::from)
        .collect()
}

/// Tokenizes `text`, returning the ordered token sequence plus `stats`.
///
/// Uses a two-pass strategy (count, then materialize) as spec.md §4.1
/// permits, which lets the output `Vec` be allocated with exact capacity.
pub fn tokenize_with_stats(text: &str) -> (Vec<String>, TokenStats) {
    let bytes = text.as_bytes();
    let len = bytes.len();

    let mut stats = TokenStats::default();
    if len == 0 {
        return (Vec::new(), stats);
    }

    let mut count = 0usize;
    let mut i = 0usize;
    while i < len {
        while i < len {
            match is_split_at(bytes, i) {
                Some(d) => i += d,
                None => break,
            }
        }
        if i >= len {
            break;
        }
        while i < len && is_split_at(bytes, i).is_none() {
            i += 1;
        }
        count += 1;
    }

    if count == 0 {
        return (Vec::new(), stats);
    }

    let mut out = Vec::with_capacity(count);
    i = 0;
    while i < len {
        while i < len {
            match is_split_at(bytes, i) {
                Some(d) => i += d,
                None => break,
            }
        }
        if i >= len {
            break;
        }
        let start = i;
        while i < len && is_split_at(bytes, i).is_none() {
            i += 1;
        }

        // `text[start..i]` is a valid UTF-8 slice: both boundaries sit on
        // ASCII split bytes, dash-separator boundaries, or the string ends.
        let raw = &text[start..i];
        let tok = lowercase_ascii(raw);

        if tok.chars().count() < 2 {
            continue;
        }

        stats.word_count += 1;
        stats.word_char_count += tok.chars().count() as u64;
        out.push(tok);
    }

    (out, stats)
}

/// Tokenizes `text`, discarding stats.
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with_stats(text).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        let (toks, stats) = tokenize_with_stats("Hallo Welt");
        assert_eq!(toks, vec!["hallo", "welt"]);
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.word_char_count, 9);
    }

    #[test]
    fn collapses_punctuation_runs() {
        let toks = tokenize("Hallo, Welt! Hallo... Welt? Ja: Hallo; Welt-okay.");
        assert_eq!(toks.len(), 8);
        assert_eq!(toks, vec!["hallo", "welt", "hallo", "welt", "ja", "hallo", "welt", "okay"]);
    }

    #[test]
    fn drops_single_codepoint_tokens() {
        let toks = tokenize("a bb c dd");
        assert_eq!(toks, vec!["bb", "dd"]);
    }

    #[test]
    fn splits_on_utf8_dashes() {
        let toks = tokenize("foo\u{2013}bar baz\u{2014}qux quux\u{2015}corge");
        assert_eq!(toks, vec!["foo", "bar", "baz", "qux", "quux", "corge"]);
    }

    #[test]
    fn only_ascii_is_case_folded() {
        let toks = tokenize("HELLO Straße");
        assert_eq!(toks, vec!["hello", "straße"]);
    }

    #[test]
    fn empty_text_yields_empty_sequence() {
        let (toks, stats) = tokenize_with_stats("");
        assert!(toks.is_empty());
        assert_eq!(stats, TokenStats::default());
    }

    #[test]
    fn shares_the_dash_lead_byte_without_matching_is_not_a_boundary() {
        // U+2026 HORIZONTAL ELLIPSIS shares the 0xE2 0x80 lead bytes with
        // the dash separators but its third byte (0xA6) doesn't match any
        // of them, so it is not a split point and stays part of the token.
        let toks = tokenize("foo\u{2026}bar");
        assert_eq!(toks, vec![format!("foo\u{2026}bar")]);
    }
}
