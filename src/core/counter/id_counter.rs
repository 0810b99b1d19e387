//! Id-interned word and bigram counting (spec.md §4.4).
//!
//! Words are counted in a dense array indexed by `id - 1`, grown by
//! doubling. Bigrams are counted in an open-addressed table keyed by the
//! packed `(id1 << 32) | id2` pair, hashed with a Murmur3-style 64-bit
//! finalizer, using the same 0.7-load-factor doubling policy as
//! [`super::dict::Dictionary`]. Both walks apply the same no-bridging rule
//! as [`super::string_counter`]: a filtered-out token resets the `prev` id
//! register so no bigram spans the gap.

use super::dict::Dictionary;
use super::super::filter::should_drop;
use super::super::stopwords::StopwordSet;
use super::super::types::{BigramCount, WordCount};

fn next_pow2(x: usize) -> usize {
    let mut p = 1usize;
    while p < x {
        p <<= 1;
    }
    p
}

fn mix64(mut x: u64) -> u64 {
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51afd7ed558ccd);
    x ^= x >> 33;
    x = x.wrapping_mul(0xc4ceb9fe1a85ec53);
    x ^= x >> 33;
    x
}

struct WordCounts {
    counts: Vec<u32>,
}

impl WordCounts {
    fn with_capacity(initial_ids: usize) -> Self {
        Self { counts: vec![0u32; initial_ids.max(16)] }
    }

    fn ensure(&mut self, id: u32) {
        let need = id as usize;
        if need <= self.counts.len() {
            return;
        }
        let mut new_cap = self.counts.len();
        while new_cap < need {
            new_cap *= 2;
        }
        self.counts.resize(new_cap, 0);
    }

    fn inc(&mut self, id: u32) {
        self.ensure(id);
        self.counts[id as usize - 1] += 1;
    }

    fn get(&self, id: u32) -> u32 {
        self.counts.get(id as usize - 1).copied().unwrap_or(0)
    }
}

#[derive(Clone, Copy, Default)]
struct BigEntry {
    used: bool,
    key: u64,
    count: u32,
}

struct IdBigrams {
    entries: Vec<BigEntry>,
    cap: usize,
    size: usize,
}

impl IdBigrams {
    fn with_capacity(initial_cap: usize) -> Self {
        let cap = next_pow2(initial_cap.max(64));
        Self { entries: vec![BigEntry::default(); cap], cap, size: 0 }
    }

    fn inc(&mut self, id1: u32, id2: u32) {
        if id1 == 0 || id2 == 0 {
            return;
        }
        if self.size * 10 >= self.cap * 7 {
            self.grow();
        }

        let key = ((id1 as u64) << 32) | id2 as u64;
        let mask = self.cap - 1;
        let mut pos = (mix64(key) as usize) & mask;

        loop {
            if !self.entries[pos].used {
                break;
            }
            if self.entries[pos].key == key {
                self.entries[pos].count += 1;
                return;
            }
            pos = (pos + 1) & mask;
        }

        self.entries[pos] = BigEntry { used: true, key, count: 1 };
        self.size += 1;
    }

    fn grow(&mut self) {
        let new_cap = self.cap * 2;
        let old = std::mem::replace(&mut self.entries, vec![BigEntry::default(); new_cap]);
        self.cap = new_cap;
        self.size = 0;

        let mask = self.cap - 1;
        for entry in old.into_iter().filter(|e| e.used) {
            let mut pos = (mix64(entry.key) as usize) & mask;
            while self.entries[pos].used {
                pos = (pos + 1) & mask;
            }
            self.entries[pos] = entry;
            self.size += 1;
        }
    }
}

/// Counts word and bigram frequencies for one page's raw token sequence
/// using the id-interned pipeline. `dict` accumulates the vocabulary seen
/// by this call and is owned by the caller so its lifetime matches
/// spec.md's per-page scoping decision.
pub fn count(
    raw_tokens: &[String],
    stopwords: &StopwordSet,
    dict: &mut Dictionary,
    want_bigrams: bool,
) -> (Vec<WordCount>, Option<Vec<BigramCount>>) {
    let mut words = WordCounts::with_capacity(1024);
    let mut bigrams = IdBigrams::with_capacity(raw_tokens.len() * 2 + 64);

    let mut prev: u32 = 0;
    for tok in raw_tokens {
        if should_drop(tok, stopwords) {
            prev = 0;
            continue;
        }

        let id = dict.get_or_add(tok);
        words.inc(id);

        if want_bigrams {
            if prev != 0 {
                bigrams.inc(prev, id);
            }
            prev = id;
        }
    }

    let mut word_list = Vec::with_capacity(dict.len());
    for id in 1..=dict.len() as u32 {
        let c = words.get(id);
        if c == 0 {
            continue;
        }
        if let Some(w) = dict.word(id) {
            word_list.push(WordCount { word: w.to_string(), count: c as u64 });
        }
    }

    let bigram_list = want_bigrams.then(|| {
        let mut out = Vec::with_capacity(bigrams.size);
        for entry in bigrams.entries.iter().filter(|e| e.used) {
            let id1 = (entry.key >> 32) as u32;
            let id2 = (entry.key & 0xffff_ffff) as u32;
            if let (Some(w1), Some(w2)) = (dict.word(id1), dict.word(id2)) {
                out.push(BigramCount { w1: w1.to_string(), w2: w2.to_string(), count: entry.count as u64 });
            }
        }
        out
    });

    (word_list, bigram_list)
}
