//! Shared data types for the analysis core.

use serde::{Deserialize, Serialize};

/// One piece of input text with optional identifiers.
///
/// `text` is borrowed for the duration of analysis; the core never retains
/// a reference past the call that produced its result.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub text: String,
}

/// Token count and char-length stats produced alongside a token sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenStats {
    pub word_count: u64,
    pub word_char_count: u64,
}

/// A word and its occurrence count. `count` is always >= 1 while owned by a
/// produced list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// An ordered pair of adjacent valid tokens and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigramCount {
    pub w1: String,
    pub w2: String,
    pub count: u64,
}

/// Per-page or aggregated text metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextMetrics {
    pub char_count: u64,
    pub word_count: u64,
    pub word_char_count: u64,
}

impl TextMetrics {
    pub fn add(&mut self, other: TextMetrics) {
        self.char_count += other.char_count;
        self.word_count += other.word_count;
        self.word_char_count += other.word_char_count;
    }
}

/// Which counting strategy to use for one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pipeline {
    #[default]
    Auto,
    String,
    Id,
}

impl Pipeline {
    pub fn as_str(self) -> &'static str {
        match self {
            Pipeline::Auto => "auto",
            Pipeline::String => "string",
            Pipeline::Id => "id",
        }
    }

    pub fn from_str_strict(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(Pipeline::Auto),
            "string" => Some(Pipeline::String),
            "id" => Some(Pipeline::Id),
            _ => None,
        }
    }
}

/// One page's section of the final result, carrying its input identifiers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub char_count: u64,
    pub word_count: u64,
    pub word_char_count: u64,
    pub words: Vec<WordCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bigrams: Option<Vec<BigramCount>>,
}

/// Cross-page aggregated result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResult {
    pub char_count: u64,
    pub word_count: u64,
    pub word_char_count: u64,
    pub words: Vec<WordCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bigrams: Option<Vec<BigramCount>>,
}

/// Metadata describing how one analysis ran.
///
/// `runtime_ms_total` and `peak_rss_kib` are not known to the core itself
/// (spec.md §1 excludes process-level memory introspection and transport
/// timing from its scope); they default to zero and are filled in by the
/// HTTP/CLI callers after `analyze` returns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub pages_received: u64,
    pub runtime_ms_analyze: f64,
    pub runtime_ms_total: f64,
    pub pipeline_requested: &'static str,
    pub pipeline_used: &'static str,
    pub peak_rss_kib: u64,
}

/// The complete result of one analysis, before transport-level fields
/// (`runtimeMsTotal`, `peakRssKiB`) are filled in by the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub meta: AnalysisMeta,
    pub domain_result: DomainResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_results: Option<Vec<PageResult>>,
}

/// Rounds a millisecond duration to 3 decimal places, as spec.md §6.2 requires.
pub fn round_ms(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Options accepted by [`super::analyze::analyze`]. `deadline`, when set, is
/// checked at page and stage boundaries (spec.md §4.8).
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub include_bigrams: bool,
    pub per_page_results: bool,
    pub top_k: u32,
    pub domain: Option<String>,
    pub pipeline: Pipeline,
    pub deadline: Option<std::time::Instant>,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            include_bigrams: true,
            per_page_results: true,
            top_k: 20,
            domain: None,
            pipeline: Pipeline::Auto,
            deadline: None,
        }
    }
}
