//! The analysis core: tokenization, filtering, counting, aggregation, and
//! Top-K selection, plus the orchestration that ties them together.

pub mod aggregate;
pub mod analyze;
pub mod counter;
pub mod error;
pub mod filter;
pub mod stopwords;
pub mod tokenizer;
pub mod topk;
pub mod types;

pub use analyze::analyze;
pub use error::{AnalysisError, CoreResult};
pub use stopwords::StopwordSet;
pub use types::{
    AnalysisMeta, AnalysisResult, AnalyzeOptions, BigramCount, DomainResult, Page, PageResult,
    Pipeline, TextMetrics, TokenStats, WordCount,
};
