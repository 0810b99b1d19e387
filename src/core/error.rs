//! Tagged failure kinds for the analysis core, per spec.md §7.

use std::fmt;

/// Failure kind produced by a core operation or by orchestration.
///
/// Each analysis fails fast on the first error: components return a
/// tagged `Result`, and the orchestrator is responsible for releasing any
/// in-flight resources (owned `Vec`s drop on their own) before propagating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Bad JSON, missing `text`, wrong field types.
    MalformedInput(String),
    /// Oversize body, too many pages, oversize text.
    LimitExceeded(String),
    /// The stopword resource could not be loaded.
    StopwordsUnavailable(String),
    /// A component ran out of memory.
    AllocationFailure(String),
    /// A counter pipeline reported failure.
    PipelineFailure(String),
    /// The configured deadline was exceeded before the analysis finished.
    Timeout,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput(m) => write!(f, "malformed input: {m}"),
            Self::LimitExceeded(m) => write!(f, "limit exceeded: {m}"),
            Self::StopwordsUnavailable(m) => write!(f, "stopwords unavailable: {m}"),
            Self::AllocationFailure(m) => write!(f, "allocation failure: {m}"),
            Self::PipelineFailure(m) => write!(f, "pipeline failure: {m}"),
            Self::Timeout => write!(f, "analysis timeout"),
        }
    }
}

impl std::error::Error for AnalysisError {}

pub type CoreResult<T> = Result<T, AnalysisError>;
