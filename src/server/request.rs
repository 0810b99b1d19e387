//! HTTP request schema and the HTTP validation profile (spec.md §6.1).

use serde::Deserialize;

use crate::config::Config;
use crate::core::{AnalyzeOptions, Page, Pipeline};

use super::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    #[serde(default = "default_true")]
    pub include_bigrams: bool,
    #[serde(default = "default_true")]
    pub per_page_results: bool,
    #[serde(default)]
    pub pipeline: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self { include_bigrams: true, per_page_results: true, pipeline: None }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub options: RequestOptions,
    pub pages: Vec<Page>,
}

/// Validates `req` against the HTTP profile (spec.md §6.1) and turns it
/// into the core's `(pages, options)` call shape.
pub fn validate(req: AnalyzeRequest, config: &Config) -> Result<(Vec<Page>, AnalyzeOptions), ApiError> {
    if req.pages.is_empty() {
        return Err(ApiError::BadRequest("'pages' must not be empty".into()));
    }
    if req.pages.len() > config.http_max_pages {
        return Err(ApiError::PayloadTooLarge("too many pages".into()));
    }

    let mut total_bytes: usize = 0;
    for page in &req.pages {
        let len = page.text.len();
        if len > config.http_max_page_chars {
            return Err(ApiError::PayloadTooLarge("page text too large".into()));
        }
        total_bytes = total_bytes.saturating_add(len);
        if total_bytes > config.http_max_total_chars {
            return Err(ApiError::PayloadTooLarge("payload too large".into()));
        }
    }

    let pipeline = match req.options.pipeline.as_deref() {
        Some(s) => Pipeline::from_str_strict(s)
            .ok_or_else(|| ApiError::BadRequest("invalid options.pipeline (use auto|string|id)".into()))?,
        None => Pipeline::Auto,
    };

    let opts = AnalyzeOptions {
        include_bigrams: req.options.include_bigrams,
        per_page_results: req.options.per_page_results,
        top_k: config.default_top_k,
        domain: req.domain,
        pipeline,
        deadline: None,
    };

    Ok((req.pages, opts))
}
