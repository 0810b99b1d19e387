//! CLI/batch request parsing (spec.md §6.1's "Batch/CLI" profile).
//!
//! Unlike the HTTP profile, root may be a bare page array, there is no
//! size limit, and `options.pipeline` is ignored — the CLI selects the
//! pipeline via its own `--pipeline` flag.

use serde::Deserialize;

use crate::core::Page;

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliOptions {
    #[serde(default = "default_true")]
    pub include_bigrams: bool,
    #[serde(default = "default_true")]
    pub per_page_results: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self { include_bigrams: true, per_page_results: true }
    }
}

#[derive(Debug, Deserialize)]
struct CliRequestObject {
    #[serde(default)]
    domain: Option<String>,
    #[serde(default)]
    options: CliOptions,
    pages: Vec<Page>,
}

/// Parses either a root object (full request shape) or a bare root array
/// (just the `pages` list) into `(domain, options, pages)`.
pub fn parse(json: &str) -> serde_json::Result<(Option<String>, CliOptions, Vec<Page>)> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.is_array() {
        let pages: Vec<Page> = serde_json::from_value(value)?;
        return Ok((None, CliOptions::default(), pages));
    }
    let obj: CliRequestObject = serde_json::from_value(value)?;
    Ok((obj.domain, obj.options, obj.pages))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array_root() {
        let json = r#"[{"text": "hallo welt"}]"#;
        let (domain, options, pages) = parse(json).unwrap();
        assert!(domain.is_none());
        assert!(options.include_bigrams);
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn parses_object_root_with_options() {
        let json = r#"{"domain": "d", "options": {"includeBigrams": false}, "pages": [{"text": "a"}]}"#;
        let (domain, options, pages) = parse(json).unwrap();
        assert_eq!(domain.as_deref(), Some("d"));
        assert!(!options.include_bigrams);
        assert!(options.per_page_results);
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn rejects_missing_pages_field() {
        let json = r#"{"domain": "d"}"#;
        assert!(parse(json).is_err());
    }
}
