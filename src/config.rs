//! Application configuration management.
//!
//! Centralizes environment-variable loading into one strongly-typed
//! `Config`, so the HTTP and CLI binaries don't scatter `std::env::var`
//! calls through their handlers.

use std::{env, fmt};

use once_cell::sync::Lazy;

static CONFIG: Lazy<Config> = Lazy::new(|| Config::load().expect("failed to load configuration"));

/// Runtime settings loaded from environment variables (spec.md §6.4).
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port.
    pub port: u16,

    /// Path to the stopword resource (spec.md §6.5).
    pub stopwords_file: String,

    /// HTTP validation profile, max pages per request.
    pub http_max_pages: usize,
    /// HTTP validation profile, max request body bytes.
    pub http_max_bytes: usize,
    /// HTTP validation profile, max summed page text bytes.
    pub http_max_total_chars: usize,
    /// HTTP validation profile, max bytes for one page's text.
    pub http_max_page_chars: usize,

    /// Auto-pipeline size cutoff in bytes (spec.md §4.8, §9).
    pub pipeline_threshold_bytes: u64,

    /// Default `top_k` for the HTTP profile (CLI has its own default of 0/full).
    pub default_top_k: u32,
}

/// Errors that can occur during configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    ParseError(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(key, err) => write!(f, "failed to parse {key}: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Returns the global configuration instance, loading it on first access.
    pub fn global() -> &'static Config {
        &CONFIG
    }

    /// Loads configuration from environment variables, applying defaults
    /// for everything except `STOPWORDS_FILE`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        fn parse_with_default<T: std::str::FromStr>(key: &'static str, default: T) -> T {
            env::var(key).ok().and_then(|s| s.parse::<T>().ok()).unwrap_or(default)
        }

        fn get_with_default(key: &'static str, default: &str) -> String {
            env::var(key).unwrap_or_else(|_| default.to_string())
        }

        Ok(Config {
            port: parse_with_default::<u16>("PORT", 8080),
            stopwords_file: get_with_default("STOPWORDS_FILE", "data/stopwords_de.txt"),
            http_max_pages: parse_with_default::<usize>("HTTP_MAX_PAGES", 100),
            http_max_bytes: parse_with_default::<usize>("HTTP_MAX_BYTES", 10 * 1024 * 1024),
            http_max_total_chars: parse_with_default::<usize>("HTTP_MAX_TOTAL_CHARS", 2 * 1024 * 1024),
            http_max_page_chars: parse_with_default::<usize>("HTTP_MAX_PAGE_CHARS", 512 * 1024),
            pipeline_threshold_bytes: parse_with_default::<u64>(
                "PIPELINE_THRESHOLD_BYTES",
                1000 * 1024,
            ),
            default_top_k: parse_with_default::<u32>("DEFAULT_TOP_K", 20),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_applies_defaults_when_env_is_unset() {
        // SAFETY: test-only env var removal, not observed by other tests
        // running concurrently on the same keys.
        for key in ["PORT", "STOPWORDS_FILE", "PIPELINE_THRESHOLD_BYTES"] {
            unsafe { env::remove_var(key) };
        }
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.stopwords_file, "data/stopwords_de.txt");
        assert_eq!(cfg.pipeline_threshold_bytes, 1000 * 1024);
    }
}
