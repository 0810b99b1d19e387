//! Single-file analysis mode: `analyze <input.json> [--out FILE] [--pipeline P] [--topk N]`
//! (spec.md §6.3), grounded on `cli/main.c`'s single-file path.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::core::types::round_ms;
use crate::core::{self, AnalyzeOptions, Pipeline, StopwordSet};
use crate::server::metrics::peak_rss_kib;

use super::request;

pub struct SingleArgs {
    pub input: PathBuf,
    pub out: Option<PathBuf>,
    pub pipeline: Pipeline,
    pub top_k: u32,
}

/// Runs one analysis over `args.input`, printing the perf key=value lines
/// and the response JSON to stdout. Returns the process exit code.
pub fn run_single(args: SingleArgs, stopwords: &StopwordSet, threshold_bytes: u64) -> i32 {
    let t_total0 = Instant::now();

    let json = match fs::read_to_string(&args.input) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("[FATAL] cannot read '{}': {e}", args.input.display());
            return 2;
        }
    };

    let (domain, options, pages) = match request::parse(&json) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("[ERR] {}: {e}", args.input.display());
            return 3;
        }
    };

    if pages.is_empty() {
        eprintln!("[ERR] {}: 'pages' must not be empty", args.input.display());
        return 3;
    }

    let opts = AnalyzeOptions {
        include_bigrams: options.include_bigrams,
        per_page_results: options.per_page_results,
        top_k: args.top_k,
        domain,
        pipeline: args.pipeline,
        deadline: None,
    };

    let mut result = match core::analyze(&pages, stopwords, &opts, threshold_bytes) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[ERR] analyze: {e}");
            return 4;
        }
    };

    result.meta.runtime_ms_total = round_ms(t_total0.elapsed().as_secs_f64() * 1000.0);
    result.meta.peak_rss_kib = peak_rss_kib();

    print_perf_lines(&result);

    let body = match serde_json::to_string_pretty(&result) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("[ERR] serialize response: {e}");
            return 4;
        }
    };
    println!("{body}");

    if let Some(out) = &args.out {
        if let Err(e) = fs::write(out, &body) {
            eprintln!("[ERR] cannot write '{}': {e}", out.display());
            return 4;
        }
    }

    0
}

/// Prints the stdout key=value perf-scraping lines (spec.md §6.3).
fn print_perf_lines(result: &core::AnalysisResult) {
    let meta = &result.meta;
    let domain_result = &result.domain_result;
    println!("runtime_ms_total={:.3}", meta.runtime_ms_total);
    println!("runtime_ms_analyze={:.3}", meta.runtime_ms_analyze);
    println!("peak_rss_kib={}", meta.peak_rss_kib);
    println!("pages_received={}", meta.pages_received);
    println!("pipeline_used={}", meta.pipeline_used);
    println!("word_count={}", domain_result.word_count);
    println!("char_count={}", domain_result.char_count);
    println!("word_char_count={}", domain_result.word_char_count);
}
