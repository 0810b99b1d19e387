//! Batch mode: `analyze batch [--in DIR] [--out DIR] [--no-continue]`
//! (spec.md §6.3), grounded on `cli/batch.c`'s `cli_run_batch`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde_json::json;

use crate::core::types::round_ms;
use crate::core::{self, AnalyzeOptions, Pipeline, StopwordSet};
use crate::server::metrics::peak_rss_kib;

use super::request;

pub struct BatchArgs {
    pub in_dir: PathBuf,
    pub out_dir: PathBuf,
    pub continue_on_error: bool,
}

/// Analyzes every `*.json` file under `args.in_dir`, writing
/// `<file>.result.json` into `args.out_dir`. Returns the process exit code:
/// 0 all succeeded, 1 at least one file failed (and was skipped), 2 the
/// input/output directories themselves could not be opened.
pub fn run_batch(args: BatchArgs, stopwords: &StopwordSet, threshold_bytes: u64) -> i32 {
    if let Err(e) = fs::create_dir_all(&args.out_dir) {
        eprintln!("[FATAL] cannot create/access out dir '{}': {e}", args.out_dir.display());
        return 2;
    }

    let entries = match fs::read_dir(&args.in_dir) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("[FATAL] cannot open in dir '{}': {e}", args.in_dir.display());
            return 2;
        }
    };

    let mut in_paths: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|ext| ext.to_str()) == Some("json"))
        .collect();
    in_paths.sort();

    let mut had_failure = false;

    for in_path in in_paths {
        let file_name = in_path.file_name().unwrap().to_string_lossy().to_string();
        let out_path = args.out_dir.join(format!("{file_name}.result.json"));

        let t0 = Instant::now();

        if !process_one(&in_path, &out_path, &file_name, stopwords, threshold_bytes, t0) {
            had_failure = true;
            if !args.continue_on_error {
                break;
            }
            continue;
        }

        println!("[OK] {} -> {}", in_path.display(), out_path.display());
    }

    if had_failure {
        1
    } else {
        0
    }
}

/// Runs one batch file end to end, writing either the result or an error
/// document to `out_path`. Returns `false` on any failure.
fn process_one(
    in_path: &Path,
    out_path: &Path,
    file_name: &str,
    stopwords: &StopwordSet,
    threshold_bytes: u64,
    t0: Instant,
) -> bool {
    let json = match fs::read_to_string(in_path) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("[ERR] read failed: {}", in_path.display());
            write_error_json(out_path, file_name, &format!("Could not read input file: {e}"));
            return false;
        }
    };

    let (domain, options, pages) = match request::parse(&json) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("[ERR] {file_name}: {e}");
            write_error_json(out_path, file_name, &e.to_string());
            return false;
        }
    };

    if pages.is_empty() {
        eprintln!("[ERR] {file_name}: 'pages' must not be empty");
        write_error_json(out_path, file_name, "'pages' must not be empty");
        return false;
    }

    // Batch uses full output (top_k=0) for later inspection/aggregation.
    let opts = AnalyzeOptions {
        include_bigrams: options.include_bigrams,
        per_page_results: options.per_page_results,
        top_k: 0,
        domain,
        pipeline: Pipeline::Auto,
        deadline: None,
    };

    let mut result = match core::analyze(&pages, stopwords, &opts, threshold_bytes) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[ERR] analyze {file_name}: {e}");
            write_error_json(out_path, file_name, &e.to_string());
            return false;
        }
    };

    result.meta.runtime_ms_total = round_ms(t0.elapsed().as_secs_f64() * 1000.0);
    result.meta.peak_rss_kib = peak_rss_kib();

    let body = match serde_json::to_string_pretty(&result) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("[ERR] serialize {file_name}: {e}");
            write_error_json(out_path, file_name, &e.to_string());
            return false;
        }
    };

    if let Err(e) = fs::write(out_path, &body) {
        eprintln!("[ERR] write failed: {}: {e}", out_path.display());
        write_error_json(out_path, file_name, "Could not write output file");
        return false;
    }

    true
}

/// Writes a minimal error document so batch consumers can still parse JSON.
fn write_error_json(out_path: &Path, input_name: &str, message: &str) {
    let body = json!({
        "meta": { "status": "error" },
        "input": input_name,
        "error": message,
    });
    let text = serde_json::to_string_pretty(&body).unwrap_or_default();
    let _ = fs::write(out_path, text);
}
