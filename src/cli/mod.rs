//! CLI entry-point surface (spec.md §6.3), the "external collaborator"
//! batch/single-file driver sharing `core::analyze` with the HTTP service.
//! Grounded on `cli/main.c`/`cli/batch.c`.

pub mod batch;
pub mod request;
pub mod single;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::{Pipeline, StopwordSet};

#[derive(Parser)]
#[command(name = "analyze", about = "Word/bigram frequency analysis over page text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input JSON file (single-file mode; unused with `batch`)
    pub input: Option<PathBuf>,

    /// Also write the response JSON to this file
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Counting pipeline to force
    #[arg(long, default_value = "auto")]
    pub pipeline: String,

    /// Top-K cutoff per list; 0 means the full list
    #[arg(long, default_value_t = 0)]
    pub topk: u32,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze every *.json file in a directory
    Batch {
        #[arg(long, default_value = "data/batch_in")]
        r#in: PathBuf,
        #[arg(long, default_value = "data/batch_out")]
        out: PathBuf,
        /// Stop at the first file that fails instead of continuing
        #[arg(long)]
        no_continue: bool,
    },
}

/// Runs the parsed CLI, returning the process exit code (spec.md §6.3).
pub fn run(cli: Cli) -> i32 {
    let config = crate::config::Config::global();

    let stopwords: StopwordSet = match StopwordSet::load(&config.stopwords_file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[FATAL] {e}");
            return 2;
        }
    };

    match cli.command {
        Some(Commands::Batch { r#in, out, no_continue }) => batch::run_batch(
            batch::BatchArgs { in_dir: r#in, out_dir: out, continue_on_error: !no_continue },
            &stopwords,
            config.pipeline_threshold_bytes,
        ),
        None => {
            let Some(input) = cli.input else {
                eprintln!("[FATAL] missing input file (use `analyze <input.json>` or `analyze batch`)");
                return 2;
            };
            let pipeline = match Pipeline::from_str_strict(&cli.pipeline) {
                Some(p) => p,
                None => {
                    eprintln!("[FATAL] invalid --pipeline (use auto|string|id)");
                    return 2;
                }
            };
            single::run_single(
                single::SingleArgs { input, out: cli.out, pipeline, top_k: cli.topk },
                &stopwords,
                config.pipeline_threshold_bytes,
            )
        }
    }
}
