//! Batch/CLI entry point (spec.md §6.3).

use clap::Parser;

use pagefreq::cli::{self, Cli};

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    std::process::exit(cli::run(cli));
}
