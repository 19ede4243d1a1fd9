//! compare_log — walk the normalized good trace and the emulator trace in
//! lockstep and report up to the first divergence
//!
//! Reads `normalized_good.log` and `6502.log`, writes `compare.log`.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracediff::compare::Outcome;
use tracediff::config::Config;

#[derive(Parser)]
#[command(name = "compare_log", about = "Compare the emulator trace against the good trace")]
struct Cli {
    /// Config file path (default: tracediff.config.json if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    tracediff::logging::init();

    let config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| die(&e.to_string()));

    let summary =
        tracediff::compare_files(&config.normalized_good, &config.candidate, &config.report)
            .unwrap_or_else(|e| die(&e.to_string()));

    // The report file is the result; every outcome exits 0.
    match summary.outcome {
        Outcome::BothEnded => {
            tracing::info!(matched = summary.matched, "traces match to the end")
        }
        Outcome::GoodEnded { line } => {
            tracing::info!(line, "good trace ended before the candidate")
        }
        Outcome::BadEnded { line } => {
            tracing::info!(line, "candidate trace ended early")
        }
        Outcome::Diverged { line } => tracing::info!(line, "traces diverge"),
    }
    tracing::info!(report = %config.report.display(), "report written");
}
