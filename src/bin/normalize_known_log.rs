//! normalize_known_log — reduce the known-good trace to the candidate's columns
//!
//! Reads `known_good.log`, writes `normalized_good.log` (names overridable by
//! config file).

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracediff::config::Config;

#[derive(Parser)]
#[command(
    name = "normalize_known_log",
    about = "Normalize the known-good trace for comparison"
)]
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

    let stats = tracediff::normalize_file(&config.known_good, &config.normalized_good)
        .unwrap_or_else(|e| die(&e.to_string()));

    tracing::info!(
        read = stats.read,
        comments = stats.comments,
        written = stats.written,
        illegal = stats.illegal,
        "normalized {} -> {}",
        config.known_good.display(),
        config.normalized_good.display()
    );
}
