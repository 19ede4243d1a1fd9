pub mod compare;
pub mod config;
pub mod error;
pub mod layout;
pub mod lines;
pub mod logging;
pub mod normalize;

use compare::CompareSummary;
use error::{Error, Result};
use lines::{LinePairs, TraceLines};
use normalize::NormalizeStats;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

fn open(path: &Path) -> Result<TraceLines<BufReader<File>>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    Ok(TraceLines::new(BufReader::new(file), path))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    Ok(BufWriter::new(file))
}

/// Normalize the known-good log at `input` into `output`, replacing it.
pub fn normalize_file(input: &Path, output: &Path) -> Result<NormalizeStats> {
    let mut lines = open(input)?;
    let mut out = create(output)?;
    let stats = normalize::normalize_trace(&mut lines, &mut out, output)?;
    out.flush().map_err(|e| Error::io(output, e))?;
    Ok(stats)
}

/// Compare the normalized good log against the candidate and write the
/// report to `report`, replacing it.
pub fn compare_files(good: &Path, bad: &Path, report: &Path) -> Result<CompareSummary> {
    let mut pairs = LinePairs::new(open(good)?, open(bad)?);
    let mut out = create(report)?;
    let summary = compare::compare_traces(&mut pairs, &mut out, report)?;
    out.flush().map_err(|e| Error::io(report, e))?;
    Ok(summary)
}
