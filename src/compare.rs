use crate::error::{Error, Result};
use crate::lines::{LinePair, LinePairs};
use std::io::{BufRead, Write};
use std::path::Path;

/// Report column width; longer lines are kept whole.
pub const PAD_WIDTH: usize = 76;
pub const END_OF_FILE: &str = "(end of file)";
const DIFFERENT: &str = " -- DIFFERENT --";

pub fn pad_line(text: &str) -> String {
    let trimmed = text.trim_end();
    let missing = PAD_WIDTH.saturating_sub(trimmed.chars().count());
    let mut out = String::with_capacity(trimmed.len() + missing);
    out.push_str(trimmed);
    out.extend(std::iter::repeat(' ').take(missing));
    out
}

/// Report text for one side of a step.
pub fn display(side: Option<&str>) -> &str {
    side.unwrap_or(END_OF_FILE)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Both sides rendered as end of file on the same step.
    BothEnded,
    /// The good log ran out while the bad one still had lines.
    GoodEnded { line: usize },
    /// The bad log ran out while the good one still had lines.
    BadEnded { line: usize },
    Diverged { line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareSummary {
    /// Report lines written as matches, including a final end-of-file match.
    pub matched: usize,
    pub outcome: Outcome,
}

enum State {
    Running,
    Done(Outcome),
}

/// Walk both logs and write the match report until the first divergence or
/// the end of either log.
pub fn compare_traces<A: BufRead, B: BufRead, W: Write>(
    pairs: &mut LinePairs<A, B>,
    report: &mut W,
    report_path: &Path,
) -> Result<CompareSummary> {
    let mut matched = 0;
    let mut state = State::Running;

    loop {
        match state {
            State::Done(outcome) => return Ok(CompareSummary { matched, outcome }),
            State::Running => {
                let pair = pairs.next_pair()?;
                let good = pad_line(display(pair.good.as_deref()));
                let bad = pad_line(display(pair.bad.as_deref()));

                if good == bad {
                    writeln!(report, "{}", good).map_err(|e| Error::io(report_path, e))?;
                    matched += 1;
                    if pair.any_ended() {
                        state = State::Done(Outcome::BothEnded);
                    }
                } else {
                    write!(report, "{good}{DIFFERENT}\nGOOD: {good}\nBAD:  {bad}\n")
                        .map_err(|e| Error::io(report_path, e))?;
                    tracing::debug!(
                        line = pair.number,
                        good = %good.trim_end(),
                        bad = %bad.trim_end(),
                        "logs differ"
                    );
                    state = State::Done(mismatch(&pair));
                }
            }
        }
    }
}

fn mismatch(pair: &LinePair) -> Outcome {
    match (&pair.good, &pair.bad) {
        (None, _) => Outcome::GoodEnded { line: pair.number },
        (_, None) => Outcome::BadEnded { line: pair.number },
        _ => Outcome::Diverged { line: pair.number },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::TraceLines;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run(good: &str, bad: &str) -> (String, CompareSummary) {
        let mut pairs = LinePairs::new(
            TraceLines::new(Cursor::new(good.as_bytes().to_vec()), "good.log"),
            TraceLines::new(Cursor::new(bad.as_bytes().to_vec()), "bad.log"),
        );
        let mut out = Vec::new();
        let summary = compare_traces(&mut pairs, &mut out, Path::new("compare.log")).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_pad_short_line() {
        let padded = pad_line("abc  \t\n");
        assert_eq!(padded.len(), PAD_WIDTH);
        assert!(padded.starts_with("abc "));
        assert!(padded[3..].chars().all(|c| c == ' '));
    }

    #[test]
    fn test_pad_long_line_is_not_truncated() {
        let long = "x".repeat(90);
        assert_eq!(pad_line(&long), long);
    }

    #[test]
    fn test_pad_counts_characters() {
        assert_eq!(pad_line("é").chars().count(), PAD_WIDTH);
    }

    #[test]
    fn test_identical_logs() {
        let (out, summary) = run("a\nb\n", "a\nb\n");
        let expected = format!("{}\n{}\n{}\n", pad_line("a"), pad_line("b"), pad_line(END_OF_FILE));
        assert_eq!(out, expected);
        assert_eq!(
            summary,
            CompareSummary {
                matched: 3,
                outcome: Outcome::BothEnded
            }
        );
    }

    #[test]
    fn test_trailing_whitespace_is_ignored() {
        let (_, summary) = run("a   \n", "a\n");
        assert_eq!(summary.outcome, Outcome::BothEnded);
    }

    #[test]
    fn test_divergence_block() {
        let (out, summary) = run("a\nb\nc\n", "a\nx\nc\n");
        let b = pad_line("b");
        let x = pad_line("x");
        assert_eq!(
            out,
            format!("{}\n{b} -- DIFFERENT --\nGOOD: {b}\nBAD:  {x}\n", pad_line("a"))
        );
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.outcome, Outcome::Diverged { line: 2 });
    }

    #[test]
    fn test_good_ends_first() {
        let (out, summary) = run("a\n", "a\nb\n");
        let eof = pad_line(END_OF_FILE);
        assert!(out.ends_with(&format!("GOOD: {eof}\nBAD:  {}\n", pad_line("b"))));
        assert_eq!(summary.outcome, Outcome::GoodEnded { line: 2 });
    }

    #[test]
    fn test_bad_ends_first() {
        let (out, summary) = run("a\nb\n", "a\n");
        assert_eq!(out.lines().count(), 4);
        assert_eq!(summary.outcome, Outcome::BadEnded { line: 2 });
    }

    #[test]
    fn test_empty_logs() {
        let (out, summary) = run("", "");
        assert_eq!(out, format!("{}\n", pad_line(END_OF_FILE)));
        assert_eq!(summary.matched, 1);
    }

    #[test]
    fn test_literal_end_of_file_text_matches_end_of_stream() {
        let (_, summary) = run("a\n(end of file)\n", "a\n");
        assert_eq!(summary.outcome, Outcome::BothEnded);
    }
}
