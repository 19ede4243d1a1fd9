use crate::error::{Error, Result};
use crate::layout;
use crate::lines::TraceLines;
use std::io::{BufRead, Write};
use std::path::Path;

const COMMENT: char = '#';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub read: usize,
    pub comments: usize,
    pub written: usize,
    pub illegal: usize,
}

/// Normalize every non-comment line of `lines` into `out`.
///
/// Each written line keeps its source terminator (written as `\n`); a final
/// unterminated line stays unterminated.
pub fn normalize_trace<R: BufRead, W: Write>(
    lines: &mut TraceLines<R>,
    out: &mut W,
    out_path: &Path,
) -> Result<NormalizeStats> {
    let mut stats = NormalizeStats::default();

    while let Some(line) = lines.next_raw()? {
        stats.read += 1;
        if line.content.starts_with(COMMENT) {
            stats.comments += 1;
            continue;
        }

        let spliced = layout::splice_line(&line.content);
        if spliced.illegal {
            stats.illegal += 1;
        }
        out.write_all(spliced.text.as_bytes())
            .map_err(|e| Error::io(out_path, e))?;
        if line.terminated {
            out.write_all(b"\n").map_err(|e| Error::io(out_path, e))?;
        }
        stats.written += 1;
    }

    Ok(stats)
}
