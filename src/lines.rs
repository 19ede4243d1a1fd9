use crate::error::{Error, Result};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// One line of a log with its terminator stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub content: String,
    /// False only for a final line with no trailing newline.
    pub terminated: bool,
}

/// Line reader over a text log. `\r\n` and `\n` both end a line.
pub struct TraceLines<R> {
    reader: R,
    path: PathBuf,
    line: usize,
}

impl<R: BufRead> TraceLines<R> {
    /// `path` is only used to label errors.
    pub fn new(reader: R, path: impl AsRef<Path>) -> Self {
        TraceLines {
            reader,
            path: path.as_ref().to_path_buf(),
            line: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line
    }

    pub fn next_raw(&mut self) -> Result<Option<RawLine>> {
        let mut buf = String::new();
        let n = self
            .reader
            .read_line(&mut buf)
            .map_err(|e| Error::read(&self.path, self.line + 1, e))?;
        if n == 0 {
            return Ok(None);
        }
        self.line += 1;

        let terminated = buf.ends_with('\n');
        if terminated {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(RawLine {
            content: buf,
            terminated,
        }))
    }

    /// Next line's content, or `None` at end of stream.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.next_raw()?.map(|l| l.content))
    }
}

impl<R: BufRead> Iterator for TraceLines<R> {
    type Item = Result<RawLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_raw().transpose()
    }
}

/// One lockstep step over two logs. `None` means that side has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePair {
    /// 1-based step number.
    pub number: usize,
    pub good: Option<String>,
    pub bad: Option<String>,
}

impl LinePair {
    pub fn any_ended(&self) -> bool {
        self.good.is_none() || self.bad.is_none()
    }
}

/// Walks a good and a bad log together. Both sides are read on every step,
/// even after one of them has ended.
pub struct LinePairs<A, B> {
    good: TraceLines<A>,
    bad: TraceLines<B>,
    number: usize,
}

impl<A: BufRead, B: BufRead> LinePairs<A, B> {
    pub fn new(good: TraceLines<A>, bad: TraceLines<B>) -> Self {
        LinePairs {
            good,
            bad,
            number: 0,
        }
    }

    pub fn next_pair(&mut self) -> Result<LinePair> {
        let good = self.good.next_line()?;
        let bad = self.bad.next_line()?;
        self.number += 1;
        Ok(LinePair {
            number: self.number,
            good,
            bad,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lines(text: &str) -> TraceLines<Cursor<Vec<u8>>> {
        TraceLines::new(Cursor::new(text.as_bytes().to_vec()), "test.log")
    }

    #[test]
    fn test_strips_terminators() {
        let mut l = lines("a\nb\r\nc");
        assert_eq!(
            l.next_raw().unwrap(),
            Some(RawLine {
                content: "a".into(),
                terminated: true
            })
        );
        assert_eq!(l.next_line().unwrap(), Some("b".to_string()));
        assert_eq!(
            l.next_raw().unwrap(),
            Some(RawLine {
                content: "c".into(),
                terminated: false
            })
        );
        assert_eq!(l.next_raw().unwrap(), None);
        assert_eq!(l.line_number(), 3);
    }

    #[test]
    fn test_blank_line_is_not_end_of_stream() {
        let mut l = lines("\n");
        assert_eq!(l.next_line().unwrap(), Some(String::new()));
        assert_eq!(l.next_line().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let mut l = TraceLines::new(Cursor::new(b"ok\n\xff\xfe\n".to_vec()), "bad.log");
        assert_eq!(l.next_line().unwrap(), Some("ok".to_string()));
        match l.next_line() {
            Err(Error::Encoding { path, line }) => {
                assert_eq!(path, PathBuf::from("bad.log"));
                assert_eq!(line, 2);
            }
            other => panic!("expected encoding error, got {:?}", other),
        }
    }

    #[test]
    fn test_iterator_collects() {
        let all: Vec<String> = lines("x\ny\n")
            .map(|r| r.map(|l| l.content))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(all, vec!["x", "y"]);
    }

    #[test]
    fn test_pairs_keep_reading_both_sides() {
        let mut pairs = LinePairs::new(lines("a\n"), lines("a\nb\n"));
        let first = pairs.next_pair().unwrap();
        assert_eq!(first.number, 1);
        assert!(!first.any_ended());

        let second = pairs.next_pair().unwrap();
        assert_eq!(second.good, None);
        assert_eq!(second.bad, Some("b".to_string()));
        assert!(second.any_ended());
    }
}
