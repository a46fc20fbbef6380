//! Line stream — a one-token-lookahead cursor over classified lines.
//!
//! Hides blank and comment lines from the parser and turns an invalid line
//! into an [`Error`] at the point the stream is advanced past it, not at
//! classification time.

use crate::classifier::{classify, Classification, ClassifiedLine, InvalidLine, InvalidReason};
use crate::error::{Error, Result};

/// A source of raw lines, each including its trailing line terminator (if
/// any). The final line of input need not have one.
pub trait RawLines {
    fn next_raw(&mut self) -> Option<Result<String>>;
}

/// Drives a `LineStream` from an in-memory string, splitting on any of
/// `\n`, `\r\n`, or `\r`.
pub struct StrLines<'a> {
    rest: &'a str,
    done: bool,
}

impl<'a> StrLines<'a> {
    pub fn new(text: &'a str) -> Self {
        StrLines { rest: text, done: false }
    }
}

impl<'a> RawLines for StrLines<'a> {
    fn next_raw(&mut self) -> Option<Result<String>> {
        if self.done {
            return None;
        }
        if self.rest.is_empty() {
            self.done = true;
            return None;
        }
        let bytes = self.rest.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => {
                    let line = &self.rest[..=i];
                    self.rest = &self.rest[i + 1..];
                    return Some(Ok(line.to_string()));
                }
                b'\r' => {
                    let end = if bytes.get(i + 1) == Some(&b'\n') { i + 2 } else { i + 1 };
                    let line = &self.rest[..end];
                    self.rest = &self.rest[end..];
                    return Some(Ok(line.to_string()));
                }
                _ => i += 1,
            }
        }
        let line = self.rest;
        self.rest = "";
        self.done = true;
        Some(Ok(line.to_string()))
    }
}

/// Drives a `LineStream` from any `io::BufRead`-style line iterator, e.g.
/// `std::io::BufRead::lines()` wrapped to preserve terminators, or — as used
/// by `parse_stream` — a small adapter that reads lines including their
/// terminator so multi-line string/key fragments remain exact.
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: std::io::BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        ReaderLines { reader }
    }
}

fn to_line(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

impl<R: std::io::BufRead> RawLines for ReaderLines<R> {
    /// Reads one line, including its terminator, splitting on `\n`, `\r\n`,
    /// or a bare `\r` — the same three line endings `StrLines` accepts.
    /// `BufRead::read_line` alone only recognizes `\n`, which would merge an
    /// entire bare-CR document into a single raw line.
    fn next_raw(&mut self) -> Option<Result<String>> {
        let mut buf: Vec<u8> = Vec::new();
        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) => return Some(Err(Error::from(e))),
            };
            if available.is_empty() {
                return if buf.is_empty() {
                    None
                } else {
                    Some(to_line(buf))
                };
            }
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) if available[pos] == b'\n' => {
                    buf.extend_from_slice(&available[..=pos]);
                    self.reader.consume(pos + 1);
                    return Some(to_line(buf));
                }
                Some(pos) => {
                    // `available[pos]` is '\r'. If the following byte is
                    // already buffered, check it directly; otherwise consume
                    // the '\r' and peek one more time for a following '\n'.
                    if pos + 1 < available.len() {
                        let crlf = available[pos + 1] == b'\n';
                        let consumed = if crlf { pos + 2 } else { pos + 1 };
                        buf.extend_from_slice(&available[..consumed]);
                        self.reader.consume(consumed);
                        return Some(to_line(buf));
                    }
                    buf.extend_from_slice(&available[..=pos]);
                    self.reader.consume(pos + 1);
                    match self.reader.fill_buf() {
                        Ok(next) if next.first() == Some(&b'\n') => {
                            buf.push(b'\n');
                            self.reader.consume(1);
                        }
                        Ok(_) => {}
                        Err(e) => return Some(Err(Error::from(e))),
                    }
                    return Some(to_line(buf));
                }
                None => {
                    let len = available.len();
                    buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }
}

fn invalid_to_error(invalid: InvalidLine) -> Error {
    let message = match invalid.reason {
        InvalidReason::NonSpaceIndent => "invalid indentation",
        InvalidReason::Unrecognized => "unrecognized line",
    };
    Error::syntax(message, invalid.lineno, Some(invalid.colno))
}

/// One-token-lookahead cursor over classified lines.
pub struct LineStream<L> {
    lines: L,
    lineno: usize,
    lookahead: Option<ClassifiedLine>,
    primed: bool,
}

impl<L: RawLines> LineStream<L> {
    pub fn new(lines: L) -> Self {
        LineStream {
            lines,
            lineno: 0,
            lookahead: None,
            primed: false,
        }
    }

    /// Pull raw lines until we classify one that isn't blank, or run out.
    /// Comments are skipped here too; they never reach the parser.
    fn fill(&mut self) -> Result<()> {
        if self.primed {
            return Ok(());
        }
        loop {
            let raw = match self.lines.next_raw() {
                None => {
                    self.lookahead = None;
                    self.primed = true;
                    return Ok(());
                }
                Some(raw) => raw?,
            };
            self.lineno += 1;
            match classify(&raw, self.lineno) {
                Classification::Blank => continue,
                Classification::Line(line) => {
                    if matches!(line.kind, crate::classifier::LineKind::Comment) {
                        continue;
                    }
                    self.lookahead = Some(line);
                    self.primed = true;
                    return Ok(());
                }
                Classification::Invalid(invalid) => return Err(invalid_to_error(invalid)),
            }
        }
    }

    /// Look at the next non-ignorable line without consuming it.
    pub fn peek(&mut self) -> Result<Option<&ClassifiedLine>> {
        self.fill()?;
        Ok(self.lookahead.as_ref())
    }

    /// Consume and return the next non-ignorable line.
    pub fn next(&mut self) -> Result<Option<ClassifiedLine>> {
        self.fill()?;
        self.primed = false;
        Ok(self.lookahead.take())
    }
}
