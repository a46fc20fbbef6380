//! Structural parser — recursive descent over a [`LineStream`], dispatched
//! by the next line's kind and guarded by indentation depth.

use crate::classifier::LineKind;
use crate::error::{Error, Result};
use crate::model::{Mapping, Value};
use crate::options::{DuplicateKeyPolicy, ParseOptions};
use crate::stream::{LineStream, RawLines};

/// Parse a complete document from a line stream. Returns `None` for an
/// empty input (no non-ignorable lines at all).
pub fn parse_document<L: RawLines>(
    lines: L,
    options: &ParseOptions,
) -> Result<Option<Value>> {
    let mut stream = LineStream::new(lines);
    match stream.peek()? {
        None => Ok(None),
        Some(_) => Ok(Some(read_value(&mut stream, 0, options)?)),
    }
}

/// Dispatch on the next line's kind to read one value at `depth`.
fn read_value<L: RawLines>(
    stream: &mut LineStream<L>,
    depth: usize,
    options: &ParseOptions,
) -> Result<Value> {
    match stream.peek()? {
        Some(line) => {
            let lineno = line.lineno;
            match &line.kind {
                LineKind::StringFragment { .. } => {
                    tracing::trace!(depth, lineno, "descending into string");
                    read_string(stream, depth)
                }
                LineKind::ListItem { .. } => {
                    tracing::trace!(depth, lineno, "descending into list");
                    read_list(stream, depth, options)
                }
                LineKind::ObjectItem { .. } | LineKind::ObjectKeyContinuation { .. } => {
                    tracing::trace!(depth, lineno, "descending into mapping");
                    read_mapping(stream, depth, options)
                }
                LineKind::Comment => unreachable!("comments are filtered by the line stream"),
            }
        }
        None => Err(Error::syntax_no_line("unrecognized line")),
    }
}

/// Does the stream have a line at a depth strictly greater than `depth`?
/// Used to decide between an empty value and a recursive nested value for
/// list items and object items with no inline payload.
fn has_deeper_line<L: RawLines>(stream: &mut LineStream<L>, depth: usize) -> Result<bool> {
    Ok(match stream.peek()? {
        Some(line) => line.depth > depth,
        None => false,
    })
}

fn read_list<L: RawLines>(
    stream: &mut LineStream<L>,
    depth: usize,
    options: &ParseOptions,
) -> Result<Value> {
    let mut items = Vec::new();
    loop {
        let line = match stream.peek()? {
            Some(line) if line.depth >= depth => line,
            _ => break,
        };
        if line.depth != depth {
            return Err(Error::syntax(
                "invalid indentation",
                line.lineno,
                Some(depth),
            ));
        }
        let inline = match &line.kind {
            LineKind::ListItem { inline } => inline.clone(),
            _ => return Err(Error::syntax("expected list item", line.lineno, None)),
        };
        stream.next()?;
        match inline {
            Some(text) => items.push(Value::String(text)),
            None => {
                if has_deeper_line(stream, depth)? {
                    items.push(read_value(stream, depth_of_next(stream)?, options)?);
                } else {
                    items.push(Value::String(String::new()));
                }
            }
        }
    }
    Ok(Value::List(items))
}

/// The depth of the next line, used immediately after confirming one exists
/// and lies deeper than the current container.
fn depth_of_next<L: RawLines>(stream: &mut LineStream<L>) -> Result<usize> {
    Ok(stream.peek()?.expect("caller checked presence").depth)
}

fn read_mapping<L: RawLines>(
    stream: &mut LineStream<L>,
    depth: usize,
    options: &ParseOptions,
) -> Result<Value> {
    let mut map = Mapping::new();
    loop {
        let line = match stream.peek()? {
            Some(line) if line.depth >= depth => line,
            _ => break,
        };
        if line.depth != depth {
            return Err(Error::syntax(
                "invalid indentation",
                line.lineno,
                Some(depth),
            ));
        }

        match &line.kind {
            LineKind::ObjectItem { key, inline } => {
                let key = key.clone();
                let inline = inline.clone();
                let lineno = line.lineno;
                stream.next()?;
                let value = match inline {
                    Some(text) => Value::String(text),
                    None => {
                        if has_deeper_line(stream, depth)? {
                            read_value(stream, depth_of_next(stream)?, options)?
                        } else {
                            Value::String(String::new())
                        }
                    }
                };
                insert_with_policy(&mut map, key, value, lineno, options)?;
            }
            LineKind::ObjectKeyContinuation { .. } => {
                let (key, lineno) = read_multiline_key(stream, depth)?;
                if !has_deeper_line(stream, depth)? {
                    return Err(Error::syntax(
                        "expected value after multiline object key",
                        lineno,
                        None,
                    ));
                }
                let value = read_value(stream, depth_of_next(stream)?, options)?;
                insert_with_policy(&mut map, key, value, lineno, options)?;
            }
            _ => return Err(Error::syntax("expected object item", line.lineno, None)),
        }
    }
    Ok(Value::Mapping(map))
}

fn insert_with_policy(
    map: &mut Mapping,
    key: String,
    value: Value,
    lineno: usize,
    options: &ParseOptions,
) -> Result<()> {
    if map.contains_key(&key) {
        match options.on_duplicate {
            DuplicateKeyPolicy::Error => {
                return Err(Error::syntax("duplicate key", lineno, None));
            }
            DuplicateKeyPolicy::UseFirst => {
                tracing::trace!(key = %key, lineno, "duplicate key ignored (use-first)");
            }
            DuplicateKeyPolicy::UseLast => {
                tracing::trace!(key = %key, lineno, "duplicate key overwrote previous value (use-last)");
                map.insert(key, value);
            }
        }
    } else {
        map.insert(key, value);
    }
    Ok(())
}

/// Consume consecutive `: FRAG` lines at exactly `depth`, concatenating their
/// payloads with `\n` between fragments. Returns the key and the line number
/// of the first fragment (for error reporting).
fn read_multiline_key<L: RawLines>(
    stream: &mut LineStream<L>,
    depth: usize,
) -> Result<(String, usize)> {
    let mut segments = Vec::new();
    let mut first_lineno = None;
    loop {
        let line = match stream.peek()? {
            Some(line) if line.depth == depth => line,
            _ => break,
        };
        let fragment = match &line.kind {
            LineKind::ObjectKeyContinuation { fragment } => fragment.clone(),
            _ => break,
        };
        if first_lineno.is_none() {
            first_lineno = Some(line.lineno);
        }
        stream.next()?;
        segments.push(fragment.unwrap_or_default());
    }
    Ok((segments.join("\n"), first_lineno.unwrap_or(0)))
}

/// Consume consecutive `> FRAG` lines at or deeper than `depth`, requiring
/// every fragment (including the first) to share exactly `depth`.
fn read_string<L: RawLines>(stream: &mut LineStream<L>, depth: usize) -> Result<Value> {
    let mut segments = Vec::new();
    loop {
        let line = match stream.peek()? {
            Some(line) if line.depth >= depth => line,
            _ => break,
        };
        match &line.kind {
            LineKind::StringFragment { fragment } => {
                if line.depth != depth {
                    return Err(Error::syntax(
                        "invalid indentation",
                        line.lineno,
                        Some(depth),
                    ));
                }
                let fragment = fragment.clone();
                stream.next()?;
                segments.push(fragment.unwrap_or_default());
            }
            _ => break,
        }
    }
    Ok(Value::String(segments.join("\n")))
}
