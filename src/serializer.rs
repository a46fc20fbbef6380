//! Structural serializer — recursive formatter that emits lists, mappings,
//! and strings with correct indentation and inline-vs-block decisions.

use crate::error::{Error, Result};
use crate::key;
use crate::model::{Mapping, Value};
use crate::options::{EmitOptions, SortKeys};

/// Serialize `value` to a `String` per `options`.
pub fn emit_string(value: &Value, options: &EmitOptions) -> Result<String> {
    if options.indent == 0 {
        return Err(Error::syntax_no_line("indent must be at least 1"));
    }
    let mut out = String::new();
    write_root(value, options, &mut out)?;
    Ok(out)
}

fn write_root(value: &Value, options: &EmitOptions, out: &mut String) -> Result<()> {
    tracing::trace!(indent = options.indent, "emitting root value");
    match value {
        Value::String(s) => write_string_block(s, 0, out),
        Value::List(items) => write_list_body(items, 0, options, out)?,
        Value::Mapping(map) => write_mapping_body(map, 0, options, out)?,
    }
    Ok(())
}

fn write_string_block(s: &str, col: usize, out: &mut String) {
    let indent = " ".repeat(col);
    for line in s.split('\n') {
        out.push_str(&indent);
        if line.is_empty() {
            out.push('>');
        } else {
            out.push_str("> ");
            out.push_str(line);
        }
        out.push('\n');
    }
}

fn write_value_block(value: &Value, col: usize, options: &EmitOptions, out: &mut String) -> Result<()> {
    match value {
        Value::String(s) => write_string_block(s, col, out),
        Value::List(items) => write_list_body(items, col, options, out)?,
        Value::Mapping(map) => write_mapping_body(map, col, options, out)?,
    }
    Ok(())
}

fn write_list_body(items: &[Value], col: usize, options: &EmitOptions, out: &mut String) -> Result<()> {
    let indent = " ".repeat(col);
    for item in items {
        match item {
            Value::String(s) if !s.contains('\n') => {
                out.push_str(&indent);
                if s.is_empty() {
                    out.push('-');
                } else {
                    out.push_str("- ");
                    out.push_str(s);
                }
                out.push('\n');
            }
            _ => {
                out.push_str(&indent);
                out.push_str("-\n");
                write_value_block(item, col + options.indent, options, out)?;
            }
        }
    }
    Ok(())
}

fn write_mapping_body(map: &Mapping, col: usize, options: &EmitOptions, out: &mut String) -> Result<()> {
    let indent = " ".repeat(col);
    let entries = ordered_entries(map, &options.sort_keys);
    for (k, v) in entries {
        match v {
            Value::String(s) if !s.contains('\n') && key::is_bare_safe(k) => {
                out.push_str(&indent);
                out.push_str(k);
                if s.is_empty() {
                    out.push(':');
                } else {
                    out.push_str(": ");
                    out.push_str(s);
                }
                out.push('\n');
            }
            _ => {
                if key::is_bare_safe(k) {
                    out.push_str(&indent);
                    out.push_str(k);
                    out.push_str(":\n");
                } else {
                    for line in key::render_multiline(k) {
                        out.push_str(&indent);
                        out.push_str(&line);
                        out.push('\n');
                    }
                }
                write_value_block(v, col + options.indent, options, out)?;
            }
        }
    }
    Ok(())
}

fn ordered_entries<'a>(map: &'a Mapping, sort: &SortKeys) -> Vec<(&'a String, &'a Value)> {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    match sort {
        SortKeys::Off => {}
        SortKeys::Natural => entries.sort_by(|a, b| a.0.cmp(b.0)),
        SortKeys::Custom(cmp) => entries.sort_by(|a, b| cmp(a.0, b.0)),
    }
    entries
}
