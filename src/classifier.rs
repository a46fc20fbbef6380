//! Line classification — turns one raw input line into a [`ClassifiedLine`]
//! or an [`InvalidLine`], per the line-kind table in the crate documentation.
//!
//! Hand-written scanning rather than a regex engine, matching the rest of
//! this crate's dependency-light parsing style.

/// The recognized kinds of a classified line, and the payload each carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `#...` — text after the `#`.
    Comment,
    /// `-` or `- VALUE` — the inline value, if any.
    ListItem { inline: Option<String> },
    /// `KEY:` or `KEY: VALUE` — the key and the inline value, if any.
    ObjectItem { key: String, inline: Option<String> },
    /// `:` or `: FRAG` — continuation fragment of a multiline key.
    ObjectKeyContinuation { fragment: Option<String> },
    /// `>` or `> FRAG` — continuation fragment of a multiline string.
    StringFragment { fragment: Option<String> },
}

/// A successfully classified, non-ignorable line. Blank lines are dropped by
/// the classifier; comment lines are kept only long enough for the line
/// stream to skip over them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub lineno: usize,
    pub kind: LineKind,
    pub depth: usize,
}

/// Why a line could not be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Leading whitespace contained something other than a space (e.g. a tab).
    NonSpaceIndent,
    /// The content after valid indentation matched no known line form.
    Unrecognized,
}

/// A line that could not be classified. Carries enough to build an
/// `invalid indentation` / `unrecognized line` error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLine {
    pub lineno: usize,
    pub colno: usize,
    pub reason: InvalidReason,
}

/// Result of classifying one raw line: blank lines vanish, everything else
/// becomes a classified or invalid line.
pub enum Classification {
    Blank,
    Line(ClassifiedLine),
    Invalid(InvalidLine),
}

/// Strip a single trailing line terminator (`\r\n`, `\n`, or `\r`) from `line`.
fn strip_eol(line: &str) -> &str {
    if let Some(stripped) = line.strip_suffix("\r\n") {
        stripped
    } else if let Some(stripped) = line.strip_suffix('\n') {
        stripped
    } else if let Some(stripped) = line.strip_suffix('\r') {
        stripped
    } else {
        line
    }
}

/// Split a line into its leading-space run and the rest, reporting the first
/// non-space whitespace character's offset if the indentation is invalid.
fn split_indent(line: &str) -> Result<(usize, &str), usize> {
    let bytes = line.as_bytes();
    let mut depth = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b' ' {
            depth += 1;
        } else if b.is_ascii_whitespace() {
            return Err(i);
        } else {
            break;
        }
    }
    Ok((depth, &line[depth..]))
}

/// Classify a single raw line (including its trailing terminator, if any).
pub fn classify(text: &str, lineno: usize) -> Classification {
    let content = strip_eol(text);

    if content.trim().is_empty() {
        return Classification::Blank;
    }

    // Comments are recognized before the indentation is validated: a comment's
    // own depth is always 0, so whatever precedes the '#' (tabs included) is
    // never checked against the space-only indentation rule.
    if content.trim_start().starts_with('#') {
        return Classification::Line(ClassifiedLine {
            lineno,
            kind: LineKind::Comment,
            depth: 0,
        });
    }

    let (depth, rest) = match split_indent(content) {
        Ok(v) => v,
        Err(colno) => {
            return Classification::Invalid(InvalidLine {
                lineno,
                colno,
                reason: InvalidReason::NonSpaceIndent,
            });
        }
    };

    if rest == "-" || rest.starts_with("- ") {
        return Classification::Line(ClassifiedLine {
            lineno,
            kind: LineKind::ListItem {
                inline: take_sigil_payload(rest, '-'),
            },
            depth,
        });
    }

    if rest == ">" || rest.starts_with("> ") {
        return Classification::Line(ClassifiedLine {
            lineno,
            kind: LineKind::StringFragment {
                fragment: take_sigil_payload(rest, '>'),
            },
            depth,
        });
    }

    if rest == ":" || rest.starts_with(": ") {
        return Classification::Line(ClassifiedLine {
            lineno,
            kind: LineKind::ObjectKeyContinuation {
                fragment: take_sigil_payload(rest, ':'),
            },
            depth,
        });
    }

    if let Some((key, inline)) = classify_object_item(rest) {
        return Classification::Line(ClassifiedLine {
            lineno,
            kind: LineKind::ObjectItem { key, inline },
            depth,
        });
    }

    Classification::Invalid(InvalidLine {
        lineno,
        colno: depth,
        reason: InvalidReason::Unrecognized,
    })
}

/// For a line whose content is exactly `sigil` or starts with `sigil `,
/// return the payload after the sigil: `None` for the bare form, `Some(text)`
/// (possibly empty) for the spaced form.
fn take_sigil_payload(rest: &str, sigil: char) -> Option<String> {
    let sigil_len = sigil.len_utf8();
    if rest.len() == sigil_len {
        None
    } else {
        Some(rest[sigil_len + 1..].to_string())
    }
}

/// Recognize `KEY:` or `KEY: VALUE`, where KEY is the shortest prefix (after
/// trimming trailing whitespace) before a `:` that is either at end of line
/// or followed by a single space and arbitrary trailing text.
fn classify_object_item(rest: &str) -> Option<(String, Option<String>)> {
    let bytes = rest.as_bytes();
    for i in 0..bytes.len() {
        if bytes[i] == b':' {
            let after = &rest[i + 1..];
            if after.is_empty() {
                let key = rest[..i].trim_end().to_string();
                if key.is_empty() {
                    continue;
                }
                return Some((key, None));
            }
            if let Some(value) = after.strip_prefix(' ') {
                let key = rest[..i].trim_end().to_string();
                if key.is_empty() {
                    continue;
                }
                return Some((key, Some(value.to_string())));
            }
            // `:` not followed by end-of-line or a space: not a delimiter at
            // this position, keep scanning for a later `:`.
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_ok(text: &str) -> ClassifiedLine {
        match classify(text, 1) {
            Classification::Line(l) => l,
            other => panic!("expected a classified line, got {:?}", describe(&other)),
        }
    }

    fn describe(c: &Classification) -> &'static str {
        match c {
            Classification::Blank => "blank",
            Classification::Line(_) => "line",
            Classification::Invalid(_) => "invalid",
        }
    }

    #[test]
    fn blank_line() {
        assert!(matches!(classify("   \n", 1), Classification::Blank));
        assert!(matches!(classify("\n", 1), Classification::Blank));
        assert!(matches!(classify("", 1), Classification::Blank));
    }

    #[test]
    fn comment_line() {
        let line = classify_ok("# a comment\n");
        assert_eq!(line.kind, LineKind::Comment);
        assert_eq!(line.depth, 0);
    }

    #[test]
    fn bare_list_item() {
        let line = classify_ok("-\n");
        assert_eq!(line.kind, LineKind::ListItem { inline: None });
    }

    #[test]
    fn list_item_with_value() {
        let line = classify_ok("  - hello\n");
        assert_eq!(line.depth, 2);
        assert_eq!(
            line.kind,
            LineKind::ListItem {
                inline: Some("hello".to_string())
            }
        );
    }

    #[test]
    fn object_item_no_value() {
        let line = classify_ok("key:\n");
        assert_eq!(
            line.kind,
            LineKind::ObjectItem {
                key: "key".to_string(),
                inline: None,
            }
        );
    }

    #[test]
    fn object_item_with_value() {
        let line = classify_ok("key: value\n");
        assert_eq!(
            line.kind,
            LineKind::ObjectItem {
                key: "key".to_string(),
                inline: Some("value".to_string()),
            }
        );
    }

    #[test]
    fn object_item_key_with_colon_inside_requires_space_after() {
        // "a:b: c" -- the first ':' is not followed by a space or EOL, so it
        // is not a delimiter; the second ':' followed by ' ' is.
        let line = classify_ok("a:b: c\n");
        assert_eq!(
            line.kind,
            LineKind::ObjectItem {
                key: "a:b".to_string(),
                inline: Some("c".to_string()),
            }
        );
    }

    #[test]
    fn string_fragment() {
        let line = classify_ok("> hello\n");
        assert_eq!(
            line.kind,
            LineKind::StringFragment {
                fragment: Some("hello".to_string())
            }
        );
        let bare = classify_ok(">\n");
        assert_eq!(bare.kind, LineKind::StringFragment { fragment: None });
    }

    #[test]
    fn object_key_continuation() {
        let line = classify_ok(": frag\n");
        assert_eq!(
            line.kind,
            LineKind::ObjectKeyContinuation {
                fragment: Some("frag".to_string())
            }
        );
    }

    #[test]
    fn comment_with_tab_in_indent_is_still_a_comment() {
        let line = classify_ok("\t# hi\n");
        assert_eq!(line.kind, LineKind::Comment);
        assert_eq!(line.depth, 0);
    }

    #[test]
    fn tab_indent_is_invalid() {
        match classify("\tkey: value\n", 5) {
            Classification::Invalid(InvalidLine {
                lineno,
                colno,
                reason,
            }) => {
                assert_eq!(lineno, 5);
                assert_eq!(colno, 0);
                assert_eq!(reason, InvalidReason::NonSpaceIndent);
            }
            other => panic!("expected invalid line, got {:?}", describe(&other)),
        }
    }

    #[test]
    fn unrecognized_line() {
        match classify("[inline]\n", 1) {
            Classification::Invalid(InvalidLine { reason, .. }) => {
                assert_eq!(reason, InvalidReason::Unrecognized);
            }
            other => panic!("expected invalid line, got {:?}", describe(&other)),
        }
    }
}
