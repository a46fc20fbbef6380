//! Key renderer — decides whether a mapping key is safe to emit bare, or
//! must be rendered as one or more `: FRAG` continuation lines.

/// Whether a key can be written as the left side of a bare `KEY: VALUE`
/// object item without being re-lexed as something else on the way back in.
pub fn is_bare_safe(key: &str) -> bool {
    if key.is_empty() {
        return true;
    }
    if key.starts_with(' ') || key.ends_with(' ') {
        return false;
    }
    if key.contains('\n') {
        return false;
    }
    if key.starts_with('#')
        || key.starts_with('\'')
        || key.starts_with('"')
        || key.starts_with("- ")
        || key.starts_with("> ")
        || key.starts_with(": ")
    {
        return false;
    }
    if key.contains(": ") {
        return false;
    }
    true
}

/// Render `key` as multiline-key lines (without indentation — the caller
/// prefixes each with the container's indent). Always safe, used whenever
/// `is_bare_safe` is false.
pub fn render_multiline(key: &str) -> Vec<String> {
    key.split('\n')
        .map(|segment| {
            if segment.is_empty() {
                ":".to_string()
            } else {
                format!(": {}", segment)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_key_is_bare_safe() {
        assert!(is_bare_safe("name"));
        assert!(is_bare_safe(""));
    }

    #[test]
    fn leading_trailing_space_is_not_bare_safe() {
        assert!(!is_bare_safe(" name"));
        assert!(!is_bare_safe("name "));
    }

    #[test]
    fn sigil_prefixes_are_not_bare_safe() {
        assert!(!is_bare_safe("#comment-like"));
        assert!(!is_bare_safe("- item-like"));
        assert!(!is_bare_safe("> string-like"));
        assert!(!is_bare_safe(": key-like"));
    }

    #[test]
    fn embedded_colon_space_is_not_bare_safe() {
        assert!(!is_bare_safe("a: b"));
    }

    #[test]
    fn newline_forces_multiline() {
        assert!(!is_bare_safe("line1\nline2"));
        assert_eq!(render_multiline("line1\nline2"), vec![": line1", ": line2"]);
    }

    #[test]
    fn empty_segment_renders_bare_colon() {
        assert_eq!(render_multiline(""), vec![":"]);
        assert_eq!(render_multiline("a\n\nb"), vec![": a", ":", ": b"]);
    }
}
