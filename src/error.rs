//! Error types for NestedText parsing and serialization

use std::fmt;

/// Errors that can occur while parsing or emitting NestedText.
#[derive(Debug)]
pub enum Error {
    /// A syntax error encountered while parsing, or a value rejected while
    /// serializing. Carries the message tag, the 1-based line number it
    /// applies to (when one exists), and a 0-based column (when the message
    /// is column-specific).
    Syntax {
        message: String,
        lineno: Option<usize>,
        colno: Option<usize>,
    },

    /// An I/O failure from the path-oriented convenience wrappers
    /// (`parse_file`, `emit_file`). Never produced by `parse_string`,
    /// `parse_stream`, `emit_string`, or `emit_stream`.
    Io(std::io::Error),
}

impl Error {
    pub(crate) fn syntax(message: impl Into<String>, lineno: usize, colno: Option<usize>) -> Self {
        Error::Syntax {
            message: message.into(),
            lineno: Some(lineno),
            colno,
        }
    }

    pub(crate) fn syntax_no_line(message: impl Into<String>) -> Self {
        Error::Syntax {
            message: message.into(),
            lineno: None,
            colno: None,
        }
    }

    /// The message tag, e.g. `"duplicate key"` or `"unrecognized line"`, for
    /// callers that want to branch on error kind without string-matching the
    /// full `Display` output.
    pub fn message(&self) -> &str {
        match self {
            Error::Syntax { message, .. } => message,
            Error::Io(_) => "I/O error",
        }
    }

    /// The 1-based line number the error applies to, if any.
    pub fn lineno(&self) -> Option<usize> {
        match self {
            Error::Syntax { lineno, .. } => *lineno,
            Error::Io(_) => None,
        }
    }

    /// The 0-based column the error applies to, if any.
    pub fn colno(&self) -> Option<usize> {
        match self {
            Error::Syntax { colno, .. } => *colno,
            Error::Io(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax {
                message,
                lineno,
                colno,
            } => match (lineno, colno) {
                (Some(lineno), Some(colno)) => {
                    write!(f, "{}: {}, column {}", lineno, message, colno)
                }
                (Some(lineno), None) => write!(f, "{}: {}", lineno, message),
                (None, _) => write!(f, "{}", message),
            },
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Syntax { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result type for NestedText operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_display_with_column() {
        let e = Error::syntax("invalid indentation", 3, Some(2));
        assert_eq!(e.to_string(), "3: invalid indentation, column 2");
        assert_eq!(e.message(), "invalid indentation");
        assert_eq!(e.lineno(), Some(3));
        assert_eq!(e.colno(), Some(2));
    }

    #[test]
    fn syntax_error_display_without_column() {
        let e = Error::syntax("duplicate key", 5, None);
        assert_eq!(e.to_string(), "5: duplicate key");
    }

    #[test]
    fn io_error_wraps_and_displays() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e: Error = io_err.into();
        assert!(e.to_string().contains("missing"));
        assert!(e.lineno().is_none());
    }
}
