// error.rs - Error types for pattern compilation and match access.
//
// Three failure kinds reach the host: a pattern that does not compile, an
// argument outside its domain, and a group index outside the match. "No match"
// is not an error and never shows up here.

use std::fmt;

use regex_automata::meta::BuildError;

/// Error type for regexp compilation, matching and match-data access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegexpError {
    /// The pattern source is not a valid regular expression.
    Pattern {
        message: String,
        source: String,
        /// Byte offset into `source` reported by the parser, if any.
        offset: Option<usize>,
    },
    /// An argument is outside its valid range.
    Argument { message: String },
    /// A capture-group index outside `0..limit`.
    Index { requested: isize, limit: isize },
}

impl fmt::Display for RegexpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegexpError::Pattern {
                message,
                source,
                offset: Some(offset),
            } => write!(
                f,
                "invalid regular expression /{}/ at offset {}: {}",
                source, offset, message
            ),
            RegexpError::Pattern {
                message,
                source,
                offset: None,
            } => write!(f, "invalid regular expression /{}/: {}", source, message),
            RegexpError::Argument { message } => write!(f, "argument error: {}", message),
            RegexpError::Index { requested, .. } => {
                write!(f, "index {} out of matches", requested)
            }
        }
    }
}

impl std::error::Error for RegexpError {}

impl RegexpError {
    /// Build a `Pattern` error from a failed compile of `source`.
    pub(crate) fn from_build(source: &str, err: &BuildError) -> Self {
        match err.syntax_error() {
            Some(syntax) => {
                let (message, offset) = match syntax {
                    regex_syntax::Error::Parse(e) => {
                        (e.kind().to_string(), Some(e.span().start.offset))
                    }
                    regex_syntax::Error::Translate(e) => {
                        (e.kind().to_string(), Some(e.span().start.offset))
                    }
                    other => (other.to_string(), None),
                };
                RegexpError::Pattern {
                    message,
                    source: source.to_string(),
                    offset,
                }
            }
            None => RegexpError::Pattern {
                message: err.to_string(),
                source: source.to_string(),
                offset: None,
            },
        }
    }

    pub(crate) fn start_offset(pos: isize, len: usize) -> Self {
        RegexpError::Argument {
            message: format!("start offset {} outside of string (length {})", pos, len),
        }
    }

    /// The offending pattern offset, for `Pattern` errors that carry one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            RegexpError::Pattern { offset, .. } => *offset,
            _ => None,
        }
    }
}
