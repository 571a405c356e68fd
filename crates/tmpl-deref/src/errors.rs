//! Error types shared by the parser, scanner and identifier modules.

use std::fmt;
use thiserror::Error;

/// Context for a grammar mismatch at a specific input position.
///
/// # Examples
/// ```
/// use tmpl_deref::SyntaxErrorInfo;
/// let info = SyntaxErrorInfo::new("closing '}'", 7, Some(')'));
/// assert_eq!(info.position, 7);
/// assert_eq!(
///     info.to_string(),
///     "expected closing '}' at byte 7 (zero-based), found ')'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Description of the construct the parser required.
    pub expected: &'static str,
    /// Byte offset into the text handed to the entry point.
    pub position: usize,
    /// Character found at `position`, or `None` at end of input.
    pub found: Option<char>,
}

impl SyntaxErrorInfo {
    /// Create a new description of a grammar mismatch.
    ///
    /// # Examples
    /// ```
    /// use tmpl_deref::SyntaxErrorInfo;
    /// let info = SyntaxErrorInfo::new("identifier", 0, None);
    /// assert_eq!(info.expected, "identifier");
    /// ```
    #[must_use]
    pub fn new(expected: &'static str, position: usize, found: Option<char>) -> Self {
        Self {
            expected,
            position,
            found,
        }
    }
}

impl fmt::Display for SyntaxErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} at byte {} (zero-based)",
            self.expected, self.position
        )?;
        match self.found {
            Some(ch) => write!(f, ", found {ch:?}"),
            None => f.write_str(", found end of input"),
        }
    }
}

/// Errors surfaced while parsing a placeholder expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not match the grammar at the reported position.
    #[error("{0}")]
    Syntax(SyntaxErrorInfo),
    /// A literal matched the digit grammar but has no numeric value.
    #[error("numeric literal `{literal}` at byte {position} (zero-based) cannot be represented")]
    Numeric {
        /// Source text of the literal, sign included.
        literal: String,
        /// Byte offset of the literal's first character.
        position: usize,
    },
    /// Groups, `$` continuations or juxtaposed terms nest beyond `limit`.
    #[error("expression nested too deeply (limit {limit}) at byte {position} (zero-based)")]
    TooDeep {
        /// The nesting limit that was exceeded.
        limit: usize,
        /// Byte offset where the limit was crossed.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset the error refers to.
    ///
    /// # Examples
    /// ```
    /// use tmpl_deref::parse_deref;
    /// let Err(err) = parse_deref("(a") else {
    ///     panic!("unclosed group should fail");
    /// };
    /// assert_eq!(err.position(), 2);
    /// ```
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Syntax(info) => info.position,
            Self::Numeric { position, .. } | Self::TooDeep { position, .. } => *position,
        }
    }

    /// Whether a speculative parse may recover from this error by
    /// backtracking.
    pub(crate) fn is_recoverable(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }
}

pub(crate) fn syntax_error(expected: &'static str, position: usize, found: Option<char>) -> ParseError {
    ParseError::Syntax(SyntaxErrorInfo::new(expected, position, found))
}

/// Reasons a string cannot be used as an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentError {
    /// Identifiers need at least one character.
    #[error("identifier must not be empty")]
    Empty,
    /// Only alphanumerics, `_` and `'` may appear in an identifier.
    #[error("invalid character {ch:?} in identifier at byte {position} (zero-based)")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Byte offset of `ch` within the candidate identifier.
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_syntax_error_with_found_character() {
        let info = SyntaxErrorInfo::new("identifier", 4, Some('$'));
        assert_eq!(
            info.to_string(),
            "expected identifier at byte 4 (zero-based), found '$'"
        );
    }

    #[test]
    fn formats_syntax_error_at_end_of_input() {
        let info = SyntaxErrorInfo::new("digit", 2, None);
        assert_eq!(
            info.to_string(),
            "expected digit at byte 2 (zero-based), found end of input"
        );
    }

    #[test]
    fn forwards_syntax_display() {
        let info = SyntaxErrorInfo::new("digit", 1, None);
        let err = ParseError::Syntax(info.clone());
        assert_eq!(err.to_string(), info.to_string());
        assert_eq!(err.position(), 1);
    }

    #[test]
    fn numeric_errors_are_not_recoverable() {
        let err = ParseError::Numeric {
            literal: "1.0".into(),
            position: 3,
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.position(), 3);
        assert!(err.to_string().contains("`1.0`"));
        assert!(syntax_error("digit", 0, None).is_recoverable());
    }

    #[test]
    fn depth_errors_are_not_recoverable() {
        let err = ParseError::TooDeep {
            limit: 4,
            position: 9,
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.position(), 9);
        assert_eq!(
            err.to_string(),
            "expression nested too deeply (limit 4) at byte 9 (zero-based)"
        );
    }

    #[test]
    fn formats_identifier_errors() {
        assert_eq!(IdentError::Empty.to_string(), "identifier must not be empty");
        let err = IdentError::InvalidChar { ch: '.', position: 3 };
        assert_eq!(
            err.to_string(),
            "invalid character '.' in identifier at byte 3 (zero-based)"
        );
    }
}
