//! Placeholder expression parsing.

mod cursor;
mod expr;
mod numeric;
#[cfg(test)]
pub(crate) mod test_support;

pub use cursor::MAX_NESTING;
pub(crate) use cursor::Cursor;
pub(crate) use expr::deref;

use crate::deref::Deref;
use crate::errors::ParseError;

/// Parse one expression from the start of `input`.
///
/// Leading and trailing spaces and tabs are consumed; parsing stops at the
/// first character that cannot continue the expression, which is returned
/// with the rest of the input so the caller can check for its own
/// terminator.
///
/// # Errors
/// Returns [`ParseError::Syntax`] when no expression starts at `input` or a
/// committed construct (a group, a `$` continuation, a numeric literal) is
/// malformed, [`ParseError::Numeric`] when a decimal literal is outside
/// the binary64 range, and [`ParseError::TooDeep`] when groups, `$`
/// continuations or juxtaposed terms nest beyond [`MAX_NESTING`].
///
/// # Examples
/// ```
/// use tmpl_deref::parse_deref;
/// let (tree, rest) = parse_deref(" show $ Data.Map.size items }")
///     .expect("example ensures the expression parses");
/// assert_eq!(tree.to_string(), "show (Data.Map.size items)");
/// assert_eq!(rest, "}");
/// ```
pub fn parse_deref(input: &str) -> Result<(Deref, &str), ParseError> {
    let mut cursor = Cursor::new(input);
    let tree = deref(&mut cursor)?;
    Ok((tree, cursor.rest()))
}
