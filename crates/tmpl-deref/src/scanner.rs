//! Sigil-delimited placeholder recognition.
//!
//! Template dialects call these scanners whenever their literal-text lexer
//! meets a sigil. Each scanner consumes the sigil and reports either the
//! literal text to emit in its place or the expression between `{` and `}`.

use crate::config::Sigils;
use crate::deref::Deref;
use crate::errors::ParseError;
use crate::parser::{Cursor, deref};

/// Outcome of scanning at a sigil.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scanned<T> {
    /// Not a placeholder; emit this text instead.
    Literal(String),
    /// A placeholder expression.
    Parsed(T),
}

impl<T> Scanned<T> {
    /// Return the parsed payload, if any.
    #[must_use]
    pub fn parsed(self) -> Option<T> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Literal(_) => None,
        }
    }
}

/// Expression found by the URL scanner together with its modifier flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRef {
    /// The expression between the braces.
    pub deref: Deref,
    /// Set when the query modifier (`?` in `@?{...}`) followed the sigil.
    pub with_query: bool,
}

fn literal<T>(text: impl Into<String>) -> Scanned<T> {
    let text = text.into();
    log::trace!("sigil scanned as literal text {text:?}");
    Scanned::Literal(text)
}

/// Consume the sigil and an optional `\` escape.
///
/// Returns `true` when the escape was present.
fn sigil_and_escape(cursor: &mut Cursor<'_>, sigil: char) -> Result<bool, ParseError> {
    cursor.expect_char(sigil, "placeholder sigil")?;
    Ok(cursor.eat('\\'))
}

/// Parse `'{' deref '}'` when the next character opens a brace.
///
/// Once the brace is consumed the expression and the closing brace are
/// mandatory.
fn braced(cursor: &mut Cursor<'_>) -> Result<Option<Deref>, ParseError> {
    if !cursor.eat('{') {
        return Ok(None);
    }
    let tree = deref(cursor)?;
    cursor.expect_char('}', "closing '}'")?;
    Ok(Some(tree))
}

/// Scan a variable placeholder such as `#{expr}`.
///
/// `#\` yields the sigil itself, and a sigil at end of input or right
/// before a line break yields empty text so dialects can use a trailing
/// sigil as a line-continuation marker.
///
/// # Errors
/// Returns [`ParseError`] when `input` does not start with `sigil`, or when
/// an opened brace does not hold a well-formed expression followed by `}`.
///
/// # Examples
/// ```
/// use tmpl_deref::{Scanned, parse_var};
/// let (scanned, rest) = parse_var('%', "%\\{x}").expect("escape is valid");
/// assert_eq!(scanned, Scanned::Literal("%".into()));
/// assert_eq!(rest, "{x}");
/// ```
pub fn parse_var(sigil: char, input: &str) -> Result<(Scanned<Deref>, &str), ParseError> {
    let mut cursor = Cursor::new(input);
    if sigil_and_escape(&mut cursor, sigil)? {
        return Ok((literal(sigil), cursor.rest()));
    }
    if let Some(tree) = braced(&mut cursor)? {
        return Ok((Scanned::Parsed(tree), cursor.rest()));
    }
    let scanned = if cursor.at_end() || matches!(cursor.peek(), Some('\r' | '\n')) {
        literal("")
    } else {
        literal(sigil)
    };
    Ok((scanned, cursor.rest()))
}

/// Scan a URL placeholder such as `@{route}` or `@?{(route, params)}`.
///
/// The `query` modifier is only recognised directly after the sigil, and
/// the escape `@\` is only recognised without it.
///
/// # Errors
/// Returns [`ParseError`] when `input` does not start with `sigil`, or when
/// an opened brace does not hold a well-formed expression followed by `}`.
pub fn parse_url(
    sigil: char,
    query: char,
    input: &str,
) -> Result<(Scanned<UrlRef>, &str), ParseError> {
    let mut cursor = Cursor::new(input);
    if sigil_and_escape(&mut cursor, sigil)? {
        return Ok((literal(sigil), cursor.rest()));
    }
    let with_query = cursor.eat(query);
    if let Some(deref) = braced(&mut cursor)? {
        return Ok((Scanned::Parsed(UrlRef { deref, with_query }), cursor.rest()));
    }
    let text = if with_query {
        format!("{sigil}{query}")
    } else {
        sigil.to_string()
    };
    Ok((literal(text), cursor.rest()))
}

/// Scan an embedding placeholder such as `^{widget}`.
///
/// # Errors
/// Returns [`ParseError`] when `input` does not start with `sigil`, or when
/// an opened brace does not hold a well-formed expression followed by `}`.
pub fn parse_int(sigil: char, input: &str) -> Result<(Scanned<Deref>, &str), ParseError> {
    let mut cursor = Cursor::new(input);
    if sigil_and_escape(&mut cursor, sigil)? {
        return Ok((literal(sigil), cursor.rest()));
    }
    let scanned = match braced(&mut cursor)? {
        Some(tree) => Scanned::Parsed(tree),
        None => literal(sigil),
    };
    Ok((scanned, cursor.rest()))
}

/// [`parse_var`] with the standard `#` sigil.
///
/// # Errors
/// See [`parse_var`].
///
/// # Examples
/// ```
/// use tmpl_deref::{Scanned, parse_hash};
/// let (scanned, rest) = parse_hash("#{name}!").expect("placeholder is valid");
/// assert_eq!(scanned.parsed().map(|tree| tree.to_string()), Some("name".into()));
/// assert_eq!(rest, "!");
/// ```
pub fn parse_hash(input: &str) -> Result<(Scanned<Deref>, &str), ParseError> {
    Sigils::STANDARD.parse_var(input)
}

/// [`parse_url`] with the standard `@` sigil and `?` modifier.
///
/// # Errors
/// See [`parse_url`].
pub fn parse_at(input: &str) -> Result<(Scanned<UrlRef>, &str), ParseError> {
    Sigils::STANDARD.parse_url(input)
}

/// [`parse_int`] with the standard `^` sigil.
///
/// # Errors
/// See [`parse_int`].
pub fn parse_caret(input: &str) -> Result<(Scanned<Deref>, &str), ParseError> {
    Sigils::STANDARD.parse_int(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::test_support::local;
    use rstest::rstest;

    fn scan<T>(result: Result<(Scanned<T>, &str), ParseError>) -> (Scanned<T>, String) {
        match result {
            Ok((scanned, rest)) => (scanned, rest.to_owned()),
            Err(err) => panic!("scanner should succeed: {err}"),
        }
    }

    #[test]
    fn hash_parses_braced_expression() {
        let (scanned, rest) = scan(parse_hash("#{name}"));
        assert_eq!(scanned, Scanned::Parsed(local("name")));
        assert!(rest.is_empty());
    }

    #[test]
    fn hash_escape_consumes_backslash_only() {
        let (scanned, rest) = scan(parse_hash("#\\x"));
        assert_eq!(scanned, Scanned::Literal("#".into()));
        assert_eq!(rest, "x");
    }

    #[rstest]
    #[case("#", "")]
    #[case("#\n<p>", "\n<p>")]
    #[case("#\r\n", "\r\n")]
    fn trailing_hash_is_empty_text(#[case] input: &str, #[case] remaining: &str) {
        let (scanned, rest) = scan(parse_hash(input));
        assert_eq!(scanned, Scanned::Literal(String::new()));
        assert_eq!(rest, remaining);
    }

    #[rstest]
    #[case("#x", "x")]
    #[case("# {a}", " {a}")]
    fn bare_hash_is_literal(#[case] input: &str, #[case] remaining: &str) {
        let (scanned, rest) = scan(parse_hash(input));
        assert_eq!(scanned, Scanned::Literal("#".into()));
        assert_eq!(rest, remaining);
    }

    #[test]
    fn at_reads_query_modifier() {
        let (scanned, _) = scan(parse_at("@?{name}"));
        assert_eq!(
            scanned,
            Scanned::Parsed(UrlRef {
                deref: local("name"),
                with_query: true
            })
        );
        let (scanned, _) = scan(parse_at("@{name}"));
        assert_eq!(
            scanned,
            Scanned::Parsed(UrlRef {
                deref: local("name"),
                with_query: false
            })
        );
    }

    #[rstest]
    #[case("@name", "@", "name")]
    #[case("@?name", "@?", "name")]
    #[case("@\\{x}", "@", "{x}")]
    #[case("@?\\x", "@?", "\\x")]
    #[case("@", "@", "")]
    fn at_literal_fallbacks(#[case] input: &str, #[case] text: &str, #[case] remaining: &str) {
        let (scanned, rest) = scan(parse_at(input));
        assert_eq!(scanned, Scanned::Literal(text.into()));
        assert_eq!(rest, remaining);
    }

    #[rstest]
    #[case("^{w}", Scanned::Parsed(local("w")), "")]
    #[case("^\\{w}", Scanned::Literal("^".into()), "{w}")]
    #[case("^w", Scanned::Literal("^".into()), "w")]
    #[case("^", Scanned::Literal("^".into()), "")]
    #[case("^\n", Scanned::Literal("^".into()), "\n")]
    fn caret_outcomes(
        #[case] input: &str,
        #[case] expected: Scanned<Deref>,
        #[case] remaining: &str,
    ) {
        let (scanned, rest) = scan(parse_caret(input));
        assert_eq!(scanned, expected);
        assert_eq!(rest, remaining);
    }

    #[rstest]
    #[case("#{name")]
    #[case("#{}")]
    #[case("#{ a b ) }")]
    #[case("@?{")]
    #[case("^{-}")]
    fn opened_brace_commits(#[case] input: &str) {
        let result = match input.chars().next() {
            Some('@') => parse_at(input).map(|_| ()),
            Some('^') => parse_caret(input).map(|_| ()),
            _ => parse_hash(input).map(|_| ()),
        };
        assert!(result.is_err(), "{input:?} should fail");
    }

    #[test]
    fn rejects_input_without_sigil() {
        let Err(err) = parse_hash("x") else {
            panic!("missing sigil should fail");
        };
        assert_eq!(
            err.to_string(),
            "expected placeholder sigil at byte 0 (zero-based), found 'x'"
        );
    }

    #[test]
    fn reports_error_positions_relative_to_sigil() {
        let Err(err) = parse_hash("#{ a b ) }") else {
            panic!("stray parenthesis should fail");
        };
        assert_eq!(err.position(), 7);
    }
}
