//! Recursive-descent grammar for placeholder expressions.
//!
//! ```text
//! deref      := blank* term continuation* blank*
//! term       := '(' deref ')' | numeric | ident
//! continuation := delim '$' deref     -- ends the expression
//!               | delim term          -- juxtaposition
//! delim      := [ \t]+ | &'('
//! ```
//!
//! Groups and `$` continuations recurse; both they and the height of the
//! folded application tree are capped at [`MAX_NESTING`].

use super::cursor::{Cursor, MAX_NESTING};
use super::numeric::numeric;
use crate::deref::Deref;
use crate::errors::ParseError;
use crate::ident::{Ident, is_ident_char, is_module_char};

fn is_blank(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

fn skip_blanks(cursor: &mut Cursor<'_>) {
    cursor.eat_while(is_blank);
}

/// Parse a full expression, including surrounding spaces and tabs.
pub(crate) fn deref(cursor: &mut Cursor<'_>) -> Result<Deref, ParseError> {
    nested(cursor).map(|(tree, _)| tree)
}

/// A parsed subtree and the node count of its longest root-to-leaf path.
type Parsed = (Deref, usize);

/// Parse an expression one recursion level below the caller.
fn nested(cursor: &mut Cursor<'_>) -> Result<Parsed, ParseError> {
    cursor.descend()?;
    let parsed = expression(cursor);
    cursor.ascend();
    parsed
}

fn expression(cursor: &mut Cursor<'_>) -> Result<Parsed, ParseError> {
    skip_blanks(cursor);
    let mut lhs = term(cursor)?;
    loop {
        if dollar(cursor) {
            let rhs = nested(cursor)?;
            return apply(cursor, lhs, rhs);
        }
        match juxtaposed(cursor)? {
            Some(arg) => lhs = apply(cursor, lhs, arg)?,
            None => break,
        }
    }
    skip_blanks(cursor);
    Ok(lhs)
}

/// Build an application whose height stays within [`MAX_NESTING`].
fn apply(cursor: &Cursor<'_>, func: Parsed, arg: Parsed) -> Result<Parsed, ParseError> {
    let height = 1 + func.1.max(arg.1);
    if height > MAX_NESTING {
        return Err(cursor.too_deep());
    }
    Ok((Deref::apply(func.0, arg.0), height))
}

/// A continuation separator: blanks, or an opening parenthesis seen but not
/// consumed.
fn delimiter(cursor: &mut Cursor<'_>) -> bool {
    !cursor.eat_while(is_blank).is_empty() || cursor.peek() == Some('(')
}

/// Consume `delim '$'`, leaving the cursor untouched when absent.
fn dollar(cursor: &mut Cursor<'_>) -> bool {
    let mark = cursor.mark();
    if delimiter(cursor) && cursor.eat('$') {
        true
    } else {
        cursor.reset(mark);
        false
    }
}

/// Speculatively parse `delim term`.
///
/// Grammar mismatches anywhere inside the term rewind to before the
/// delimiter so the caller can stop accumulating.
fn juxtaposed(cursor: &mut Cursor<'_>) -> Result<Option<Parsed>, ParseError> {
    let mark = cursor.mark();
    if !delimiter(cursor) {
        cursor.reset(mark);
        return Ok(None);
    }
    match term(cursor) {
        Ok(arg) => Ok(Some(arg)),
        Err(err) if err.is_recoverable() => {
            log::trace!("continuation abandoned: {err}");
            cursor.reset(mark);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn term(cursor: &mut Cursor<'_>) -> Result<Parsed, ParseError> {
    match cursor.peek() {
        Some('(') => group(cursor),
        Some(ch) if ch == '-' || ch.is_ascii_digit() => numeric(cursor).map(|leaf| (leaf, 1)),
        _ => ident(cursor).map(|leaf| (leaf, 1)),
    }
}

fn group(cursor: &mut Cursor<'_>) -> Result<Parsed, ParseError> {
    cursor.expect_char('(', "opening '('")?;
    let inner = nested(cursor)?;
    cursor.expect_char(')', "closing ')'")?;
    Ok(inner)
}

/// Parse `(Upper module_char* '.')* ident_char+`.
fn ident(cursor: &mut Cursor<'_>) -> Result<Deref, ParseError> {
    let mut modules = Vec::new();
    while let Some(segment) = module_segment(cursor) {
        modules.push(segment.to_owned());
    }
    let name = cursor.eat_while(is_ident_char);
    if name.is_empty() {
        return Err(cursor.error("identifier"));
    }
    Ok(Deref::qualified(modules, Ident::from_parsed(name)))
}

/// Match one module segment including its trailing `.`, or consume nothing.
fn module_segment<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let mark = cursor.mark();
    if cursor.peek().is_some_and(char::is_uppercase) {
        cursor.bump();
        cursor.eat_while(is_module_char);
        let segment = cursor.since(mark);
        if cursor.eat('.') {
            return Some(segment);
        }
    }
    cursor.reset(mark);
    None
}
