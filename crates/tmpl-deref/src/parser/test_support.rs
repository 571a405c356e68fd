//! Test helpers for asserting parser outcomes.
use super::parse_deref;
use crate::deref::Deref;
use crate::errors::ParseError;
use crate::ident::Ident;

/// Parse `input`, requiring the whole text to be consumed.
pub(crate) fn parse_ok(input: &str) -> Deref {
    match parse_deref(input) {
        Ok((tree, "")) => tree,
        Ok((_, rest)) => panic!("{input:?} left {rest:?} unparsed"),
        Err(err) => panic!("{input:?} should parse: {err}"),
    }
}

pub(crate) fn parse_err(input: &str) -> ParseError {
    match parse_deref(input) {
        Ok((tree, rest)) => panic!("{input:?} should fail, parsed {tree:?} leaving {rest:?}"),
        Err(err) => err,
    }
}

pub(crate) fn local(name: &str) -> Deref {
    Deref::local(Ident::from_parsed(name))
}
