//! Byte-offset cursor with explicit save and restore for backtracking.

use crate::errors::{ParseError, syntax_error};

/// Deepest nesting of groups, `$` continuations and applications the
/// parser accepts.
///
/// Every tree returned by the parser is at most this many nodes deep.
pub const MAX_NESTING: usize = 256;

/// Saved cursor position, restored with [`Cursor::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Mark(usize);

#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            depth: 0,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed input.
    pub(crate) fn rest(&self) -> &'a str {
        self.src.get(self.pos..).unwrap_or_default()
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume `expected` if it is the next character.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `expected` or report it as missing.
    pub(crate) fn expect_char(
        &mut self,
        expected: char,
        description: &'static str,
    ) -> Result<(), ParseError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(description))
        }
    }

    /// Consume the longest prefix whose characters satisfy `pred`.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, ch)| !pred(ch))
            .map_or(rest.len(), |(idx, _)| idx);
        self.pos += len;
        rest.get(..len).unwrap_or_default()
    }

    /// Text consumed since `mark`.
    pub(crate) fn since(&self, mark: Mark) -> &'a str {
        self.src.get(mark.0..self.pos).unwrap_or_default()
    }

    pub(crate) fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    pub(crate) fn reset(&mut self, mark: Mark) {
        self.pos = mark.0;
    }

    /// Enter one level of recursive parsing.
    pub(crate) fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(self.too_deep());
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(crate) fn too_deep(&self) -> ParseError {
        ParseError::TooDeep {
            limit: MAX_NESTING,
            position: self.pos,
        }
    }

    /// Build a syntax error describing what was expected at the current
    /// position.
    pub(crate) fn error(&self, expected: &'static str) -> ParseError {
        syntax_error(expected, self.pos, self.peek())
    }
}
