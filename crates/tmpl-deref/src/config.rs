//! Sigil configuration for the placeholder scanners.
//!
//! The crate keeps no process-wide settings; dialects that remap their
//! sigils hold a [`Sigils`] value and scan through it.

use crate::deref::Deref;
use crate::errors::ParseError;
use crate::scanner::{Scanned, UrlRef, parse_int, parse_url, parse_var};

/// Characters that introduce placeholders in template text.
///
/// # Examples
/// ```
/// use tmpl_deref::{Scanned, Sigils};
/// let sigils = Sigils {
///     var: '$',
///     ..Sigils::default()
/// };
/// let (scanned, _) = sigils.parse_var("${count}").expect("placeholder is valid");
/// assert!(matches!(scanned, Scanned::Parsed(_)));
/// assert!(sigils.parse_var("#{count}").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sigils {
    /// Variable interpolation, `#` by default.
    pub var: char,
    /// URL interpolation, `@` by default.
    pub url: char,
    /// Modifier following the URL sigil, `?` by default.
    pub url_query: char,
    /// Embedding of another template, `^` by default.
    pub int: char,
}

impl Sigils {
    /// The sigils shared by the markup, stylesheet and script dialects.
    pub const STANDARD: Self = Self {
        var: '#',
        url: '@',
        url_query: '?',
        int: '^',
    };

    /// Scan a variable placeholder introduced by [`Sigils::var`].
    ///
    /// # Errors
    /// See [`parse_var`].
    pub fn parse_var<'a>(&self, input: &'a str) -> Result<(Scanned<Deref>, &'a str), ParseError> {
        parse_var(self.var, input)
    }

    /// Scan a URL placeholder introduced by [`Sigils::url`].
    ///
    /// # Errors
    /// See [`parse_url`].
    pub fn parse_url<'a>(&self, input: &'a str) -> Result<(Scanned<UrlRef>, &'a str), ParseError> {
        parse_url(self.url, self.url_query, input)
    }

    /// Scan an embedding placeholder introduced by [`Sigils::int`].
    ///
    /// # Errors
    /// See [`parse_int`].
    pub fn parse_int<'a>(&self, input: &'a str) -> Result<(Scanned<Deref>, &'a str), ParseError> {
        parse_int(self.int, input)
    }
}

impl Default for Sigils {
    fn default() -> Self {
        Self::STANDARD
    }
}
