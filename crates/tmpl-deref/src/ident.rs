//! Validated identifier tokens.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::errors::IdentError;

/// Whether `ch` may appear in an identifier.
pub(crate) fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '\''
}

/// Whether `ch` may continue a module segment such as `Data.` in `Data.map`.
pub(crate) fn is_module_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// A non-empty name made of alphanumerics, underscores and primes, not
/// starting with an ASCII digit.
///
/// Identifiers are compared by value and are immutable once built.
///
/// # Examples
/// ```
/// use tmpl_deref::Ident;
/// let ident: Ident = "user_name'".parse().expect("valid identifier");
/// assert_eq!(ident.as_str(), "user_name'");
/// assert!(!ident.is_capitalised());
/// assert!("".parse::<Ident>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ident(String);

impl Ident {
    /// Validate `name` and wrap it.
    ///
    /// # Errors
    /// Returns [`IdentError::Empty`] for an empty string and
    /// [`IdentError::InvalidChar`] for the first character outside the
    /// identifier alphabet. A leading ASCII digit is reported as invalid
    /// because the expression grammar reads it as a numeric literal.
    pub fn new(name: impl Into<String>) -> Result<Self, IdentError> {
        let name = name.into();
        if name.is_empty() {
            return Err(IdentError::Empty);
        }
        if let Some(ch) = name.chars().next().filter(char::is_ascii_digit) {
            return Err(IdentError::InvalidChar { ch, position: 0 });
        }
        if let Some((position, ch)) = name.char_indices().find(|&(_, ch)| !is_ident_char(ch)) {
            return Err(IdentError::InvalidChar { ch, position });
        }
        Ok(Self(name))
    }

    /// Wrap text the parser has already matched against the identifier
    /// grammar.
    pub(crate) fn from_parsed(name: &str) -> Self {
        debug_assert!(!name.is_empty(), "parser produced an empty identifier");
        Self(name.to_owned())
    }

    /// Access the underlying name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name starts with an upper-case letter.
    ///
    /// Capitalised names resolve to constructor references.
    #[must_use]
    pub fn is_capitalised(&self) -> bool {
        self.0.chars().next().is_some_and(char::is_uppercase)
    }

    /// Consume the identifier, returning the owned name.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ident {
    type Err = IdentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ident {
    type Error = IdentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Ident {
    type Error = IdentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Ident {
    fn borrow(&self) -> &str {
        &self.0
    }
}
