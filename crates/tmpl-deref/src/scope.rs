//! Ordered name bindings consulted during resolution.

use derive_more::{From, IntoIterator};

use crate::ident::Ident;
use crate::resolve::ResolvedValue;

/// Caller-supplied bindings from identifiers to resolved values.
///
/// Lookup scans in insertion order and the first match wins, so a later
/// binding for the same name never shadows an earlier one.
///
/// # Examples
/// ```
/// use tmpl_deref::{Ident, ResolvedValue, Scope};
/// let name = Ident::new("x").expect("valid identifier");
/// let scope = Scope::new()
///     .with(name.clone(), ResolvedValue::Integer(1.into()))
///     .with(name, ResolvedValue::Integer(2.into()));
/// assert_eq!(scope.lookup("x"), Some(&ResolvedValue::Integer(1.into())));
/// assert_eq!(scope.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, From, IntoIterator)]
#[into_iterator(owned, ref)]
pub struct Scope(Vec<(Ident, ResolvedValue)>);

impl Scope {
    /// Create an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding, returning the extended scope.
    #[must_use]
    pub fn with(mut self, ident: Ident, value: ResolvedValue) -> Self {
        self.push(ident, value);
        self
    }

    /// Append a binding after all existing ones.
    pub fn push(&mut self, ident: Ident, value: ResolvedValue) {
        self.0.push((ident, value));
    }

    /// Find the first binding for `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&ResolvedValue> {
        self.0
            .iter()
            .find(|(ident, _)| ident.as_str() == name)
            .map(|(_, value)| value)
    }

    /// Number of bindings, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the scope has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over bindings in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &(Ident, ResolvedValue)> {
        self.0.iter()
    }
}

impl FromIterator<(Ident, ResolvedValue)> for Scope {
    fn from_iter<T: IntoIterator<Item = (Ident, ResolvedValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(Ident, ResolvedValue)> for Scope {
    fn extend<T: IntoIterator<Item = (Ident, ResolvedValue)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
