//! Resolution of expression trees against caller-supplied bindings.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::deref::Deref;
use crate::ident::Ident;
use crate::scope::Scope;

/// A name together with the module path it is reached through.
///
/// # Examples
/// ```
/// use tmpl_deref::{Ident, Reference};
/// let reference = Reference::qualified(["Data", "Map"], Ident::new("size").expect("valid"));
/// assert_eq!(reference.module_path().as_deref(), Some("Data.Map"));
/// assert_eq!(reference.to_string(), "Data.Map.size");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    /// Module segments; empty for an unqualified name.
    pub modules: Vec<String>,
    /// The referenced name.
    pub ident: Ident,
}

impl Reference {
    /// Reference a name without a module path.
    #[must_use]
    pub fn unqualified(ident: Ident) -> Self {
        Self {
            modules: Vec::new(),
            ident,
        }
    }

    /// Reference a name inside the given module path.
    #[must_use]
    pub fn qualified<I, S>(modules: I, ident: Ident) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modules: modules.into_iter().map(Into::into).collect(),
            ident,
        }
    }

    /// Whether the reference carries a module path.
    #[must_use]
    pub fn is_qualified(&self) -> bool {
        !self.modules.is_empty()
    }

    /// Module segments joined by `.`, or `None` when unqualified.
    #[must_use]
    pub fn module_path(&self) -> Option<String> {
        self.is_qualified().then(|| self.modules.join("."))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for module in &self.modules {
            write!(f, "{module}.")?;
        }
        write!(f, "{}", self.ident)
    }
}

/// The value an expression resolves to, for the consuming layer to
/// interpret.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedValue {
    /// A reference to a data constructor (capitalised name).
    Constructor(Reference),
    /// A reference to an ordinary value.
    Value(Reference),
    /// An integer literal.
    Integer(BigInt),
    /// An exact rational literal.
    Rational(BigRational),
    /// A resolved function applied to a resolved argument.
    Apply(Box<ResolvedValue>, Box<ResolvedValue>),
}

impl ResolvedValue {
    /// Classify `reference` as a constructor or value by its first letter.
    #[must_use]
    pub fn reference(reference: Reference) -> Self {
        if reference.ident.is_capitalised() {
            Self::Constructor(reference)
        } else {
            Self::Value(reference)
        }
    }

    /// Apply `func` to `arg`.
    #[must_use]
    pub fn apply(func: Self, arg: Self) -> Self {
        Self::Apply(Box::new(func), Box::new(arg))
    }

    /// Whether this is a constructor reference.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        matches!(self, Self::Constructor(_))
    }
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constructor(reference) | Self::Value(reference) => write!(f, "{reference}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Rational(value) => write!(f, "{value}"),
            Self::Apply(func, arg) => match arg.as_ref() {
                Self::Apply(..) => write!(f, "{func} ({arg})"),
                _ => write!(f, "{func} {arg}"),
            },
        }
    }
}

/// Resolve `tree` against `scope`.
///
/// Qualified names never consult the scope. Unqualified names take the first
/// matching binding verbatim and otherwise become constructor or value
/// references according to the case of their first letter.
///
/// # Examples
/// ```
/// use tmpl_deref::{Ident, ResolvedValue, Scope, parse_deref, resolve};
/// let (tree, _) = parse_deref("Just count").expect("valid expression");
/// let bound = ResolvedValue::Integer(3.into());
/// let scope = Scope::new().with(Ident::new("count").expect("valid"), bound.clone());
/// let ResolvedValue::Apply(func, arg) = resolve(&scope, &tree) else {
///     panic!("application should resolve to an application");
/// };
/// assert!(func.is_constructor());
/// assert_eq!(*arg, bound);
/// ```
#[must_use]
pub fn resolve(scope: &Scope, tree: &Deref) -> ResolvedValue {
    match tree {
        Deref::Apply(func, arg) => ResolvedValue::apply(resolve(scope, func), resolve(scope, arg)),
        Deref::Qualified { modules, ident } => {
            ResolvedValue::reference(Reference::qualified(modules.iter().cloned(), ident.clone()))
        }
        Deref::Local(ident) => scope.lookup(ident.as_str()).map_or_else(
            || ResolvedValue::reference(Reference::unqualified(ident.clone())),
            |bound| {
                log::debug!("`{ident}` resolved from scope");
                bound.clone()
            },
        ),
        Deref::Integer(value) => ResolvedValue::Integer(value.clone()),
        Deref::Rational(value) => ResolvedValue::Rational(value.clone()),
    }
}
