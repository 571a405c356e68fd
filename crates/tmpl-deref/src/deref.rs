//! In-memory representation of a parsed placeholder expression.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

use crate::ident::Ident;

/// A parsed placeholder expression.
///
/// Trees are immutable values; [`Deref::Apply`] nodes nest to the left for
/// juxtaposed terms, so `f a b` is `Apply(Apply(f, a), b)`.
///
/// Trees returned by [`parse_deref`](crate::parse_deref) are at most
/// [`MAX_NESTING`](crate::MAX_NESTING) nodes deep. Rendering and resolution
/// recurse, so trees built by hand should stay within the same bound.
///
/// # Examples
/// ```
/// use tmpl_deref::{Deref, Ident, parse_deref};
/// let (tree, rest) = parse_deref("f a").expect("valid expression");
/// let f = Deref::local(Ident::new("f").expect("valid identifier"));
/// let a = Deref::local(Ident::new("a").expect("valid identifier"));
/// assert_eq!(tree, Deref::apply(f, a));
/// assert!(rest.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Deref {
    /// A name reached through capitalised module segments, as in `A.B.name`.
    Qualified {
        /// Module segments in source order, without the separating dots.
        modules: Vec<String>,
        /// The final name.
        ident: Ident,
    },
    /// An unqualified name.
    Local(Ident),
    /// An integer literal.
    Integer(BigInt),
    /// A literal with a fractional part, held as an exact rational.
    Rational(BigRational),
    /// Application of a function expression to an argument expression.
    Apply(Box<Deref>, Box<Deref>),
}

impl Deref {
    /// Build an unqualified reference.
    #[must_use]
    pub fn local(ident: Ident) -> Self {
        Self::Local(ident)
    }

    /// Build a qualified reference, falling back to [`Deref::Local`] when
    /// `modules` is empty.
    #[must_use]
    pub fn qualified<I, S>(modules: I, ident: Ident) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let modules: Vec<String> = modules.into_iter().map(Into::into).collect();
        if modules.is_empty() {
            Self::Local(ident)
        } else {
            Self::Qualified { modules, ident }
        }
    }

    /// Build an integer literal.
    #[must_use]
    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self::Integer(value.into())
    }

    /// Apply `func` to `arg`.
    #[must_use]
    pub fn apply(func: Self, arg: Self) -> Self {
        Self::Apply(Box::new(func), Box::new(arg))
    }

    /// Recover the component names of a chain of bare identifiers.
    ///
    /// See [`flatten_deref`](crate::flatten_deref).
    #[must_use]
    pub fn flatten(&self) -> Option<Vec<String>> {
        crate::flatten::flatten_deref(self)
    }
}

fn write_rational(f: &mut fmt::Formatter<'_>, value: &BigRational) -> fmt::Result {
    match value.to_f64().filter(|float| float.is_finite()) {
        Some(float) => {
            let text = float.to_string();
            if text.contains('.') {
                f.write_str(&text)
            } else {
                write!(f, "{text}.0")
            }
        }
        None => write!(f, "{value}"),
    }
}

impl fmt::Display for Deref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Qualified { modules, ident } => {
                for module in modules {
                    write!(f, "{module}.")?;
                }
                write!(f, "{ident}")
            }
            Self::Local(ident) => write!(f, "{ident}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Rational(value) => write_rational(f, value),
            Self::Apply(func, arg) => match arg.as_ref() {
                Self::Apply(..) => write!(f, "{func} ({arg})"),
                _ => write!(f, "{func} {arg}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(name: &str) -> Deref {
        Deref::local(Ident::from_parsed(name))
    }

    #[test]
    fn qualified_without_modules_is_local() {
        let tree = Deref::qualified(Vec::<String>::new(), Ident::from_parsed("x"));
        assert_eq!(tree, local("x"));
    }

    #[test]
    fn renders_left_nested_applications_without_parentheses() {
        let tree = Deref::apply(Deref::apply(local("f"), local("a")), local("b"));
        assert_eq!(tree.to_string(), "f a b");
    }

    #[test]
    fn parenthesises_applied_arguments() {
        let tree = Deref::apply(local("f"), Deref::apply(local("g"), local("a")));
        assert_eq!(tree.to_string(), "f (g a)");
    }

    #[test]
    fn renders_qualified_names_and_literals() {
        let tree = Deref::qualified(["Data", "Text"], Ident::from_parsed("pack"));
        assert_eq!(tree.to_string(), "Data.Text.pack");
        assert_eq!(Deref::integer(-12).to_string(), "-12");
        let half = BigRational::new(BigInt::from(-7), BigInt::from(2));
        assert_eq!(Deref::Rational(half).to_string(), "-3.5");
        let whole = BigRational::from_integer(BigInt::from(3));
        assert_eq!(Deref::Rational(whole).to_string(), "3.0");
    }
}
