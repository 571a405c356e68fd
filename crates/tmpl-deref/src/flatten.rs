//! Recovery of name chains from juxtaposed bare identifiers.

use crate::deref::Deref;

/// Recover the names in a chain of bare identifiers.
///
/// A lone [`Deref::Local`] yields its name. `Apply(Local(x), y)` yields the
/// names of `y` followed by `x`, so the outermost function comes last.
/// Anything else, including qualified names, literals and applications
/// whose function is not a bare name, yields `None`.
///
/// # Examples
/// ```
/// use tmpl_deref::{flatten_deref, parse_deref};
/// let (tree, _) = parse_deref("a $ b $ c").expect("valid expression");
/// assert_eq!(
///     flatten_deref(&tree),
///     Some(vec!["c".to_string(), "b".to_string(), "a".to_string()])
/// );
/// let (tree, _) = parse_deref("Mod.a b").expect("valid expression");
/// assert_eq!(flatten_deref(&tree), None);
/// ```
#[must_use]
pub fn flatten_deref(tree: &Deref) -> Option<Vec<String>> {
    match tree {
        Deref::Local(ident) => Some(vec![ident.as_str().to_owned()]),
        Deref::Apply(func, arg) => match func.as_ref() {
            Deref::Local(ident) => {
                let mut names = flatten_deref(arg)?;
                names.push(ident.as_str().to_owned());
                Some(names)
            }
            _ => None,
        },
        Deref::Qualified { .. } | Deref::Integer(_) | Deref::Rational(_) => None,
    }
}
