//! Placeholder expressions shared by the markup, stylesheet and script
//! template dialects.
//!
//! Templates embed values with `#{expr}`, `@{expr}`/`@?{expr}` and
//! `^{expr}`. The crate parses the text between the braces into a [`Deref`]
//! tree, resolves trees against a caller-supplied [`Scope`] and recognises
//! chains of bare names for dialects that special-case them.

mod config;
mod deref;
mod errors;
mod flatten;
mod ident;
mod parser;
mod resolve;
mod scanner;
mod scope;

pub use config::Sigils;
pub use deref::Deref;
pub use errors::{IdentError, ParseError, SyntaxErrorInfo};
pub use flatten::flatten_deref;
pub use ident::Ident;
pub use parser::{MAX_NESTING, parse_deref};
pub use resolve::{Reference, ResolvedValue, resolve};
pub use scanner::{
    Scanned, UrlRef, parse_at, parse_caret, parse_hash, parse_int, parse_url, parse_var,
};
pub use scope::Scope;

pub use num_bigint::BigInt;
pub use num_rational::BigRational;
