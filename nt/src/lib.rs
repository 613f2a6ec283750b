//! Parser for the [N-Triples] line-oriented concrete syntax,
//! producing [`Statement`](tern_term::Statement)s made of
//! [`tern_term`] terms.
//!
//! Each line of the input holds at most one statement;
//! a statement is parsed all-or-nothing,
//! so a failed line never leaves the parser mid-token.
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/
#![deny(missing_docs)]

/// Define a lazily compiled [`Regex`](regex::Regex) static.
macro_rules! lazy_regex {
    ($(#[$attr:meta])* $name:ident = $re:expr) => {
        lazy_static::lazy_static! {
            $(#[$attr])*
            static ref $name: regex::Regex = regex::Regex::new($re).unwrap();
        }
    };
}
pub(crate) use lazy_regex;

pub mod escape;
pub mod parser;
