//! Language tags for language-tagged literals.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Result, TermError};

lazy_static! {
    /// The `LANGTAG` production (without the leading `@`):
    /// letters, optionally followed by hyphen-separated alphanumeric subtags.
    static ref LANG_TAG: Regex = Regex::new(r"(?x) ^ [a-zA-Z]+ (?: - [a-zA-Z0-9]+ )* $").unwrap();
}

/// A language tag, conforming to the `LANGTAG` production of N-Triples.
///
/// Comparison is case-insensitive, as mandated by
/// [BCP47](https://tools.ietf.org/html/bcp47).
#[derive(Clone, Debug, Eq)]
pub struct LanguageTag(Box<str>);

impl LanguageTag {
    /// Return a new language tag.
    ///
    /// Fails with [`TermError::InvalidLanguageTag`] if `tag` does not match
    /// the `LANGTAG` production.
    pub fn new<T: Into<Box<str>>>(tag: T) -> Result<Self> {
        let tag = tag.into();
        if LANG_TAG.is_match(&tag) {
            Ok(LanguageTag(tag))
        } else {
            Err(TermError::InvalidLanguageTag(tag.as_ref().to_string()))
        }
    }

    /// Return a new language tag without checking its syntax.
    ///
    /// # Pre-condition
    ///
    /// `tag` must match the `LANGTAG` production.
    pub fn new_unchecked<T: Into<Box<str>>>(tag: T) -> Self {
        let tag = tag.into();
        debug_assert!(
            LANG_TAG.is_match(&tag),
            "invalid language tag {:?}",
            tag.as_ref()
        );
        LanguageTag(tag)
    }

    /// Borrow the text of this tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for LanguageTag {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl std::hash::Hash for LanguageTag {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for b in self.0.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
