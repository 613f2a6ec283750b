//! Blank nodes, locally-scoped anonymous node identifiers.

use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Result, TermError};

lazy_static! {
    /// A modified production of the N-Triples `BLANK_NODE_LABEL` according to
    /// the [grammar](https://www.w3.org/TR/n-triples/#grammar-production-BLANK_NODE_LABEL).
    ///
    /// In contrast to the original rule this regular expression does not look
    /// for a leading `_:`; it only checks that the label itself is valid.
    /// Note in particular that a `.` may occur inside a label but never as
    /// its last character.
    ///
    /// # Rule
    ///
    /// `BLANK_NODE_LABEL ::= (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`
    static ref BLANK_NODE_LABEL: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9]
      (
          [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
          |
          \u{2e}+ [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
      )*
      $
    ").unwrap();
}

/// A blank node handle.
///
/// Identity is scoped to one parse session: a session's interner hands out
/// the *same* handle (in the sense of [`BnodeId::ptr_eq`]) for every
/// occurrence of a given label, and distinct handles for distinct labels.
/// No identity guarantee holds across sessions.
///
/// Equality (`==`) compares labels, which is only meaningful within one
/// session.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BnodeId(Arc<str>);

impl BnodeId {
    /// Return a new blank node handle with the given label.
    ///
    /// Fails with [`TermError::InvalidBlankNodeLabel`] if `label` does not
    /// match the `BLANK_NODE_LABEL` production (without the leading `_:`).
    pub fn new<T: Into<Arc<str>>>(label: T) -> Result<Self> {
        let label = label.into();
        if BLANK_NODE_LABEL.is_match(&label) {
            Ok(BnodeId(label))
        } else {
            Err(TermError::InvalidBlankNodeLabel(label.as_ref().to_string()))
        }
    }

    /// Return a new blank node handle without checking the label.
    ///
    /// # Pre-condition
    ///
    /// `label` must match the `BLANK_NODE_LABEL` production.
    pub fn new_unchecked<T: Into<Arc<str>>>(label: T) -> Self {
        let label = label.into();
        debug_assert!(
            BLANK_NODE_LABEL.is_match(&label),
            "invalid bnode label {:?}",
            label.as_ref()
        );
        BnodeId(label)
    }

    /// Borrow the label of this blank node.
    ///
    /// _Note:_ the label does not include the leading `_:`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `self` and `other` are the same handle (not merely handles
    /// with equal labels).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for BnodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("" => false ; "empty")]
    #[test_case("example" => true ; "start alpha")]
    #[test_case("_" => true ; "underscore")]
    #[test_case("1" => true ; "number")]
    #[test_case("hans_the_1" => true ; "mixed")]
    #[test_case("hans.the.1" => true ; "inner dots")]
    #[test_case("hans." => false ; "trailing dot")]
    #[test_case("hans?1" => false ; "unallowed char")]
    fn check_regex(to_check: &str) -> bool {
        BLANK_NODE_LABEL.is_match(to_check)
    }

    #[test_case("" => "invalid label" ; "empty")]
    #[test_case("hans" => "_:hans" ; "plain")]
    #[test_case("ha?ns" => "invalid label" ; "unallowed char")]
    #[test_case("1" => "_:1" ; "number")]
    fn check_display(to_check: &str) -> String {
        match BnodeId::new(to_check) {
            Ok(b) => b.to_string(),
            Err(_) => "invalid label".to_owned(),
        }
    }

    #[test]
    fn identity() {
        let a = BnodeId::new("a").unwrap();
        let b = a.clone();
        let c = BnodeId::new("a").unwrap();
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
        assert_eq!(a, c);
    }
}
