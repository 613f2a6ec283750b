//! Identifier references (absolute or relative IRIs) as used in statement
//! subjects, predicates, objects, and literal datatypes.

use std::fmt;
use std::sync::Arc;

use crate::{Result, TermError};

/// An identifier reference: an absolute or relative IRI.
///
/// The inner text is shared (`Arc<str>`), making clones cheap and allowing
/// parse sessions to deduplicate equal references ([`IriRef::ptr_eq`]
/// detects such sharing). Equality and ordering compare the text, not the
/// allocation.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IriRef(Arc<str>);

impl IriRef {
    /// Return a new identifier reference.
    ///
    /// Fails with [`TermError::InvalidIri`] if `iri` is not a valid IRI
    /// reference according to RFC 3987. Relative references are accepted;
    /// use [`IriRef::is_absolute`] to check absoluteness.
    pub fn new<T: Into<Arc<str>>>(iri: T) -> Result<Self> {
        let iri = iri.into();
        match oxiri::IriRef::parse(iri.as_ref()) {
            Ok(_) => Ok(IriRef(iri)),
            Err(_) => Err(TermError::InvalidIri(iri.as_ref().to_string())),
        }
    }

    /// Return a new identifier reference without checking its syntax.
    ///
    /// # Pre-condition
    ///
    /// `iri` must be a valid IRI reference according to RFC 3987.
    pub fn new_unchecked<T: Into<Arc<str>>>(iri: T) -> Self {
        let iri = iri.into();
        debug_assert!(
            oxiri::IriRef::parse(iri.as_ref()).is_ok(),
            "invalid IRI reference {:?}",
            iri.as_ref()
        );
        IriRef(iri)
    }

    /// Borrow the text of this reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Borrow the shared text of this reference.
    pub fn as_arc(&self) -> &Arc<str> {
        &self.0
    }

    /// Whether this reference is an absolute IRI (has a scheme).
    pub fn is_absolute(&self) -> bool {
        oxiri::Iri::parse(self.0.as_ref()).is_ok()
    }

    /// Whether `self` and `other` share the same underlying allocation.
    ///
    /// This is the case for references deduplicated by an interning parse
    /// session, never guaranteed otherwise.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for IriRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl PartialEq<str> for IriRef {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for IriRef {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
