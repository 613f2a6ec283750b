//! Term and literal-value model for line-oriented RDF syntaxes.
//!
//! This crate defines the [`Term`]s produced by the parsers of the `tern`
//! workspace:
//! * [`IriRef`], an absolute or relative identifier reference;
//! * [`BnodeId`], a blank node handle whose identity is scoped to one parse
//!   session;
//! * [`Literal`], a typed or language-tagged data value, together with a
//!   [datatype registry](datatype) producing deterministic canonical
//!   lexical forms and a [numeric value model](value) for arithmetic and
//!   exact ordering.
#![deny(missing_docs)]

mod _error;
pub use _error::*;

pub mod bnode;
pub mod datatype;
pub mod iri;
pub mod language_tag;
pub mod literal;
pub mod ns;
pub mod value;

pub use bnode::BnodeId;
pub use iri::IriRef;
pub use language_tag::LanguageTag;
pub use literal::{Literal, NumericOperand};
pub use value::Value;

use std::fmt;

/// An RDF term: the value of one position of a [`Statement`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Term {
    /// An identifier reference (absolute or relative IRI).
    Iri(IriRef),
    /// A blank node, scoped to one parse session.
    BlankNode(BnodeId),
    /// A typed or language-tagged data value.
    Literal(Literal),
}

impl Term {
    /// Whether this term is an identifier reference.
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Whether this term is a blank node.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Whether this term is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// This term's identifier reference, if it is one.
    pub fn as_iri(&self) -> Option<&IriRef> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// This term's blank node handle, if it is one.
    pub fn as_blank_node(&self) -> Option<&BnodeId> {
        match self {
            Term::BlankNode(b) => Some(b),
            _ => None,
        }
    }

    /// This term's literal, if it is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    /// Display in N-Triples-like syntax, without escaping.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Iri(iri) => iri.fmt(f),
            Term::BlankNode(b) => b.fmt(f),
            Term::Literal(lit) => lit.fmt(f),
        }
    }
}

impl From<IriRef> for Term {
    fn from(iri: IriRef) -> Self {
        Term::Iri(iri)
    }
}

impl From<BnodeId> for Term {
    fn from(b: BnodeId) -> Self {
        Term::BlankNode(b)
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

/// An ordered (subject, predicate, object) triple, the atomic unit of the
/// serialized format.
///
/// The predicate is an [`IriRef`] by construction, so the invariant that a
/// predicate is never a blank node or a literal is structural; the subject
/// is checked at construction time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Statement {
    s: Term,
    p: IriRef,
    o: Term,
}

impl Statement {
    /// Return a new statement.
    ///
    /// Fails with [`TermError::UnsupportedKind`] if `s` is a literal,
    /// which can occur in no position but the object.
    pub fn new(s: Term, p: IriRef, o: Term) -> Result<Self> {
        if s.is_literal() {
            return Err(TermError::UnsupportedKind(s.to_string()));
        }
        Ok(Statement { s, p, o })
    }

    /// The subject of this statement (an identifier or a blank node).
    pub fn s(&self) -> &Term {
        &self.s
    }

    /// The predicate of this statement.
    pub fn p(&self) -> &IriRef {
        &self.p
    }

    /// The object of this statement.
    pub fn o(&self) -> &Term {
        &self.o
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
