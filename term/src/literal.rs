//! Literals: typed or language-tagged data values.

use std::fmt;

use lazy_static::lazy_static;
use mownstr::MownStr;

use crate::datatype;
use crate::language_tag::LanguageTag;
use crate::ns::{rdf, xsd};
use crate::value::Value;
use crate::IriRef;

mod _num;
pub use self::_num::*;

lazy_static! {
    static ref XSD_STRING: IriRef = IriRef::new_unchecked(xsd::string);
    static ref XSD_INTEGER: IriRef = IriRef::new_unchecked(xsd::integer);
    static ref XSD_DECIMAL: IriRef = IriRef::new_unchecked(xsd::decimal);
    static ref XSD_DOUBLE: IriRef = IriRef::new_unchecked(xsd::double);
    static ref RDF_LANG_STRING: IriRef = IriRef::new_unchecked(rdf::langString);
}

/// Internal distinction of literals.
///
/// A literal has either a language tag (and then its datatype is fixed to
/// `rdf:langString`) or an explicit datatype; never both.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Kind {
    /// A language tag, conforming to BCP47.
    Lang(LanguageTag),
    /// The IRI referencing the datatype.
    Dt(IriRef),
}

use self::Kind::*;

/// A typed or language-tagged data value.
///
/// A literal carries an optional cached lexical text and an optional parsed
/// [`Value`]; at least one of the two is always present. Literals read from
/// text always have a lexical cache; literals produced by arithmetic have
/// only a value, and their lexical form is regenerated on demand from the
/// canonicalizer.
///
/// A literal whose datatype has a registered handler but whose text does
/// not parse is *ill-typed*: it keeps its lexical form and has no value
/// (see [`Literal::is_ill_typed`]).
#[derive(Clone, Debug)]
pub struct Literal {
    lexical: Option<Box<str>>,
    value: Option<Value>,
    kind: Kind,
}

impl Literal {
    /// Return a new plain string literal (datatype `xsd:string`).
    pub fn new_string<T: Into<Box<str>>>(txt: T) -> Self {
        Literal {
            lexical: Some(txt.into()),
            value: None,
            kind: Dt(XSD_STRING.clone()),
        }
    }

    /// Return a new language-tagged literal
    /// (datatype implicitly `rdf:langString`).
    pub fn new_lang<T: Into<Box<str>>>(txt: T, tag: LanguageTag) -> Self {
        Literal {
            lexical: Some(txt.into()),
            value: None,
            kind: Lang(tag),
        }
    }

    /// Return a new typed literal.
    ///
    /// If the datatype has a registered handler, the text is parsed into a
    /// value at construction time; an unparseable text yields an ill-typed
    /// literal (lexical form kept, no value). Datatypes without a handler
    /// are opaque and never ill-typed.
    pub fn new_dt<T: Into<Box<str>>>(txt: T, dt: IriRef) -> Self {
        let lexical = txt.into();
        let value = datatype::handler(dt.as_str()).and_then(|h| h.parse(&lexical));
        Literal {
            lexical: Some(lexical),
            value,
            kind: Dt(dt),
        }
    }

    /// Return a new literal wrapping `value`, with an empty lexical cache.
    ///
    /// The datatype is derived from the kind of `value`; the lexical form
    /// is regenerated on demand.
    pub fn from_value(value: Value) -> Self {
        let dt = match value {
            Value::Integer(_) => XSD_INTEGER.clone(),
            Value::Decimal(_) => XSD_DECIMAL.clone(),
            Value::Double(_) => XSD_DOUBLE.clone(),
        };
        Literal {
            lexical: None,
            value: Some(value),
            kind: Dt(dt),
        }
    }

    /// The lexical form of this literal: the cached text if present,
    /// otherwise the canonical form of its value.
    pub fn lexical_form(&self) -> MownStr {
        match (&self.lexical, &self.value) {
            (Some(lex), _) => MownStr::from(&**lex),
            (None, Some(value)) => MownStr::from(value.canonical_form()),
            (None, None) => unreachable!(), // every constructor sets one of the two
        }
    }

    /// The datatype IRI of this literal
    /// (`rdf:langString` for language-tagged literals).
    pub fn datatype(&self) -> &IriRef {
        match &self.kind {
            Lang(_) => &RDF_LANG_STRING,
            Dt(dt) => dt,
        }
    }

    /// The language tag, if this literal is language-tagged.
    pub fn language_tag(&self) -> Option<&LanguageTag> {
        match &self.kind {
            Lang(tag) => Some(tag),
            Dt(_) => None,
        }
    }

    /// The parsed value, if this literal is numeric and parseable.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Whether this literal carries a parsed numeric value.
    pub fn is_numeric(&self) -> bool {
        self.value.is_some()
    }

    /// Whether the lexical form is invalid for the declared datatype.
    ///
    /// Only datatypes with a registered handler can be ill-typed; opaque
    /// datatypes and language-tagged literals never are.
    pub fn is_ill_typed(&self) -> bool {
        match (&self.kind, &self.lexical) {
            (Dt(dt), Some(lex)) => datatype::handler(dt.as_str())
                .map(|h| !h.is_valid(lex))
                .unwrap_or(false),
            _ => false,
        }
    }

    /// Rewrite this literal into its canonical lexical form.
    ///
    /// The lexical cache is overwritten with the canonical form of the
    /// value and the value is re-derived from that new text, so that
    /// canonicalizing twice is the identity. Literals without a value
    /// (strings, opaque or ill-typed literals) are returned unchanged.
    /// Identity is unaffected: the datatype and language tag are kept.
    #[must_use]
    pub fn canonicalized(self) -> Self {
        let (Dt(dt), Some(value)) = (&self.kind, &self.value) else {
            return self;
        };
        let Some(handler) = datatype::handler(dt.as_str()) else {
            return self;
        };
        let canonical = handler.canonicalize(value);
        let value = handler.parse(&canonical);
        debug_assert!(value.is_some(), "canonical form must parse back");
        Literal {
            lexical: Some(canonical.into()),
            value,
            kind: self.kind,
        }
    }

}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.lexical_form() == other.lexical_form()
    }
}

impl Eq for Literal {}

impl fmt::Display for Literal {
    /// Display in N-Triples-like syntax, without escaping
    /// (escaping is the serializer's concern).
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self.lexical_form())?;
        match &self.kind {
            Lang(tag) => write!(f, "{tag}"),
            Dt(dt) if dt == &*XSD_STRING => Ok(()),
            Dt(dt) => write!(f, "^^{dt}"),
        }
    }
}

impl From<f64> for Literal {
    fn from(f: f64) -> Self {
        Literal::from_value(Value::Double(f))
    }
}

impl From<i64> for Literal {
    fn from(i: i64) -> Self {
        Literal::from_value(Value::from(i))
    }
}

impl From<&str> for Literal {
    fn from(txt: &str) -> Self {
        Literal::new_string(txt)
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn string_literal() {
        let lit = Literal::new_string("hello");
        assert_eq!(&*lit.lexical_form(), "hello");
        assert_eq!(lit.datatype().as_str(), xsd::string);
        assert_eq!(lit.language_tag(), None);
        assert!(!lit.is_numeric());
        assert_eq!(lit.to_string(), "\"hello\"");
    }

    #[test]
    fn lexical_form_borrows_cached_text() {
        let lit = Literal::new_string("hello");
        assert!(lit.lexical_form().is_borrowed());

        let lit = Literal::from_value(Value::Double(100.0));
        assert!(lit.lexical_form().is_owned());
        assert_eq!(&*lit.lexical_form(), "1.0E2");
    }

    #[test]
    fn lang_literal() {
        let lit = Literal::new_lang("chat", LanguageTag::new("fr").unwrap());
        assert_eq!(lit.datatype().as_str(), rdf::langString);
        assert_eq!(lit.language_tag().unwrap().as_str(), "fr");
        assert_eq!(lit.to_string(), "\"chat\"@fr");
    }

    #[test]
    fn double_literal() {
        let dt = IriRef::new_unchecked(xsd::double);
        let lit = Literal::new_dt("3.14", dt);
        assert!(lit.is_numeric());
        assert!(!lit.is_ill_typed());
        // the original lexical form is kept until canonicalization
        assert_eq!(&*lit.lexical_form(), "3.14");
        assert_eq!(&*lit.canonicalized().lexical_form(), "3.14E0");
    }

    #[test]
    fn ill_typed_double() {
        let dt = IriRef::new_unchecked(xsd::double);
        let lit = Literal::new_dt("not a number", dt);
        assert!(lit.is_ill_typed());
        assert!(!lit.is_numeric());
        // lexical form is preserved untouched
        assert_eq!(&*lit.lexical_form(), "not a number");
        assert_eq!(lit.clone().canonicalized(), lit);
    }

    #[test]
    fn opaque_datatype() {
        let dt = IriRef::new_unchecked("http://example.org/ns#frobnitz");
        let lit = Literal::new_dt("whatever", dt);
        assert!(!lit.is_ill_typed());
        assert!(!lit.is_numeric());
        assert_eq!(lit.clone().canonicalized(), lit);
    }

    #[test]
    fn canonicalization_is_idempotent() {
        let dt = IriRef::new_unchecked(xsd::double);
        let once = Literal::new_dt("100.0", dt).canonicalized();
        assert_eq!(&*once.lexical_form(), "1.0E2");
        let twice = once.clone().canonicalized();
        assert_eq!(once, twice);
    }

    #[test]
    fn from_value_regenerates_lexical() {
        let lit = Literal::from(2.5);
        assert_eq!(&*lit.lexical_form(), "2.5E0");
        assert_eq!(lit.datatype().as_str(), xsd::double);
    }

    #[test]
    fn lang_tag_case_insensitive_eq() {
        let a = Literal::new_lang("x", LanguageTag::new("en-US").unwrap());
        let b = Literal::new_lang("x", LanguageTag::new("en-us").unwrap());
        assert_eq!(a, b);
    }
}
