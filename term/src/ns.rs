//! IRI constants for the namespaces used by this crate.
//!
//! Only the terms actually consumed by the datatype registry and the literal
//! model are listed; this is not a general-purpose vocabulary module.

/// The `xsd:` namespace (XML Schema datatypes).
#[allow(non_upper_case_globals)]
pub mod xsd {
    /// `xsd:` namespace prefix.
    pub const PREFIX: &str = "http://www.w3.org/2001/XMLSchema#";

    /// `xsd:string`
    pub const string: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`
    pub const integer: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:decimal`
    pub const decimal: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    /// `xsd:double`
    pub const double: &str = "http://www.w3.org/2001/XMLSchema#double";
}

/// The `rdf:` namespace.
#[allow(non_upper_case_globals)]
pub mod rdf {
    /// `rdf:` namespace prefix.
    pub const PREFIX: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// `rdf:langString`, the datatype of all language-tagged literals.
    pub const langString: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}
