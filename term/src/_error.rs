use thiserror::Error;

/// Type alias for `Result` with default error `TermError`.
///
/// Can be used like `std::result::Result` as well.
pub type Result<T, E = TermError> = std::result::Result<T, E>;

/// This error is raised when the creation of a term fails,
/// or when an operation is applied to a term that does not support it.
#[derive(Debug, Error)]
pub enum TermError {
    /// The IRI of a term must apply to [RFC 3987](https://tools.ietf.org/html/rfc3987).
    #[error("the given IRI reference '{0}' is not valid according to RFC 3987")]
    InvalidIri(String),
    /// Blank node labels must apply to the
    /// [BLANK_NODE_LABEL](https://www.w3.org/TR/n-triples/#grammar-production-BLANK_NODE_LABEL)
    /// production (without the leading `_:`).
    #[error("the label '{0}' is not valid for a blank node")]
    InvalidBlankNodeLabel(String),
    /// Language tags must apply to [BCP47](https://tools.ietf.org/html/bcp47).
    #[error("the given language tag '{0}' is not valid according to BCP47")]
    InvalidLanguageTag(String),
    /// The lexical value of a literal can not be interpreted according to its datatype.
    #[error("the given lexical value '{lex}' is invalid for datatype {dt}")]
    InvalidLexicalValue {
        /// The faulty lexical value.
        lex: String,
        /// The literal datatype IRI.
        dt: String,
    },
    /// Raised when a numeric operation is applied to a non-numeric literal.
    #[error("the literal '{0}' is not numeric")]
    NotNumeric(String),
    /// Raised when a term of an unsupported kind is used in a given position
    /// (e.g. a literal as the subject of a statement).
    #[error("the term '{0}' has an unsupported kind for this position")]
    UnsupportedKind(String),
}
