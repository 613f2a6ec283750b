//! I define [`Error`].

use crate::escape::EscapeError;
use tern_term::TermError;

/// Parsing error, capturing the position in the input where the error was encountered,
/// together with the raw text of the offending line.
#[derive(thiserror::Error, Debug)]
#[error("{kind} at {line}:{col} in {text:?}")]
pub struct Error {
    kind: ErrorKind,
    line: usize,
    col: usize,
    text: Box<str>,
}

impl Error {
    /// Construct an [`Error`].
    pub fn new<E: Into<ErrorKind>>(err: E, line: usize, col: usize, text: &str) -> Self {
        Error {
            kind: err.into(),
            line,
            col,
            text: text.trim_end_matches(['\n', '\r']).into(),
        }
    }

    /// Return the [kind][`ErrorKind`].
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Return the position in the input.
    ///
    /// Lines are numbered from 1, columns from 0,
    /// as expected by text editors.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }

    /// Return the raw text of the offending line, without its line break.
    pub fn line_text(&self) -> &str {
        &self.text
    }

    /// Whether this error reports text that violates the grammar.
    pub fn is_syntax(&self) -> bool {
        !self.is_validation() && !matches!(self.kind, ErrorKind::Io(_))
    }

    /// Whether this error reports grammatically well-formed text
    /// that is invalid for its declared datatype,
    /// or an identifier reference that is not absolute.
    ///
    /// These are only raised when the `validate` option is enabled.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::RelativeIri(_) | ErrorKind::Term(TermError::InvalidLexicalValue { .. })
        )
    }
}

/// Kind of [parsing errors][`Error`].
#[derive(thiserror::Error, Debug)]
pub enum ErrorKind {
    /// Invalid bnode label
    #[error("Invalid bnode label")]
    Bnode,
    /// Unexpected character(s) in the input
    #[error("Expected {0}")]
    Expected(String),
    /// Invalid language tag
    #[error("Invalid language tag")]
    Lang,
    /// Invalid literal
    #[error("Invalid literal: the language string datatype requires a language tag")]
    InvalidLiteral,
    /// Invalid escape sequence
    #[error("Invalid escape sequence: {0}")]
    Escape(#[from] EscapeError),
    /// A term could not be constructed
    #[error(transparent)]
    Term(#[from] TermError),
    /// An identifier reference is not an absolute IRI
    #[error("The IRI reference <{0}> is not absolute")]
    RelativeIri(String),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
