//! Parser for the [N-Triples] concrete syntax,
//! producing one [`Statement`] per non-blank, non-comment line.
//!
//! A line is parsed all-or-nothing:
//! on failure, no partial term binding survives,
//! and the raw text can be retried as a standalone term
//! with [`NTriplesParser::parse_single`].
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::BufRead;
use std::sync::Weak;

use tern_term::ns::rdf;
use tern_term::{BnodeId, IriRef, LanguageTag, Literal, Statement, Term, TermError};
use weak_table::WeakHashSet;

use super::{Error, ErrorKind};
use crate::escape::{unescape, unescape_iri};
use crate::lazy_regex;

/// N-Triples parser configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    pub(super) validate: bool,
    pub(super) canonicalize: bool,
    pub(super) intern: bool,
}

impl Config {
    /// Set the validate configuration.
    ///
    /// When enabled, the parser enforces the end-of-statement period,
    /// requires all identifier references to be absolute,
    /// and raises on literals that are invalid for their datatype.
    pub fn set_validate(&mut self, validate: bool) -> &mut Self {
        self.validate = validate;
        self
    }

    /// Set the canonicalize configuration.
    ///
    /// When enabled, the lexical form of every literal
    /// is normalized to its canonical form immediately on read.
    pub fn set_canonicalize(&mut self, canonicalize: bool) -> &mut Self {
        self.canonicalize = canonicalize;
        self
    }

    /// Set the intern configuration.
    ///
    /// When enabled, equal predicate identifiers within one parse session
    /// share a single instance.
    pub fn set_intern(&mut self, intern: bool) -> &mut Self {
        self.intern = intern;
        self
    }
}

/// N-Triples parser.
#[derive(Clone, Debug, Default)]
pub struct NTriplesParser {
    config: Config,
}

impl NTriplesParser {
    /// Build a new N-Triples parser with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a new N-Triples parser with the given config.
    pub const fn new_with_config(config: Config) -> Self {
        Self { config }
    }

    /// Borrow this parser's configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Parse statements from `data`, one per line.
    pub fn parse<B: BufRead>(&self, data: B) -> NTriplesSource<B> {
        NTriplesSource {
            input: data,
            config: self.config,
            line: String::new(),
            line_num: 0,
            bnodes: HashMap::new(),
            preds: WeakHashSet::new(),
        }
    }

    /// Convenient shortcut method for parsing a string.
    pub fn parse_str<'t>(&self, txt: &'t str) -> NTriplesSource<&'t [u8]> {
        self.parse(txt.as_bytes())
    }

    /// Parse `txt` as a single statement or standalone term.
    ///
    /// A full statement parse is attempted first;
    /// on failure, the same text is retried from its start
    /// as an identifier reference, then a blank node label, then a literal,
    /// returning the first success.
    pub fn parse_single(&self, txt: &str) -> Result<Parsed, Error> {
        if let Some(Ok(statement)) = self.parse_str(txt).next() {
            return Ok(Parsed::Statement(statement));
        }
        let config = self.config;
        let fail = |(kind, col): (ErrorKind, usize)| Error::new(kind, 1, col, txt);
        let col = ws(txt);
        let (term, len) = match txt[col..].bytes().next() {
            Some(b'<') => {
                let (iri, len) = iriref_checked(&txt[col..], config)
                    .map_err(at(col))
                    .map_err(fail)?;
                (Term::Iri(iri), len)
            }
            Some(b'_') => {
                let (label, len) = blank_node(&txt[col..]).map_err(at(col)).map_err(fail)?;
                (Term::BlankNode(BnodeId::new_unchecked(label)), len)
            }
            Some(b'"') => {
                let (lit, len) = literal(&txt[col..], config).map_err(at(col)).map_err(fail)?;
                (Term::Literal(lit), len)
            }
            _ => {
                let expected = "statement, IRI reference, blank node label, or literal".into();
                return Err(fail((ErrorKind::Expected(expected), col)));
            }
        };
        let end = col + len + ws(&txt[col + len..]);
        if !eol(&txt[end..]) {
            return Err(fail((ErrorKind::Expected("end of line".into()), end)));
        }
        Ok(Parsed::Term(term))
    }
}

/// The result of [`NTriplesParser::parse_single`].
#[derive(Clone, Debug, PartialEq)]
pub enum Parsed {
    /// The text held a full statement.
    Statement(Statement),
    /// The text held a single bare term.
    Term(Term),
}

/// Parse statements from `data` with the default configuration.
pub fn parse<B: BufRead>(data: B) -> NTriplesSource<B> {
    NTriplesParser::new().parse(data)
}

/// Parse statements from `txt` with the default configuration.
pub fn parse_str(txt: &str) -> NTriplesSource<&[u8]> {
    NTriplesParser::new().parse_str(txt)
}

/// A parse session over one input stream,
/// yielding statements in the order their lines appear.
///
/// Blank node identity is scoped to one such session:
/// two occurrences of the same label yield the same instance.
pub struct NTriplesSource<B> {
    input: B,
    config: Config,
    line: String,
    line_num: usize,
    bnodes: HashMap<Box<str>, BnodeId>,
    preds: WeakHashSet<Weak<str>>,
}

impl<B: BufRead> Iterator for NTriplesSource<B> {
    type Item = Result<Statement, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line.clear();
            self.line_num += 1;
            match self.input.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => return Some(Err(Error::new(err, self.line_num, 0, ""))),
            }
            let start = ws(&self.line);
            if eol(&self.line[start..]) {
                continue;
            }
            return Some(self.parse_statement(start));
        }
    }
}

impl<B> NTriplesSource<B> {
    /// Parse the whole of `self.line` as one statement,
    /// starting after the leading whitespace.
    fn parse_statement(&mut self, start: usize) -> Result<Statement, Error> {
        let txt = self.line.as_str();
        let config = self.config;
        let line_num = self.line_num;
        let fail = |(kind, col): (ErrorKind, usize)| Error::new(kind, line_num, col, txt);

        let mut col = start;
        let (s, len) = subject(&txt[col..], config).map_err(at(col)).map_err(fail)?;
        col += len;
        col += ws(&txt[col..]);
        let (p, len) = predicate(&txt[col..], config)
            .map_err(at(col))
            .map_err(fail)?;
        col += len;
        col += ws(&txt[col..]);
        let (o, len) = object(&txt[col..], config).map_err(at(col)).map_err(fail)?;
        col += len;
        col += ws(&txt[col..]);
        if txt[col..].starts_with('.') {
            col += 1;
            col += ws(&txt[col..]);
            if config.validate && !eol(&txt[col..]) {
                return Err(fail((ErrorKind::Expected("end of line".into()), col)));
            }
        } else if config.validate {
            return Err(fail((ErrorKind::Expected("'.'".into()), col)));
        }

        let p = if config.intern {
            intern_pred(&mut self.preds, p)
        } else {
            p
        };
        let s = match s {
            NodeRef::Iri(iri) => Term::Iri(iri),
            NodeRef::Bnode(label) => Term::BlankNode(intern_bnode(&mut self.bnodes, label)),
        };
        let o = match o {
            ObjRef::Iri(iri) => Term::Iri(iri),
            ObjRef::Bnode(label) => Term::BlankNode(intern_bnode(&mut self.bnodes, label)),
            ObjRef::Literal(lit) => Term::Literal(lit),
        };
        Statement::new(s, p, o).map_err(|err| Error::new(err, line_num, start, txt))
    }
}

/// Lookup-or-create the handle for a blank node label.
///
/// `label` has already matched the `BLANK_NODE_LABEL` production.
fn intern_bnode(bnodes: &mut HashMap<Box<str>, BnodeId>, label: &str) -> BnodeId {
    if let Some(bnode) = bnodes.get(label) {
        return bnode.clone();
    }
    let bnode = BnodeId::new_unchecked(label);
    bnodes.insert(label.into(), bnode.clone());
    bnode
}

/// Return a shared instance for equal predicate identifiers.
fn intern_pred(preds: &mut WeakHashSet<Weak<str>>, iri: IriRef) -> IriRef {
    match preds.get(iri.as_str()) {
        Some(shared) => IriRef::new_unchecked(shared),
        None => {
            preds.insert(iri.as_arc().clone());
            iri
        }
    }
}

/// Result of a production: the parsed value and the number of bytes consumed,
/// or an error kind and its column offset relative to the production start.
///
/// Productions are pure functions of their input slice;
/// the cursor of the calling session only advances when they succeed,
/// so a failed line never leaves the session mid-token.
type PResult<T> = Result<(T, usize), (ErrorKind, usize)>;

/// Shift the column offset of a production error by `offset`.
fn at(offset: usize) -> impl Fn((ErrorKind, usize)) -> (ErrorKind, usize) {
    move |(kind, col)| (kind, col + offset)
}

enum NodeRef<'a> {
    Iri(IriRef),
    Bnode(&'a str),
}

enum ObjRef<'a> {
    Iri(IriRef),
    Bnode(&'a str),
    Literal(Literal),
}

fn subject(txt: &str, config: Config) -> PResult<NodeRef<'_>> {
    match txt.bytes().next() {
        Some(b'<') => {
            let (iri, len) = iriref_checked(txt, config)?;
            Ok((NodeRef::Iri(iri), len))
        }
        Some(b'_') => {
            let (label, len) = blank_node(txt)?;
            Ok((NodeRef::Bnode(label), len))
        }
        _ => Err((ErrorKind::Expected("subject".into()), 0)),
    }
}

fn predicate(txt: &str, config: Config) -> PResult<IriRef> {
    if txt.starts_with('<') {
        iriref_checked(txt, config)
    } else {
        Err((ErrorKind::Expected("IRIREF as predicate".into()), 0))
    }
}

fn object(txt: &str, config: Config) -> PResult<ObjRef<'_>> {
    match txt.bytes().next() {
        Some(b'<') => {
            let (iri, len) = iriref_checked(txt, config)?;
            Ok((ObjRef::Iri(iri), len))
        }
        Some(b'_') => {
            let (label, len) = blank_node(txt)?;
            Ok((ObjRef::Bnode(label), len))
        }
        Some(b'"') => {
            let (lit, len) = literal(txt, config)?;
            Ok((ObjRef::Literal(lit), len))
        }
        _ => Err((ErrorKind::Expected("object".into()), 0)),
    }
}

/// Handle the whole production https://www.w3.org/TR/n-triples/#grammar-production-IRIREF
/// assuming the leading '<', and check absoluteness when `validate` is set.
fn iriref_checked(txt: &str, config: Config) -> PResult<IriRef> {
    let (iri, len) = iriref(txt)?;
    if config.validate && !iri.is_absolute() {
        return Err((ErrorKind::RelativeIri(iri.as_str().into()), 0));
    }
    Ok((iri, len))
}

fn iriref(txt: &str) -> PResult<IriRef> {
    debug_assert!(txt.starts_with('<'));

    let end = match txt.find(['>', '\n', '\r']) {
        Some(j) if txt.as_bytes()[j] == b'>' => j,
        _ => return Err((ErrorKind::Expected("matching closing '>'".into()), 0)),
    };
    let body = unescape_iri(&txt[1..end]).map_err(|err| (err.into(), 1))?;
    let iri = IriRef::new(&*body).map_err(|err| (err.into(), 1))?;
    Ok((iri, end + 1))
}

/// Handle the whole production https://www.w3.org/TR/n-triples/#grammar-production-BLANK_NODE_LABEL
/// assuming the leading '_', and return the label without the `_:` prefix.
fn blank_node(txt: &str) -> PResult<&str> {
    debug_assert!(txt.starts_with('_'));

    lazy_regex!(
        LABEL = r#"(?x) ^
        # (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?
        [
         A-Z a-z \xC0-\xD6 \xD8-\xF6 \xF8-\u{02FF} \u{0370}-\u{037D}
         \u{037F}-\u{1FFF} \u{200C}-\u{200D} \u{2070}-\u{218F} \u{2C00}-\u{2FEF}
         \u{3001}-\u{D7FF} \u{F900}-\u{FDCF} \u{FDF0}-\u{FFFD} \u{10000}-\u{EFFFF}
         _
         0-9
        ]
        (?:
            [
             A-Z a-z \xC0-\xD6 \xD8-\xF6 \xF8-\u{02FF} \u{0370}-\u{037D}
             \u{037F}-\u{1FFF} \u{200C}-\u{200D} \u{2070}-\u{218F} \u{2C00}-\u{2FEF}
             \u{3001}-\u{D7FF} \u{F900}-\u{FDCF} \u{FDF0}-\u{FFFD} \u{10000}-\u{EFFFF}
             _
             \- 0-9 \xB7 \u{0300}-\u{036F} \u{203F}-\u{2040}
             .
            ]*
            [
             A-Z a-z \xC0-\xD6 \xD8-\xF6 \xF8-\u{02FF} \u{0370}-\u{037D}
             \u{037F}-\u{1FFF} \u{200C}-\u{200D} \u{2070}-\u{218F} \u{2C00}-\u{2FEF}
             \u{3001}-\u{D7FF} \u{F900}-\u{FDCF} \u{FDF0}-\u{FFFD} \u{10000}-\u{EFFFF}
             _
             \- 0-9 \xB7 \u{0300}-\u{036F} \u{203F}-\u{2040}
            ]
        )?
    "#
    );

    if !txt[1..].starts_with(':') {
        Err((ErrorKind::Expected("':'".into()), 1))
    } else if let Some(cap) = LABEL.find(&txt[2..]) {
        Ok((cap.as_str(), 2 + cap.len()))
    } else {
        Err((ErrorKind::Bnode, 2))
    }
}

/// Handle a whole literal, assuming the leading '"':
/// quoted body, then at most one of
/// a language tag or a datatype suffix, in that priority order.
fn literal(txt: &str, config: Config) -> PResult<Literal> {
    lazy_regex!(LANG = r"(?x) ^ [a-zA-Z]+ (?: - [a-zA-Z0-9]+ )*");

    let (body, mut col) = string_quote(txt)?;
    let body = body.into_owned();
    col += ws(&txt[col..]);
    let (lit, end) = if txt[col..].starts_with('@') {
        let Some(tag) = LANG.find(&txt[col + 1..]) else {
            return Err((ErrorKind::Lang, col + 1));
        };
        let lit = Literal::new_lang(body, LanguageTag::new_unchecked(tag.as_str()));
        (lit, col + 1 + tag.end())
    } else if txt[col..].starts_with("^^") {
        col += 2;
        col += ws(&txt[col..]);
        if !txt[col..].starts_with('<') {
            return Err((ErrorKind::Expected("IRIREF".into()), col));
        }
        let (dt, len) = iriref(&txt[col..]).map_err(at(col))?;
        if dt == rdf::langString {
            return Err((ErrorKind::InvalidLiteral, col));
        }
        if config.validate && !dt.is_absolute() {
            return Err((ErrorKind::RelativeIri(dt.as_str().into()), col));
        }
        (Literal::new_dt(body, dt), col + len)
    } else {
        (Literal::new_string(body), col)
    };

    if lit.is_ill_typed() {
        if config.validate {
            let err = TermError::InvalidLexicalValue {
                lex: lit.lexical_form().to_string(),
                dt: lit.datatype().as_str().to_string(),
            };
            return Err((err.into(), 0));
        }
        log::warn!(
            "invalid lexical value {:?} for datatype {}",
            lit.lexical_form(),
            lit.datatype()
        );
    }
    let lit = if config.canonicalize {
        lit.canonicalized()
    } else {
        lit
    };
    Ok((lit, end))
}

/// Handle the production https://www.w3.org/TR/n-triples/#grammar-production-STRING_LITERAL_QUOTE
/// assuming the leading '"', and return the decoded body.
fn string_quote(txt: &str) -> PResult<Cow<str>> {
    debug_assert!(txt.starts_with('"'));

    let bytes = txt.as_bytes();
    let mut i = 1;
    loop {
        match txt[i..].find(['"', '\\', '\n', '\r']).map(|x| x + i) {
            Some(j) if bytes[j] == b'\\' => {
                // skip the escape marker and the character it escapes;
                // decoding happens once the body is delimited
                let skipped = txt[j + 1..].chars().next().map_or(0, char::len_utf8);
                i = j + 1 + skipped;
            }
            Some(j) if bytes[j] == b'"' => {
                let body = unescape(&txt[1..j]).map_err(|err| (err.into(), 1))?;
                return Ok((body, j + 1));
            }
            _ => {
                return Err((ErrorKind::Expected("closing '\"'".into()), 0));
            }
        }
    }
}

/// Consume horizontal whitespaces.
fn ws(txt: &str) -> usize {
    txt.bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count()
}

/// Indicate whether the end-of-line or a comment has been reached.
fn eol(txt: &str) -> bool {
    txt.is_empty() || txt.starts_with(['\n', '\r', '#'])
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use tern_term::ns::xsd;
    use test_case::test_case;

    fn first(txt: &str) -> Result<Statement, Error> {
        parse_str(txt).next().expect("no statement")
    }

    #[test]
    fn simple_nt_string() {
        let nt = r#"
            <http://localhost/ex#me> <http://example.org/ns/knows> _:b1.
            _:b1 <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.org/ns/Person>.
            _:b1 <http://example.org/ns/name> "Alice".
        "#;
        let statements: Vec<_> = parse_str(nt).collect::<Result<_, _>>().unwrap();
        assert_eq!(statements.len(), 3);
        assert_eq!(
            statements[0].s().as_iri().unwrap().as_str(),
            "http://localhost/ex#me"
        );
        assert_eq!(statements[1].p().as_str(), rdf::PREFIX.to_owned() + "type");
        let name = statements[2].o().as_literal().unwrap();
        assert_eq!(&*name.lexical_form(), "Alice");
        assert_eq!(name.datatype().as_str(), xsd::string);
    }

    #[test]
    fn empty_input() {
        assert!(parse_str("").next().is_none());
    }

    #[test]
    fn blank_and_comment_lines() {
        let nt = "\n   \n# a comment\n  # indented comment\n<urn:s> <urn:p> <urn:o> .\n";
        let statements: Vec<_> = parse_str(nt).collect::<Result<_, _>>().unwrap();
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn trailing_comment() {
        let st = first("<urn:s> <urn:p> <urn:o> . # comment\n").unwrap();
        assert_eq!(st.o().as_iri().unwrap().as_str(), "urn:o");
    }

    #[test]
    fn bnode_identity_within_session() {
        let st = first("_:a <urn:p> _:a .").unwrap();
        let s = st.s().as_blank_node().unwrap();
        let o = st.o().as_blank_node().unwrap();
        assert!(s.ptr_eq(o));
    }

    #[test]
    fn bnode_identity_across_statements() {
        let nt = "_:a <urn:p> _:b .\n_:b <urn:p> _:a .";
        let statements: Vec<_> = parse_str(nt).collect::<Result<_, _>>().unwrap();
        let a1 = statements[0].s().as_blank_node().unwrap();
        let b1 = statements[0].o().as_blank_node().unwrap();
        let b2 = statements[1].s().as_blank_node().unwrap();
        let a2 = statements[1].o().as_blank_node().unwrap();
        assert!(a1.ptr_eq(a2));
        assert!(b1.ptr_eq(b2));
        assert!(!a1.ptr_eq(b1));
    }

    #[test]
    fn bnode_identity_not_shared_across_sessions() {
        let a1 = first("_:a <urn:p> <urn:o> .").unwrap();
        let a2 = first("_:a <urn:p> <urn:o> .").unwrap();
        assert!(!a1
            .s()
            .as_blank_node()
            .unwrap()
            .ptr_eq(a2.s().as_blank_node().unwrap()));
    }

    #[test_case(r#""chat""#, None; "plain")]
    #[test_case(r#""chat"@en"#, Some("en"); "lang")]
    #[test_case(r#""chat"@en-GB"#, Some("en-GB"); "lang with subtag")]
    fn literal_objects(object: &str, tag: Option<&str>) {
        let st = first(&format!("<urn:s> <urn:p> {object} .")).unwrap();
        let lit = st.o().as_literal().unwrap();
        assert_eq!(&*lit.lexical_form(), "chat");
        assert_eq!(lit.language_tag().map(|t| t.as_str()), tag);
    }

    #[test]
    fn typed_literal_object() {
        let st = first(r#"<urn:s> <urn:p> "42"^^<http://www.w3.org/2001/XMLSchema#integer> ."#)
            .unwrap();
        let lit = st.o().as_literal().unwrap();
        assert_eq!(lit.datatype().as_str(), xsd::integer);
        assert!(matches!(
            lit.numeric_cmp(&42i64),
            Ok(std::cmp::Ordering::Equal)
        ));
    }

    #[test]
    fn datatype_after_spaces() {
        // whitespace is tolerated after the ^^ marker
        let st = first(r#"<urn:s> <urn:p> "42"^^ <http://www.w3.org/2001/XMLSchema#integer> ."#)
            .unwrap();
        assert_eq!(st.o().as_literal().unwrap().datatype().as_str(), xsd::integer);
    }

    #[test]
    fn lang_string_datatype_requires_tag() {
        let line = r#"<urn:s> <urn:p> "x"^^<http://www.w3.org/1999/02/22-rdf-syntax-ns#langString> ."#;
        let err = first(line).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidLiteral));
    }

    #[test]
    fn escaped_literal_body() {
        let st = first(r#"<urn:s> <urn:p> "say \"hi\"\n" ."#).unwrap();
        assert_eq!(&*st.o().as_literal().unwrap().lexical_form(), "say \"hi\"\n");
    }

    #[test]
    fn surrogate_pair_in_literal() {
        let st = first(r#"<urn:s> <urn:p> "\uD83D\uDE00" ."#).unwrap();
        assert_eq!(&*st.o().as_literal().unwrap().lexical_form(), "\u{1F600}");
    }

    #[test]
    fn escaped_iri() {
        let st = first(r"<urn:s\u0041> <urn:p> <urn:o> .").unwrap();
        assert_eq!(st.s().as_iri().unwrap().as_str(), "urn:sA");
    }

    #[test_case("<urn:s <urn:p> <urn:o> .", 1; "unclosed subject iri")]
    #[test_case("\n<urn:s> <urn:p> .", 2; "missing object on line 2")]
    #[test_case("<urn:s> _:b <urn:o> .", 1; "bnode predicate")]
    #[test_case(r#"<urn:s> "not an identifier" ."#, 1; "literal predicate")]
    fn syntax_errors(nt: &str, line: usize) {
        let err = first(nt).unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.position().0, line);
    }

    #[test]
    fn error_column_and_text() {
        let err = first(r#"<urn:s> "not an identifier" ."#).unwrap_err();
        assert_eq!(err.position(), (1, 8));
        assert_eq!(err.line_text(), r#"<urn:s> "not an identifier" ."#);
    }

    #[test]
    fn ill_typed_literal_tolerated_by_default() {
        let st = first(r#"<urn:s> <urn:p> "abc"^^<http://www.w3.org/2001/XMLSchema#integer> ."#)
            .unwrap();
        let lit = st.o().as_literal().unwrap();
        assert!(lit.is_ill_typed());
        assert_eq!(&*lit.lexical_form(), "abc");
    }

    #[test]
    fn validate_rejects_ill_typed_literal() {
        let mut config = Config::default();
        config.set_validate(true);
        let parser = NTriplesParser::new_with_config(config);
        let err = parser
            .parse_str(r#"<urn:s> <urn:p> "abc"^^<http://www.w3.org/2001/XMLSchema#integer> ."#)
            .next()
            .unwrap()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn validate_requires_period() {
        let nt = "<urn:s> <urn:p> <urn:o>";
        assert!(first(nt).is_ok());

        let mut config = Config::default();
        config.set_validate(true);
        let parser = NTriplesParser::new_with_config(config);
        let err = parser.parse_str(nt).next().unwrap().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Expected(e) if e == "'.'"));
    }

    #[test]
    fn validate_rejects_trailing_garbage() {
        let nt = "<urn:s> <urn:p> <urn:o> . <urn:x>";
        assert!(first(nt).is_ok());

        let mut config = Config::default();
        config.set_validate(true);
        let parser = NTriplesParser::new_with_config(config);
        assert!(parser.parse_str(nt).next().unwrap().is_err());
    }

    #[test]
    fn validate_requires_absolute_iris() {
        let nt = "<s> <urn:p> <urn:o> .";
        assert!(first(nt).is_ok());

        let mut config = Config::default();
        config.set_validate(true);
        let parser = NTriplesParser::new_with_config(config);
        let err = parser.parse_str(nt).next().unwrap().unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(err.kind(), ErrorKind::RelativeIri(iri) if iri == "s"));
    }

    #[test]
    fn canonicalize_literal_on_read() {
        let mut config = Config::default();
        config.set_canonicalize(true);
        let parser = NTriplesParser::new_with_config(config);
        let st = parser
            .parse_str(r#"<urn:s> <urn:p> "100.0"^^<http://www.w3.org/2001/XMLSchema#double> ."#)
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(&*st.o().as_literal().unwrap().lexical_form(), "1.0E2");
    }

    #[test]
    fn intern_predicates() {
        let nt = "<urn:s> <urn:p> <urn:o> .\n<urn:o> <urn:p> <urn:s> .";

        let statements: Vec<_> = parse_str(nt).collect::<Result<_, _>>().unwrap();
        assert!(!statements[0].p().ptr_eq(statements[1].p()));

        let mut config = Config::default();
        config.set_intern(true);
        let parser = NTriplesParser::new_with_config(config);
        let statements: Vec<_> = parser.parse_str(nt).collect::<Result<_, _>>().unwrap();
        assert!(statements[0].p().ptr_eq(statements[1].p()));
    }

    #[test]
    fn parse_single_statement() {
        let parsed = NTriplesParser::new()
            .parse_single("<urn:s> <urn:p> <urn:o> .")
            .unwrap();
        assert!(matches!(parsed, Parsed::Statement(_)));
    }

    #[test_case("<urn:s>"; "iri")]
    #[test_case("  <urn:s>  "; "iri with spaces")]
    #[test_case("_:b1"; "bnode")]
    #[test_case(r#""chat"@en"#; "lang literal")]
    #[test_case(r#""42"^^<http://www.w3.org/2001/XMLSchema#integer>"#; "typed literal")]
    fn parse_single_term(txt: &str) {
        let parsed = NTriplesParser::new().parse_single(txt).unwrap();
        assert!(matches!(parsed, Parsed::Term(_)));
    }

    #[test]
    fn parse_single_retries_from_line_start() {
        // fails as a statement (no predicate), then succeeds as a bare term
        // parsed from the very start of the text
        let parsed = NTriplesParser::new().parse_single("<urn:s>").unwrap();
        assert_eq!(parsed, Parsed::Term(Term::Iri(IriRef::new("urn:s").unwrap())));
    }

    #[test]
    fn parse_single_combined_failure() {
        let err = NTriplesParser::new().parse_single("@?!").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Expected(_)));
    }

    #[test]
    fn parse_single_rejects_trailing_garbage() {
        assert!(NTriplesParser::new().parse_single("<urn:s> junk").is_err());
    }
}
