//! Backslash-escape decoding and encoding for quoted literal bodies
//! and identifier references.
//!
//! Decoding handles the seven single-character escapes,
//! 4- and 8-digit code-point escapes,
//! and UTF-16 surrogate pairs written as two consecutive 4-digit escapes.

use std::borrow::Cow;
use std::fmt::Write;
use thiserror::Error;

/// Error raised when an escape sequence can not be decoded.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum EscapeError {
    /// A backslash is not followed by a complete escape sequence.
    #[error("incomplete escape sequence")]
    Incomplete,
    /// The character after the backslash does not start an escape sequence.
    #[error("unknown escape sequence '\\{0}'")]
    Unknown(char),
    /// A code-point escape denotes a value outside the Unicode scalar range.
    #[error("\\u{0:04X} does not denote a Unicode scalar value")]
    CodePoint(u32),
}

/// Decode all escape sequences in the body of a quoted literal.
///
/// Escapes are decoded left to right in a single pass,
/// so the output of one escape is never re-examined:
/// `\\u0041` decodes to the six characters `\u0041`, not to `A`.
/// A 4-digit escape denoting a high surrogate
/// immediately followed by a 4-digit escape denoting a low surrogate
/// decodes to the single code point the pair encodes in UTF-16;
/// a surrogate escape in any other position is an error,
/// as surrogates are not Unicode scalar values.
pub fn unescape(txt: &str) -> Result<Cow<str>, EscapeError> {
    unescape_with(txt, unescape_any)
}

/// Decode the escape sequences in the body of an identifier reference,
/// where only code-point escapes are allowed.
pub fn unescape_iri(txt: &str) -> Result<Cow<str>, EscapeError> {
    unescape_with(txt, unescape_numeric)
}

fn unescape_with(
    txt: &str,
    decode: fn(&str) -> Result<(char, usize), EscapeError>,
) -> Result<Cow<str>, EscapeError> {
    let Some(pos) = txt.find('\\') else {
        return Ok(Cow::Borrowed(txt));
    };
    let mut buf = String::with_capacity(txt.len());
    buf.push_str(&txt[..pos]);
    let mut rest = &txt[pos + 1..];
    loop {
        let (chr, len) = decode(rest)?;
        buf.push(chr);
        rest = &rest[len..];
        match rest.find('\\') {
            None => {
                buf.push_str(rest);
                return Ok(Cow::Owned(buf));
            }
            Some(pos) => {
                buf.push_str(&rest[..pos]);
                rest = &rest[pos + 1..];
            }
        }
    }
}

/// Decode one escape sequence; `txt` starts right after the backslash.
/// Returns the decoded character and the number of bytes consumed.
fn unescape_any(txt: &str) -> Result<(char, usize), EscapeError> {
    match txt.bytes().next() {
        None => Err(EscapeError::Incomplete),
        Some(b'b') => Ok(('\x08', 1)),
        Some(b'f') => Ok(('\x0C', 1)),
        Some(b'n') => Ok(('\n', 1)),
        Some(b'r') => Ok(('\r', 1)),
        Some(b't') => Ok(('\t', 1)),
        Some(b'"') => Ok(('"', 1)),
        Some(b'\\') => Ok(('\\', 1)),
        _ => unescape_numeric(txt),
    }
}

fn unescape_numeric(txt: &str) -> Result<(char, usize), EscapeError> {
    match txt.bytes().next() {
        None => Err(EscapeError::Incomplete),
        Some(b'u') => {
            let code = hex_value(txt.get(1..5))?;
            if (0xD800..=0xDBFF).contains(&code) {
                if let Some(low) = low_surrogate(txt.get(5..11)) {
                    let pair = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    let chr = char::try_from(pair).map_err(|_| EscapeError::CodePoint(pair))?;
                    return Ok((chr, 11));
                }
            }
            let chr = char::try_from(code).map_err(|_| EscapeError::CodePoint(code))?;
            Ok((chr, 5))
        }
        Some(b'U') => {
            let code = hex_value(txt.get(1..9))?;
            let chr = char::try_from(code).map_err(|_| EscapeError::CodePoint(code))?;
            Ok((chr, 9))
        }
        Some(_) => Err(EscapeError::Unknown(txt.chars().next().unwrap_or('\\'))),
    }
}

fn hex_value(digits: Option<&str>) -> Result<u32, EscapeError> {
    let digits = digits.ok_or(EscapeError::Incomplete)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(EscapeError::Incomplete);
    }
    u32::from_str_radix(digits, 16).map_err(|_| EscapeError::Incomplete)
}

/// The value of a low-surrogate escape `\uXXXX`, if `txt` holds exactly one.
fn low_surrogate(txt: Option<&str>) -> Option<u32> {
    let txt = txt?;
    if !txt.starts_with("\\u") {
        return None;
    }
    let code = hex_value(txt.get(2..6)).ok()?;
    (0xDC00..=0xDFFF).contains(&code).then_some(code)
}

/// Encode `txt` as the body of a quoted literal,
/// the exact inverse of [`unescape`].
///
/// The seven single-character escapes are used for their characters;
/// any other character outside the printable ASCII range
/// becomes a 4-digit or 8-digit code-point escape.
pub fn escape(txt: &str) -> Cow<str> {
    if txt
        .bytes()
        .all(|b| (0x20..0x7F).contains(&b) && b != b'"' && b != b'\\')
    {
        return Cow::Borrowed(txt);
    }
    let mut buf = String::with_capacity(txt.len() + 2);
    for chr in txt.chars() {
        match chr {
            '\x08' => buf.push_str("\\b"),
            '\x0C' => buf.push_str("\\f"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\u{20}'..='\u{7E}' => buf.push(chr),
            _ if (chr as u32) <= 0xFFFF => {
                let _ = write!(buf, "\\u{:04X}", chr as u32);
            }
            _ => {
                let _ = write!(buf, "\\U{:08X}", chr as u32);
            }
        }
    }
    Cow::Owned(buf)
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test]
    fn no_escape_borrows() {
        assert!(matches!(unescape("hello world"), Ok(Cow::Borrowed(_))));
    }

    #[test_case(r"\b", "\x08"; "backspace")]
    #[test_case(r"\f", "\x0C"; "form feed")]
    #[test_case(r"\n", "\n"; "newline")]
    #[test_case(r"\r", "\r"; "carriage return")]
    #[test_case(r"\t", "\t"; "tab")]
    #[test_case(r#"\""#, "\""; "quote")]
    #[test_case(r"\\", "\\"; "backslash")]
    #[test_case(r"\u0041", "A"; "bmp code point")]
    #[test_case(r"\U0001F600", "\u{1F600}"; "supplementary code point")]
    #[test_case(r"\uD83D\uDE00", "\u{1F600}"; "surrogate pair")]
    #[test_case(r"a\tb\tc", "a\tb\tc"; "mixed text")]
    #[test_case(r"\\u0041", "\\u0041"; "escaped backslash is not reexamined")]
    fn unescape_ok(input: &str, expected: &str) {
        assert_eq!(unescape(input).unwrap(), expected);
    }

    #[test_case(r"\x"; "unknown escape")]
    #[test_case(r"\u00"; "truncated 4 digit")]
    #[test_case(r"\U0001F60"; "truncated 8 digit")]
    #[test_case(r"tail\"; "trailing backslash")]
    #[test_case(r"\uD83D"; "lone high surrogate")]
    #[test_case(r"\uDE00"; "lone low surrogate")]
    #[test_case(r"\uD83DA"; "high surrogate without low")]
    #[test_case(r"\UFFFFFFFF"; "out of range code point")]
    fn unescape_err(input: &str) {
        assert!(unescape(input).is_err());
    }

    #[test]
    fn surrogate_values() {
        assert_eq!(unescape(r"\uD800\uDC00").unwrap(), "\u{10000}");
        assert_eq!(unescape(r"\uDBFF\uDFFF").unwrap(), "\u{10FFFF}");
    }

    #[test]
    fn iri_rejects_string_escapes() {
        assert_eq!(unescape_iri(r"\u0041").unwrap(), "A");
        assert_eq!(unescape_iri(r"\n"), Err(EscapeError::Unknown('n')));
    }

    #[test_case("plain ascii"; "ascii")]
    #[test_case("tab\tand\nnewline"; "control")]
    #[test_case("quote\"backslash\\"; "delimiters")]
    #[test_case("caf\u{E9} \u{1F600}"; "non ascii")]
    fn escape_round_trip(txt: &str) {
        assert_eq!(unescape(&escape(txt)).unwrap(), txt);
    }

    #[test]
    fn escape_output() {
        assert_eq!(escape("a\tb"), "a\\tb");
        assert_eq!(escape("caf\u{E9}"), "caf\\u00E9");
        assert_eq!(escape("\u{1F600}"), "\\U0001F600");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
    }
}
