//! Datatype registry: per-datatype validation, parsing, and canonical
//! lexical forms.
//!
//! Canonicalization is keyed by datatype IRI through a process-wide
//! immutable registry of [`DatatypeHandler`]s, rather than by inline
//! branching on datatype strings. `xsd:double` is the fully worked-out
//! numeric kind; `xsd:integer` and `xsd:decimal` follow the same pattern,
//! and `xsd:string` is a passthrough.

use std::collections::HashMap;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use lazy_static::lazy_static;
use num_bigint::BigInt;
use regex::Regex;

use crate::ns::xsd;
use crate::value::Value;

/// The lexical-to-value strategy of one datatype.
///
/// All handlers are stateless and process-wide; the registry hands out
/// `&'static` references that can be shared freely across sessions and
/// threads.
pub trait DatatypeHandler: Send + Sync {
    /// Whether `lexical` is a valid lexical form for this datatype.
    fn is_valid(&self, lexical: &str) -> bool;

    /// Parse `lexical` into a value, or `None` if it is not parseable
    /// (or if this datatype has no value model, like `xsd:string`).
    fn parse(&self, lexical: &str) -> Option<Value>;

    /// The unique canonical lexical form of `value`.
    ///
    /// Canonicalization is idempotent: parsing the result and
    /// canonicalizing again reproduces the same string.
    fn canonicalize(&self, value: &Value) -> String;
}

lazy_static! {
    // Lexical spaces per XML Schema 1.0; INF/NaN are handled apart.
    static ref INTEGER_LEX: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
    static ref DECIMAL_LEX: Regex =
        Regex::new(r"(?x) ^ [+-]? (?: [0-9]+ (?: \. [0-9]* )? | \. [0-9]+ ) $").unwrap();
    static ref DOUBLE_LEX: Regex = Regex::new(
        r"(?x) ^ [+-]? (?: [0-9]+ (?: \. [0-9]* )? | \. [0-9]+ ) (?: [eE] [+-]? [0-9]+ )? $"
    )
    .unwrap();

    static ref REGISTRY: HashMap<&'static str, &'static dyn DatatypeHandler> = {
        let mut m: HashMap<&'static str, &'static dyn DatatypeHandler> = HashMap::new();
        m.insert(xsd::string, &XsdString);
        m.insert(xsd::integer, &XsdInteger);
        m.insert(xsd::decimal, &XsdDecimal);
        m.insert(xsd::double, &XsdDouble);
        m
    };
}

/// Look up the handler registered for the datatype IRI `dt`.
///
/// Datatypes without a registered handler are opaque: their literals keep
/// their lexical form untouched and carry no parsed value.
pub fn handler(dt: &str) -> Option<&'static dyn DatatypeHandler> {
    REGISTRY.get(dt).copied()
}

/// Handler for `xsd:string`: every text is valid, nothing is parsed.
struct XsdString;

impl DatatypeHandler for XsdString {
    fn is_valid(&self, _lexical: &str) -> bool {
        true
    }

    fn parse(&self, _lexical: &str) -> Option<Value> {
        None
    }

    fn canonicalize(&self, value: &Value) -> String {
        // strings carry no parsed value, so there is nothing to rewrite;
        // kept total for the trait's sake
        value.canonical_form()
    }
}

/// Handler for `xsd:integer`.
struct XsdInteger;

impl DatatypeHandler for XsdInteger {
    fn is_valid(&self, lexical: &str) -> bool {
        INTEGER_LEX.is_match(lexical)
    }

    fn parse(&self, lexical: &str) -> Option<Value> {
        if !self.is_valid(lexical) {
            return None;
        }
        BigInt::from_str(lexical.trim_start_matches('+'))
            .ok()
            .map(Value::Integer)
    }

    fn canonicalize(&self, value: &Value) -> String {
        match value {
            Value::Integer(i) => canonical_integer(i),
            _ => value.canonical_form(),
        }
    }
}

/// Handler for `xsd:decimal`.
struct XsdDecimal;

impl DatatypeHandler for XsdDecimal {
    fn is_valid(&self, lexical: &str) -> bool {
        DECIMAL_LEX.is_match(lexical)
    }

    fn parse(&self, lexical: &str) -> Option<Value> {
        if !self.is_valid(lexical) {
            return None;
        }
        // BigDecimal's parser requires at least one integer digit
        let lexical = lexical.trim_start_matches('+');
        let owned;
        let lexical = if let Some(frac) = lexical.strip_prefix('.') {
            owned = format!("0.{frac}");
            &owned
        } else if let Some(frac) = lexical.strip_prefix("-.") {
            owned = format!("-0.{frac}");
            &owned
        } else {
            lexical
        };
        BigDecimal::from_str(lexical).ok().map(Value::Decimal)
    }

    fn canonicalize(&self, value: &Value) -> String {
        match value {
            Value::Decimal(d) => canonical_decimal(d),
            _ => value.canonical_form(),
        }
    }
}

/// Handler for `xsd:double`, the fully worked-out numeric kind.
struct XsdDouble;

impl DatatypeHandler for XsdDouble {
    fn is_valid(&self, lexical: &str) -> bool {
        matches!(lexical, "NaN" | "INF" | "+INF" | "-INF") || DOUBLE_LEX.is_match(lexical)
    }

    fn parse(&self, lexical: &str) -> Option<Value> {
        let f = match lexical {
            "NaN" => f64::NAN,
            "INF" | "+INF" => f64::INFINITY,
            "-INF" => f64::NEG_INFINITY,
            _ if DOUBLE_LEX.is_match(lexical) => lexical.parse().ok()?,
            _ => return None,
        };
        Some(Value::Double(f))
    }

    fn canonicalize(&self, value: &Value) -> String {
        match value {
            Value::Double(f) => canonical_double(*f),
            _ => value.canonical_form(),
        }
    }
}

/// Canonical lexical form of an `xsd:double` value.
///
/// Finite non-zero values are rendered with 15 significant decimal digits
/// in scientific notation, trailing fractional zeros stripped (one `0`
/// digit retained when all are stripped), and no `+` or leading zeros in
/// the exponent. The sign of negative zero is not preserved.
pub fn canonical_double(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f == f64::INFINITY {
        return "INF".to_string();
    }
    if f == f64::NEG_INFINITY {
        return "-INF".to_string();
    }
    if f == 0.0 {
        return "0.0E0".to_string();
    }
    // 15 significant digits: one leading digit plus 14 fractional ones.
    // Rust's {:E} already writes the exponent without '+' or leading zeros.
    let repr = format!("{f:.14E}");
    let Some((mantissa, exponent)) = repr.split_once('E') else {
        return repr;
    };
    let mut mantissa = mantissa.trim_end_matches('0').to_string();
    if mantissa.ends_with('.') {
        mantissa.push('0');
    }
    format!("{mantissa}E{exponent}")
}

/// Canonical lexical form of an `xsd:integer` value:
/// no `+`, no leading zeros, `-` retained for negative values.
pub fn canonical_integer(i: &BigInt) -> String {
    i.to_string()
}

/// Canonical lexical form of an `xsd:decimal` value:
/// no `+`, no superfluous leading or trailing zeros, and always at least
/// one digit on each side of the decimal point.
pub fn canonical_decimal(d: &BigDecimal) -> String {
    let mut repr = d.normalized().to_string();
    if !repr.contains('.') {
        repr.push_str(".0");
    }
    repr
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case(3.14 => "3.14E0")]
    #[test_case(100.0 => "1.0E2")]
    #[test_case(0.0001 => "1.0E-4")]
    #[test_case(0.0 => "0.0E0")]
    #[test_case(-0.0 => "0.0E0" ; "negative zero")]
    #[test_case(-42.5 => "-4.25E1")]
    #[test_case(f64::NAN => "NaN")]
    #[test_case(f64::INFINITY => "INF")]
    #[test_case(f64::NEG_INFINITY => "-INF")]
    #[test_case(1.0 => "1.0E0")]
    #[test_case(1.0e15 => "1.0E15")]
    #[test_case(-0.75 => "-7.5E-1")]
    fn double_canonical(f: f64) -> String {
        canonical_double(f)
    }

    #[test_case("3.14E0")]
    #[test_case("1.0E2")]
    #[test_case("0.0E0")]
    #[test_case("NaN")]
    #[test_case("INF" ; "positive infinity")]
    #[test_case("-INF" ; "negative infinity")]
    #[test_case("1.0E-4")]
    fn double_canonical_idempotent(canonical: &str) {
        let Some(value) = XsdDouble.parse(canonical) else {
            panic!("canonical form {canonical:?} did not parse");
        };
        assert_eq!(XsdDouble.canonicalize(&value), canonical);
    }

    #[test_case("1e5" => true)]
    #[test_case("+1.5E-3" => true ; "explicit plus")]
    #[test_case(".5" => true ; "no integer digits")]
    #[test_case("5." => true ; "no fraction digits")]
    #[test_case("NaN" => true)]
    #[test_case("-INF" => true)]
    #[test_case("inf" => false ; "lowercase inf")]
    #[test_case("0x1p3" => false ; "hex float")]
    #[test_case("1 0" => false ; "space")]
    #[test_case("" => false ; "empty")]
    fn double_lexical(lexical: &str) -> bool {
        XsdDouble.is_valid(lexical)
    }

    #[test_case("042" => "42" ; "leading zeros")]
    #[test_case("+7" => "7" ; "plus sign")]
    #[test_case("-0" => "0" ; "negative zero int")]
    #[test_case("12345678901234567890123" => "12345678901234567890123" ; "big")]
    fn integer_canonical(lexical: &str) -> String {
        let Some(value) = XsdInteger.parse(lexical) else {
            panic!("{lexical:?} did not parse");
        };
        XsdInteger.canonicalize(&value)
    }

    #[test_case("2.50" => "2.5")]
    #[test_case(".5" => "0.5" ; "missing integer digit")]
    #[test_case("5" => "5.0" ; "missing fraction digit")]
    #[test_case("+0.10" => "0.1" ; "plus and trailing zero")]
    fn decimal_canonical(lexical: &str) -> String {
        let Some(value) = XsdDecimal.parse(lexical) else {
            panic!("{lexical:?} did not parse");
        };
        XsdDecimal.canonicalize(&value)
    }

    #[test]
    fn decimal_canonical_negative() {
        let value = XsdDecimal.parse("-.5").unwrap();
        assert_eq!(XsdDecimal.canonicalize(&value), "-0.5");
    }

    #[test]
    fn registry_lookup() {
        assert!(handler(crate::ns::xsd::double).is_some());
        assert!(handler(crate::ns::xsd::string).is_some());
        assert!(handler("http://example.org/ns#frobnitz").is_none());
    }
}
