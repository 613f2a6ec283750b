//! Parsed values of numeric literals.
//!
//! A [`Value`] is the kind-specific parsed form stored inside a numeric
//! [`Literal`](crate::Literal). Arithmetic between two values promotes both
//! operands to the more general of their kinds (double is more general than
//! decimal, decimal more general than integer) and computes in that kind's
//! native representation. Ordering goes through [`BigDecimal`] so that
//! double-precision rounding artifacts never leak into comparisons.

use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
pub use num_bigint::Sign;
use num_traits::ToPrimitive;

use crate::datatype;

/// The kind of a [`Value`], ordered by generality.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ValueKind {
    /// Arbitrary-precision integer (`xsd:integer`).
    Integer,
    /// Arbitrary-precision decimal (`xsd:decimal`).
    Decimal,
    /// IEEE-754 double precision (`xsd:double`).
    Double,
}

/// The parsed value of a numeric literal.
#[derive(Clone, Debug)]
pub enum Value {
    /// Arbitrary-precision integer.
    Integer(BigInt),
    /// Arbitrary-precision decimal.
    Decimal(BigDecimal),
    /// IEEE-754 double.
    Double(f64),
}

use Value::*;

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Integer(_) => ValueKind::Integer,
            Decimal(_) => ValueKind::Decimal,
            Double(_) => ValueKind::Double,
        }
    }

    /// The unique canonical lexical form of this value for its kind.
    pub fn canonical_form(&self) -> String {
        match self {
            Integer(i) => datatype::canonical_integer(i),
            Decimal(d) => datatype::canonical_decimal(d),
            Double(f) => datatype::canonical_double(*f),
        }
    }

    /// Convert to an exact decimal representation.
    ///
    /// Returns `None` for NaN and the infinities, which have no decimal
    /// counterpart.
    pub fn to_big_decimal(&self) -> Option<BigDecimal> {
        match self {
            Integer(i) => Some(BigDecimal::from(i.clone())),
            Decimal(d) => Some(d.clone()),
            Double(f) => BigDecimal::try_from(*f).ok(),
        }
    }

    /// Convert to a double, possibly losing precision.
    pub fn to_f64(&self) -> f64 {
        match self {
            Integer(i) => i.to_f64().unwrap_or(f64::NAN),
            Decimal(d) => d.to_f64().unwrap_or(f64::NAN),
            Double(f) => *f,
        }
    }

    /// Order two values by their mathematical value.
    ///
    /// Both operands are converted to [`BigDecimal`] first; raw
    /// double-precision bit patterns are never compared directly. NaN and
    /// the infinities, which have no decimal form, fall back to IEEE
    /// comparison and, for NaN, to a total order on the bit representation.
    pub fn numeric_cmp(&self, other: &Self) -> Ordering {
        if let (Some(a), Some(b)) = (self.to_big_decimal(), other.to_big_decimal()) {
            return a.cmp(&b);
        }
        let (a, b) = (self.to_f64(), other.to_f64());
        a.partial_cmp(&b)
            .unwrap_or_else(|| a.to_bits().cmp(&b.to_bits()))
    }

    /// The sign of this value. `Sign::NoSign` for zero and NaN.
    pub fn sign(&self) -> Sign {
        match self {
            Integer(i) => i.sign(),
            Decimal(d) => d.sign(),
            Double(f) if *f < 0.0 => Sign::Minus,
            Double(f) if *f > 0.0 => Sign::Plus,
            Double(_) => Sign::NoSign,
        }
    }

    /// Whether this value is NaN (only a double can be).
    pub fn is_nan(&self) -> bool {
        matches!(self, Double(f) if f.is_nan())
    }

    /// Whether this value is finite (integers and decimals always are).
    pub fn is_finite(&self) -> bool {
        match self {
            Double(f) => f.is_finite(),
            _ => true,
        }
    }

    /// The sign of this value if it is infinite, `None` otherwise
    /// (including for NaN).
    pub fn infinite_sign(&self) -> Option<Sign> {
        match self {
            Double(f) if *f == f64::INFINITY => Some(Sign::Plus),
            Double(f) if *f == f64::NEG_INFINITY => Some(Sign::Minus),
            _ => None,
        }
    }

    /// Whether this value is zero (of either sign, for doubles).
    pub fn is_zero(&self) -> bool {
        match self {
            Double(f) => *f == 0.0,
            _ => self.sign() == Sign::NoSign,
        }
    }

    /// The absolute value, of the same kind.
    pub fn abs(&self) -> Value {
        if self.sign() == Sign::Minus {
            match self {
                Integer(i) => Integer(-i.clone()),
                Decimal(d) => Decimal(-d.clone()),
                Double(f) => Double(-f),
            }
        } else {
            self.clone()
        }
    }

    /// Promote a copy of this value to kind `kind`.
    ///
    /// `kind` must be at least as general as `self.kind()`.
    fn promote_to(&self, kind: ValueKind) -> Value {
        debug_assert!(kind >= self.kind());
        match (self, kind) {
            (Integer(i), ValueKind::Decimal) => Decimal(BigDecimal::from(i.clone())),
            (_, ValueKind::Double) => Double(self.to_f64()),
            _ => self.clone(),
        }
    }

    /// Promote both operands to the more general of their two kinds.
    fn promote_pair(a: &Value, b: &Value) -> (Value, Value) {
        let kind = a.kind().max(b.kind());
        (a.promote_to(kind), b.promote_to(kind))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.numeric_cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.numeric_cmp(other))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.canonical_form())
    }
}

macro_rules! impl_value_op {
    ($trait:ident, $method:ident) => {
        impl std::ops::$trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                use std::ops::$trait;
                match Value::promote_pair(self, rhs) {
                    (Integer(a), Integer(b)) => Integer($trait::$method(a, b)),
                    (Decimal(a), Decimal(b)) => Decimal($trait::$method(a, b)),
                    (Double(a), Double(b)) => Double($trait::$method(a, b)),
                    _ => unreachable!(), // promote_pair always yields matching kinds
                }
            }
        }
    };
}

impl_value_op!(Add, add);
impl_value_op!(Sub, sub);
impl_value_op!(Mul, mul);

impl std::ops::Div<&Value> for &Value {
    type Output = Value;

    /// Division never stays in the integer kind: two integers divide into a
    /// decimal, so that `1 / 2` is `0.5` rather than a truncated `0`.
    /// A zero divisor forces the double kind, where IEEE semantics yield an
    /// infinity or NaN instead of a panic.
    fn div(self, rhs: &Value) -> Value {
        let mut kind = self.kind().max(rhs.kind()).max(ValueKind::Decimal);
        if rhs.is_zero() {
            kind = ValueKind::Double;
        }
        match (self.promote_to(kind), rhs.promote_to(kind)) {
            (Decimal(a), Decimal(b)) => Decimal(a / b),
            (Double(a), Double(b)) => Double(a / b),
            _ => unreachable!(), // both operands were promoted to `kind`
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Integer(BigInt::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Double(f)
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
