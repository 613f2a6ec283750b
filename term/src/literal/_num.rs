//! Arithmetic, comparison, classification and rounding for numeric
//! literals.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::value::{Sign, Value};
use crate::{Literal, Result, TermError};

/// Something usable as the other operand of numeric literal arithmetic
/// and comparison: another literal, or a raw number.
pub trait NumericOperand {
    /// The numeric value of this operand,
    /// or [`TermError::NotNumeric`] if it has none.
    fn numeric_value(&self) -> Result<Value>;
}

impl NumericOperand for Literal {
    fn numeric_value(&self) -> Result<Value> {
        self.value()
            .cloned()
            .ok_or_else(|| TermError::NotNumeric(self.to_string()))
    }
}

impl NumericOperand for f64 {
    fn numeric_value(&self) -> Result<Value> {
        Ok(Value::Double(*self))
    }
}

impl NumericOperand for i64 {
    fn numeric_value(&self) -> Result<Value> {
        Ok(Value::from(*self))
    }
}

impl Literal {
    /// Sum of this literal and `rhs`, following the promotion rules of
    /// [`Value`]. The result is a fresh literal of the promoted kind with
    /// an empty lexical cache; neither operand is mutated.
    pub fn checked_add<T: NumericOperand>(&self, rhs: &T) -> Result<Literal> {
        Ok(Literal::from_value(
            &self.numeric_value()? + &rhs.numeric_value()?,
        ))
    }

    /// Difference of this literal and `rhs`. See [`Literal::checked_add`].
    pub fn checked_sub<T: NumericOperand>(&self, rhs: &T) -> Result<Literal> {
        Ok(Literal::from_value(
            &self.numeric_value()? - &rhs.numeric_value()?,
        ))
    }

    /// Product of this literal and `rhs`. See [`Literal::checked_add`].
    pub fn checked_mul<T: NumericOperand>(&self, rhs: &T) -> Result<Literal> {
        Ok(Literal::from_value(
            &self.numeric_value()? * &rhs.numeric_value()?,
        ))
    }

    /// Quotient of this literal and `rhs`. Integer operands divide into a
    /// decimal; see [`Value`] for the division rules.
    pub fn checked_div<T: NumericOperand>(&self, rhs: &T) -> Result<Literal> {
        Ok(Literal::from_value(
            &self.numeric_value()? / &rhs.numeric_value()?,
        ))
    }

    /// Order this literal against another numeric operand.
    ///
    /// Both sides are converted to arbitrary-precision decimals before
    /// comparing (see [`Value::numeric_cmp`]), so double-precision rounding
    /// artifacts do not affect the ordering. Returns an error if either
    /// side is not numeric; for a total order over arbitrary literals use
    /// [`Literal::compare`].
    pub fn numeric_cmp<T: NumericOperand>(&self, rhs: &T) -> Result<Ordering> {
        Ok(self.numeric_value()?.numeric_cmp(&rhs.numeric_value()?))
    }

    /// Total order over arbitrary literals: numeric literals compare by
    /// value; everything else falls back to ordering by datatype IRI and
    /// lexical form.
    pub fn compare(&self, other: &Literal) -> Ordering {
        match (self.value(), other.value()) {
            (Some(a), Some(b)) => a.numeric_cmp(b),
            _ => self
                .datatype()
                .cmp(other.datatype())
                .then_with(|| str::cmp(&self.lexical_form(), &other.lexical_form())),
        }
    }

    /// Whether this literal wraps a NaN double.
    pub fn is_nan(&self) -> bool {
        self.value().is_some_and(Value::is_nan)
    }

    /// Whether this literal wraps a finite number.
    /// `false` for non-numeric literals.
    pub fn is_finite(&self) -> bool {
        self.value().is_some_and(Value::is_finite)
    }

    /// The sign of this literal's value if it is infinite,
    /// `None` for finite values, NaN, and non-numeric literals.
    pub fn infinite_sign(&self) -> Option<Sign> {
        self.value().and_then(Value::infinite_sign)
    }

    /// Whether this literal wraps zero (of either sign).
    pub fn is_zero(&self) -> bool {
        self.value().is_some_and(Value::is_zero)
    }

    /// This literal if it wraps a non-zero number, `None` otherwise.
    pub fn nonzero(&self) -> Option<&Literal> {
        match self.value() {
            Some(value) if !value.is_zero() => Some(self),
            _ => None,
        }
    }

    /// A new literal wrapping the smallest double not less than this value.
    pub fn ceil(&self) -> Result<Literal> {
        Ok(Literal::from(self.numeric_value()?.to_f64().ceil()))
    }

    /// A new literal wrapping the largest double not greater than this value.
    pub fn floor(&self) -> Result<Literal> {
        Ok(Literal::from(self.numeric_value()?.to_f64().floor()))
    }

    /// A new literal wrapping this value rounded to the nearest double,
    /// half away from zero.
    pub fn round(&self) -> Result<Literal> {
        Ok(Literal::from(self.numeric_value()?.to_f64().round()))
    }

    /// The absolute value: this very literal when already non-negative
    /// (zero and NaN included), a fresh literal of the same kind otherwise.
    pub fn abs(&self) -> Result<Cow<Literal>> {
        let value = self.numeric_value()?;
        if value.sign() == Sign::Minus {
            Ok(Cow::Owned(Literal::from_value(value.abs())))
        } else {
            Ok(Cow::Borrowed(self))
        }
    }
}

impl PartialEq<f64> for Literal {
    fn eq(&self, other: &f64) -> bool {
        matches!(self.numeric_cmp(other), Ok(Ordering::Equal))
    }
}

impl PartialOrd<f64> for Literal {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.numeric_cmp(other).ok()
    }
}

impl PartialEq<i64> for Literal {
    fn eq(&self, other: &i64) -> bool {
        matches!(self.numeric_cmp(other), Ok(Ordering::Equal))
    }
}

impl PartialOrd<i64> for Literal {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.numeric_cmp(other).ok()
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
