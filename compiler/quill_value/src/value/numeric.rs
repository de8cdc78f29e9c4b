//! Numeric scalar backing `Value::Number`.
//!
//! Quill has a single number type stored as `f64`. Integral values render
//! without a fractional part, so `3.0` prints as `3`.

use std::cmp::Ordering;
use std::fmt;

use super::Value;
use crate::errors::{type_mismatch, EvalResult};

/// A runtime number.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct NumericValue(f64);

impl NumericValue {
    /// The zero value.
    pub const ZERO: Self = Self(0.0);

    /// Create a number from a raw `f64`.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Extract the raw `f64`.
    #[inline]
    pub const fn raw(self) -> f64 {
        self.0
    }

    /// Truncate toward zero, saturating at the `i64` range. NaN maps to 0.
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float to int `as` casts saturate, which is the intended coercion"
    )]
    pub fn to_long(self) -> i64 {
        self.0 as i64
    }

    /// Whether the value has no fractional part.
    #[inline]
    pub fn is_integral(self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0
    }

    /// Coerce `value` to a number, labelling the failure with `context`.
    ///
    /// `context` names what the operand was used for, e.g.
    /// `"'address' to a list index"`.
    pub fn as_number(value: &Value, context: &str) -> EvalResult<NumericValue> {
        match value {
            Value::Number(n) => Ok(*n),
            other => Err(type_mismatch(context, other.type_name())),
        }
    }

    pub fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }

    pub fn subtract(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }

    pub fn multiply(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }

    /// IEEE-754 division; dividing by zero yields an infinity or NaN.
    pub fn divide(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }

    /// Total ordering. Numerically equal values (`-0` and `0`) are `Equal`;
    /// every NaN, whatever its sign bit, equals every other NaN and sorts
    /// above all other numbers.
    pub fn compare(self, rhs: Self) -> Ordering {
        match (self.0.is_nan(), rhs.0.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.0.partial_cmp(&rhs.0).unwrap_or(Ordering::Equal),
        }
    }

    /// Equality consistent with `compare`.
    pub fn equals(self, rhs: Self) -> bool {
        self.compare(rhs) == Ordering::Equal
    }
}

impl PartialEq for NumericValue {
    fn eq(&self, other: &Self) -> bool {
        self.equals(*other)
    }
}

impl From<f64> for NumericValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i64> for NumericValue {
    #[inline]
    #[expect(
        clippy::cast_precision_loss,
        reason = "runtime numbers are f64; large integers round like any literal"
    )]
    fn from(value: i64) -> Self {
        Self(value as f64)
    }
}

impl From<usize> for NumericValue {
    #[inline]
    #[expect(
        clippy::cast_precision_loss,
        reason = "list lengths and positions are far below 2^53"
    )]
    fn from(value: usize) -> Self {
        Self(value as f64)
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integral() && self.0.abs() < 1e15 {
            write!(f, "{}", self.to_long())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integral_values_render_without_fraction() {
        assert_eq!(NumericValue::new(3.0).to_string(), "3");
        assert_eq!(NumericValue::new(-12.0).to_string(), "-12");
        assert_eq!(NumericValue::new(0.5).to_string(), "0.5");
    }

    #[test]
    fn to_long_truncates_toward_zero() {
        assert_eq!(NumericValue::new(2.9).to_long(), 2);
        assert_eq!(NumericValue::new(-2.9).to_long(), -2);
        assert_eq!(NumericValue::new(f64::NAN).to_long(), 0);
        assert_eq!(NumericValue::new(1e300).to_long(), i64::MAX);
    }

    #[test]
    fn as_number_reports_context() {
        let err = NumericValue::as_number(&Value::string("x"), "a test operand").unwrap_err();
        assert_eq!(err.message, "expected a number as a test operand, got string");
        assert_eq!(
            NumericValue::as_number(&Value::number(4), "n").unwrap(),
            NumericValue::new(4.0)
        );
    }

    #[test]
    fn division_follows_ieee() {
        let inf = NumericValue::new(1.0).divide(NumericValue::ZERO);
        assert!(inf.raw().is_infinite());
    }

    #[test]
    fn compare_is_total() {
        assert_eq!(
            NumericValue::new(1.0).compare(NumericValue::new(2.0)),
            Ordering::Less
        );
        assert_eq!(
            NumericValue::new(f64::NAN).compare(NumericValue::new(1.0)),
            Ordering::Greater
        );
        assert_eq!(
            NumericValue::new(f64::NEG_INFINITY).compare(NumericValue::new(f64::NAN)),
            Ordering::Less
        );
    }

    #[test]
    fn signed_zeros_are_equal() {
        let (neg, pos) = (NumericValue::new(-0.0), NumericValue::ZERO);
        assert_eq!(neg.compare(pos), Ordering::Equal);
        assert_eq!(pos.compare(neg), Ordering::Equal);
        assert!(neg.equals(pos));
    }

    #[test]
    fn nan_equals_itself() {
        let nan = NumericValue::new(f64::NAN);
        assert_eq!(nan.compare(nan), Ordering::Equal);
        assert!(nan.equals(nan));
        assert!(!nan.equals(NumericValue::ZERO));
        let neg_nan = NumericValue::new(-f64::NAN);
        assert!(neg_nan.equals(nan));
        assert_eq!(neg_nan.compare(NumericValue::new(1.0)), Ordering::Greater);
    }
}
