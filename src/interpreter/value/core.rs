use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::{
    error::ExpressionError,
    interpreter::evaluator::core::EvalResult,
    util::num::{bigint_to_f64, f64_to_bigint_exact, format_real},
};

/// Magnitude below which every integral `f64` is an exact integer.
const MAX_EXACT_REAL: f64 = 9_007_199_254_740_992.0;

/// Represents a number in the calculator.
///
/// Operands start out as integers of unbounded size, and `+ - *` on
/// integers stay exact. Division that does not divide exactly and negative
/// or real exponents produce reals.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer of arbitrary size.
    Integer(BigInt),
    /// A double precision floating-point value.
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(BigInt::from(v))
    }
}

impl Value {
    /// Parses a literal made of ASCII digits.
    ///
    /// Returns `None` if `digits` is empty or contains anything but ASCII
    /// digits.
    ///
    /// # Example
    /// ```
    /// use smartcalc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_literal("42"), Some(Value::from(42_i64)));
    /// assert_eq!(Value::from_literal("4a"), None);
    /// assert_eq!(Value::from_literal("99999999999999999999").unwrap().to_string(),
    ///            "99999999999999999999");
    /// ```
    #[must_use]
    pub fn from_literal(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<BigInt>().ok().map(Self::Integer)
    }

    /// Returns the value as an `f64`.
    ///
    /// # Errors
    /// `Overflow` if the value is an integer too large for an `f64`.
    pub fn as_real(&self) -> EvalResult<f64> {
        match self {
            Self::Integer(n) => bigint_to_f64(n).ok_or(ExpressionError::Overflow),
            Self::Real(r) => Ok(*r),
        }
    }

    /// Returns `true` if the value equals zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_zero(),
            Self::Real(r) => *r == 0.0,
        }
    }

    /// Returns `true` if the value is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_negative(),
            Self::Real(r) => *r < 0.0,
        }
    }

    /// Folds a mathematically integral real into an `Integer`.
    ///
    /// Applied once to the final result of an evaluation so that `2 ^ -1 * 4`
    /// reports `2` rather than a real. Fractional and non-finite reals are
    /// returned unchanged, as are reals of magnitude 2^53 or more, which are
    /// always integral.
    ///
    /// # Example
    /// ```
    /// use smartcalc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Real(5.0).normalized(), Value::from(5_i64));
    /// assert_eq!(Value::Real(0.5).normalized(), Value::Real(0.5));
    /// assert_eq!(Value::Real(1e20).normalized(), Value::Real(1e20));
    /// ```
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Real(r) if r.abs() < MAX_EXACT_REAL => {
                f64_to_bigint_exact(r).map_or(self, Self::Integer)
            },
            Self::Real(_) | Self::Integer(_) => self,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => f.write_str(&format_real(*r)),
        }
    }
}
