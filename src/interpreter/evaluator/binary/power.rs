use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::{
    error::ExpressionError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// Largest integer power, in bits, the evaluator computes exactly.
pub const MAX_POWER_BITS: u64 = 1 << 22;

impl Evaluator {
    /// Evaluates an exponentiation operation.
    ///
    /// An integer base with a non-negative integer exponent gives an exact
    /// integer. Negative and real exponents are computed in floating-point
    /// form. Raising zero to a negative power is a division by zero.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use smartcalc::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let result = Evaluator::eval_pow(&Value::from(2_i64), &Value::from(64_i64)).unwrap();
    /// assert_eq!(result.to_string(), "18446744073709551616");
    ///
    /// let result = Evaluator::eval_pow(&Value::from(2_i64), &Value::from(-1_i64)).unwrap();
    /// assert_eq!(result, Value::Real(0.5));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value) -> EvalResult<Value> {
        if base.is_zero() && exponent.is_negative() {
            return Err(ExpressionError::DivisionByZero);
        }

        if let (Value::Integer(b), Value::Integer(e)) = (base, exponent)
           && !e.is_negative()
        {
            return Self::eval_integer_pow(b, e);
        }

        Ok(Value::Real(base.as_real()?.powf(exponent.as_real()?)))
    }

    /// Raises an integer to a non-negative integer power exactly.
    ///
    /// Results wider than [`MAX_POWER_BITS`] are rejected with `Overflow`.
    fn eval_integer_pow(base: &BigInt, exponent: &BigInt) -> EvalResult<Value> {
        // 0, 1 and -1 only depend on whether the exponent is zero, even or odd.
        if base.bits() <= 1 {
            let reduced = if exponent.is_zero() {
                0
            } else if (exponent % 2_u32).is_zero() {
                2
            } else {
                1
            };
            return Ok(Value::Integer(base.pow(reduced)));
        }

        let Some(e) = exponent.to_u32() else {
            return Err(ExpressionError::Overflow);
        };
        if (base.bits() - 1).saturating_mul(u64::from(e)) > MAX_POWER_BITS {
            return Err(ExpressionError::Overflow);
        }
        Ok(Value::Integer(base.pow(e)))
    }
}
