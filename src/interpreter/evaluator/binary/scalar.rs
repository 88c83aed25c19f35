use num_traits::Zero;

use crate::{
    error::ExpressionError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    rpn::BinaryOperator,
    util::num::ratio_to_f64,
};

impl Evaluator {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Two integers add, subtract and multiply exactly, whatever their size.
    /// Division is true division: it stays an integer only when the divisor
    /// divides the dividend exactly, otherwise the quotient is the nearest
    /// real. As soon as one operand is real, the operation is carried out on
    /// reals.
    ///
    /// # Errors
    /// - `DivisionByZero` if `op` is `Div` and `right` is zero.
    /// - `Overflow` if an integer operand is too large to take part in real
    ///   arithmetic.
    ///
    /// # Example
    /// ```
    /// use smartcalc::{
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    ///     rpn::BinaryOperator,
    /// };
    ///
    /// let exact =
    ///     Evaluator::eval_scalar_op(BinaryOperator::Div, &Value::from(9_i64), &Value::from(3_i64));
    /// assert_eq!(exact.unwrap(), Value::from(3_i64));
    ///
    /// let inexact =
    ///     Evaluator::eval_scalar_op(BinaryOperator::Div, &Value::from(1_i64), &Value::from(2_i64));
    /// assert_eq!(inexact.unwrap(), Value::Real(0.5));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};
        use Value::{Integer, Real};

        if op == Div && right.is_zero() {
            return Err(ExpressionError::DivisionByZero);
        }

        if let (Integer(a), Integer(b)) = (left, right) {
            return Ok(match op {
                          Add => Integer(a + b),
                          Sub => Integer(a - b),
                          Mul => Integer(a * b),
                          Div => {
                              if (a % b).is_zero() {
                                  Integer(a / b)
                              } else {
                                  Real(ratio_to_f64(a, b))
                              }
                          },
                          Pow => unreachable!("powers are evaluated by eval_pow"),
                      });
        }

        let (a, b) = (left.as_real()?, right.as_real()?);
        Ok(Real(match op {
                    Add => a + b,
                    Sub => a - b,
                    Mul => a * b,
                    Div => a / b,
                    Pow => unreachable!("powers are evaluated by eval_pow"),
                }))
    }
}
