use crate::{
    error::ExpressionError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    rpn::BinaryOperator,
};

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// Operands keep their order: `left` is the value pushed first. Addition,
    /// subtraction, multiplication and division go through
    /// `eval_scalar_op`, power through `eval_pow`. Every real result is
    /// checked to be a finite real number.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use smartcalc::{
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    ///     rpn::BinaryOperator,
    /// };
    ///
    /// let result =
    ///     Evaluator::eval_binary(BinaryOperator::Sub, &Value::from(3_i64), &Value::from(4_i64));
    /// assert_eq!(result.unwrap(), Value::from(-1_i64));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        let result = match op {
            Add | Sub | Mul | Div => Self::eval_scalar_op(op, left, right)?,
            Pow => Self::eval_pow(left, right)?,
        };
        log::trace!("{left} {op} {right} = {result}");

        check_real(result)
    }
}

/// Rejects real results that are not finite numbers.
///
/// `NaN` only arises from powers without a real result; infinities come from
/// results too large for an `f64`.
fn check_real(value: Value) -> EvalResult<Value> {
    match value {
        Value::Real(r) if r.is_nan() => Err(ExpressionError::NonRealResult),
        Value::Real(r) if r.is_infinite() => Err(ExpressionError::Overflow),
        _ => Ok(value),
    }
}
