use crate::{
    interpreter::{evaluator::core::Evaluator, value::core::Value},
    rpn::UnaryOperator,
};

impl Evaluator {
    /// Applies a sign operator to a value.
    ///
    /// # Example
    /// ```
    /// use smartcalc::{
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    ///     rpn::UnaryOperator,
    /// };
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Neg, Value::from(5_i64)),
    ///            Value::from(-5_i64));
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Pos, Value::Real(0.5)), Value::Real(0.5));
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: Value) -> Value {
        match (op, value) {
            (UnaryOperator::Pos, value) => value,
            (UnaryOperator::Neg, Value::Integer(n)) => Value::Integer(-n),
            (UnaryOperator::Neg, Value::Real(r)) => Value::Real(-r),
        }
    }
}
