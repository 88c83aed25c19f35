use crate::{
    error::ExpressionError,
    interpreter::value::core::Value,
    rpn::{PostfixItem, display_postfix},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `ExpressionError` describing the failure.
pub type EvalResult<T> = Result<T, ExpressionError>;

/// Reduces postfix sequences to values.
///
/// The evaluator owns the value stack of a single evaluation. It is created
/// fresh for every sequence and discarded afterwards, so a failed evaluation
/// leaves nothing behind.
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Vec<Value>,
}

impl Evaluator {
    /// Creates an evaluator with an empty value stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a postfix sequence and returns its normalized result.
    ///
    /// Operands are pushed onto the value stack. An operator pops the top two
    /// values `b` (pushed last) and `a`, and pushes `a op b`. After the last
    /// item exactly one value must remain.
    ///
    /// # Errors
    /// - `InvalidExpression` if an operator finds fewer than two values, or
    ///   if the stack does not end with exactly one value (which includes the
    ///   empty sequence).
    /// - Any arithmetic error raised by an operator.
    ///
    /// # Example
    /// ```
    /// use smartcalc::{
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    ///     rpn::{BinaryOperator, PostfixItem},
    /// };
    ///
    /// // 10 2 /
    /// let postfix = [PostfixItem::Operand(Value::from(10_i64)),
    ///                PostfixItem::Operand(Value::from(2_i64)),
    ///                PostfixItem::Operator(BinaryOperator::Div)];
    ///
    /// assert_eq!(Evaluator::new().run(&postfix).unwrap(), Value::from(5_i64));
    /// ```
    pub fn run(mut self, postfix: &[PostfixItem]) -> EvalResult<Value> {
        for item in postfix {
            match item {
                PostfixItem::Operand(value) => self.stack.push(value.clone()),
                PostfixItem::Operator(op) => {
                    let (Some(right), Some(left)) = (self.stack.pop(), self.stack.pop()) else {
                        log::debug!("operator {op} is missing an operand");
                        return Err(ExpressionError::InvalidExpression);
                    };
                    self.stack.push(Self::eval_binary(*op, &left, &right)?);
                },
            }
        }

        let remaining = self.stack.len();
        match self.stack.pop() {
            Some(result) if remaining == 1 => {
                let result = result.normalized();
                log::debug!("{} evaluated to {result}", display_postfix(postfix));
                Ok(result)
            },
            _ => {
                log::debug!("evaluation ended with {remaining} values on the stack");
                Err(ExpressionError::InvalidExpression)
            },
        }
    }
}

/// Evaluates a postfix sequence with a fresh [`Evaluator`].
///
/// # Errors
/// See [`Evaluator::run`].
pub fn evaluate(postfix: &[PostfixItem]) -> EvalResult<Value> {
    Evaluator::new().run(postfix)
}
