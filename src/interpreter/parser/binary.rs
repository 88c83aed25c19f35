use crate::{
    error::ExpressionError,
    interpreter::parser::core::{ParseResult, StackEntry, Transformer},
    rpn::{BinaryOperator, PostfixItem},
};

impl Transformer<'_> {
    /// Pushes a binary operator, first emitting every stacked operator of
    /// equal or higher precedence down to the nearest `(`.
    ///
    /// Popping on equal precedence makes every operator left-associative.
    /// For `^` this deviates from the usual mathematical convention on
    /// purpose: `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2 = 64`, not `2 ^ 9 = 512`.
    pub(in crate::interpreter::parser) fn push_binary(&mut self, op: BinaryOperator) {
        while let Some(&StackEntry::Operator(top)) = self.operators.last()
              && top.precedence() >= op.precedence()
        {
            log::trace!("'{op}' pops '{top}'");
            self.operators.pop();
            self.output.push(PostfixItem::Operator(top));
        }
        self.operators.push(StackEntry::Operator(op));
        self.expect_binary = false;
    }

    /// Opens a parenthesized group.
    ///
    /// A prefix sign directly before `(` cannot be folded into an operand,
    /// so `- (1 + 2)` is rejected.
    pub(in crate::interpreter::parser) fn open_paren(&mut self) -> ParseResult<()> {
        if !self.signs.is_empty() {
            log::debug!("sign before '(' is not supported");
            return Err(ExpressionError::InvalidExpression);
        }
        self.operators.push(StackEntry::LParen);
        Ok(())
    }

    /// Closes a parenthesized group, emitting its operators and discarding
    /// the matching `(`.
    ///
    /// The group counts as a completed operand, so `expect_binary` stays set.
    pub(in crate::interpreter::parser) fn close_paren(&mut self) -> ParseResult<()> {
        loop {
            match self.operators.pop() {
                Some(StackEntry::Operator(op)) => self.output.push(PostfixItem::Operator(op)),
                Some(StackEntry::LParen) => return Ok(()),
                None => {
                    log::debug!("')' without matching '('");
                    return Err(ExpressionError::InvalidExpression);
                },
            }
        }
    }

    /// Emits the operators left on the stack once all tokens are consumed.
    ///
    /// An open parenthesis still on the stack has no match.
    pub(in crate::interpreter::parser) fn finish(&mut self) -> ParseResult<()> {
        while let Some(entry) = self.operators.pop() {
            match entry {
                StackEntry::Operator(op) => self.output.push(PostfixItem::Operator(op)),
                StackEntry::LParen => {
                    log::debug!("'(' without matching ')'");
                    return Err(ExpressionError::InvalidExpression);
                },
            }
        }
        Ok(())
    }
}
