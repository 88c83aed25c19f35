use crate::{
    interpreter::{evaluator::core::Evaluator, parser::core::Transformer, value::core::Value},
    rpn::PostfixItem,
};

impl Transformer<'_> {
    /// Emits an operand after folding every pending sign into it.
    ///
    /// Signs are applied last-pushed first, so the sign written closest to
    /// the operand acts first. The folded value is not normalized; only the
    /// final result of an evaluation is.
    pub(in crate::interpreter::parser) fn push_operand(&mut self, mut value: Value) {
        while let Some(sign) = self.signs.pop() {
            value = Evaluator::eval_unary(sign, value);
        }
        self.output.push(PostfixItem::Operand(value));
        self.expect_binary = true;
    }
}
