use crate::{
    error::ExpressionError,
    interpreter::{
        lexer::Token,
        parser::utils::{is_identifier, is_mixed_identifier, is_number},
        value::core::Value,
        variables::Variables,
    },
    rpn::{BinaryOperator, PostfixItem, UnaryOperator, display_postfix},
};

pub type ParseResult<T> = Result<T, ExpressionError>;

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::interpreter::parser) enum StackEntry {
    Operator(BinaryOperator),
    LParen,
}

/// Converts infix token sequences into postfix sequences.
///
/// This is the shunting-yard algorithm with one addition: `-` and `+` in
/// prefix position are kept on a separate stack and folded into the next
/// number or variable value, so the output never contains sign operators.
///
/// Whether a `-` or `+` is binary or a prefix sign is decided by
/// `expect_binary`, which is `true` exactly when the last consumed token
/// completed an operand (a number, a variable or a closing parenthesis). The
/// same flag rejects two operands or two binary operators in a row.
pub struct Transformer<'v> {
    /// Variable values looked up when an identifier is consumed.
    pub(in crate::interpreter::parser) variables:     &'v Variables,
    /// Binary operators and open parentheses not yet emitted.
    pub(in crate::interpreter::parser) operators:     Vec<StackEntry>,
    /// Prefix signs waiting for their operand.
    pub(in crate::interpreter::parser) signs:         Vec<UnaryOperator>,
    /// `true` if the next operator must be binary.
    pub(in crate::interpreter::parser) expect_binary: bool,
    /// The postfix sequence built so far.
    pub(in crate::interpreter::parser) output:        Vec<PostfixItem>,
}

impl<'v> Transformer<'v> {
    /// Creates a transformer that resolves identifiers against `variables`.
    #[must_use]
    pub const fn new(variables: &'v Variables) -> Self {
        Self { variables,
               operators: Vec::new(),
               signs: Vec::new(),
               expect_binary: false,
               output: Vec::new() }
    }

    /// Consumes the transformer and converts `tokens` to postfix form.
    ///
    /// Tokens are classified in this order:
    /// 1. a binary operator while `expect_binary` holds,
    /// 2. `-` or `+` in prefix position, kept as a pending sign,
    /// 3. a number in operand position,
    /// 4. a variable name in operand position,
    /// 5. `(` in operand position, unless a sign is pending,
    /// 6. `)` after an operand,
    /// 7. a word mixing letters and digits,
    /// 8. anything else.
    ///
    /// # Errors
    /// - `UnknownVariable` if a variable name has no value.
    /// - `InvalidIdentifier` for words mixing letters and digits.
    /// - `InvalidExpression` for everything that does not fit, including
    ///   unbalanced parentheses and a sign directly before `(`.
    pub fn run(mut self, tokens: &[Token]) -> ParseResult<Vec<PostfixItem>> {
        for token in tokens {
            self.consume(token)?;
        }
        self.finish()?;

        log::debug!("postfix: {}", display_postfix(&self.output));
        Ok(self.output)
    }

    fn consume(&mut self, token: &Token) -> ParseResult<()> {
        if self.expect_binary
           && let Some(op) = BinaryOperator::from_token(token)
        {
            self.push_binary(op);
            return Ok(());
        }

        match token {
            Token::Minus | Token::Plus if !self.expect_binary => {
                self.signs.extend(UnaryOperator::from_token(token));
                Ok(())
            },
            Token::Word(word) if !self.expect_binary && is_number(word) => {
                let value = Value::from_literal(word).ok_or(ExpressionError::InvalidExpression)?;
                self.push_operand(value);
                Ok(())
            },
            Token::Word(word) if !self.expect_binary && is_identifier(word) => {
                let value = self.variables
                                .get(word)
                                .ok_or_else(|| ExpressionError::UnknownVariable { name: word.clone() })?;
                self.push_operand(value);
                Ok(())
            },
            Token::LParen if !self.expect_binary => self.open_paren(),
            Token::RParen if self.expect_binary => self.close_paren(),
            Token::Word(word) if is_mixed_identifier(word) => {
                log::debug!("'{word}' mixes letters and digits");
                Err(ExpressionError::InvalidIdentifier)
            },
            _ => {
                log::debug!("unexpected token '{token}' (expect_binary = {})", self.expect_binary);
                Err(ExpressionError::InvalidExpression)
            },
        }
    }
}

/// Converts an infix token sequence into a postfix sequence.
///
/// # Errors
/// See [`Transformer::run`].
///
/// # Example
/// ```
/// use smartcalc::{
///     interpreter::{
///         lexer::tokenize, parser::core::transform, value::core::Value, variables::Variables,
///     },
///     rpn::display_postfix,
/// };
///
/// let mut variables = Variables::new();
/// variables.set("x", Value::from(3_i64));
///
/// let tokens = tokenize("2 + - x * 4").unwrap();
/// let postfix = transform(&tokens, &variables).unwrap();
/// assert_eq!(display_postfix(&postfix), "2 -3 4 * +");
/// ```
pub fn transform(tokens: &[Token], variables: &Variables) -> ParseResult<Vec<PostfixItem>> {
    Transformer::new(variables).run(tokens)
}
