use crate::interpreter::{lexer::Token, value::core::Value};

/// Binary operators, in order of the tokens `- + / * ^`.
///
/// Precedence and the arithmetic behind each operator are fixed; see
/// [`BinaryOperator::precedence`] and
/// [`Evaluator::eval_binary`](crate::interpreter::evaluator::core::Evaluator::eval_binary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Subtraction (`a - b`).
    Sub,
    /// Addition (`a + b`).
    Add,
    /// True division (`a / b`).
    Div,
    /// Multiplication (`a * b`).
    Mul,
    /// Exponentiation (`a ^ b`).
    Pow,
}

impl BinaryOperator {
    /// Maps a token to the binary operator it spells, if any.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Minus => Some(Self::Sub),
            Token::Plus => Some(Self::Add),
            Token::Slash => Some(Self::Div),
            Token::Star => Some(Self::Mul),
            Token::Caret => Some(Self::Pow),
            _ => None,
        }
    }

    /// Returns the binding strength of the operator.
    ///
    /// `-` and `+` bind loosest, `/` and `*` tighter and `^` tightest.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Sub | Self::Add => 1,
            Self::Div | Self::Mul => 2,
            Self::Pow => 3,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Sub => "-",
            Self::Add => "+",
            Self::Div => "/",
            Self::Mul => "*",
            Self::Pow => "^",
        };
        f.write_str(symbol)
    }
}

/// Sign operators that may only appear in prefix position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Negation (`-a`).
    Neg,
    /// Identity (`+a`).
    Pos,
}

impl UnaryOperator {
    /// Maps a token to the sign operator it spells, if any.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Minus => Some(Self::Neg),
            Token::Plus => Some(Self::Pos),
            _ => None,
        }
    }
}

/// One element of a postfix (reverse Polish) sequence.
///
/// Sign operators are folded into operands while the sequence is built, and
/// parentheses only exist during the transformation, so neither appears
/// here.
#[derive(Debug, Clone, PartialEq)]
pub enum PostfixItem {
    /// A resolved number.
    Operand(Value),
    /// A binary operator applied to the two values before it.
    Operator(BinaryOperator),
}

impl std::fmt::Display for PostfixItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operand(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Renders a postfix sequence as space-separated text, e.g. `2 3 4 * +`.
#[must_use]
pub fn display_postfix(items: &[PostfixItem]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
