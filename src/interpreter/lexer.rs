use logos::Logos;

use crate::error::ExpressionError;

/// Represents a lexical token of an input line.
///
/// Operators and parentheses are single characters. Everything else between
/// them that is not whitespace forms a `Word`, whatever it contains; the
/// parser decides later whether a word is a number, a variable name or
/// garbage.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// A maximal run of characters that are neither whitespace nor one of
    /// the operator characters, such as `42`, `count` or `a1`.
    #[regex(r"[^\s\-+/*^()=]+", |lex| lex.slice().to_string())]
    Word(String),
    /// Whitespace.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the source text of the token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Slash => "/",
            Self::Star => "*",
            Self::Caret => "^",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Equals => "=",
            Self::Word(word) => word,
            Self::Ignored => "",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits a line into tokens.
///
/// Operator characters `- + / * ^ ( ) =` always form tokens of their own,
/// whether or not they are surrounded by whitespace, and whitespace only
/// separates. This is equivalent to padding every operator character with
/// single spaces and splitting on whitespace.
///
/// # Errors
/// Returns `ExpressionError::InvalidExpression` if the lexer rejects a
/// character. Every character is either whitespace, an operator or part of a
/// word, so this only guards against lexer internals.
///
/// # Example
/// ```
/// use smartcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("  -3*(x1 +4)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Minus,
///                 Token::Word("3".into()),
///                 Token::Star,
///                 Token::LParen,
///                 Token::Word("x1".into()),
///                 Token::Plus,
///                 Token::Word("4".into()),
///                 Token::RParen]);
/// ```
pub fn tokenize(line: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            log::debug!("lexer rejected {:?}", lexer.slice());
            return Err(ExpressionError::InvalidExpression);
        }
    }

    log::trace!("tokenized {line:?} into {} tokens", tokens.len());
    Ok(tokens)
}

/// Returns the line with exactly one space between adjacent tokens and no
/// leading or trailing whitespace.
///
/// # Errors
/// Propagates errors from [`tokenize`].
///
/// # Example
/// ```
/// use smartcalc::interpreter::lexer::normalize;
///
/// assert_eq!(normalize("  a=-2^  (b)").unwrap(), "a = - 2 ^ ( b )");
/// ```
pub fn normalize(line: &str) -> Result<String, ExpressionError> {
    let tokens = tokenize(line)?;
    let words: Vec<&str> = tokens.iter().map(Token::as_str).collect();
    Ok(words.join(" "))
}
