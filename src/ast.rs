use crate::interpreter::lexer::{Lexeme, Token};

/// A parsed gscript statement.
///
/// Statements keep their operands as token sequences; the evaluator reduces
/// those tokens to values when the statement runs, so an assignment with a
/// missing right-hand side is only reported at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `print(<operand>)`
    Print {
        /// Everything between the parentheses. Starts with a string, number or
        /// identifier.
        operand: Vec<Lexeme>,
        /// The source line of the statement.
        line:    usize,
    },
    /// `<name> = <expression>`
    Assignment {
        /// The variable being bound.
        name:       String,
        /// Everything after `=`, possibly empty.
        expression: Vec<Lexeme>,
        /// The source line of the statement.
        line:       usize,
    },
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use gscript::{
///     ast::{BinaryOperator, token_to_binary_operator},
///     interpreter::lexer::Token,
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
