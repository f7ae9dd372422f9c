use thiserror::Error;

/// Represents all errors that can occur while tokenizing a line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character matched none of the token patterns.
    #[error("Error on line {line}: Unexpected token: {token} (column {column}).")]
    UnexpectedToken {
        /// The offending character.
        token:  char,
        /// The source line where the error occurred.
        line:   usize,
        /// The 1-based byte column of the character.
        column: usize,
    },
    /// A number literal does not fit in a 64-bit signed integer.
    #[error("Error on line {line}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The digits as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl LexError {
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. } | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}
