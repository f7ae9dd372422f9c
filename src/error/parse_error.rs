use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// A statement needs at least two tokens.
    #[error("Error on line {line}: Expected at least 2 tokens, found {found}.")]
    TooFewTokens {
        /// How many tokens the line produced.
        found: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The first token inside `print(...)` cannot start an operand.
    #[error("Error on line {line}: Expected a string, number, or variable, found {token}.")]
    ExpectedPrintOperand {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Only identifiers can be assigned to.
    #[error("Error on line {line}: Cannot assign to {token}, expected a variable name.")]
    InvalidAssignmentTarget {
        /// The token found left of `=`.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The line is neither a print statement nor an assignment.
    #[error("Error on line {line}: Invalid syntax.")]
    InvalidSyntax {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::TooFewTokens { line, .. }
            | Self::ExpectedPrintOperand { line, .. }
            | Self::InvalidAssignmentTarget { line, .. }
            | Self::InvalidSyntax { line } => *line,
        }
    }
}
