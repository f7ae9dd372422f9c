use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// `UndefinedVariable` is the name error; every other variant describes an
/// arithmetic expression that could not be reduced to a value.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("Error on line {line}: Undefined variable: {name}.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An assignment had nothing to the right of `=`.
    #[error("Error on line {line}: Expected an expression.")]
    EmptyExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A token appeared where the expression grammar does not allow it.
    #[error("Error on line {line}: Unexpected token in expression: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The expression stopped where an operand was required.
    #[error("Error on line {line}: Unexpected end of expression.")]
    UnexpectedEndOfExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `(` inside an expression was never closed.
    #[error("Error on line {line}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Parentheses were nested deeper than the evaluator allows.
    #[error("Error on line {line}: Too many nested parentheses (limit is {limit}).")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer was too large to convert to a real without losing precision.
    #[error("Error on line {line}: Value {value} cannot be represented exactly as a real.")]
    PrecisionLoss {
        /// The integer being converted.
        value: i64,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::PrecisionLoss { line, .. }
            | Self::NestingTooDeep { line, .. }
            | Self::EmptyExpression { line }
            | Self::UnexpectedEndOfExpression { line }
            | Self::ExpectedClosingParen { line }
            | Self::DivisionByZero { line }
            | Self::Overflow { line } => *line,
        }
    }

    /// Returns `true` for unbound-variable errors, `false` for arithmetic
    /// evaluation errors.
    #[must_use]
    pub const fn is_name_error(&self) -> bool {
        matches!(self, Self::UndefinedVariable { .. })
    }
}
