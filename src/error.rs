/// Lexing errors.
///
/// Raised when a line contains a character that matches no token pattern, or a
/// number literal that cannot be represented.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token sequence into
/// a statement: too few tokens, malformed print statements, invalid assignment
/// targets, and lines matching neither statement form.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Unbound
/// variables are reported here, as are malformed arithmetic, division by zero
/// and numeric overflow.
pub mod runtime_error;

use thiserror::Error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running a script.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Writing program output failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The source line the error was raised on, if it came from the pipeline.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.line()),
            Self::Parse(e) => Some(e.line()),
            Self::Runtime(e) => Some(e.line()),
            Self::Io(_) => None,
        }
    }
}
