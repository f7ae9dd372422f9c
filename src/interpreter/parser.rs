use crate::error::ParseError;

/// Statement parsing.
///
/// Recognises the two statement forms of the language, `print(...)` and
/// `name = ...`, and rejects everything else.
pub mod statement;

pub use statement::parse_statement;

pub type ParseResult<T> = Result<T, ParseError>;
