/// The evaluator module runs parsed statements.
///
/// It owns the variable environment, reduces expression tokens to values and
/// reports each statement's effect back to the caller.
///
/// # Responsibilities
/// - Holds the run-scoped mapping from variable names to values.
/// - Evaluates arithmetic with precedence and integer/real promotion.
/// - Reports runtime errors such as unbound variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes one line of source code.
///
/// The lexer reads the raw text of a line and produces a sequence of tokens:
/// the `print` keyword, string and number literals, identifiers, `=`, the four
/// arithmetic operators and parentheses. This is the first stage of
/// interpretation.
pub mod lexer;
/// The parser module turns a line's tokens into a statement.
///
/// # Responsibilities
/// - Distinguishes print statements from assignments.
/// - Validates the statement shape, reporting errors with the line number.
pub mod parser;
/// The value module defines the numeric runtime values.
pub mod value;
