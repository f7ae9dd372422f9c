use std::collections::HashMap;

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        lexer::{Lexeme, Token},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the variables of one program run.
///
/// An `Environment` is created once per run and passed by mutable reference
/// to every statement. Assignments overwrite earlier bindings; there is no
/// declaration step and no scoping.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

/// The observable effect of running one statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A print statement produced this line of output, without the newline.
    Printed(String),
    /// An assignment bound `value` to `name`.
    Assigned {
        /// The variable that was written.
        name:  String,
        /// Its new value.
        value: Value,
    },
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the current value of a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, returning the previous value if there was one.
    pub fn assign(&mut self, name: &str, value: Value) -> Option<Value> {
        self.variables.insert(name.to_string(), value)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Runs a single statement.
    ///
    /// Print statements whose operand starts with a string literal emit that
    /// literal with its delimiting quotes removed; any tokens after the
    /// string are ignored. All other print operands, and the right-hand side
    /// of assignments, are evaluated as arithmetic expressions.
    ///
    /// # Returns
    /// The [`Outcome`] of the statement. Nothing is written here; the caller
    /// decides where printed text goes.
    ///
    /// # Example
    /// ```
    /// use gscript::{
    ///     interpreter::{
    ///         evaluator::core::{Environment, Outcome},
    ///         lexer::lex,
    ///         parser::parse_statement,
    ///         value::Value,
    ///     },
    /// };
    ///
    /// let mut env = Environment::new();
    /// let assign = parse_statement(&lex("a = 2 + 3 * 4", 1).unwrap(), 1).unwrap();
    /// let print = parse_statement(&lex("print(a)", 2).unwrap(), 2).unwrap();
    ///
    /// env.eval_statement(&assign).unwrap();
    /// assert_eq!(env.get("a"), Some(Value::Integer(14)));
    /// assert_eq!(env.eval_statement(&print).unwrap(), Outcome::Printed("14".into()));
    /// ```
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Outcome> {
        match statement {
            Statement::Print { operand, line } => {
                if let Some(text) = string_operand(operand) {
                    return Ok(Outcome::Printed(text.to_string()));
                }

                let value = self.eval_expression(operand, *line)?;
                Ok(Outcome::Printed(value.to_string()))
            },
            Statement::Assignment { name,
                                    expression,
                                    line, } => {
                let value = self.eval_expression(expression, *line)?;
                if let Some(previous) = self.assign(name, value) {
                    log::trace!("line {line}: {name} rebound from {previous} to {value}");
                }

                Ok(Outcome::Assigned { name: name.clone(),
                                       value })
            },
        }
    }
}

/// Returns the body of a leading string literal, minus its first and last
/// characters.
fn string_operand(operand: &[Lexeme]) -> Option<&str> {
    match operand.first() {
        Some(Lexeme { token: Token::String(raw), .. }) => {
            let mut chars = raw.chars();
            chars.next();
            chars.next_back();
            Some(chars.as_str())
        },
        _ => None,
    }
}
