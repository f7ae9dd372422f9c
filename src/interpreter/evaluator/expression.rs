use std::iter::Peekable;

use crate::{
    ast::token_to_binary_operator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        lexer::{Lexeme, Token},
        value::Value,
    },
};

/// How many parentheses may be open at once inside one expression.
pub const MAX_NESTING_DEPTH: usize = 200;

impl Environment {
    /// Evaluates an arithmetic expression given as a token sequence.
    ///
    /// Operands are number literals, variables and parenthesized
    /// sub-expressions. `*` and `/` bind tighter than `+` and `-`; operators of
    /// equal precedence associate to the left, so `10 - 3 - 2` is `5`.
    ///
    /// The whole sequence must be consumed. There is no unary minus.
    ///
    /// # Errors
    /// - `EmptyExpression` for an empty token sequence.
    /// - `UndefinedVariable` for a variable with no binding.
    /// - `UnexpectedToken`, `UnexpectedEndOfExpression` or
    ///   `ExpectedClosingParen` for malformed expressions.
    /// - `NestingTooDeep` if more than [`MAX_NESTING_DEPTH`] parentheses are
    ///   open at once.
    /// - Any arithmetic error from [`Environment::eval_binary`].
    ///
    /// # Example
    /// ```
    /// use gscript::interpreter::{
    ///     evaluator::core::Environment,
    ///     lexer::lex,
    ///     value::Value,
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.assign("x", Value::Integer(4));
    ///
    /// let tokens = lex("2 + 3 * x", 1).unwrap();
    /// assert_eq!(env.eval_expression(&tokens, 1).unwrap(), Value::Integer(14));
    /// ```
    pub fn eval_expression(&self, tokens: &[Lexeme], line: usize) -> EvalResult<Value> {
        if tokens.is_empty() {
            return Err(RuntimeError::EmptyExpression { line });
        }

        let mut tokens = tokens.iter().peekable();
        let value = self.eval_binary_chain(&mut tokens, 1, 0, line)?;

        match tokens.next() {
            Some(lexeme) => Err(RuntimeError::UnexpectedToken { token: lexeme.text.clone(),
                                                                line }),
            None => Ok(value),
        }
    }

    /// Precedence climbing over binary operators.
    ///
    /// Consumes operators whose precedence is at least `min_precedence`. The
    /// right operand of each operator is evaluated with a strictly higher
    /// minimum, which makes equal-precedence chains left-associative.
    fn eval_binary_chain<'a, I>(&self,
                                tokens: &mut Peekable<I>,
                                min_precedence: u8,
                                depth: usize,
                                line: usize)
                                -> EvalResult<Value>
        where I: Iterator<Item = &'a Lexeme>
    {
        let mut left = self.eval_operand(tokens, depth, line)?;

        while let Some(op) = tokens.peek().and_then(|lexeme| token_to_binary_operator(&lexeme.token)) {
            if op.precedence() < min_precedence {
                break;
            }
            tokens.next();

            let right = self.eval_binary_chain(tokens, op.precedence() + 1, depth, line)?;
            left = Self::eval_binary(op, left, right, line)?;
        }

        Ok(left)
    }

    /// `depth` counts the parentheses already open around this operand.
    fn eval_operand<'a, I>(&self,
                           tokens: &mut Peekable<I>,
                           depth: usize,
                           line: usize)
                           -> EvalResult<Value>
        where I: Iterator<Item = &'a Lexeme>
    {
        match tokens.next() {
            Some(Lexeme { token: Token::Number(n), .. }) => Ok(Value::Integer(*n)),
            Some(Lexeme { token: Token::Identifier(name),
                          .. }) => {
                self.get(name)
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                     line })
            },
            Some(Lexeme { token: Token::LParen, .. }) => {
                if depth >= MAX_NESTING_DEPTH {
                    return Err(RuntimeError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                              line });
                }
                let value = self.eval_binary_chain(tokens, 1, depth + 1, line)?;
                match tokens.next() {
                    Some(Lexeme { token: Token::RParen, .. }) => Ok(value),
                    Some(lexeme) => Err(RuntimeError::UnexpectedToken { token: lexeme.text.clone(),
                                                                        line }),
                    None => Err(RuntimeError::ExpectedClosingParen { line }),
                }
            },
            Some(lexeme) => Err(RuntimeError::UnexpectedToken { token: lexeme.text.clone(),
                                                                line }),
            None => Err(RuntimeError::UnexpectedEndOfExpression { line }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::lex;

    fn eval(env: &Environment, source: &str) -> EvalResult<Value> {
        env.eval_expression(&lex(source, 1).unwrap(), 1)
    }

    #[test]
    fn precedence_and_associativity() {
        let env = Environment::new();
        assert_eq!(eval(&env, "2 + 3 * 4"), Ok(Value::Integer(14)));
        assert_eq!(eval(&env, "10 - 3 - 2"), Ok(Value::Integer(5)));
        assert_eq!(eval(&env, "100 / 10 / 5"), Ok(Value::Integer(2)));
        assert_eq!(eval(&env, "2 * 3 + 4 * 5 - 6 / 2"), Ok(Value::Integer(23)));
    }

    #[test]
    fn parentheses_group() {
        let env = Environment::new();
        assert_eq!(eval(&env, "(2 + 3) * 4"), Ok(Value::Integer(20)));
        assert_eq!(eval(&env, "10 - (3 - 2)"), Ok(Value::Integer(9)));
        assert_eq!(eval(&env, "(1 + 2"), Err(RuntimeError::ExpectedClosingParen { line: 1 }));
        assert_eq!(eval(&env, "1 + 2)"),
                   Err(RuntimeError::UnexpectedToken { token: ")".into(),
                                                       line:  1, }));
    }

    #[test]
    fn nesting_depth_is_bounded() {
        let env = Environment::new();
        let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

        assert_eq!(eval(&env, &nested(MAX_NESTING_DEPTH)), Ok(Value::Integer(1)));
        assert_eq!(eval(&env, &nested(MAX_NESTING_DEPTH + 1)),
                   Err(RuntimeError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                      line:  1, }));
        assert!(matches!(eval(&env, &nested(200_000)),
                         Err(RuntimeError::NestingTooDeep { .. })));
    }

    #[test]
    fn variables_resolve() {
        let mut env = Environment::new();
        env.assign("rate", Value::Real(0.5));
        assert_eq!(eval(&env, "rate * 3"), Ok(Value::Real(1.5)));
        assert_eq!(eval(&env, "missing + 1"),
                   Err(RuntimeError::UndefinedVariable { name: "missing".into(),
                                                         line: 1, }));
    }

    #[test]
    fn malformed_expressions() {
        let env = Environment::new();
        assert_eq!(eval(&env, "1 +"), Err(RuntimeError::UnexpectedEndOfExpression { line: 1 }));
        assert_eq!(eval(&env, "- 1"),
                   Err(RuntimeError::UnexpectedToken { token: "-".into(),
                                                       line:  1, }));
        assert_eq!(eval(&env, "1 2"),
                   Err(RuntimeError::UnexpectedToken { token: "2".into(),
                                                       line:  1, }));
        assert_eq!(eval(&env, r#"1 + "a""#),
                   Err(RuntimeError::UnexpectedToken { token: "\"a\"".into(),
                                                       line:  1, }));
        assert_eq!(env.eval_expression(&[], 3), Err(RuntimeError::EmptyExpression { line: 3 }));
    }
}
