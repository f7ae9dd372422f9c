use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::ParseResult,
    },
};

/// Parses the tokens of one line into a single statement.
///
/// The forms are tried in order:
/// - a print statement, `print ( operand ... )`;
/// - an assignment, `name = expression ...`.
///
/// A line whose first two tokens are `print (` and whose last token is `)`
/// is always treated as a print statement. Otherwise, if the second token is
/// `=`, the line is an assignment. Anything else is invalid syntax.
///
/// The operand and expression tokens are not checked beyond their first
/// token; the evaluator validates them when the statement runs.
///
/// # Parameters
/// - `tokens`: The lexemes of one line, in source order.
/// - `line`: Line number used for error reporting.
///
/// # Errors
/// - `TooFewTokens` if the line has fewer than two tokens.
/// - `ExpectedPrintOperand` if a print statement does not start with a string,
///   number or identifier.
/// - `InvalidAssignmentTarget` if the left side of `=` is not an identifier.
/// - `InvalidSyntax` if the line matches neither form.
///
/// # Example
/// ```
/// use gscript::{
///     ast::Statement,
///     interpreter::{lexer::lex, parser::parse_statement},
/// };
///
/// let tokens = lex("total = 1 + 2", 1).unwrap();
/// let statement = parse_statement(&tokens, 1).unwrap();
///
/// assert!(matches!(statement, Statement::Assignment { ref name, .. } if name == "total"));
/// assert!(parse_statement(&lex("x + y", 2).unwrap(), 2).is_err());
/// ```
pub fn parse_statement(tokens: &[Lexeme], line: usize) -> ParseResult<Statement> {
    let [first, second, ..] = tokens else {
        return Err(ParseError::TooFewTokens { found: tokens.len(),
                                              line });
    };

    if is_print_shape(tokens) {
        return parse_print(tokens, line);
    }

    if second.token == Token::Equals {
        return parse_assignment(first, &tokens[2..], line);
    }

    Err(ParseError::InvalidSyntax { line })
}

/// `print` `(` ... `)`, with at least one token between the parentheses or
/// the closing parenthesis itself in third position.
fn is_print_shape(tokens: &[Lexeme]) -> bool {
    matches!(tokens,
             [Lexeme { token: Token::Print, .. },
              Lexeme { token: Token::LParen, .. },
              ..,
              Lexeme { token: Token::RParen, .. }])
}

fn parse_print(tokens: &[Lexeme], line: usize) -> ParseResult<Statement> {
    // the shape check guarantees at least `print ( )`
    let operand = &tokens[2..tokens.len() - 1];
    let third = &tokens[2];

    match third.token {
        Token::String(_) | Token::Identifier(_) | Token::Number(_) => {
            Ok(Statement::Print { operand: operand.to_vec(),
                                  line })
        },
        _ => Err(ParseError::ExpectedPrintOperand { token: third.text.clone(),
                                                    line }),
    }
}

fn parse_assignment(target: &Lexeme, expression: &[Lexeme], line: usize) -> ParseResult<Statement> {
    let Token::Identifier(name) = &target.token else {
        return Err(ParseError::InvalidAssignmentTarget { token: target.text.clone(),
                                                         line });
    };

    Ok(Statement::Assignment { name: name.clone(),
                               expression: expression.to_vec(),
                               line })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::lex;

    fn parse(source: &str) -> ParseResult<Statement> {
        parse_statement(&lex(source, 1).unwrap(), 1)
    }

    fn texts(lexemes: &[Lexeme]) -> Vec<&str> {
        lexemes.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn print_operand_excludes_closing_paren() {
        let Statement::Print { operand, .. } = parse("print(a + 2 * b)").unwrap() else {
            panic!("expected print");
        };
        assert_eq!(texts(&operand), ["a", "+", "2", "*", "b"]);
    }

    #[test]
    fn print_of_string() {
        let Statement::Print { operand, .. } = parse(r#"print("hi there")"#).unwrap() else {
            panic!("expected print");
        };
        assert_eq!(texts(&operand), ["\"hi there\""]);
    }

    #[test]
    fn print_needs_an_operand() {
        assert_eq!(parse("print()"),
                   Err(ParseError::ExpectedPrintOperand { token: ")".into(),
                                                          line:  1, }));
        assert_eq!(parse("print(+ 1)"),
                   Err(ParseError::ExpectedPrintOperand { token: "+".into(),
                                                          line:  1, }));
    }

    #[test]
    fn unterminated_print_is_invalid_syntax() {
        assert_eq!(parse("print(x"), Err(ParseError::InvalidSyntax { line: 1 }));
    }

    #[test]
    fn assignment_keeps_expression_tokens() {
        let Statement::Assignment { name, expression, .. } = parse("a = a + 1").unwrap() else {
            panic!("expected assignment");
        };
        assert_eq!(name, "a");
        assert_eq!(texts(&expression), ["a", "+", "1"]);
    }

    #[test]
    fn empty_assignment_parses() {
        assert_eq!(parse("a ="),
                   Ok(Statement::Assignment { name:       "a".into(),
                                              expression: Vec::new(),
                                              line:       1, }));
    }

    #[test]
    fn assignment_target_must_be_identifier() {
        assert_eq!(parse("5 = 3"),
                   Err(ParseError::InvalidAssignmentTarget { token: "5".into(),
                                                             line:  1, }));
        assert!(matches!(parse("print = 3"), Err(ParseError::InvalidAssignmentTarget { .. })));
    }

    #[test]
    fn arity_and_syntax_errors() {
        assert_eq!(parse(""), Err(ParseError::TooFewTokens { found: 0, line: 1 }));
        assert_eq!(parse("x"), Err(ParseError::TooFewTokens { found: 1, line: 1 }));
        assert_eq!(parse("x + y"), Err(ParseError::InvalidSyntax { line: 1 }));
    }
}
