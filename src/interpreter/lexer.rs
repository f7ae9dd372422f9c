use logos::Logos;

use crate::error::LexError;

const PRINT_KEYWORD: &str = "print";

/// Represents a lexical token in a gscript line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// `print` is tried before identifiers at every position, so a word that
/// starts with `print` is the keyword followed by whatever comes after it:
/// `printer` lexes as `print` and `er`. See [`lex`].
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `print`
    #[token("print")]
    Print,
    /// String literal tokens such as `"hello"`, quotes included.
    /// There are no escape sequences; the literal ends at the next `"`.
    #[regex(r#""[^"]*""#, |lex| lex.slice().to_string())]
    String(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// gscript is lexed one line at a time, so the line number is fixed for the
/// whole run of the lexer and only used to stamp tokens and errors.
#[derive(Default)]
pub struct LexerExtras {
    /// The line number of the source being tokenized.
    pub line: usize,
}

/// A token together with the text it was matched from and its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// The token kind and its payload.
    pub token:  Token,
    /// The exact source text, e.g. `"hi"` including the quotes.
    pub text:   String,
    /// The line the token was found on.
    pub line:   usize,
    /// The 1-based byte column where the token starts.
    pub column: usize,
}

/// Splits one line of source text into lexemes.
///
/// Tokens are produced in source order; whitespace is dropped. An
/// identifier beginning with `print` is split into the keyword and the
/// tokens of the remainder.
///
/// # Errors
/// - `LexError::UnexpectedToken` for any character that starts no token,
///   including newlines.
/// - `LexError::LiteralTooLarge` for digit runs that overflow `i64`.
///
/// # Example
/// ```
/// use gscript::interpreter::lexer::{Token, lex};
///
/// let lexemes = lex("a = 2 + x", 1).unwrap();
/// let tokens: Vec<Token> = lexemes.into_iter().map(|l| l.token).collect();
///
/// assert_eq!(tokens,
///            vec![Token::Identifier("a".into()),
///                 Token::Equals,
///                 Token::Number(2),
///                 Token::Plus,
///                 Token::Identifier("x".into())]);
///
/// assert!(lex("a = 1 @ 2", 1).is_err());
/// ```
pub fn lex(source: &str, line: usize) -> Result<Vec<Lexeme>, LexError> {
    let mut lexemes = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line });

    while let Some(token) = lexer.next() {
        let column = lexer.span().start + 1;
        let slice = lexer.slice();

        match token {
            Ok(Token::Identifier(name))
                if name.len() > PRINT_KEYWORD.len() && name.starts_with(PRINT_KEYWORD) =>
            {
                lexemes.push(Lexeme { token: Token::Print,
                                      text: PRINT_KEYWORD.to_string(),
                                      line: lexer.extras.line,
                                      column });

                let offset = column + PRINT_KEYWORD.len() - 1;
                let rest = lex(&name[PRINT_KEYWORD.len()..], lexer.extras.line)?;
                lexemes.extend(rest.into_iter().map(|lexeme| Lexeme { column: lexeme.column + offset,
                                                                      ..lexeme }));
            },
            Ok(token) => lexemes.push(Lexeme { token,
                                               text: slice.to_string(),
                                               line: lexer.extras.line,
                                               column }),
            Err(()) if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) => {
                return Err(LexError::LiteralTooLarge { literal: slice.to_string(),
                                                       line:    lexer.extras.line, });
            },
            Err(()) => {
                // logos may report more than one character for a failed match
                let token = slice.chars().next().unwrap_or('\0');
                return Err(LexError::UnexpectedToken { token,
                                                       line: lexer.extras.line,
                                                       column });
            },
        }
    }

    log::trace!("line {line}: lexed {} tokens", lexemes.len());
    Ok(lexemes)
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal overflows `i64`, which surfaces as a lexing error.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
