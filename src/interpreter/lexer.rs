use logos::Logos;

use crate::error::ExpressionError;

/// Represents a lexical token of an arithmetic or comparison expression.
///
/// Expressions are restricted to numbers, the four arithmetic operators,
/// parentheses, comparisons and logical negation. Spaces and tabs are skipped.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `5.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
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
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`, an alias for `==`.
    #[token("=")]
    Equals,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<>`, an alias for `!=`.
    #[token("<>")]
    LessGreater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits expression text into tokens paired with their byte offsets.
///
/// # Errors
/// Returns [`ExpressionError::InvalidToken`] for the first slice the lexer
/// cannot match.
///
/// # Example
/// ```
/// use grd::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 <= .5").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(1.0), 0), (Token::LessEqual, 2), (Token::Number(0.5), 5)]);
///
/// assert!(tokenize("2 ^ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(ExpressionError::InvalidToken { text:   lexer.slice().to_string(),
                                                       offset: lexer.span().start, });
        }
    }

    Ok(tokens)
}
