use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ExpressionError,
    interpreter::{
        lexer::Token,
        parser::core::{ExprResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (identity)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so `!-x` is parsed as `!(-x)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ExprResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        Some((Token::Bang, _)) => UnaryOperator::Not,
        _ => return parse_primary(tokens),
    };

    tokens.next();
    let expr = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr) })
}

/// Parses a primary (atomic) expression: a number or a parenthesised
/// expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ExprResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(n), _)) => Ok(Expr::Number(*n)),
        Some((Token::LParen, _)) => parse_grouping(tokens),
        Some((tok, _)) => Err(ExpressionError::UnexpectedToken { token: format!("{tok:?}") }),
        None => Err(ExpressionError::UnexpectedEnd),
    }
}

/// Parses the rest of a parenthesised expression, after its `(`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ExprResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, _)) => Err(ExpressionError::UnexpectedToken { token: format!("{tok:?}") }),
        None => Err(ExpressionError::ExpectedClosingParen),
    }
}
