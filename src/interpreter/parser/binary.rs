use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ExprResult, unary::parse_unary},
    },
};

/// Parses one precedence level of comparisons.
///
/// `<`, `>`, `<=`, `>=`, `==`, `=`, `!=` and `<>` all share this level and
/// associate to the left, so `1 < 2 == 1` reads as `(1 < 2) == 1`.
///
/// Grammar: `comparison := additive (cmp_op additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ExprResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_assoc(tokens, BinaryOperator::is_comparison, parse_additive)
}

/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ExprResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_assoc(tokens,
                     |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                     parse_multiplicative)
}

/// Grammar: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ExprResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_assoc(tokens,
                     |op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div),
                     parse_unary)
}

/// Folds `operand (op operand)*` into a left-leaning tree.
///
/// # Parameters
/// - `accepts`: Whether an operator belongs to this level.
/// - `operand`: Parser for the next tighter level.
fn parse_left_assoc<'a, I, F>(tokens: &mut Peekable<I>,
                              accepts: fn(BinaryOperator) -> bool,
                              operand: F)
                              -> ExprResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>,
          F: Fn(&mut Peekable<I>) -> ExprResult<Expr>
{
    let mut expr = operand(tokens)?;

    while let Some(op) = tokens.peek()
                               .and_then(|(token, _)| token_to_binary_operator(token))
                               .filter(|op| accepts(*op))
    {
        tokens.next();
        let rhs = operand(tokens)?;
        expr = Expr::BinaryOp { left: Box::new(expr),
                                op,
                                right: Box::new(rhs) };
    }

    Ok(expr)
}

/// The infix operator a token stands for, if any.
///
/// `=` and `<>` are spellings of `==` and `!=`.
///
/// # Example
/// ```
/// use grd::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Equals), Some(BinaryOperator::Equal));
/// assert_eq!(token_to_binary_operator(&Token::LessGreater), Some(BinaryOperator::NotEqual));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    use BinaryOperator as Op;

    Some(match token {
        Token::Plus => Op::Add,
        Token::Minus => Op::Sub,
        Token::Star => Op::Mul,
        Token::Slash => Op::Div,
        Token::Less => Op::Less,
        Token::Greater => Op::Greater,
        Token::LessEqual => Op::LessEqual,
        Token::GreaterEqual => Op::GreaterEqual,
        Token::EqualEqual | Token::Equals => Op::Equal,
        Token::BangEqual | Token::LessGreater => Op::NotEqual,
        Token::Number(_) | Token::LParen | Token::RParen | Token::Bang => return None,
    })
}
