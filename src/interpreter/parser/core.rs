use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::{ExpressionError, SyntaxError},
    interpreter::{
        graph::Node,
        lexer::Token,
        parser::{binary::parse_comparison, block::Blocks, node::parse_node},
    },
};

/// Result type of program parsing.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Result type of expression parsing.
pub type ExprResult<T> = Result<T, ExpressionError>;

/// Parses every node block of a program, in source order.
///
/// # Errors
/// Returns the first [`SyntaxError`] met while extracting or parsing blocks,
/// or [`SyntaxError::NoNodes`] if the text holds no block at all.
pub fn parse_program(source: &str) -> ParseResult<Vec<Node>> {
    let nodes = Blocks::new(source).map(|block| parse_node(block?))
                                   .collect::<ParseResult<Vec<_>>>()?;

    if nodes.is_empty() {
        return Err(SyntaxError::NoNodes);
    }

    Ok(nodes)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, comparison, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ExprResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_comparison(tokens)
}
