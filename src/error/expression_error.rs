use thiserror::Error;

/// Represents all errors that can occur while compiling an expression.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpressionError {
    /// A character sequence that is not a number or an operator.
    #[error("unrecognised input '{text}' at offset {offset}")]
    InvalidToken {
        /// The text the lexer could not match.
        text:   String,
        /// Byte offset of the text.
        offset: usize,
    },
    /// A token appeared where it cannot start or continue an expression.
    #[error("unexpected token '{token}'")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// The expression ended where an operand was required.
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    /// A `(` was never closed.
    #[error("expected closing parenthesis ')' but none found")]
    ExpectedClosingParen,
}
