use thiserror::Error;

/// Syntax errors.
///
/// Defines every error that can occur while recovering node blocks from the
/// program text and parsing them: unbalanced brackets, invalid node names,
/// missing or empty operations, malformed edge lists and operations without
/// their parentheses.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a structurally valid
/// program executes: unknown nodes, missing edges, out of range branches,
/// invalid `set` bodies and failed expressions.
pub mod runtime_error;
/// Expression errors.
///
/// Errors produced while compiling an arithmetic or comparison expression.
/// They never surface on their own; the evaluator wraps them into a
/// [`RuntimeError`].
pub mod expression_error;

pub use expression_error::ExpressionError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any failure that aborts a run.
///
/// Every variant is rendered with the generic `Error:` prefix, so the message
/// can be written to the error stream as is.
#[derive(Debug, Error)]
pub enum Error {
    /// The program text is malformed.
    #[error("Error: {0}")]
    Syntax(#[from] SyntaxError),
    /// The program is well formed but cannot continue executing.
    #[error("Error: {0}")]
    Runtime(#[from] RuntimeError),
    /// The program file could not be read.
    #[error("Error: could not open program file '{path}': {source}")]
    Io {
        /// The path that was requested.
        path:   String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
