use thiserror::Error;

/// Represents all errors that can occur while parsing program text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntaxError {
    /// A `[` was opened but its matching `]` never appeared.
    #[error("Syntax Error: mismatched brackets in block starting at offset {offset}")]
    MismatchedBrackets {
        /// Byte offset of the unmatched `[`.
        offset: usize,
    },
    /// The source text does not contain a single node block.
    #[error("Syntax Error: no nodes found in the program")]
    NoNodes,
    /// A node name was empty or the reserved `NONE`.
    #[error("Syntax Error: invalid node name '{name}'")]
    InvalidNodeName {
        /// The offending name as written.
        name: String,
    },
    /// A node has no `{...}` operation, or the operation is blank.
    #[error("Syntax Error: invalid node operation in block '{block}'")]
    InvalidOperation {
        /// The raw block text.
        block: String,
    },
    /// The text after `->` does not form a list of edge names.
    #[error("Syntax Error: invalid node edge(s) for node '{node}'")]
    InvalidEdges {
        /// The node whose edge list is malformed.
        node: String,
    },
    /// An operation lacks `(` or `)`, or they appear out of order.
    #[error("Syntax Error: missing '(' or ')' in operation '{operation}'")]
    MissingParenthesis {
        /// The operation after variable substitution.
        operation: String,
    },
}
