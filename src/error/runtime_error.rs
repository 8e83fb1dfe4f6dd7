use thiserror::Error;

use crate::error::ExpressionError;

/// Represents all errors that can occur during execution.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// An edge, variable, call target or `set` destination names a node that
    /// does not exist.
    #[error("Runtime Error: node not found: '{name}'")]
    NodeNotFound {
        /// The name that was looked up.
        name: String,
    },
    /// A node other than `END` has no edge to continue with.
    #[error("Runtime Error: missing next node for execution after '{node}'")]
    MissingNextNode {
        /// The node that was just executed.
        node: String,
    },
    /// A `NONE` edge was taken while no call was active.
    #[error("Runtime Error: return outside of a function call at '{node}'")]
    ReturnOutsideCall {
        /// The node whose `NONE` edge was selected.
        node: String,
    },
    /// A branch index does not select one of the node's edges.
    #[error("Runtime Error: branch index out of range at '{node}': index {index}, but the node has {edges} edge(s)")]
    BranchOutOfRange {
        /// The node that was just executed.
        node:  String,
        /// The requested edge index.
        index: i64,
        /// How many edges the node has.
        edges: usize,
    },
    /// An `if` condition evaluated to infinity or NaN.
    #[error("Runtime Error: invalid branch value {value} at '{node}'")]
    InvalidBranchValue {
        /// The node holding the condition.
        node:  String,
        /// The value the condition produced.
        value: f64,
    },
    /// A `set` body is not exactly `target, expression`.
    #[error("Runtime Error: invalid values for set() operation: '{body}'")]
    InvalidSet {
        /// The body of the `set` command.
        body: String,
    },
    /// An expression passed the character check but did not compile.
    #[error("Runtime Error: unable to compute expression '{expression}': {source}")]
    InvalidExpression {
        /// The expression text.
        expression: String,
        /// Why compilation failed.
        #[source]
        source:     ExpressionError,
    },
    /// Writing program output failed.
    #[error("Runtime Error: failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
