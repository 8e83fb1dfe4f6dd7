/// Core parsing entry points.
///
/// Turns whole program text into nodes and token streams into expression
/// trees, and defines the result types shared by the parsing modules.
pub mod core;

/// Lexical block extraction.
///
/// Recovers the text of each node definition by counting bracket depth, so
/// brackets nested inside an operation do not end the block early.
pub mod block;

/// Node parsing.
///
/// Splits one block into its name, operation and edge list.
pub mod node;

/// Binary operator parsing.
///
/// Implements the comparison, additive and multiplicative precedence levels
/// of the expression grammar.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, numbers and parenthesised groups.
pub mod unary;
