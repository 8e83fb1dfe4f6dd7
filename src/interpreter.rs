/// The lexer module tokenizes expression text.
///
/// Expressions are the bodies of `set` and `if`: numbers, arithmetic,
/// parentheses, comparisons and logical negation. The lexer turns their text
/// into tokens paired with byte offsets.
pub mod lexer;
/// The parser module reads program text and expression tokens.
///
/// It recovers node blocks from raw text by bracket-depth counting, parses
/// each block into a node, and builds expression trees from token streams.
///
/// # Responsibilities
/// - Extracts top-level node blocks, tolerating nested brackets.
/// - Splits a block into name, operation and edges, rejecting invalid ones.
/// - Parses arithmetic and comparison expressions by precedence.
pub mod parser;
/// The graph module holds the program's nodes and their runtime values.
///
/// The topology (names, operations as written, edges) never changes after
/// parsing. Values live in a separate store that `set` writes.
pub mod graph;
/// Substitution of `$[name]` variable references, including nested ones.
pub mod resolver;
/// Compilation and evaluation of arithmetic and comparison expressions.
pub mod expression;
/// The built-in commands `print`, `set`, `if` and `call`.
pub mod command;
/// The execution engine.
///
/// Walks the graph from `START`, runs each node's command, and picks the next
/// node from the command's outcome, including entering and returning from
/// calls.
///
/// # Responsibilities
/// - Owns the current node, the call stack and the value store.
/// - Follows branch edges with bounds checks.
/// - Returns from calls through `NONE` edges.
/// - Runs `END` once more after the main loop stops.
pub mod engine;
