use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::{RuntimeError, SyntaxError},
    interpreter::parser::core::parse_program,
};

/// The reserved edge name marking an empty slot.
pub const NONE: &str = "NONE";
/// The node execution starts from.
pub const START: &str = "START";
/// The node execution finishes with.
pub const END: &str = "END";

/// Index of a node inside its [`Graph`].
///
/// Ids are only handed out by the graph that owns the node, so indexing with
/// them cannot go out of bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in source order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One outgoing slot of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edge {
    /// A reference to another node by name, resolved when taken.
    Target(String),
    /// The `NONE` placeholder. Taken inside a function body, it returns to the
    /// caller.
    Placeholder,
}

impl Edge {
    /// Classifies an edge name, mapping `NONE` to the placeholder.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == NONE { Self::Placeholder } else { Self::Target(name.to_string()) }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target(name) => write!(f, "{name}"),
            Self::Placeholder => write!(f, "{NONE}"),
        }
    }
}

/// A named unit of the program: one operation and its outgoing edges.
///
/// The operation text here is the program source as written. The value a node
/// holds at run time lives in a [`Store`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The node name, never empty and never `NONE`.
    pub name:      String,
    /// The trimmed operation text.
    pub operation: String,
    /// Outgoing edges, selected by branch index.
    pub edges:     Vec<Edge>,
}

/// The immutable topology of a program.
///
/// Nodes are kept in source order. Duplicate names are accepted; lookups
/// always resolve to the first definition.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl Graph {
    /// Builds a graph from nodes in source order.
    #[must_use]
    pub fn new(nodes: Vec<Node>) -> Self {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            index.entry(node.name.clone()).or_insert(NodeId(i));
        }

        Self { nodes, index }
    }

    /// Parses program text into a graph.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] if any block is malformed or the text holds no
    /// blocks at all.
    ///
    /// # Example
    /// ```
    /// use grd::interpreter::graph::{Edge, Graph};
    ///
    /// let graph = Graph::parse("[START {print(\"hi\")} -> END] [END {print(\"bye\")}]").unwrap();
    /// let start = graph.lookup("START").unwrap();
    ///
    /// assert_eq!(graph.len(), 2);
    /// assert_eq!(graph.node(start).edges, vec![Edge::Target("END".to_string())]);
    /// ```
    pub fn parse(source: &str) -> Result<Self, SyntaxError> {
        let graph = Self::new(parse_program(source)?);
        graph.dump();
        Ok(graph)
    }

    /// Finds the first node with the given name.
    ///
    /// # Errors
    /// Returns [`RuntimeError::NodeNotFound`] when no node has that name.
    pub fn lookup(&self, name: &str) -> Result<NodeId, RuntimeError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::NodeNotFound { name: name.to_string() })
    }

    /// Returns the node behind an id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// All nodes, in source order, duplicates included.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of parsed nodes, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Writes every node to the debug log.
    fn dump(&self) {
        debug!(nodes = self.nodes.len(), "program graph");
        for node in &self.nodes {
            let edges = node.edges.iter().map(ToString::to_string).collect::<Vec<_>>();
            debug!(name = %node.name, operation = %node.operation, edges = ?edges, "node");
        }
    }
}

/// The mutable value cell of every node.
///
/// A cell starts out as the node's operation text. `set` overwrites it with a
/// formatted number, variable references read it, and executing a node runs
/// whatever text its cell currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    values: Vec<String>,
}

impl Store {
    /// Creates one cell per node, holding the node's operation text.
    #[must_use]
    pub fn new(graph: &Graph) -> Self {
        Self { values: graph.nodes().iter().map(|node| node.operation.clone()).collect() }
    }

    /// Current value of a node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &str {
        &self.values[id.0]
    }

    /// Replaces the value of a node.
    pub fn set(&mut self, id: NodeId, value: String) {
        self.values[id.0] = value;
    }

    /// Current value of the first node with the given name, if any.
    #[must_use]
    pub fn value_of(&self, graph: &Graph, name: &str) -> Option<&str> {
        graph.lookup(name).ok().map(|id| self.get(id))
    }
}
