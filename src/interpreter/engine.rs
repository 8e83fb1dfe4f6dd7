use std::io::Write;

use tracing::debug;

use crate::{
    error::{Error, RuntimeError},
    interpreter::{
        command::{Command, Outcome},
        graph::{END, Edge, Graph, NodeId, START, Store},
        resolver::resolve_variables,
    },
};

/// Result type used by the engine.
pub type ExecResult<T> = Result<T, Error>;

/// A saved call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The node that executed `call`.
    pub caller: NodeId,
    /// The caller's first edge, where execution resumes on return.
    pub resume: Option<Edge>,
}

/// Executes a program graph.
///
/// The engine owns the traversal state: the node about to run, the stack of
/// active calls, and the value store. Each step runs the current node's
/// command and turns its [`Outcome`] into the next node:
///
/// - `Branch(i)` (and `Noop`, as `Branch(0)`) follows edge `i`. A `NONE` edge
///   returns from the innermost call to the caller's first edge.
/// - `Invoke(f)` pushes a frame for the current node and jumps to `f`.
///
/// # Example
/// ```
/// use grd::interpreter::{engine::Engine, graph::Graph};
///
/// let graph = Graph::parse("[START {set(x, 10 / 4)} -> SHOW]
///                           [SHOW {print($[x])} -> END]
///                           [END {print(\"done\")}]
///                           [x {0}]").unwrap();
///
/// let mut out = Vec::new();
/// let store = Engine::new(&graph, &mut out).unwrap().run().unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "2.5\ndone\ndone\n");
/// assert_eq!(store.value_of(&graph, "x"), Some("2.5"));
/// ```
#[derive(Debug)]
pub struct Engine<'g, W> {
    graph:   &'g Graph,
    store:   Store,
    out:     W,
    current: NodeId,
    frames:  Vec<Frame>,
}

impl<'g, W: Write> Engine<'g, W> {
    /// Prepares a run positioned at `START`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::NodeNotFound`] if the graph has no `START`.
    pub fn new(graph: &'g Graph, out: W) -> Result<Self, RuntimeError> {
        Ok(Self { graph,
                  store: Store::new(graph),
                  out,
                  current: graph.lookup(START)?,
                  frames: Vec::new() })
    }

    /// Runs the program to completion and returns the final node values.
    ///
    /// Steps until the node just executed is `END` or has no edges, then runs
    /// `END` once more. A program reaching `END` through its edges therefore
    /// runs `END` twice. A step that enters a call never stops the loop.
    ///
    /// # Errors
    /// Returns the first syntax or runtime error met while executing.
    pub fn run(mut self) -> ExecResult<Store> {
        let graph = self.graph;

        loop {
            let executed = graph.node(self.current);
            let outcome = self.step()?;

            if matches!(outcome, Outcome::Invoke(_)) {
                continue;
            }
            if executed.edges.is_empty() || executed.name == END {
                break;
            }
        }

        let end = graph.lookup(END)?;
        self.execute(end)?;
        self.out.flush().map_err(RuntimeError::from)?;

        Ok(self.store)
    }

    /// Executes the current node and moves to the next one.
    ///
    /// Returns the outcome of the executed command.
    ///
    /// # Errors
    /// Returns the error raised by the command or by the transition.
    pub fn step(&mut self) -> ExecResult<Outcome> {
        let outcome = self.execute(self.current)?;
        self.transition(outcome)?;
        Ok(outcome)
    }

    /// The node the next step will execute.
    #[must_use]
    pub const fn current(&self) -> NodeId {
        self.current
    }

    /// Number of calls that have not returned yet.
    #[must_use]
    pub fn call_depth(&self) -> usize {
        self.frames.len()
    }

    /// Current node values.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Resolves variables in a node's current value and runs it as a command.
    fn execute(&mut self, id: NodeId) -> ExecResult<Outcome> {
        let graph = self.graph;
        let node = graph.node(id);

        let operation = resolve_variables(self.store.get(id), graph, &self.store)?;
        debug!(node = %node.name, operation = %operation, "executing");

        let command = Command::parse(&operation)?;
        Ok(command.execute(&node.name, graph, &mut self.store, &mut self.out)?)
    }

    /// Chooses the next node from the outcome of the node just executed.
    fn transition(&mut self, outcome: Outcome) -> Result<(), RuntimeError> {
        let graph = self.graph;
        let previous = self.current;

        match outcome {
            Outcome::Invoke(function) => {
                let resume = graph.node(previous).edges.first().cloned();
                self.frames.push(Frame { caller: previous,
                                         resume });
                self.current = function;
                debug!(caller = %graph.node(previous).name,
                       function = %graph.node(function).name,
                       depth = self.frames.len(),
                       "call");
            },
            Outcome::Branch(index) => self.follow(index)?,
            Outcome::Noop => self.follow(0)?,
        }

        debug!(from = %graph.node(previous).name, to = %graph.node(self.current).name, "next");
        Ok(())
    }

    /// Follows edge `index` of the current node.
    fn follow(&mut self, index: i64) -> Result<(), RuntimeError> {
        let graph = self.graph;
        let node = graph.node(self.current);

        if node.edges.is_empty() {
            if node.name == END {
                return Ok(());
            }
            return Err(RuntimeError::MissingNextNode { node: node.name.clone() });
        }

        let edge = usize::try_from(index).ok().and_then(|i| node.edges.get(i)).ok_or_else(|| {
                       RuntimeError::BranchOutOfRange { node: node.name.clone(),
                                                        index,
                                                        edges: node.edges.len() }
                   })?;

        self.current = match edge {
            Edge::Target(name) => graph.lookup(name)?,
            Edge::Placeholder => self.return_from_call(&node.name)?,
        };

        Ok(())
    }

    /// Pops call frames until one resumes at a real node.
    ///
    /// A caller whose first edge is itself `NONE` returns from its own call in
    /// turn.
    fn return_from_call(&mut self, node: &str) -> Result<NodeId, RuntimeError> {
        let graph = self.graph;

        while let Some(frame) = self.frames.pop() {
            let caller = &graph.node(frame.caller).name;
            match frame.resume {
                Some(Edge::Target(name)) => {
                    debug!(caller = %caller, resume = %name, depth = self.frames.len(), "return");
                    return graph.lookup(&name);
                },
                Some(Edge::Placeholder) => {
                    debug!(caller = %caller, "return continues to outer call");
                },
                None => return Err(RuntimeError::MissingNextNode { node: caller.clone() }),
            }
        }

        Err(RuntimeError::ReturnOutsideCall { node: node.to_string() })
    }
}
