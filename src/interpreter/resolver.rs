use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::graph::{Graph, Store},
};

/// Marker opening a variable reference.
const VARIABLE_OPEN: &str = "$[";

/// Replaces every `$[name]` in `operation` with the current value of node
/// `name`.
///
/// References nest: the name of a reference may itself contain references,
/// which are resolved first, so `$[$[a]]` reads the node named by the value of
/// `a`. A `$[` that is never closed is kept as literal text together with
/// whatever followed it.
///
/// # Errors
/// Returns [`RuntimeError::NodeNotFound`] if a referenced node does not exist.
///
/// # Example
/// ```
/// use grd::interpreter::{
///     graph::{Graph, Store},
///     resolver::resolve_variables,
/// };
///
/// let graph = Graph::parse("[a {b}] [b {5}]").unwrap();
/// let store = Store::new(&graph);
///
/// assert_eq!(resolve_variables("print($[$[a]])", &graph, &store).unwrap(), "print(5)");
/// assert_eq!(resolve_variables("print($[a)", &graph, &store).unwrap(), "print($[a)");
/// assert!(resolve_variables("print($[missing])", &graph, &store).is_err());
/// ```
pub fn resolve_variables(operation: &str,
                         graph: &Graph,
                         store: &Store)
                         -> Result<String, RuntimeError> {
    let mut result = String::with_capacity(operation.len());
    let mut outer_names: Vec<String> = Vec::new();
    let mut name = String::new();
    let mut in_variable = false;

    let mut chars = operation.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' && chars.peek() == Some(&'[') {
            chars.next();
            if in_variable {
                outer_names.push(std::mem::take(&mut name));
            }
            in_variable = true;
        } else if c == ']' && in_variable {
            let value = store.get(graph.lookup(&name)?);
            trace!(variable = %name, value, "substituted");

            if let Some(outer) = outer_names.pop() {
                name = outer;
                name.push_str(value);
            } else {
                name.clear();
                result.push_str(value);
                in_variable = false;
            }
        } else if in_variable {
            name.push(c);
        } else {
            result.push(c);
        }
    }

    if in_variable {
        for outer in &outer_names {
            result.push_str(VARIABLE_OPEN);
            result.push_str(outer);
        }
        result.push_str(VARIABLE_OPEN);
        result.push_str(&name);
    }

    Ok(result)
}
