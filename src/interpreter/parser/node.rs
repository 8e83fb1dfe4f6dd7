use crate::{
    error::SyntaxError,
    interpreter::{
        graph::{Edge, NONE, Node},
        parser::core::ParseResult,
    },
};

/// Parses one raw block into a [`Node`].
///
/// - The name is the text between the first `[` and the first `{`, trimmed.
///   A header's closing `]` is dropped.
/// - The operation is the text between that `{` and the next `}`, trimmed.
/// - The edges are everything after the first `->` following the operation,
///   split on `|`. Each piece is trimmed and loses a trailing `]`, which is the
///   block's own closing bracket. Without `->` the node has no edges.
///
/// # Errors
/// - [`SyntaxError::InvalidNodeName`] if the name is empty or `NONE`.
/// - [`SyntaxError::InvalidOperation`] if there is no `{...}` or it is blank.
/// - [`SyntaxError::InvalidEdges`] if `->` is followed by no edge, or by an
///   empty piece such as in `A||B`.
///
/// # Example
/// ```
/// use grd::interpreter::{graph::Edge, parser::node::parse_node};
///
/// let node = parse_node("[CHECK {if($[i] < 10)} -> DONE | LOOP]").unwrap();
///
/// assert_eq!(node.name, "CHECK");
/// assert_eq!(node.operation, "if($[i] < 10)");
/// assert_eq!(node.edges,
///            vec![Edge::Target("DONE".to_string()), Edge::Target("LOOP".to_string())]);
/// ```
pub fn parse_node(block: &str) -> ParseResult<Node> {
    let name_start = block.find('[').map_or(0, |i| i + 1);
    let brace = block[name_start..].find('{').map(|i| name_start + i);

    let name = clean_name(&block[name_start..brace.unwrap_or(block.len())]);
    if name.is_empty() || name == NONE {
        return Err(SyntaxError::InvalidNodeName { name: name.to_string() });
    }

    let invalid_operation = || SyntaxError::InvalidOperation { block: block.to_string() };
    let brace = brace.ok_or_else(invalid_operation)?;
    let op_end = block[brace + 1..].find('}')
                                   .map(|i| brace + 1 + i)
                                   .ok_or_else(invalid_operation)?;

    let operation = block[brace + 1..op_end].trim();
    if operation.is_empty() {
        return Err(invalid_operation());
    }

    let edges = match block[op_end + 1..].find("->") {
        Some(arrow) => parse_edges(&block[op_end + 1 + arrow + 2..], name)?,
        None => Vec::new(),
    };

    Ok(Node { name: name.to_string(),
              operation: operation.to_string(),
              edges })
}

/// Trims a raw name and drops the `]` closing a header.
fn clean_name(raw: &str) -> &str {
    let name = raw.trim();
    name.strip_suffix(']').unwrap_or(name).trim()
}

/// Splits the text after `->` into edges.
fn parse_edges(list: &str, node: &str) -> ParseResult<Vec<Edge>> {
    list.split('|')
        .map(|piece| {
            let piece = piece.trim();
            let piece = piece.strip_suffix(']').unwrap_or(piece).trim();
            if piece.is_empty() {
                Err(SyntaxError::InvalidEdges { node: node.to_string() })
            } else {
                Ok(Edge::from_name(piece))
            }
        })
        .collect()
}
