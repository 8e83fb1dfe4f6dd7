use std::iter::FusedIterator;

use crate::{error::SyntaxError, interpreter::parser::core::ParseResult};

/// Lazily yields the raw text of each node block in a program.
///
/// A block starts at the next `[` and runs to the `]` that brings the bracket
/// depth back to zero, so `$[name]` references inside an operation stay part
/// of their block. When that bracket group holds no `{`, it is only a header
/// (`[NAME]{...}->...`); the block then extends over the operation that
/// follows and an optional `->` edge list running up to the next `[`.
///
/// The sequence is finite and cannot be restarted. After the first error it
/// ends.
///
/// # Example
/// ```
/// use grd::interpreter::parser::block::Blocks;
///
/// let source = "[A {print($[v])} -> B]\n[B]{print($[v])}->END\n[END {print(\"done\")}]";
/// let blocks = Blocks::new(source).collect::<Result<Vec<_>, _>>().unwrap();
///
/// assert_eq!(blocks,
///            vec!["[A {print($[v])} -> B]", "[B]{print($[v])}->END", "[END {print(\"done\")}]"]);
/// ```
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    source: &'a str,
    pos:    usize,
}

impl<'a> Blocks<'a> {
    /// Starts scanning `source` from its beginning.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = ParseResult<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos + self.source[self.pos..].find('[')?;

        let Some(close) = matching_bracket(self.source, start) else {
            self.pos = self.source.len();
            return Some(Err(SyntaxError::MismatchedBrackets { offset: start }));
        };

        let end = if self.source[start..close].contains('{') {
            close + 1
        } else {
            extend_header(self.source, close + 1)
        };

        self.pos = end;
        Some(Ok(&self.source[start..end]))
    }
}

impl FusedIterator for Blocks<'_> {}

/// Finds the `]` closing the `[` at `open`, counting nested pairs.
fn matching_bracket(source: &str, open: usize) -> Option<usize> {
    let mut depth = 0_usize;

    for (i, byte) in source.bytes().enumerate().skip(open) {
        match byte {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            },
            _ => {},
        }
    }

    None
}

/// Extends a header block over its `{operation}` and optional `-> edges`.
///
/// Returns the end offset of the block. Without a following `{` the block is
/// the header alone, which the node parser then rejects.
fn extend_header(source: &str, from: usize) -> usize {
    let rest = &source[from..];
    let trimmed = rest.trim_start();
    if !trimmed.starts_with('{') {
        return from;
    }

    let brace = from + (rest.len() - trimmed.len());
    let Some(op_close) = source[brace..].find('}') else {
        return from;
    };

    let after_op = brace + op_close + 1;
    let tail = &source[after_op..];
    if !tail.trim_start().starts_with("->") {
        return after_op;
    }

    let edges_end = tail.find('[').map_or(source.len(), |i| after_op + i);
    after_op + source[after_op..edges_end].trim_end().len()
}
