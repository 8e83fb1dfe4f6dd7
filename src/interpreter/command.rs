use std::io::Write;

use tracing::debug;

use crate::{
    error::{RuntimeError, SyntaxError},
    interpreter::{
        expression::evaluate,
        graph::{Graph, NodeId, Store},
        parser::core::ParseResult,
    },
    util::format::format_number,
};

/// A built-in operation, split out of a resolved operation string.
///
/// Bodies borrow from the operation text they were parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `print(text)`: writes `text`, without surrounding quotes, and a newline.
    Print(&'a str),
    /// `set(target, expression)`: stores the formatted value of `expression`
    /// in node `target`.
    Set(&'a str),
    /// `if(expression)`: branches on the truncated value of `expression`.
    If(&'a str),
    /// `call(function)`: enters the node named `function`.
    Call(&'a str),
    /// An unknown command, or a known one with an empty body.
    Noop,
}

/// What a command asks the engine to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Follow the edge at this index.
    Branch(i64),
    /// Enter a function whose body starts at this node.
    Invoke(NodeId),
    /// Nothing was executed.
    Noop,
}

impl<'a> Command<'a> {
    /// Splits an operation into its command name and body.
    ///
    /// The name is the text before the first `(`, the body the text strictly
    /// between that `(` and the last `)`.
    ///
    /// # Errors
    /// Returns [`SyntaxError::MissingParenthesis`] if either parenthesis is
    /// missing or the last `)` comes before the first `(`.
    ///
    /// # Example
    /// ```
    /// use grd::interpreter::command::Command;
    ///
    /// assert_eq!(Command::parse("set(x, (1 + 2) * 3)").unwrap(), Command::Set("x, (1 + 2) * 3"));
    /// assert_eq!(Command::parse("print()").unwrap(), Command::Noop);
    /// assert_eq!(Command::parse("jump(A)").unwrap(), Command::Noop);
    /// assert!(Command::parse("5").is_err());
    /// ```
    pub fn parse(operation: &'a str) -> ParseResult<Self> {
        let (Some(open), Some(close)) = (operation.find('('), operation.rfind(')')) else {
            return Err(SyntaxError::MissingParenthesis { operation: operation.to_string() });
        };
        if close < open {
            return Err(SyntaxError::MissingParenthesis { operation: operation.to_string() });
        }

        let body = &operation[open + 1..close];
        if body.is_empty() {
            return Ok(Self::Noop);
        }

        Ok(match operation[..open].trim() {
            "print" => Self::Print(body),
            "set" => Self::Set(body),
            "if" => Self::If(body),
            "call" => Self::Call(body),
            _ => Self::Noop,
        })
    }

    /// Runs the command.
    ///
    /// `print` and `set` yield `Branch(0)`, `if` yields its truncated value as
    /// the branch index, and `call` yields `Invoke` with the resolved entry
    /// node. Nothing is executed for [`Command::Noop`].
    ///
    /// # Parameters
    /// - `node`: Name of the executing node, for error reporting.
    /// - `graph`: The program graph.
    /// - `store`: Node values, written by `set`.
    /// - `out`: Sink for `print`.
    ///
    /// # Errors
    /// - [`RuntimeError::NodeNotFound`] for an unknown `set` target or `call`
    ///   function.
    /// - [`RuntimeError::InvalidSet`] if a `set` body is not two parts.
    /// - [`RuntimeError::InvalidExpression`] if an expression does not compile.
    /// - [`RuntimeError::InvalidBranchValue`] if an `if` value is not finite.
    /// - [`RuntimeError::Output`] if writing fails.
    pub fn execute<W: Write>(self,
                             node: &str,
                             graph: &Graph,
                             store: &mut Store,
                             out: &mut W)
                             -> Result<Outcome, RuntimeError> {
        match self {
            Self::Print(body) => {
                let text = body.strip_prefix('"').unwrap_or(body);
                let text = text.strip_suffix('"').unwrap_or(text);
                writeln!(out, "{text}")?;
                Ok(Outcome::Branch(0))
            },
            Self::Set(body) => {
                let parts = body.split(',').map(str::trim).collect::<Vec<_>>();
                let [target, expression] = parts.as_slice() else {
                    return Err(RuntimeError::InvalidSet { body: body.to_string() });
                };

                let value = format_number(evaluate(expression)?);
                let target_id = graph.lookup(target)?;
                debug!(destination = *target, value = %value, "set");

                store.set(target_id, value);
                Ok(Outcome::Branch(0))
            },
            Self::If(body) => {
                let value = evaluate(body)?;
                if !value.is_finite() {
                    return Err(RuntimeError::InvalidBranchValue { node: node.to_string(),
                                                                  value });
                }

                #[allow(clippy::cast_possible_truncation)]
                let index = value.trunc() as i64;
                Ok(Outcome::Branch(index))
            },
            Self::Call(body) => Ok(Outcome::Invoke(graph.lookup(body.trim())?)),
            Self::Noop => {
                debug!(node, "no-op");
                Ok(Outcome::Noop)
            },
        }
    }
}
