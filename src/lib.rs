//! # grd
//!
//! grd is an interpreter for a small graph-structured programming language.
//! A program is a set of named nodes, each holding one operation and a list
//! of outgoing edges; execution walks the graph from `START` to `END`.
//!
//! ```text
//! [START {set(i, 0)} -> LOOP]
//! [LOOP  {print($[i])} -> STEP]
//! [STEP  {set(i, $[i] + 1)} -> CHECK]
//! [CHECK {if($[i] < 3)} -> END | LOOP]
//! [END   {print("done")}]
//! [i     {0}]
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{fs, io::Write, path::Path};

use crate::{
    error::Error,
    interpreter::{engine::Engine, graph::Graph},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// the arithmetic and comparison expressions found in `set` and `if` bodies.
/// The tree is built by the expression parser and reduced to a number by the
/// evaluator.
pub mod ast;
/// Provides unified error types for parsing and execution.
///
/// This module defines every error that can be raised while reading,
/// parsing or running a program, and the top-level [`Error`] that carries the
/// `Error:` prefix shown to users.
///
/// # Responsibilities
/// - Separates malformed program text from failures during execution.
/// - Attaches the offending node, name or text to each error.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the entire process of program execution.
///
/// This module ties together block extraction, node parsing, the program
/// graph, variable substitution, expression evaluation, command dispatch and
/// the execution engine.
pub mod interpreter;
/// General utilities.
///
/// Currently the formatting of numeric results stored by `set`.
pub mod util;

/// Parses and runs a program, writing its output to `out`.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs.
///
/// # Examples
/// ```
/// use grd::run_source;
///
/// let source = r#"
///     [START {if(1 < 2)} -> NO | YES]
///     [NO    {print("no")} -> END]
///     [YES   {print("yes")} -> END]
///     [END   {print("bye")}]
/// "#;
///
/// let mut out = Vec::new();
/// run_source(source, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "yes\nbye\nbye\n");
///
/// // A program without `START` cannot run.
/// assert!(run_source("[END {print(\"bye\")}]", Vec::new()).is_err());
/// ```
pub fn run_source<W: Write>(source: &str, out: W) -> Result<(), Error> {
    let graph = Graph::parse(source)?;
    Engine::new(&graph, out)?.run()?;

    Ok(())
}

/// Reads a program file and runs it, writing its output to `out`.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read, otherwise the same errors
/// as [`run_source`].
pub fn run_file<W: Write>(path: &Path, out: W) -> Result<(), Error> {
    let source = fs::read_to_string(path).map_err(|source| {
                                              Error::Io { path: path.display().to_string(),
                                                          source }
                                          })?;

    run_source(&source, out)
}
