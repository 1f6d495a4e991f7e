//! # squid
//!
//! squid is a small, dynamically typed scripting language with a
//! tree-walking interpreter written in Rust.
//! Source text is tokenized, parsed into an abstract syntax tree, and
//! evaluated directly against that tree. The language has integers,
//! booleans, strings, arrays, hashes, first-class closures, and a library of
//! builtins for console, conversion, randomness and filesystem work.

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

use std::{fs, path::Path};

use crate::{
    error::{RunError, SyntaxErrors},
    interpreter::{evaluator::core::Interpreter, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr`, `Statement` and `Program` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator, and its `Display`
/// implementation renders a canonical, fully parenthesized source form.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code, plus the failures of the file runner. Every message
/// carries the source line it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator, runner).
/// - Renders the messages shown to users.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the runtime
/// value model.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// The interactive read-eval-print loop.
pub mod repl;
/// General utilities for integer conversion.
///
/// Conversions between the interpreter's `i64` integers and host sizes,
/// shared by the evaluator and the builtins.
pub mod util;

/// The extension every script must carry.
pub const SCRIPT_EXTENSION: &str = ".sqd";

/// Parses and evaluates `source` with a fresh interpreter.
///
/// If execution succeeds, the value of the program is returned: the value of
/// its last statement, the value of a top-level `return`, or a
/// [`Value::Error`] describing the runtime failure that stopped it. `None`
/// means the program produced no value.
///
/// # Errors
/// Returns every syntax error if the source does not parse. Nothing is
/// evaluated in that case.
///
/// # Examples
/// ```
/// use squid::{interpreter::value::core::Value, run};
///
/// let result = run("let x = 5; x * 2").unwrap();
/// assert_eq!(result, Some(Value::Integer(10)));
///
/// // Runtime errors are values.
/// let result = run("5; 1 + true; 10").unwrap();
/// assert!(result.is_some_and(|v| v.is_error()));
///
/// // Syntax errors stop evaluation.
/// assert!(run("let x 5;").is_err());
/// ```
pub fn run(source: &str) -> Result<Option<Value>, SyntaxErrors> {
    Interpreter::new().eval_source(source)
}

/// Checks that `path` names a script by its extension, ignoring case.
///
/// # Example
/// ```
/// use squid::check_extension;
///
/// assert!(check_extension("scripts/hello.sqd".as_ref()).is_ok());
/// assert!(check_extension("scripts/HELLO.SQD".as_ref()).is_ok());
/// assert!(check_extension("scripts/hello.txt".as_ref()).is_err());
/// ```
pub fn check_extension(path: &Path) -> Result<(), RunError> {
    let found = path.extension()
                    .map(|ext| format!(".{}", ext.to_string_lossy()))
                    .unwrap_or_default();

    if found.eq_ignore_ascii_case(SCRIPT_EXTENSION) {
        Ok(())
    } else {
        Err(RunError::WrongExtension { found,
                                       expected: SCRIPT_EXTENSION })
    }
}

/// Checks the extension of `path`, reads it, and evaluates it with
/// `interpreter`.
///
/// # Errors
/// Fails on a wrong extension, an unreadable file, or syntax errors. Runtime
/// errors are not failures here; they come back as a [`Value::Error`].
pub fn run_file(interpreter: &mut Interpreter, path: &Path) -> Result<Option<Value>, RunError> {
    check_extension(path)?;

    let source = fs::read_to_string(path).map_err(|source| RunError::Read { path: path.to_path_buf(),
                                                                           source })?;
    log::debug!("running {} ({} bytes)", path.display(), source.len());

    Ok(interpreter.eval_source(&source)?)
}
