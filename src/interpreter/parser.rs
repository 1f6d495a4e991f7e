/// Core parsing entry points.
///
/// Holds the precedence table, the program loop with its error recovery and
/// the Pratt expression driver.
pub mod core;

/// Prefix parse rules.
///
/// One rule per token that can begin an expression: literals, identifiers,
/// prefix operators, grouping, `if`, `fn`, array and hash literals.
pub mod prefix;

/// Infix parse rules.
///
/// Binary operators, assignment, calls and indexing, all driven by the
/// binding power of the token that follows the left operand.
pub mod infix;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used by `if` and `fn`.
pub mod block;

/// Statement parsing.
///
/// Implements `let`, `return` and expression statements.
pub mod statement;

/// Shared helpers for the parser.
///
/// Token expectations, identifier parsing and comma-separated lists.
pub mod utils;

pub use self::core::{ParseResult, Precedence, parse_expression, parse_program};

use crate::{ast::Program, error::ParseError, interpreter::lexer::Lexer};

/// Lexes and parses `source` in one step.
///
/// Returns the program together with every syntax error found, in source
/// order. The program holds all statements that parsed cleanly.
///
/// # Example
/// ```
/// use squid::interpreter::parser::parse;
///
/// let (program, errors) = parse("let x = 1 + 2 * 3;");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
///
/// let (_, errors) = parse("let x 5;");
/// assert_eq!(errors[0].to_string(), "line 1: expected '=', found integer `5`");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    parse_program(Lexer::new(source))
}
