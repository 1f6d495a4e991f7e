/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, the statement and expression dispatch, and the
/// `Unwind` channel that carries `return` values and runtime errors out of
/// nested evaluation.
pub mod core;

/// Prefix operator evaluation logic.
///
/// Implements logical NOT over truthiness and integer negation.
pub mod prefix;

/// Infix operator evaluation logic.
///
/// Handles arithmetic, comparisons, string concatenation, structural equality
/// and the short-circuiting logical operators.
pub mod infix;

/// Array and hash evaluation.
///
/// Builds array and hash literals and evaluates index expressions.
pub mod collection;

/// Utility functions for evaluation.
///
/// Provides helpers shared by the other evaluation modules: required values,
/// identifiers, assignment, conditionals and closures.
pub mod utils;

/// Function evaluation.
///
/// Handles calls to closures and builtins, argument checking, the call depth
/// guard, and the builtin library itself.
pub mod function;
