/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, calls, and `return` unwinding.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles integer and string literals, keywords, identifiers, and
///   operators, and skips whitespace and comments.
/// - Turns unrecognized input into illegal tokens for the parser to report.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Recovers at statement boundaries so that every error is reported.
pub mod parser;
/// The value module defines the runtime data model.
///
/// This module declares every value a program can observe (integers,
/// booleans, strings, `null`, arrays, hashes, closures, builtins and errors)
/// together with the hash key type and the chained environments that give
/// closures lexical scope.
///
/// # Responsibilities
/// - Defines the `Value` enum, truthiness, equality and display forms.
/// - Restricts hash keys to integers, booleans and strings.
/// - Implements scope lookup, local binding and assignment through the
///   environment chain.
pub mod value;
