/// Runtime values.
///
/// Defines the `Value` enum covering every kind a program can observe, the
/// closure representation, truthiness, and the display form used by `write`
/// and the REPL.
pub mod core;
/// Hash key representation.
///
/// Defines the `HashKey` type used for the keys of a `Value::Hash`. Only
/// integers, booleans and strings are hashable.
pub mod hash_key;
/// Lexical environments.
///
/// Defines the chained scope structure that maps names to values and that
/// closures capture at their definition site.
pub mod environment;
