/// Integer conversion helpers.
///
/// This module provides conversions between the interpreter's `i64`
/// integers and the `usize` lengths and positions of host collections.
/// Lengths saturate; positions report failure instead of truncating.
pub mod num;
/// Stack growth for the recursive parser and evaluator.
pub mod stack;
