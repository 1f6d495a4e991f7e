/// Call evaluation and the builtin table.
///
/// Defines the `Builtin` descriptor, arity checking, closure application with
/// its depth guard, and registration of every builtin in the global scope.
pub mod core;
/// Array and string builtins: `cat`, `first`, `last`, `add` and
/// `arraycontains`.
pub mod collection;
/// Kind inspection and conversions: `tp`, `intstr`, `tpint` and `sepr`.
pub mod convert;
/// Console input and output.
///
/// Holds the injectable `Io` streams and the `write` and `read` builtins.
pub mod console;
/// Filesystem builtins.
///
/// Directory creation, copy and move of files and directories, listing, and
/// whole-file reads and writes.
pub mod fs;
/// The `rand` builtin.
pub mod random;
