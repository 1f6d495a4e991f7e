/// Represents all errors that can occur during evaluation.
///
/// Once raised, a runtime error is never recovered from: it unwinds every
/// enclosing evaluation and becomes the program's result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to use a name that is bound nowhere in the scope chain.
    #[error("line {line}: identifier not found: {name}")]
    UnknownIdentifier {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An infix operator is not defined for this pair of operand kinds.
    #[error("line {line}: type mismatch: {left} {op} {right}")]
    TypeMismatch {
        /// Kind of the left operand.
        left:  &'static str,
        /// The operator.
        op:    String,
        /// Kind of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A prefix operator was applied to an operand of the wrong kind.
    #[error("line {line}: type mismatch: {op}{operand}")]
    PrefixTypeMismatch {
        /// The operator.
        op:      String,
        /// Kind of the operand.
        operand: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Integer division with a zero divisor.
    #[error("line {line}: division by zero")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The callee of a call expression is not a function.
    #[error("line {line}: not a function: {kind}")]
    NotCallable {
        /// Kind of the value that was called.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("line {line}: wrong number of arguments. Got {found}, expected {expected}")]
    ArgumentCountMismatch {
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The index operator was applied to an unsupported pair of kinds.
    #[error("line {line}: index operator not supported: {target}[{index}]")]
    IndexNotSupported {
        /// Kind of the indexed value.
        target: &'static str,
        /// Kind of the index.
        index:  &'static str,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A value that cannot be a hash key was used as one.
    #[error("line {line}: unusable as hash key: {kind}")]
    UnusableHashKey {
        /// Kind of the rejected key.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression that produced no value was used where one is required.
    #[error("line {line}: expression produced no value")]
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The configured limit on nested function calls was reached.
    #[error("line {line}: maximum call depth of {limit} exceeded")]
    MaxDepthExceeded {
        /// The configured limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A builtin rejected its arguments or its host operation failed.
    #[error("line {line}: {name}: {message}")]
    Builtin {
        /// Name of the builtin.
        name:    &'static str,
        /// The builtin's own description of the failure.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
