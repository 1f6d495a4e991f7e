use std::{fmt, rc::Rc};

use indexmap::IndexMap;

use crate::{
    ast::{Block, LiteralValue},
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::Builtin,
        value::{environment::Environment, hash_key::HashKey},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every kind a program can observe: the results of
/// expressions, the contents of bindings, function arguments and returns.
/// Composite values are reference counted, so cloning a `Value` never copies
/// the elements of an array or hash; operations that "change" one build a new
/// value instead.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparisons, `!`, `&&` and `||`, and consumed by
    /// conditions through the truthiness rule.
    Bool(bool),
    /// An immutable string.
    Str(Rc<str>),
    /// The language-level `null`.
    Null,
    /// An ordered sequence of values.
    Array(Rc<Vec<Self>>),
    /// A mapping from hashable values to values, kept in insertion order.
    Hash(Rc<IndexMap<HashKey, Self>>),
    /// A user-defined function closed over its defining environment.
    Function(Rc<Function>),
    /// A native function from the builtin table.
    Builtin(&'static Builtin),
    /// A runtime failure, carrying its message.
    /// Only produced when an error reaches the top level of a program.
    Error(String),
}

/// A closure: parameter names, a shared body, and the environment that was
/// active where the function literal was evaluated.
#[derive(Debug)]
pub struct Function {
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    /// The function body.
    pub body:   Rc<Block>,
    /// The captured defining environment.
    pub env:    Environment,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<IndexMap<HashKey, Self>> for Value {
    fn from(v: IndexMap<HashKey, Self>) -> Self {
        Self::Hash(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(i) => Self::Integer(*i),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Str(s) => Self::from(s.as_str()),
            LiteralValue::Null => Self::Null,
        }
    }
}

impl From<RuntimeError> for Value {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error.to_string())
    }
}

impl Value {
    /// Name of the value's kind, as reported by `tp` and in error messages.
    ///
    /// # Example
    /// ```
    /// use squid::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(3).type_name(), "integer");
    /// assert_eq!(Value::from("hi").type_name(), "string");
    /// assert_eq!(Value::Null.type_name(), "null");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
            Self::Null => "null",
            Self::Array(_) => "array",
            Self::Hash(_) => "hash",
            Self::Function(_) => "function",
            Self::Builtin(_) => "builtin",
            Self::Error(_) => "error",
        }
    }

    /// Truthiness used by `if`, `!`, `&&` and `||`.
    ///
    /// Only `false` and `null` are falsy. Zero, the empty string and empty
    /// collections are all truthy.
    ///
    /// # Example
    /// ```
    /// use squid::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Null)
    }

    /// Returns `true` for [`Value::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Structural equality.
///
/// Scalars, arrays and hashes compare by content, so `[1, 2] == [1, 2]`.
/// Functions and builtins compare by identity. Values of different kinds are
/// never equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => false,
        }
    }
}

/// Display form used by `write` and the REPL.
///
/// Strings print without quotes, including inside collections.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "fn({}) {}", function.params.join(", "), function.body)
            },
            Self::Builtin(builtin) => write!(f, "builtin function {}", builtin.name),
            Self::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}
