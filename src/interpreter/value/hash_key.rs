use std::{fmt::Display, rc::Rc};

use crate::interpreter::value::core::Value;

/// Enum representing values allowed as hash keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashKey {
    /// An integer such as `-4` or `42`.
    Integer(i64),
    /// A boolean such as `true`.
    Bool(bool),
    /// A string such as `"name"`.
    Str(Rc<str>),
}

/// Converts a value into a key, failing with the kind name of values that
/// cannot be hashed.
///
/// # Example
/// ```
/// use squid::interpreter::value::{core::Value, hash_key::HashKey};
///
/// assert_eq!(HashKey::try_from(&Value::Integer(1)), Ok(HashKey::Integer(1)));
/// assert_eq!(HashKey::try_from(&Value::Null), Err("null"));
/// ```
impl TryFrom<&Value> for HashKey {
    type Error = &'static str;

    fn try_from(v: &Value) -> Result<Self, Self::Error> {
        match v {
            Value::Integer(i) => Ok(Self::Integer(*i)),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Str(s) => Ok(Self::Str(Rc::clone(s))),
            other => Err(other.type_name()),
        }
    }
}

impl Display for HashKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
