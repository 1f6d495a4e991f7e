use std::rc::Rc;

use crate::{
    interpreter::{
        evaluator::function::{console::Io, core::BuiltinResult},
        value::core::Value,
    },
    util::num::len_to_i64,
};

/// Counts the elements of an array or the characters of a string.
///
/// # Example
/// ```
/// use squid::interpreter::{
///     evaluator::function::{collection::cat, console::Io},
///     value::core::Value,
/// };
///
/// let mut io = Io::buffered("");
///
/// assert_eq!(cat(&[Value::from("héllo")], &mut io), Ok(Some(Value::Integer(5))));
/// assert!(cat(&[Value::Integer(1)], &mut io).is_err());
/// ```
pub fn cat(args: &[Value], _: &mut Io) -> BuiltinResult {
    match &args[0] {
        Value::Array(elements) => Ok(Some(Value::Integer(len_to_i64(elements.len())))),
        Value::Str(s) => Ok(Some(Value::Integer(len_to_i64(s.chars().count())))),
        other => Err(format!("Argument not supported, got {}", other.type_name())),
    }
}

/// The first element of an array, or `null` when it is empty.
pub fn first(args: &[Value], _: &mut Io) -> BuiltinResult {
    let elements = expect_array(&args[0])?;
    Ok(Some(elements.first().cloned().unwrap_or(Value::Null)))
}

/// The last element of an array, or `null` when it is empty.
pub fn last(args: &[Value], _: &mut Io) -> BuiltinResult {
    let elements = expect_array(&args[0])?;
    Ok(Some(elements.last().cloned().unwrap_or(Value::Null)))
}

/// Returns a new array with the second argument appended. The original
/// array is left untouched.
pub fn add(args: &[Value], _: &mut Io) -> BuiltinResult {
    let elements = expect_array(&args[0])?;

    let mut extended = Vec::with_capacity(elements.len() + 1);
    extended.extend(elements.iter().cloned());
    extended.push(args[1].clone());

    Ok(Some(Value::from(extended)))
}

/// Tests whether an array holds an element equal to the second argument.
pub fn array_contains(args: &[Value], _: &mut Io) -> BuiltinResult {
    let elements = expect_array(&args[0])?;
    Ok(Some(Value::Bool(elements.contains(&args[1]))))
}

fn expect_array(value: &Value) -> Result<&Rc<Vec<Value>>, String> {
    match value {
        Value::Array(elements) => Ok(elements),
        other => Err(format!("Argument must be array, got {}", other.type_name())),
    }
}
