use crate::{
    interpreter::{
        evaluator::function::{console::Io, core::BuiltinResult},
        value::core::Value,
    },
    util::num::index_in_bounds,
};

/// Name of the argument's kind as a string.
pub fn tp(args: &[Value], _: &mut Io) -> BuiltinResult {
    Ok(Some(Value::from(args[0].type_name())))
}

/// Decimal representation of an integer.
pub fn intstr(args: &[Value], _: &mut Io) -> BuiltinResult {
    match &args[0] {
        Value::Integer(i) => Ok(Some(Value::from(i.to_string()))),
        other => Err(format!("Argument must be an integer. Got {}", other.type_name())),
    }
}

/// Parses a string as a decimal integer.
///
/// # Example
/// ```
/// use squid::interpreter::{
///     evaluator::function::{console::Io, convert::tpint},
///     value::core::Value,
/// };
///
/// let mut io = Io::buffered("");
///
/// assert_eq!(tpint(&[Value::from("-42")], &mut io), Ok(Some(Value::Integer(-42))));
/// assert!(tpint(&[Value::from("4x")], &mut io).is_err());
/// ```
pub fn tpint(args: &[Value], _: &mut Io) -> BuiltinResult {
    let Value::Str(s) = &args[0] else {
        return Err(format!("Argument must be a string. Got {}", args[0].type_name()));
    };

    s.parse::<i64>()
     .map(|i| Some(Value::Integer(i)))
     .map_err(|e| format!("Failed to convert to integer: {e}"))
}

/// The field at a position among the whitespace-separated fields of a
/// string.
pub fn sepr(args: &[Value], _: &mut Io) -> BuiltinResult {
    let (Value::Str(s), Value::Integer(index)) = (&args[0], &args[1]) else {
        return Err(format!("Arguments must be (string, integer). Got {} and {}",
                           args[0].type_name(),
                           args[1].type_name()));
    };

    let fields: Vec<&str> = s.split_whitespace().collect();
    index_in_bounds(*index, fields.len())
        .map(|i| Some(Value::from(fields[i])))
        .ok_or_else(|| {
            format!("Index out of bounds. Got {index}, but only {} parts", fields.len())
        })
}
