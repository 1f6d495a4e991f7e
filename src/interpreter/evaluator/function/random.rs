use rand::{Rng, thread_rng};

use crate::interpreter::{
    evaluator::function::{console::Io, core::BuiltinResult},
    value::core::Value,
};

/// A uniformly distributed integer in `[lo, hi)`.
///
/// # Example
/// ```
/// use squid::interpreter::{
///     evaluator::function::{console::Io, random::rand},
///     value::core::Value,
/// };
///
/// let mut io = Io::buffered("");
/// let Ok(Some(Value::Integer(n))) = rand(&[Value::Integer(3), Value::Integer(5)], &mut io) else {
///     panic!("expected an integer");
/// };
///
/// assert!((3..5).contains(&n));
/// assert!(rand(&[Value::Integer(5), Value::Integer(5)], &mut io).is_err());
/// ```
pub fn rand(args: &[Value], _: &mut Io) -> BuiltinResult {
    let (Value::Integer(lo), Value::Integer(hi)) = (&args[0], &args[1]) else {
        return Err(format!("Arguments must be integers. Got {} and {}",
                           args[0].type_name(),
                           args[1].type_name()));
    };

    if lo >= hi {
        return Err("First argument must be less than second argument".to_string());
    }

    Ok(Some(Value::Integer(thread_rng().gen_range(*lo..*hi))))
}
