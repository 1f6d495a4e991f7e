use crate::{
    ast::{Expr, InfixOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, environment::Environment},
    },
};

impl Interpreter {
    /// Evaluates an infix operation.
    ///
    /// The left operand is always evaluated first. `&&` and `||` stop there
    /// when the left operand already decides the result; every other
    /// operator evaluates both sides and defers to [`apply_infix`].
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The operator.
    /// - `right`: Right operand expression.
    /// - `line`: Source line.
    /// - `env`: Current environment.
    pub(crate) fn eval_infix(&mut self,
                             left: &Expr,
                             op: InfixOperator,
                             right: &Expr,
                             line: usize,
                             env: &Environment)
                             -> EvalResult<Value> {
        let lhs = self.eval_child(left, env, line)?;

        match op {
            InfixOperator::And if !lhs.is_truthy() => return Ok(Value::Bool(false)),
            InfixOperator::Or if lhs.is_truthy() => return Ok(Value::Bool(true)),
            _ => {},
        }

        let rhs = self.eval_child(right, env, line)?;
        Ok(apply_infix(op, &lhs, &rhs, line)?)
    }
}

/// Applies an infix operator to two evaluated operands.
///
/// - Two integers support arithmetic and comparison. Arithmetic wraps on
///   overflow.
/// - Two strings support `+` (concatenation).
/// - `==` and `!=` accept any pair and compare structurally; operands of
///   different kinds are unequal.
/// - `&&` and `||` combine truthiness and always yield a boolean.
///
/// # Errors
/// - `DivisionByZero` for an integer `/` with a zero divisor.
/// - `TypeMismatch` for every other operator and kind combination.
///
/// # Example
/// ```
/// use squid::{
///     ast::InfixOperator,
///     interpreter::{evaluator::infix::apply_infix, value::core::Value},
/// };
///
/// let sum = apply_infix(InfixOperator::Add, &Value::Integer(2), &Value::Integer(3), 1);
/// assert_eq!(sum, Ok(Value::Integer(5)));
///
/// let text = apply_infix(InfixOperator::Add, &Value::from("ab"), &Value::from("c"), 1);
/// assert_eq!(text, Ok(Value::from("abc")));
///
/// let eq = apply_infix(InfixOperator::Equal, &Value::Integer(1), &Value::Bool(true), 1);
/// assert_eq!(eq, Ok(Value::Bool(false)));
/// ```
pub fn apply_infix(op: InfixOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> Result<Value, RuntimeError> {
    match (op, left, right) {
        (InfixOperator::And, ..) => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        (InfixOperator::Or, ..) => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
        (_, Value::Integer(a), Value::Integer(b)) => integer_infix(op, *a, *b, line),
        (InfixOperator::Add, Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::from(joined))
        },
        (InfixOperator::Equal, ..) => Ok(Value::Bool(left == right)),
        (InfixOperator::NotEqual, ..) => Ok(Value::Bool(left != right)),
        _ => Err(type_mismatch(op, left, right, line)),
    }
}

/// Integer arithmetic and comparison.
fn integer_infix(op: InfixOperator, a: i64, b: i64, line: usize) -> Result<Value, RuntimeError> {
    let value = match op {
        InfixOperator::Add => Value::Integer(a.wrapping_add(b)),
        InfixOperator::Sub => Value::Integer(a.wrapping_sub(b)),
        InfixOperator::Mul => Value::Integer(a.wrapping_mul(b)),
        InfixOperator::Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            Value::Integer(a.wrapping_div(b))
        },
        InfixOperator::Equal => Value::Bool(a == b),
        InfixOperator::NotEqual => Value::Bool(a != b),
        InfixOperator::Less => Value::Bool(a < b),
        InfixOperator::Greater => Value::Bool(a > b),
        InfixOperator::LessEqual => Value::Bool(a <= b),
        InfixOperator::GreaterEqual => Value::Bool(a >= b),
        // Integers are always truthy.
        InfixOperator::And | InfixOperator::Or => Value::Bool(true),
    };
    Ok(value)
}

fn type_mismatch(op: InfixOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeMismatch { left: left.type_name(),
                                 op: op.to_string(),
                                 right: right.type_name(),
                                 line }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_arithmetic_wraps() {
        let max = Value::Integer(i64::MAX);

        assert_eq!(apply_infix(InfixOperator::Add, &max, &Value::Integer(1), 1),
                   Ok(Value::Integer(i64::MIN)));
        assert_eq!(apply_infix(InfixOperator::Div, &Value::Integer(i64::MIN), &Value::Integer(-1), 1),
                   Ok(Value::Integer(i64::MIN)));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(apply_infix(InfixOperator::Div, &Value::Integer(1), &Value::Integer(0), 4),
                   Err(RuntimeError::DivisionByZero { line: 4 }));
    }

    #[test]
    fn strings_only_support_concatenation_and_equality() {
        let a = Value::from("a");

        assert_eq!(apply_infix(InfixOperator::Equal, &a, &Value::from("a"), 1),
                   Ok(Value::Bool(true)));

        let err = apply_infix(InfixOperator::Less, &a, &Value::from("b"), 2).unwrap_err();
        assert_eq!(err.to_string(), "line 2: type mismatch: string < string");
    }

    #[test]
    fn mixed_kinds_are_a_type_mismatch() {
        let err = apply_infix(InfixOperator::Add, &Value::Integer(1), &Value::Bool(true), 7).unwrap_err();

        assert_eq!(err.to_string(), "line 7: type mismatch: integer + boolean");
    }
}
