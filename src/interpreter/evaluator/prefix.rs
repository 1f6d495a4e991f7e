use crate::{
    ast::{Expr, PrefixOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, environment::Environment},
    },
};

impl Interpreter {
    /// Evaluates a prefix operation.
    ///
    /// Evaluates the operand, then applies the operator with
    /// [`apply_prefix`].
    ///
    /// # Parameters
    /// - `op`: Prefix operator.
    /// - `operand`: Operand expression.
    /// - `line`: Source line.
    /// - `env`: Current environment.
    pub(crate) fn eval_prefix(&mut self,
                              op: PrefixOperator,
                              operand: &Expr,
                              line: usize,
                              env: &Environment)
                              -> EvalResult<Value> {
        let value = self.eval_child(operand, env, line)?;
        Ok(apply_prefix(op, &value, line)?)
    }
}

/// Applies a prefix operator to an evaluated operand.
///
/// - `!` negates the operand's truthiness and accepts any kind.
/// - `-` negates an integer, wrapping on `i64::MIN`.
///
/// # Errors
/// `-` on anything but an integer is a type mismatch.
///
/// # Example
/// ```
/// use squid::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::prefix::apply_prefix, value::core::Value},
/// };
///
/// assert_eq!(apply_prefix(PrefixOperator::Not, &Value::Integer(0), 1), Ok(Value::Bool(false)));
/// assert_eq!(apply_prefix(PrefixOperator::Negate, &Value::Integer(5), 1), Ok(Value::Integer(-5)));
/// assert!(apply_prefix(PrefixOperator::Negate, &Value::Bool(true), 1).is_err());
/// ```
pub fn apply_prefix(op: PrefixOperator, value: &Value, line: usize) -> Result<Value, RuntimeError> {
    match (op, value) {
        (PrefixOperator::Not, value) => Ok(Value::Bool(!value.is_truthy())),
        (PrefixOperator::Negate, Value::Integer(n)) => Ok(Value::Integer(n.wrapping_neg())),
        (PrefixOperator::Negate, other) => {
            Err(RuntimeError::PrefixTypeMismatch { op: op.to_string(),
                                                   operand: other.type_name(),
                                                   line })
        },
    }
}
