use indexmap::IndexMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, environment::Environment, hash_key::HashKey},
    },
    util::num::index_in_bounds,
};

impl Interpreter {
    /// Evaluates an array literal, element by element from left to right.
    ///
    /// # Parameters
    /// - `elements`: Element expressions.
    /// - `line`: Line number for error reporting.
    /// - `env`: Current environment.
    ///
    /// # Returns
    /// A `Value::Array` holding the evaluated elements.
    pub(crate) fn eval_array_literal(&mut self,
                                     elements: &[Expr],
                                     line: usize,
                                     env: &Environment)
                                     -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|element| self.eval_child(element, env, line))
                             .collect::<EvalResult<Vec<_>>>()?;

        Ok(Value::from(values))
    }

    /// Evaluates a hash literal.
    ///
    /// Each key is evaluated before its value, pairs in source order. When a
    /// key appears more than once the last value wins.
    pub(crate) fn eval_hash_literal(&mut self,
                                    pairs: &[(Expr, Expr)],
                                    line: usize,
                                    env: &Environment)
                                    -> EvalResult<Value> {
        let mut map = IndexMap::with_capacity(pairs.len());

        for (key_expr, value_expr) in pairs {
            let key = self.eval_child(key_expr, env, line)?;
            let key = HashKey::try_from(&key).map_err(|kind| RuntimeError::UnusableHashKey { kind,
                                                                                             line })?;
            let value = self.eval_child(value_expr, env, line)?;
            map.insert(key, value);
        }

        Ok(Value::from(map))
    }

    /// Evaluates `target[index]`.
    ///
    /// Arrays take an integer index and yield `null` outside `[0, len)`.
    /// Hashes take any hashable key and yield `null` for a missing one.
    pub(crate) fn eval_index(&mut self,
                             target: &Expr,
                             index: &Expr,
                             line: usize,
                             env: &Environment)
                             -> EvalResult<Value> {
        let target = self.eval_child(target, env, line)?;
        let index = self.eval_child(index, env, line)?;

        Ok(index_value(&target, &index, line)?)
    }
}

/// Looks `index` up in `target`.
///
/// # Errors
/// - `UnusableHashKey` when a hash is indexed by an unhashable value.
/// - `IndexNotSupported` for every other pair that is not an array with an
///   integer index.
///
/// # Example
/// ```
/// use squid::interpreter::{evaluator::collection::index_value, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
///
/// assert_eq!(index_value(&array, &Value::Integer(1), 1), Ok(Value::Integer(2)));
/// assert_eq!(index_value(&array, &Value::Integer(2), 1), Ok(Value::Null));
/// assert_eq!(index_value(&array, &Value::Integer(-1), 1), Ok(Value::Null));
/// ```
pub fn index_value(target: &Value, index: &Value, line: usize) -> Result<Value, RuntimeError> {
    match (target, index) {
        (Value::Array(elements), Value::Integer(i)) => {
            Ok(index_in_bounds(*i, elements.len()).map_or(Value::Null, |i| elements[i].clone()))
        },
        (Value::Hash(pairs), key) => {
            let key =
                HashKey::try_from(key).map_err(|kind| RuntimeError::UnusableHashKey { kind, line })?;
            Ok(pairs.get(&key).cloned().unwrap_or(Value::Null))
        },
        _ => Err(RuntimeError::IndexNotSupported { target: target.type_name(),
                                                   index: index.type_name(),
                                                   line }),
    }
}
