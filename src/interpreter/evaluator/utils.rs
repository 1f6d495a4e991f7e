use std::rc::Rc;

use crate::{
    ast::{Block, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{
            core::{Function, Value},
            environment::Environment,
        },
    },
};

impl Interpreter {
    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// Operands, arguments, bindings, conditions and elements all need the
    /// same sequence: evaluate the expression, check for `None`, and report a
    /// `MissingValue` error when the expression yields nothing.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Environment to evaluate it in.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The evaluated `Value`.
    ///
    /// # Example
    /// ```
    /// use squid::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::new();
    /// let env = interpreter.globals.clone();
    /// let expr = Expr::Literal { value: 10.into(),
    ///                            line:  1, };
    ///
    /// let v = interpreter.eval_child(&expr, &env, 1).unwrap();
    /// assert_eq!(v, Value::Integer(10));
    /// ```
    pub fn eval_child(&mut self, expr: &Expr, env: &Environment, line: usize) -> EvalResult<Value> {
        self.eval(expr, env)?
            .ok_or_else(|| RuntimeError::MissingValue { line }.into())
    }

    /// Looks a name up through the whole scope chain.
    pub(crate) fn eval_identifier(name: &str, line: usize, env: &Environment) -> EvalResult<Value> {
        env.get(name)
           .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.to_string(),
                                                             line }.into())
    }

    /// Evaluates `name = value`.
    ///
    /// The nearest existing binding of `name` is replaced; a name bound
    /// nowhere is an error, and in that case the right-hand side is not
    /// evaluated. The expression yields the assigned value.
    pub(crate) fn eval_assign(&mut self,
                              name: &str,
                              value: &Expr,
                              line: usize,
                              env: &Environment)
                              -> EvalResult<Value> {
        if env.get(name).is_none() {
            return Err(RuntimeError::UnknownIdentifier { name: name.to_string(),
                                                         line }.into());
        }

        let value = self.eval_child(value, env, line)?;
        env.assign(name, value.clone());
        Ok(value)
    }

    /// Evaluates an `if` expression.
    ///
    /// The condition is tested for truthiness. A falsy condition with no
    /// `else` yields `null`; otherwise the chosen block's value is returned,
    /// which is `None` for an empty block.
    pub(crate) fn eval_if(&mut self,
                          condition: &Expr,
                          consequence: &Block,
                          alternative: Option<&Block>,
                          line: usize,
                          env: &Environment)
                          -> EvalResult<Option<Value>> {
        if self.eval_child(condition, env, line)?.is_truthy() {
            self.eval_block(consequence, env)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(Some(Value::Null))
        }
    }

    /// Builds a closure over the current environment.
    pub(crate) fn eval_function_literal(params: &[String],
                                        body: &Rc<Block>,
                                        env: &Environment)
                                        -> Value {
        Value::Function(Rc::new(Function { params: params.to_vec(),
                                           body:   Rc::clone(body),
                                           env:    env.clone(), }))
    }
}
