use log::debug;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::{RuntimeError, SyntaxErrors},
    interpreter::{
        evaluator::function::{console::Io, core::register_builtins},
        parser::parse,
        value::{core::Value, environment::Environment},
    },
    util::stack::ensure_sufficient_stack,
};

/// Default limit on nested user-function calls.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Anything that stops evaluation of the enclosing statements early.
///
/// `Return` travels up to the nearest function call (or the top of the
/// program) where it is unwrapped into a plain value. `Error` is never
/// caught: it poisons every enclosing evaluation and becomes the program's
/// result.
#[derive(Debug, Clone, PartialEq)]
pub enum Unwind {
    /// A `return` statement fired with this value.
    Return(Value),
    /// A runtime error occurred.
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`Unwind`] that the caller must pass on with `?`.
pub type EvalResult<T> = Result<T, Unwind>;

/// Stores the runtime evaluation state.
///
/// An `Interpreter` owns one global environment, pre-populated with the
/// builtin table, and keeps it across calls to [`Interpreter::eval_program`].
/// This is what lets the REPL see earlier `let`s on later lines.
///
/// ## Usage
///
/// ```
/// use squid::interpreter::{evaluator::core::Interpreter, value::core::Value};
///
/// let mut interpreter = Interpreter::new();
///
/// interpreter.eval_source("let double = fn(x) { x * 2 };").unwrap();
/// let result = interpreter.eval_source("double(21)").unwrap();
///
/// assert_eq!(result, Some(Value::Integer(42)));
/// ```
pub struct Interpreter {
    /// The outermost environment.
    pub globals:   Environment,
    /// Streams used by the console builtins.
    pub io:        Io,
    /// Maximum number of nested user-function calls.
    pub max_depth: usize,
    depth:         usize,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates an interpreter wired to the process's standard streams.
    #[must_use]
    pub fn new() -> Self {
        Self::with_io(Io::stdio())
    }

    /// Creates an interpreter whose console builtins use `io`.
    #[must_use]
    pub fn with_io(io: Io) -> Self {
        let globals = Environment::new();
        register_builtins(&globals);

        Self { globals,
               io,
               max_depth: DEFAULT_MAX_DEPTH,
               depth: 0 }
    }

    /// Replaces the limit on nested user-function calls.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Lexes, parses and evaluates `source` against the global environment.
    ///
    /// # Errors
    /// Returns every syntax error if the source does not parse; nothing is
    /// evaluated in that case.
    pub fn eval_source(&mut self, source: &str) -> Result<Option<Value>, SyntaxErrors> {
        let (program, errors) = parse(source);
        if !errors.is_empty() {
            return Err(SyntaxErrors(errors));
        }
        Ok(self.eval_program(&program))
    }

    /// Evaluates the top-level statements of a program in order.
    ///
    /// # Returns
    /// - The value of the last statement, or `None` if it produced none (for
    ///   example a `let`).
    /// - The value of a top-level `return`, which ends the program.
    /// - A [`Value::Error`] if a runtime error occurred; nothing after it is
    ///   evaluated.
    pub fn eval_program(&mut self, program: &Program) -> Option<Value> {
        let globals = self.globals.clone();
        let mut result = None;

        for statement in &program.statements {
            match self.eval_statement(statement, &globals) {
                Ok(value) => result = value,
                Err(Unwind::Return(value)) => return Some(value),
                Err(Unwind::Error(error)) => {
                    debug!("runtime error: {error}");
                    return Some(Value::from(error));
                },
            }
        }

        result
    }

    /// Evaluates a single statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `env`: Environment the statement runs in.
    ///
    /// # Returns
    /// `Some(Value)` for expression statements that yield a result, or `None`
    /// for `let` and for expressions that produce no value.
    pub fn eval_statement(&mut self,
                          statement: &Statement,
                          env: &Environment)
                          -> EvalResult<Option<Value>> {
        match statement {
            Statement::Let { name, value, line } => {
                let value = self.eval_child(value, env, *line)?;
                env.set(name.as_str(), value);
                Ok(None)
            },
            Statement::Return { value, line } => {
                let value = match value {
                    Some(expr) => self.eval_child(expr, env, *line)?,
                    None => Value::Null,
                };
                Err(Unwind::Return(value))
            },
            Statement::Expression { expr, .. } => self.eval(expr, env),
        }
    }

    /// Evaluates the statements of a block in `env` and yields the value of
    /// the last one. Blocks do not open a scope.
    pub fn eval_block(&mut self, block: &Block, env: &Environment) -> EvalResult<Option<Value>> {
        let mut result = None;
        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
        }
        Ok(result)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, identifiers, prefix
    /// and infix operations, assignment, conditionals, function literals and
    /// calls, arrays, indexing and hashes.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for
    /// constructs that do not yield one, such as an empty block or a call to
    /// `write`.
    pub fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult<Option<Value>> {
        ensure_sufficient_stack(|| self.dispatch(expr, env))
    }

    fn dispatch(&mut self, expr: &Expr, env: &Environment) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Literal { value, .. } => Ok(Some(Value::from(value))),
            Expr::Identifier { name, line } => Self::eval_identifier(name, *line, env).map(Some),
            Expr::Prefix { op, operand, line } => {
                self.eval_prefix(*op, operand, *line, env).map(Some)
            },
            Expr::Infix { left,
                          op,
                          right,
                          line, } => self.eval_infix(left, *op, right, *line, env).map(Some),
            Expr::Assign { name, value, line } => {
                self.eval_assign(name, value, *line, env).map(Some)
            },
            Expr::If { condition,
                       consequence,
                       alternative,
                       line, } => {
                self.eval_if(condition, consequence, alternative.as_ref(), *line, env)
            },
            Expr::Function { params, body, .. } => {
                Ok(Some(Self::eval_function_literal(params, body, env)))
            },
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line, env),
            Expr::Array { elements, line } => {
                self.eval_array_literal(elements, *line, env).map(Some)
            },
            Expr::Index { target, index, line } => {
                self.eval_index(target, index, *line, env).map(Some)
            },
            Expr::Hash { pairs, line } => self.eval_hash_literal(pairs, *line, env).map(Some),
        }
    }

    /// Current number of active user-function calls.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn enter_call(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn leave_call(&mut self) {
        self.depth -= 1;
    }
}
