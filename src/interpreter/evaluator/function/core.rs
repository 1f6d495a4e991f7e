use std::fmt;

use log::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter, Unwind},
            function::{collection, console, console::Io, convert, fs, random},
        },
        value::{
            core::{Function, Value},
            environment::Environment,
        },
    },
};

/// What a builtin hands back: a value, no value, or a message describing why
/// it refused its arguments or why the host operation failed.
pub type BuiltinResult = Result<Option<Value>, String>;

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the console
/// streams. Its arity has already been checked.
pub type BuiltinFn = fn(&[Value], &mut Io) -> BuiltinResult;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

/// A native function exposed under a fixed name in the global scope.
pub struct Builtin {
    /// Name the builtin is bound to.
    pub name:  &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    /// The implementation.
    pub func:  BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table, bound into every global environment),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "cat"           => { arity: Arity::Exact(1),   func: collection::cat },
    "first"         => { arity: Arity::Exact(1),   func: collection::first },
    "last"          => { arity: Arity::Exact(1),   func: collection::last },
    "add"           => { arity: Arity::Exact(2),   func: collection::add },
    "arraycontains" => { arity: Arity::Exact(2),   func: collection::array_contains },
    "tp"            => { arity: Arity::Exact(1),   func: convert::tp },
    "intstr"        => { arity: Arity::Exact(1),   func: convert::intstr },
    "tpint"         => { arity: Arity::Exact(1),   func: convert::tpint },
    "sepr"          => { arity: Arity::Exact(2),   func: convert::sepr },
    "rand"          => { arity: Arity::Exact(2),   func: random::rand },
    "write"         => { arity: Arity::AtLeast(0), func: console::write },
    "read"          => { arity: Arity::Exact(1),   func: console::read },
    "makedir"       => { arity: Arity::Exact(1),   func: fs::makedir },
    "dirmv"         => { arity: Arity::Exact(2),   func: fs::dirmv },
    "filemv"        => { arity: Arity::Exact(2),   func: fs::filemv },
    "dircp"         => { arity: Arity::Exact(2),   func: fs::dircp },
    "filecp"        => { arity: Arity::Exact(2),   func: fs::filecp },
    "ls"            => { arity: Arity::Exact(1),   func: fs::ls },
    "writefile"     => { arity: Arity::Exact(2),   func: fs::writefile },
    "readfile"      => { arity: Arity::Exact(1),   func: fs::readfile },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Errors
    /// Returns the message reported to the program when the count is not
    /// permitted.
    ///
    /// # Example
    /// ```
    /// use squid::interpreter::evaluator::function::core::Arity;
    ///
    /// assert!(Arity::Exact(2).check(2).is_ok());
    /// assert_eq!(Arity::Exact(1).check(3).unwrap_err(),
    ///            "Wrong number of arguments. Got 3, expected 1");
    /// assert!(Arity::AtLeast(0).check(5).is_ok());
    /// ```
    pub fn check(self, n: usize) -> Result<(), String> {
        match self {
            Self::Exact(m) if n != m => {
                Err(format!("Wrong number of arguments. Got {n}, expected {m}"))
            },
            Self::AtLeast(m) if n < m => {
                Err(format!("Wrong number of arguments. Got {n}, expected at least {m}"))
            },
            _ => Ok(()),
        }
    }
}

/// Binds every builtin in `env` under its name.
pub fn register_builtins(env: &Environment) {
    for builtin in BUILTIN_TABLE {
        env.set(builtin.name, Value::Builtin(builtin));
    }
}

impl Interpreter {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then each argument from left to right.
    /// The first error stops evaluation of the remaining arguments.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            line: usize,
                            env: &Environment)
                            -> EvalResult<Option<Value>> {
        let function = self.eval_child(callee, env, line)?;
        let args = arguments.iter()
                            .map(|argument| self.eval_child(argument, env, line))
                            .collect::<EvalResult<Vec<_>>>()?;

        self.apply_function(&function, args, line)
    }

    /// Calls `function` with already evaluated arguments.
    ///
    /// # Parameters
    /// - `function`: The callee; must be a closure or a builtin.
    /// - `args`: Argument values in order.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The call's result. Closures always produce a value (`null` when the
    /// body yields nothing); builtins such as `write` produce none.
    pub fn apply_function(&mut self,
                          function: &Value,
                          args: Vec<Value>,
                          line: usize)
                          -> EvalResult<Option<Value>> {
        match function {
            Value::Function(function) => self.call_closure(function, args, line).map(Some),
            Value::Builtin(builtin) => self.call_builtin(builtin, &args, line),
            other => Err(RuntimeError::NotCallable { kind: other.type_name(),
                                                     line }.into()),
        }
    }

    /// Executes a user-defined function.
    ///
    /// The parameters are bound in a fresh environment enclosed by the one
    /// the function captured, not the caller's. A `return` inside the body
    /// stops at this boundary.
    ///
    /// # Errors
    /// - Wrong number of arguments.
    /// - Call depth limit reached.
    fn call_closure(&mut self, function: &Function, args: Vec<Value>, line: usize) -> EvalResult<Value> {
        if args.len() != function.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { expected: function.params.len(),
                                                             found: args.len(),
                                                             line }.into());
        }
        if self.depth() >= self.max_depth {
            return Err(RuntimeError::MaxDepthExceeded { limit: self.max_depth,
                                                        line }.into());
        }

        let local = Environment::enclosed(&function.env);
        for (param, arg) in function.params.iter().zip(args) {
            local.set(param.as_str(), arg);
        }

        self.enter_call();
        let result = self.eval_block(&function.body, &local);
        self.leave_call();

        match result {
            Ok(value) => Ok(value.unwrap_or(Value::Null)),
            Err(Unwind::Return(value)) => Ok(value),
            Err(error) => Err(error),
        }
    }

    /// Checks the arity of a builtin and runs it against this interpreter's
    /// console streams.
    fn call_builtin(&mut self,
                    builtin: &Builtin,
                    args: &[Value],
                    line: usize)
                    -> EvalResult<Option<Value>> {
        trace!("calling builtin `{}` with {} argument(s)", builtin.name, args.len());

        let fail = |message| RuntimeError::Builtin { name: builtin.name,
                                                     message,
                                                     line };

        builtin.arity.check(args.len()).map_err(fail)?;
        Ok((builtin.func)(args, &mut self.io).map_err(fail)?)
    }
}
