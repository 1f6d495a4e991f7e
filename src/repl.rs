use std::io::{self, Write};

use crate::interpreter::evaluator::core::Interpreter;

/// Printed before every line of input.
pub const PROMPT: &str = ">> ";

/// The banner printed when the interactive prompt starts.
///
/// # Example
/// ```
/// use squid::repl::greeting;
///
/// assert!(greeting("ada").starts_with("Hello ada!"));
/// ```
#[must_use]
pub fn greeting(user: &str) -> String {
    format!("Hello {user}! This is the squid programming language!\nFeel free to type in commands")
}

/// Runs the read-eval-print loop on the interpreter's own streams until the
/// input ends.
///
/// Every line is parsed and evaluated against the same global environment,
/// so bindings persist from one line to the next. Syntax errors and values
/// are written to the output; lines that produce no value print nothing.
///
/// # Errors
/// Fails only when reading the input or writing the output fails.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use squid::{
///     interpreter::evaluator::{
///         core::Interpreter,
///         function::console::{Io, SharedOutput},
///     },
///     repl,
/// };
///
/// let output = SharedOutput::default();
/// let io = Io::new(Cursor::new("let a = 2;\na * 21\n"), output.clone());
/// let mut interpreter = Interpreter::with_io(io);
///
/// repl::start(&mut interpreter).unwrap();
/// assert_eq!(output.contents(), ">> >> 42\n>> \n");
/// ```
pub fn start(interpreter: &mut Interpreter) -> io::Result<()> {
    loop {
        write!(interpreter.io.output, "{PROMPT}")?;
        interpreter.io.output.flush()?;

        let mut line = String::new();
        if interpreter.io.input.read_line(&mut line)? == 0 {
            writeln!(interpreter.io.output)?;
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        match interpreter.eval_source(&line) {
            Ok(Some(value)) => writeln!(interpreter.io.output, "{value}")?,
            Ok(None) => {},
            Err(errors) => writeln!(interpreter.io.output, "{errors}")?,
        }
    }
}
