use std::{
    cell::RefCell,
    io::{self, BufRead, Cursor, Write},
    rc::Rc,
};

use crate::interpreter::{evaluator::function::core::BuiltinResult, value::core::Value};

/// The input and output streams seen by `read` and `write`.
///
/// The interpreter owns one `Io` for its whole lifetime. The binary wires it
/// to the standard streams; tests swap in in-memory buffers.
pub struct Io {
    /// Source of lines for `read` (and for the REPL).
    pub input:  Box<dyn BufRead>,
    /// Sink for `write`, `read` prompts and REPL output.
    pub output: Box<dyn Write>,
}

impl Io {
    /// Wraps arbitrary streams.
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self { input:  Box::new(input),
               output: Box::new(output), }
    }

    /// The process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }

    /// Reads from `input` and discards all output.
    #[must_use]
    pub fn buffered(input: &str) -> Self {
        Self::new(Cursor::new(input.to_string()), io::sink())
    }
}

/// An in-memory output stream whose clones share one buffer, so the
/// contents can be inspected after handing a clone to an [`Io`].
///
/// # Example
/// ```
/// use std::io::Write;
///
/// use squid::interpreter::evaluator::function::console::SharedOutput;
///
/// let output = SharedOutput::default();
/// let mut writer = output.clone();
/// write!(writer, "hi").unwrap();
///
/// assert_eq!(output.contents(), "hi");
/// ```
#[derive(Clone, Default)]
pub struct SharedOutput(Rc<RefCell<Vec<u8>>>);

impl SharedOutput {
    /// Everything written so far, decoded lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Prints the display form of every argument, back to back, followed by a
/// newline. Produces no value.
pub fn write(args: &[Value], io: &mut Io) -> BuiltinResult {
    let emit = |output: &mut dyn Write| -> io::Result<()> {
        for arg in args {
            write!(output, "{arg}")?;
        }
        writeln!(output)?;
        output.flush()
    };

    emit(io.output.as_mut()).map_err(|e| format!("Failed to write output: {e}"))?;
    Ok(None)
}

/// Prints a prompt and reads one line.
///
/// Surrounding whitespace is trimmed. A line holding a decimal integer
/// yields an integer; anything else yields the text as a string.
///
/// # Example
/// ```
/// use squid::interpreter::{
///     evaluator::function::console::{Io, read},
///     value::core::Value,
/// };
///
/// let mut io = Io::buffered("42\n  hello  \n");
///
/// assert_eq!(read(&[Value::from("> ")], &mut io), Ok(Some(Value::Integer(42))));
/// assert_eq!(read(&[Value::from("> ")], &mut io), Ok(Some(Value::from("hello"))));
/// assert!(read(&[Value::from("> ")], &mut io).is_err());
/// ```
pub fn read(args: &[Value], io: &mut Io) -> BuiltinResult {
    let Value::Str(prompt) = &args[0] else {
        return Err(format!("Argument must be string. Got {}", args[0].type_name()));
    };

    write!(io.output, "{prompt}").and_then(|()| io.output.flush())
                                 .map_err(|e| format!("Failed to write output: {e}"))?;

    let mut line = String::new();
    let read = io.input
                 .read_line(&mut line)
                 .map_err(|e| format!("Failed to read input: {e}"))?;
    if read == 0 {
        return Err("Failed to read input: end of input".to_string());
    }

    let line = line.trim();
    Ok(Some(line.parse::<i64>().map_or_else(|_| Value::from(line), Value::Integer)))
}
