//! crates/logging/src/console.rs
//! Writer-generic console sink for info and warning output.

use std::backtrace::Backtrace;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::gate::{Verbosity, VerbosityGate};

/// Marker prefixed to warning lines so they stand out in mixed output.
pub const WARNING_PREFIX: &str = " !W! ";

/// Streaming sink that renders info and warning lines into an
/// [`io::Write`] target.
///
/// The sink owns the underlying writer together with a shared handle to the
/// process verbosity gate. Callers decide whether a message is shown by
/// passing the result of a gate query as the `show` argument; the sink itself
/// only consults the gate to decide whether warnings carry a call stack.
/// Production code writes to standard output via [`Console::stdout`], while
/// tests capture output in a `Vec<u8>`.
#[derive(Debug)]
pub struct Console<W> {
    writer: W,
    gate: Rc<RefCell<VerbosityGate>>,
}

impl<W> Console<W> {
    /// Creates a sink around `writer` sharing the supplied gate.
    #[must_use]
    pub fn new(writer: W, gate: Rc<RefCell<VerbosityGate>>) -> Self {
        Self { writer, gate }
    }

    /// Returns a new handle to the shared verbosity gate.
    #[must_use]
    pub fn gate(&self) -> Rc<RefCell<VerbosityGate>> {
        Rc::clone(&self.gate)
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Console<io::Stdout> {
    /// Creates a sink writing to standard output.
    ///
    /// All console output, warnings included, goes to standard output rather
    /// than standard error.
    #[must_use]
    pub fn stdout(gate: Rc<RefCell<VerbosityGate>>) -> Self {
        Self::new(io::stdout(), gate)
    }
}

impl<W> Console<W>
where
    W: Write,
{
    /// Writes `text` followed by a newline iff `show` is true.
    pub fn info(&mut self, text: &str, show: bool) -> io::Result<()> {
        if !show {
            return Ok(());
        }
        writeln!(self.writer, "{text}")
    }

    /// Writes a warning line, prefixed with [`WARNING_PREFIX`], iff `show`.
    ///
    /// When the gate has [`Verbosity::Trace`] active, the captured call stack
    /// is written before the marker line so the warning's origin can be
    /// located in long runs.
    pub fn warning(&mut self, text: &str, show: bool) -> io::Result<()> {
        if !show {
            return Ok(());
        }
        if self.gate.borrow().is_at_least(Verbosity::Trace) {
            writeln!(self.writer, "{}", Backtrace::force_capture())?;
        }
        writeln!(self.writer, "{WARNING_PREFIX}{text}")
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
