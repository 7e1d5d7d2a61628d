//! Writing text and numbers to standard output.
//!
//! [`Output`] does the work over any writer, which is how the tests observe
//! the exact bytes. The free functions bind it to the process's standard
//! output and are what the C exports call.

use std::{
    ffi::CStr,
    io::{self, StdoutLock, Write},
};

/// The output primitives, over an arbitrary byte sink.
///
/// Every operation flushes before returning, so nothing written is left
/// sitting in a buffer between calls.
#[derive(Debug)]
pub struct Output<W> {
    inner: W,
}

impl<W: Write> Output<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes `text` verbatim.
    pub fn print(&mut self, text: &CStr) -> io::Result<()> {
        self.inner.write_all(text.to_bytes())?;
        self.inner.flush()
    }

    /// Writes `text` and a newline.
    pub fn println(&mut self, text: &CStr) -> io::Result<()> {
        self.inner.write_all(text.to_bytes())?;
        self.inner.write_all(b"\n")?;
        self.inner.flush()
    }

    /// Writes `text`, the decimal rendering of `n`, and a newline.
    pub fn print_with_number(&mut self, text: &CStr, n: i64) -> io::Result<()> {
        self.inner.write_all(text.to_bytes())?;
        writeln!(self.inner, "{}", n)?;
        self.inner.flush()
    }

    /// Writes `first`, `second`, and a newline, with nothing in between.
    pub fn print_with_string(&mut self, first: &CStr, second: &CStr) -> io::Result<()> {
        self.inner.write_all(first.to_bytes())?;
        self.inner.write_all(second.to_bytes())?;
        self.inner.write_all(b"\n")?;
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Runs `op` against the locked standard output.
///
/// Compiled programs have no way to observe a failed write, so the error is
/// logged and dropped here.
fn with_stdout(
    operation: &'static str,
    op: impl FnOnce(&mut Output<StdoutLock<'static>>) -> io::Result<()>,
) {
    let mut output = Output::new(io::stdout().lock());
    if let Err(e) = op(&mut output) {
        log::warn!("`{}` could not write to standard output: {}", operation, e);
    }
}

pub fn print(text: &CStr) {
    with_stdout("print", |out| out.print(text))
}

pub fn println(text: &CStr) {
    with_stdout("println", |out| out.println(text))
}

pub fn print_with_number(text: &CStr, n: i64) {
    with_stdout("printn", |out| out.print_with_number(text, n))
}

pub fn print_with_string(first: &CStr, second: &CStr) {
    with_stdout("prints", |out| out.print_with_string(first, second))
}
