use std::{error::Error, fmt, process};

/// Conditions the runtime cannot recover from.
///
/// None of these are ever handed back to a compiled program: the C ABI has no
/// error channel, so they end the process through [`abort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A null pointer was passed where a terminated text is required.
    NullText { operation: &'static str },
    /// The allocator refused to provide `requested` bytes.
    OutOfMemory { requested: usize },
}

impl RuntimeError {
    pub fn null_text(operation: &'static str) -> Self {
        Self::NullText { operation }
    }

    pub fn out_of_memory(requested: usize) -> Self {
        Self::OutOfMemory { requested }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::NullText { operation } => {
                write!(f, "`{}` was called with a null text pointer", operation)
            }
            RuntimeError::OutOfMemory { requested } => {
                write!(f, "could not allocate {} bytes for input", requested)
            }
        }
    }
}

impl Error for RuntimeError {}

/// Reports `err` on standard error and terminates the process.
pub fn abort(err: RuntimeError) -> ! {
    log::error!("{}", err);
    eprintln!("runtime error: {}", err);
    process::abort()
}
