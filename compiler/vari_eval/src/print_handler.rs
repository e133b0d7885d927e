//! Where `print` output goes.
//!
//! The CLI writes to stdout; tests and embedders capture into a buffer and
//! read it back. Dispatch is a plain enum match.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Output sink for `print`.
pub enum PrintHandlerImpl {
    /// Write each line to stdout.
    Stdout,
    /// Append each line to an in-memory buffer.
    Buffer(Mutex<String>),
}

impl PrintHandlerImpl {
    /// Emit one line of output.
    ///
    /// A closed stdout (e.g. `vari run f | head -0`) discards the line;
    /// evaluation carries on.
    pub fn println(&self, line: &str) {
        match self {
            PrintHandlerImpl::Stdout => {
                let _ = writeln!(io::stdout().lock(), "{line}");
            }
            PrintHandlerImpl::Buffer(buffer) => {
                let mut buffer = buffer.lock();
                buffer.push_str(line);
                buffer.push('\n');
            }
        }
    }

    /// Everything captured so far. Always empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            PrintHandlerImpl::Stdout => String::new(),
            PrintHandlerImpl::Buffer(buffer) => buffer.lock().clone(),
        }
    }
}

/// Print handler shared between the evaluator and whoever reads it back.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Handler that writes to stdout.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

/// Handler that captures output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

#[cfg(test)]
mod tests;
