//! Command handlers for the `vari` CLI.
//!
//! Shared utilities like `read_file` and the diagnostic emitter setup live
//! here in the module root.

use std::io::{IsTerminal, Stderr};

use vari_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use vari_diagnostic::Diagnostic;

use crate::RunConfig;

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::{eval_source, run_demo, run_file};

/// Read a source file, exiting with status 1 on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

/// Stderr emitter that resolves spans against `source`.
pub(crate) fn source_emitter(source: &str, path: &str, config: RunConfig) -> TerminalEmitter<Stderr> {
    let is_tty = std::io::stderr().is_terminal();
    TerminalEmitter::stderr(config.color, is_tty)
        .with_source(source)
        .with_file_path(path)
}

/// Emit a fatal diagnostic and exit with status 1.
pub(crate) fn fail(emitter: &mut TerminalEmitter<Stderr>, diagnostic: &Diagnostic) -> ! {
    emitter.emit(diagnostic);
    emitter.flush();
    std::process::exit(1);
}
