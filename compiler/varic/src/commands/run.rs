//! The `run`, `eval` and `demo` commands.

use vari_diagnostic::emitter::DiagnosticEmitter;

use super::{fail, read_file, source_emitter};
use crate::{Interpreter, RunConfig, SAMPLE_PROGRAM};

/// Run a vari source file.
pub fn run_file(path: &str, config: RunConfig) {
    let content = read_file(path);
    run_program(&content, path, config);
}

/// Run source text given on the command line.
pub fn eval_source(source: &str, config: RunConfig) {
    run_program(source, "<eval>", config);
}

/// Run the built-in sample program.
pub fn run_demo(config: RunConfig) {
    run_program(SAMPLE_PROGRAM, "<demo>", config);
}

fn run_program(source: &str, path: &str, config: RunConfig) {
    let mut emitter = source_emitter(source, path, config);
    let mut interpreter = Interpreter::with_stdout();

    let result = interpreter.run(source, |warning| emitter.emit(&warning.to_diagnostic()));
    if let Err(err) = result {
        fail(&mut emitter, &err.to_diagnostic());
    }
    emitter.flush();
}
