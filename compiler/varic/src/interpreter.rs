//! The interpreter context and the statement-at-a-time driver loop.

use tracing::debug;
use vari_eval::{buffer_handler, stdout_handler, Environment, Evaluator, SharedPrintHandler};
use vari_lexer::LexWarning;
use vari_parse::Parser;

use crate::RunError;

/// Owns everything a run mutates. Independent interpreters share nothing.
pub struct Interpreter {
    evaluator: Evaluator,
}

impl Interpreter {
    /// Create an interpreter writing `print` output to `print`.
    pub fn new(print: SharedPrintHandler) -> Self {
        Interpreter {
            evaluator: Evaluator::new(print),
        }
    }

    /// Create an interpreter printing to stdout.
    pub fn with_stdout() -> Self {
        Interpreter::new(stdout_handler())
    }

    /// Create an interpreter capturing output in a buffer.
    pub fn with_buffer() -> Self {
        Interpreter::new(buffer_handler())
    }

    /// Variables bound so far.
    pub fn env(&self) -> &Environment {
        self.evaluator.env()
    }

    /// Captured output, empty when printing to stdout.
    pub fn output(&self) -> String {
        self.evaluator.print_handler().get_output()
    }

    /// Run a program.
    ///
    /// Each statement is parsed, its lexer warnings are handed to
    /// `on_warning`, and then it is evaluated before the next one is read.
    /// Bindings from earlier calls stay visible.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(
        &mut self,
        source: &str,
        mut on_warning: impl FnMut(LexWarning),
    ) -> Result<(), RunError> {
        let mut parser = Parser::new(source);
        let mut executed = 0usize;
        loop {
            let parsed = parser.parse_statement();
            parser.take_warnings().into_iter().for_each(&mut on_warning);
            let Some(stmt) = parsed? else {
                break;
            };
            self.evaluator.exec_stmt(&stmt)?;
            executed += 1;
        }
        debug!(executed, "run finished");
        Ok(())
    }
}

/// Everything observable about one run of a program.
#[derive(Debug)]
pub struct RunOutput {
    /// Text written by `print`.
    pub output: String,
    /// Lexer warnings in source order.
    pub warnings: Vec<LexWarning>,
    /// Variables bound when the run stopped.
    pub env: Environment,
    /// `Ok` if the whole program ran.
    pub result: Result<(), RunError>,
}

/// Run `source` in a fresh interpreter with captured output.
pub fn run_source(source: &str) -> RunOutput {
    let mut interpreter = Interpreter::with_buffer();
    let mut warnings = Vec::new();
    let result = interpreter.run(source, |warning| warnings.push(warning));
    RunOutput {
        output: interpreter.output(),
        warnings,
        env: interpreter.env().clone(),
        result,
    }
}
