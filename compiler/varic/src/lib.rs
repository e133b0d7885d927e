//! Vari interpreter driver.
//!
//! Ties the phases together: the parser pulls tokens from the lexer one
//! statement at a time, each statement is evaluated as soon as it parses,
//! and the first fatal error stops the run.
//!
//! The `vari` binary in `main.rs` is a thin argument loop over
//! [`commands`].

pub mod commands;
mod config;
mod error;
mod interpreter;
mod tracing_setup;

pub use config::RunConfig;
pub use error::RunError;
pub use interpreter::{run_source, Interpreter, RunOutput};
pub use tracing_setup::init_tracing;

/// Program run by `vari demo`.
pub const SAMPLE_PROGRAM: &str = "variable a = 10; print(a + 5);";
