//! Vari Eval - tree-walking evaluator.
//!
//! # Architecture
//!
//! - `Environment`: flat name → integer store, last write wins
//! - `Evaluator`: walks one statement at a time, owning the environment
//! - `PrintHandlerImpl`: where `print` output goes (stdout or a buffer)

mod environment;
pub mod errors;
mod evaluator;
mod print_handler;

pub use environment::Environment;
pub use errors::{EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use print_handler::{buffer_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler};
