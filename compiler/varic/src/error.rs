//! The driver's error type.

use vari_diagnostic::Diagnostic;
use vari_eval::EvalError;
use vari_parse::ParseError;

/// The fatal error that ended a run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl RunError {
    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            RunError::Parse(err) => err.to_diagnostic(),
            RunError::Eval(err) => err.to_diagnostic(),
        }
    }
}
