//! Evaluation errors and their constructors.
//!
//! All runtime errors are fatal.

use vari_diagnostic::{Diagnostic, ErrorCode};
use vari_ir::Span;

const RANGE_NOTE: &str = "integers range from -9223372036854775808 to 9223372036854775807";

/// A fatal runtime error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String, span: Span },

    #[error("integer literal `{text}` does not fit in a 64-bit integer")]
    LiteralOutOfRange { text: String, span: Span },

    #[error("integer overflow evaluating `{left} + {right}`")]
    Overflow { left: i64, right: i64, span: Span },
}

/// Result type for evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

impl EvalError {
    /// Location of the failing expression.
    pub fn span(&self) -> Span {
        match self {
            EvalError::UndefinedVariable { span, .. }
            | EvalError::LiteralOutOfRange { span, .. }
            | EvalError::Overflow { span, .. } => *span,
        }
    }

    /// Error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UndefinedVariable { .. } => ErrorCode::E6001,
            EvalError::LiteralOutOfRange { .. } => ErrorCode::E6002,
            EvalError::Overflow { .. } => ErrorCode::E6003,
        }
    }

    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            EvalError::UndefinedVariable { name, span } => diag
                .with_label(*span, "not declared before this use")
                .with_suggestion(format!("declare it first: `variable {name} = 0;`")),
            EvalError::LiteralOutOfRange { span, .. } => diag
                .with_label(*span, "literal too large")
                .with_note(RANGE_NOTE),
            EvalError::Overflow { span, .. } => diag
                .with_label(*span, "sum overflows")
                .with_note(RANGE_NOTE),
        }
    }
}

#[cold]
pub fn undefined_variable(name: &str, span: Span) -> EvalError {
    EvalError::UndefinedVariable {
        name: name.to_string(),
        span,
    }
}

#[cold]
pub fn literal_out_of_range(text: &str, span: Span) -> EvalError {
    EvalError::LiteralOutOfRange {
        text: text.to_string(),
        span,
    }
}

#[cold]
pub fn integer_overflow(left: i64, right: i64, span: Span) -> EvalError {
    EvalError::Overflow { left, right, span }
}
