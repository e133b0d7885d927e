//! Diagnostic system for error reporting.
//!
//! Each diagnostic carries:
//! - An error code for searchability
//! - A message (what went wrong)
//! - A primary span (where it went wrong)
//! - Notes and help lines (how to fix it)

pub mod emitter;
pub mod span_utils;

use std::fmt;

use vari_ir::Span;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer
/// - E1xxx: Parser
/// - E6xxx: Runtime
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // ===== Lexer (E0xxx) =====
    /// Unknown character in source
    E0002,

    // ===== Parser (E1xxx) =====
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Expected identifier
    E1004,
    /// Expected statement
    E1005,

    // ===== Runtime (E6xxx) =====
    /// Undefined variable
    E6001,
    /// Integer literal out of range
    E6002,
    /// Integer overflow
    E6003,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// Stops the run.
    Error,
    /// Reported, then the run continues.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A labeled span with a message. An empty message renders as the bare
/// position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

/// A diagnostic with everything needed to render it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Severity level.
    pub severity: Severity,
    /// Main message.
    pub message: String,
    /// Labeled spans showing where the problem is.
    pub labels: Vec<Label>,
    /// Additional context.
    pub notes: Vec<String>,
    /// Human-readable fix suggestions.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic::with_severity(code, Severity::Error)
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: ErrorCode) -> Self {
        Diagnostic::with_severity(code, Severity::Warning)
    }

    fn with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a label at a problem location. The first label is the primary one.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
        });
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a suggestion for fixing the problem.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Span of the first label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.first().map(|l| l.span)
    }

    /// Check if this is an error rather than a warning.
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}
