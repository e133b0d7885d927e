//! Parse error types.
//!
//! Every syntax error is fatal. Each variant names what the parser was
//! looking for and what it found instead.

use std::fmt;

use vari_diagnostic::{Diagnostic, ErrorCode};
use vari_ir::{Span, TokenKind};

/// A token the grammar required at a specific point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expectation {
    /// `variable` opening a declaration.
    VariableKeyword,
    /// Identifier after `variable`.
    VariableName,
    /// `=` after the declared name.
    AssignAfterName,
    /// `;` closing a declaration.
    DeclarationSemicolon,
    /// `(` after `print`.
    LParenAfterPrint,
    /// `)` closing the printed expression.
    RParenInPrint,
    /// `;` closing a print statement.
    PrintSemicolon,
}

impl Expectation {
    /// The token kind that satisfies this expectation.
    pub fn matches(self, kind: &TokenKind) -> bool {
        match self {
            Expectation::VariableKeyword => matches!(kind, TokenKind::Variable),
            Expectation::VariableName => matches!(kind, TokenKind::Identifier(_)),
            Expectation::AssignAfterName => matches!(kind, TokenKind::Assign),
            Expectation::DeclarationSemicolon | Expectation::PrintSemicolon => {
                matches!(kind, TokenKind::Semicolon)
            }
            Expectation::LParenAfterPrint => matches!(kind, TokenKind::LParen),
            Expectation::RParenInPrint => matches!(kind, TokenKind::RParen),
        }
    }

    fn code(self) -> ErrorCode {
        match self {
            Expectation::VariableName => ErrorCode::E1004,
            _ => ErrorCode::E1001,
        }
    }

    fn help(self) -> Option<&'static str> {
        match self {
            Expectation::DeclarationSemicolon | Expectation::PrintSemicolon => {
                Some("every statement ends with `;`")
            }
            Expectation::RParenInPrint => Some("close the argument of `print` with `)`"),
            Expectation::AssignAfterName => Some("declarations look like `variable name = 1;`"),
            _ => None,
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Expectation::VariableKeyword => "'variable'",
            Expectation::VariableName => "variable name",
            Expectation::AssignAfterName => "'=' after variable name",
            Expectation::DeclarationSemicolon => "';' at the end of statement",
            Expectation::LParenAfterPrint => "'(' after 'print'",
            Expectation::RParenInPrint => "')' in print statement",
            Expectation::PrintSemicolon => "';' at the end of print statement",
        };
        f.write_str(text)
    }
}

/// A fatal syntax error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected}, found {}", .found.display_name())]
    Expected {
        expected: Expectation,
        found: TokenKind,
        span: Span,
    },

    #[error("expected a number or identifier, found {}", .found.display_name())]
    ExpectedPrimary { found: TokenKind, span: Span },

    #[error(
        "expected 'print' or 'variable' at start of statement, found {}",
        .found.display_name()
    )]
    ExpectedStatement { found: TokenKind, span: Span },
}

/// Result type for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    /// Location of the offending token.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Expected { span, .. }
            | ParseError::ExpectedPrimary { span, .. }
            | ParseError::ExpectedStatement { span, .. } => *span,
        }
    }

    /// Error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Expected { expected, .. } => expected.code(),
            ParseError::ExpectedPrimary { .. } => ErrorCode::E1002,
            ParseError::ExpectedStatement { .. } => ErrorCode::E1005,
        }
    }

    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self {
            ParseError::Expected { expected, .. } => format!("expected {expected}"),
            ParseError::ExpectedPrimary { .. } => "expected a number or identifier".to_string(),
            ParseError::ExpectedStatement { .. } => "not a statement".to_string(),
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span(), label);
        match self {
            ParseError::Expected { expected, .. } => match expected.help() {
                Some(help) => diag.with_suggestion(help),
                None => diag,
            },
            _ => diag,
        }
    }
}

#[cfg(test)]
mod tests;
