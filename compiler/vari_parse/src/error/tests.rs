use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages_name_the_expectation() {
    let err = ParseError::Expected {
        expected: Expectation::AssignAfterName,
        found: TokenKind::Number("1".into()),
        span: Span::new(11, 12),
    };
    assert_eq!(err.to_string(), "expected '=' after variable name, found number");

    let err = ParseError::Expected {
        expected: Expectation::PrintSemicolon,
        found: TokenKind::EndOfInput,
        span: Span::new(9, 9),
    };
    assert_eq!(
        err.to_string(),
        "expected ';' at the end of print statement, found end of input"
    );
}

#[test]
fn codes_per_variant() {
    let name = ParseError::Expected {
        expected: Expectation::VariableName,
        found: TokenKind::Assign,
        span: Span::DUMMY,
    };
    let primary = ParseError::ExpectedPrimary {
        found: TokenKind::Semicolon,
        span: Span::DUMMY,
    };
    let stmt = ParseError::ExpectedStatement {
        found: TokenKind::Plus,
        span: Span::DUMMY,
    };
    assert_eq!(name.code(), ErrorCode::E1004);
    assert_eq!(primary.code(), ErrorCode::E1002);
    assert_eq!(stmt.code(), ErrorCode::E1005);
}

#[test]
fn diagnostic_carries_span_and_help() {
    let err = ParseError::Expected {
        expected: Expectation::DeclarationSemicolon,
        found: TokenKind::EndOfInput,
        span: Span::new(15, 15),
    };
    let diag = err.to_diagnostic();
    assert!(diag.is_error());
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.primary_span(), Some(Span::new(15, 15)));
    assert_eq!(diag.suggestions, vec!["every statement ends with `;`"]);
}

#[test]
fn expectation_matching() {
    assert!(Expectation::VariableName.matches(&TokenKind::Identifier("x".into())));
    assert!(!Expectation::VariableName.matches(&TokenKind::Variable));
    assert!(Expectation::PrintSemicolon.matches(&TokenKind::Semicolon));
    assert!(!Expectation::RParenInPrint.matches(&TokenKind::LParen));
}
