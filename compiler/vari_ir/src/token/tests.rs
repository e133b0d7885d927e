use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_reproduces_source_text() {
    let kinds = [
        TokenKind::Variable,
        TokenKind::Identifier("total".to_string()),
        TokenKind::Assign,
        TokenKind::Number("042".to_string()),
        TokenKind::Plus,
        TokenKind::Semicolon,
    ];
    let rendered: Vec<String> = kinds.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["variable", "total", "=", "042", "+", ";"]);
}

#[test]
fn display_name_ignores_payload() {
    assert_eq!(
        TokenKind::Identifier("a".into()).display_name(),
        TokenKind::Identifier("bbb".into()).display_name()
    );
    assert_eq!(TokenKind::EndOfInput.display_name(), "end of input");
}

#[test]
fn only_end_of_input_is_end() {
    assert!(TokenKind::EndOfInput.is_end());
    assert!(!TokenKind::Semicolon.is_end());
}
