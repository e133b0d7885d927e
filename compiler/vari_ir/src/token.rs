//! Token types produced by the lexer.

use std::fmt;

use crate::Span;

/// Classification of a lexeme.
///
/// `Identifier` and `Number` keep their source text verbatim; numeric
/// conversion happens at evaluation time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// The `variable` keyword.
    Variable,
    Identifier(String),
    /// `=`
    Assign,
    Number(String),
    /// The `print` keyword.
    Print,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Terminal token. Nothing follows it.
    EndOfInput,
}

impl TokenKind {
    /// Short human-readable name used in diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Variable => "`variable`",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Assign => "`=`",
            TokenKind::Number(_) => "number",
            TokenKind::Print => "`print`",
            TokenKind::Plus => "`+`",
            TokenKind::Semicolon => "`;`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::EndOfInput => "end of input",
        }
    }

    /// Check if this is the terminal token.
    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self, TokenKind::EndOfInput)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Variable => write!(f, "variable"),
            TokenKind::Identifier(name) => write!(f, "{name}"),
            TokenKind::Assign => write!(f, "="),
            TokenKind::Number(text) => write!(f, "{text}"),
            TokenKind::Print => write!(f, "print"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::EndOfInput => write!(f, "<eof>"),
        }
    }
}

/// A classified lexeme with its location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

#[cfg(test)]
mod tests;
