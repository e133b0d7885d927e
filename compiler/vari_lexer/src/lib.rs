//! Lexer for vari using logos.
//!
//! The lexer is pull-based: every call to [`Lexer::next_token`] scans exactly
//! one token from the current position. Nothing is buffered.
//!
//! Unknown characters are not fatal. Each one is skipped and recorded as a
//! [`LexWarning`]; callers drain them with [`Lexer::take_warnings`].

mod raw_token;

use logos::Logos;
use tracing::{trace, warn};
use vari_diagnostic::{Diagnostic, ErrorCode};
use vari_ir::{Span, Token, TokenKind};

use raw_token::RawToken;

/// Non-fatal lexical anomaly.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexWarning {
    #[error("unknown character `{ch}`")]
    UnknownCharacter { ch: char, span: Span },
}

impl LexWarning {
    /// Location of the anomaly.
    pub fn span(&self) -> Span {
        match self {
            LexWarning::UnknownCharacter { span, .. } => *span,
        }
    }

    /// Convert to a warning diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::warning(ErrorCode::E0002)
            .with_message(self.to_string())
            .with_label(self.span(), "skipped")
    }
}

/// Pull-based lexer over one source string.
pub struct Lexer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    finished: bool,
    warnings: Vec<LexWarning>,
}

impl<'src> Lexer<'src> {
    /// Create a lexer positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            raw: RawToken::lexer(source),
            finished: false,
            warnings: Vec::new(),
        }
    }

    /// Scan the next token.
    ///
    /// Once `EndOfInput` has been produced every further call produces it
    /// again at the end of the source; no real token ever follows it.
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return self.end_of_input();
        }

        loop {
            match self.raw.next() {
                Some(Ok(raw)) => {
                    let span = Span::from_range(self.raw.span());
                    let kind = convert(raw, self.raw.slice());
                    trace!(?kind, %span, "token");
                    return Token::new(kind, span);
                }
                Some(Err(())) => self.record_unknown(self.raw.span()),
                None => {
                    self.finished = true;
                    trace!("end of input");
                    return self.end_of_input();
                }
            }
        }
    }

    /// Take the warnings recorded since the last call.
    pub fn take_warnings(&mut self) -> Vec<LexWarning> {
        std::mem::take(&mut self.warnings)
    }

    fn end_of_input(&self) -> Token {
        Token::new(TokenKind::EndOfInput, Span::from_range(self.source.len()..self.source.len()))
    }

    /// Record one warning per skipped character.
    ///
    /// A multi-byte character may be rejected one byte at a time; only the
    /// byte that starts the character reports it.
    fn record_unknown(&mut self, range: std::ops::Range<usize>) {
        let start = range.start;
        if !self.source.is_char_boundary(start) {
            return;
        }
        let Some(ch) = self.source[start..].chars().next() else {
            return;
        };
        let span = Span::from_range(start..start + ch.len_utf8());
        warn!(%ch, %span, "skipping unknown character");
        self.warnings.push(LexWarning::UnknownCharacter { ch, span });
    }
}

fn convert(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Variable => TokenKind::Variable,
        RawToken::Print => TokenKind::Print,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Number => TokenKind::Number(slice.to_string()),
        RawToken::Ident => TokenKind::Identifier(slice.to_string()),
    }
}

/// Lex a whole source, including the trailing `EndOfInput`.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexWarning>) {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind.is_end();
        tokens.push(token);
        if done {
            break;
        }
    }
    (tokens, lexer.take_warnings())
}
