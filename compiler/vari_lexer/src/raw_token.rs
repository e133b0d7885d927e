//! Raw token machine generated by logos.
//!
//! Keywords are literal tokens and identifiers a regex, so logos' longest
//! match keeps `variance` and `printer` as identifiers while `variable` and
//! `print` on their own win over the identifier rule by priority.
//!
//! Only ASCII whitespace separates tokens. Anything else outside the token
//! set, non-breaking spaces included, is an unknown character.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub(crate) enum RawToken {
    // === Keywords ===
    #[token("variable")]
    Variable,
    #[token("print")]
    Print,

    // === Symbols ===
    #[token("+")]
    Plus,
    #[token("=")]
    Assign,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // === Literals ===
    #[regex(r"[0-9]+")]
    Number,
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Ident,
}
