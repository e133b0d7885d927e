//! Vari IR - shared data types for the vari interpreter.
//!
//! This crate contains the data structures every phase agrees on:
//! - `Span` for source locations
//! - `Token` and `TokenKind` for lexer output
//! - AST nodes (`Expr`, `Stmt`) for parser output
//!
//! # Design
//!
//! - **Owned trees**: every non-leaf node owns its children through `Box`,
//!   no sharing and no cycles. A statement's tree is dropped once it has run,
//!   iteratively, however deep it is.
//! - **Owned text**: identifier and number text is a growable `String`,
//!   there is no fixed capacity anywhere.

mod ast;
mod span;
mod token;

pub use ast::{Expr, ExprKind, Stmt, StmtKind};
pub use span::Span;
pub use token::{Token, TokenKind};
