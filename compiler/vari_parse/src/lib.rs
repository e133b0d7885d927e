//! Recursive-descent parser for vari.
//!
//! Grammar (LL(1), every form is decided by its first token):
//!
//! ```text
//! program     = statement* EOF
//! statement   = declaration | print
//! declaration = "variable" IDENT "=" expression ";"
//! print       = "print" "(" expression ")" ";"
//! expression  = primary ( "+" primary )*
//! primary     = NUMBER | IDENT
//! ```
//!
//! The parser pulls tokens from the lexer on demand and holds exactly one
//! token of lookahead. The first syntax error aborts parsing.

mod error;

use tracing::{debug, trace};
use vari_ir::{Expr, Stmt, StmtKind, Token, TokenKind};
use vari_lexer::{LexWarning, Lexer};

pub use error::{Expectation, ParseError, ParseResult};

/// Parser state: the lexer and the current lookahead token.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token,
}

impl<'src> Parser<'src> {
    /// Create a parser and load the first lookahead token.
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Parser { lexer, current }
    }

    /// The current lookahead token.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Check if the lookahead is `EndOfInput`.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.kind.is_end()
    }

    /// Lexer warnings recorded since the last call.
    pub fn take_warnings(&mut self) -> Vec<LexWarning> {
        self.lexer.take_warnings()
    }

    /// Consume the current token and fetch the next one.
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Consume the current token if it satisfies `expected`.
    fn expect(&mut self, expected: Expectation) -> ParseResult<Token> {
        if expected.matches(&self.current.kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: Expectation) -> ParseError {
        ParseError::Expected {
            expected,
            found: self.current.kind.clone(),
            span: self.current.span,
        }
    }

    /// Consume an identifier, returning its text.
    fn expect_identifier(&mut self) -> ParseResult<String> {
        if let TokenKind::Identifier(name) = &mut self.current.kind {
            let name = std::mem::take(name);
            self.advance();
            return Ok(name);
        }
        Err(self.unexpected(Expectation::VariableName))
    }

    /// `primary = NUMBER | IDENT`
    pub fn parse_primary(&mut self) -> ParseResult<Expr> {
        let span = self.current.span;
        let expr = match &mut self.current.kind {
            TokenKind::Number(text) => Expr::number(std::mem::take(text), span),
            TokenKind::Identifier(name) => Expr::variable(std::mem::take(name), span),
            other => {
                return Err(ParseError::ExpectedPrimary {
                    found: other.clone(),
                    span,
                })
            }
        };
        trace!(%expr, "parse_primary");
        self.advance();
        Ok(expr)
    }

    /// `expression = primary ( "+" primary )*`, folded to the left.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_primary()?;
        while matches!(self.current.kind, TokenKind::Plus) {
            self.advance();
            let right = self.parse_primary()?;
            left = Expr::add(left, right);
        }
        Ok(left)
    }

    /// `declaration = "variable" IDENT "=" expression ";"`
    pub fn parse_variable_declaration(&mut self) -> ParseResult<Stmt> {
        let start = self.expect(Expectation::VariableKeyword)?.span;
        let name = self.expect_identifier()?;
        self.expect(Expectation::AssignAfterName)?;
        let initializer = self.parse_expression()?;
        let end = self.expect(Expectation::DeclarationSemicolon)?.span;
        Ok(Stmt::new(
            StmtKind::VariableDeclaration { name, initializer },
            start.merge(end),
        ))
    }

    /// `print = "print" "(" expression ")" ";"`
    ///
    /// Statements that start with neither keyword end up here and fail on
    /// the first token.
    pub fn parse_print_statement(&mut self) -> ParseResult<Stmt> {
        if !matches!(self.current.kind, TokenKind::Print) {
            return Err(ParseError::ExpectedStatement {
                found: self.current.kind.clone(),
                span: self.current.span,
            });
        }
        let start = self.advance().span;
        self.expect(Expectation::LParenAfterPrint)?;
        let expr = self.parse_expression()?;
        self.expect(Expectation::RParenInPrint)?;
        let end = self.expect(Expectation::PrintSemicolon)?.span;
        Ok(Stmt::new(StmtKind::Print(expr), start.merge(end)))
    }

    /// Parse the next statement, or `None` at end of input.
    pub fn parse_statement(&mut self) -> ParseResult<Option<Stmt>> {
        if self.is_at_end() {
            return Ok(None);
        }
        let stmt = if matches!(self.current.kind, TokenKind::Variable) {
            self.parse_variable_declaration()?
        } else {
            self.parse_print_statement()?
        };
        debug!(%stmt, span = %stmt.span, "parsed statement");
        Ok(Some(stmt))
    }

    /// Parse every remaining statement.
    pub fn parse_program(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut stmts = Vec::new();
        while let Some(stmt) = self.parse_statement()? {
            stmts.push(stmt);
        }
        Ok(stmts)
    }
}

/// Parse a whole source into statements.
pub fn parse(source: &str) -> ParseResult<Vec<Stmt>> {
    Parser::new(source).parse_program()
}
