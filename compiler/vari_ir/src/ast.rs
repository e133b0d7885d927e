//! AST nodes.
//!
//! Expressions and statements are separate types: a declaration binds a
//! name and produces no value, an expression always produces an integer.
//!
//! `Display` renders the S-expression form used by `vari parse`:
//! `(variable a (+ a 5))`, `(print (+ (+ 1 2) 3))`.
//!
//! A chain of `n` additions is `n` levels deep. Every recursive walk over
//! `ExprKind` goes through `ensure_sufficient_stack`, and dropping a tree
//! is iterative, so chain length is bounded by memory alone.

use std::fmt;
use std::mem;

use vari_stack::ensure_sufficient_stack;

use crate::Span;

/// Expression node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Expression variants.
#[derive(Eq)]
pub enum ExprKind {
    /// Integer literal, text kept verbatim until evaluation.
    Number(String),
    /// Reference to a previously declared variable.
    Variable(String),
    /// `left + right`. Chains fold to the left.
    Add(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    pub fn number(text: impl Into<String>, span: Span) -> Self {
        Expr::new(ExprKind::Number(text.into()), span)
    }

    pub fn variable(name: impl Into<String>, span: Span) -> Self {
        Expr::new(ExprKind::Variable(name.into()), span)
    }

    /// Build `left + right` with a span covering both operands.
    pub fn add(left: Expr, right: Expr) -> Self {
        let span = left.span.merge(right.span);
        Expr::new(ExprKind::Add(Box::new(left), Box::new(right)), span)
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        // Unlink children into a work list so no drop recurses past one level.
        let mut pending: Vec<Box<Expr>> = Vec::new();
        take_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            take_children(&mut expr, &mut pending);
        }
    }
}

fn take_children(expr: &mut Expr, pending: &mut Vec<Box<Expr>>) {
    if !matches!(expr.kind, ExprKind::Add(..)) {
        return;
    }
    if let ExprKind::Add(left, right) = mem::replace(&mut expr.kind, ExprKind::Number(String::new())) {
        pending.push(left);
        pending.push(right);
    }
}

impl Clone for ExprKind {
    fn clone(&self) -> Self {
        match self {
            ExprKind::Number(text) => ExprKind::Number(text.clone()),
            ExprKind::Variable(name) => ExprKind::Variable(name.clone()),
            ExprKind::Add(left, right) => {
                ensure_sufficient_stack(|| ExprKind::Add(left.clone(), right.clone()))
            }
        }
    }
}

impl PartialEq for ExprKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ExprKind::Number(a), ExprKind::Number(b))
            | (ExprKind::Variable(a), ExprKind::Variable(b)) => a == b,
            (ExprKind::Add(l1, r1), ExprKind::Add(l2, r2)) => {
                ensure_sufficient_stack(|| l1 == l2 && r1 == r2)
            }
            _ => false,
        }
    }
}

impl fmt::Debug for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Number(text) => f.debug_tuple("Number").field(text).finish(),
            ExprKind::Variable(name) => f.debug_tuple("Variable").field(name).finish(),
            ExprKind::Add(left, right) => ensure_sufficient_stack(|| {
                f.debug_tuple("Add").field(left).field(right).finish()
            }),
        }
    }
}

/// Statement node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

/// Statement variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StmtKind {
    /// `variable name = initializer;`
    VariableDeclaration { name: String, initializer: Expr },
    /// `print(expr);`
    Print(Expr),
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(text) => write!(f, "{text}"),
            ExprKind::Variable(name) => write!(f, "{name}"),
            ExprKind::Add(left, right) => {
                ensure_sufficient_stack(|| write!(f, "(+ {left} {right})"))
            }
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::VariableDeclaration { name, initializer } => {
                write!(f, "(variable {name} {initializer})")
            }
            StmtKind::Print(expr) => write!(f, "(print {expr})"),
        }
    }
}
