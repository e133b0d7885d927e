//! Tree-walking evaluator.
//!
//! Statements run one at a time as the driver hands them over; trees are
//! not kept after they have run. Operands evaluate left before right.

use tracing::debug;
use vari_ir::{Expr, ExprKind, Stmt, StmtKind};
use vari_stack::ensure_sufficient_stack;

use crate::errors::{integer_overflow, literal_out_of_range, EvalResult};
use crate::{Environment, SharedPrintHandler};

/// Evaluator state: the variable store and the output sink.
pub struct Evaluator {
    env: Environment,
    print: SharedPrintHandler,
}

impl Evaluator {
    /// Create an evaluator with an empty environment.
    pub fn new(print: SharedPrintHandler) -> Self {
        Evaluator {
            env: Environment::new(),
            print,
        }
    }

    /// The variable store.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// The output sink.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    /// Evaluate an expression to an integer.
    pub fn eval_expr(&self, expr: &Expr) -> EvalResult<i64> {
        match &expr.kind {
            ExprKind::Number(text) => text
                .parse::<i64>()
                .map_err(|_| literal_out_of_range(text, expr.span)),
            ExprKind::Variable(name) => self.env.get(name, expr.span),
            ExprKind::Add(left, right) => {
                let left = ensure_sufficient_stack(|| self.eval_expr(left))?;
                let right = ensure_sufficient_stack(|| self.eval_expr(right))?;
                left.checked_add(right)
                    .ok_or_else(|| integer_overflow(left, right, expr.span))
            }
        }
    }

    /// Execute one statement.
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match &stmt.kind {
            StmtKind::VariableDeclaration { name, initializer } => {
                let value = self.eval_expr(initializer)?;
                let previous = self.env.set(name.as_str(), value);
                debug!(%name, value, ?previous, "bind");
            }
            StmtKind::Print(expr) => {
                let value = self.eval_expr(expr)?;
                debug!(value, "print");
                self.print.println(&value.to_string());
            }
        }
        Ok(())
    }
}
