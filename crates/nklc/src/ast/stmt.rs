//! Statement AST nodes

use super::{Expr, NodeId};
use crate::common::Span;

/// Statement node
#[derive(Debug, Clone)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Statement kinds
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// If statement: if (cond) { ... } [else stmt]
    ///
    /// A plain `else` block is an `If` without a condition, so `else if`
    /// chains nest through `else_branch`.
    If {
        condition: Option<Expr>,
        body: Vec<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    /// While loop: while (cond) { ... }
    While {
        condition: Expr,
        body: Vec<Stmt>,
    },

    /// Declaration: name := value
    Declaration {
        name: String,
        value: Expr,
    },

    /// Assignment to an existing binding: name = value
    Assignment {
        id: NodeId,
        name: String,
        value: Expr,
    },

    /// Return statement: return [expr]
    Return(Option<Expr>),

    /// Expression statement: expr;
    Expression(Expr),
}
