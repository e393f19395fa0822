//! Expression AST nodes

use super::{NodeId, Stmt};
use crate::common::Span;

/// Expression node
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Expression kinds
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// Conditional expression: if (cond) value [else other]
    If {
        condition: Option<Box<Expr>>,
        value: Box<Expr>,
        else_branch: Option<Box<Expr>>,
    },

    /// Binary operation: a + b, x * y
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Variable read: foo
    Lookup {
        id: NodeId,
        name: String,
    },

    /// Function call: f(a, b)
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },

    /// Function literal: fn(a, b) { ... }
    Function {
        parameters: Vec<String>,
        body: Vec<Stmt>,
    },

    /// Constant value
    Literal(Literal),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Mul,
    Div,
    Add,
    Sub,
}

/// Literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    String(String),
    Boolean(bool),
    Nil,
}
