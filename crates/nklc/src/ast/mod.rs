//! Abstract Syntax Tree definitions
//!
//! The parser producing these trees lives outside this crate. Every lookup
//! and assignment node carries a [`NodeId`] so that the resolver can record
//! scope distances in a side table instead of mutating the tree.

mod expr;
mod stmt;

pub use expr::*;
pub use stmt::*;

/// Stable identity of a variable-reference node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Hands out fresh node ids while a tree is being built
#[derive(Debug, Default)]
pub struct NodeIdGen {
    next: u32,
}

impl NodeIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

/// A complete program: the ordered top-level statements
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }
}
