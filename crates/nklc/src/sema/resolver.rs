//! Scope resolution - declare-before-use checks and scope distances

use super::scope::Scope;
use crate::ast::*;
use crate::common::{CompileError, CompileResult, Span};
use std::collections::HashMap;
use std::collections::hash_map;
use string_interner::DefaultStringInterner;

/// Scope distance of every lookup and assignment, keyed by node id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolutions {
    distances: HashMap<NodeId, usize>,
}

impl Resolutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope distance recorded for `id`: 0 means declared in the innermost scope
    pub fn get(&self, id: NodeId) -> Option<usize> {
        self.distances.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, NodeId, usize> {
        self.distances.iter()
    }

    fn record(&mut self, id: NodeId, distance: usize) {
        self.distances.insert(id, distance);
    }
}

/// Walks a program, tracking lexical scopes.
///
/// Node ids must be unique within the program; a reused id keeps the
/// distance of the last node resolved with it.
pub struct Resolver {
    names: DefaultStringInterner,
    scope: Scope,
    resolutions: Resolutions,
}

impl Resolver {
    pub fn new() -> Self {
        Self {
            names: DefaultStringInterner::default(),
            scope: Scope::new(),
            resolutions: Resolutions::new(),
        }
    }

    /// Resolve every variable reference in `program`, stopping at the first error
    pub fn resolve(&mut self, program: &Program) -> CompileResult<Resolutions> {
        self.names = DefaultStringInterner::default();
        self.scope = Scope::new();
        self.resolutions = Resolutions::new();

        for stmt in &program.statements {
            self.resolve_stmt(stmt)?;
        }
        Ok(std::mem::take(&mut self.resolutions))
    }

    /// Run `f` inside a fresh child scope, discarding it afterwards
    fn in_child_scope(
        &mut self,
        f: impl FnOnce(&mut Self) -> CompileResult<()>,
    ) -> CompileResult<()> {
        self.scope.push_child();
        let result = f(self);
        self.scope.pop_to_parent();
        result
    }

    fn resolve_block(&mut self, body: &[Stmt]) -> CompileResult<()> {
        for stmt in body {
            self.resolve_stmt(stmt)?;
        }
        Ok(())
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) -> CompileResult<()> {
        match &stmt.kind {
            StmtKind::If { condition, body, else_branch } => {
                if let Some(condition) = condition {
                    self.resolve_expr(condition)?;
                }
                self.in_child_scope(|this| this.resolve_block(body))?;
                // The else branch belongs to the enclosing scope, not the then-block
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch)?;
                }
                Ok(())
            }

            StmtKind::While { condition, body } => {
                self.resolve_expr(condition)?;
                self.in_child_scope(|this| this.resolve_block(body))
            }

            StmtKind::Declaration { name, value } => {
                // `x := x` must see an outer `x`, so the value goes first
                self.resolve_expr(value)?;
                self.declare(name, stmt.span)
            }

            StmtKind::Assignment { id, name, value } => {
                self.resolve_expr(value)?;
                let distance = self
                    .distance_to(name)
                    .ok_or_else(|| CompileError::undeclared_assignment(name.as_str(), stmt.span))?;
                self.resolutions.record(*id, distance);
                Ok(())
            }

            StmtKind::Return(value) => match value {
                Some(value) => self.resolve_expr(value),
                None => Ok(()),
            },

            StmtKind::Expression(expr) => self.resolve_expr(expr),
        }
    }

    fn resolve_expr(&mut self, expr: &Expr) -> CompileResult<()> {
        match &expr.kind {
            ExprKind::If { condition, value, else_branch } => {
                if let Some(condition) = condition {
                    self.resolve_expr(condition)?;
                }
                self.resolve_expr(value)?;
                if let Some(else_branch) = else_branch {
                    self.resolve_expr(else_branch)?;
                }
                Ok(())
            }

            ExprKind::Binary { left, right, .. } => {
                self.resolve_expr(left)?;
                self.resolve_expr(right)
            }

            ExprKind::Lookup { id, name } => {
                let distance = self
                    .distance_to(name)
                    .ok_or_else(|| CompileError::undeclared_lookup(name.as_str(), expr.span))?;
                self.resolutions.record(*id, distance);
                Ok(())
            }

            ExprKind::Call { callee, arguments } => {
                self.resolve_expr(callee)?;
                for argument in arguments {
                    self.resolve_expr(argument)?;
                }
                Ok(())
            }

            ExprKind::Function { parameters, body } => self.in_child_scope(|this| {
                // Repeated parameter names are accepted
                for parameter in parameters {
                    let symbol = this.names.get_or_intern(parameter);
                    this.scope.declare(symbol);
                }
                this.resolve_block(body)
            }),

            ExprKind::Literal(_) => Ok(()),
        }
    }

    fn declare(&mut self, name: &str, span: Span) -> CompileResult<()> {
        let symbol = self.names.get_or_intern(name);
        if self.scope.declare(symbol) {
            Ok(())
        } else {
            Err(CompileError::redeclaration(name, span))
        }
    }

    fn distance_to(&self, name: &str) -> Option<usize> {
        // A name that was never interned cannot have been declared
        let symbol = self.names.get(name)?;
        self.scope.distance_to(symbol)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
