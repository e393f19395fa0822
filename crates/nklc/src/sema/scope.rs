//! Lexical scope chain

use std::collections::HashSet;
use string_interner::DefaultSymbol;

/// A scope holding the names declared directly within it.
///
/// The value always represents the innermost scope; enclosing scopes hang
/// off `parent` and are restored by [`Scope::pop_to_parent`].
#[derive(Debug, Default)]
pub struct Scope {
    names: HashSet<DefaultSymbol>,
    parent: Option<Box<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` in this scope. Returns false if it was already declared here.
    pub fn declare(&mut self, name: DefaultSymbol) -> bool {
        self.names.insert(name)
    }

    pub fn is_declared_locally(&self, name: DefaultSymbol) -> bool {
        self.names.contains(&name)
    }

    /// Number of scope boundaries between this scope and the one declaring `name`
    pub fn distance_to(&self, name: DefaultSymbol) -> Option<usize> {
        let mut scope = self;
        let mut distance = 0;
        loop {
            if scope.is_declared_locally(name) {
                return Some(distance);
            }
            scope = scope.parent.as_deref()?;
            distance += 1;
        }
    }

    /// Number of enclosing scopes (0 for the global scope)
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut parent = self.parent.as_deref();
        while let Some(scope) = parent {
            depth += 1;
            parent = scope.parent.as_deref();
        }
        depth
    }

    /// Push a new child scope
    pub fn push_child(&mut self) {
        let old_scope = std::mem::take(self);
        self.parent = Some(Box::new(old_scope));
    }

    /// Discard this scope, replacing self with the parent
    pub fn pop_to_parent(&mut self) -> bool {
        if let Some(parent) = self.parent.take() {
            *self = *parent;
            true
        } else {
            false
        }
    }
}
