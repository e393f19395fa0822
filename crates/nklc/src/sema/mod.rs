//! Semantic analysis module
//!
//! This module resolves every variable reference to the scope declaring it.

mod scope;
mod resolver;

pub use scope::Scope;
pub use resolver::{Resolutions, Resolver};

use crate::ast::Program;
use crate::common::CompileResult;

/// Resolve `program` with a fresh resolver
pub fn resolve(program: &Program) -> CompileResult<Resolutions> {
    Resolver::new().resolve(program)
}
