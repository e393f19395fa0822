//! nkl front end - tokenizer and scope resolver for the nkl language
//!
//! ## Architecture
//!
//! - **Lexer** (`lexer/`): pulls one token at a time out of the source text
//! - **AST** (`ast/`): the tree shape produced by an external parser
//! - **Sema** (`sema/`): resolves every variable reference to a scope distance
//! - **Driver** (`driver/`): sessions tying sources to diagnostics
//! - **Common** (`common/`): shared infrastructure (errors, spans)

pub mod common;
pub mod lexer;
pub mod ast;
pub mod sema;
pub mod driver;

// Re-exports for convenience
pub use common::{CompileError, CompileResult, DiagnosticReporter, Span};
pub use lexer::{Token, TokenKind, Tokenizer};
pub use sema::{Resolutions, Resolver};
pub use driver::{FrontendConfig, Session};
