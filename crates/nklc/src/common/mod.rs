//! Common infrastructure shared by the tokenizer and the resolver

mod error;
mod span;

pub use error::{CompileError, CompileResult, DiagnosticReporter};
pub use span::Span;
