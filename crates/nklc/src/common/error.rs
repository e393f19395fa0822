//! Error types and diagnostic reporting

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, NoColor, StandardStream, WriteColor};
use thiserror::Error;
use super::Span;

/// Front-end error with source location
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Lexer error at {span:?}: {message}")]
    Lexer { message: String, span: Span },

    #[error("Unexpected end of input at {span:?}: {message}")]
    UnexpectedEof { message: String, span: Span },

    #[error("Redeclaration of '{name}' in the same scope at {span:?}")]
    Redeclaration { name: String, span: Span },

    #[error("'{name}' must be declared before usage at {span:?}")]
    UndeclaredLookup { name: String, span: Span },

    #[error("'{name}' must be declared before assignment at {span:?}")]
    UndeclaredAssignment { name: String, span: Span },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompileError {
    pub fn lexer(message: impl Into<String>, span: Span) -> Self {
        Self::Lexer {
            message: message.into(),
            span,
        }
    }

    pub fn unexpected_eof(message: impl Into<String>, span: Span) -> Self {
        Self::UnexpectedEof {
            message: message.into(),
            span,
        }
    }

    pub fn redeclaration(name: impl Into<String>, span: Span) -> Self {
        Self::Redeclaration {
            name: name.into(),
            span,
        }
    }

    pub fn undeclared_lookup(name: impl Into<String>, span: Span) -> Self {
        Self::UndeclaredLookup {
            name: name.into(),
            span,
        }
    }

    pub fn undeclared_assignment(name: impl Into<String>, span: Span) -> Self {
        Self::UndeclaredAssignment {
            name: name.into(),
            span,
        }
    }

    /// Source location of the error, if it has one
    pub fn span(&self) -> Option<Span> {
        match self {
            CompileError::Lexer { span, .. }
            | CompileError::UnexpectedEof { span, .. }
            | CompileError::Redeclaration { span, .. }
            | CompileError::UndeclaredLookup { span, .. }
            | CompileError::UndeclaredAssignment { span, .. } => Some(*span),
            CompileError::Io(_) => None,
        }
    }

    fn to_diagnostic(&self, file_id: usize) -> Diagnostic<usize> {
        match self {
            CompileError::Lexer { message, span } => Diagnostic::error()
                .with_message("Lexer error")
                .with_labels(vec![
                    Label::primary(file_id, span.range()).with_message(message)
                ]),

            CompileError::UnexpectedEof { message, span } => Diagnostic::error()
                .with_message("Unexpected end of input")
                .with_labels(vec![
                    Label::primary(file_id, span.range()).with_message(message)
                ]),

            CompileError::Redeclaration { name, span } => Diagnostic::error()
                .with_message(format!("Redeclaration of '{}'", name))
                .with_labels(vec![
                    Label::primary(file_id, span.range())
                        .with_message("already declared in this scope")
                ]),

            CompileError::UndeclaredLookup { name, span } => Diagnostic::error()
                .with_message(format!("Use of undeclared '{}'", name))
                .with_labels(vec![
                    Label::primary(file_id, span.range())
                        .with_message("must be declared before usage")
                ]),

            CompileError::UndeclaredAssignment { name, span } => Diagnostic::error()
                .with_message(format!("Assignment to undeclared '{}'", name))
                .with_labels(vec![
                    Label::primary(file_id, span.range())
                        .with_message("must be declared before assignment")
                ]),

            CompileError::Io(err) => {
                Diagnostic::error().with_message(format!("IO error: {}", err))
            }
        }
    }
}

pub type CompileResult<T> = Result<T, CompileError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    pub fn report_error(&self, file_id: usize, error: &CompileError) {
        let _ = self.emit(&mut self.writer.lock(), file_id, error);
    }

    /// Render a diagnostic without colors, as it would appear on stderr
    pub fn render(&self, file_id: usize, error: &CompileError) -> String {
        let mut buffer = NoColor::new(Vec::new());
        if self.emit(&mut buffer, file_id, error).is_err() {
            return error.to_string();
        }
        String::from_utf8_lossy(&buffer.into_inner()).into_owned()
    }

    fn emit(
        &self,
        writer: &mut dyn WriteColor,
        file_id: usize,
        error: &CompileError,
    ) -> Result<(), codespan_reporting::files::Error> {
        let diagnostic = error.to_diagnostic(file_id);
        term::emit(writer, &self.config, &self.files, &diagnostic)
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}
