//! Front-end driver: wires sources to the tokenizer, resolver and diagnostics

use crate::ast::Program;
use crate::common::{CompileResult, DiagnosticReporter};
use crate::lexer::{Token, Tokenizer};
use crate::sema::{Resolutions, Resolver};
use std::io::Read;

/// Configuration options for a front-end session
#[derive(Debug, Clone, Default)]
pub struct FrontendConfig {
    pub dump_tokens: bool,
    pub verbose: bool,
}

/// Read a whole byte stream as UTF-8 source text
pub fn read_source(mut reader: impl Read) -> CompileResult<String> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(source)
}

/// One source file passing through the front end.
///
/// Errors are reported through the reporter before being returned.
pub struct Session<'a> {
    pub filename: String,
    pub file_id: usize,
    reporter: &'a DiagnosticReporter,
    config: FrontendConfig,
}

impl<'a> Session<'a> {
    pub fn new(
        filename: impl Into<String>,
        file_id: usize,
        reporter: &'a DiagnosticReporter,
        config: FrontendConfig,
    ) -> Self {
        Self {
            filename: filename.into(),
            file_id,
            reporter,
            config,
        }
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    /// Tokenize `source` up to and including the end-of-input token
    pub fn tokenize(&self, source: &str) -> CompileResult<Vec<Token>> {
        if self.config.verbose {
            eprintln!("Tokenizing {}...", self.filename);
        }

        let tokens = match Tokenizer::new(source).tokenize_all() {
            Ok(tokens) => tokens,
            Err(e) => {
                self.reporter.report_error(self.file_id, &e);
                return Err(e);
            }
        };

        if self.config.dump_tokens {
            eprintln!("=== Tokens ===");
            for token in &tokens {
                eprintln!("{} `{}` @ {}..{}", token.kind, token, token.span.start, token.span.end);
            }
            eprintln!("=== End Tokens ===\n");
        }

        Ok(tokens)
    }

    /// Resolve scope distances for a parsed program
    pub fn resolve(&self, program: &Program) -> CompileResult<Resolutions> {
        if self.config.verbose {
            eprintln!("Resolving scopes...");
        }

        match Resolver::new().resolve(program) {
            Ok(resolutions) => {
                if self.config.verbose {
                    eprintln!("Resolved {} references", resolutions.len());
                }
                Ok(resolutions)
            }
            Err(e) => {
                self.reporter.report_error(self.file_id, &e);
                Err(e)
            }
        }
    }
}
