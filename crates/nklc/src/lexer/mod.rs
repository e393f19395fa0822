//! Lexer module for tokenizing nkl source code

mod token;
mod scanner;

pub use token::{Token, TokenKind};
pub use scanner::Tokenizer;
