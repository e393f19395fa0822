//! nkl token definitions using logos

use crate::common::Span;
use logos::Logos;
use std::fmt;

/// A token with its kind, lexeme and source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Lexeme; string literals hold their content without the quotes
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", Span::point(offset))
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// nkl token kinds
///
/// Integers share the identifier character class after the leading digit,
/// so `3x` is a single integer token. Validating the digits is up to
/// whoever converts the lexeme to a number.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    // Literals
    #[regex(r#""[^"]*""#)]
    String,
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Identifier,
    #[regex(r"\p{Nd}[\p{L}\p{Nd}_]*")]
    Integer,

    // Operators
    #[token(":=")]
    Declare,
    #[token("=")]
    Assign,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    // Delimiters
    #[token(";")]
    Semi,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // Special
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::String => write!(f, "string literal"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Integer => write!(f, "integer literal"),
            TokenKind::Declare => write!(f, ":="),
            TokenKind::Assign => write!(f, "="),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Semi => write!(f, ";"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "\"{}\"", self.text),
            TokenKind::Identifier | TokenKind::Integer => write!(f, "{}", self.text),
            kind => write!(f, "{}", kind),
        }
    }
}
