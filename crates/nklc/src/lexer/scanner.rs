//! Tokenizer implementation using logos

use super::token::{Token, TokenKind};
use crate::common::{CompileError, CompileResult, Span};
use logos::Logos;

/// Forward-only cursor producing one token per [`Tokenizer::advance`]
pub struct Tokenizer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    /// Most recently produced token
    token: Option<Token>,
    at_eof: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer for the given source code
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            token: None,
            at_eof: false,
        }
    }

    /// Consume input and produce the next token.
    ///
    /// Once the end of input is reached every further call yields `Eof` again.
    pub fn advance(&mut self) -> CompileResult<&Token> {
        let token = self.scan_token()?;
        Ok(&*self.token.insert(token))
    }

    /// The token produced by the last successful `advance`
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    fn scan_token(&mut self) -> CompileResult<Token> {
        if self.at_eof {
            return Ok(Token::eof(self.source().len()));
        }

        match self.inner.next() {
            Some(Ok(kind)) => {
                let span = self.inner.span();
                let slice = self.inner.slice();
                let text = match kind {
                    TokenKind::String => &slice[1..slice.len() - 1],
                    _ => slice,
                };
                Ok(Token::new(kind, text, Span::new(span.start, span.end)))
            }
            Some(Err(())) => Err(self.error_at(self.inner.span().start)),
            None => {
                self.at_eof = true;
                Ok(Token::eof(self.source().len()))
            }
        }
    }

    /// Classify a failed match starting at byte `start`
    fn error_at(&self, start: usize) -> CompileError {
        let source = self.source();
        let to_end = Span::new(start, source.len());
        let mut chars = source[start..].chars();

        match chars.next() {
            Some('"') => CompileError::unexpected_eof("unterminated string literal", to_end),
            Some(':') => match chars.next() {
                Some(c) => {
                    let at = start + 1;
                    CompileError::lexer(
                        format!("unexpected symbol '{}', expected '=' after ':'", c),
                        Span::new(at, at + c.len_utf8()),
                    )
                }
                None => CompileError::unexpected_eof("expected '=' after ':'", to_end),
            },
            Some(c) => CompileError::lexer(
                format!("unexpected symbol '{}'", c),
                Span::new(start, start + c.len_utf8()),
            ),
            None => CompileError::unexpected_eof("unexpected end of input", to_end),
        }
    }

    /// Tokenize the entire source, ending with the `Eof` token
    pub fn tokenize_all(mut self) -> CompileResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    /// Get the source being tokenized
    pub fn source(&self) -> &'a str {
        self.inner.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Tokenizer::new(source)
            .tokenize_all()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_whitespace_only_yields_single_eof() {
        for source in ["", " ", "\t\n  \r\n", "\u{a0}\u{2003}"] {
            let tokens = Tokenizer::new(source).tokenize_all().unwrap();
            assert_eq!(tokens.len(), 1, "source {:?}", source);
            assert!(tokens[0].is_eof());
        }
    }

    #[test]
    fn test_eof_is_fixed_point() {
        let mut tokenizer = Tokenizer::new("x");
        assert_eq!(tokenizer.advance().unwrap().kind, TokenKind::Identifier);
        for _ in 0..5 {
            assert_eq!(tokenizer.advance().unwrap().kind, TokenKind::Eof);
        }
        assert!(tokenizer.token().unwrap().is_eof());
    }

    #[test]
    fn test_no_token_before_first_advance() {
        let mut tokenizer = Tokenizer::new("a b");
        assert!(tokenizer.token().is_none());
        tokenizer.advance().unwrap();
        tokenizer.advance().unwrap();
        assert_eq!(tokenizer.token().unwrap().text, "b");
    }

    #[test]
    fn test_identifiers() {
        for ident in ["foo", "bar_baz", "_test", "test123", "_", "A_b_9", "CamelCase"] {
            let mut tokenizer = Tokenizer::new(ident);
            let token = tokenizer.advance().unwrap();
            assert_eq!(token.kind, TokenKind::Identifier);
            assert_eq!(token.text, ident);
        }
    }

    #[test]
    fn test_identifiers_are_case_sensitive_without_keywords() {
        let tokens = Tokenizer::new("if If fn while").tokenize_all().unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["if", "If", "fn", "while", ""]);
        assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Identifier));
    }

    #[test]
    fn test_unicode_letters_in_identifiers() {
        let mut tokenizer = Tokenizer::new("größe");
        let token = tokenizer.advance().unwrap();
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.text, "größe");
    }

    #[test]
    fn test_integer_literals() {
        let tokens = Tokenizer::new("42 0 007").tokenize_all().unwrap();
        assert!(matches!(&tokens[0], t if t.kind == TokenKind::Integer && t.text == "42"));
        assert!(matches!(&tokens[1], t if t.kind == TokenKind::Integer && t.text == "0"));
        assert!(matches!(&tokens[2], t if t.kind == TokenKind::Integer && t.text == "007"));
    }

    #[test]
    fn test_integer_uses_identifier_character_class() {
        let tokens = Tokenizer::new("3x 1_000 9abc_d").tokenize_all().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[0].text, "3x");
        assert_eq!(tokens[1].text, "1_000");
        assert_eq!(tokens[2].text, "9abc_d");
        assert!(tokens[3].is_eof());
    }

    #[test]
    fn test_run_stops_before_next_token() {
        let tokens = Tokenizer::new("abc;x:=42)").tokenize_all().unwrap();
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            [
                TokenKind::Identifier,
                TokenKind::Semi,
                TokenKind::Identifier,
                TokenKind::Declare,
                TokenKind::Integer,
                TokenKind::RParen,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[0].text, "abc");
        assert_eq!(tokens[4].text, "42");
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds(":= = ; ( ) * / + -"),
            [
                TokenKind::Declare,
                TokenKind::Assign,
                TokenKind::Semi,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_operator_text() {
        let tokens = Tokenizer::new(":==").tokenize_all().unwrap();
        assert_eq!(tokens[0].text, ":=");
        assert_eq!(tokens[1].text, "=");
    }

    #[test]
    fn test_string_literals_are_verbatim() {
        let tokens = Tokenizer::new(r#""hello world" "a\nb" """#).tokenize_all().unwrap();
        assert!(matches!(&tokens[0], t if t.kind == TokenKind::String && t.text == "hello world"));
        assert_eq!(tokens[1].text, "a\\nb");
        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[2].text, "");
    }

    #[test]
    fn test_string_spans_lines() {
        let mut tokenizer = Tokenizer::new("\"one\ntwo\"");
        assert_eq!(tokenizer.advance().unwrap().text, "one\ntwo");
    }

    #[test]
    fn test_spans() {
        let tokens = Tokenizer::new("  ab := \"s\"").tokenize_all().unwrap();
        assert_eq!(tokens[0].span, Span::new(2, 4));
        assert_eq!(tokens[1].span, Span::new(5, 7));
        assert_eq!(tokens[2].span, Span::new(8, 11));
        assert_eq!(tokens[3].span, Span::point(11));
    }

    #[test]
    fn test_unexpected_symbol() {
        let mut tokenizer = Tokenizer::new("x ? y");
        tokenizer.advance().unwrap();
        let err = tokenizer.advance().unwrap_err();
        assert!(matches!(
            err,
            CompileError::Lexer { ref message, span } if message.contains('?') && span == Span::new(2, 3)
        ));
    }

    #[test]
    fn test_colon_requires_equals() {
        let err = Tokenizer::new(":x").tokenize_all().unwrap_err();
        assert!(matches!(
            err,
            CompileError::Lexer { ref message, span } if message.contains("'x'") && span == Span::new(1, 2)
        ));

        let err = Tokenizer::new("a : = b").tokenize_all().unwrap_err();
        assert!(matches!(err, CompileError::Lexer { .. }));
    }

    #[test]
    fn test_colon_at_end_of_input() {
        let err = Tokenizer::new("x :").tokenize_all().unwrap_err();
        assert!(matches!(err, CompileError::UnexpectedEof { span, .. } if span == Span::new(2, 3)));
    }

    #[test]
    fn test_unterminated_string() {
        let err = Tokenizer::new("s := \"abc").tokenize_all().unwrap_err();
        assert!(matches!(
            err,
            CompileError::UnexpectedEof { ref message, span }
                if message.contains("unterminated") && span == Span::new(5, 9)
        ));
    }

    #[test]
    fn test_simple_program() {
        let source = "f := fn(a) ( a * 2 ); f(3);";
        let tokens = Tokenizer::new(source).tokenize_all().unwrap();

        assert!(matches!(&tokens[0], t if t.kind == TokenKind::Identifier && t.text == "f"));
        assert_eq!(tokens[1].kind, TokenKind::Declare);
        assert!(matches!(&tokens[2], t if t.kind == TokenKind::Identifier && t.text == "fn"));
        assert_eq!(tokens[3].kind, TokenKind::LParen);
        assert_eq!(tokens[5].kind, TokenKind::RParen);
        assert_eq!(tokens[8].kind, TokenKind::Star);
        assert_eq!(tokens[9].kind, TokenKind::Integer);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }
}
