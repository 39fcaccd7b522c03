//! The scanner that produces tokens from source text.

use std::iter::Peekable;
use std::str::CharIndices;

use tracing::{debug, trace};

use super::{LexError, Literal, Reporter, Span, Token, TokenKind};

/// A scanner that tokenizes Mai source code.
///
/// Scanning is eager: [`Scanner::scan_tokens`] walks the whole source once
/// and returns every token, ending with `Newline` and `Eof`.
pub struct Scanner<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    /// Byte offset of the first character of the current lexeme
    start: usize,
    /// Byte offset of the next unread character
    current: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Scans the whole source, reporting lexical errors as they are found.
    pub fn scan_tokens<R: Reporter + ?Sized>(mut self, reporter: &mut R) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token(reporter);
        }

        // Close the trailing logical line even without a final newline.
        self.start = self.current;
        self.add_token(TokenKind::Newline);
        self.tokens.push(Token::new(
            TokenKind::Eof,
            "",
            Literal::None,
            self.line,
            Span::new(self.current, self.current),
        ));

        trace!(tokens = self.tokens.len(), lines = self.line, "scan complete");
        self.tokens
    }

    fn scan_token<R: Reporter + ?Sized>(&mut self, reporter: &mut R) {
        let Some(ch) = self.advance() else {
            return;
        };

        match ch {
            // Single-character tokens
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            // One or two character tokens
            '=' => self.scan_with_equal(TokenKind::Equal, TokenKind::EqualEqual),
            '!' => self.scan_with_equal(TokenKind::Bang, TokenKind::BangEqual),
            '<' => self.scan_with_equal(TokenKind::Less, TokenKind::LessEqual),
            '>' => self.scan_with_equal(TokenKind::Greater, TokenKind::GreaterEqual),

            // Division or comment
            '/' => self.scan_slash(),

            ' ' | '\r' | '\t' => {}
            '\n' => {
                self.add_token(TokenKind::Newline);
                self.line += 1;
            }

            // Either quote opens a string, only `"` closes it.
            '"' | '\'' => self.scan_string(reporter),

            '0'..='9' => self.scan_number(),

            _ if is_alpha(ch) => self.scan_identifier(),

            _ => self.error(
                reporter,
                LexError::UnexpectedCharacter {
                    ch,
                    line: self.line,
                },
            ),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, ch) = self.chars.next()?;
        self.current = pos + ch.len_utf8();
        Some(ch)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().map(|(_, ch)| ch)
    }

    /// Consumes the next character only if it is `expected`.
    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn scan_with_equal(&mut self, single: TokenKind, with_equal: TokenKind) {
        let kind = if self.matches('=') { with_equal } else { single };
        self.add_token(kind);
    }

    fn scan_slash(&mut self) {
        if self.matches('/') {
            // The newline is left for scan_token so it still ends the line.
            while let Some(ch) = self.peek() {
                if ch == '\n' {
                    break;
                }
                self.advance();
            }
        } else if self.matches('*') {
            self.skip_block_comment();
        } else {
            self.add_token(TokenKind::Slash);
        }
    }

    fn skip_block_comment(&mut self) {
        while let Some(ch) = self.advance() {
            match ch {
                '*' if self.peek() == Some('/') => {
                    self.advance();
                    return;
                }
                '\n' => self.line += 1,
                _ => {}
            }
        }
        trace!(line = self.line, "block comment closed by end of input");
    }

    fn scan_string<R: Reporter + ?Sized>(&mut self, reporter: &mut R) {
        loop {
            match self.peek() {
                None => {
                    self.error(reporter, LexError::UnterminatedString { line: self.line });
                    return;
                }
                Some('"') => break,
                Some(ch) => {
                    if ch == '\n' {
                        self.line += 1;
                    }
                    self.advance();
                }
            }
        }

        // The closing quote
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        self.add_literal_token(TokenKind::String, Literal::String(value.to_string()));
    }

    fn scan_number(&mut self) {
        self.skip_digits();

        // A dot is only part of the number when a digit follows it.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
            self.skip_digits();
        }

        // Digits with an optional fraction always parse.
        let value = self.source[self.start..self.current]
            .parse::<f64>()
            .unwrap_or_default();
        self.add_literal_token(TokenKind::Number, Literal::Number(value));
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
        }
    }

    fn scan_identifier(&mut self) {
        while self.peek().is_some_and(is_alphanumeric) {
            self.advance();
        }

        let text = &self.source[self.start..self.current];
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, Literal::None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        let lexeme = &self.source[self.start..self.current];
        self.tokens.push(Token::new(
            kind,
            lexeme,
            literal,
            self.line,
            Span::new(self.start, self.current),
        ));
    }

    fn error<R: Reporter + ?Sized>(&self, reporter: &mut R, error: LexError) {
        debug!(line = error.line(), offset = self.start, "{}", error);
        reporter.report(&error);
    }
}

/// Checks if a character can start an identifier.
fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Checks if a character can continue an identifier.
fn is_alphanumeric(ch: char) -> bool {
    is_alpha(ch) || ch.is_ascii_digit()
}
