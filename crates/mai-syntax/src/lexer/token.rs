//! Token definitions for the Mai lexer.

use std::fmt;

/// A span in the source code, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The value carried by a literal token.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Literal {
    /// No literal value (operators, keywords, identifiers)
    #[default]
    None,
    /// Numeric literal
    Number(f64),
    /// String literal contents, without the quotes
    String(String),
}

impl Literal {
    /// Returns true if the token carries no literal value.
    pub fn is_none(&self) -> bool {
        matches!(self, Literal::None)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => write!(f, "null"),
            Literal::Number(n) => write!(f, "{:?}", n),
            Literal::String(s) => write!(f, "{}", s),
        }
    }
}

/// A token produced by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The exact source text of the token
    pub lexeme: String,
    /// Literal value for strings and numbers
    pub literal: Literal,
    /// 1-based source line
    pub line: usize,
    /// Byte range in the source code
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Literal,
        line: usize,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {}", self.kind, self.lexeme, self.literal)
    }
}

/// The different kinds of tokens in Mai.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    /// (
    LeftParen,
    /// )
    RightParen,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// ,
    Comma,
    /// .
    Dot,
    /// -
    Minus,
    /// +
    Plus,
    /// ;
    Semicolon,
    /// *
    Star,
    /// /
    Slash,

    // Relational and assignment
    /// =
    Equal,
    /// ==
    EqualEqual,
    /// !
    Bang,
    /// !=
    BangEqual,
    /// <
    Less,
    /// <=
    LessEqual,
    /// >
    Greater,
    /// >=
    GreaterEqual,

    // Literals
    /// String literal
    String,
    /// Numeric literal
    Number,
    /// Identifier
    Identifier,

    // Keywords
    And,
    Or,
    Class,
    Else,
    False,
    For,
    Func,
    If,
    Nil,
    Print,
    Return,
    Super,
    This,
    True,
    While,
    Do,
    Break,
    Pass,

    // Special
    /// Line terminator, separates statements
    Newline,
    /// End of file
    Eof,
}

impl TokenKind {
    /// Looks up a reserved word.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "class" => TokenKind::Class,
            "else" => TokenKind::Else,
            "false" => TokenKind::False,
            "for" => TokenKind::For,
            "func" => TokenKind::Func,
            "if" => TokenKind::If,
            "nil" => TokenKind::Nil,
            "print" => TokenKind::Print,
            "return" => TokenKind::Return,
            "super" => TokenKind::Super,
            "this" => TokenKind::This,
            "true" => TokenKind::True,
            "while" => TokenKind::While,
            "do" => TokenKind::Do,
            "break" => TokenKind::Break,
            "pass" => TokenKind::Pass,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Or
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Func
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::Break
                | TokenKind::Pass
        )
    }

    /// Returns true if this token carries a literal value.
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number)
    }

    /// The grammar name of this kind, e.g. `LEFT_PAREN`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::For => "FOR",
            TokenKind::Func => "FUNC",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::Break => "BREAK",
            TokenKind::Pass => "PASS",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(5, 15);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn test_token_new() {
        let token = Token::new(
            TokenKind::Number,
            "42",
            Literal::Number(42.0),
            1,
            Span::new(0, 2),
        );
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.lexeme, "42");
        assert_eq!(token.literal, Literal::Number(42.0));
        assert_eq!(token.line, 1);
        assert_eq!(token.span, Span::new(0, 2));
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
        assert_eq!(TokenKind::keyword("func"), Some(TokenKind::Func));
        assert_eq!(TokenKind::keyword("pass"), Some(TokenKind::Pass));
        assert_eq!(TokenKind::keyword("While"), None);
        assert_eq!(TokenKind::keyword("function"), None);
    }

    #[test]
    fn test_every_keyword_is_keyword() {
        let words = [
            "and", "or", "class", "else", "false", "for", "func", "if", "nil", "print", "return",
            "super", "this", "true", "while", "do", "break", "pass",
        ];
        for word in words {
            let kind = TokenKind::keyword(word).unwrap();
            assert!(kind.is_keyword(), "{} should be a keyword", word);
            assert_eq!(kind.name(), word.to_uppercase());
        }
    }

    #[test]
    fn test_is_keyword_false() {
        assert!(!TokenKind::Plus.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Number.is_keyword());
        assert!(!TokenKind::Newline.is_keyword());
        assert!(!TokenKind::Eof.is_keyword());
    }

    #[test]
    fn test_is_literal() {
        assert!(TokenKind::String.is_literal());
        assert!(TokenKind::Number.is_literal());
        assert!(!TokenKind::Identifier.is_literal());
        assert!(!TokenKind::True.is_literal());
    }

    #[test]
    fn test_kind_display_uses_grammar_names() {
        assert_eq!(TokenKind::LeftParen.to_string(), "LEFT_PAREN");
        assert_eq!(TokenKind::GreaterEqual.to_string(), "GREATER_EQUAL");
        assert_eq!(TokenKind::Newline.to_string(), "NEWLINE");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(
            TokenKind::String,
            "\"hi\"",
            Literal::String("hi".to_string()),
            3,
            Span::new(0, 4),
        );
        assert_eq!(token.to_string(), r#"STRING "\"hi\"" hi"#);

        let plus = Token::new(TokenKind::Plus, "+", Literal::None, 1, Span::new(0, 1));
        assert_eq!(plus.to_string(), r#"PLUS "+" null"#);
    }

    #[test]
    fn test_literal_default_is_none() {
        assert!(Literal::default().is_none());
        assert!(!Literal::Number(1.0).is_none());
    }
}
