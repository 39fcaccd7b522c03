//! Lexical analysis (tokenization) for Mai source code.
//!
//! The lexer transforms Mai source text into a sequence of tokens that
//! can be consumed by the parser.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `token.rs` - `Token`, `TokenKind` and `Literal` definitions
//! - `error.rs` - `LexError` and the `Reporter` sinks
//!
//! ## Documentation Submodules
//!
//! - `operators` - Operator and comment scanning
//! - `literals` - Number, string, and identifier literals
//!
//! ## Usage
//!
//! ```rust
//! use mai_syntax::lexer::{tokenize, TokenKind};
//!
//! let scanned = tokenize("x = 42");
//! assert!(!scanned.has_errors());
//!
//! for token in &scanned.tokens {
//!     println!("{} {:?}", token.kind, token.lexeme);
//! }
//! assert_eq!(scanned.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```

mod error;
mod scanner;
mod token;

// Documentation and test submodules
pub mod literals;
pub mod operators;

pub use error::{Diagnostics, LexError, Reporter, TracingReporter};
pub use scanner::Scanner;
pub use token::{Literal, Span, Token, TokenKind};

/// Scans `source` into tokens, handing every lexical error to `reporter`.
///
/// Always returns a sequence that ends with a `Newline` and an `Eof` token,
/// whatever was reported along the way.
pub fn scan<R: Reporter + ?Sized>(source: &str, reporter: &mut R) -> Vec<Token> {
    Scanner::new(source).scan_tokens(reporter)
}

/// Tokens of one source together with the errors found while scanning it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned {
    /// The token sequence, terminated by `Newline` and `Eof`
    pub tokens: Vec<Token>,
    /// Lexical errors in source order
    pub errors: Vec<LexError>,
}

impl Scanned {
    /// Returns true if any lexical error was reported.
    ///
    /// When this is true the tokens may not represent the whole program.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scans `source` and collects the diagnostics instead of reporting them.
pub fn tokenize(source: &str) -> Scanned {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    Scanned {
        tokens,
        errors: diagnostics.into_errors(),
    }
}

/// Scans independent sources on the rayon thread pool.
///
/// Results are returned in the order of `sources`.
#[cfg(feature = "parallel")]
pub fn scan_parallel(sources: &[&str]) -> Vec<Scanned> {
    use rayon::prelude::*;

    sources.par_iter().map(|source| tokenize(source)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_collects_errors() {
        let scanned = tokenize("a # b\n\"open");
        assert!(scanned.has_errors());
        assert_eq!(
            scanned.errors,
            vec![
                LexError::UnexpectedCharacter { ch: '#', line: 1 },
                LexError::UnterminatedString { line: 2 },
            ]
        );
        assert_eq!(scanned.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn test_scan_with_closure_reporter() {
        let mut messages = Vec::new();
        let tokens = scan("1 ? 2", &mut |line: usize, message: &str| {
            messages.push(format!("[line {}] {}", line, message));
        });
        assert_eq!(tokens.len(), 4);
        assert_eq!(messages, vec!["[line 1] Unexpected character '?'"]);
    }

    #[test]
    fn test_scan_with_dyn_reporter() {
        let mut diagnostics = Diagnostics::new();
        let reporter: &mut dyn Reporter = &mut diagnostics;
        let tokens = scan("$", reporter);
        assert_eq!(tokens.len(), 2);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_tracing_reporter_does_not_collect() {
        let tokens = scan("print ~", &mut TracingReporter);
        assert_eq!(tokens[0].kind, TokenKind::Print);
        assert_eq!(tokens.len(), 3);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_scan_parallel_preserves_order() {
        let sources = ["1", "a b", "\"x", "while"];
        let results = scan_parallel(&sources);

        assert_eq!(results.len(), sources.len());
        for (source, scanned) in sources.iter().zip(&results) {
            assert_eq!(scanned, &tokenize(source));
        }
        assert!(results[2].has_errors());
        assert_eq!(results[3].tokens[0].kind, TokenKind::While);
    }
}
