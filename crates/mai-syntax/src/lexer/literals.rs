//! Literal scanning documentation.
//!
//! This module documents the literal scanning logic in `scanner.rs`.
//! The lexer handles numeric, string, and identifier literals.
//!
//! ## Numeric Literals
//!
//! Method: `scan_number`
//!
//! ```text
//! 42        -> Number(42.0)
//! 3.25      -> Number(3.25)
//! 12.       -> Number(12.0), Dot
//! 7.abs     -> Number(7.0), Dot, Identifier
//! ```
//!
//! The fraction is only taken when a digit follows the dot, so member
//! access on an integer still scans as a separate `Dot`. There are no
//! exponents, separators or alternate bases. Every number literal is an
//! `f64`.
//!
//! ## String Literals
//!
//! Method: `scan_string`
//!
//! ```text
//! "double"  -> String("double")
//! 'single"  -> String("single")
//! ```
//!
//! A string opens on either quote and closes on the next `"`, so a `'` is
//! ordinary content once a string is open. The contents are taken
//! verbatim: there are no escape sequences, and newlines are allowed (they
//! advance the line counter). Running out of input before the closing quote
//! reports `LexError::UnterminatedString` and produces no token.
//!
//! ## Identifiers and Keywords
//!
//! Method: `scan_identifier`
//!
//! ### Identifier Rules
//!
//! - Start: `A-Z`, `a-z`, `_`
//! - Continue: Start chars + `0-9`
//!
//! ### Keyword Detection
//!
//! The scanner checks the whole identifier against the reserved words with
//! `TokenKind::keyword`:
//!
//! ```text
//! "while"  -> TokenKind::While
//! "while1" -> TokenKind::Identifier
//! "While"  -> TokenKind::Identifier
//! ```

// This module serves as documentation. The actual implementation is in scanner.rs.
