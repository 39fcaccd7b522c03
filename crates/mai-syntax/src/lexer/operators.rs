//! Operator scanning documentation.
//!
//! This module documents the operator and comment scanning logic in
//! `scanner.rs`.
//!
//! ## Single-Character Tokens
//!
//! `(` `)` `{` `}` `,` `.` `-` `+` `;` `*` map straight to a token kind.
//!
//! ## One or Two Characters
//!
//! | Token | Variants |
//! |-------|----------|
//! | `=` | `=`, `==` |
//! | `!` | `!`, `!=` |
//! | `<` | `<`, `<=` |
//! | `>` | `>`, `>=` |
//!
//! Method: `scan_with_equal`. One character of lookahead decides whether
//! the following `=` belongs to the operator.
//!
//! ## Slash and Comments
//!
//! Method: `scan_slash`
//!
//! The `/` character can start:
//! - Division: `a / b`
//! - Line comment: `// comment`, up to but not including the newline
//! - Block comment: `/* comment */`, possibly spanning lines
//!
//! Comments never produce tokens. Newlines inside a block comment advance
//! the line counter without producing `Newline` tokens. A block comment that
//! is still open at end of input simply ends there.
//!
//! ## Whitespace and Newlines
//!
//! Spaces, tabs and carriage returns are skipped. A newline produces a
//! `Newline` token, which the grammar uses to separate statements.

// This module serves as documentation. The actual implementation is in scanner.rs.
