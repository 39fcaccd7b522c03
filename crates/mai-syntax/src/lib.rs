// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # mai-syntax
//!
//! The front end of the Mai scripting language.
//!
//! ## Overview
//!
//! This crate provides the two pieces every later stage builds on:
//! - A scanner that turns source text into tokens, reporting lexical
//!   errors without stopping
//! - The syntax tree (expressions and statements) and the visitor traits
//!   used to traverse it
//!
//! ## Quick Start
//!
//! ```rust
//! use mai_syntax::lexer::{tokenize, TokenKind};
//!
//! let scanned = tokenize("print 1 + 2");
//! let kinds: Vec<_> = scanned.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Print,
//!         TokenKind::Number,
//!         TokenKind::Plus,
//!         TokenKind::Number,
//!         TokenKind::Newline,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod lexer;

// Re-exports for convenience
pub use ast::{Expr, ExprVisitor, LiteralValue, Stmt, StmtVisitor};
pub use lexer::{scan, tokenize, LexError, Literal, Reporter, Scanned, Token, TokenKind};
