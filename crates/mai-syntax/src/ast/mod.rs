//! Abstract Syntax Tree (AST) definitions for Mai.
//!
//! The tree is plain data: [`Expr`] and [`Stmt`] are closed enums whose
//! nodes own their children. Nothing here evaluates or checks a program.
//! Traversals live outside the node types, either as an exhaustive `match`
//! or as an implementation of [`ExprVisitor`] / [`StmtVisitor`] driven by
//! `accept`.
//!
//! ## Usage
//!
//! ```rust
//! use mai_syntax::ast::{AstPrinter, Expr, Stmt};
//!
//! let stmt = Stmt::while_loop(Expr::literal(true), Stmt::block(vec![Stmt::pass()]));
//! assert_eq!(AstPrinter::new().print_stmt(&stmt), "(while true (block pass))");
//! ```

mod expr;
mod printer;
mod stmt;

pub use expr::{Expr, ExprVisitor, LiteralValue};
pub use printer::AstPrinter;
pub use stmt::{Stmt, StmtVisitor};
