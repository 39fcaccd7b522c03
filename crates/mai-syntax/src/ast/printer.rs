//! Parenthesized prefix rendering of syntax trees.
//!
//! ```text
//! -123 * (45.67)              -> (* (- 123) (group 45.67))
//! while (a) { print a }       -> (while a (block (print a)))
//! ```

use crate::lexer::Token;

use super::{Expr, ExprVisitor, LiteralValue, Stmt, StmtVisitor};

/// Renders expressions and statements as S-expressions.
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    /// Creates a printer.
    pub fn new() -> Self {
        Self
    }

    /// Renders one expression.
    pub fn print_expr(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    /// Renders one statement.
    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        stmt.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = format!("({}", name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&expr.accept(self));
        }
        out.push(')');
        out
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }

    fn visit_grouping(&mut self, expression: &Expr) -> String {
        self.parenthesize("group", &[expression])
    }

    fn visit_literal(&mut self, value: &LiteralValue) -> String {
        match value {
            LiteralValue::String(s) => format!("{:?}", s),
            other => other.to_string(),
        }
    }

    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[right])
    }

    fn visit_variable(&mut self, name: &Token) -> String {
        name.lexeme.clone()
    }

    fn visit_assign(&mut self, name: &Token, value: &Expr) -> String {
        format!("(= {} {})", name.lexeme, value.accept(self))
    }

    fn visit_empty(&mut self) -> String {
        "(empty)".to_string()
    }
}

impl StmtVisitor<String> for AstPrinter {
    fn visit_expression_stmt(&mut self, expression: &Expr) -> String {
        expression.accept(self)
    }

    fn visit_print_stmt(&mut self, expression: &Expr) -> String {
        self.parenthesize("print", &[expression])
    }

    fn visit_block_stmt(&mut self, statements: &[Stmt]) -> String {
        let mut out = String::from("(block");
        for stmt in statements {
            out.push(' ');
            out.push_str(&stmt.accept(self));
        }
        out.push(')');
        out
    }

    fn visit_while_stmt(&mut self, condition: &Expr, body: &Stmt) -> String {
        format!("(while {} {})", condition.accept(self), body.accept(self))
    }

    fn visit_do_stmt(&mut self, body: &Stmt, condition: &Expr) -> String {
        format!("(do {} {})", body.accept(self), condition.accept(self))
    }

    fn visit_if_stmt(
        &mut self,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) -> String {
        let condition = condition.accept(self);
        let then_branch = then_branch.accept(self);
        match else_branch {
            Some(stmt) => format!("(if {} {} {})", condition, then_branch, stmt.accept(self)),
            None => format!("(if {} {})", condition, then_branch),
        }
    }

    fn visit_break_stmt(&mut self) -> String {
        "break".to_string()
    }

    fn visit_pass_stmt(&mut self) -> String {
        "pass".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Literal, Span, TokenKind};

    fn token(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, Literal::None, 1, Span::new(0, lexeme.len()))
    }

    #[test]
    fn test_print_expression() {
        let expr = Expr::binary(
            Expr::unary(token(TokenKind::Minus, "-"), Expr::literal(123.0)),
            token(TokenKind::Star, "*"),
            Expr::grouping(Expr::literal(45.67)),
        );
        assert_eq!(
            AstPrinter::new().print_expr(&expr),
            "(* (- 123) (group 45.67))"
        );
    }

    #[test]
    fn test_print_literals() {
        let mut printer = AstPrinter::new();
        assert_eq!(printer.print_expr(&Expr::literal(LiteralValue::Nil)), "nil");
        assert_eq!(printer.print_expr(&Expr::literal(true)), "true");
        assert_eq!(printer.print_expr(&Expr::literal("a b")), "\"a b\"");
    }

    #[test]
    fn test_print_assignment() {
        let expr = Expr::assign(
            token(TokenKind::Identifier, "x"),
            Expr::variable(token(TokenKind::Identifier, "y")),
        );
        assert_eq!(AstPrinter::new().print_expr(&expr), "(= x y)");
    }

    #[test]
    fn test_print_statements() {
        let a = || Expr::variable(token(TokenKind::Identifier, "a"));
        let program = Stmt::block(vec![
            Stmt::while_loop(a(), Stmt::block(vec![Stmt::print(a())])),
            Stmt::do_while(Stmt::pass(), Expr::empty()),
            Stmt::if_else(a(), Stmt::break_stmt(), Some(Stmt::pass())),
            Stmt::if_else(a(), Stmt::expression(a()), None),
        ]);
        assert_eq!(
            AstPrinter::new().print_stmt(&program),
            "(block (while a (block (print a))) (do pass (empty)) (if a break pass) (if a a))"
        );
    }

    #[test]
    fn test_print_empty_block() {
        assert_eq!(AstPrinter::new().print_stmt(&Stmt::block(vec![])), "(block)");
    }
}
