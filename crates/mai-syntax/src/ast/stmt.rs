//! Statement nodes.

use super::Expr;

/// A Mai statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its effect
    Expression {
        /// The expression
        expression: Expr,
    },
    /// `print expression`
    Print {
        /// The printed expression
        expression: Expr,
    },
    /// `{ ... }`, statements in execution order
    Block {
        /// The statements, possibly none
        statements: Vec<Stmt>,
    },
    /// `while condition body`
    While {
        /// Loop condition, checked before each iteration
        condition: Expr,
        /// Loop body
        body: Box<Stmt>,
    },
    /// `do body while condition`
    Do {
        /// Loop body, run at least once
        body: Box<Stmt>,
        /// Loop condition, checked after each iteration
        condition: Expr,
    },
    /// `if condition then_branch else else_branch`
    If {
        /// The condition
        condition: Expr,
        /// Taken when the condition holds
        then_branch: Box<Stmt>,
        /// Taken otherwise, if present
        else_branch: Option<Box<Stmt>>,
    },
    /// `break`
    Break,
    /// `pass`, does nothing
    Pass,
}

impl Stmt {
    /// Creates an expression statement.
    pub fn expression(expression: Expr) -> Self {
        Stmt::Expression { expression }
    }

    /// Creates a print statement.
    pub fn print(expression: Expr) -> Self {
        Stmt::Print { expression }
    }

    /// Creates a block.
    pub fn block(statements: Vec<Stmt>) -> Self {
        Stmt::Block { statements }
    }

    /// Creates a while loop.
    pub fn while_loop(condition: Expr, body: Stmt) -> Self {
        Stmt::While {
            condition,
            body: Box::new(body),
        }
    }

    /// Creates a do-while loop.
    pub fn do_while(body: Stmt, condition: Expr) -> Self {
        Stmt::Do {
            body: Box::new(body),
            condition,
        }
    }

    /// Creates an if statement.
    pub fn if_else(condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Stmt::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    /// Creates a break statement.
    pub fn break_stmt() -> Self {
        Stmt::Break
    }

    /// Creates a pass statement.
    pub fn pass() -> Self {
        Stmt::Pass
    }

    /// Dispatches to the visitor method matching this variant.
    pub fn accept<R, V>(&self, visitor: &mut V) -> R
    where
        V: StmtVisitor<R> + ?Sized,
    {
        match self {
            Stmt::Expression { expression } => visitor.visit_expression_stmt(expression),
            Stmt::Print { expression } => visitor.visit_print_stmt(expression),
            Stmt::Block { statements } => visitor.visit_block_stmt(statements),
            Stmt::While { condition, body } => visitor.visit_while_stmt(condition, body),
            Stmt::Do { body, condition } => visitor.visit_do_stmt(body, condition),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => visitor.visit_if_stmt(condition, then_branch, else_branch.as_deref()),
            Stmt::Break => visitor.visit_break_stmt(),
            Stmt::Pass => visitor.visit_pass_stmt(),
        }
    }
}

/// One operation over every kind of statement.
pub trait StmtVisitor<R> {
    /// An expression statement
    fn visit_expression_stmt(&mut self, expression: &Expr) -> R;
    /// `print expression`
    fn visit_print_stmt(&mut self, expression: &Expr) -> R;
    /// `{ statements }`
    fn visit_block_stmt(&mut self, statements: &[Stmt]) -> R;
    /// `while condition body`
    fn visit_while_stmt(&mut self, condition: &Expr, body: &Stmt) -> R;
    /// `do body while condition`
    fn visit_do_stmt(&mut self, body: &Stmt, condition: &Expr) -> R;
    /// `if condition then_branch else else_branch`
    fn visit_if_stmt(
        &mut self,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) -> R;
    /// `break`
    fn visit_break_stmt(&mut self) -> R;
    /// `pass`
    fn visit_pass_stmt(&mut self) -> R;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the order in which statements are visited.
    #[derive(Default)]
    struct Trace {
        seen: Vec<&'static str>,
    }

    impl StmtVisitor<()> for Trace {
        fn visit_expression_stmt(&mut self, _expression: &Expr) {
            self.seen.push("expression");
        }

        fn visit_print_stmt(&mut self, _expression: &Expr) {
            self.seen.push("print");
        }

        fn visit_block_stmt(&mut self, statements: &[Stmt]) {
            self.seen.push("block");
            for stmt in statements {
                stmt.accept(self);
            }
        }

        fn visit_while_stmt(&mut self, _condition: &Expr, body: &Stmt) {
            self.seen.push("while");
            body.accept(self);
        }

        fn visit_do_stmt(&mut self, body: &Stmt, _condition: &Expr) {
            self.seen.push("do");
            body.accept(self);
        }

        fn visit_if_stmt(
            &mut self,
            _condition: &Expr,
            then_branch: &Stmt,
            else_branch: Option<&Stmt>,
        ) {
            self.seen.push("if");
            then_branch.accept(self);
            if let Some(stmt) = else_branch {
                stmt.accept(self);
            }
        }

        fn visit_break_stmt(&mut self) {
            self.seen.push("break");
        }

        fn visit_pass_stmt(&mut self) {
            self.seen.push("pass");
        }
    }

    #[test]
    fn test_block_preserves_order() {
        let program = Stmt::block(vec![
            Stmt::print(Expr::literal(1.0)),
            Stmt::expression(Expr::literal(2.0)),
            Stmt::pass(),
            Stmt::break_stmt(),
        ]);

        let mut trace = Trace::default();
        program.accept(&mut trace);
        assert_eq!(trace.seen, vec!["block", "print", "expression", "pass", "break"]);
    }

    #[test]
    fn test_empty_block() {
        let mut trace = Trace::default();
        Stmt::block(Vec::new()).accept(&mut trace);
        assert_eq!(trace.seen, vec!["block"]);
    }

    #[test]
    fn test_loops_and_branches() {
        let program = Stmt::block(vec![
            Stmt::while_loop(Expr::literal(true), Stmt::break_stmt()),
            Stmt::do_while(Stmt::pass(), Expr::empty()),
            Stmt::if_else(Expr::literal(false), Stmt::pass(), Some(Stmt::break_stmt())),
            Stmt::if_else(Expr::literal(false), Stmt::pass(), None),
        ]);

        let mut trace = Trace::default();
        program.accept(&mut trace);
        assert_eq!(
            trace.seen,
            vec!["block", "while", "break", "do", "pass", "if", "pass", "break", "if", "pass"]
        );
    }

    #[test]
    fn test_if_without_else() {
        let stmt = Stmt::if_else(Expr::literal(1.0), Stmt::pass(), None);
        assert!(matches!(stmt, Stmt::If { else_branch: None, .. }));
    }
}
