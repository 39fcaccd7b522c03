//! Expression nodes.

use std::fmt;

use crate::lexer::{Literal, Token};

/// The value of a literal expression.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LiteralValue {
    /// `nil`, also used for a token without a literal
    #[default]
    Nil,
    /// `true` or `false`
    Boolean(bool),
    /// Numeric literal
    Number(f64),
    /// String literal
    String(String),
}

impl From<Literal> for LiteralValue {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::None => LiteralValue::Nil,
            Literal::Number(n) => LiteralValue::Number(n),
            Literal::String(s) => LiteralValue::String(s),
        }
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Boolean(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        LiteralValue::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::String(value.to_string())
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Nil => write!(f, "nil"),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
            LiteralValue::Number(n) => write!(f, "{}", n),
            LiteralValue::String(s) => write!(f, "{}", s),
        }
    }
}

/// A Mai expression.
///
/// Operator and name tokens are expected to have a kind that fits the
/// node; the parser guarantees this, the node does not check it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `left operator right`
    Binary {
        /// Left operand
        left: Box<Expr>,
        /// The binary operator token
        operator: Token,
        /// Right operand
        right: Box<Expr>,
    },
    /// A parenthesized expression
    Grouping {
        /// The inner expression
        expression: Box<Expr>,
    },
    /// A literal value
    Literal {
        /// The value
        value: LiteralValue,
    },
    /// `operator right`
    Unary {
        /// The prefix operator token
        operator: Token,
        /// The operand
        right: Box<Expr>,
    },
    /// A variable reference
    Variable {
        /// The identifier token
        name: Token,
    },
    /// `name = value`
    Assign {
        /// The identifier token being assigned
        name: Token,
        /// The assigned expression
        value: Box<Expr>,
    },
    /// No expression, e.g. an omitted loop condition
    Empty,
}

impl Expr {
    /// Creates a binary expression.
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// Creates a grouping expression.
    pub fn grouping(expression: Expr) -> Self {
        Expr::Grouping {
            expression: Box::new(expression),
        }
    }

    /// Creates a literal expression.
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Expr::Literal {
            value: value.into(),
        }
    }

    /// Creates a unary expression.
    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }

    /// Creates a variable reference.
    pub fn variable(name: Token) -> Self {
        Expr::Variable { name }
    }

    /// Creates an assignment.
    pub fn assign(name: Token, value: Expr) -> Self {
        Expr::Assign {
            name,
            value: Box::new(value),
        }
    }

    /// Creates the empty placeholder expression.
    pub fn empty() -> Self {
        Expr::Empty
    }

    /// Returns true for the empty placeholder.
    pub fn is_empty(&self) -> bool {
        matches!(self, Expr::Empty)
    }

    /// Dispatches to the visitor method matching this variant.
    pub fn accept<R, V>(&self, visitor: &mut V) -> R
    where
        V: ExprVisitor<R> + ?Sized,
    {
        match self {
            Expr::Binary {
                left,
                operator,
                right,
            } => visitor.visit_binary(left, operator, right),
            Expr::Grouping { expression } => visitor.visit_grouping(expression),
            Expr::Literal { value } => visitor.visit_literal(value),
            Expr::Unary { operator, right } => visitor.visit_unary(operator, right),
            Expr::Variable { name } => visitor.visit_variable(name),
            Expr::Assign { name, value } => visitor.visit_assign(name, value),
            Expr::Empty => visitor.visit_empty(),
        }
    }
}

/// One operation over every kind of expression.
///
/// Each traversal (printing, evaluation, checking) implements this trait
/// once. Adding an `Expr` variant adds a method here, so every existing
/// traversal fails to compile until it handles the new case.
pub trait ExprVisitor<R> {
    /// `left operator right`
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> R;
    /// `( expression )`
    fn visit_grouping(&mut self, expression: &Expr) -> R;
    /// A literal value
    fn visit_literal(&mut self, value: &LiteralValue) -> R;
    /// `operator right`
    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> R;
    /// A variable reference
    fn visit_variable(&mut self, name: &Token) -> R;
    /// `name = value`
    fn visit_assign(&mut self, name: &Token, value: &Expr) -> R;
    /// The empty placeholder
    fn visit_empty(&mut self) -> R;
}
