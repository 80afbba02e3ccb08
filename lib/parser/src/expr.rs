use std::fmt::{self, Display, Formatter};

use scanner::{Literal, Token};

use crate::printer::AstPrinter;

/// An expression tree. Every node owns its children.
#[derive(Debug, Clone)]
pub enum Expr<'a> {
    Binary { left: Box<Expr<'a>>, operator: Token<'a>, right: Box<Expr<'a>> },
    Grouping(Box<Expr<'a>>),
    Literal(LiteralValue<'a>),
    Unary { operator: Token<'a>, right: Box<Expr<'a>> },
}

/// One method per [`Expr`] variant. New tree consumers implement this
/// trait; the node definitions stay untouched.
pub trait Visitor<'a> {
    type Output;

    fn visit_binary(&mut self, left: &Expr<'a>, operator: &Token<'a>, right: &Expr<'a>) -> Self::Output;
    fn visit_grouping(&mut self, expression: &Expr<'a>) -> Self::Output;
    fn visit_literal(&mut self, value: &LiteralValue<'a>) -> Self::Output;
    fn visit_unary(&mut self, operator: &Token<'a>, right: &Expr<'a>) -> Self::Output;
}

impl<'a> Expr<'a> {
    pub fn accept<V: Visitor<'a>>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Binary { left, operator, right } => visitor.visit_binary(left, operator, right),
            Expr::Grouping(expression) => visitor.visit_grouping(expression),
            Expr::Literal(value) => visitor.visit_literal(value),
            Expr::Unary { operator, right } => visitor.visit_unary(operator, right),
        }
    }
}

// Operators compare by kind and lexeme, so trees parsed from differently
// formatted sources are equal.
impl PartialEq for Expr<'_> {
    fn eq(&self, other: &Self) -> bool {
        fn same_operator(a: &Token, b: &Token) -> bool {
            a.kind() == b.kind() && a.lexeme() == b.lexeme()
        }

        match (self, other) {
            (
                Expr::Binary { left, operator, right },
                Expr::Binary { left: other_left, operator: other_operator, right: other_right },
            ) => same_operator(operator, other_operator) && left == other_left && right == other_right,
            (Expr::Grouping(a), Expr::Grouping(b)) => a == b,
            (Expr::Literal(a), Expr::Literal(b)) => a == b,
            (
                Expr::Unary { operator, right },
                Expr::Unary { operator: other_operator, right: other_right },
            ) => same_operator(operator, other_operator) && right == other_right,
            _ => false,
        }
    }
}

impl Display for Expr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.accept(&mut AstPrinter))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue<'a> {
    Number(f64),
    Str(&'a str),
    Boolean(bool),
    Nil,
}

impl<'a> From<Literal<'a>> for LiteralValue<'a> {
    fn from(literal: Literal<'a>) -> Self {
        match literal {
            Literal::Number(n) => LiteralValue::Number(n),
            Literal::Str(s) => LiteralValue::Str(s),
        }
    }
}

impl Display for LiteralValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Number(n) => write!(f, "{n}"),
            LiteralValue::Str(s) => write!(f, "{s}"),
            LiteralValue::Boolean(b) => write!(f, "{b}"),
            LiteralValue::Nil => write!(f, "nil"),
        }
    }
}
