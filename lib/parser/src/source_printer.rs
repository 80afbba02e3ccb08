use scanner::Token;

use crate::{Expr, LiteralValue, Visitor};

/// Renders a tree back to infix source text that scans and parses to an
/// equal tree. Parentheses appear only where the tree has a grouping.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourcePrinter;

impl<'a> Visitor<'a> for SourcePrinter {
    type Output = String;

    fn visit_binary(&mut self, left: &Expr<'a>, operator: &Token<'a>, right: &Expr<'a>) -> String {
        format!("{} {} {}", left.accept(self), operator.lexeme(), right.accept(self))
    }

    fn visit_grouping(&mut self, expression: &Expr<'a>) -> String {
        format!("({})", expression.accept(self))
    }

    fn visit_literal(&mut self, value: &LiteralValue<'a>) -> String {
        match value {
            LiteralValue::Str(s) => format!("\"{s}\""),
            value => value.to_string(),
        }
    }

    fn visit_unary(&mut self, operator: &Token<'a>, right: &Expr<'a>) -> String {
        format!("{}{}", operator.lexeme(), right.accept(self))
    }
}

pub fn to_source(expr: &Expr) -> String {
    expr.accept(&mut SourcePrinter)
}
