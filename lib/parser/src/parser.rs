mod expr;
mod printer;
mod source_printer;

pub use expr::{Expr, LiteralValue, Visitor};
pub use printer::{render, AstPrinter};
pub use source_printer::{to_source, SourcePrinter};

use cursor::{Col, Cursor, Line};
use errors::{LoxError, LoxErrors};
use log::debug;
use scanner::{Token, TokenData, TokenType};

use TokenType::*;

/// Maximum height of a parsed tree. Groupings, unary operators and every
/// fold of a binary chain each add a level, so the recursive rules here,
/// every recursive visitor, and dropping the tree all stay within the stack.
pub const MAX_DEPTH: usize = 128;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[line {line}] Error at {at}: {error}")]
pub struct ParseError {
    pub error: ParseErrorType,
    pub line: Line,
    pub col: Col,
    /// The offending token, quoted, or `end` for the end of input.
    pub at: String,
}

impl ParseError {
    fn new(error: ParseErrorType, token: &Token) -> Self {
        let at = match token.kind() {
            Eof => "end".to_string(),
            _ => format!("'{}'", token.lexeme()),
        };
        Self { error, line: token.line(), col: token.col(), at }
    }
}

impl From<ParseError> for LoxError {
    fn from(error: ParseError) -> Self {
        LoxError { line: error.line, col: error.col, message: error.to_string() }
    }
}

impl From<ParseError> for LoxErrors {
    fn from(error: ParseError) -> Self {
        LoxError::from(error).into()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    #[error("Expect expression.")]
    ExpectedExpression,
    #[error("Expect ')' after expression.")]
    ExpectedRightParen,
    #[error("Expect end of input after expression.")]
    ExpectedEnd,
    #[error("Expression nested too deeply (more than {} levels).", MAX_DEPTH)]
    TooDeep,
}

/// Recursive descent over an owned token list, one rule per precedence tier.
/// `current` only ever moves forward and never past the final `Eof`.
#[derive(Debug)]
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    current: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(mut tokens: Vec<Token<'a>>) -> Self {
        if tokens.last().map(Token::kind) != Some(Eof) {
            let end = match tokens.last() {
                Some(last) => last.range.end(),
                None => Cursor::new(""),
            };
            tokens.push(Token::new(TokenData::Eof, (end.clone(), end)));
        }
        Self { tokens, current: 0, depth: 0 }
    }

    /// Parses a single expression. Tokens after it are left unexamined, so
    /// `1 + 2 garbage` yields `1 + 2`. Use [`Parser::parse_to_end`] to reject them.
    pub fn parse(mut self) -> Result<Expr<'a>> {
        let Node { expr, height } = self.expression()?;
        debug!("Parsed expression of height {height}: {expr}");
        Ok(expr)
    }

    /// Like [`Parser::parse`], but the expression must be followed by the end of input.
    pub fn parse_to_end(mut self) -> Result<Expr<'a>> {
        let Node { expr, height } = self.expression()?;
        if !self.check(&[Eof]) {
            return Err(ParseError::new(ParseErrorType::ExpectedEnd, self.peek()));
        }
        debug!("Parsed expression of height {height}: {expr}");
        Ok(expr)
    }

    fn expression(&mut self) -> Result<Node<'a>> {
        self.equality()
    }

    fn equality(&mut self) -> Result<Node<'a>> {
        self.left_associative(&[BangEqual, EqualEqual], Self::comparison)
    }

    fn comparison(&mut self) -> Result<Node<'a>> {
        self.left_associative(&[Greater, GreaterEqual, Less, LessEqual], Self::term)
    }

    fn term(&mut self) -> Result<Node<'a>> {
        self.left_associative(&[Minus, Plus], Self::factor)
    }

    fn factor(&mut self) -> Result<Node<'a>> {
        self.left_associative(&[Slash, Star], Self::unary)
    }

    /// `operand ( operator operand )*`, folded to the left.
    fn left_associative(
        &mut self,
        operators: &[TokenType],
        operand: fn(&mut Self) -> Result<Node<'a>>,
    ) -> Result<Node<'a>> {
        let mut node = operand(self)?;

        while let Some(operator) = self.advance_if(operators) {
            let right = operand(self)?;
            let height = checked_height(node.height.max(right.height) + 1, &operator)?;
            node = Node {
                expr: Expr::Binary { left: Box::new(node.expr), operator, right: Box::new(right.expr) },
                height,
            };
        }
        Ok(node)
    }

    fn unary(&mut self) -> Result<Node<'a>> {
        if let Some(operator) = self.advance_if(&[Bang, Minus]) {
            let right = self.nested(Self::unary)?;
            let height = checked_height(right.height + 1, &operator)?;
            return Ok(Node { expr: Expr::Unary { operator, right: Box::new(right.expr) }, height });
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Node<'a>> {
        let value = match self.peek().data.clone() {
            TokenData::False => LiteralValue::Boolean(false),
            TokenData::True => LiteralValue::Boolean(true),
            TokenData::Nil => LiteralValue::Nil,
            TokenData::Number(n) => LiteralValue::Number(n),
            TokenData::Str(s) => LiteralValue::Str(s),
            TokenData::LeftParen => {
                let paren = self.advance();
                let inner = self.nested(Self::expression)?;
                self.consume_or_error(RightParen, ParseErrorType::ExpectedRightParen)?;
                let height = checked_height(inner.height + 1, &paren)?;
                return Ok(Node { expr: Expr::Grouping(Box::new(inner.expr)), height });
            }
            _ => return Err(ParseError::new(ParseErrorType::ExpectedExpression, self.peek())),
        };

        self.advance();
        Ok(Node { expr: Expr::Literal(value), height: 0 })
    }

    // Recursion is bounded up front; the tree height is only known on the way back up.
    fn nested(&mut self, rule: fn(&mut Self) -> Result<Node<'a>>) -> Result<Node<'a>> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::new(ParseErrorType::TooDeep, self.peek()));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}

/// A subtree under construction and its height in edges.
struct Node<'a> {
    expr: Expr<'a>,
    height: usize,
}

/// Fails with `TooDeep`, reported at `at`, once a new parent would exceed [`MAX_DEPTH`].
fn checked_height(height: usize, at: &Token) -> Result<usize> {
    if height > MAX_DEPTH {
        return Err(ParseError::new(ParseErrorType::TooDeep, at));
    }
    Ok(height)
}

// Helpers
impl<'a> Parser<'a> {
    fn peek(&self) -> &Token<'a> {
        &self.tokens[self.current]
    }

    fn check(&self, kinds: &[TokenType]) -> bool {
        kinds.contains(&self.peek().kind())
    }

    fn advance(&mut self) -> Token<'a> {
        let token = self.peek().clone();
        if token.kind() != Eof {
            self.current += 1;
        }
        token
    }

    fn advance_if(&mut self, kinds: &[TokenType]) -> Option<Token<'a>> {
        self.check(kinds).then(|| self.advance())
    }

    fn consume_or_error(&mut self, kind: TokenType, error: ParseErrorType) -> Result<Token<'a>> {
        match self.advance_if(&[kind]) {
            Some(token) => Ok(token),
            None => Err(ParseError::new(error, self.peek())),
        }
    }
}

/// Parses one expression from a token list, see [`Parser::parse`].
pub fn parse(tokens: Vec<Token>) -> Result<Expr> {
    Parser::new(tokens).parse()
}

/// Scans and strictly parses `source`. Lexical errors stop the pipeline
/// before parsing and are all reported.
pub fn parse_source(source: &str) -> errors::Result<Expr<'_>> {
    let (tokens, scan_errors) = scanner::scan(source);
    if !scan_errors.is_empty() {
        return Err(scan_errors.into_iter().collect());
    }

    Ok(Parser::new(tokens).parse_to_end()?)
}
