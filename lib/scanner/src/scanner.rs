use cursor::{Col, Cursor, Line};
use errors::LoxError;
use itertools::{Either, Itertools};
use log::trace;

pub mod token;
pub use token::{Literal, Token, TokenData, TokenType};
use TokenData::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[line {line}] Error: {error}")]
pub struct ScanError {
    pub error: ScanErrorType,
    pub line: Line,
    pub col: Col,
}

impl ScanError {
    fn new(error: ScanErrorType, at: &Cursor) -> Self {
        Self { error, line: at.line(), col: at.col() }
    }
}

impl From<ScanError> for LoxError {
    fn from(error: ScanError) -> Self {
        LoxError { line: error.line, col: error.col, message: error.to_string() }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanErrorType {
    #[error("Unexpected character `{0}`.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Invalid number `{0}`.")]
    InvalidNumber(String),
}

/// Lazily scans a source string. Yields every token and every lexical
/// error in source order, finishing with exactly one `Eof` token.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    cursor: Cursor<'a>,
    finished: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source), finished: false }
    }

    fn make_token(&self, start: Cursor<'a>, data: TokenData<'a>) -> Token<'a> {
        Token::new(data, (start, self.cursor.clone()))
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.peek() {
                Some(' ' | '\r' | '\t' | '\n') => {
                    self.cursor.next();
                }
                Some('/') if self.cursor.peek_next() == Some('/') => {
                    self.cursor.eat_while(|c| c != '\n');
                }
                _ => return,
            }
        }
    }

    fn scan_token(&mut self) -> Result<Token<'a>, ScanError> {
        self.skip_whitespace_and_comments();

        let start = self.cursor.clone();
        let Some(c) = self.cursor.next() else {
            return Ok(self.make_token(start, Eof));
        };

        let data = match c {
            '(' => LeftParen,
            ')' => RightParen,
            '{' => LeftBrace,
            '}' => RightBrace,
            ',' => Comma,
            '.' => Dot,
            '-' => Minus,
            '+' => Plus,
            ';' => Semicolon,
            '*' => Star,
            '/' => Slash,

            '!' => self.either('=', BangEqual, Bang),
            '=' => self.either('=', EqualEqual, Equal),
            '<' => self.either('=', LessEqual, Less),
            '>' => self.either('=', GreaterEqual, Greater),

            '"' => return self.string(start),
            d if d.is_ascii_digit() => return self.number(start),
            c if is_identifier_start(c) => self.identifier(&start),

            c => return Err(ScanError::new(ScanErrorType::UnexpectedCharacter(c), &start)),
        };

        Ok(self.make_token(start, data))
    }

    fn either(&mut self, second: char, two_char: TokenData<'a>, one_char: TokenData<'a>) -> TokenData<'a> {
        if self.cursor.next_if_eq(second) {
            two_char
        } else {
            one_char
        }
    }

    fn string(&mut self, start: Cursor<'a>) -> Result<Token<'a>, ScanError> {
        self.cursor.eat_while(|c| c != '"');
        if !self.cursor.next_if_eq('"') {
            return Err(ScanError::new(ScanErrorType::UnterminatedString, &start));
        }

        let lexeme = start.slice_until(&self.cursor);
        Ok(self.make_token(start, Str(&lexeme[1..lexeme.len() - 1])))
    }

    fn number(&mut self, start: Cursor<'a>) -> Result<Token<'a>, ScanError> {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        // A trailing '.' is not part of the number.
        if self.cursor.peek() == Some('.') && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.next();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        // Out-of-range literals parse to infinity; those are rejected too.
        let lexeme = start.slice_until(&self.cursor);
        match lexeme.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(self.make_token(start, Number(n))),
            _ => Err(ScanError::new(ScanErrorType::InvalidNumber(lexeme.to_string()), &start)),
        }
    }

    fn identifier(&mut self, start: &Cursor<'a>) -> TokenData<'a> {
        self.cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
        token::keyword(start.slice_until(&self.cursor)).unwrap_or(Identifier)
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Result<Token<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.scan_token();
        match &result {
            Ok(token) => {
                trace!("Scanned {:?} {:?} (line {})", token.kind(), token.lexeme(), token.line());
                self.finished = token.data == Eof;
            }
            Err(e) => trace!("Scan error: {e}"),
        }
        Some(result)
    }
}

/// Scans the whole source, separating tokens from lexical errors.
/// The token list always ends with a single `Eof` token.
pub fn scan(source: &str) -> (Vec<Token<'_>>, Vec<ScanError>) {
    TokenStream::new(source).partition_map(|result| match result {
        Ok(token) => Either::Left(token),
        Err(error) => Either::Right(error),
    })
}
