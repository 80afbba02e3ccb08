use crate::{Col, Cursor, Line};

/// Where a token starts and the text it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRange<'a> {
    start: Cursor<'a>,
    lexeme: &'a str,
}

impl<'a> From<(Cursor<'a>, Cursor<'a>)> for SourceRange<'a> {
    fn from((start, end): (Cursor<'a>, Cursor<'a>)) -> Self {
        let lexeme = start.slice_until(&end);
        Self { start, lexeme }
    }
}

impl<'a> SourceRange<'a> {
    pub fn lexeme(&self) -> &'a str {
        self.lexeme
    }

    pub fn line(&self) -> Line {
        self.start.line()
    }

    pub fn col(&self) -> Col {
        self.start.col()
    }

    /// Cursor just past the last character of the lexeme.
    pub fn end(&self) -> Cursor<'a> {
        let mut end = self.start.clone();
        for _ in self.lexeme.chars() {
            end.next();
        }
        end
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn advance(cursor: &mut Cursor, n: usize) {
        cursor.by_ref().take(n).for_each(drop);
    }

    #[test]
    fn lexeme_and_position() {
        let mut cursor = Cursor::new("a\n  \"b\nc\" d");
        advance(&mut cursor, 4);

        let start = cursor.clone();
        advance(&mut cursor, 5);

        let range = SourceRange::from((start, cursor.clone()));
        assert_eq!(range.lexeme(), "\"b\nc\"");
        assert_eq!((range.line(), range.col()), (Line(2), Col(3)));
        assert_eq!(range.end(), cursor);
        assert_eq!((range.end().line(), range.end().col()), (Line(3), Col(3)));
    }

    #[test]
    fn empty_range() {
        let cursor = Cursor::new("é");
        let range = SourceRange::from((cursor.clone(), cursor.clone()));
        assert_eq!(range.lexeme(), "");
        assert_eq!(range.end(), cursor);
    }
}
