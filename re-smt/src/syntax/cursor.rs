use super::token::{Lexeme, Token};

/// A position in the lexemes of one pattern. Only moves forward.
pub struct Cursor {
    lexemes: Vec<Lexeme>,
    pos: usize,
    /// Byte length of the pattern, the offset reported at the end.
    len: usize,
}

impl Cursor {
    pub fn new(lexemes: Vec<Lexeme>, len: usize) -> Self {
        Self {
            lexemes,
            pos: 0,
            len,
        }
    }

    /// Whether an atom may follow: lexemes remain and the current one does not close a group.
    pub fn more(&self) -> bool {
        self.current().is_some_and(|l| l.token != Token::RParen)
    }

    pub fn current(&self) -> Option<Lexeme> {
        self.lexemes.get(self.pos).copied()
    }

    /// The lexeme after [`current`](Cursor::current).
    pub fn peek(&self) -> Option<Lexeme> {
        self.lexemes.get(self.pos + 1).copied()
    }

    pub fn next(&mut self) -> Option<Lexeme> {
        let lexeme = self.current()?;
        self.pos += 1;
        Some(lexeme)
    }

    /// Whether the current token is `token`.
    pub fn at(&self, token: Token) -> bool {
        self.current().is_some_and(|l| l.token == token)
    }

    /// Consume the current lexeme if it is `token`.
    pub fn eat(&mut self, token: Token) -> bool {
        let matched = self.at(token);
        if matched {
            self.pos += 1;
        }
        matched
    }

    /// Byte offset of the current lexeme, or the pattern length at the end.
    pub fn offset(&self) -> usize {
        self.current().map_or(self.len, |l| l.at)
    }
}
