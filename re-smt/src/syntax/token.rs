use logos::Logos;

use crate::error::{Error, Result};

/// Every token covers exactly one character, so a quantifier or a class range
/// always applies to the single preceding character.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    #[token(r"\")]
    Backslash,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("|")]
    Pipe,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    /// Equivalent to `[^\n]` over `\x00-\xFF`.
    #[token(".")]
    Dot,

    #[token("^")]
    Caret,

    #[token("$")]
    Dollar,

    #[token("-")]
    Dash,

    #[token(",")]
    Comma,

    #[regex("[0-9]")]
    Digit,

    /// Any other character, including newlines.
    #[regex(r"[^\\()\[\]{}|*+?.^$\-,0-9]")]
    Char,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub ch: char,
    /// Byte offset in the pattern.
    pub at: usize,
}

pub fn lex(pattern: &str) -> Result<Vec<Lexeme>> {
    let mut lex = Token::lexer(pattern);
    let mut lexemes = Vec::with_capacity(pattern.len());
    while let Some(token) = lex.next() {
        let at = lex.span().start;
        let (Ok(token), Some(ch)) = (token, lex.slice().chars().next()) else {
            return Err(Error::InvalidToken { at });
        };
        lexemes.push(Lexeme { token, ch, at });
    }
    Ok(lexemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token() {
        let input = r"^a\.(b|c)*[^x-z]{2,3}$";
        let mut lexer = Token::lexer(input);
        for expected in [
            Token::Caret,
            Token::Char,
            Token::Backslash,
            Token::Dot,
            Token::LParen,
            Token::Char,
            Token::Pipe,
            Token::Char,
            Token::RParen,
            Token::Star,
            Token::LBracket,
            Token::Caret,
            Token::Char,
            Token::Dash,
            Token::Char,
            Token::RBracket,
            Token::LBrace,
            Token::Digit,
            Token::Comma,
            Token::Digit,
            Token::RBrace,
            Token::Dollar,
        ] {
            assert_eq!(lexer.next(), Some(Ok(expected)));
        }
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn lexemes() {
        let lexemes = lex("é\n+").unwrap();
        assert_eq!(
            lexemes,
            [
                Lexeme {
                    token: Token::Char,
                    ch: 'é',
                    at: 0
                },
                Lexeme {
                    token: Token::Char,
                    ch: '\n',
                    at: 2
                },
                Lexeme {
                    token: Token::Plus,
                    ch: '+',
                    at: 3
                },
            ]
        );
        assert!(lex("").unwrap().is_empty());
    }
}
