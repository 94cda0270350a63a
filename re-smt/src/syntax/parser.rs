use crate::error::{Error, Result};

use super::{
    ast::{Ast, Class, ClassItem, PerlClass, PerlClassKind, RepetitionKind},
    cursor::Cursor,
    token::{lex, Token},
};

/// Parse a bare pattern (without delimiters) into an [`Ast`].
///
/// `^` and `$` are dropped wherever they appear; whether the pattern is
/// anchored is decided from its text afterwards, see [`crate::anchor`].
///
/// ```
/// use re_smt::syntax::{parse, Ast, RepetitionKind};
///
/// assert_eq!(
///     parse("^ab*$").unwrap(),
///     Ast::Concat(vec![
///         Ast::Literal('a'),
///         Ast::repetition(RepetitionKind::ZeroOrMore, Ast::Literal('b')),
///     ])
/// );
/// ```
pub fn parse(pattern: &str) -> Result<Ast> {
    let mut parser = Parser {
        cursor: Cursor::new(lex(pattern)?, pattern.len()),
    };
    let ast = parser.parse_atoms()?;
    // The top level only stops early at a `)`
    if let Some(lexeme) = parser.cursor.current() {
        return Err(Error::UnmatchedParen { at: lexeme.at });
    }
    Ok(ast)
}

struct Parser {
    cursor: Cursor,
}

impl Parser {
    fn skip_anchors(&mut self) {
        while self.cursor.eat(Token::Caret) || self.cursor.eat(Token::Dollar) {}
    }

    /// `{ Anchor* Atom2 }*`
    fn parse_atoms(&mut self) -> Result<Ast> {
        let mut atoms = Vec::new();
        while self.cursor.more() {
            self.skip_anchors();
            if self.cursor.more() {
                atoms.push(self.parse_atom2()?);
            }
        }
        Ok(Ast::Concat(atoms))
    }

    /// `Atom1 Quantifier? ('|' Atom2)?`
    fn parse_atom2(&mut self) -> Result<Ast> {
        let atom = self.parse_atom1()?;

        let kind = match self.cursor.current().map(|l| l.token) {
            Some(Token::Star) => Some(RepetitionKind::ZeroOrMore),
            Some(Token::Plus) => Some(RepetitionKind::OneOrMore),
            Some(Token::Question) => Some(RepetitionKind::ZeroOrOne),
            Some(Token::LBrace) => {
                let open = self.cursor.offset();
                self.cursor.next();
                let (min, max) = self.parse_loop_count()?;
                if !self.cursor.at(Token::RBrace) {
                    return Err(Error::UnclosedLoop { at: open });
                }
                Some(RepetitionKind::Range { min, max })
            }
            _ => None,
        };
        let atom = match kind {
            Some(kind) => {
                // The quantifier itself, or the closing `}`
                self.cursor.next();
                Ast::repetition(kind, atom)
            }
            None => atom,
        };

        if self.cursor.eat(Token::Pipe) {
            let rhs = self.parse_atom2()?;
            return Ok(Ast::alternation(atom, rhs));
        }
        Ok(atom)
    }

    fn parse_atom1(&mut self) -> Result<Ast> {
        // e.g. `a|^b`
        self.skip_anchors();

        let Some(lexeme) = self.cursor.current() else {
            return Err(Error::ExpectedAtom {
                at: self.cursor.offset(),
            });
        };
        match lexeme.token {
            Token::LParen => {
                self.cursor.next();
                let atoms = self.parse_atoms()?;
                if !self.cursor.eat(Token::RParen) {
                    return Err(Error::UnclosedGroup { at: lexeme.at });
                }
                Ok(atoms)
            }
            Token::LBracket => self.parse_class().map(Ast::Class),
            Token::Backslash => self.parse_escape(),
            Token::Dot => {
                self.cursor.next();
                Ok(Ast::Any)
            }
            Token::RParen | Token::Pipe => Err(Error::ExpectedAtom { at: lexeme.at }),
            Token::Star | Token::Plus | Token::Question => {
                Err(Error::NothingToRepeat { at: lexeme.at })
            }
            _ => {
                self.cursor.next();
                Ok(Ast::Literal(lexeme.ch))
            }
        }
    }

    fn parse_escape(&mut self) -> Result<Ast> {
        let at = self.cursor.offset();
        // `\`
        self.cursor.next();
        let Some(lexeme) = self.cursor.next() else {
            return Err(Error::DanglingEscape { at });
        };

        let perl = |kind: PerlClassKind, negated: bool| Ast::Perl(PerlClass { kind, negated });
        Ok(match lexeme.ch {
            'd' => perl(PerlClassKind::Digit, false),
            'D' => perl(PerlClassKind::Digit, true),
            'w' => perl(PerlClassKind::Word, false),
            'W' => perl(PerlClassKind::Word, true),
            's' => perl(PerlClassKind::Space, false),
            'S' => perl(PerlClassKind::Space, true),
            'n' => Ast::Literal('\n'),
            'r' => Ast::Literal('\r'),
            't' => Ast::Literal('\t'),
            '0' => Ast::Literal('\0'),
            // Metacharacters and everything else stand for themselves
            c => Ast::Literal(c),
        })
    }

    /// `'[' '^'? (Char | Char '-' Char)* ']'`
    ///
    /// Members are raw characters: `\` and every metacharacter except `)` and
    /// `]` stand for themselves.
    fn parse_class(&mut self) -> Result<Class> {
        let open = self.cursor.offset();
        // `[`
        self.cursor.next();
        let negated = self.cursor.eat(Token::Caret);

        let mut items = Vec::new();
        // `more()` stops at a `)` as in a group body
        while self.cursor.more() && !self.cursor.at(Token::RBracket) {
            let Some(lo) = self.cursor.next() else {
                break;
            };
            if !self.cursor.eat(Token::Dash) {
                items.push(ClassItem::Char(lo.ch));
                continue;
            }
            // The bound after `-` may be any character, even `]` or `)`
            let Some(hi) = self.cursor.next() else {
                return Err(Error::UnclosedClass { at: open });
            };
            items.push(ClassItem::Range(lo.ch, hi.ch));
        }

        if !self.cursor.eat(Token::RBracket) {
            return Err(Error::UnclosedClass { at: open });
        }
        if items.is_empty() {
            return Err(Error::EmptyClass { at: open });
        }
        Ok(Class { negated, items })
    }

    /// `Number (',' Number)?`
    fn parse_loop_count(&mut self) -> Result<(u32, u32)> {
        let min = self.parse_number()?;
        if self.cursor.eat(Token::Comma) {
            // `{m,}` has no upper bound to parse and fails here
            let max = self.parse_number()?;
            Ok((min, max))
        } else {
            Ok((min, min))
        }
    }

    /// Decimal digits only, no sign.
    fn parse_number(&mut self) -> Result<u32> {
        let at = self.cursor.offset();
        if !self.cursor.at(Token::Digit) {
            return Err(Error::ExpectedLoopCount { at });
        }
        let mut n: u32 = 0;
        while let Some(lexeme) = self.cursor.current().filter(|l| l.token == Token::Digit) {
            self.cursor.next();
            let digit = lexeme.ch as u32 - '0' as u32;
            n = n
                .checked_mul(10)
                .and_then(|n| n.checked_add(digit))
                .ok_or(Error::LoopCountOverflow { at })?;
        }
        Ok(n)
    }
}
