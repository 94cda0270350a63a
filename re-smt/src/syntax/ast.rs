//! The parsed form of a pattern, independent of any term algebra.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ast {
    /// A sequence of atoms: the whole pattern or the content of a group.
    ///
    /// May be empty, e.g. `^$` or `()`, and then matches only the empty string.
    Concat(Vec<Ast>),
    /// `a|b`. Right-associative: `a|b|c` is `a|(b|c)`.
    Alternation(Box<Ast>, Box<Ast>),
    Repetition { kind: RepetitionKind, sub: Box<Ast> },
    Literal(char),
    /// `.`
    Any,
    /// `\d`, `\w`, `\s` and their negations.
    Perl(PerlClass),
    /// `[...]`
    Class(Class),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepetitionKind {
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `?`
    ZeroOrOne,
    /// `{min}` or `{min,max}`
    Range { min: u32, max: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerlClassKind {
    /// `[0-9]`
    Digit,
    /// `[a-zA-Z0-9_]`
    Word,
    /// `[ \t\r\n\f]`
    Space,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PerlClass {
    pub kind: PerlClassKind,
    /// `\D`, `\W` and `\S`. Unlike a negated bracket class, this is the
    /// complement over all strings, not only over single characters.
    pub negated: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Class {
    /// `[^...]`
    pub negated: bool,
    /// Never empty.
    pub items: Vec<ClassItem>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassItem {
    Char(char),
    /// Empty when the start is after the end.
    Range(char, char),
}

impl Ast {
    pub fn repetition(kind: RepetitionKind, sub: Ast) -> Self {
        Ast::Repetition {
            kind,
            sub: Box::new(sub),
        }
    }

    pub fn alternation(a: Ast, b: Ast) -> Self {
        Ast::Alternation(Box::new(a), Box::new(b))
    }
}
