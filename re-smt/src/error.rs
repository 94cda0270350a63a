//! Errors of a failed translation.
//!
//! Translation is all-or-nothing: no term is produced for a pattern that fails
//! to parse. Offsets are byte offsets into the bare pattern, i.e. without the
//! leading `/` of a literal.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// e.g. a dangling `|`, `||`, `()` content ending early or the end of the pattern.
    #[error("expected an atom at offset {at}")]
    ExpectedAtom { at: usize },

    /// A quantifier with nothing before it, e.g. `*a` or `a**`.
    #[error("nothing to repeat at offset {at}")]
    NothingToRepeat { at: usize },

    #[error("unclosed group opened at offset {at}")]
    UnclosedGroup { at: usize },

    #[error("unmatched `)` at offset {at}")]
    UnmatchedParen { at: usize },

    /// Also raised for a `)` where a class member is expected, e.g. `[a)]`.
    #[error("unclosed character class opened at offset {at}")]
    UnclosedClass { at: usize },

    /// `[]` and `[^]`.
    #[error("empty character class at offset {at}")]
    EmptyClass { at: usize },

    /// `{` not followed by a number, including the unsupported `{m,}`.
    #[error("expected a repetition count at offset {at}")]
    ExpectedLoopCount { at: usize },

    #[error("repetition count at offset {at} is too large")]
    LoopCountOverflow { at: usize },

    #[error("unclosed repetition opened at offset {at}")]
    UnclosedLoop { at: usize },

    /// A `\` at the end of the pattern.
    #[error("dangling escape at offset {at}")]
    DanglingEscape { at: usize },

    #[error("invalid token at offset {at}")]
    InvalidToken { at: usize },
}

impl Error {
    /// Byte offset into the bare pattern.
    pub fn offset(&self) -> usize {
        match *self {
            Error::ExpectedAtom { at }
            | Error::NothingToRepeat { at }
            | Error::UnclosedGroup { at }
            | Error::UnmatchedParen { at }
            | Error::UnclosedClass { at }
            | Error::EmptyClass { at }
            | Error::ExpectedLoopCount { at }
            | Error::LoopCountOverflow { at }
            | Error::UnclosedLoop { at }
            | Error::DanglingEscape { at }
            | Error::InvalidToken { at } => at,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
