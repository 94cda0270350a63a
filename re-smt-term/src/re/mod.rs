/*!
The reference regex term algebra.

[`Re`] is an immutable, cheaply clonable term over Unicode scalar values with
the same operators as the SMT-LIB string theory. Terms are built either
directly or through [`ReBuilder`], the [`TermAlgebra`] implementation.

Constructors build exactly the term asked for, like a solver's API does;
call [`Re::simplify`] for a normalized equivalent.

## Example
```
use re_smt_term::re::Re;

let digit = Re::range('0', '9');
let re = Re::concat(Re::literal("id"), Re::plus(digit));
assert_eq!(re.to_string(), r#"(re.++ (str.to_re "id") (re.+ (re.range "0" "9")))"#);
assert!(re.is_match("id42"));
assert!(re.is_match("id") == false);
```
*/
use std::{fmt, sync::Arc};

use itertools::Itertools;

use crate::algebra::{Tagged, TermAlgebra};

mod deriv;
mod simplify;

/// A regular expression term. See [`ReKind`] for the operators.
///
/// Equality, ordering and hashing are structural.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Re(Arc<ReKind>);

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReKind {
    /// The empty language, `re.none`.
    None,
    /// Exactly one string, `str.to_re`. The empty string is the language `{ε}`.
    Literal(String),
    /// One character in the inclusive range.
    Range(char, char),
    Concat(Vec<Re>),
    Union(Vec<Re>),
    Inter(Vec<Re>),
    Complement(Re),
    Star(Re),
    Plus(Re),
    Opt(Re),
    Loop { sub: Re, min: u32, max: u32 },
}

impl Re {
    fn new(kind: ReKind) -> Self {
        Re(Arc::new(kind))
    }

    pub fn kind(&self) -> &ReKind {
        &self.0
    }

    pub fn none() -> Self {
        Self::new(ReKind::None)
    }

    /// The language containing only the empty string.
    pub fn epsilon() -> Self {
        Self::literal("")
    }

    pub fn literal(s: impl Into<String>) -> Self {
        Self::new(ReKind::Literal(s.into()))
    }

    /// `lo > hi` is allowed and denotes the empty language.
    pub fn range(lo: char, hi: char) -> Self {
        Self::new(ReKind::Range(lo, hi))
    }

    pub fn concat(a: Re, b: Re) -> Self {
        Self::new(ReKind::Concat(vec![a, b]))
    }

    pub fn concat_all(subs: Vec<Re>) -> Self {
        Self::new(ReKind::Concat(subs))
    }

    pub fn union(a: Re, b: Re) -> Self {
        Self::new(ReKind::Union(vec![a, b]))
    }

    pub fn union_all(subs: Vec<Re>) -> Self {
        Self::new(ReKind::Union(subs))
    }

    pub fn inter(a: Re, b: Re) -> Self {
        Self::new(ReKind::Inter(vec![a, b]))
    }

    pub fn inter_all(subs: Vec<Re>) -> Self {
        Self::new(ReKind::Inter(subs))
    }

    pub fn complement(a: Re) -> Self {
        Self::new(ReKind::Complement(a))
    }

    pub fn star(a: Re) -> Self {
        Self::new(ReKind::Star(a))
    }

    pub fn plus(a: Re) -> Self {
        Self::new(ReKind::Plus(a))
    }

    pub fn opt(a: Re) -> Self {
        Self::new(ReKind::Opt(a))
    }

    /// `min > max` is allowed and denotes the empty language.
    pub fn repeat(sub: Re, min: u32, max: u32) -> Self {
        Self::new(ReKind::Loop { sub, min, max })
    }

    /// Whether the language contains the empty string.
    pub fn is_nullable(&self) -> bool {
        match self.kind() {
            ReKind::None | ReKind::Range(..) => false,
            ReKind::Literal(s) => s.is_empty(),
            ReKind::Concat(subs) | ReKind::Inter(subs) => subs.iter().all(Re::is_nullable),
            ReKind::Union(subs) => subs.iter().any(Re::is_nullable),
            ReKind::Complement(sub) => !sub.is_nullable(),
            ReKind::Star(_) | ReKind::Opt(_) => true,
            ReKind::Plus(sub) => sub.is_nullable(),
            ReKind::Loop { sub, min, max } => min <= max && (*min == 0 || sub.is_nullable()),
        }
    }

    /// Whether this is syntactically the empty language.
    pub fn is_none(&self) -> bool {
        matches!(self.kind(), ReKind::None)
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self.kind(), ReKind::Literal(s) if s.is_empty())
    }
}

impl fmt::Debug for Re {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind().fmt(f)
    }
}

/// Write `s` as an SMT-LIB 2.6 string literal.
///
/// `"` is doubled, printable ASCII is kept and everything else becomes `\u{..}`.
fn write_smt_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\"\"")?,
            ' '..='~' => write!(f, "{c}")?,
            _ => write!(f, "\\u{{{:x}}}", c as u32)?,
        }
    }
    f.write_str("\"")
}

struct SmtChar(char);

impl fmt::Display for SmtChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; 4];
        write_smt_string(f, self.0.encode_utf8(&mut buf))
    }
}

/// SMT-LIB 2.6 syntax.
impl fmt::Display for Re {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ReKind::None => f.write_str("re.none"),
            ReKind::Literal(s) => {
                f.write_str("(str.to_re ")?;
                write_smt_string(f, s)?;
                f.write_str(")")
            }
            ReKind::Range(lo, hi) => write!(f, "(re.range {} {})", SmtChar(*lo), SmtChar(*hi)),
            ReKind::Concat(subs) => write!(f, "(re.++ {})", subs.iter().join(" ")),
            ReKind::Union(subs) => write!(f, "(re.union {})", subs.iter().join(" ")),
            ReKind::Inter(subs) => write!(f, "(re.inter {})", subs.iter().join(" ")),
            ReKind::Complement(sub) => write!(f, "(re.comp {sub})"),
            ReKind::Star(sub) => write!(f, "(re.* {sub})"),
            ReKind::Plus(sub) => write!(f, "(re.+ {sub})"),
            ReKind::Opt(sub) => write!(f, "(re.opt {sub})"),
            ReKind::Loop { sub, min, max } => write!(f, "((_ re.loop {min} {max}) {sub})"),
        }
    }
}

/// [`TermAlgebra`] over [`Re`].
///
/// Stateless, so a single `ReBuilder` can be shared by any number of threads.
///
/// ```
/// use re_smt_term::{algebra::TermAlgebra, re::ReBuilder};
///
/// let b = ReBuilder;
/// let re = b.mk_re_loop(b.mk_seq_to_re(b.mk_string("ab")), 1, 2);
/// assert!(re.is_match("abab"));
/// assert!(re.is_match("ababab") == false);
/// ```
#[derive(Default, Clone, Copy, Debug)]
pub struct ReBuilder;

impl TermAlgebra for ReBuilder {
    type Str = String;
    type Re = Re;
    type Tagged = Tagged<Re>;

    fn mk_string(&self, s: &str) -> String {
        s.to_owned()
    }

    fn mk_seq_to_re(&self, s: String) -> Re {
        Re::literal(s)
    }

    fn mk_re_range(&self, lo: String, hi: String) -> Re {
        let single = |s: &str| {
            let mut chars = s.chars();
            chars.next().filter(|_| chars.next().is_none())
        };
        match (single(&lo), single(&hi)) {
            (Some(lo), Some(hi)) => Re::range(lo, hi),
            _ => Re::none(),
        }
    }

    fn mk_re_union(&self, a: Re, b: Re) -> Re {
        Re::union(a, b)
    }

    fn mk_re_concat(&self, a: Re, b: Re) -> Re {
        Re::concat(a, b)
    }

    fn mk_re_star(&self, a: Re) -> Re {
        Re::star(a)
    }

    fn mk_re_plus(&self, a: Re) -> Re {
        Re::plus(a)
    }

    fn mk_re_option(&self, a: Re) -> Re {
        Re::opt(a)
    }

    fn mk_re_loop(&self, a: Re, lo: u32, hi: u32) -> Re {
        Re::repeat(a, lo, hi)
    }

    fn mk_re_complement(&self, a: Re) -> Re {
        Re::complement(a)
    }

    fn mk_re_intersect(&self, a: Re, b: Re) -> Re {
        Re::inter(a, b)
    }

    fn simplify(&self, re: Re) -> Re {
        re.simplify()
    }

    fn tag(&self, re: Re, label: &str) -> Tagged<Re> {
        Tagged::new(re, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let re = Re::union(Re::star(Re::range('a', 'z')), Re::literal("x\"y\n"));
        assert_eq!(
            re.to_string(),
            r#"(re.union (re.* (re.range "a" "z")) (str.to_re "x""y\u{a}"))"#
        );

        let re = Re::repeat(Re::complement(Re::none()), 2, 3);
        assert_eq!(re.to_string(), "((_ re.loop 2 3) (re.comp re.none))");

        let re = Re::inter(Re::opt(Re::epsilon()), Re::plus(Re::range('\0', '\t')));
        assert_eq!(
            re.to_string(),
            r#"(re.inter (re.opt (str.to_re "")) (re.+ (re.range "\u{0}" "\u{9}")))"#
        );
    }

    #[test]
    fn nullable() {
        assert!(Re::epsilon().is_nullable());
        assert!(Re::none().is_nullable() == false);
        assert!(Re::star(Re::literal("a")).is_nullable());
        assert!(Re::plus(Re::literal("a")).is_nullable() == false);
        assert!(Re::plus(Re::opt(Re::literal("a"))).is_nullable());
        assert!(Re::complement(Re::literal("a")).is_nullable());
        assert!(Re::complement(Re::star(Re::literal("a"))).is_nullable() == false);
        assert!(Re::repeat(Re::literal("a"), 0, 2).is_nullable());
        assert!(Re::repeat(Re::literal("a"), 1, 2).is_nullable() == false);
        assert!(Re::repeat(Re::literal("a"), 0, 0).is_nullable());
        assert!(Re::repeat(Re::epsilon(), 3, 2).is_nullable() == false);
    }

    #[test]
    fn builder_range() {
        let b = ReBuilder;
        assert_eq!(
            b.mk_re_range(b.mk_string("a"), b.mk_string("z")),
            Re::range('a', 'z')
        );
        assert_eq!(b.mk_re_range(b.mk_string("ab"), b.mk_string("z")), Re::none());
        assert_eq!(b.mk_re_range(b.mk_string(""), b.mk_string("z")), Re::none());
    }

    #[test]
    fn builder_tag() {
        let b = ReBuilder;
        let tagged = b.tag(b.mk_seq_to_re(b.mk_string("a")), "/a/g");
        assert_eq!(tagged.label, "/a/g");
        assert_eq!(tagged.into_term(), Re::literal("a"));
    }
}
