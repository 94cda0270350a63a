/*!
Lowering of [`Re`] terms to [`regex_syntax`] HIR.

Solver terms can express things a backtracking or automaton regex engine
cannot, namely complement and intersection of arbitrary languages. Those over
single characters (e.g. `re.inter(any, re.comp(class))`, what a negated
character class compiles to) are folded into one HIR class; any other
complement or intersection is a [`LowerError`].

[`Matcher`] runs a lowered term with a `regex-automata` meta regex, with
whole-string semantics like [`Re::is_match`]. It is much faster than
derivatives and is useful for checking a term against many concrete strings.

## Example
```
use re_smt_term::{hir::Matcher, re::Re};

let re = Re::concat(Re::literal("v"), Re::plus(Re::range('0', '9')));
let matcher = Matcher::new(&re).unwrap();
assert!(matcher.is_match("v42"));
assert!(matcher.is_match("v42 ") == false);
```
*/
use regex_automata::meta;
use regex_syntax::hir::{Class, ClassUnicode, ClassUnicodeRange, Hir, Look, Repetition};

use crate::re::{Re, ReKind};

#[derive(Debug, thiserror::Error)]
pub enum LowerError {
    #[error("complement of a multi-character language cannot be lowered: {0}")]
    Complement(String),

    #[error("intersection of multi-character languages cannot be lowered: {0}")]
    Intersection(String),

    #[error(transparent)]
    Build(#[from] meta::BuildError),
}

/// Lower `re` to an HIR matching the same language.
pub fn to_hir(re: &Re) -> Result<Hir, LowerError> {
    if let Some(class) = as_class(re) {
        return Ok(Hir::class(Class::Unicode(class)));
    }
    Ok(match re.kind() {
        ReKind::None => Hir::fail(),
        ReKind::Literal(s) => Hir::literal(s.as_bytes()),
        ReKind::Range(..) => Hir::fail(),
        ReKind::Concat(subs) => Hir::concat(subs.iter().map(to_hir).collect::<Result<_, _>>()?),
        ReKind::Union(subs) => {
            Hir::alternation(subs.iter().map(to_hir).collect::<Result<_, _>>()?)
        }
        ReKind::Inter(_) => return Err(LowerError::Intersection(re.to_string())),
        ReKind::Complement(_) => return Err(LowerError::Complement(re.to_string())),
        ReKind::Star(sub) => repetition(sub, 0, None)?,
        ReKind::Plus(sub) => repetition(sub, 1, None)?,
        ReKind::Opt(sub) => repetition(sub, 0, Some(1))?,
        ReKind::Loop { sub, min, max } => {
            if min > max {
                Hir::fail()
            } else {
                repetition(sub, *min, Some(*max))?
            }
        }
    })
}

fn repetition(sub: &Re, min: u32, max: Option<u32>) -> Result<Hir, LowerError> {
    Ok(Hir::repetition(Repetition {
        min,
        max,
        greedy: true,
        sub: to_hir(sub)?.into(),
    }))
}

/// The set of characters `re` matches, if `re` only matches single characters.
fn as_class(re: &Re) -> Option<ClassUnicode> {
    match re.kind() {
        ReKind::Range(lo, hi) => Some(if lo <= hi {
            ClassUnicode::new([ClassUnicodeRange::new(*lo, *hi)])
        } else {
            ClassUnicode::empty()
        }),
        ReKind::Literal(s) => {
            let mut chars = s.chars();
            let c = chars.next()?;
            chars
                .next()
                .is_none()
                .then(|| ClassUnicode::new([ClassUnicodeRange::new(c, c)]))
        }
        ReKind::Union(subs) => {
            let mut class = ClassUnicode::empty();
            for sub in subs {
                class.union(&as_class(sub)?);
            }
            Some(class)
        }
        ReKind::Inter(subs) => {
            // A complement only contributes characters to exclude; without a
            // positive operand the intersection still has longer strings.
            let mut positive: Option<ClassUnicode> = None;
            let mut excluded = ClassUnicode::empty();
            for sub in subs {
                if let ReKind::Complement(inner) = sub.kind() {
                    excluded.union(&as_class(inner)?);
                } else {
                    let class = as_class(sub)?;
                    positive = Some(match positive.take() {
                        Some(mut p) => {
                            p.intersect(&class);
                            p
                        }
                        None => class,
                    });
                }
            }
            let mut class = positive?;
            class.difference(&excluded);
            Some(class)
        }
        _ => None,
    }
}

/// Whole-string matcher for a lowered term.
#[derive(Clone, Debug)]
pub struct Matcher {
    regex: meta::Regex,
}

impl Matcher {
    pub fn new(re: &Re) -> Result<Self, LowerError> {
        let hir = Hir::concat(vec![
            Hir::look(Look::Start),
            to_hir(re)?,
            Hir::look(Look::End),
        ]);
        let regex = meta::Regex::builder().build_from_hir(&hir)?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any() -> Re {
        Re::union(Re::range('\0', '\t'), Re::range('\u{b}', '\u{ff}'))
    }

    #[test]
    fn negated_class() {
        // [^a-c]
        let re = Re::inter(any(), Re::complement(Re::range('a', 'c')));
        let hir = to_hir(&re).unwrap();
        let expected = Hir::class(Class::Unicode(ClassUnicode::new([
            ClassUnicodeRange::new('\0', '\t'),
            ClassUnicodeRange::new('\u{b}', '`'),
            ClassUnicodeRange::new('d', '\u{ff}'),
        ])));
        assert_eq!(hir, expected);

        let matcher = Matcher::new(&re).unwrap();
        assert!(matcher.is_match("d"));
        assert!(matcher.is_match("b") == false);
        assert!(matcher.is_match("\n") == false);
    }

    #[test]
    fn unsupported() {
        let re = Re::complement(Re::range('0', '9'));
        assert!(matches!(to_hir(&re), Err(LowerError::Complement(_))));

        let re = Re::inter(Re::star(Re::literal("a")), Re::literal("aa"));
        assert!(matches!(to_hir(&re), Err(LowerError::Intersection(_))));

        // No positive operand: not a class
        let re = Re::inter_all(vec![Re::complement(Re::literal("a"))]);
        assert!(matches!(to_hir(&re), Err(LowerError::Intersection(_))));
    }

    #[test]
    fn agrees_with_derivatives() {
        let terms = [
            Re::concat(Re::literal("a"), Re::star(Re::literal("b"))),
            Re::union(Re::star(Re::literal("a")), Re::literal("b")),
            Re::repeat(Re::literal("a"), 2, 3),
            Re::concat_all(vec![Re::star(any()), Re::literal("abc"), Re::star(any())]),
            Re::union(Re::star(Re::union(Re::star(any()), Re::literal("x"))), any()),
            Re::repeat(Re::literal("a"), 3, 2),
            Re::none(),
        ];
        let haystacks = ["", "a", "aa", "aaa", "aaaa", "ab", "abbb", "b", "xabcx", "x\nabc"];
        for re in &terms {
            let matcher = Matcher::new(re).unwrap();
            for h in haystacks {
                assert_eq!(matcher.is_match(h), re.is_match(h), "{re} on {h:?}");
            }
        }
    }
}
