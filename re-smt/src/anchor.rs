/*!
Free text around a pattern that is not anchored with `^` and `$`.

Whether a pattern is anchored is decided only from the raw first and last
characters of the bare pattern. `^` and `$` anywhere else have no effect, and an
escaped `\$` at the end still counts as an anchor.

```
use re_smt::{translate, Anchoring};
use re_smt_term::ReBuilder;

let re = translate(&ReBuilder)
    .anchoring(Anchoring::Surround)
    .call("/abc$/")
    .unwrap()
    .term;
assert!(re.is_match("xxabc"));
assert!(re.is_match("abcxx") == false);
```
*/
use re_smt_term::TermAlgebra;

use crate::syntax::compile::any;

/// How a term is extended on each side of the pattern that is not anchored.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchoring {
    /// Without a leading `^` the term becomes `union(star(Any), term)`, and
    /// without a trailing `$` it becomes `union(star(term), Any)`.
    ///
    /// Unlike [`Anchoring::Surround`], the result also accepts strings that do
    /// not contain a match at all, e.g. `/abc/` accepts `xyz`.
    #[default]
    Union,

    /// `concat(star(Any), term)` and `concat(term, star(Any))`, i.e. the
    /// pattern may match anywhere in a line.
    Surround,

    /// Never extend the term, as if the pattern were always `^...$`.
    Exact,
}

/// Which ends of a bare pattern are anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchors {
    pub start: bool,
    pub end: bool,
}

impl Anchors {
    pub fn of(pattern: &str) -> Self {
        Self {
            start: pattern.starts_with('^'),
            end: pattern.ends_with('$'),
        }
    }
}

impl Anchoring {
    /// Extend the compiled `term` of `pattern` on its unanchored ends.
    pub fn apply<A: TermAlgebra>(self, algebra: &A, pattern: &str, mut term: A::Re) -> A::Re {
        let anchors = Anchors::of(pattern);
        match self {
            Anchoring::Union => {
                if !anchors.start {
                    term = algebra.mk_re_union(algebra.mk_re_star(any(algebra)), term);
                }
                if !anchors.end {
                    term = algebra.mk_re_union(algebra.mk_re_star(term), any(algebra));
                }
            }
            Anchoring::Surround => {
                if !anchors.start {
                    term = algebra.mk_re_concat(algebra.mk_re_star(any(algebra)), term);
                }
                if !anchors.end {
                    term = algebra.mk_re_concat(term, algebra.mk_re_star(any(algebra)));
                }
            }
            Anchoring::Exact => (),
        }
        term
    }
}
