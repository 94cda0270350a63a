/*!
The seam between a pattern translator and a solver's regex theory.

A host binding (e.g. to Z3 or cvc5) implements [`TermAlgebra`] over its own
native term handles. Translators only ever call these constructors, so they
never need to know how a term is represented.

[`ReBuilder`](crate::re::ReBuilder) is the reference implementation over
[`Re`](crate::re::Re).
*/

/// Constructors of a solver's regular expression terms.
///
/// All constructors are pure builders: they take their operands by value and
/// must not depend on any mutable state of `self`, so a translation can run
/// concurrently with others on the same algebra.
pub trait TermAlgebra {
    /// String literal terms.
    type Str;
    /// Regular expression terms.
    type Re;
    /// A regular expression term annotated with a label, see [`tag`](TermAlgebra::tag).
    type Tagged;

    /// A string literal, i.e. SMT-LIB `"..."`.
    fn mk_string(&self, s: &str) -> Self::Str;

    /// The language containing exactly `s`, i.e. `str.to_re`.
    fn mk_seq_to_re(&self, s: Self::Str) -> Self::Re;

    /// Any single character in `[lo, hi]`, i.e. `re.range`.
    ///
    /// Like SMT-LIB, if either bound is not a single character the language is empty.
    fn mk_re_range(&self, lo: Self::Str, hi: Self::Str) -> Self::Re;

    fn mk_re_union(&self, a: Self::Re, b: Self::Re) -> Self::Re;

    fn mk_re_concat(&self, a: Self::Re, b: Self::Re) -> Self::Re;

    /// `a*`
    fn mk_re_star(&self, a: Self::Re) -> Self::Re;

    /// `a+`
    fn mk_re_plus(&self, a: Self::Re) -> Self::Re;

    /// `a?`
    fn mk_re_option(&self, a: Self::Re) -> Self::Re;

    /// `a{lo,hi}`, i.e. `(_ re.loop lo hi)`.
    fn mk_re_loop(&self, a: Self::Re, lo: u32, hi: u32) -> Self::Re;

    /// All strings (of any length) not in `a`.
    fn mk_re_complement(&self, a: Self::Re) -> Self::Re;

    fn mk_re_intersect(&self, a: Self::Re, b: Self::Re) -> Self::Re;

    /// An equivalent, normalized term.
    fn simplify(&self, re: Self::Re) -> Self::Re;

    /// Attach a debug label to a term. The label has no effect on the language.
    fn tag(&self, re: Self::Re, label: &str) -> Self::Tagged;
}

/// A term together with the label it was [tagged](TermAlgebra::tag) with.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tagged<T> {
    pub label: String,
    pub term: T,
}

impl<T> Tagged<T> {
    pub fn new(term: T, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            term,
        }
    }

    pub fn into_term(self) -> T {
        self.term
    }
}
