//! Membership by Brzozowski derivatives.
//!
//! The derivative of `r` by `c` is the language `{ w | cw ∈ r }`, so
//! `s ∈ r` iff the derivative of `r` by every character of `s` in turn is
//! nullable. Complement and intersection come for free, which is why this is
//! how string solvers evaluate regex membership.
use super::{Re, ReKind};

impl Re {
    /// The derivative by `c`, not simplified.
    pub fn derivative(&self, c: char) -> Re {
        match self.kind() {
            ReKind::None => Re::none(),
            ReKind::Literal(s) => match s.strip_prefix(c) {
                Some(rest) => Re::literal(rest),
                None => Re::none(),
            },
            ReKind::Range(lo, hi) => {
                if (*lo..=*hi).contains(&c) {
                    Re::epsilon()
                } else {
                    Re::none()
                }
            }
            ReKind::Concat(subs) => derivative_concat(subs, c),
            ReKind::Union(subs) => Re::union_all(subs.iter().map(|r| r.derivative(c)).collect()),
            ReKind::Inter(subs) => Re::inter_all(subs.iter().map(|r| r.derivative(c)).collect()),
            ReKind::Complement(sub) => Re::complement(sub.derivative(c)),
            ReKind::Star(sub) | ReKind::Plus(sub) => {
                Re::concat(sub.derivative(c), Re::star(sub.clone()))
            }
            ReKind::Opt(sub) => sub.derivative(c),
            ReKind::Loop { sub, min, max } => {
                if min > max || *max == 0 {
                    Re::none()
                } else {
                    Re::concat(
                        sub.derivative(c),
                        Re::repeat(sub.clone(), min.saturating_sub(1), max - 1),
                    )
                }
            }
        }
    }

    /// Whether the whole of `haystack` is in the language, like SMT-LIB `str.in_re`.
    ///
    /// ```
    /// use re_smt_term::re::Re;
    ///
    /// let any_but_a = Re::inter(Re::range('\0', '\u{ff}'), Re::complement(Re::literal("a")));
    /// assert!(any_but_a.is_match("b"));
    /// assert!(any_but_a.is_match("a") == false);
    /// assert!(any_but_a.is_match("bb") == false);
    /// ```
    pub fn is_match(&self, haystack: &str) -> bool {
        let mut re = self.simplify();
        for c in haystack.chars() {
            if re.is_none() {
                return false;
            }
            re = re.derivative(c).simplify();
        }
        re.is_nullable()
    }
}

fn derivative_concat(subs: &[Re], c: char) -> Re {
    let Some((first, rest)) = subs.split_first() else {
        return Re::none();
    };
    let rest_re = Re::concat_all(rest.to_vec());
    let head = Re::concat(first.derivative(c), rest_re);
    if first.is_nullable() {
        Re::union(head, derivative_concat(rest, c))
    } else {
        head
    }
}
