//! Normalization of [`Re`] terms.
//!
//! The rewrites only rely on language equalities, so `re.simplify()` always
//! denotes the same language as `re`. Union and intersection operands are
//! sorted and deduplicated, which also keeps the number of distinct
//! derivatives of a term finite.
use super::{Re, ReKind};

impl Re {
    /// An equivalent term in normal form.
    ///
    /// ```
    /// use re_smt_term::re::Re;
    ///
    /// let re = Re::concat(
    ///     Re::concat(Re::literal("a"), Re::epsilon()),
    ///     Re::union(Re::literal("b"), Re::none()),
    /// );
    /// assert_eq!(re.simplify(), Re::literal("ab"));
    /// ```
    pub fn simplify(&self) -> Re {
        match self.kind() {
            ReKind::None | ReKind::Literal(_) => self.clone(),
            ReKind::Range(lo, hi) => {
                if lo > hi {
                    Re::none()
                } else {
                    self.clone()
                }
            }
            ReKind::Concat(subs) => simplify_concat(subs),
            ReKind::Union(subs) => simplify_union(subs),
            ReKind::Inter(subs) => simplify_inter(subs),
            ReKind::Complement(sub) => {
                let sub = sub.simplify();
                match sub.kind() {
                    ReKind::Complement(inner) => inner.clone(),
                    _ => Re::complement(sub),
                }
            }
            ReKind::Star(sub) => {
                let sub = sub.simplify();
                match sub.kind() {
                    ReKind::None => Re::epsilon(),
                    ReKind::Literal(s) if s.is_empty() => Re::epsilon(),
                    ReKind::Star(_) => sub,
                    ReKind::Plus(inner) | ReKind::Opt(inner) => Re::star(inner.clone()),
                    _ => Re::star(sub),
                }
            }
            ReKind::Plus(sub) => {
                let sub = sub.simplify();
                match sub.kind() {
                    ReKind::None => Re::none(),
                    ReKind::Literal(s) if s.is_empty() => Re::epsilon(),
                    ReKind::Star(_) | ReKind::Plus(_) => sub,
                    ReKind::Opt(inner) => Re::star(inner.clone()),
                    _ => Re::plus(sub),
                }
            }
            ReKind::Opt(sub) => {
                let sub = sub.simplify();
                match sub.kind() {
                    ReKind::None => Re::epsilon(),
                    ReKind::Literal(s) if s.is_empty() => Re::epsilon(),
                    ReKind::Star(_) | ReKind::Opt(_) => sub,
                    ReKind::Plus(inner) => Re::star(inner.clone()),
                    _ => Re::opt(sub),
                }
            }
            ReKind::Loop { sub, min, max } => {
                let (min, max) = (*min, *max);
                let sub = sub.simplify();
                if min > max {
                    Re::none()
                } else if max == 0 || sub.is_epsilon() {
                    Re::epsilon()
                } else if sub.is_none() {
                    if min == 0 {
                        Re::epsilon()
                    } else {
                        Re::none()
                    }
                } else if min == 1 && max == 1 {
                    sub
                } else {
                    Re::repeat(sub, min, max)
                }
            }
        }
    }
}

fn simplify_concat(subs: &[Re]) -> Re {
    fn flatten(subs: &[Re], out: &mut Vec<Re>) -> bool {
        for sub in subs {
            let sub = sub.simplify();
            match sub.kind() {
                ReKind::None => return false,
                ReKind::Concat(inner) => {
                    if !flatten(inner, out) {
                        return false;
                    }
                }
                ReKind::Literal(s) => {
                    if s.is_empty() {
                        continue;
                    }
                    // Merge adjacent literals
                    if let Some(last) = out.last_mut() {
                        if let ReKind::Literal(prev) = last.kind() {
                            *last = Re::literal(format!("{prev}{s}"));
                            continue;
                        }
                    }
                    out.push(sub);
                }
                _ => out.push(sub),
            }
        }
        true
    }

    let mut out = Vec::with_capacity(subs.len());
    if !flatten(subs, &mut out) {
        return Re::none();
    }
    match out.len() {
        0 => Re::epsilon(),
        1 => out.swap_remove(0),
        _ => Re::concat_all(out),
    }
}

fn simplify_union(subs: &[Re]) -> Re {
    fn flatten(subs: &[Re], out: &mut Vec<Re>) {
        for sub in subs {
            let sub = sub.simplify();
            match sub.kind() {
                ReKind::None => (),
                ReKind::Union(inner) => out.extend(inner.iter().cloned()),
                _ => out.push(sub),
            }
        }
    }

    let mut out = Vec::with_capacity(subs.len());
    flatten(subs, &mut out);
    out.sort();
    out.dedup();
    match out.len() {
        0 => Re::none(),
        1 => out.swap_remove(0),
        _ => Re::union_all(out),
    }
}

fn simplify_inter(subs: &[Re]) -> Re {
    let mut out = Vec::with_capacity(subs.len());
    for sub in subs {
        let sub = sub.simplify();
        match sub.kind() {
            ReKind::None => return Re::none(),
            ReKind::Inter(inner) => out.extend(inner.iter().cloned()),
            _ => out.push(sub),
        }
    }
    out.sort();
    out.dedup();
    match out.len() {
        // The intersection of nothing is every string
        0 => Re::complement(Re::none()),
        1 => out.swap_remove(0),
        _ => Re::inter_all(out),
    }
}
