//! Lower an [`Ast`] into terms of any [`TermAlgebra`].
//!
//! Characters are limited to the Latin-1 range wherever a class is built from
//! scratch: `.` and negated classes never match anything above `\u{FF}`.
use re_smt_term::TermAlgebra;

use super::ast::{Ast, Class, ClassItem, PerlClass, PerlClassKind, RepetitionKind};

/// Build the term of `ast`. Every sequence of atoms is [simplified](TermAlgebra::simplify)
/// once it has been concatenated.
pub fn compile<A: TermAlgebra>(algebra: &A, ast: &Ast) -> A::Re {
    match ast {
        Ast::Concat(atoms) => {
            let term = atoms
                .iter()
                .map(|atom| compile(algebra, atom))
                .reduce(|acc, term| algebra.mk_re_concat(acc, term))
                .unwrap_or_else(|| epsilon(algebra));
            algebra.simplify(term)
        }
        Ast::Alternation(a, b) => algebra.mk_re_union(compile(algebra, a), compile(algebra, b)),
        Ast::Repetition { kind, sub } => {
            let sub = compile(algebra, sub);
            match *kind {
                RepetitionKind::ZeroOrMore => algebra.mk_re_star(sub),
                RepetitionKind::OneOrMore => algebra.mk_re_plus(sub),
                RepetitionKind::ZeroOrOne => algebra.mk_re_option(sub),
                RepetitionKind::Range { min, max } => algebra.mk_re_loop(sub, min, max),
            }
        }
        Ast::Literal(c) => literal(algebra, *c),
        Ast::Any => any(algebra),
        Ast::Perl(class) => perl(algebra, *class),
        Ast::Class(class) => bracket(algebra, class),
    }
}

/// The language of only the empty string.
pub fn epsilon<A: TermAlgebra>(algebra: &A) -> A::Re {
    algebra.mk_seq_to_re(algebra.mk_string(""))
}

pub fn literal<A: TermAlgebra>(algebra: &A, c: char) -> A::Re {
    let mut buf = [0; 4];
    algebra.mk_seq_to_re(algebra.mk_string(c.encode_utf8(&mut buf)))
}

pub fn range<A: TermAlgebra>(algebra: &A, lo: char, hi: char) -> A::Re {
    let (mut lo_buf, mut hi_buf) = ([0; 4], [0; 4]);
    algebra.mk_re_range(
        algebra.mk_string(lo.encode_utf8(&mut lo_buf)),
        algebra.mk_string(hi.encode_utf8(&mut hi_buf)),
    )
}

/// `.`: any single character in `\x00-\xFF` except `\n`.
pub fn any<A: TermAlgebra>(algebra: &A) -> A::Re {
    algebra.mk_re_union(
        range(algebra, '\0', '\t'),
        range(algebra, '\u{0B}', '\u{FF}'),
    )
}

/// `[0-9]`
pub fn digit<A: TermAlgebra>(algebra: &A) -> A::Re {
    range(algebra, '0', '9')
}

/// `[a-zA-Z0-9_]`
pub fn word<A: TermAlgebra>(algebra: &A) -> A::Re {
    let alpha = algebra.mk_re_union(range(algebra, 'a', 'z'), range(algebra, 'A', 'Z'));
    let alnum = algebra.mk_re_union(alpha, digit(algebra));
    algebra.mk_re_union(alnum, literal(algebra, '_'))
}

/// `[ \t\r\n\f]`. No vertical tab and no Unicode spaces.
pub fn space<A: TermAlgebra>(algebra: &A) -> A::Re {
    let f = algebra.mk_re_union(literal(algebra, '\n'), literal(algebra, '\u{0C}'));
    let r = algebra.mk_re_union(literal(algebra, '\r'), f);
    let t = algebra.mk_re_union(literal(algebra, '\t'), r);
    algebra.mk_re_union(literal(algebra, ' '), t)
}

fn perl<A: TermAlgebra>(algebra: &A, class: PerlClass) -> A::Re {
    let term = match class.kind {
        PerlClassKind::Digit => digit(algebra),
        PerlClassKind::Word => word(algebra),
        PerlClassKind::Space => space(algebra),
    };
    if class.negated {
        algebra.mk_re_complement(term)
    } else {
        term
    }
}

fn bracket<A: TermAlgebra>(algebra: &A, class: &Class) -> A::Re {
    let union = class
        .items
        .iter()
        .map(|item| match *item {
            ClassItem::Char(c) => literal(algebra, c),
            ClassItem::Range(lo, hi) => range(algebra, lo, hi),
        })
        .reduce(|acc, term| algebra.mk_re_union(acc, term))
        // Only reachable from a hand-built `Class`
        .unwrap_or_else(|| {
            algebra.mk_re_intersect(any(algebra), algebra.mk_re_complement(any(algebra)))
        });
    if class.negated {
        // One character of `.` that is not in the class
        algebra.mk_re_intersect(any(algebra), algebra.mk_re_complement(union))
    } else {
        union
    }
}
