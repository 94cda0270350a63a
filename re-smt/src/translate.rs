use bon::builder;
use log::{debug, trace};
use re_smt_term::TermAlgebra;

use crate::{
    anchor::Anchoring,
    error::Result,
    literal::{split_literal, Literal},
    syntax,
};

/// Translate a regular expression literal into a term of `algebra`.
///
/// `literal` is either `/pattern/flags` or a bare pattern, see
/// [`split_literal`]. Flags are ignored. The resulting term is
/// [tagged](TermAlgebra::tag) with the whole `literal`.
///
/// ## Example
/// ```
/// use re_smt::{translate, Anchoring};
/// use re_smt_term::ReBuilder;
///
/// let tagged = translate(&ReBuilder).call("/^a{2,3}$/").unwrap();
/// assert_eq!(tagged.label, "/^a{2,3}$/");
/// assert!(tagged.term.is_match("aaa"));
/// assert!(tagged.term.is_match("aaaa") == false);
///
/// let re = translate(&ReBuilder)
///     .anchoring(Anchoring::Surround)
///     .call(r"/\d+px/")
///     .unwrap()
///     .term;
/// assert!(re.is_match("width: 12px;"));
/// assert!(re.is_match("width: auto;") == false);
/// ```
#[builder]
pub fn translate<A: TermAlgebra>(
    #[builder(start_fn)] algebra: &A,
    #[builder(finish_fn)] literal: &str,
    /// How the unanchored ends of the pattern are extended.
    #[builder(default)]
    anchoring: Anchoring,
) -> Result<A::Tagged> {
    let Literal { pattern, flags } = split_literal(literal);
    debug!("translating {literal:?}");
    if !flags.is_empty() {
        debug!("ignoring flags {flags:?} of {literal:?}");
    }

    let term = compile_pattern(algebra, pattern, anchoring)
        .inspect_err(|e| debug!("failed to translate {literal:?}: {e}"))?;
    Ok(algebra.tag(term, literal))
}

/// Parse, compile and anchor a bare pattern. Unlike [`translate()`], the term is not tagged.
///
/// ```
/// use re_smt::{compile_pattern, Anchoring};
/// use re_smt_term::{Re, ReBuilder};
///
/// let re = compile_pattern(&ReBuilder, "^a.c$", Anchoring::default()).unwrap();
/// assert!(re.is_match("abc"));
/// assert_eq!(
///     compile_pattern(&ReBuilder, "abc", Anchoring::Exact).unwrap(),
///     Re::literal("abc")
/// );
/// ```
pub fn compile_pattern<A: TermAlgebra>(
    algebra: &A,
    pattern: &str,
    anchoring: Anchoring,
) -> Result<A::Re> {
    let ast = syntax::parse(pattern)?;
    trace!("{pattern:?} parsed: {ast:?}");
    let term = syntax::compile(algebra, &ast);
    Ok(anchoring.apply(algebra, pattern, term))
}

#[cfg(test)]
mod tests {
    use re_smt_term::{Re, ReBuilder};

    use super::*;
    use crate::Error;

    fn term(literal: &str) -> Re {
        translate(&ReBuilder).call(literal).unwrap().term
    }

    fn surround(literal: &str) -> Re {
        translate(&ReBuilder)
            .anchoring(Anchoring::Surround)
            .call(literal)
            .unwrap()
            .term
    }

    fn exact(literal: &str) -> Re {
        translate(&ReBuilder)
            .anchoring(Anchoring::Exact)
            .call(literal)
            .unwrap()
            .term
    }

    #[test]
    fn tag() {
        let tagged = translate(&ReBuilder).call("/ab+/gi").unwrap();
        assert_eq!(tagged.label, "/ab+/gi");
        assert_eq!(tagged.term, term("/ab+/"));
        assert_eq!(translate(&ReBuilder).call("ab+").unwrap().label, "ab+");
    }

    #[test]
    fn anchored_is_noop() {
        for anchoring in [Anchoring::Union, Anchoring::Surround, Anchoring::Exact] {
            let re = translate(&ReBuilder)
                .anchoring(anchoring)
                .call("/^a(b|c)*$/")
                .unwrap()
                .term;
            assert_eq!(re, exact("/a(b|c)*/"));
        }
    }

    #[test]
    fn unanchored() {
        let re = term("/abc/");
        assert!(re.is_match("abc"));
        assert!(re.is_match("xxabcxx"));
        assert!(re.is_match("a\nbc") == false);

        let re = term("/^abc$/");
        assert!(re.is_match("abc"));
        assert!(re.is_match("xabc") == false);
        assert!(re.is_match("abcx") == false);

        // Missing leading `^`: any line may precede a match
        let re = term("/abc$/");
        assert!(re.is_match("xyzabc"));
        assert!(re.is_match("xyz\nabc") == false);
        let re = surround("/abc$/");
        assert!(re.is_match("xyzabc"));
        assert!(re.is_match("abcx") == false);
        assert!(re.is_match("xyz") == false);

        let re = surround("/abc/");
        assert!(re.is_match("xxabcxx"));
        assert!(re.is_match("xxabxx") == false);
    }

    #[test]
    fn escaped_dollar_is_anchor() {
        let re = surround(r"/a\$/");
        assert!(re.is_match("xa$"));
        assert!(re.is_match("xa$x") == false);
    }

    #[test]
    fn dot_escape() {
        let re = exact(r"/\./");
        assert!(re.is_match("."));
        assert!(re.is_match("a") == false);
        assert!(re.is_match("") == false);

        let re = surround(r"/^\.$/");
        assert!(re.is_match("."));
        assert!(re.is_match("a") == false);
    }

    #[test]
    fn negated_class() {
        let re = term("/^[^a-c]$/");
        for c in (0..=0xFF_u8).map(char::from) {
            let expected = !matches!(c, 'a'..='c' | '\n');
            assert_eq!(re.is_match(c.encode_utf8(&mut [0; 4])), expected, "{c:?}");
        }
    }

    #[test]
    fn raw_class_members() {
        let re = exact(r"/[\.]x/");
        assert!(re.is_match("\\x"));
        assert!(re.is_match(".x"));
        assert!(re.is_match("ax") == false);

        // Empty ranges compile to the empty language
        let re = exact("/a[z-a]/");
        assert!(re.is_match("a") == false);
        assert!(re.is_match("am") == false);
        let re = exact("/[a-]]/");
        assert!(re.is_match("]") == false);
    }

    #[test]
    fn precedence() {
        // a·b*
        let re = term("/^ab*$/");
        assert!(re.is_match("a"));
        assert!(re.is_match("abbb"));
        assert!(re.is_match("abab") == false);

        // (a*)|b
        let re = term("/^a*|b$/");
        assert!(re.is_match(""));
        assert!(re.is_match("aaa"));
        assert!(re.is_match("b"));
        assert!(re.is_match("ab") == false);
    }

    #[test]
    fn loop_count() {
        let re = term("/^a{2,3}$/");
        assert!(re.is_match("a") == false);
        assert!(re.is_match("aa"));
        assert!(re.is_match("aaa"));
        assert!(re.is_match("aaaa") == false);
    }

    #[test]
    fn bare_pattern() {
        assert_eq!(exact("abc"), Re::literal("abc"));
        assert_eq!(exact("//"), Re::epsilon());
        assert_eq!(exact("/^$/"), Re::epsilon());
    }

    #[test]
    fn errors() {
        let error = |literal: &str| translate(&ReBuilder).call(literal).unwrap_err();
        assert_eq!(error("/(abc/"), Error::UnclosedGroup { at: 0 });
        assert_eq!(error("/a{/"), Error::ExpectedLoopCount { at: 2 });
        assert_eq!(error("/a||b/"), Error::ExpectedAtom { at: 2 });
        assert_eq!(error("/a|/"), Error::ExpectedAtom { at: 2 });
        assert_eq!(error("/*a/"), Error::NothingToRepeat { at: 0 });
        assert_eq!(error("/a)/"), Error::UnmatchedParen { at: 1 });
        assert_eq!(error("/[a/"), Error::UnclosedClass { at: 0 });
        assert_eq!(error("/[a-]/"), Error::UnclosedClass { at: 0 });
        assert_eq!(error("/a{2,}/"), Error::ExpectedLoopCount { at: 4 });
        assert_eq!(error("/a{2/"), Error::UnclosedLoop { at: 1 });
        assert_eq!(error(r"/a\/"), Error::DanglingEscape { at: 1 });
    }

    #[cfg(feature = "hir")]
    #[test]
    fn hir_agrees() {
        use re_smt_term::hir::Matcher;

        let haystacks = ["", "a", "abc", "xxabcxx", "a1_", "12px", "a\nb", "é", "-"];
        for literal in [
            "/abc/",
            "/^abc$/",
            "/^[^a-c]+$/",
            r"/^\w+$/",
            r"/^\d+((px)|(em))$/",
            "/^a{2,3}|b$/",
            "/^(ab)?.$/",
        ] {
            let re = term(literal);
            let matcher = Matcher::new(&re).unwrap();
            for haystack in haystacks {
                assert_eq!(
                    matcher.is_match(haystack),
                    re.is_match(haystack),
                    "{literal} {haystack:?}"
                );
            }
        }
    }
}
