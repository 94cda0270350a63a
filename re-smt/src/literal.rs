//! `/pattern/flags` literals.

/// A literal split into its parts. Both borrow from the literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Literal<'a> {
    /// The bare pattern.
    pub pattern: &'a str,
    /// Everything after the last `/`, e.g. `gi`. Not interpreted.
    pub flags: &'a str,
}

/// Split a literal at its first and last `/`.
///
/// The pattern is the text strictly between them, so a `/` inside the pattern
/// needs no escaping. Text before the first `/` is dropped. Input with fewer than
/// two `/` is a bare pattern without flags.
///
/// ```
/// use re_smt::literal::{split_literal, Literal};
///
/// assert_eq!(split_literal("/a/b/gi"), Literal { pattern: "a/b", flags: "gi" });
/// assert_eq!(split_literal("a+"), Literal { pattern: "a+", flags: "" });
/// ```
pub fn split_literal(literal: &str) -> Literal<'_> {
    match (literal.find('/'), literal.rfind('/')) {
        (Some(first), Some(last)) if first < last => Literal {
            pattern: &literal[first + 1..last],
            flags: &literal[last + 1..],
        },
        _ => Literal {
            pattern: literal,
            flags: "",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(literal: &str) -> &str {
        split_literal(literal).pattern
    }

    #[test]
    fn split() {
        assert_eq!(
            split_literal("/abc/"),
            Literal {
                pattern: "abc",
                flags: ""
            }
        );
        assert_eq!(
            split_literal("/^a.c$/gimsuy"),
            Literal {
                pattern: "^a.c$",
                flags: "gimsuy"
            }
        );
        assert_eq!(pattern("//"), "");
        assert_eq!(pattern("//i"), "");
        assert_eq!(pattern(r"/a\/b/"), r"a\/b");
        assert_eq!(pattern("x/abc/"), "abc");
    }

    #[test]
    fn bare() {
        assert_eq!(pattern(""), "");
        assert_eq!(pattern("abc"), "abc");
        assert_eq!(pattern("/"), "/");
        assert_eq!(pattern("/abc"), "/abc");
        assert_eq!(split_literal("abc/").flags, "");
    }

    #[test]
    fn unicode() {
        assert_eq!(
            split_literal("/é+/ü"),
            Literal {
                pattern: "é+",
                flags: "ü"
            }
        );
    }
}
