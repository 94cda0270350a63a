/*!
Translate JavaScript-style regular expression literals into the regex terms of an SMT solver's string theory.

A literal like `/^a[0-9]+$/` becomes a term built only from the constructors of a
[`TermAlgebra`](re_smt_term::TermAlgebra), e.g. `re.++`, `re.union`, `re.range`
and `re.loop`. Any solver binding can implement the algebra, and
[`ReBuilder`](re_smt_term::ReBuilder) is a reference implementation that can
print SMT-LIB and match strings on its own.

## Features
- [Pattern syntax](syntax): literals, `.`, `\d` `\w` `\s` and their negations, character classes, `* + ? {n} {n,m}`, alternation and groups
  - Precedence follows the translated dialect rather than ECMAScript: `ab|cd` is `a(b|c)d`.
- [Anchoring](anchor) inferred from a leading `^` and a trailing `$`, with [selectable extension](Anchoring) of unanchored ends
- Errors with [byte offsets](Error::offset), no partial terms
- Generic over the term algebra, no solver dependency
*/
//! ## Usage
//! ```
//! // cargo add re-smt re-smt-term
//! use re_smt::translate;
//! use re_smt_term::ReBuilder;
//!
//! let tagged = translate(&ReBuilder).call("/^[a-c]+x?$/").unwrap();
//! assert!(tagged.term.is_match("abcx"));
//! assert!(tagged.term.is_match("abcd") == false);
//! println!("{}: {}", tagged.label, tagged.term);
//! ```
//! With a solver binding, implement [`TermAlgebra`](re_smt_term::TermAlgebra) over its term handles and pass it instead:
//! ```
//! use re_smt::{translate, Anchoring};
//! use re_smt_term::{Tagged, TermAlgebra};
//!
//! /// Prints terms as SMT-LIB text, like a minimal solver binding would.
//! struct Printer;
//!
//! impl TermAlgebra for Printer {
//!     type Str = String;
//!     type Re = String;
//!     type Tagged = Tagged<String>;
//!
//!     fn mk_string(&self, s: &str) -> String {
//!         format!("{s:?}")
//!     }
//!     fn mk_seq_to_re(&self, s: String) -> String {
//!         format!("(str.to_re {s})")
//!     }
//!     fn mk_re_range(&self, lo: String, hi: String) -> String {
//!         format!("(re.range {lo} {hi})")
//!     }
//!     fn mk_re_union(&self, a: String, b: String) -> String {
//!         format!("(re.union {a} {b})")
//!     }
//!     fn mk_re_concat(&self, a: String, b: String) -> String {
//!         format!("(re.++ {a} {b})")
//!     }
//!     fn mk_re_star(&self, a: String) -> String {
//!         format!("(re.* {a})")
//!     }
//!     fn mk_re_plus(&self, a: String) -> String {
//!         format!("(re.+ {a})")
//!     }
//!     fn mk_re_option(&self, a: String) -> String {
//!         format!("(re.opt {a})")
//!     }
//!     fn mk_re_loop(&self, a: String, lo: u32, hi: u32) -> String {
//!         format!("((_ re.loop {lo} {hi}) {a})")
//!     }
//!     fn mk_re_complement(&self, a: String) -> String {
//!         format!("(re.comp {a})")
//!     }
//!     fn mk_re_intersect(&self, a: String, b: String) -> String {
//!         format!("(re.inter {a} {b})")
//!     }
//!     fn simplify(&self, re: String) -> String {
//!         re
//!     }
//!     fn tag(&self, re: String, label: &str) -> Tagged<String> {
//!         Tagged::new(re, label)
//!     }
//! }
//!
//! let tagged = translate(&Printer).anchoring(Anchoring::Exact).call("/ab*/").unwrap();
//! assert_eq!(
//!     tagged.term,
//!     r#"(re.++ (str.to_re "a") (re.* (str.to_re "b")))"#
//! );
//! ```
//!
//! ## Logging
//! Translations are logged with the [`log`](https://docs.rs/log/) facade: `debug` for each literal,
//! its ignored flags and failures, and `trace` for parsed patterns.
//!
//! ## Crate features
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

pub mod anchor;
pub mod error;
pub mod literal;
pub mod syntax;
mod translate;

pub use anchor::Anchoring;
pub use error::{Error, Result};
pub use re_smt_term as term;
pub use translate::*;
