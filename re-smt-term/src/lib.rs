//! Regular expression terms in the vocabulary of SMT string theories.
/*!
## Features
- [`TermAlgebra`](algebra::TermAlgebra): the constructors a pattern translator needs from a solver binding
- A reference algebra, [`Re`](re::Re):
  - [Simplification](re::Re::simplify)
  - [Membership](re::Re::is_match) by derivatives, including complement and intersection
  - SMT-LIB 2.6 printing
- [Lowering to `regex-syntax` HIR](hir) and fast matching with `regex-automata`

## Example
```
use re_smt_term::{algebra::TermAlgebra, re::ReBuilder};

let b = ReBuilder;
let digit = b.mk_re_range(b.mk_string("0"), b.mk_string("9"));
let re = b.mk_re_concat(b.mk_re_plus(digit), b.mk_seq_to_re(b.mk_string("px")));
assert!(re.is_match("12px"));
println!("{re}"); // (re.++ (re.+ (re.range "0" "9")) (str.to_re "px"))
```

## Crate features
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]
pub mod algebra;
#[cfg(feature = "hir")]
pub mod hir;
pub mod re;

pub use algebra::{Tagged, TermAlgebra};
pub use re::{Re, ReBuilder};
