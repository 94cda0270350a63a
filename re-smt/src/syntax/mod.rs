/*!
The pattern syntax, documented below. It is a small subset of JavaScript regular expressions.

Patterns are parsed into an [`Ast`] by [`parse`] and then lowered into terms of
any [`TermAlgebra`](re_smt_term::TermAlgebra) by [`compile`]. Most users want
[`translate`](crate::translate) instead, which also handles the `/.../` delimiters
and anchoring.

### Matching one character

<pre class="rust">
x             the character x, including any non-ASCII character
.             any character in \x00-\xFF except new line
[xyz]         either x, y or z
[^xyz]        any character of . except x, y and z
[a-z]         any character in range a-z
\d            digit ([0-9])
\w            word character ([a-zA-Z0-9_])
\s            whitespace ([ \t\r\n\f])
\D \W \S      anything but \d, \w and \s respectively
</pre>

<div class="warning">

`\D`, `\W` and `\S` are complements over all strings, not over single characters:
`\D` also matches the empty string and `12`. Use `[^0-9]` for one non-digit character.
</div>

### Escapes

<pre class="rust">
\n \r \t \0   new line, carriage return, tab and NUL
\x            the character x for any other x, e.g. \. \* \\ \/
</pre>

Members of character classes are raw characters, there are no escapes in classes:
- `\` and all other metacharacters are members, including `.`, `*`, `|`, `(` and `^` (unless it comes first).
  So `[\.]` is either `\` or `.`, and `[\d]` is either `\` or `d`.
- A `-` after a member always takes the next character as the end of a range, even `]`.
  `[a-]]` is the range `a-]`, and `[a-]` is an [unclosed class](crate::Error::UnclosedClass).
- A range whose start is after its end, e.g. `[z-a]`, matches nothing.
- `]` ends the class unless it ends a range, so `[\]]` is `\` followed by `]`. `[]` and `[^]` are errors.
- A `)` where a member is expected is an [unclosed class](crate::Error::UnclosedClass) error.

### Composites

<pre class="rust">
xy    concatenation (x followed by y)
x|y   alternation (x or y)
</pre>

<div class="warning">

Alternation binds tighter than concatenation: its operands are single (possibly repeated) atoms.
So `ab|cd` is `a(b|c)d`, and `(ab)|(cd)` must be used to match either `ab` or `cd`.
`a|b|c` is `a|(b|c)`.
</div>

### Repetitions

<pre class="rust">
x*        zero or more of x
x+        one or more of x
x?        zero or one of x
x{n,m}    at least n x and at most m x
x{n}      exactly n x
</pre>

There are no lazy repetitions and `x{n,}` is not supported.

### Grouping

<pre class="rust">
(exp)     group, used only for precedence
</pre>

### Anchors

`^` and `$` may appear anywhere and are otherwise ignored. Whether a pattern is
anchored is decided only from its first and last characters, see [`crate::anchor`].

### Example
```
use re_smt::syntax::{compile, parse};
use re_smt_term::ReBuilder;

let re = compile(&ReBuilder, &parse(r"\d+((px)|(em))").unwrap());
assert!(re.is_match("12px"));
assert!(re.is_match("12em"));
assert!(re.is_match("12") == false);

// Alternation binds single atoms
let re = compile(&ReBuilder, &parse("ab|cd").unwrap());
assert!(re.is_match("acd"));
assert!(re.is_match("ab") == false);
```
*/
mod ast;
pub mod compile;
mod cursor;
mod parser;
mod token;

pub use ast::*;
pub use compile::compile;
pub use parser::parse;
