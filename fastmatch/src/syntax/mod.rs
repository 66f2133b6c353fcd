/*!
The syntax accepted by [`Matcher::new`](crate::Matcher::new) is the same as the [`regex`](https://docs.rs/regex/) crate.

The regular expression parser and abstract syntax are exposed in a separate
crate, [`regex-syntax`](https://docs.rs/regex-syntax), which is re-exported here.
Parser options are set with [`Config`] (re-exported from `regex-automata`) and
passed to [`Builder::syntax`](crate::matcher::Builder::syntax).

### Specialized shapes

Only the following shapes are compiled into a specialized matcher. Everything
else is handed to the `regex` crate.

<pre class="rust">
^abc$            exact literal
abc              substring
abc|de|f         any of the substrings
^(abc|de|f)$     one of the literals
^abc.*           prefix (the trailing .* is optional)
^(abc|de).*      any of the prefixes
^v\d{4}-\d{2}$   literal prefix, fixed-size digit groups, literal separators and suffix
^$               empty haystack
^[\t\n\f\r ]*$   whitespace-only haystack
.*               anything, including any pattern that matches the empty string everywhere
</pre>

Capture groups are transparent, so `^(abc)$` is the same shape as `^abc$`.
Small character classes count as literal alternations, because the parser
already folds `a|b|c` into `[a-c]`.

<div class="warning">

Unicode mode is enabled by default, where `\d` is `\p{Nd}`, not `[0-9]`.
Numeric date patterns are only recognized for the ASCII digit class, so either
write `[0-9]`, `(?-u:\d)`, or disable Unicode mode:

```
use fastmatch::{Matcher, MatcherKind, syntax::Config};

let m = Matcher::builder()
    // ASCII is not always valid UTF-8
    .syntax(Config::new().unicode(false).utf8(false))
    .build(r"^v\d{4}-\d{2}$")?;
assert_eq!(m.kind(), MatcherKind::PrefixNumDate);
assert!(m.is_match("v2024-01"));

let m = Matcher::new(r"^v\d{4}-\d{2}$")?;
assert_eq!(m.kind(), MatcherKind::Fallback);
# Ok::<(), fastmatch::BuildError>(())
```
</div>

Whitespace is the exact set `[\t\n\f\r ]`. `\s` also contains `\v` (and much
more in Unicode mode), so `^\s*$` is not specialized.
*/
pub use regex_syntax::*;

pub use regex_automata::util::syntax::{parse_with, Config};

pub mod node;
