/*!
Compile regular expressions into specialized matchers when their structure allows it.

Most patterns found in configuration files are not really regular expressions:
`^abc$`, `foo|bar`, `^2024-` or `^v\d{4}-\d{2}$` can all be answered with a
plain comparison, a substring search or a few byte checks. `fastmatch`
recognizes these shapes and falls back to the [`regex`](https://docs.rs/regex/)
crate for everything else, so a [`Matcher`] always agrees with
`regex::bytes::Regex::is_match` on the same pattern.

## Features
- Exact literals, substrings, prefixes and their alternations
  - Multiple substrings are searched in one pass with [`aho-corasick`](https://docs.rs/aho-corasick/).
- Numeric dates such as `^v\d{4}-\d{2}$`, checked byte by byte without a regex engine
- Empty and whitespace-only haystacks
- Patterns that match everything
- Arbitrary bytes: matching never requires valid UTF-8

See [`syntax`] for the exact shapes that are specialized.

## Usage
```
use fastmatch::{Matcher, MatcherKind};

let m = Matcher::new("^(a|bb|ccc)$")?;
assert_eq!(m.kind(), MatcherKind::OneOf);
assert!(m.is_match("bb"));
assert!(!m.is_match("abb"));
assert_eq!(m.to_string(), "<one of 'a,bb,ccc'>");

let m = Matcher::builder().exact(true).build("error|warn")?;
assert!(m.is_match_any(["info", "warn"]));
# Ok::<(), fastmatch::BuildError>(())
```

With the `serde` feature, a [`Matcher`] can be deserialized from a pattern string:
```
# #[cfg(feature = "serde")] {
#[derive(serde::Deserialize)]
struct Config {
    include_lines: Vec<fastmatch::Matcher>,
}

let config: Config = serde_json::from_str(r#"{"include_lines": ["^ERR", "warn"]}"#).unwrap();
assert!(config.include_lines[0].is_match("ERROR: disk full"));
# }
```

## Logging
Compilation emits [`tracing`](https://docs.rs/tracing/) `debug` events with
the chosen matcher. Matching emits nothing.
*/
//! ## Performance
//! The following `Cargo.toml` settings are recommended if best performance is desired:
//! ```toml
//! [profile.release]
//! lto = "fat"
//! codegen-units = 1
//! ```
//!
//! ## Crate features
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

pub mod classify;
mod compile;
mod error;
pub mod matcher;
pub mod syntax;

pub use compile::{compile, compile_fallback};
pub use error::BuildError;
pub use matcher::{Matcher, MatcherKind};
