/*!
The specialized matchers.

A [`Matcher`] answers one question: does the pattern match anywhere in the
haystack? It is built once from a pattern and then shared freely, since
matching never mutates it.

```
use fastmatch::{Matcher, MatcherKind};

let m = Matcher::new("^2024-")?;
assert_eq!(m.kind(), MatcherKind::Prefix);
assert!(m.is_match("2024-01-31"));
assert!(!m.is_match("x2024-01-31"));
assert_eq!(m.to_string(), "<prefix string '2024-'>");
# Ok::<(), fastmatch::BuildError>(())
```
*/
use std::{fmt, str::FromStr};

use bon::bon;
use itertools::Itertools;
use regex_syntax::hir::{Hir, Look};

use crate::{compile, compile_fallback, syntax, BuildError};

mod literal;
mod numdate;

pub use literal::{AltSubstring, Substring};
pub use numdate::{PrefixNumDate, PrefixNumDateBuilder};

/// A compiled pattern.
///
/// Every variant answers [`is_match`](Self::is_match) exactly as
/// `regex::bytes::Regex::is_match` would for the same pattern.
///
/// # Synchronization and cloning
///
/// A `Matcher` is immutable, `Send` and `Sync`. Cloning copies the literals
/// and automata; wrap it in an `Arc` to share one instance.
#[derive(Clone, Debug)]
pub enum Matcher {
    /// The whole haystack equals the literal.
    Equals(Box<[u8]>),
    /// The literal occurs anywhere.
    Substring(Substring),
    /// Any of the literals occurs anywhere.
    AltSubstring(AltSubstring),
    /// The whole haystack equals one of the literals.
    OneOf(Box<[Box<[u8]>]>),
    /// The haystack starts with the literal.
    Prefix(Box<[u8]>),
    /// The haystack starts with any of the literals.
    AltPrefix(Box<[Box<[u8]>]>),
    PrefixNumDate(PrefixNumDate),
    /// The haystack is empty.
    EmptyString,
    /// The haystack is empty or only `[\t\n\f\r ]`.
    EmptyWhitespace,
    /// Matches every haystack.
    MatchAny,
    /// The general regex engine.
    Fallback(regex::bytes::Regex),
}

/// The variant of a [`Matcher`], without its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatcherKind {
    Equals,
    Substring,
    AltSubstring,
    OneOf,
    Prefix,
    AltPrefix,
    PrefixNumDate,
    EmptyString,
    EmptyWhitespace,
    MatchAny,
    Fallback,
}

#[bon]
impl Matcher {
    /// Parses `pattern` with the default syntax and compiles it.
    ///
    /// Shorthand for `Matcher::builder().build(pattern)`.
    pub fn new(pattern: &str) -> Result<Self, BuildError> {
        Self::builder().build(pattern)
    }

    /// Return a builder for configuring the construction of a `Matcher`.
    ///
    /// # Example: whole-haystack match
    ///
    /// ```
    /// use fastmatch::{Matcher, MatcherKind};
    ///
    /// let m = Matcher::builder().exact(true).build("a|bb|ccc")?;
    /// assert_eq!(m.kind(), MatcherKind::OneOf);
    /// assert!(m.is_match("bb"));
    /// assert!(!m.is_match("abb"));
    /// # Ok::<(), fastmatch::BuildError>(())
    /// ```
    #[builder(builder_type = Builder, finish_fn(name = build_from_hir, doc {
    /// Builds a `Matcher` directly from an `Hir` expression.
    ///
    /// Any options set via [`Builder::syntax`] are ignored, since they only
    /// apply when parsing a pattern string.
    ///
    /// # Example
    ///
    /// ```
    /// use fastmatch::{Matcher, MatcherKind, syntax::hir::{Hir, Look}};
    ///
    /// // ^foo$
    /// let hir = Hir::concat(vec![
    ///     Hir::look(Look::Start),
    ///     Hir::literal("foo".as_bytes()),
    ///     Hir::look(Look::End),
    /// ]);
    /// let m = Matcher::builder().build_from_hir(hir)?;
    /// assert_eq!(m.kind(), MatcherKind::Equals);
    /// assert!(m.is_match("foo"));
    /// assert!(!m.is_match("foo\n"));
    /// # Ok::<(), fastmatch::BuildError>(())
    /// ```
    }))]
    pub fn builder(
        #[builder(field)] syntax: syntax::Config,
        #[builder(finish_fn)] hir: Hir,
        /// Match the whole haystack, as if the pattern were `^(?:pattern)$`.
        #[builder(default)]
        exact: bool,
        /// Set to `false` to always use the general regex engine.
        #[builder(default = true)]
        specialize: bool,
    ) -> Result<Self, BuildError> {
        _ = syntax;

        let hir = if exact {
            Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)])
        } else {
            hir
        };
        if specialize {
            compile(&hir)
        } else {
            compile_fallback(&hir)
        }
    }
}

impl<S: builder::State> Builder<S> {
    /// Configure the syntax options when parsing a pattern string while
    /// building a `Matcher`.
    ///
    /// These options _only_ apply when [`Builder::build`] is used.
    ///
    /// # Example
    ///
    /// ```
    /// use fastmatch::{Matcher, MatcherKind, syntax::Config};
    ///
    /// let m = Matcher::builder()
    ///     .syntax(Config::new().case_insensitive(true))
    ///     .build("abc")?;
    /// assert_eq!(m.kind(), MatcherKind::Fallback);
    /// assert!(m.is_match("xABCx"));
    /// # Ok::<(), fastmatch::BuildError>(())
    /// ```
    pub fn syntax(mut self, syntax: syntax::Config) -> Self {
        self.syntax = syntax;
        self
    }

    /// Builds a `Matcher` from a pattern string.
    ///
    /// If there was a problem parsing the pattern or a problem building the
    /// general regex engine for it, then an error is returned.
    pub fn build(self, pattern: &str) -> Result<Matcher, BuildError>
    where
        S: builder::IsComplete,
    {
        let hir = syntax::parse_with(pattern, &self.syntax)?;
        self.build_from_hir(hir)
    }
}

impl Matcher {
    #[inline]
    pub fn is_match_bytes(&self, haystack: &[u8]) -> bool {
        match self {
            Matcher::Equals(literal) => haystack == &**literal,
            Matcher::Substring(m) => m.is_match(haystack),
            Matcher::AltSubstring(m) => m.is_match(haystack),
            Matcher::OneOf(literals) => literals.iter().any(|literal| haystack == &**literal),
            Matcher::Prefix(literal) => haystack.starts_with(literal),
            Matcher::AltPrefix(literals) => {
                literals.iter().any(|literal| haystack.starts_with(literal))
            }
            Matcher::PrefixNumDate(m) => m.is_match(haystack),
            Matcher::EmptyString => haystack.is_empty(),
            Matcher::EmptyWhitespace => haystack
                .iter()
                .all(|b| matches!(b, b'\t' | b'\n' | 0x0C | b'\r' | b' ')),
            Matcher::MatchAny => true,
            Matcher::Fallback(regex) => regex.is_match(haystack),
        }
    }

    #[inline]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.is_match_bytes(haystack.as_bytes())
    }

    /// Whether any of `haystacks` matches. `false` if there are none.
    pub fn is_match_any<'h>(&self, haystacks: impl IntoIterator<Item = &'h str>) -> bool {
        haystacks.into_iter().any(|haystack| self.is_match(haystack))
    }

    /// Whether all of `haystacks` match. `true` if there are none.
    pub fn is_match_all<'h>(&self, haystacks: impl IntoIterator<Item = &'h str>) -> bool {
        haystacks.into_iter().all(|haystack| self.is_match(haystack))
    }

    pub fn kind(&self) -> MatcherKind {
        match self {
            Matcher::Equals(_) => MatcherKind::Equals,
            Matcher::Substring(_) => MatcherKind::Substring,
            Matcher::AltSubstring(_) => MatcherKind::AltSubstring,
            Matcher::OneOf(_) => MatcherKind::OneOf,
            Matcher::Prefix(_) => MatcherKind::Prefix,
            Matcher::AltPrefix(_) => MatcherKind::AltPrefix,
            Matcher::PrefixNumDate(_) => MatcherKind::PrefixNumDate,
            Matcher::EmptyString => MatcherKind::EmptyString,
            Matcher::EmptyWhitespace => MatcherKind::EmptyWhitespace,
            Matcher::MatchAny => MatcherKind::MatchAny,
            Matcher::Fallback(_) => MatcherKind::Fallback,
        }
    }

    /// `false` only for [`Matcher::Fallback`].
    pub fn is_specialized(&self) -> bool {
        !matches!(self, Matcher::Fallback(_))
    }
}

impl FromStr for Matcher {
    type Err = BuildError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Matcher::new(pattern)
    }
}

/// `<kind 'data'>`, e.g. `<alt substring 'foo,bar'>` or `<regex '(?:a.*b)'>`.
///
/// Bytes that are not UTF-8 are shown as U+FFFD.
impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn lossy(literal: &[u8]) -> std::borrow::Cow<'_, str> {
            String::from_utf8_lossy(literal)
        }
        fn join(literals: &[Box<[u8]>]) -> String {
            literals.iter().map(|literal| lossy(literal)).join(",")
        }

        match self {
            Matcher::Equals(literal) => write!(f, "<string '{}'>", lossy(literal)),
            Matcher::Substring(m) => write!(f, "<substring '{}'>", lossy(m.literal())),
            Matcher::AltSubstring(m) => write!(f, "<alt substring '{}'>", join(m.literals())),
            Matcher::OneOf(literals) => write!(f, "<one of '{}'>", join(literals)),
            Matcher::Prefix(literal) => write!(f, "<prefix string '{}'>", lossy(literal)),
            Matcher::AltPrefix(literals) => write!(f, "<alt prefix string '{}'>", join(literals)),
            Matcher::PrefixNumDate(m) => write!(f, "<prefix num date '{m}'>"),
            Matcher::EmptyString => f.write_str("<empty>"),
            Matcher::EmptyWhitespace => f.write_str("<empty whitespace>"),
            Matcher::MatchAny => f.write_str("<any>"),
            Matcher::Fallback(regex) => write!(f, "<regex '{}'>", regex.as_str()),
        }
    }
}

/// Deserializes from a pattern string, parsed with the default syntax.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Matcher {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let pattern = String::deserialize(deserializer)?;
        Matcher::new(&pattern).map_err(serde::de::Error::custom)
    }
}
