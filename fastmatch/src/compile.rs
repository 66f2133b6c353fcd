use regex::bytes::RegexBuilder;
use regex_syntax::hir::Hir;
use tracing::debug;

use crate::{
    classify::{classify, Shape},
    matcher::{AltSubstring, Matcher, PrefixNumDate, Substring},
    syntax::node::Node,
    BuildError,
};

/// Compiles `hir` into the most specific [`Matcher`] that is equivalent to it
/// under unanchored search, falling back to the general regex engine.
///
/// Only the fallback can fail.
///
/// ```
/// use fastmatch::{compile, syntax::parse, MatcherKind};
///
/// let m = compile(&parse("^(foo|bar)$")?)?;
/// assert_eq!(m.kind(), MatcherKind::OneOf);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compile(hir: &Hir) -> Result<Matcher, BuildError> {
    let matcher = match classify(hir) {
        Shape::Equals(literal) => Matcher::Equals(literal.into()),
        Shape::Substring(literal) => Matcher::Substring(Substring::new(&literal)),
        Shape::AltSubstring(literals) => match AltSubstring::new(&literals) {
            Ok(m) => Matcher::AltSubstring(m),
            Err(error) => {
                debug!(%error, "alt substring rejected");
                return compile_fallback(hir);
            }
        },
        Shape::OneOf(literals) => Matcher::OneOf(boxed(literals)),
        Shape::Prefix(literal) => Matcher::Prefix(literal.into()),
        Shape::AltPrefix(literals) => Matcher::AltPrefix(boxed(literals)),
        Shape::PrefixNumDate(nodes) => match num_date(&nodes) {
            Some(m) => Matcher::PrefixNumDate(m),
            None => {
                debug!(?nodes, "num date rejected");
                return compile_fallback(hir);
            }
        },
        Shape::EmptyString => Matcher::EmptyString,
        Shape::EmptyWhitespace => Matcher::EmptyWhitespace,
        Shape::MatchAny => Matcher::MatchAny,
        Shape::Other => return compile_fallback(hir),
    };
    debug!(%matcher, "specialized");
    Ok(matcher)
}

/// Compiles `hir` with the general regex engine only.
pub fn compile_fallback(hir: &Hir) -> Result<Matcher, BuildError> {
    let regex = RegexBuilder::new(&hir.to_string()).build()?;
    debug!(pattern = regex.as_str(), "fallback");
    Ok(Matcher::Fallback(regex))
}

fn boxed(literals: Vec<std::borrow::Cow<'_, [u8]>>) -> Box<[Box<[u8]>]> {
    literals.into_iter().map(Box::from).collect()
}

/// Decomposes `prefix digits (separator digits)* suffix $?`.
///
/// Adjacent digit groups are merged. Every group must have a fixed size.
fn num_date(nodes: &[Node]) -> Option<PrefixNumDate> {
    let (mut nodes, exact) = match nodes {
        [rest @ .., Node::AnchorEnd] => (rest, true),
        _ => (nodes, false),
    };

    let prefix = take_literal(&mut nodes).unwrap_or_default();
    let mut digits = vec![take_digits(&mut nodes)?];
    let mut separators = Vec::new();
    let mut suffix = Vec::new();
    while let Some(literal) = take_literal(&mut nodes) {
        if nodes.is_empty() {
            suffix = literal;
            break;
        }
        separators.push(literal);
        digits.push(take_digits(&mut nodes)?);
    }
    if !nodes.is_empty() {
        return None;
    }

    PrefixNumDate::builder()
        .prefix(prefix)
        .digits(digits)
        .separators(separators)
        .suffix(suffix)
        .exact(exact)
        .build()
}

fn take_literal(nodes: &mut &[Node]) -> Option<Vec<u8>> {
    let current = *nodes;
    let [Node::Literal(literal), rest @ ..] = current else {
        return None;
    };
    *nodes = rest;
    Some(literal.to_vec())
}

/// Total size of the leading run of fixed-size digit groups.
fn take_digits(nodes: &mut &[Node]) -> Option<usize> {
    let mut count = 0usize;
    loop {
        let current = *nodes;
        let [node, rest @ ..] = current else {
            break;
        };
        let Some((min, max)) = node.digit_repetition() else {
            break;
        };
        if max != Some(min) {
            return None;
        }
        count = count.checked_add(usize::try_from(min).ok()?)?;
        *nodes = rest;
    }
    (count > 0).then_some(count)
}
