//! Structural classification of a pattern.
//!
//! [`classify`] runs a fixed list of predicates over the flattened top-level
//! nodes of a pattern and returns the first shape that matches. Stricter
//! shapes come first, because shapes overlap: an anchored literal is also a
//! literal.
use std::borrow::Cow;

use regex_syntax::hir::Hir;

use crate::syntax::node::{flatten, trim, Node};

/// The shape of a whole pattern, as far as specialization is concerned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape<'h> {
    /// `^abc$`
    Equals(Cow<'h, [u8]>),
    /// `abc`
    Substring(Cow<'h, [u8]>),
    /// `abc|de`
    AltSubstring(Vec<Cow<'h, [u8]>>),
    /// `^(abc|de)$`
    OneOf(Vec<Cow<'h, [u8]>>),
    /// `^abc.*`
    Prefix(Cow<'h, [u8]>),
    /// `^(abc|de).*`
    AltPrefix(Vec<Cow<'h, [u8]>>),
    /// `^v\d{4}-\d{2}$`
    ///
    /// Holds the nodes after the begin anchor. They look like literals and digit
    /// groups, but are not yet proven to decompose into a numeric date, e.g.
    /// `^\d+-\d{2}` is classified here.
    PrefixNumDate(Vec<Node<'h>>),
    /// `^$`
    EmptyString,
    /// `^[\t\n\f\r ]*$`
    EmptyWhitespace,
    /// `.*`
    MatchAny,
    /// Needs the general regex engine.
    Other,
}

type Predicate = for<'a, 'h> fn(&'a [Node<'h>]) -> Option<Shape<'h>>;

const PREDICATES: &[Predicate] = &[
    exact_literal,
    bare_literal,
    alt_literals,
    one_of_literals,
    prefix_literal,
    prefix_alt_literals,
    prefix_num_date,
    empty_text,
    empty_whitespace,
    any_match,
];

/// Classifies `hir` as a whole pattern under unanchored search.
///
/// ```
/// use fastmatch::{classify::{classify, Shape}, syntax::parse};
///
/// let hir = parse("^(foo|bar)$").unwrap();
/// assert!(matches!(classify(&hir), Shape::OneOf(literals) if literals == [&b"foo"[..], b"bar"]));
/// ```
pub fn classify(hir: &Hir) -> Shape<'_> {
    let nodes = flatten(hir);
    let nodes = trim(&nodes);
    PREDICATES
        .iter()
        .find_map(|predicate| predicate(nodes))
        .unwrap_or(Shape::Other)
}

fn exact_literal<'h>(nodes: &[Node<'h>]) -> Option<Shape<'h>> {
    match nodes {
        [Node::AnchorBegin, Node::Literal(literal), Node::AnchorEnd] => {
            Some(Shape::Equals(literal.clone()))
        }
        _ => None,
    }
}

fn bare_literal<'h>(nodes: &[Node<'h>]) -> Option<Shape<'h>> {
    match nodes {
        [Node::Literal(literal)] => Some(Shape::Substring(literal.clone())),
        _ => None,
    }
}

fn alt_literals<'h>(nodes: &[Node<'h>]) -> Option<Shape<'h>> {
    match nodes {
        [node] => node.literals().map(Shape::AltSubstring),
        _ => None,
    }
}

fn one_of_literals<'h>(nodes: &[Node<'h>]) -> Option<Shape<'h>> {
    match nodes {
        [Node::AnchorBegin, node, Node::AnchorEnd] => node.literals().map(Shape::OneOf),
        _ => None,
    }
}

fn prefix_literal<'h>(nodes: &[Node<'h>]) -> Option<Shape<'h>> {
    match nodes {
        [Node::AnchorBegin, Node::Literal(literal)] => Some(Shape::Prefix(literal.clone())),
        _ => None,
    }
}

fn prefix_alt_literals<'h>(nodes: &[Node<'h>]) -> Option<Shape<'h>> {
    match nodes {
        [Node::AnchorBegin, node] => node.literals().map(Shape::AltPrefix),
        _ => None,
    }
}

fn prefix_num_date<'h>(nodes: &[Node<'h>]) -> Option<Shape<'h>> {
    let [Node::AnchorBegin, rest @ ..] = nodes else {
        return None;
    };
    let last = rest.len().checked_sub(1)?;
    let loose = rest.iter().enumerate().all(|(i, node)| match node {
        Node::Literal(_) => true,
        Node::AnchorEnd => i == last,
        node => node.is_digit_group(),
    });
    (loose && rest.iter().any(Node::is_digit_group)).then(|| Shape::PrefixNumDate(rest.to_vec()))
}

fn empty_text<'h>(nodes: &[Node<'h>]) -> Option<Shape<'h>> {
    matches!(nodes, [Node::AnchorBegin, Node::AnchorEnd]).then_some(Shape::EmptyString)
}

fn empty_whitespace<'h>(nodes: &[Node<'h>]) -> Option<Shape<'h>> {
    match nodes {
        [Node::AnchorBegin, node, Node::AnchorEnd] if node.is_whitespace_star() => {
            Some(Shape::EmptyWhitespace)
        }
        _ => None,
    }
}

/// The pattern matches the empty string at some position of every haystack.
fn any_match<'h>(nodes: &[Node<'h>]) -> Option<Shape<'h>> {
    matches!(nodes, [] | [Node::AnchorBegin] | [Node::AnchorEnd]).then_some(Shape::MatchAny)
}
