//! A flat view over [`Hir`] that the classifier works on.
//!
//! [`Node::of`] is the only place that looks at [`HirKind`]. Capture groups are
//! transparent and the two text anchors get their own kinds.
use std::borrow::Cow;

use regex_syntax::hir::{Class, Hir, HirKind, Look, Repetition};

/// Character classes larger than this are not treated as literal alternations.
pub const CLASS_LITERALS_LIMIT: usize = 16;

const DIGIT: &[(u8, u8)] = &[(b'0', b'9')];
/// `\t`, `\n`, `\x0C`, `\r` and space.
const WHITESPACE: &[(u8, u8)] = &[(b'\t', b'\n'), (0x0C, b'\r'), (b' ', b' ')];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node<'h> {
    Empty,
    Literal(Cow<'h, [u8]>),
    Class(&'h Class),
    Repetition(&'h Repetition),
    Concat(&'h [Hir]),
    Alternate(&'h [Hir]),
    /// `^` or `\A`
    AnchorBegin,
    /// `$` or `\z`
    AnchorEnd,
    /// Any other look-around assertion, including multi-line anchors.
    Look(Look),
}

impl<'h> Node<'h> {
    pub fn of(hir: &'h Hir) -> Self {
        match hir.kind() {
            HirKind::Empty => Node::Empty,
            HirKind::Literal(literal) => Node::Literal(Cow::Borrowed(&*literal.0)),
            HirKind::Class(class) => Node::Class(class),
            HirKind::Look(Look::Start) => Node::AnchorBegin,
            HirKind::Look(Look::End) => Node::AnchorEnd,
            HirKind::Look(look) => Node::Look(*look),
            HirKind::Repetition(repetition) => Node::Repetition(repetition),
            HirKind::Capture(capture) => Node::of(&capture.sub),
            HirKind::Concat(subs) => Node::Concat(subs),
            HirKind::Alternation(subs) => Node::Alternate(subs),
        }
    }

    /// The node can always match the empty string, i.e. `x*`, `x?` or `x{0,n}`.
    pub fn is_optional(&self) -> bool {
        matches!(self, Node::Repetition(repetition) if repetition.min == 0)
    }

    /// The literals of an alternation whose branches are all literals, or of a
    /// small character class.
    ///
    /// Branch order is kept.
    pub fn literals(&self) -> Option<Vec<Cow<'h, [u8]>>> {
        match *self {
            Node::Alternate(subs) => subs.iter().map(as_literal).collect(),
            Node::Class(class) => class_literals(class),
            _ => None,
        }
    }

    /// `(min, max)` repetition counts if this node is `[0-9]` or a repetition of it.
    ///
    /// A bare class counts as `{1}`.
    pub fn digit_repetition(&self) -> Option<(u32, Option<u32>)> {
        match self {
            Node::Class(class) => class_is(class, DIGIT).then_some((1, Some(1))),
            Node::Repetition(repetition) => match Node::of(&repetition.sub) {
                Node::Class(class) if class_is(class, DIGIT) => {
                    Some((repetition.min, repetition.max))
                }
                _ => None,
            },
            _ => None,
        }
    }

    pub fn is_digit_group(&self) -> bool {
        self.digit_repetition().is_some()
    }

    /// `[\t\n\f\r ]*`
    pub fn is_whitespace_star(&self) -> bool {
        match self {
            Node::Repetition(repetition) if repetition.min == 0 && repetition.max.is_none() => {
                matches!(Node::of(&repetition.sub), Node::Class(class) if class_is(class, WHITESPACE))
            }
            _ => false,
        }
    }
}

/// Flattens `hir` into the sequence of nodes it concatenates.
///
/// Nested concatenations are spliced, adjacent literals merged and empty nodes
/// dropped, so `^(ab)(?:c)$` becomes `[AnchorBegin, Literal("abc"), AnchorEnd]`.
/// Repeated text anchors collapse into one.
pub fn flatten(hir: &Hir) -> Vec<Node<'_>> {
    fn push<'h>(nodes: &mut Vec<Node<'h>>, node: Node<'h>) {
        match node {
            Node::Empty => {}
            Node::Literal(literal) if literal.is_empty() => {}
            Node::Concat(subs) => {
                for sub in subs {
                    push(nodes, Node::of(sub));
                }
            }
            Node::AnchorBegin | Node::AnchorEnd if nodes.last() == Some(&node) => {}
            Node::Literal(literal) => match nodes.last_mut() {
                Some(Node::Literal(prev)) => prev.to_mut().extend_from_slice(&literal),
                _ => nodes.push(Node::Literal(literal)),
            },
            node => nodes.push(node),
        }
    }

    let mut nodes = Vec::new();
    push(&mut nodes, Node::of(hir));
    nodes
}

/// Strips leading and trailing optional nodes.
///
/// Only valid for a whole pattern under unanchored search: `x*y` finds a match
/// exactly when `y` does, and so does `yx*`. An anchor stops the trimming.
pub fn trim<'a, 'h>(mut nodes: &'a [Node<'h>]) -> &'a [Node<'h>] {
    while let [first, rest @ ..] = nodes {
        if !first.is_optional() {
            break;
        }
        nodes = rest;
    }
    while let [rest @ .., last] = nodes {
        if !last.is_optional() {
            break;
        }
        nodes = rest;
    }
    nodes
}

/// The literal `hir` matches, if it is a (possibly empty) literal.
pub fn as_literal(hir: &Hir) -> Option<Cow<'_, [u8]>> {
    let mut nodes = flatten(hir);
    match nodes.len() {
        0 => Some(Cow::Borrowed(&[])),
        1 => match nodes.pop() {
            Some(Node::Literal(literal)) => Some(literal),
            _ => None,
        },
        _ => None,
    }
}

/// Enumerates the members of a class with at most [`CLASS_LITERALS_LIMIT`] members.
///
/// Unicode members are UTF-8 encoded. An empty class, which matches nothing,
/// gives `None`.
pub fn class_literals(class: &Class) -> Option<Vec<Cow<'static, [u8]>>> {
    let mut literals = Vec::new();
    let mut push = |literal: Vec<u8>| {
        if literals.len() == CLASS_LITERALS_LIMIT {
            return false;
        }
        literals.push(Cow::Owned(literal));
        true
    };
    match class {
        Class::Unicode(class) => {
            for range in class.ranges() {
                for c in range.start()..=range.end() {
                    let mut buf = [0; 4];
                    if !push(c.encode_utf8(&mut buf).as_bytes().to_vec()) {
                        return None;
                    }
                }
            }
        }
        Class::Bytes(class) => {
            for range in class.ranges() {
                for b in range.start()..=range.end() {
                    if !push(vec![b]) {
                        return None;
                    }
                }
            }
        }
    }
    (!literals.is_empty()).then_some(literals)
}

/// Whether `class` is exactly the union of the given ASCII `ranges`.
///
/// Class ranges are canonical (sorted and merged), so `ranges` must be too.
fn class_is(class: &Class, ranges: &[(u8, u8)]) -> bool {
    match class {
        Class::Unicode(class) => {
            class.ranges().len() == ranges.len()
                && class.ranges().iter().zip(ranges).all(|(range, &(start, end))| {
                    range.start() == char::from(start) && range.end() == char::from(end)
                })
        }
        Class::Bytes(class) => {
            class.ranges().len() == ranges.len()
                && class
                    .ranges()
                    .iter()
                    .zip(ranges)
                    .all(|(range, &(start, end))| range.start() == start && range.end() == end)
        }
    }
}
