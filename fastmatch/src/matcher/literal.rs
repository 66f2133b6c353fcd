use aho_corasick::AhoCorasick;
use memchr::memmem;

/// Finds a single literal anywhere in the haystack.
#[derive(Clone, Debug)]
pub struct Substring {
    finder: memmem::Finder<'static>,
}

impl Substring {
    pub fn new(literal: &[u8]) -> Self {
        Self {
            finder: memmem::Finder::new(literal).into_owned(),
        }
    }

    pub fn literal(&self) -> &[u8] {
        self.finder.needle()
    }

    #[inline]
    pub fn is_match(&self, haystack: &[u8]) -> bool {
        self.finder.find(haystack).is_some()
    }
}

/// Finds any of a set of literals anywhere in the haystack.
///
/// Literals are searched in one pass, so their order only matters for
/// [`literals()`](Self::literals).
#[derive(Clone, Debug)]
pub struct AltSubstring {
    literals: Box<[Box<[u8]>]>,
    searcher: AhoCorasick,
}

impl AltSubstring {
    /// Fails if the automaton exceeds [`aho_corasick`]'s internal limits.
    pub fn new<I>(literals: I) -> Result<Self, aho_corasick::BuildError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let literals: Box<[Box<[u8]>]> = literals
            .into_iter()
            .map(|literal| Box::from(literal.as_ref()))
            .collect();
        let searcher = AhoCorasick::new(literals.iter())?;
        Ok(Self { literals, searcher })
    }

    pub fn literals(&self) -> &[Box<[u8]>] {
        &self.literals
    }

    #[inline]
    pub fn is_match(&self, haystack: &[u8]) -> bool {
        self.searcher.is_match(haystack)
    }
}
