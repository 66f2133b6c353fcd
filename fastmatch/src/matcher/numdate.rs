use std::fmt;

use bon::bon;

/// A literal prefix, fixed-size ASCII digit groups joined by literal separators,
/// and a literal suffix, e.g. `^v\d{4}-\d{2}$`.
///
/// Without [`exact`](PrefixNumDateBuilder::exact), only the start of what follows the
/// last digit group is checked against the suffix, the same as the unanchored
/// pattern `^\d{4}Z` matching `2024Zx`.
///
/// ```
/// use fastmatch::matcher::PrefixNumDate;
///
/// let m = PrefixNumDate::builder()
///     .prefix("v")
///     .digits(vec![4, 2])
///     .separators(vec![b"-".to_vec()])
///     .build()
///     .unwrap();
/// assert_eq!(m.min_len(), 8);
/// assert!(m.is_match(b"v2024-01"));
/// assert!(!m.is_match(b"v202-01"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixNumDate {
    prefix: Box<[u8]>,
    digits: Box<[usize]>,
    separators: Box<[Box<[u8]>]>,
    suffix: Box<[u8]>,
    min_len: usize,
    exact: bool,
}

#[bon]
impl PrefixNumDate {
    /// Returns `None` if there is no digit group, a group has no digits, or
    /// there is not exactly one separator between each pair of groups.
    #[builder]
    pub fn new(
        #[builder(default, into)] prefix: Vec<u8>,
        /// Digit count of each group.
        digits: Vec<usize>,
        #[builder(default)] separators: Vec<Vec<u8>>,
        #[builder(default, into)] suffix: Vec<u8>,
        /// Nothing may follow the suffix.
        #[builder(default)]
        exact: bool,
    ) -> Option<Self> {
        if digits.is_empty() || digits.contains(&0) || separators.len() != digits.len() - 1 {
            return None;
        }
        let min_len = [prefix.len(), suffix.len()]
            .into_iter()
            .chain(digits.iter().copied())
            .chain(separators.iter().map(Vec::len))
            .try_fold(0usize, usize::checked_add)?;
        Some(Self {
            prefix: prefix.into(),
            digits: digits.into(),
            separators: separators.into_iter().map(Vec::into_boxed_slice).collect(),
            suffix: suffix.into(),
            min_len,
            exact,
        })
    }
}

impl PrefixNumDate {
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    pub fn separators(&self) -> &[Box<[u8]>] {
        &self.separators
    }

    pub fn suffix(&self) -> &[u8] {
        &self.suffix
    }

    /// The shortest haystack that can match.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }

    #[inline]
    pub fn is_match(&self, haystack: &[u8]) -> bool {
        haystack.len() >= self.min_len
            && self.strip(haystack).is_some_and(|rest| {
                if self.exact {
                    rest == &*self.suffix
                } else {
                    rest.starts_with(&self.suffix)
                }
            })
    }

    /// Strips the prefix and all digit groups, returning what follows.
    fn strip<'h>(&self, haystack: &'h [u8]) -> Option<&'h [u8]> {
        let mut rest = haystack.strip_prefix(&*self.prefix)?;
        let mut groups = self.digits.iter();
        rest = strip_digits(rest, *groups.next()?)?;
        for (separator, &count) in self.separators.iter().zip(groups) {
            rest = strip_digits(rest.strip_prefix(&**separator)?, count)?;
        }
        Some(rest)
    }
}

fn strip_digits(haystack: &[u8], count: usize) -> Option<&[u8]> {
    let (digits, rest) = haystack.split_at_checked(count)?;
    digits.iter().all(u8::is_ascii_digit).then_some(rest)
}

/// In pattern form, e.g. `v\d{4}-\d{2}$`.
impl fmt::Display for PrefixNumDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.prefix))?;
        let mut separators = self.separators.iter();
        for (i, count) in self.digits.iter().enumerate() {
            if i != 0 {
                if let Some(separator) = separators.next() {
                    f.write_str(&String::from_utf8_lossy(separator))?;
                }
            }
            write!(f, r"\d{{{count}}}")?;
        }
        f.write_str(&String::from_utf8_lossy(&self.suffix))?;
        if self.exact {
            f.write_str("$")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v_date() -> PrefixNumDate {
        PrefixNumDate::builder()
            .prefix("v")
            .digits(vec![4, 2])
            .separators(vec![b"-".to_vec()])
            .exact(true)
            .build()
            .unwrap()
    }

    #[test]
    fn v_year_month() {
        let m = v_date();
        assert_eq!(m.min_len(), 8);
        assert_eq!(m.prefix(), b"v");
        assert_eq!(m.digits(), &[4, 2]);
        assert_eq!(m.suffix(), b"");
        assert!(m.is_match(b"v2024-01"));
        assert!(!m.is_match(b"v202-01"));
        assert!(!m.is_match(b"v2024_01"));
        assert!(!m.is_match(b"v2024-01x"));
        assert!(!m.is_match(b"x2024-01"));
        assert!(!m.is_match(b"v2024-0a"));
        assert!(!m.is_match(b"v2024-1"));
        assert!(!m.is_match(b""));
        assert_eq!(m.to_string(), r"v\d{4}-\d{2}$");
    }

    #[test]
    fn suffix_is_prefix_of_rest() {
        let m = PrefixNumDate::builder()
            .digits(vec![4])
            .suffix("Z")
            .build()
            .unwrap();
        assert_eq!(m.min_len(), 5);
        assert!(m.is_match(b"2024Z"));
        assert!(m.is_match(b"2024Zx"));
        assert!(!m.is_match(b"2024Y"));
        assert!(!m.is_match(b"2024"));
        assert!(!m.is_match(b"202Z"));
        assert_eq!(m.to_string(), r"\d{4}Z");

        let m = PrefixNumDate::builder()
            .digits(vec![4])
            .suffix("Z")
            .exact(true)
            .build()
            .unwrap();
        assert!(m.is_match(b"2024Z"));
        assert!(!m.is_match(b"2024Zx"));
    }

    #[test]
    fn trailing_bytes_without_suffix() {
        let m = PrefixNumDate::builder()
            .prefix("logs-")
            .digits(vec![4, 2, 2])
            .separators(vec![b".".to_vec(), b".".to_vec()])
            .build()
            .unwrap();
        assert_eq!(m.min_len(), 15);
        assert!(m.is_match(b"logs-2024.01.31"));
        assert!(m.is_match(b"logs-2024.01.31-000001"));
        assert!(!m.is_match(b"logs-2024.01.3"));
        assert!(!m.is_match("logs-2024.01.3１".as_bytes()));
    }

    #[test]
    fn invalid() {
        assert_eq!(PrefixNumDate::builder().digits(vec![]).build(), None);
        assert_eq!(PrefixNumDate::builder().digits(vec![4, 0]).separators(vec![vec![]]).build(), None);
        assert_eq!(PrefixNumDate::builder().digits(vec![4, 2]).build(), None);
        assert_eq!(
            PrefixNumDate::builder()
                .digits(vec![4])
                .separators(vec![b"-".to_vec()])
                .build(),
            None
        );
        assert_eq!(PrefixNumDate::builder().digits(vec![usize::MAX, 1]).separators(vec![vec![]]).build(), None);
    }

    #[test]
    fn non_ascii() {
        let m = v_date();
        assert!(!m.is_match("v２０２４-01".as_bytes()));
        assert!(!m.is_match(b"v\xFF\xFF\xFF\xFF-01"));
    }
}
