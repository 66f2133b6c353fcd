//! Every specialized matcher must agree with the regex engine on every haystack.
//!
//! The reference is the same pattern built with `.specialize(false)`.
use std::sync::LazyLock;

use fastmatch::{syntax::Config, Matcher, MatcherKind};
use proptest::prelude::*;

struct Case {
    pattern: &'static str,
    specialized: Matcher,
    reference: Matcher,
}

/// Patterns and the kind they must specialize into.
const PATTERNS: &[(&str, MatcherKind)] = &[
    ("^abc$", MatcherKind::Equals),
    (r"\Afoo\z", MatcherKind::Equals),
    ("abc", MatcherKind::Substring),
    (".*abc.*", MatcherKind::Substring),
    ("a*abc", MatcherKind::Substring),
    ("a|bb|ccc", MatcherKind::AltSubstring),
    ("[xyz]", MatcherKind::AltSubstring),
    ("foo|", MatcherKind::AltSubstring),
    ("^(a|bb|ccc)$", MatcherKind::OneOf),
    ("^[xyz]$", MatcherKind::OneOf),
    ("^2024-", MatcherKind::Prefix),
    ("^abc.*", MatcherKind::Prefix),
    ("^(foo|ba).*", MatcherKind::AltPrefix),
    (r"^v\d{4}-\d{2}$", MatcherKind::PrefixNumDate),
    (r"^\d{4}Z", MatcherKind::PrefixNumDate),
    (r"^v\d{4}-\d{2}Z$", MatcherKind::PrefixNumDate),
    (r"^logs-\d{4}\.\d{2}\.\d{2}", MatcherKind::PrefixNumDate),
    (r"^\d{2}[0-9]{2}:\d{2}$", MatcherKind::PrefixNumDate),
    ("^$", MatcherKind::EmptyString),
    (r"^[\t\n\f\r ]*$", MatcherKind::EmptyWhitespace),
    ("", MatcherKind::MatchAny),
    (".*", MatcherKind::MatchAny),
    ("(?s).*", MatcherKind::MatchAny),
    ("x*", MatcherKind::MatchAny),
    ("^", MatcherKind::MatchAny),
    // Not specialized, but still compared
    ("a.*b", MatcherKind::Fallback),
    ("^abc.*$", MatcherKind::Fallback),
    (r"^\d+-\d{2}$", MatcherKind::Fallback),
    (r"^\s*$", MatcherKind::Fallback),
    ("(?m)^abc$", MatcherKind::Fallback),
];

/// Unicode-aware patterns, parsed with the default syntax.
const UNICODE_PATTERNS: &[(&str, MatcherKind)] = &[
    ("^拼音$", MatcherKind::Equals),
    ("搜索|拼音", MatcherKind::AltSubstring),
    ("^[éü]$", MatcherKind::OneOf),
    (r"^v\d{4}$", MatcherKind::Fallback),
    (r"^[0-9]{4}-", MatcherKind::PrefixNumDate),
];

const FRAGMENTS: &[&[u8]] = &[
    b"a", b"bb", b"ccc", b"abc", b"foo", b"ba", b"x", b"y", b"v", b"Z", b"2024", b"01", b"9",
    b"-", b".", b":", b"logs-", b" ", b"\t", b"\n", b"\r", b"\x0C", b"\x0B", b"\xFF",
    "拼音".as_bytes(), "搜索".as_bytes(), "é".as_bytes(), "٣".as_bytes(),
];

fn ascii() -> Config {
    Config::new().unicode(false).utf8(false)
}

fn build(config: Config, pattern: &'static str, kind: MatcherKind) -> Case {
    let specialized = Matcher::builder()
        .syntax(config)
        .build(pattern)
        .unwrap();
    assert_eq!(specialized.kind(), kind, "{pattern}");
    let reference = Matcher::builder()
        .syntax(config)
        .specialize(false)
        .build(pattern)
        .unwrap();
    assert_eq!(reference.kind(), MatcherKind::Fallback);
    Case {
        pattern,
        specialized,
        reference,
    }
}

static CASES: LazyLock<Vec<Case>> = LazyLock::new(|| {
    let ascii = PATTERNS
        .iter()
        .map(|&(pattern, kind)| build(ascii(), pattern, kind));
    let unicode = UNICODE_PATTERNS
        .iter()
        .map(|&(pattern, kind)| build(Config::new(), pattern, kind));
    ascii.chain(unicode).collect()
});

#[track_caller]
fn assert_agree(haystack: &[u8]) {
    for case in CASES.iter() {
        assert_eq!(
            case.specialized.is_match_bytes(haystack),
            case.reference.is_match_bytes(haystack),
            "{} ({}) on {:?}",
            case.pattern,
            case.specialized,
            String::from_utf8_lossy(haystack),
        );
    }
}

fn haystack() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(prop::sample::select(FRAGMENTS), 0..8).prop_map(|fragments| fragments.concat()),
        prop::collection::vec(any::<u8>(), 0..32),
    ]
}

#[test]
fn kinds() {
    LazyLock::force(&CASES);
}

/// Every cut and every one-byte extension of a matching haystack, which
/// covers `min_len - 1`, `min_len` and `min_len + 1` for the numeric dates.
#[test]
fn around_matches() {
    for example in [
        "abc",
        "foo",
        "ccc",
        "2024-01-31",
        "v2024-01",
        "v2024-01Z",
        "2024Z",
        "logs-2024.01.31",
        "1234:56",
        " \t\r\n",
        "拼音",
    ] {
        let example = example.as_bytes();
        for end in 0..=example.len() {
            assert_agree(&example[..end]);
            for &fragment in FRAGMENTS {
                assert_agree(&[example, fragment].concat());
                assert_agree(&[fragment, example].concat());
            }
        }
    }
}

#[test]
fn digits_boundary() {
    for len in 0..12 {
        let digits = "7".repeat(len);
        assert_agree(digits.as_bytes());
        assert_agree(format!("v{digits}").as_bytes());
        assert_agree(format!("{digits}Z").as_bytes());
    }
}

proptest! {
    #[test]
    fn specialized_agrees_with_regex(haystack in haystack()) {
        for case in CASES.iter() {
            prop_assert_eq!(
                case.specialized.is_match_bytes(&haystack),
                case.reference.is_match_bytes(&haystack),
                "{} ({}) on {:?}",
                case.pattern,
                &case.specialized,
                String::from_utf8_lossy(&haystack),
            );
        }
    }

    #[test]
    fn str_and_bytes_agree(haystack in "\\PC{0,16}") {
        for case in CASES.iter() {
            prop_assert_eq!(
                case.specialized.is_match(&haystack),
                case.specialized.is_match_bytes(haystack.as_bytes())
            );
        }
    }
}
