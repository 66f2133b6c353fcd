use fastmatch::{syntax::Config, Matcher, MatcherKind};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=fastmatch=debug shows which matcher each pattern compiles into
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let matcher = Matcher::new("^(debug|info)$").unwrap();
    assert_eq!(matcher.kind(), MatcherKind::OneOf);
    assert!(matcher.is_match("info"));
    assert!(!matcher.is_match("information"));

    let matcher = Matcher::new("timeout|refused").unwrap();
    assert!(matcher.is_match("connection refused by peer"));

    let matcher = Matcher::builder()
        .syntax(Config::new().unicode(false).utf8(false))
        .build(r"^filebeat-\d{4}\.\d{2}\.\d{2}")
        .unwrap();
    assert_eq!(matcher.kind(), MatcherKind::PrefixNumDate);
    assert!(matcher.is_match("filebeat-2024.01.31-000001"));

    // Unicode \d is not [0-9], so this one is left to the regex engine
    let matcher = Matcher::new(r"^filebeat-\d{4}").unwrap();
    assert_eq!(matcher.kind(), MatcherKind::Fallback);

    for pattern in ["^$", r"^[\t\n\f\r ]*$", ".*", "a.*b"] {
        let matcher = Matcher::new(pattern).unwrap();
        println!("{pattern:16} {matcher}");
    }
}
