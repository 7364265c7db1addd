//! Integration tests for input scanning and URL decomposition.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use access_classifier::parser::{
    DecomposedUrl, MAX_URL_LENGTH, ParseError, QueryValue, parse_input, parse_json_line,
};

#[test]
fn test_parse_input_reads_access_log_lines() {
    let log = r#"
10.1.2.3 - jdoe [12/Mar/2016:10:01:02 +0100] "GET http://pubs.rsc.org/en/content/articlehtml/2014/rp/c4rp00006d HTTP/1.1" 200 5120
10.1.2.4 - - [12/Mar/2016:10:01:09 +0100] "GET https://www.scopus.com/results/results.uri?src=s&sid=abc HTTP/1.1" 200 812
"#;
    let result = parse_input(log);
    assert_eq!(result.len(), 2);
    assert_eq!(result.error_count(), 0);

    let first = &result.items[0];
    assert_eq!(first.url.hostname, "pubs.rsc.org");
    assert_eq!(
        first.url.pathname(),
        Some("/en/content/articlehtml/2014/rp/c4rp00006d")
    );

    let second = &result.items[1];
    assert_eq!(second.url.param("sid"), Some("abc"));
}

#[test]
fn test_parse_input_strips_trailing_punctuation() {
    let result = parse_input("See https://www.cairn.info/revue-x.htm, then (https://www.scopus.com/sources).");
    assert_eq!(result.len(), 2);
    assert_eq!(result.items[0].raw, "https://www.cairn.info/revue-x.htm");
    assert_eq!(result.items[1].raw, "https://www.scopus.com/sources");
}

#[test]
fn test_parse_input_keeps_balanced_parentheses() {
    let result = parse_input("https://www.example.org/wiki/Item_(chemistry)");
    assert_eq!(result.len(), 1);
    assert_eq!(
        result.items[0].url.pathname(),
        Some("/wiki/Item_(chemistry)")
    );
}

#[test]
fn test_parse_input_keeps_fragment() {
    let result = parse_input(
        "https://web.ebscohost.com/ehost/detail/detail?vid=4&hid=4201#AN=118470727&db=a9h",
    );
    let url = &result.items[0].url;
    assert_eq!(url.hash.as_deref(), Some("AN=118470727&db=a9h"));

    let fragment = url.fragment_query().unwrap();
    assert_eq!(fragment.get("AN").and_then(QueryValue::first), Some("118470727"));
}

#[test]
fn test_parse_repeated_keys_keep_first_value_for_lookup() {
    let url = DecomposedUrl::parse("https://search.ebscohost.com/login.aspx?db=a9h&db=cmedm").unwrap();
    assert_eq!(url.param("db"), Some("a9h"));
    assert_eq!(url.query["db"].values(), vec!["a9h", "cmedm"]);
}

#[test]
fn test_parse_rejects_too_long_url() {
    let long = format!("https://www.scopus.com/{}", "a".repeat(MAX_URL_LENGTH));
    let err = DecomposedUrl::parse(&long).unwrap_err();
    assert!(matches!(err, ParseError::UrlTooLong { max: MAX_URL_LENGTH, .. }));

    let result = parse_input(&long);
    assert!(result.is_empty());
    assert_eq!(result.error_count(), 1);
}

#[test]
fn test_parse_input_ignores_text_without_urls() {
    let result = parse_input("nothing to see here\nftp is not scanned either");
    assert!(result.is_empty());
    assert_eq!(result.error_count(), 0);
}

#[test]
fn test_parse_json_line_builds_decomposition() {
    let url = parse_json_line(
        1,
        r#"{"pathname":"/action/displayJournal","query":{"jid":"VNS","x":["1","2"]},"hostname":"journals.cambridge.org"}"#,
    )
    .unwrap();
    assert_eq!(url.pathname(), Some("/action/displayJournal"));
    assert_eq!(url.param("jid"), Some("VNS"));
    assert_eq!(url.param("x"), Some("1"));
    assert_eq!(url.hostname, "journals.cambridge.org");
    assert!(url.hash.is_none());
}

#[test]
fn test_parse_json_line_without_pathname_is_accepted() {
    let url = parse_json_line(4, r#"{"hostname":"pubs.rsc.org"}"#).unwrap();
    assert!(url.pathname().is_none());
}

#[test]
fn test_parse_json_line_reports_line_number() {
    let err = parse_json_line(7, "{not json").unwrap_err();
    assert!(matches!(err, ParseError::InvalidJson { line: 7, .. }));
    assert!(err.to_string().contains("line 7"));
}
