use super::*;
use crate::github::{GithubLabel, GithubUser};
use crate::model::{Exclusions, DEFAULT_SOURCE_PATTERN};
use chrono::TimeZone;
use yare::parameterized;

fn config(labels: &[&str], additional: &[&str], state: IssueState) -> ReportConfig {
    ReportConfig {
        sources: vec![],
        labels: labels.iter().map(|l| l.to_string()).collect(),
        additional_labels: additional.iter().map(|l| l.to_string()).collect(),
        state,
        exclusions: Exclusions::default(),
        sort: None,
        html_path: None,
        source_pattern: DEFAULT_SOURCE_PATTERN.to_string(),
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 15, 30, 0).unwrap()
}

fn issue(url: &str, labels: &[&str], assignees: &[&str]) -> GithubIssue {
    GithubIssue {
        number: 7,
        title: "Streaming response truncated".to_string(),
        html_url: url.to_string(),
        labels: labels
            .iter()
            .map(|name| GithubLabel {
                name: name.to_string(),
            })
            .collect(),
        assignees: assignees
            .iter()
            .map(|login| GithubUser {
                login: login.to_string(),
            })
            .collect(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        closed_at: None,
    }
}

const ISSUE_URL: &str = "https://github.com/Azure/azure-sdk-for-python/issues/7";

#[parameterized(
    python = { "https://github.com/Azure/azure-sdk-for-python/issues/7", "python" },
    net = { "https://github.com/Azure/azure-sdk-for-net/issues/12", "net" },
    js = { "https://github.com/Azure/azure-sdk-for-js/issues/1", "js" },
    short_prefix = { "https://github.com/acme/tools-cli/issues/3", "cli" },
)]
fn test_extract_source(url: &str, expected: &str) {
    let pattern = source_pattern(DEFAULT_SOURCE_PATTERN).unwrap();
    assert_eq!(extract_source(&pattern, url).unwrap(), expected);
}

#[parameterized(
    no_dash = { "https://github.com/tokio-rs/tokio/issues/3" },
    no_issues_segment = { "https://github.com/Azure/azure-sdk-for-python/discussions/3" },
    empty = { "" },
)]
fn test_extract_source_fails(url: &str) {
    let pattern = source_pattern(DEFAULT_SOURCE_PATTERN).unwrap();
    assert!(matches!(
        extract_source(&pattern, url),
        Err(Error::SourceNotInUrl(_))
    ));
}

#[test]
fn test_source_pattern_needs_capture_group() {
    assert!(matches!(
        source_pattern(r"/issues/"),
        Err(Error::InvalidSourcePattern { .. })
    ));
    assert!(matches!(
        source_pattern(r"(unclosed"),
        Err(Error::InvalidSourcePattern { .. })
    ));
}

#[test]
fn test_pull_requests_are_skipped() {
    let config = config(&["A"], &[], IssueState::Open);
    let normalizer = Normalizer::new(&config, now()).unwrap();
    let pull = issue(
        "https://github.com/Azure/azure-sdk-for-python/pull/7",
        &["A"],
        &["someone"],
    );
    assert_eq!(normalizer.normalize(&pull).unwrap(), None);
}

#[test]
fn test_pull_request_without_source_is_still_skipped() {
    let config = config(&["A"], &[], IssueState::Open);
    let normalizer = Normalizer::new(&config, now()).unwrap();
    let pull = issue("https://github.com/tokio-rs/tokio/pull/1", &[], &[]);
    assert_eq!(normalizer.normalize(&pull).unwrap(), None);
}

#[test]
fn test_label_ordering() {
    let config = config(&["A", "B"], &["X", "Y"], IssueState::Open);
    let normalizer = Normalizer::new(&config, now()).unwrap();
    let row = normalizer
        .normalize(&issue(ISSUE_URL, &["Y", "B", "Z", "A"], &[]))
        .unwrap()
        .unwrap();
    assert_eq!(row.labels, vec!["B", "A", "Y"]);
}

#[test]
fn test_label_in_both_sets_is_listed_once() {
    let config = config(&["A"], &["A", "X"], IssueState::Open);
    let normalizer = Normalizer::new(&config, now()).unwrap();
    let row = normalizer
        .normalize(&issue(ISSUE_URL, &["X", "A"], &[]))
        .unwrap()
        .unwrap();
    assert_eq!(row.labels, vec!["A", "X"]);
}

#[test]
fn test_row_fields() {
    let config = config(&["A"], &[], IssueState::Open);
    let normalizer = Normalizer::new(&config, now()).unwrap();
    let row = normalizer
        .normalize(&issue(ISSUE_URL, &["feature-request", "A"], &["Alice", "BOB"]))
        .unwrap()
        .unwrap();

    assert_eq!(row.source, "python");
    assert_eq!(row.number, 7);
    assert_eq!(row.url, ISSUE_URL);
    assert_eq!(row.assignees, vec!["alice", "bob"]);
    assert_eq!(row.labels, vec!["A"]);
    assert_eq!(
        row.timestamp,
        Timestamp::Created(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    );
    assert_eq!(row.age_days, 9);
}

#[test]
fn test_unassigned_is_empty() {
    let config = config(&["A"], &[], IssueState::Open);
    let normalizer = Normalizer::new(&config, now()).unwrap();
    let row = normalizer
        .normalize(&issue(ISSUE_URL, &[], &[]))
        .unwrap()
        .unwrap();
    assert!(row.assignees.is_empty());
    assert!(row.labels.is_empty());
}

#[test]
fn test_closed_run_uses_closed_at() {
    let config = config(&["A"], &[], IssueState::Closed);
    let normalizer = Normalizer::new(&config, now()).unwrap();
    let mut closed = issue(ISSUE_URL, &["A"], &[]);
    closed.closed_at = Some(Utc.with_ymd_and_hms(2024, 1, 8, 23, 59, 59).unwrap());

    let row = normalizer.normalize(&closed).unwrap().unwrap();
    assert_eq!(
        row.timestamp,
        Timestamp::Closed(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap())
    );
    assert_eq!(row.age_days, 2);
}

#[test]
fn test_closed_run_requires_closed_at() {
    let config = config(&["A"], &[], IssueState::Closed);
    let normalizer = Normalizer::new(&config, now()).unwrap();
    let err = normalizer
        .normalize(&issue(ISSUE_URL, &["A"], &[]))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingTimestamp {
            field: "closed_at",
            ..
        }
    ));
}

#[test]
fn test_unmatched_url_aborts() {
    let config = config(&["A"], &[], IssueState::Open);
    let normalizer = Normalizer::new(&config, now()).unwrap();
    let err = normalizer
        .normalize(&issue("https://github.com/tokio-rs/tokio/issues/1", &[], &[]))
        .unwrap_err();
    assert!(matches!(err, Error::SourceNotInUrl(_)));
}

#[test]
fn test_future_timestamp_clamps_to_zero() {
    let config = config(&["A"], &[], IssueState::Open);
    let normalizer = Normalizer::new(&config, now()).unwrap();
    let mut future = issue(ISSUE_URL, &[], &[]);
    future.created_at = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

    let row = normalizer.normalize(&future).unwrap().unwrap();
    assert_eq!(row.age_days, 0);
}

#[parameterized(
    same_day = { 2024, 1, 10, 0 },
    nine_days = { 2024, 1, 1, 9 },
    across_year = { 2023, 12, 31, 10 },
    future = { 2024, 1, 11, -1 },
)]
fn test_age_days(year: i32, month: u32, day: u32, expected: i64) {
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    assert_eq!(age_days(date, now()), expected);
}
