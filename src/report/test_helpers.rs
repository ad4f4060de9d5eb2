use crate::collect::{ColumnWidths, Collected};
use crate::model::{
    Column, Exclusions, IssueState, ReportConfig, Row, Source, Timestamp, DEFAULT_SOURCE_PATTERN,
};
use chrono::NaiveDate;

#[allow(clippy::too_many_arguments)]
pub fn row(
    source: &str,
    number: u64,
    title: &str,
    url: &str,
    assignees: &[&str],
    labels: &[&str],
    timestamp: Timestamp,
    age_days: i64,
) -> Row {
    Row {
        source: source.to_string(),
        number,
        title: title.to_string(),
        url: url.to_string(),
        assignees: assignees.iter().map(|a| a.to_string()).collect(),
        labels: labels.iter().map(|l| l.to_string()).collect(),
        timestamp,
        age_days,
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn collected(state: IssueState, rows: Vec<Row>) -> Collected {
    let mut widths = ColumnWidths::new(&Column::all(state));
    for row in &rows {
        widths.observe(row);
    }
    Collected { rows, widths }
}

/// One assigned and labelled row, one row needing both placeholders.
pub fn sample() -> Collected {
    collected(
        IssueState::Open,
        vec![
            row(
                "python",
                7,
                "Fix it",
                "https://gh/a-python/issues/7",
                &["alice"],
                &["A"],
                Timestamp::Created(date(2024, 1, 1)),
                9,
            ),
            row(
                "js",
                12,
                "Crash",
                "https://gh/a-js/issues/12",
                &[],
                &[],
                Timestamp::Created(date(2024, 1, 9)),
                1,
            ),
        ],
    )
}

pub fn config() -> ReportConfig {
    ReportConfig {
        sources: vec![
            Source::new("Azure", "azure-sdk-for-python"),
            Source::new("Azure", "azure-sdk-for-js"),
        ],
        labels: vec!["AI Projects".to_string(), "AI Model Inference".to_string()],
        additional_labels: vec![],
        state: IssueState::Open,
        exclusions: Exclusions::default(),
        sort: None,
        html_path: None,
        source_pattern: DEFAULT_SOURCE_PATTERN.to_string(),
    }
}
