use chrono::NaiveDate;
use clap::ValueEnum;
use std::fmt;

/// Which issues a run asks for. Also decides which timestamp the report carries.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, ValueEnum)]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }

    /// Header of the timestamp column for runs in this state.
    pub fn timestamp_header(&self) -> &'static str {
        match self {
            IssueState::Open => "created",
            IssueState::Closed => "closed",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single date a row carries, tagged with what it means.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Timestamp {
    Created(NaiveDate),
    Closed(NaiveDate),
}

impl Timestamp {
    pub fn date(&self) -> NaiveDate {
        match self {
            Timestamp::Created(date) | Timestamp::Closed(date) => *date,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date().format("%Y-%m-%d"))
    }
}

/// One issue, flattened for display.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub source: String,
    pub number: u64,
    pub title: String,
    pub url: String,
    pub assignees: Vec<String>,
    pub labels: Vec<String>,
    pub timestamp: Timestamp,
    pub age_days: i64,
}
