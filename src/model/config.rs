use crate::error::Result;
use crate::model::{Column, IssueState, Source};
use itertools::Itertools;
use std::fmt;
use std::path::PathBuf;

pub const FEATURE_REQUEST_LABEL: &str = "feature-request";
pub const ISSUE_ADDRESSED_LABEL: &str = "issue-addressed";

/// Matches `.../<prefix>-<name>/issues/...` and captures `<name>`.
pub const DEFAULT_SOURCE_PATTERN: &str = r"/[^/]*-(\w+)/issues/";

/// Everything a report run needs to know, fixed before the first request.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub sources: Vec<Source>,
    pub labels: Vec<String>,
    pub additional_labels: Vec<String>,
    pub state: IssueState,
    pub exclusions: Exclusions,
    pub sort: Option<SortSpec>,
    pub html_path: Option<PathBuf>,
    pub source_pattern: String,
}

impl ReportConfig {
    pub fn columns(&self) -> [Column; 8] {
        Column::all(self.state)
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Exclusions {
    pub feature_requests: bool,
    pub addressed: bool,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SortSpec {
    pub columns: Vec<Column>,
    pub reversed: bool,
}

impl SortSpec {
    /// Parses a comma separated column list such as `days,number`.
    pub fn parse(spec: &str, reversed: bool, state: IssueState) -> Result<Self> {
        let columns = spec
            .split(',')
            .map(|name| Column::parse(name, state))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { columns, reversed })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.columns.iter().map(Column::header).join(", "))?;
        if self.reversed {
            write!(f, " (reversed)")?;
        }
        Ok(())
    }
}
