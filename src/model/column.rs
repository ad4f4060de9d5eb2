use crate::error::{Error, Result};
use crate::model::{IssueState, Row};
use itertools::Itertools;

pub const UNASSIGNED: &str = "UNASSIGNED";
pub const NO_LABELS: &str = "NO LABELS";

/// A report column. Both renderers and the width tracker walk the same list.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Column {
    User,
    Source,
    Label,
    Number,
    Title,
    Timestamp(IssueState),
    Days,
    Url,
}

impl Column {
    /// Columns of a report run in `state`, in display order.
    pub fn all(state: IssueState) -> [Column; 8] {
        [
            Column::User,
            Column::Source,
            Column::Label,
            Column::Number,
            Column::Title,
            Column::Timestamp(state),
            Column::Days,
            Column::Url,
        ]
    }

    pub fn header(&self) -> &'static str {
        match self {
            Column::User => "user",
            Column::Source => "source",
            Column::Label => "label",
            Column::Number => "number",
            Column::Title => "title",
            Column::Timestamp(state) => state.timestamp_header(),
            Column::Days => "days",
            Column::Url => "url",
        }
    }

    /// Text shown instead of an empty value.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Column::User => Some(UNASSIGNED),
            Column::Label => Some(NO_LABELS),
            _ => None,
        }
    }

    pub fn min_width(&self) -> usize {
        let header = self.header().chars().count();
        let placeholder = self.placeholder().map_or(0, |p| p.chars().count());
        header.max(placeholder)
    }

    /// Resolves a user supplied column name against the columns of a run in `state`.
    pub fn parse(name: &str, state: IssueState) -> Result<Self> {
        let name = name.trim();
        Self::all(state)
            .into_iter()
            .find(|column| column.header() == name)
            .ok_or_else(|| Error::UnknownSortColumn {
                name: name.to_string(),
                valid: Self::all(state).iter().map(Column::header).join(", "),
            })
    }

    /// Display text of this column for `row`, placeholders included.
    pub fn cell(&self, row: &Row) -> String {
        let text = match self {
            Column::User => row.assignees.join(", "),
            Column::Source => row.source.clone(),
            Column::Label => row.labels.join(", "),
            Column::Number => row.number.to_string(),
            Column::Title => row.title.clone(),
            Column::Timestamp(_) => row.timestamp.to_string(),
            Column::Days => row.age_days.to_string(),
            Column::Url => row.url.clone(),
        };
        match self.placeholder() {
            Some(placeholder) if text.is_empty() => placeholder.to_string(),
            _ => text,
        }
    }
}

#[cfg(test)]
#[path = "column_tests.rs"]
mod tests;
