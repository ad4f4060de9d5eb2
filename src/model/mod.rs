mod column;
mod config;
mod row;
mod source;

pub use column::{Column, NO_LABELS, UNASSIGNED};
pub use config::{
    Exclusions, ReportConfig, SortSpec, DEFAULT_SOURCE_PATTERN, FEATURE_REQUEST_LABEL,
    ISSUE_ADDRESSED_LABEL,
};
pub use row::{IssueState, Row, Timestamp};
pub use source::Source;
