use crate::error::{Error, Result};
use crate::github::GithubIssue;
use crate::model::{IssueState, ReportConfig, Row, Timestamp};
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use tracing::warn;

/// Turns listing entries into rows, against one "now" shared by the whole run.
pub struct Normalizer<'a> {
    labels: &'a [String],
    additional_labels: &'a [String],
    state: IssueState,
    now: DateTime<Utc>,
    source_pattern: Regex,
}

impl<'a> Normalizer<'a> {
    pub fn new(config: &'a ReportConfig, now: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            labels: &config.labels,
            additional_labels: &config.additional_labels,
            state: config.state,
            now,
            source_pattern: source_pattern(&config.source_pattern)?,
        })
    }

    /// Returns `None` for pull requests, which the issues listing mixes in.
    pub fn normalize(&self, issue: &GithubIssue) -> Result<Option<Row>> {
        if is_pull_request(&issue.html_url) {
            return Ok(None);
        }

        let timestamp = match self.state {
            IssueState::Open => Timestamp::Created(issue.created_at.date_naive()),
            IssueState::Closed => {
                let Some(closed_at) = issue.closed_at else {
                    return Err(Error::MissingTimestamp {
                        url: issue.html_url.clone(),
                        field: "closed_at",
                    });
                };
                Timestamp::Closed(closed_at.date_naive())
            }
        };

        let mut age_days = age_days(timestamp.date(), self.now);
        if age_days < 0 {
            warn!(url = %issue.html_url, %timestamp, "timestamp is in the future, age set to 0");
            age_days = 0;
        }

        Ok(Some(Row {
            source: extract_source(&self.source_pattern, &issue.html_url)?,
            number: issue.number,
            title: issue.title.clone(),
            url: issue.html_url.clone(),
            assignees: issue
                .assignees
                .iter()
                .map(|assignee| assignee.login.to_lowercase())
                .collect(),
            labels: self.match_labels(issue),
            timestamp,
            age_days,
        }))
    }

    fn match_labels(&self, issue: &GithubIssue) -> Vec<String> {
        let mut matched: Vec<String> = vec![];
        for wanted in [self.labels, self.additional_labels] {
            for label in &issue.labels {
                if wanted.contains(&label.name) && !matched.contains(&label.name) {
                    matched.push(label.name.clone());
                }
            }
        }
        matched
    }
}

pub fn is_pull_request(url: &str) -> bool {
    url.contains("/pull/")
}

pub fn source_pattern(pattern: &str) -> Result<Regex> {
    let regex = Regex::new(pattern).map_err(|e| Error::InvalidSourcePattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;
    if regex.captures_len() < 2 {
        return Err(Error::InvalidSourcePattern {
            pattern: pattern.to_string(),
            reason: "pattern needs a capture group for the source name".to_string(),
        });
    }
    Ok(regex)
}

pub fn extract_source(pattern: &Regex, url: &str) -> Result<String> {
    pattern
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str().to_string())
        .ok_or_else(|| Error::SourceNotInUrl(url.to_string()))
}

/// Whole days from `date` to the date of `now`. Negative when `date` is later.
pub fn age_days(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    (now.date_naive() - date).num_days()
}

#[cfg(test)]
#[path = "normalizer_tests.rs"]
mod tests;
