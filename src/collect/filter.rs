use crate::github::GithubIssue;
use crate::model::{Exclusions, FEATURE_REQUEST_LABEL, ISSUE_ADDRESSED_LABEL};

impl Exclusions {
    /// Checks the issue's full label list, before any label narrowing.
    pub fn excludes(&self, issue: &GithubIssue) -> bool {
        (self.feature_requests && issue.has_label(FEATURE_REQUEST_LABEL))
            || (self.addressed && issue.has_label(ISSUE_ADDRESSED_LABEL))
    }

    /// Human readable description of each active exclusion.
    pub fn describe(&self) -> Vec<String> {
        let mut active = vec![];
        if self.feature_requests {
            active.push(format!("issues labeled '{FEATURE_REQUEST_LABEL}'"));
        }
        if self.addressed {
            active.push(format!("issues labeled '{ISSUE_ADDRESSED_LABEL}'"));
        }
        active
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
