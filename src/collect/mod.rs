pub mod filter;
pub mod normalizer;
pub mod sorter;
pub mod widths;

pub use normalizer::Normalizer;
pub use widths::ColumnWidths;

use crate::error::Result;
use crate::github::{GithubIssue, IssueFetcher};
use crate::model::{Exclusions, ReportConfig, Row, SortSpec, Source};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, info};

/// Progress notifications of [`fetch_all`].
pub enum FetchStep<'a> {
    Started { source: &'a Source, label: &'a str },
    Finished { source: &'a Source, label: &'a str, kept: usize },
}

pub type FetchProgress<'a> = Box<dyn FnMut(FetchStep<'_>) + 'a>;

/// Rows ready for rendering, with widths covering every row.
#[derive(Debug, Clone)]
pub struct Collected {
    pub rows: Vec<Row>,
    pub widths: ColumnWidths,
}

/// Accumulates the rows of one run.
pub struct Collector<'a> {
    normalizer: Normalizer<'a>,
    exclusions: Exclusions,
    rows: Vec<Row>,
    widths: ColumnWidths,
    seen: HashSet<(String, u64)>,
}

impl<'a> Collector<'a> {
    pub fn new(config: &'a ReportConfig, now: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::new(config, now)?,
            exclusions: config.exclusions,
            rows: vec![],
            widths: ColumnWidths::new(&config.columns()),
            seen: HashSet::new(),
        })
    }

    /// Adds one listing's worth of issues and returns how many became rows.
    pub fn insert_issues(&mut self, issues: &[GithubIssue]) -> Result<usize> {
        let mut kept = 0;
        for issue in issues {
            if self.exclusions.excludes(issue) {
                debug!(url = %issue.html_url, "excluded by label");
                continue;
            }
            let Some(row) = self.normalizer.normalize(issue)? else {
                debug!(url = %issue.html_url, "skipping pull request");
                continue;
            };
            // The listing returns an issue once per searched label it carries; keep one row.
            if !self.seen.insert((row.source.clone(), row.number)) {
                debug!(url = %row.url, "already collected");
                continue;
            }
            self.widths.observe(&row);
            self.rows.push(row);
            kept += 1;
        }
        Ok(kept)
    }

    pub fn finish(self, sort: Option<&SortSpec>) -> Collected {
        let mut rows = self.rows;
        if let Some(sort) = sort {
            sort.sort(&mut rows);
        }
        Collected {
            rows,
            widths: self.widths,
        }
    }
}

/// Fetches every (source, label) pair in order, one request at a time.
pub async fn fetch_all<F: IssueFetcher>(
    fetcher: &F,
    config: &ReportConfig,
    now: DateTime<Utc>,
    mut progress: FetchProgress<'_>,
) -> Result<Collected> {
    let mut collector = Collector::new(config, now)?;
    for source in &config.sources {
        for label in &config.labels {
            let label = label.as_str();
            progress(FetchStep::Started { source, label });
            let issues = fetcher.fetch_issues(source, label, config.state).await?;
            let kept = collector.insert_issues(&issues)?;
            info!(%source, label, listed = issues.len(), kept, "fetched issues");
            progress(FetchStep::Finished { source, label, kept });
        }
    }
    Ok(collector.finish(config.sort.as_ref()))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
