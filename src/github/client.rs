use crate::error::{Error, Result};
use crate::github::GithubIssue;
use crate::model::{IssueState, Source};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

// Only the first page is read.
const PER_PAGE: &str = "100";

/// Lists the issues of a source carrying one label.
pub trait IssueFetcher {
    async fn fetch_issues(
        &self,
        source: &Source,
        label: &str,
        state: IssueState,
    ) -> Result<Vec<GithubIssue>>;
}

pub struct GithubClient {
    http: Client,
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(api_url: &str, token: impl ToString) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;
        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn issues_url(&self, source: &Source) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.api_url, source.owner, source.name
        )
    }
}

impl IssueFetcher for GithubClient {
    async fn fetch_issues(
        &self,
        source: &Source,
        label: &str,
        state: IssueState,
    ) -> Result<Vec<GithubIssue>> {
        let url = self.issues_url(source);
        debug!(%url, label, %state, "requesting issues");
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[
                ("state", state.as_str()),
                ("labels", label),
                ("per_page", PER_PAGE),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<Vec<GithubIssue>>().await?)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
