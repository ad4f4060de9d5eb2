use thiserror::Error;

const TOKEN_HINT: &str = "  hint: to get a GitHub token and configure it for Single Sign On (SSO):
  (1) Go to https://github.com/settings/apps -> Personal access tokens -> Tokens (classic),
      then click 'Generate new token (classic)'.
  (2) Back on https://github.com/settings/apps -> Personal access tokens -> Tokens (classic),
      click 'Configure SSO' next to the token and authorize your organization.
  (3) Export it: export GITHUB_TOKEN=<token>";

/// Everything that can abort a report run.
///
/// Configuration problems are detected before the first request; everything
/// else comes from the remote side and aborts the run without a partial report.
#[derive(Debug, Error)]
pub enum Error {
    #[error("environment variable GITHUB_TOKEN not defined\n{}", TOKEN_HINT)]
    MissingToken,

    #[error("unknown sort column: '{name}'\n  hint: valid columns are: {valid}")]
    UnknownSortColumn { name: String, valid: String },

    #[error("invalid source '{0}'\n  hint: sources are written as owner/name")]
    InvalidSource(String),

    #[error("invalid sources file {path}: {reason}")]
    InvalidSourcesFile { path: String, reason: String },

    #[error("invalid source pattern '{pattern}': {reason}")]
    InvalidSourcePattern { pattern: String, reason: String },

    #[error("failed with status code: {status}, message: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("could not extract source from URL: {0}")]
    SourceNotInUrl(String),

    #[error("issue {url} has no {field} timestamp")]
    MissingTimestamp { url: String, field: &'static str },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not write HTML report {path}: {source}")]
    WriteReport {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// True for errors caused by how the tool was invoked rather than by the remote API.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::MissingToken
                | Error::UnknownSortColumn { .. }
                | Error::InvalidSource(_)
                | Error::InvalidSourcesFile { .. }
                | Error::InvalidSourcePattern { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
