pub mod client;
pub mod issue;

pub use client::{GithubClient, IssueFetcher, DEFAULT_API_URL};
pub use issue::{GithubIssue, GithubLabel, GithubUser};
