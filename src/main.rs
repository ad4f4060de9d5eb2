mod collect;
mod error;
mod github;
mod model;
mod report;
mod utils;

use crate::collect::fetch_all;
use crate::error::{Error, Result};
use crate::github::{GithubClient, DEFAULT_API_URL};
use crate::model::{
    Exclusions, IssueState, ReportConfig, SortSpec, Source, DEFAULT_SOURCE_PATTERN,
};
use crate::report::{HtmlReport, Summary, TextReport};
use crate::utils::{fetch_spinner, spinner_progress};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// List GitHub issues carrying any of the given labels across several repositories.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
struct Args {
    /// Repositories to search, as owner/name
    #[arg(
        long = "repos",
        value_delimiter = ',',
        default_values = [
            "Azure/azure-sdk-for-python",
            "Azure/azure-sdk-for-net",
            "Azure/azure-sdk-for-java",
            "Azure/azure-sdk-for-js",
        ]
    )]
    repos: Vec<String>,
    /// JSON file of repositories (`{"name": {"owner": "..."}}`), replaces --repos
    #[arg(long = "sources-file")]
    sources_file: Option<PathBuf>,
    /// Labels to search for; an issue matching any of them is listed
    #[arg(
        long = "labels",
        value_delimiter = ',',
        default_values = ["AI Projects", "AI Model Inference"]
    )]
    labels: Vec<String>,
    /// Extra labels shown in the label column when present, without filtering on them
    #[arg(long = "additional-labels", value_delimiter = ',')]
    additional_labels: Vec<String>,
    #[arg(long, value_enum, default_value_t = IssueState::Open)]
    state: IssueState,
    /// Leave out issues labeled 'feature-request'
    #[arg(long)]
    exclude_feature_requests: bool,
    /// Leave out issues labeled 'issue-addressed'
    #[arg(long)]
    exclude_addressed: bool,
    /// Sort by one or more columns, like '-s days' or '-s source,number'
    #[arg(short = 's', long = "sort")]
    sort: Option<String>,
    /// Reverse the sort order
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,
    /// Also write the report as HTML to this file
    #[arg(long = "html")]
    html: Option<PathBuf>,
    #[arg(long = "api-url", default_value = DEFAULT_API_URL)]
    api_url: String,
    /// Regex with one capture group extracting the source column from an issue URL
    #[arg(long = "source-pattern", default_value = DEFAULT_SOURCE_PATTERN)]
    source_pattern: String,
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();
    let args = Args::parse();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(configuration = err.is_configuration(), "report aborted");
            eprintln!("\nERROR: {err}\n");
            if err.is_configuration() {
                eprintln!("Run with --help for usage.");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let token = args
        .token
        .clone()
        .filter(|token| !token.trim().is_empty())
        .ok_or(Error::MissingToken)?;
    let config = build_config(args)?;

    let now = Utc::now();
    let summary = Summary::new(&config, now);
    println!("{}", summary.render_text());

    let client = GithubClient::new(&args.api_url, token)?;
    let pb = fetch_spinner();
    let collected = fetch_all(&client, &config, now, spinner_progress(&pb)).await;
    pb.finish_and_clear();
    let collected = collected?;

    print!("{}", collected.render_text());
    if let Some(path) = &config.html_path {
        collected.write_html(&summary, path)?;
        println!("\nHTML report written to {}", path.display());
    }
    Ok(())
}

fn build_config(args: &Args) -> Result<ReportConfig> {
    let sources = match &args.sources_file {
        Some(path) => Source::from_config(path)?,
        None => args
            .repos
            .iter()
            .map(|slug| Source::from_slug(slug))
            .collect::<Result<Vec<_>>>()?,
    };
    let sort = args
        .sort
        .as_deref()
        .map(|spec| SortSpec::parse(spec, args.reverse, args.state))
        .transpose()?;
    Ok(ReportConfig {
        sources,
        labels: trimmed(&args.labels),
        additional_labels: trimmed(&args.additional_labels),
        state: args.state,
        exclusions: Exclusions {
            feature_requests: args.exclude_feature_requests,
            addressed: args.exclude_addressed,
        },
        sort,
        html_path: args.html.clone(),
        source_pattern: args.source_pattern.clone(),
    })
}

fn trimmed(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
