use crate::model::ReportConfig;
use chrono::{DateTime, Utc};
use itertools::Itertools;

/// The run configuration as label/value pairs, shared by the console header
/// and the HTML metadata table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Summary {
    entries: Vec<(&'static str, String)>,
}

impl Summary {
    pub fn new(config: &ReportConfig, generated_at: DateTime<Utc>) -> Self {
        let mut entries = vec![
            (
                "Generated",
                generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ),
            ("Sources", config.sources.iter().join(", ")),
            ("Labels", config.labels.join(", ")),
        ];
        if !config.additional_labels.is_empty() {
            entries.push(("Additional labels", config.additional_labels.join(", ")));
        }
        let exclusions = config.exclusions.describe();
        if !exclusions.is_empty() {
            entries.push(("Excluding", exclusions.join("; ")));
        }
        entries.push(("State", config.state.to_string()));
        if let Some(path) = &config.html_path {
            entries.push(("HTML report", path.display().to_string()));
        }
        if let Some(sort) = &config.sort {
            entries.push(("Sort by", sort.to_string()));
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[(&'static str, String)] {
        &self.entries
    }

    pub fn render_text(&self) -> String {
        let width = self
            .entries
            .iter()
            .map(|(key, _)| key.len() + 1)
            .max()
            .unwrap_or(0);
        self.entries
            .iter()
            .map(|(key, value)| format!("{:<width$} {value}\n", format!("{key}:")))
            .collect()
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
