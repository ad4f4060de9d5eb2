use crate::collect::{ColumnWidths, Collected};
use crate::error::{Error, Result};
use crate::model::{Column, Row};
use crate::report::Summary;
use std::fs;
use std::path::Path;
use tracing::info;

pub trait HtmlReport {
    fn render_html(&self, summary: &Summary) -> String;

    /// Writes the document to `path`, replacing any existing file.
    fn write_html(&self, summary: &Summary, path: &Path) -> Result<()> {
        fs::write(path, self.render_html(summary)).map_err(|source| Error::WriteReport {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), "wrote HTML report");
        Ok(())
    }
}

impl HtmlReport for Collected {
    fn render_html(&self, summary: &Summary) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>GitHub issues</title>
    <style>{css}</style>
</head>
<body>
    <h1>GitHub issues</h1>
{summary}
{issues}
</body>
</html>
"#,
            css = inline_css(),
            summary = render_summary(summary),
            issues = render_issues(&self.rows, &self.widths),
        )
    }
}

fn render_summary(summary: &Summary) -> String {
    let rows = summary
        .entries()
        .iter()
        .map(|(key, value)| {
            format!(
                "        <tr><th>{}</th><td>{}</td></tr>\n",
                html_escape(key),
                html_escape(value)
            )
        })
        .collect::<String>();
    format!("    <table class=\"summary\">\n{rows}    </table>")
}

fn render_issues(rows: &[Row], widths: &ColumnWidths) -> String {
    let header = widths
        .iter()
        .map(|(column, width)| {
            format!(
                "<th style=\"min-width: {width}ch\">{}</th>",
                html_escape(column.header())
            )
        })
        .collect::<String>();
    let body = rows
        .iter()
        .map(|row| {
            let cells = widths
                .columns()
                .map(|column| render_cell(column, row))
                .collect::<String>();
            format!("            <tr>{cells}</tr>\n")
        })
        .collect::<String>();
    format!(
        "    <table class=\"issues\">\n        <thead>\n            <tr>{header}</tr>\n        </thead>\n        <tbody>\n{body}        </tbody>\n    </table>"
    )
}

fn render_cell(column: &Column, row: &Row) -> String {
    let cell = column.cell(row);
    let text = html_escape(&cell);
    if *column == Column::Url {
        format!("<td><a href=\"{text}\">{text}</a></td>")
    } else if column.placeholder() == Some(cell.as_str()) {
        format!("<td class=\"placeholder\">{text}</td>")
    } else {
        format!("<td>{text}</td>")
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn inline_css() -> &'static str {
    r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    margin: 2rem;
    color: #1f2937;
}

h1 {
    font-size: 1.5rem;
}

table {
    border-collapse: collapse;
    margin-bottom: 2rem;
    font-size: 0.875rem;
}

th, td {
    padding: 0.4rem 0.75rem;
    border: 1px solid #e5e7eb;
    text-align: left;
    white-space: nowrap;
}

table.summary th {
    background: #f9fafb;
    font-weight: 600;
}

table.issues thead th {
    background: #1f2937;
    color: #f9fafb;
    font-weight: 600;
}

table.issues tbody tr:nth-child(even) {
    background: #f9fafb;
}

td.placeholder {
    color: #9ca3af;
}

a {
    color: #2563eb;
}
"#
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
