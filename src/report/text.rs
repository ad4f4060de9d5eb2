use crate::collect::{ColumnWidths, Collected};
use crate::model::Row;
use itertools::Itertools;

pub trait TextReport {
    fn render_text(&self) -> String;
}

impl TextReport for Collected {
    fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&header_line(&self.widths));
        out.push_str(&separator_line(&self.widths));
        for row in &self.rows {
            out.push_str(&row_line(row, &self.widths));
        }
        out
    }
}

fn header_line(widths: &ColumnWidths) -> String {
    let line = widths
        .iter()
        .map(|(column, width)| pad(column.header(), *width))
        .join(" | ");
    format!("{line}\n")
}

fn separator_line(widths: &ColumnWidths) -> String {
    let line = widths.iter().map(|(_, width)| "-".repeat(*width)).join(" + ");
    format!("{line}\n")
}

fn row_line(row: &Row, widths: &ColumnWidths) -> String {
    let line = widths
        .iter()
        .map(|(column, width)| pad(&column.cell(row), *width))
        .join(" | ");
    format!("{line}\n")
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
