use crate::model::{Column, Row};
use indexmap::IndexMap;

/// Display width of each column, grown as rows are observed.
///
/// Key order is the column order of the report, so renderers take their
/// column list from here.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ColumnWidths {
    widths: IndexMap<Column, usize>,
}

impl ColumnWidths {
    pub fn new(columns: &[Column]) -> Self {
        let widths = columns
            .iter()
            .map(|column| (*column, column.min_width()))
            .collect();
        Self { widths }
    }

    pub fn observe(&mut self, row: &Row) {
        for (column, width) in self.widths.iter_mut() {
            *width = (*width).max(column.cell(row).chars().count());
        }
    }

    pub fn width(&self, column: &Column) -> usize {
        self.widths.get(column).copied().unwrap_or(0)
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.widths.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Column, &usize)> {
        self.widths.iter()
    }
}

#[cfg(test)]
#[path = "widths_tests.rs"]
mod tests;
