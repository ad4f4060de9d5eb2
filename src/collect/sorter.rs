use crate::model::{Column, Row, SortSpec};
use std::cmp::Reverse;

/// One component of a composite sort key.
#[derive(Debug, Clone, Eq, Ord, PartialEq, PartialOrd)]
pub enum SortValue {
    Integer(i128),
    Text(String),
}

impl SortValue {
    pub fn of(column: &Column, row: &Row) -> Self {
        match column {
            Column::Number => SortValue::Integer(row.number.into()),
            Column::Days => SortValue::Integer(row.age_days.into()),
            // Unassigned and unlabelled rows sort as empty text.
            Column::User => SortValue::Text(row.assignees.join(", ")),
            Column::Label => SortValue::Text(row.labels.join(", ")),
            other => SortValue::Text(other.cell(row)),
        }
    }
}

impl SortSpec {
    pub fn key(&self, row: &Row) -> Vec<SortValue> {
        self.columns
            .iter()
            .map(|column| SortValue::of(column, row))
            .collect()
    }

    /// Stable sort; `reversed` flips the whole composite key.
    pub fn sort(&self, rows: &mut [Row]) {
        if self.reversed {
            rows.sort_by_cached_key(|row| Reverse(self.key(row)));
        } else {
            rows.sort_by_cached_key(|row| self.key(row));
        }
    }
}

#[cfg(test)]
#[path = "sorter_tests.rs"]
mod tests;
