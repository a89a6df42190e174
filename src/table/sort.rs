//! Sort state and display order derivation.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::column::{ColumnSet, Record};
use super::value::CellValue;

/// Indicator shown on a sortable column that is not the active sort column.
pub const UNSORTED_INDICATOR: &str = "↕";
/// Indicator shown on the column sorted ascending.
pub const ASCENDING_INDICATOR: &str = "↑";
/// Indicator shown on the column sorted descending.
pub const DESCENDING_INDICATOR: &str = "↓";

/// Sort direction of the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest values first.
    Ascending,
    /// Largest values first.
    Descending,
}

/// How descending order is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescendingOrder {
    /// Sort ascending, then reverse the whole sequence.
    ///
    /// Rows with equal values come out in reverse input order.
    #[default]
    ReverseAfterSort,
    /// Sort with a descending comparator.
    ///
    /// Rows with equal values keep their input order.
    StableComparator,
}

/// The current sort of a table.
///
/// `None` means the table shows rows in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(String, SortDirection)>,
}

impl SortState {
    /// Create an unsorted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state sorted by `key` in `direction`.
    pub fn sorted_by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            active: Some((key.into(), direction)),
        }
    }

    /// Get the active sort key.
    pub fn key(&self) -> Option<&str> {
        self.active.as_ref().map(|(k, _)| k.as_str())
    }

    /// Get the active sort direction.
    pub fn direction(&self) -> Option<SortDirection> {
        self.active.as_ref().map(|(_, d)| *d)
    }

    /// Check if any column is sorted.
    pub fn is_sorted(&self) -> bool {
        self.active.is_some()
    }

    /// Advance the sort cycle for `key`.
    ///
    /// A column that is not active becomes ascending. The active column goes
    /// ascending → descending → unsorted.
    pub fn toggle(&mut self, key: &str) {
        self.active = match self.active.take() {
            Some((active, SortDirection::Ascending)) if active == key => {
                Some((active, SortDirection::Descending))
            }
            Some((active, SortDirection::Descending)) if active == key => None,
            _ => Some((key.to_string(), SortDirection::Ascending)),
        };
    }

    /// Reset to input order.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Get the header indicator for a sortable column.
    pub fn indicator_for(&self, key: &str) -> &'static str {
        match &self.active {
            Some((active, SortDirection::Ascending)) if active == key => ASCENDING_INDICATOR,
            Some((active, SortDirection::Descending)) if active == key => DESCENDING_INDICATOR,
            _ => UNSORTED_INDICATOR,
        }
    }
}

/// Compare two cell values ascending.
///
/// Equal values tie, `Null` sorts before everything else, and the rest
/// follow [`CellValue::natural_cmp`].
pub fn compare_values(a: &CellValue, b: &CellValue) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.natural_cmp(b),
    }
}

/// Derive the display order of `rows`.
///
/// Returns positions into `rows`. The identity order is returned when the
/// table is unsorted or the sort key names no column. `rows` is never
/// reordered.
pub fn derive_display_order<T: Record>(
    rows: &[T],
    columns: &ColumnSet<T>,
    sort: &SortState,
    descending: DescendingOrder,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();

    let Some((key, direction)) = &sort.active else {
        return order;
    };
    let Some(column) = columns.get(key) else {
        return order;
    };

    let values: Vec<CellValue> = rows.iter().map(|row| column.value(row)).collect();

    match (direction, descending) {
        (SortDirection::Ascending, _) => {
            order.sort_by(|&a, &b| compare_values(&values[a], &values[b]));
        }
        (SortDirection::Descending, DescendingOrder::ReverseAfterSort) => {
            order.sort_by(|&a, &b| compare_values(&values[a], &values[b]));
            order.reverse();
        }
        (SortDirection::Descending, DescendingOrder::StableComparator) => {
            order.sort_by(|&a, &b| compare_values(&values[b], &values[a]));
        }
    }

    order
}
