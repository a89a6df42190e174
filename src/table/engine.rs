//! The data table engine.
//!
//! [`DataTable`] owns the rows, a validated column set, the sort state and
//! the selection. The display order is derived from `(rows, columns, sort)`
//! and cached until one of those inputs changes.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use super::column::{ColumnSet, Record};
use super::error::{Result, TableError};
use super::selection::Selection;
use super::sort::{derive_display_order, DescendingOrder, SortState};

/// Number of placeholder rows rendered while loading.
pub const DEFAULT_PLACEHOLDER_ROWS: usize = 5;

/// Callback invoked with the selected rows after every selection change.
pub type RowSelectCallback<T> = Box<dyn FnMut(&[&T])>;

/// What the table body should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    /// Data is loading; show placeholder rows.
    Loading {
        /// Number of placeholder rows.
        placeholder_rows: usize,
    },
    /// There is nothing to display.
    Empty,
    /// Show one row per display entry.
    Rows,
}

/// A sortable, selectable data table.
pub struct DataTable<T: Record> {
    /// The rows in input order.
    rows: Vec<T>,
    /// Column descriptors in render order.
    columns: ColumnSet<T>,
    /// Whether data is loading.
    loading: bool,
    /// Whether rows can be selected.
    selectable: bool,
    /// Current sort.
    sort: SortState,
    /// How descending order is produced.
    descending: DescendingOrder,
    /// Selected row identities.
    selection: Selection<T::Id>,
    /// Cached display order (positions into `rows`).
    display: Vec<usize>,
    /// Placeholder row count for the loading state.
    placeholder_rows: usize,
    /// Selection observer.
    on_row_select: Option<RowSelectCallback<T>>,
}

impl<T: Record> DataTable<T> {
    /// Create a table over `rows` with the given columns.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateRowId`] if two rows share an id.
    pub fn new(rows: Vec<T>, columns: ColumnSet<T>) -> Result<Self> {
        check_unique_ids(&rows)?;
        let display = (0..rows.len()).collect();
        Ok(Self {
            rows,
            columns,
            loading: false,
            selectable: false,
            sort: SortState::new(),
            descending: DescendingOrder::default(),
            selection: Selection::new(),
            display,
            placeholder_rows: DEFAULT_PLACEHOLDER_ROWS,
            on_row_select: None,
        })
    }

    /// Set the loading state.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Enable or disable row selection.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Observe selection changes.
    pub fn on_row_select(mut self, callback: impl FnMut(&[&T]) + 'static) -> Self {
        self.on_row_select = Some(Box::new(callback));
        self
    }

    /// Choose how descending order is produced.
    pub fn with_descending_order(mut self, descending: DescendingOrder) -> Self {
        self.descending = descending;
        self.rederive();
        self
    }

    /// Set the number of placeholder rows shown while loading.
    pub fn with_placeholder_rows(mut self, count: usize) -> Self {
        self.placeholder_rows = count;
        self
    }

    /// Replace the rows.
    ///
    /// Selected rows that are no longer present are dropped from the
    /// selection, and the observer is told if that changed anything.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateRowId`] if two rows share an id. The
    /// table is left unchanged.
    pub fn set_rows(&mut self, rows: Vec<T>) -> Result<()> {
        check_unique_ids(&rows)?;
        self.rows = rows;
        self.rederive();

        let present: HashSet<T::Id> = self.rows.iter().map(|row| row.id()).collect();
        let removed = self.selection.retain_present(&present);
        if removed > 0 {
            debug!(removed, "Dropped selection for rows no longer present");
            self.report_selection();
        }
        Ok(())
    }

    /// Set the loading state.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Check if the table is loading.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Check if rows can be selected.
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Get the rows in input order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Get the column set.
    pub fn columns(&self) -> &ColumnSet<T> {
        &self.columns
    }

    /// Get the current sort.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Get the descending order policy.
    pub fn descending_order(&self) -> DescendingOrder {
        self.descending
    }

    /// Iterate over the rows in display order.
    pub fn display_rows(&self) -> impl Iterator<Item = &T> {
        self.display.iter().map(|&i| &self.rows[i])
    }

    /// Get the row at a display position.
    pub fn display_row(&self, position: usize) -> Option<&T> {
        self.display.get(position).map(|&i| &self.rows[i])
    }

    /// Get the number of displayed rows.
    pub fn display_len(&self) -> usize {
        self.display.len()
    }

    /// Advance the sort cycle of a column.
    ///
    /// Returns false, leaving the sort unchanged, if the column does not
    /// exist or is not sortable.
    pub fn toggle_sort(&mut self, key: &str) -> bool {
        match self.columns.get(key) {
            Some(column) if column.is_sortable() => {}
            _ => {
                trace!(key, "Ignoring sort toggle on non-sortable column");
                return false;
            }
        }

        self.sort.toggle(key);
        debug!(
            key = ?self.sort.key(),
            direction = ?self.sort.direction(),
            "Sort changed"
        );
        self.rederive();
        true
    }

    /// Flip selection of the row at a display position.
    ///
    /// Returns false if selection is disabled or the position is out of
    /// range.
    pub fn toggle_row(&mut self, position: usize) -> bool {
        if !self.selectable {
            return false;
        }
        let Some(row) = self.display_row(position) else {
            return false;
        };

        let id = row.id();
        let selected = self.selection.toggle(id.clone());
        debug!(?id, position, selected, "Row selection toggled");
        self.report_selection();
        true
    }

    /// Select every displayed row, or clear the selection if all are
    /// already selected.
    ///
    /// Returns false if selection is disabled.
    pub fn toggle_all(&mut self) -> bool {
        if !self.selectable {
            return false;
        }

        if self.is_all_selected() {
            self.selection.clear();
            debug!("Selection cleared");
        } else {
            let ids: Vec<T::Id> = self.display_rows().map(|row| row.id()).collect();
            debug!(count = ids.len(), "All rows selected");
            self.selection.select_only(ids);
        }
        self.report_selection();
        true
    }

    /// Check if every displayed row is selected.
    ///
    /// Always false when selection is disabled or nothing is displayed.
    pub fn is_all_selected(&self) -> bool {
        if !self.selectable {
            return false;
        }
        let ids: Vec<T::Id> = self.display_rows().map(|row| row.id()).collect();
        self.selection.covers(ids.iter())
    }

    /// Check if the row at a display position is selected.
    pub fn is_selected_at(&self, position: usize) -> bool {
        self.display_row(position)
            .map(|row| self.selection.contains(&row.id()))
            .unwrap_or(false)
    }

    /// Get the selected rows in display order.
    pub fn selected_rows(&self) -> Vec<&T> {
        collect_selected(&self.rows, &self.display, &self.selection)
    }

    /// Get the number of selected rows.
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Decide what the body shows.
    ///
    /// Loading takes priority over the empty state.
    pub fn body_state(&self) -> BodyState {
        if self.loading {
            BodyState::Loading {
                placeholder_rows: self.placeholder_rows,
            }
        } else if self.display.is_empty() {
            BodyState::Empty
        } else {
            BodyState::Rows
        }
    }

    /// Get the header sort indicator of a column.
    ///
    /// Returns `None` for unknown or non-sortable columns.
    pub fn sort_indicator(&self, key: &str) -> Option<&'static str> {
        self.columns
            .get(key)
            .filter(|c| c.is_sortable())
            .map(|_| self.sort.indicator_for(key))
    }

    /// Render the cell at a display position and column index.
    pub fn cell_text(&self, position: usize, column: usize) -> Option<String> {
        let row = self.display_row(position)?;
        let column = self.columns.get_index(column)?;
        Some(column.render(row))
    }

    /// Recompute the cached display order.
    fn rederive(&mut self) {
        self.display = derive_display_order(&self.rows, &self.columns, &self.sort, self.descending);
        trace!(rows = self.display.len(), "Display order derived");
    }

    /// Tell the observer about the current selection.
    fn report_selection(&mut self) {
        if let Some(callback) = self.on_row_select.as_mut() {
            let selected = collect_selected(&self.rows, &self.display, &self.selection);
            callback(&selected);
        }
    }
}

/// Reject row sets in which two rows share an id.
///
/// Selection is keyed by id, so a shared id would select both rows at once.
fn check_unique_ids<T: Record>(rows: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        let id = row.id();
        if !seen.insert(id.clone()) {
            warn!(?id, "Rejected rows with a duplicate id");
            return Err(TableError::DuplicateRowId(format!("{:?}", id)));
        }
    }
    Ok(())
}

/// Materialize the selected rows in display order.
fn collect_selected<'a, T: Record>(
    rows: &'a [T],
    display: &[usize],
    selection: &Selection<T::Id>,
) -> Vec<&'a T> {
    display
        .iter()
        .map(|&i| &rows[i])
        .filter(|row| selection.contains(&row.id()))
        .collect()
}
