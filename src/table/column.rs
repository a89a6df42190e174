//! Row records and column descriptors.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use ratatui::layout::Constraint;

use super::error::{Result, TableError};
use super::value::CellValue;

/// Width of one terminal cell in pixels, used to convert `"120px"` widths.
const PIXELS_PER_CELL: u16 = 8;

/// A row that can be shown in a [`DataTable`](super::DataTable).
///
/// Rows are identified by [`Record::id`] so that selection follows the row
/// across re-sorts and data refreshes.
pub trait Record {
    /// Stable identity of a row.
    type Id: Clone + Eq + Hash + fmt::Debug;

    /// Get the identity of this row.
    fn id(&self) -> Self::Id;

    /// Look up a field by column key.
    ///
    /// Used for columns without an accessor. Unknown keys should return
    /// [`CellValue::Null`].
    fn field(&self, key: &str) -> CellValue;
}

type Accessor<T> = Box<dyn Fn(&T) -> CellValue>;
type CellRenderer<T> = Box<dyn Fn(&CellValue, &T) -> String>;

/// Column width constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed number of terminal cells.
    Cells(u16),
    /// Percentage of the table width.
    Percent(u16),
}

impl ColumnWidth {
    /// Parse a width string.
    ///
    /// Accepts `"12"`, `"12ch"`, `"120px"` and `"20%"`. Pixel widths are
    /// converted to terminal cells, rounding down to at least one cell.
    pub fn parse(width: &str) -> Option<Self> {
        let width = width.trim();

        if let Some(pct) = width.strip_suffix('%') {
            let pct: u16 = pct.trim().parse().ok()?;
            return (1..=100).contains(&pct).then_some(ColumnWidth::Percent(pct));
        }

        if let Some(px) = width.strip_suffix("px") {
            let px: u16 = px.trim().parse().ok()?;
            if px == 0 {
                return None;
            }
            return Some(ColumnWidth::Cells((px / PIXELS_PER_CELL).max(1)));
        }

        let cells = width.strip_suffix("ch").unwrap_or(width);
        let cells: u16 = cells.trim().parse().ok()?;
        (cells > 0).then_some(ColumnWidth::Cells(cells))
    }

    /// Convert to a ratatui layout constraint.
    pub fn constraint(&self) -> Constraint {
        match self {
            ColumnWidth::Cells(n) => Constraint::Length(*n),
            ColumnWidth::Percent(p) => Constraint::Percentage(*p),
        }
    }
}

/// A column descriptor.
///
/// Describes how to label, read, render and optionally sort one column.
pub struct Column<T> {
    key: String,
    header: String,
    accessor: Option<Accessor<T>>,
    cell: Option<CellRenderer<T>>,
    sortable: bool,
    width: Option<String>,
}

impl<T> Column<T> {
    /// Create a new column with the given key and header.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            accessor: None,
            cell: None,
            sortable: false,
            width: None,
        }
    }

    /// Use a custom accessor instead of field lookup by key.
    pub fn accessor(mut self, accessor: impl Fn(&T) -> CellValue + 'static) -> Self {
        self.accessor = Some(Box::new(accessor));
        self
    }

    /// Use a custom cell renderer.
    pub fn cell(mut self, cell: impl Fn(&CellValue, &T) -> String + 'static) -> Self {
        self.cell = Some(Box::new(cell));
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the column width (e.g. `"12"`, `"120px"`, `"20%"`).
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Get the column key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the header label.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Check if the column is sortable.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }
}

impl<T: Record> Column<T> {
    /// Read this column's value from a row.
    pub fn value(&self, row: &T) -> CellValue {
        match &self.accessor {
            Some(accessor) => accessor(row),
            None => row.field(&self.key),
        }
    }

    /// Render this column's cell text for a row.
    pub fn render(&self, row: &T) -> String {
        let value = self.value(row);
        match &self.cell {
            Some(cell) => cell(&value, row),
            None => value.to_string(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("accessor", &self.accessor.is_some())
            .field("cell", &self.cell.is_some())
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .finish()
    }
}

/// A validated, ordered set of columns.
///
/// Column order is render order. Keys are non-empty and unique, and every
/// width string has been parsed.
pub struct ColumnSet<T> {
    columns: Vec<Column<T>>,
    widths: Vec<Option<ColumnWidth>>,
}

impl<T> fmt::Debug for ColumnSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSet")
            .field("columns", &self.columns)
            .field("widths", &self.widths)
            .finish()
    }
}

impl<T> ColumnSet<T> {
    /// Validate and build a column set.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if a key is empty, a key is repeated, or a
    /// width cannot be parsed.
    pub fn new(columns: Vec<Column<T>>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut widths = Vec::with_capacity(columns.len());

        for column in &columns {
            if column.key.is_empty() {
                return Err(TableError::EmptyColumnKey);
            }
            if !seen.insert(column.key.as_str()) {
                return Err(TableError::DuplicateColumnKey(column.key.clone()));
            }
            let width = match &column.width {
                Some(raw) => Some(ColumnWidth::parse(raw).ok_or_else(|| {
                    TableError::InvalidWidth {
                        key: column.key.clone(),
                        width: raw.clone(),
                    }
                })?),
                None => None,
            };
            widths.push(width);
        }

        Ok(Self { columns, widths })
    }

    /// Find a column by key.
    pub fn get(&self, key: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Get a column by render position.
    pub fn get_index(&self, index: usize) -> Option<&Column<T>> {
        self.columns.get(index)
    }

    /// Iterate over the columns in render order.
    pub fn iter(&self) -> impl Iterator<Item = &Column<T>> {
        self.columns.iter()
    }

    /// Get the parsed width of the column at `index`.
    pub fn width(&self, index: usize) -> Option<ColumnWidth> {
        self.widths.get(index).copied().flatten()
    }

    /// Layout constraints for every column, filling unsized columns evenly.
    pub fn constraints(&self) -> Vec<Constraint> {
        self.widths
            .iter()
            .map(|w| w.map(|w| w.constraint()).unwrap_or(Constraint::Fill(1)))
            .collect()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
