//! Table engine: sorting and row selection over caller records.
//!
//! The engine is independent of rendering. The terminal widget in
//! `ui::components::data_table` paints what the engine derives and forwards
//! key presses back into its operations.

mod column;
mod engine;
mod error;
mod selection;
mod sort;
mod value;

pub use column::{Column, ColumnSet, ColumnWidth, Record};
pub use engine::{BodyState, DataTable, RowSelectCallback, DEFAULT_PLACEHOLDER_ROWS};
pub use error::{Result, TableError};
pub use selection::Selection;
pub use sort::{
    compare_values, derive_display_order, DescendingOrder, SortDirection, SortState,
    ASCENDING_INDICATOR, DESCENDING_INDICATOR, UNSORTED_INDICATOR,
};
pub use value::CellValue;
