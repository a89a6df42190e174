//! Reusable UI components.

mod data_table;
mod help_bar;
mod input_field;
mod loading;

pub use data_table::{TableAction, TableView, EMPTY_MESSAGE};
pub use help_bar::render_context_help;
pub use input_field::{Footer, InputField, InputKind, InputSize, InputVariant, ValueSource};
pub use loading::Spinner;
