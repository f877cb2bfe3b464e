//! Data-table component.
//!
//! An [`FnTable`] renders rows into a `<table>` element tree from a list of
//! declarative [`ColumnSpec`]s. It supports:
//! - Nested column groups with spanning header rows
//! - A sequence-number column
//! - Single (radio) or multiple (checkbox) row selection
//! - Footers
//!
//! The table layout and selection bookkeeping live in the headless
//! [`engine`]; this crate's component adapts column specs into engine
//! columns and renders the engine's model into [`markup`].

pub mod column;
pub mod config;
pub mod display_columns;
pub mod engine;
pub mod error;
pub mod markup;
pub mod state;
pub mod table;
pub mod value;

pub use column::{build_column, ColumnSpec, DefaultColumnSpec, GroupSpec, HeaderSpec, LeafSpec};
pub use config::{ColumnConfig, TableConfig};
pub use error::ConfigError;
pub use markup::{Alignment, Element};
pub use table::{FnTable, FnTableOptions, SelectionMode};
pub use value::{CellValue, RowData};

pub mod prelude {
    pub use crate::column::{ColumnSpec, DefaultColumnSpec, HeaderSpec};
    pub use crate::config::TableConfig;
    pub use crate::engine::{RowSelectionState, Updater};
    pub use crate::markup::{Alignment, Element, Style};
    pub use crate::table::{FnTable, FnTableOptions, SelectionMode};
    pub use crate::value::{CellValue, RowData};
}
