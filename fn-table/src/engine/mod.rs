//! Headless table-state engine.
//!
//! The engine knows nothing about how a table looks. It resolves column
//! definitions against a default column, lays out header rows for nested
//! groups, builds the row model and keeps row-selection bookkeeping. Cell,
//! header and footer content is produced by renderer closures stored on the
//! column definitions.
//!
//! Selection is controlled: the table reads the selection it was created
//! with and emits [`Updater`]s through `on_row_selection_change`. Whoever
//! owns the state applies them and builds a fresh table for the next render.

mod column;
mod header;
mod row;
mod selection;
mod table;

pub use column::{
    AccessorFn, CellFn, Column, ColumnDef, ColumnHelper, ColumnKind, ColumnMeta, DefaultColumn,
    HeaderFn, Template, DEFAULT_COLUMN_SIZE,
};
pub use header::{Header, HeaderGroup};
pub use row::{Cell, CoreRowModel, Row, RowIdFn, RowModelStrategy};
pub use selection::{is_selected, OnChange, RowSelectionState, Updater};
pub use table::{CellContext, HeaderContext, Table, TableOptions};
