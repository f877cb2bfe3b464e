//! Built-in display columns: row sequence numbers and row selection.

mod multi_select;
mod single_select;

pub use multi_select::{multi_select, MultiSelectProps};
pub use single_select::{single_select, SingleSelectProps};

use crate::engine::{ColumnDef, ColumnHelper};
use crate::markup::Element;

pub const SEQUENCE_COLUMN_ID: &str = "_sequence";
pub const SELECT_COLUMN_ID: &str = "_select";

const SEQUENCE_COLUMN_WIDTH: u16 = 48;
const SELECT_COLUMN_WIDTH: u16 = 32;

/// One-based row position, independent of the row's data.
pub fn sequence_column<T>(helper: &ColumnHelper<T>) -> ColumnDef<T> {
    helper
        .display(SEQUENCE_COLUMN_ID)
        .header("#")
        .size(SEQUENCE_COLUMN_WIDTH)
        .cell(|ctx| Element::text((ctx.row.index + 1).to_string()))
}

/// Checkbox per row plus a "select all" checkbox in the header.
pub fn multi_select_column<T>(helper: &ColumnHelper<T>) -> ColumnDef<T> {
    helper
        .display(SELECT_COLUMN_ID)
        .size(SELECT_COLUMN_WIDTH)
        .header_with(|ctx| {
            multi_select(MultiSelectProps {
                checked: ctx.table.is_all_rows_selected(),
                indeterminate: ctx.table.is_some_rows_selected(),
                on_change: Some(ctx.table.toggle_all_rows_selected_handler()),
                ..Default::default()
            })
        })
        .cell(|ctx| {
            multi_select(MultiSelectProps {
                checked: ctx.table.is_row_selected(&ctx.row.id),
                disabled: !ctx.table.can_select_rows(),
                on_change: Some(ctx.table.toggle_row_selected_handler(ctx.row)),
                ..Default::default()
            })
        })
}

/// Radio button per row. No header control.
pub fn single_select_column<T>(helper: &ColumnHelper<T>) -> ColumnDef<T> {
    helper
        .display(SELECT_COLUMN_ID)
        .header("")
        .size(SELECT_COLUMN_WIDTH)
        .cell(|ctx| {
            single_select(SingleSelectProps {
                checked: ctx.table.is_row_selected(&ctx.row.id),
                disabled: !ctx.table.can_select_rows(),
                on_change: Some(ctx.table.toggle_row_selected_handler(ctx.row)),
                ..Default::default()
            })
        })
}
