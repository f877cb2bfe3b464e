use std::sync::Arc;

use log::debug;

use crate::markup::{ChangeHandler, Element};
use crate::value::CellValue;

use super::column::{Column, ColumnDef, DefaultColumn, Template};
use super::header::{build_header_groups, Header, HeaderGroup};
use super::row::{Cell, CoreRowModel, Row, RowIdFn, RowModelStrategy};
use super::selection::{self, OnChange, RowSelectionState, Updater};

/// Everything a [`Table`] is computed from.
pub struct TableOptions<T> {
    pub columns: Vec<ColumnDef<T>>,
    pub row_model: Arc<dyn RowModelStrategy<T>>,
    pub default_column: DefaultColumn,
    /// Row ids default to the row index.
    pub get_row_id: Option<RowIdFn<T>>,
    pub enable_row_selection: bool,
    pub enable_multi_row_selection: bool,
    pub row_selection: RowSelectionState,
    pub on_row_selection_change: Option<OnChange<RowSelectionState>>,
}

impl<T> TableOptions<T> {
    pub fn new(columns: Vec<ColumnDef<T>>) -> Self {
        Self {
            columns,
            row_model: Arc::new(CoreRowModel),
            default_column: DefaultColumn::default(),
            get_row_id: None,
            enable_row_selection: false,
            enable_multi_row_selection: true,
            row_selection: RowSelectionState::new(),
            on_row_selection_change: None,
        }
    }
}

/// Context handed to header and footer renderers.
pub struct HeaderContext<'t, T> {
    pub table: &'t Table<'t, T>,
    pub header: &'t Header<'t, T>,
}

/// Context handed to cell renderers.
pub struct CellContext<'t, T> {
    pub table: &'t Table<'t, T>,
    pub row: &'t Row<'t, T>,
    pub column: &'t Column<T>,
    pub value: CellValue,
}

impl<T> CellContext<'_, T> {
    pub fn get_value(&self) -> &CellValue {
        &self.value
    }
}

/// A computed table: resolved columns, rows and selection state.
///
/// Tables are cheap to rebuild and are meant to be recreated on every
/// render. Selection changes are never applied in place; they are emitted
/// through `on_row_selection_change` and show up in the next table.
pub struct Table<'a, T> {
    columns: Vec<Column<T>>,
    rows: Vec<Row<'a, T>>,
    row_selection: RowSelectionState,
    on_row_selection_change: Option<OnChange<RowSelectionState>>,
    enable_row_selection: bool,
    enable_multi_row_selection: bool,
}

impl<'a, T> Table<'a, T> {
    pub fn new(data: &'a [T], options: TableOptions<T>) -> Self {
        let TableOptions {
            columns,
            row_model,
            default_column,
            get_row_id,
            enable_row_selection,
            enable_multi_row_selection,
            row_selection,
            on_row_selection_change,
        } = options;

        let columns = columns
            .into_iter()
            .map(|def| Column::resolve(def, &default_column, 0))
            .collect();

        let rows = match &get_row_id {
            Some(get_row_id) => row_model.rows(data, &**get_row_id),
            None => row_model.rows(data, &|_: &T, index: usize| index.to_string()),
        };

        Self {
            columns,
            rows,
            row_selection,
            on_row_selection_change,
            enable_row_selection,
            enable_multi_row_selection,
        }
    }

    /// Top-level columns, groups included.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn leaf_columns(&self) -> Vec<&Column<T>> {
        self.columns.iter().flat_map(Column::leaf_columns).collect()
    }

    pub fn header_groups(&self) -> Vec<HeaderGroup<'_, T>> {
        build_header_groups(&self.columns)
    }

    /// Header groups bottom-up.
    pub fn footer_groups(&self) -> Vec<HeaderGroup<'_, T>> {
        let mut groups = self.header_groups();
        groups.reverse();
        groups
    }

    /// Whether any column defines footer content.
    pub fn has_footer_content(&self) -> bool {
        self.columns.iter().any(Column::has_footer)
    }

    pub fn rows(&self) -> &[Row<'a, T>] {
        &self.rows
    }

    pub fn visible_cells<'t>(&'t self, row: &'t Row<'a, T>) -> Vec<Cell<'t, T>> {
        self.leaf_columns()
            .into_iter()
            .map(|column| Cell {
                id: format!("{}_{}", row.id, column.id),
                row,
                column,
            })
            .collect()
    }

    // Rendering

    /// Header content, or `None` for placeholders. Columns without a header
    /// show their id.
    pub fn render_header(&self, header: &Header<'_, T>) -> Option<Element> {
        if header.is_placeholder {
            return None;
        }
        match &header.column.header {
            Some(template) => Some(self.render_template(template, header)),
            None => Some(Element::text(header.column.id.clone())),
        }
    }

    pub fn render_footer(&self, header: &Header<'_, T>) -> Option<Element> {
        if header.is_placeholder {
            return None;
        }
        header
            .column
            .footer
            .as_ref()
            .map(|template| self.render_template(template, header))
    }

    fn render_template(&self, template: &Template<T>, header: &Header<'_, T>) -> Element {
        match template {
            Template::Text(text) => Element::text(text.clone()),
            Template::Render(f) => f(&HeaderContext {
                table: self,
                header,
            }),
        }
    }

    /// Cell content. Columns without a cell renderer show the raw value.
    pub fn render_cell(&self, cell: &Cell<'_, T>) -> Element {
        let value = cell.column.value(cell.row.original);
        match cell.column.cell_fn() {
            Some(f) => f(&CellContext {
                table: self,
                row: cell.row,
                column: cell.column,
                value,
            }),
            None => Element::text(value.to_string()),
        }
    }

    // Selection

    pub fn row_selection(&self) -> &RowSelectionState {
        &self.row_selection
    }

    pub fn can_select_rows(&self) -> bool {
        self.enable_row_selection
    }

    pub fn can_multi_select(&self) -> bool {
        self.enable_multi_row_selection
    }

    pub fn is_row_selected(&self, row_id: &str) -> bool {
        selection::is_selected(&self.row_selection, row_id)
    }

    pub fn selected_rows(&self) -> Vec<&Row<'a, T>> {
        self.rows
            .iter()
            .filter(|row| self.is_row_selected(&row.id))
            .collect()
    }

    /// True when there is at least one row and every row is selected.
    pub fn is_all_rows_selected(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|row| self.is_row_selected(&row.id))
    }

    /// True when some, but not all, rows are selected.
    pub fn is_some_rows_selected(&self) -> bool {
        let selected = self.selected_rows().len();
        selected > 0 && selected < self.rows.len()
    }

    /// Emit a selection update to the change handler.
    pub fn set_row_selection(&self, updater: Updater<RowSelectionState>) {
        match &self.on_row_selection_change {
            Some(on_change) => on_change(updater),
            None => debug!("row selection change dropped: no change handler"),
        }
    }

    /// Select, deselect (or with `None`, flip) one row.
    pub fn toggle_row_selected(&self, row_id: &str, value: Option<bool>) {
        if !self.enable_row_selection {
            return;
        }
        self.set_row_selection(selection::toggle_row(
            row_id.to_string(),
            value,
            self.enable_multi_row_selection,
        ));
    }

    /// Select or clear every row. `None` selects all unless all are already
    /// selected, in which case it clears them. Selecting all is ignored when
    /// multi-row selection is disabled.
    pub fn toggle_all_rows_selected(&self, value: Option<bool>) {
        if !self.enable_row_selection {
            return;
        }
        let multi = self.enable_multi_row_selection;
        let updater = match value {
            Some(true) if !multi => return,
            Some(value) => selection::toggle_all(self.row_ids(), value),
            None => selection::flip_all(self.row_ids(), multi),
        };
        self.set_row_selection(updater);
    }

    fn row_ids(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.id.clone()).collect()
    }

    /// Change handler for a row's selection control. The handler outlives
    /// the table and applies to whatever state is current when it fires.
    pub fn toggle_row_selected_handler(&self, row: &Row<'_, T>) -> ChangeHandler {
        let on_change = self.on_row_selection_change.clone();
        let enabled = self.enable_row_selection;
        let multi = self.enable_multi_row_selection;
        let id = row.id.clone();

        Arc::new(move |checked: bool| {
            if !enabled {
                return;
            }
            if let Some(on_change) = &on_change {
                on_change(selection::toggle_row(id.clone(), Some(checked), multi));
            }
        })
    }

    /// Change handler for a "select all" control.
    ///
    /// Like the row handlers, it applies to the selection current when it
    /// fires: all rows selected at that point are cleared, anything else
    /// selects every row. The control's reported `checked` value is not
    /// consulted.
    pub fn toggle_all_rows_selected_handler(&self) -> ChangeHandler {
        let on_change = self.on_row_selection_change.clone();
        let enabled = self.enable_row_selection;
        let multi = self.enable_multi_row_selection;
        let ids = self.row_ids();

        Arc::new(move |_checked: bool| {
            if !enabled {
                return;
            }
            if let Some(on_change) = &on_change {
                on_change(selection::flip_all(ids.clone(), multi));
            }
        })
    }
}
