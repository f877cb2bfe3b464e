//! The `FnTable` component.

use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::column::{build_column, ColumnSpec, DefaultColumnSpec};
use crate::display_columns::{multi_select_column, sequence_column, single_select_column};
use crate::engine::{
    ColumnDef, ColumnHelper, Header, HeaderGroup, OnChange, RowIdFn, RowSelectionState, Table,
    TableOptions, Updater,
};
use crate::markup::{Element, Style};
use crate::state::State;
use crate::value::RowData;

/// How rows can be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// No selection column.
    #[default]
    None,
    /// Radio button per row; at most one row selected.
    Single,
    /// Checkbox per row and a "select all" checkbox in the header.
    Multiple,
}

/// Render options of an [`FnTable`].
pub struct FnTableOptions<T> {
    pub show_sequence: bool,
    pub selection_mode: SelectionMode,
    pub show_footer: bool,
    pub default_column: DefaultColumnSpec,
    pub columns: Vec<ColumnSpec<T>>,
    /// Row ids default to the row index.
    pub row_id: Option<RowIdFn<T>>,
    /// Extra class on the `<table>` element.
    pub class: Option<String>,
}

impl<T> Default for FnTableOptions<T> {
    fn default() -> Self {
        Self {
            show_sequence: false,
            selection_mode: SelectionMode::None,
            show_footer: false,
            default_column: DefaultColumnSpec::default(),
            columns: Vec::new(),
            row_id: None,
            class: None,
        }
    }
}

impl<T> fmt::Debug for FnTableOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTableOptions")
            .field("show_sequence", &self.show_sequence)
            .field("selection_mode", &self.selection_mode)
            .field("show_footer", &self.show_footer)
            .field("default_column", &self.default_column)
            .field("columns", &self.columns)
            .field("row_id", &self.row_id.as_ref().map(|_| ".."))
            .field("class", &self.class)
            .finish()
    }
}

impl<T> FnTableOptions<T> {
    pub fn new(columns: impl IntoIterator<Item = ColumnSpec<T>>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn show_sequence(mut self, show: bool) -> Self {
        self.show_sequence = show;
        self
    }

    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    pub fn show_footer(mut self, show: bool) -> Self {
        self.show_footer = show;
        self
    }

    pub fn default_column(mut self, default_column: DefaultColumnSpec) -> Self {
        self.default_column = default_column;
        self
    }

    pub fn row_id(mut self, f: impl Fn(&T, usize) -> String + Send + Sync + 'static) -> Self {
        self.row_id = Some(Arc::new(f));
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// A mounted data table.
///
/// The instance owns the row selection. Everything else comes in with each
/// call to [`render`](FnTable::render), so one instance can be re-rendered
/// with new rows or options while keeping its selection. Selection controls
/// in the returned markup write back into this instance when they fire.
///
/// # Example
///
/// ```ignore
/// let table = FnTable::new();
/// let options = FnTableOptions::new(vec![
///     ColumnSpec::leaf("firstName", "First Name").into(),
///     ColumnSpec::leaf("age", "Age").align(Alignment::Right).into(),
/// ])
/// .selection_mode(SelectionMode::Multiple);
///
/// let markup = table.render(&people, &options);
/// println!("{}", markup.to_html());
/// ```
#[derive(Debug, Default)]
pub struct FnTable {
    selection: State<RowSelectionState>,
}

impl FnTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current row selection.
    pub fn selection(&self) -> RowSelectionState {
        self.selection.get()
    }

    /// Apply a selection update, exactly as a selection control would.
    pub fn set_selection(&self, updater: Updater<RowSelectionState>) {
        (self.selection_handler())(updater);
    }

    /// The rows whose ids are currently selected.
    pub fn selected_rows<'a, T: RowData + 'static>(
        &self,
        rows: &'a [T],
        options: &FnTableOptions<T>,
    ) -> Vec<&'a T> {
        let table = self.table(rows, options);
        table.selected_rows().into_iter().map(|row| row.original).collect()
    }

    fn selection_handler(&self) -> OnChange<RowSelectionState> {
        let state = self.selection.clone();
        Arc::new(move |updater: Updater<RowSelectionState>| {
            state.replace_with(|previous| updater.apply(previous));
            state.with(|next| debug!("row selection changed: {} row(s) selected", selected_count(next)));
        })
    }

    /// Build the engine table for one render.
    pub fn table<'a, T: RowData + 'static>(
        &self,
        rows: &'a [T],
        options: &FnTableOptions<T>,
    ) -> Table<'a, T> {
        let mut engine_options = TableOptions::new(columns(options));
        engine_options.default_column = options.default_column.to_default_column();
        engine_options.get_row_id = options.row_id.clone();
        engine_options.enable_row_selection = options.selection_mode != SelectionMode::None;
        engine_options.enable_multi_row_selection =
            options.selection_mode == SelectionMode::Multiple;
        engine_options.row_selection = self.selection.get();
        engine_options.on_row_selection_change = Some(self.selection_handler());
        Table::new(rows, engine_options)
    }

    /// Render `rows` into a `<table>` element.
    pub fn render<T: RowData + 'static>(&self, rows: &[T], options: &FnTableOptions<T>) -> Element {
        let table = self.table(rows, options);
        debug!(
            "rendering table: {} row(s), {} column(s), selection {:?}",
            table.rows().len(),
            table.leaf_columns().len(),
            options.selection_mode
        );

        let mut root = Element::new("table")
            .class("fn-table")
            .class(options.class.clone().unwrap_or_default())
            .child(render_head(&table))
            .child(render_body(&table));

        if options.show_footer {
            if let Some(foot) = render_foot(&table) {
                root = root.child(foot);
            }
        }
        root
    }
}

/// Engine columns in display order: sequence, selection, then the specs.
fn columns<T: RowData + 'static>(options: &FnTableOptions<T>) -> Vec<ColumnDef<T>> {
    let helper = ColumnHelper::new();
    let mut columns = Vec::with_capacity(options.columns.len() + 2);

    if options.show_sequence {
        columns.push(sequence_column(&helper));
    }
    match options.selection_mode {
        SelectionMode::None => {}
        SelectionMode::Single => columns.push(single_select_column(&helper)),
        SelectionMode::Multiple => columns.push(multi_select_column(&helper)),
    }
    columns.extend(options.columns.iter().map(|spec| build_column(spec, &helper)));
    columns
}

fn selected_count(state: &RowSelectionState) -> usize {
    state.values().filter(|selected| **selected).count()
}

fn render_head<T>(table: &Table<'_, T>) -> Element {
    Element::new("thead").children(
        table
            .header_groups()
            .iter()
            .map(|group| render_header_row(group, |header| table.render_header(header))),
    )
}

fn render_body<T>(table: &Table<'_, T>) -> Element {
    let selectable = table.can_select_rows();
    Element::new("tbody").children(table.rows().iter().map(|row| {
        let mut tr = Element::new("tr").attr("data-row-id", row.id.clone());
        if selectable {
            tr = tr.attr("data-selected", table.is_row_selected(&row.id).to_string());
        }
        tr.children(table.visible_cells(row).iter().map(|cell| {
            let style = Style::new().text_align(cell.column.meta.align.unwrap_or_default());
            Element::new("td")
                .style(style)
                .child(table.render_cell(cell))
        }))
    }))
}

/// Footer section, or `None` when there is nothing to show.
fn render_foot<T>(table: &Table<'_, T>) -> Option<Element> {
    let groups = table.footer_groups();
    if groups.is_empty() || !table.has_footer_content() {
        return None;
    }
    Some(
        Element::new("tfoot").children(
            groups
                .iter()
                .map(|group| render_header_row(group, |header| table.render_footer(header))),
        ),
    )
}

fn render_header_row<T>(
    group: &HeaderGroup<'_, T>,
    content: impl Fn(&Header<'_, T>) -> Option<Element>,
) -> Element {
    Element::new("tr").children(group.headers.iter().map(|header| {
        let style = Style::new()
            .text_align(header.column.meta.align.unwrap_or_default())
            .width(header.size());
        let th = Element::new("th")
            .attr("colspan", header.col_span.to_string())
            .style(style);
        match content(header) {
            Some(element) => th.child(element),
            None => th,
        }
    }))
}
