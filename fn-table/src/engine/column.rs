//! Column definitions and the helper that builds them.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::markup::{Alignment, Element};
use crate::value::CellValue;

use super::table::{CellContext, HeaderContext};

/// Default column size when neither the column nor the default column sets one.
pub const DEFAULT_COLUMN_SIZE: u16 = 150;

pub type AccessorFn<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
pub type CellFn<T> = Arc<dyn Fn(&CellContext<'_, T>) -> Element + Send + Sync>;
pub type HeaderFn<T> = Arc<dyn Fn(&HeaderContext<'_, T>) -> Element + Send + Sync>;

/// Header or footer content of a column.
pub enum Template<T> {
    Text(String),
    Render(HeaderFn<T>),
}

impl<T> Clone for Template<T> {
    fn clone(&self) -> Self {
        match self {
            Template::Text(text) => Template::Text(text.clone()),
            Template::Render(f) => Template::Render(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Template<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Text(text) => write!(f, "Text({text:?})"),
            Template::Render(_) => write!(f, "Render(..)"),
        }
    }
}

/// Free-form column metadata carried through to rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMeta {
    pub align: Option<Alignment>,
}

/// Values applied to every column that does not set its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultColumn {
    pub size: Option<u16>,
    pub meta: ColumnMeta,
}

pub enum ColumnKind<T> {
    /// Reads a value out of each row.
    Accessor(AccessorFn<T>),
    /// Renders without reading row data (selection, sequence numbers, ...).
    Display,
    /// Spans its sub-columns in the header.
    Group(Vec<ColumnDef<T>>),
}

/// Definition of one column, as handed to a [`Table`](super::Table).
pub struct ColumnDef<T> {
    pub id: String,
    pub kind: ColumnKind<T>,
    pub header: Option<Template<T>>,
    pub footer: Option<Template<T>>,
    pub cell: Option<CellFn<T>>,
    pub size: Option<u16>,
    pub meta: ColumnMeta,
}

impl<T> ColumnDef<T> {
    fn new(id: String, kind: ColumnKind<T>) -> Self {
        Self {
            id,
            kind,
            header: None,
            footer: None,
            cell: None,
            size: None,
            meta: ColumnMeta::default(),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, ColumnKind::Group(_))
    }

    /// Sub-columns of a group; empty for any other kind.
    pub fn columns(&self) -> &[ColumnDef<T>] {
        match &self.kind {
            ColumnKind::Group(columns) => columns,
            _ => &[],
        }
    }

    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(Template::Text(text.into()));
        self
    }

    pub fn header_with(
        mut self,
        f: impl Fn(&HeaderContext<'_, T>) -> Element + Send + Sync + 'static,
    ) -> Self {
        self.header = Some(Template::Render(Arc::new(f)));
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(Template::Text(text.into()));
        self
    }

    pub fn footer_with(
        mut self,
        f: impl Fn(&HeaderContext<'_, T>) -> Element + Send + Sync + 'static,
    ) -> Self {
        self.footer = Some(Template::Render(Arc::new(f)));
        self
    }

    pub fn cell(
        mut self,
        f: impl Fn(&CellContext<'_, T>) -> Element + Send + Sync + 'static,
    ) -> Self {
        self.cell = Some(Arc::new(f));
        self
    }

    pub fn size(mut self, size: u16) -> Self {
        self.size = Some(size);
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.meta.align = Some(align);
        self
    }

    pub fn meta(mut self, meta: ColumnMeta) -> Self {
        self.meta = meta;
        self
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            ColumnKind::Accessor(_) => "accessor",
            ColumnKind::Display => "display",
            ColumnKind::Group(_) => "group",
        };
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("kind", &kind)
            .field("header", &self.header)
            .field("size", &self.size)
            .field("meta", &self.meta)
            .field("columns", &self.columns())
            .finish()
    }
}

/// Factory for column definitions over rows of type `T`.
pub struct ColumnHelper<T> {
    _rows: PhantomData<fn(&T)>,
}

impl<T> Default for ColumnHelper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ColumnHelper<T> {
    pub fn new() -> Self {
        Self { _rows: PhantomData }
    }

    /// A data column whose value is read with `accessor`.
    pub fn accessor(
        &self,
        id: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> ColumnDef<T> {
        ColumnDef::new(id.into(), ColumnKind::Accessor(Arc::new(accessor)))
    }

    /// A column with no value of its own.
    pub fn display(&self, id: impl Into<String>) -> ColumnDef<T> {
        ColumnDef::new(id.into(), ColumnKind::Display)
    }

    /// A header group spanning `columns`.
    pub fn group(&self, id: impl Into<String>, columns: Vec<ColumnDef<T>>) -> ColumnDef<T> {
        ColumnDef::new(id.into(), ColumnKind::Group(columns))
    }
}

/// A column definition resolved against the table's default column.
pub struct Column<T> {
    pub id: String,
    /// Nesting depth; top-level columns are at depth 0.
    pub depth: usize,
    /// Rendered width. Groups span the sum of their leaves.
    pub size: u16,
    pub meta: ColumnMeta,
    pub header: Option<Template<T>>,
    pub footer: Option<Template<T>>,
    pub columns: Vec<Column<T>>,
    accessor: Option<AccessorFn<T>>,
    cell: Option<CellFn<T>>,
    group: bool,
}

impl<T> Column<T> {
    pub(crate) fn resolve(def: ColumnDef<T>, defaults: &DefaultColumn, depth: usize) -> Self {
        let ColumnDef {
            id,
            kind,
            header,
            footer,
            cell,
            size,
            meta,
        } = def;

        let meta = ColumnMeta {
            align: meta.align.or(defaults.meta.align),
        };
        let own_size = size.or(defaults.size).unwrap_or(DEFAULT_COLUMN_SIZE);

        match kind {
            ColumnKind::Group(children) => {
                let columns: Vec<Column<T>> = children
                    .into_iter()
                    .map(|child| Column::resolve(child, defaults, depth + 1))
                    .collect();
                let size = columns
                    .iter()
                    .map(|c| c.size)
                    .fold(0u16, u16::saturating_add);
                Self {
                    id,
                    depth,
                    size,
                    meta,
                    header,
                    footer,
                    columns,
                    accessor: None,
                    cell: None,
                    group: true,
                }
            }
            ColumnKind::Accessor(accessor) => Self {
                id,
                depth,
                size: own_size,
                meta,
                header,
                footer,
                columns: Vec::new(),
                accessor: Some(accessor),
                cell,
                group: false,
            },
            ColumnKind::Display => Self {
                id,
                depth,
                size: own_size,
                meta,
                header,
                footer,
                columns: Vec::new(),
                accessor: None,
                cell,
                group: false,
            },
        }
    }

    pub fn is_group(&self) -> bool {
        self.group
    }

    /// Number of header rows this column occupies, itself included.
    pub fn height(&self) -> usize {
        1 + self.columns.iter().map(Column::height).max().unwrap_or(0)
    }

    /// Leaf descendants in display order. A leaf column returns itself.
    pub fn leaf_columns(&self) -> Vec<&Column<T>> {
        if !self.group {
            return vec![self];
        }
        self.columns.iter().flat_map(Column::leaf_columns).collect()
    }

    pub fn leaf_count(&self) -> usize {
        if self.group {
            self.columns.iter().map(Column::leaf_count).sum()
        } else {
            1
        }
    }

    /// Value of this column for `row`. Columns without an accessor are empty.
    pub fn value(&self, row: &T) -> CellValue {
        self.accessor
            .as_ref()
            .map(|accessor| accessor(row))
            .unwrap_or_default()
    }

    pub(crate) fn cell_fn(&self) -> Option<&CellFn<T>> {
        self.cell.as_ref()
    }

    pub(crate) fn has_footer(&self) -> bool {
        self.footer.is_some() || self.columns.iter().any(Column::has_footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_size_is_sum_of_leaves() {
        let helper = ColumnHelper::<()>::new();
        let def = helper.group(
            "name",
            vec![
                helper.display("first").size(100),
                helper.display("last"),
            ],
        );
        let defaults = DefaultColumn {
            size: Some(80),
            meta: ColumnMeta::default(),
        };
        let column = Column::resolve(def, &defaults, 0);

        assert_eq!(column.size, 180);
        assert_eq!(column.leaf_count(), 2);
        assert_eq!(column.height(), 2);
        assert_eq!(column.columns[1].depth, 1);
    }

    #[test]
    fn test_default_size_when_unset() {
        let helper = ColumnHelper::<()>::new();
        let column = Column::resolve(helper.display("x"), &DefaultColumn::default(), 0);
        assert_eq!(column.size, DEFAULT_COLUMN_SIZE);
        assert_eq!(column.meta.align, None);
    }
}
