//! Declarative column specs and their translation into engine columns.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::engine::{ColumnDef, ColumnHelper, ColumnMeta, DefaultColumn, HeaderContext, Template};
use crate::markup::{Alignment, Element};
use crate::value::{CellValue, RowData};

/// Custom cell renderer: receives an accessor for the cell value and the row.
pub type CellRenderer<T> = Arc<dyn Fn(&dyn Fn() -> CellValue, &T) -> Element + Send + Sync>;

/// Header renderer: receives the children of the spec it belongs to.
pub type HeaderRenderer<T> = Arc<dyn Fn(&[ColumnSpec<T>]) -> Element + Send + Sync>;

/// Header or footer descriptor.
pub enum HeaderSpec<T> {
    Text(String),
    Render(HeaderRenderer<T>),
}

impl<T> HeaderSpec<T> {
    pub fn render(f: impl Fn(&[ColumnSpec<T>]) -> Element + Send + Sync + 'static) -> Self {
        HeaderSpec::Render(Arc::new(f))
    }
}

impl<T: 'static> HeaderSpec<T> {
    /// Resolve into an engine template. Render functions run once, here,
    /// and the element they return is reused for every render of the header.
    fn resolve(&self, children: &[ColumnSpec<T>]) -> Template<T> {
        match self {
            HeaderSpec::Text(text) => Template::Text(text.clone()),
            HeaderSpec::Render(f) => {
                let element = f(children);
                Template::Render(Arc::new(move |_: &HeaderContext<'_, T>| element.clone()))
            }
        }
    }
}

impl<T> Clone for HeaderSpec<T> {
    fn clone(&self) -> Self {
        match self {
            HeaderSpec::Text(text) => HeaderSpec::Text(text.clone()),
            HeaderSpec::Render(f) => HeaderSpec::Render(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for HeaderSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderSpec::Text(text) => write!(f, "Text({text:?})"),
            HeaderSpec::Render(_) => write!(f, "Render(..)"),
        }
    }
}

impl<T> From<&str> for HeaderSpec<T> {
    fn from(text: &str) -> Self {
        HeaderSpec::Text(text.to_string())
    }
}

impl<T> From<String> for HeaderSpec<T> {
    fn from(text: String) -> Self {
        HeaderSpec::Text(text)
    }
}

/// A data column reading `key` from each row.
pub struct LeafSpec<T> {
    pub key: String,
    pub header: HeaderSpec<T>,
    pub footer: Option<HeaderSpec<T>>,
    pub width: Option<u16>,
    pub alignment: Option<Alignment>,
    pub cell: Option<CellRenderer<T>>,
}

impl<T> LeafSpec<T> {
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn footer(mut self, footer: impl Into<HeaderSpec<T>>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn cell(
        mut self,
        f: impl Fn(&dyn Fn() -> CellValue, &T) -> Element + Send + Sync + 'static,
    ) -> Self {
        self.cell = Some(Arc::new(f));
        self
    }
}

/// A header spanning its children. Has no value of its own.
pub struct GroupSpec<T> {
    pub key: Option<String>,
    pub header: HeaderSpec<T>,
    pub footer: Option<HeaderSpec<T>>,
    pub children: Vec<ColumnSpec<T>>,
}

impl<T> GroupSpec<T> {
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<HeaderSpec<T>>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// Caller-declared description of one column or column group.
pub enum ColumnSpec<T> {
    Leaf(LeafSpec<T>),
    Group(GroupSpec<T>),
}

impl<T> ColumnSpec<T> {
    pub fn leaf(key: impl Into<String>, header: impl Into<HeaderSpec<T>>) -> LeafSpec<T> {
        LeafSpec {
            key: key.into(),
            header: header.into(),
            footer: None,
            width: None,
            alignment: None,
            cell: None,
        }
    }

    pub fn group(
        header: impl Into<HeaderSpec<T>>,
        children: impl IntoIterator<Item = ColumnSpec<T>>,
    ) -> GroupSpec<T> {
        GroupSpec {
            key: None,
            header: header.into(),
            footer: None,
            children: children.into_iter().collect(),
        }
    }

    pub fn children(&self) -> &[ColumnSpec<T>] {
        match self {
            ColumnSpec::Leaf(_) => &[],
            ColumnSpec::Group(group) => &group.children,
        }
    }

    /// Number of data columns this spec contributes.
    pub fn leaf_count(&self) -> usize {
        match self {
            ColumnSpec::Leaf(_) => 1,
            ColumnSpec::Group(group) => group.children.iter().map(ColumnSpec::leaf_count).sum(),
        }
    }
}

impl<T> From<LeafSpec<T>> for ColumnSpec<T> {
    fn from(spec: LeafSpec<T>) -> Self {
        ColumnSpec::Leaf(spec)
    }
}

impl<T> From<GroupSpec<T>> for ColumnSpec<T> {
    fn from(spec: GroupSpec<T>) -> Self {
        ColumnSpec::Group(spec)
    }
}

impl<T> fmt::Debug for ColumnSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSpec::Leaf(leaf) => f
                .debug_struct("Leaf")
                .field("key", &leaf.key)
                .field("header", &leaf.header)
                .field("width", &leaf.width)
                .field("alignment", &leaf.alignment)
                .field("cell", &leaf.cell.as_ref().map(|_| ".."))
                .finish(),
            ColumnSpec::Group(group) => f
                .debug_struct("Group")
                .field("key", &group.key)
                .field("header", &group.header)
                .field("children", &group.children)
                .finish(),
        }
    }
}

/// Width and alignment applied to every column that does not set its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultColumnSpec {
    #[serde(default)]
    pub width: Option<u16>,
    #[serde(default)]
    pub alignment: Option<Alignment>,
}

impl DefaultColumnSpec {
    pub fn to_default_column(self) -> DefaultColumn {
        DefaultColumn {
            size: self.width,
            meta: ColumnMeta {
                align: self.alignment,
            },
        }
    }
}

/// Translate one spec into an engine column definition.
///
/// Groups keep their children's order. Leaves read their key from the row and
/// show an empty value when the row has no such field. Alignment is copied
/// only when the spec sets it; default-column values are layered in by the
/// engine.
pub fn build_column<T: RowData + 'static>(
    spec: &ColumnSpec<T>,
    helper: &ColumnHelper<T>,
) -> ColumnDef<T> {
    match spec {
        ColumnSpec::Group(group) => {
            let columns = group
                .children
                .iter()
                .map(|child| build_column(child, helper))
                .collect();
            let mut def = helper.group(group.key.clone().unwrap_or_default(), columns);
            def.header = Some(group.header.resolve(&group.children));
            def.footer = group
                .footer
                .as_ref()
                .map(|footer| footer.resolve(&group.children));
            def
        }
        ColumnSpec::Leaf(leaf) => {
            let key = leaf.key.clone();
            let mut def = helper.accessor(leaf.key.clone(), move |row: &T| {
                row.get(&key).unwrap_or_default()
            });
            def.header = Some(leaf.header.resolve(&[]));
            def.footer = leaf.footer.as_ref().map(|footer| footer.resolve(&[]));
            if let Some(renderer) = &leaf.cell {
                let renderer = Arc::clone(renderer);
                def = def.cell(move |ctx| renderer(&|| ctx.get_value().clone(), ctx.row.original));
            }
            def.size = leaf.width;
            def.meta.align = leaf.alignment;
            def
        }
    }
}
