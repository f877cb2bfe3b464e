use std::sync::Arc;

use super::column::Column;

/// Derives a stable id for a row from the row and its index.
pub type RowIdFn<T> = Arc<dyn Fn(&T, usize) -> String + Send + Sync>;

/// One row of the computed row model.
#[derive(Debug)]
pub struct Row<'a, T> {
    pub id: String,
    /// Position in the row model, starting at 0.
    pub index: usize,
    pub original: &'a T,
}

impl<T> Clone for Row<'_, T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            index: self.index,
            original: self.original,
        }
    }
}

/// One cell at the crossing of a row and a leaf column.
pub struct Cell<'t, T> {
    pub id: String,
    pub row: &'t Row<'t, T>,
    pub column: &'t Column<T>,
}

/// Strategy turning raw data into the rows a table renders.
pub trait RowModelStrategy<T>: Send + Sync {
    fn rows<'a>(&self, data: &'a [T], row_id: &dyn Fn(&T, usize) -> String) -> Vec<Row<'a, T>>;
}

/// Every data item becomes one row, in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreRowModel;

impl<T> RowModelStrategy<T> for CoreRowModel {
    fn rows<'a>(&self, data: &'a [T], row_id: &dyn Fn(&T, usize) -> String) -> Vec<Row<'a, T>> {
        data.iter()
            .enumerate()
            .map(|(index, original)| Row {
                id: row_id(original, index),
                index,
                original,
            })
            .collect()
    }
}
