//! Header group computation.

use log::trace;

use super::column::Column;

/// One header cell.
pub struct Header<'t, T> {
    pub id: String,
    pub column: &'t Column<T>,
    /// Header row this cell sits in.
    pub depth: usize,
    /// Number of leaf columns spanned.
    pub col_span: usize,
    /// Filler above a leaf column that is shallower than the deepest group.
    pub is_placeholder: bool,
}

impl<T> Header<'_, T> {
    pub fn size(&self) -> u16 {
        self.column.size
    }
}

/// One header row.
pub struct HeaderGroup<'t, T> {
    pub id: String,
    pub depth: usize,
    pub headers: Vec<Header<'t, T>>,
}

/// Lay out header rows for a column tree.
///
/// Groups sit at their own depth and span their leaves. Leaves always sit on
/// the bottom row; rows between a leaf and its parent hold placeholders, so
/// every row spans the same number of leaves.
pub(crate) fn build_header_groups<T>(columns: &[Column<T>]) -> Vec<HeaderGroup<'_, T>> {
    let rows = columns.iter().map(Column::height).max().unwrap_or(0);
    trace!("building {} header group(s) for {} column(s)", rows, columns.len());

    (0..rows)
        .map(|depth| {
            let mut headers = Vec::new();
            for column in columns {
                collect_headers(column, depth, rows, &mut headers);
            }
            HeaderGroup {
                id: depth.to_string(),
                depth,
                headers,
            }
        })
        .collect()
}

fn collect_headers<'t, T>(
    column: &'t Column<T>,
    depth: usize,
    rows: usize,
    out: &mut Vec<Header<'t, T>>,
) {
    if column.is_group() {
        let col_span = column.leaf_count();
        if col_span == 0 {
            return;
        }
        if column.depth == depth {
            out.push(Header {
                id: format!("{depth}_{}", column.id),
                column,
                depth,
                col_span,
                is_placeholder: false,
            });
        } else if column.depth < depth {
            for child in &column.columns {
                collect_headers(child, depth, rows, out);
            }
        }
        return;
    }

    if depth + 1 == rows {
        out.push(Header {
            id: format!("{depth}_{}", column.id),
            column,
            depth,
            col_span: 1,
            is_placeholder: false,
        });
    } else if depth >= column.depth {
        out.push(Header {
            id: format!("{depth}_{}_placeholder", column.id),
            column,
            depth,
            col_span: 1,
            is_placeholder: true,
        });
    }
}
