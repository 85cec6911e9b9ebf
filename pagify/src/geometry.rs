//! Pure grid math: page index → column / cell / placement.
//!
//! Page numbers are 1-based everywhere in this module; columns and rows are 0-based.

use crate::{Cell, PageOrder, Placement};

/// Mathematical modulo: the result is always in `[0, n)` for positive `n`, including for negative
/// `x` (unlike `%`, which keeps the sign of the dividend).
#[inline]
pub fn modulo(x: i64, n: i64) -> i64 {
    debug_assert!(n > 0, "modulo: n must be positive (n={n})");
    ((x % n) + n) % n
}

/// Number of whole cells of `percent` size that fit in 100%.
///
/// Non-exact divisors round down, leaving part of the viewport unused.
#[inline]
pub fn cells_per_view(percent: f32) -> usize {
    (100.0 / percent) as usize
}

/// Grid dimensions derived from a [`crate::LayoutConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    /// Pages stacked in one column (`floor(100 / page_height_percent)`).
    pub rows_per_column: usize,
    /// Columns visible at once (`floor(100 / page_width_percent)`).
    pub columns_per_view: usize,
}

impl GridDimensions {
    pub fn from_percents(page_height_percent: f32, page_width_percent: f32) -> Self {
        Self {
            rows_per_column: cells_per_view(page_height_percent),
            columns_per_view: cells_per_view(page_width_percent),
        }
    }

    /// Pages visible at once.
    pub fn view_size(&self) -> usize {
        self.rows_per_column.saturating_mul(self.columns_per_view)
    }

    /// `ceil(total_pages / rows_per_column)`.
    pub fn total_columns(&self, total_pages: usize) -> usize {
        total_pages.div_ceil(self.rows_per_column)
    }

    /// Column a page occupies under `order`.
    pub fn column_of(&self, page: usize, order: PageOrder) -> usize {
        column_of(page, self.rows_per_column, self.columns_per_view, order)
    }

    pub fn cell_of(&self, page: usize, order: PageOrder) -> Cell {
        cell_of(page, self.rows_per_column, self.columns_per_view, order)
    }

    /// The view (1-based) a page belongs to.
    pub fn view_of(&self, page: usize) -> usize {
        page.div_ceil(self.view_size())
    }
}

/// Column (0-based) that `page` (1-based) occupies.
///
/// Row-major spreads consecutive pages across the columns of a view before moving down a row, so
/// the column wraps every `columns_per_view` pages and advances by a whole view every
/// `rows_per_column * columns_per_view` pages. Column-major fills a column before moving right.
pub fn column_of(
    page: usize,
    rows_per_column: usize,
    columns_per_view: usize,
    order: PageOrder,
) -> usize {
    let i = page.saturating_sub(1);
    match order {
        PageOrder::ColumnMajor => i / rows_per_column,
        PageOrder::RowMajor => {
            let view_size = rows_per_column.saturating_mul(columns_per_view);
            // `usize % usize` is already the mathematical modulo.
            i % columns_per_view + (i / view_size) * columns_per_view
        }
    }
}

/// Grid cell (0-based row and column) that `page` (1-based) occupies.
pub fn cell_of(
    page: usize,
    rows_per_column: usize,
    columns_per_view: usize,
    order: PageOrder,
) -> Cell {
    let i = page.saturating_sub(1);
    let row = match order {
        PageOrder::ColumnMajor => i % rows_per_column,
        PageOrder::RowMajor => (i / columns_per_view) % rows_per_column,
    };
    Cell {
        row,
        column: column_of(page, rows_per_column, columns_per_view, order),
    }
}

/// Absolute placement of `page` inside the paged strip, in percent of the viewport.
pub fn placement_of(
    page: usize,
    grid: GridDimensions,
    order: PageOrder,
    page_height_percent: f32,
    page_width_percent: f32,
) -> Placement {
    let cell = grid.cell_of(page, order);
    Placement {
        cell,
        top_percent: cell.row as f32 * page_height_percent,
        left_percent: cell.column as f32 * page_width_percent,
        height_percent: page_height_percent,
        width_percent: page_width_percent,
    }
}
