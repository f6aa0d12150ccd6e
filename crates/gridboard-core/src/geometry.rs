//! Grid geometry: pure conversions between pixel space and cell space.
//!
//! The dashboard grid has a fixed column count ([`COLS`]) and unbounded
//! rows. Columns share the measured container width; rows have a fixed
//! pixel height from settings. Cells are separated by a uniform gap.
//!
//! # Invariants
//!
//! 1. [`cell_width`] never returns a negative value for a non-negative
//!    container width.
//! 2. [`px_delta_to_cell_delta`] uses the same rounding on both axes and
//!    for both move and resize gestures (`f32::round`, half away from
//!    zero), so previews are deterministic.
//! 3. [`canvas_height`] is 0 for 0 rows and strictly increasing in the row
//!    count.
//!
//! Coordinates in [`CellRect`] are 1-based: `col = 1, row = 1` is the
//! top-left cell, matching the persisted layout schema.

use crate::settings::Settings;

/// Fixed number of grid columns.
pub const COLS: u16 = 12;

/// Minimum row count the canvas reserves, so an empty dashboard still
/// shows a usable grid.
pub const MIN_ROWS: u16 = 6;

/// Minimum widget width in cells enforced by resize.
pub const MIN_W: u16 = 2;

/// Minimum widget height in cells enforced by resize.
pub const MIN_H: u16 = 1;

/// Width of one column in pixels for a measured container width.
///
/// `(container − (cols − 1) · gap) / cols`, clamped to zero when the
/// container is narrower than its gaps.
#[must_use]
pub fn cell_width(container_px: f32, cols: u16, gap_px: f32) -> f32 {
    if cols == 0 {
        return 0.0;
    }
    let gaps = f32::from(cols - 1) * gap_px;
    ((container_px - gaps) / f32::from(cols)).max(0.0)
}

/// Convert a pixel delta into a whole-cell delta.
///
/// One cell stride is `cell_px + gap_px`; the result is the rounded number
/// of strides covered. Used identically for columns (with the column
/// width) and rows (with the row height).
#[must_use]
pub fn px_delta_to_cell_delta(delta_px: f32, cell_px: f32, gap_px: f32) -> i32 {
    let stride = cell_px + gap_px;
    if !(stride > 0.0) {
        return 0;
    }
    (delta_px / stride).round() as i32
}

/// Pixel height of a canvas spanning `rows` rows.
#[must_use]
pub fn canvas_height(rows: u16, row_px: f32, gap_px: f32) -> f32 {
    if rows == 0 {
        return 0.0;
    }
    f32::from(rows) * row_px + f32::from(rows - 1) * gap_px
}

// ---------------------------------------------------------------------------
// CellRect
// ---------------------------------------------------------------------------

/// A rectangle in grid-cell space (1-based, inclusive spans).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    /// Leftmost occupied column (1-based).
    pub col: u16,
    /// Topmost occupied row (1-based).
    pub row: u16,
    /// Width in cells.
    pub w: u16,
    /// Height in cells.
    pub h: u16,
}

impl CellRect {
    /// Create a new cell rectangle.
    #[must_use]
    pub const fn new(col: u16, row: u16, w: u16, h: u16) -> Self {
        Self { col, row, w, h }
    }

    /// Rightmost occupied column (inclusive).
    #[must_use]
    pub const fn right(&self) -> u16 {
        self.col + self.w - 1
    }

    /// Bottommost occupied row (inclusive).
    #[must_use]
    pub const fn bottom(&self) -> u16 {
        self.row + self.h - 1
    }

    /// Whether the given cell lies inside this rectangle.
    #[must_use]
    pub const fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.col && col <= self.right() && row >= self.row && row <= self.bottom()
    }

    /// Whether two rectangles share at least one cell.
    ///
    /// Overlap between widgets is legal; this is informational (hosts use
    /// it for hover effects, never for collision resolution).
    #[must_use]
    pub const fn intersects(&self, other: &CellRect) -> bool {
        self.col <= other.right()
            && other.col <= self.right()
            && self.row <= other.bottom()
            && other.row <= self.bottom()
    }
}

// ---------------------------------------------------------------------------
// GridMetrics
// ---------------------------------------------------------------------------

/// A snapshot of the grid's pixel dimensions.
///
/// Computed from [`Settings`] and a measured container width. The
/// interaction controller captures one snapshot when a drag starts and
/// keeps it for the whole gesture: a container resize mid-drag must not
/// change the conversion factor (that would make the preview jitter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Column count.
    pub cols: u16,
    /// Gap between cells, both axes, in pixels.
    pub gap_px: f32,
    /// Row height in pixels.
    pub row_px: f32,
    /// Column width in pixels, derived from the container width.
    pub cell_px: f32,
}

impl GridMetrics {
    /// Measure the grid for a container width under the given settings.
    #[must_use]
    pub fn measure(settings: &Settings, container_px: f32) -> Self {
        Self {
            cols: COLS,
            gap_px: settings.gap_px,
            row_px: settings.row_px,
            cell_px: cell_width(container_px, COLS, settings.gap_px),
        }
    }

    /// Pixel origin (top-left corner) of a cell.
    #[must_use]
    pub fn cell_origin(&self, col: u16, row: u16) -> (f32, f32) {
        let x = f32::from(col.saturating_sub(1)) * (self.cell_px + self.gap_px);
        let y = f32::from(row.saturating_sub(1)) * (self.row_px + self.gap_px);
        (x, y)
    }

    /// Pixel width of a span of `w` columns, including interior gaps.
    #[must_use]
    pub fn col_span_px(&self, w: u16) -> f32 {
        if w == 0 {
            return 0.0;
        }
        f32::from(w) * self.cell_px + f32::from(w - 1) * self.gap_px
    }

    /// Pixel height of a span of `h` rows, including interior gaps.
    #[must_use]
    pub fn row_span_px(&self, h: u16) -> f32 {
        canvas_height(h, self.row_px, self.gap_px)
    }

    /// The cell under a pixel position, clamped to the grid's columns.
    ///
    /// Rows are unbounded below, so only the column is clamped. Gap pixels
    /// resolve to the preceding cell.
    #[must_use]
    pub fn cell_at(&self, x: f32, y: f32) -> (u16, u16) {
        let col_stride = self.cell_px + self.gap_px;
        let row_stride = self.row_px + self.gap_px;
        let col = if col_stride > 0.0 {
            (x / col_stride).floor() as i64 + 1
        } else {
            1
        };
        let row = if row_stride > 0.0 {
            (y / row_stride).floor() as i64 + 1
        } else {
            1
        };
        (
            col.clamp(1, i64::from(COLS)) as u16,
            row.max(1).min(i64::from(u16::MAX)) as u16,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_width_divides_remaining_space() {
        // 12 columns, gap 12: 11 gaps eat 132px.
        let w = cell_width(1236.0, 12, 12.0);
        assert!((w - 92.0).abs() < f32::EPSILON);
    }

    #[test]
    fn cell_width_clamps_to_zero_for_narrow_containers() {
        assert_eq!(cell_width(50.0, 12, 12.0), 0.0);
        assert_eq!(cell_width(0.0, 12, 12.0), 0.0);
    }

    #[test]
    fn px_delta_rounds_to_nearest_stride() {
        // 130px over a 92px stride (80 cell + 12 gap) is 1.41 strides.
        assert_eq!(px_delta_to_cell_delta(130.0, 80.0, 12.0), 1);
        assert_eq!(px_delta_to_cell_delta(-130.0, 80.0, 12.0), -1);
        assert_eq!(px_delta_to_cell_delta(45.0, 80.0, 12.0), 0);
        assert_eq!(px_delta_to_cell_delta(46.1, 80.0, 12.0), 1);
    }

    #[test]
    fn px_delta_with_degenerate_stride_is_zero() {
        assert_eq!(px_delta_to_cell_delta(500.0, 0.0, 0.0), 0);
        assert_eq!(px_delta_to_cell_delta(500.0, -20.0, 10.0), 0);
    }

    #[test]
    fn canvas_height_counts_interior_gaps() {
        assert_eq!(canvas_height(0, 96.0, 12.0), 0.0);
        assert_eq!(canvas_height(1, 96.0, 12.0), 96.0);
        assert_eq!(canvas_height(6, 96.0, 12.0), 6.0 * 96.0 + 5.0 * 12.0);
    }

    #[test]
    fn cell_rect_edges_and_contains() {
        let r = CellRect::new(10, 1, 3, 2);
        assert_eq!(r.right(), 12);
        assert_eq!(r.bottom(), 2);
        assert!(r.contains(10, 1));
        assert!(r.contains(12, 2));
        assert!(!r.contains(9, 1));
        assert!(!r.contains(12, 3));
    }

    #[test]
    fn cell_rect_intersection_is_symmetric() {
        let a = CellRect::new(1, 1, 4, 2);
        let b = CellRect::new(4, 2, 4, 2);
        let c = CellRect::new(5, 1, 2, 1);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn metrics_cell_origin_and_spans() {
        let settings = Settings::default();
        let m = GridMetrics::measure(&settings, 1236.0);
        assert_eq!(m.cell_origin(1, 1), (0.0, 0.0));
        let (x, y) = m.cell_origin(2, 3);
        assert!((x - (m.cell_px + m.gap_px)).abs() < 1e-4);
        assert!((y - 2.0 * (m.row_px + m.gap_px)).abs() < 1e-4);
        assert!((m.col_span_px(2) - (2.0 * m.cell_px + m.gap_px)).abs() < 1e-4);
        assert_eq!(m.col_span_px(0), 0.0);
    }

    #[test]
    fn cell_at_clamps_columns_only() {
        let settings = Settings::default();
        let m = GridMetrics::measure(&settings, 1236.0);
        assert_eq!(m.cell_at(0.0, 0.0), (1, 1));
        assert_eq!(m.cell_at(-500.0, -500.0), (1, 1));
        let (col, row) = m.cell_at(1e6, 1e6);
        assert_eq!(col, COLS);
        assert!(row > 1000);
    }
}
