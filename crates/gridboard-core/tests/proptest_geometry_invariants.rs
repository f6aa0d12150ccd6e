//! Property-based invariant tests for grid geometry.
//!
//! These verify:
//!
//! 1. `cell_width` is never negative for non-negative containers.
//! 2. `px_delta_to_cell_delta` is deterministic, odd in its delta, and
//!    monotonic — the same rounding everywhere means move and resize can
//!    never disagree about a pointer delta.
//! 3. `canvas_height` grows with the row count.
//! 4. `cell_at` stays inside the column range for any pixel position.

use gridboard_core::geometry::{COLS, GridMetrics, canvas_height, cell_width, px_delta_to_cell_delta};
use gridboard_core::settings::Settings;
use proptest::prelude::*;

proptest! {
    #[test]
    fn cell_width_is_never_negative(
        container in 0.0f32..10_000.0,
        cols in 1u16..=24,
        gap in 0.0f32..100.0,
    ) {
        prop_assert!(cell_width(container, cols, gap) >= 0.0);
    }

    #[test]
    fn px_delta_is_odd_and_deterministic(
        delta in -5_000.0f32..5_000.0,
        cell in 1.0f32..500.0,
        gap in 0.0f32..100.0,
    ) {
        let d = px_delta_to_cell_delta(delta, cell, gap);
        prop_assert_eq!(px_delta_to_cell_delta(delta, cell, gap), d);
        prop_assert_eq!(px_delta_to_cell_delta(-delta, cell, gap), -d);
    }

    #[test]
    fn px_delta_is_monotonic_in_the_delta(
        a in -5_000.0f32..5_000.0,
        b in -5_000.0f32..5_000.0,
        cell in 1.0f32..500.0,
        gap in 0.0f32..100.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            px_delta_to_cell_delta(lo, cell, gap) <= px_delta_to_cell_delta(hi, cell, gap)
        );
    }

    #[test]
    fn canvas_height_grows_with_rows(
        rows in 0u16..500,
        row_px in 1.0f32..500.0,
        gap in 0.0f32..100.0,
    ) {
        prop_assert!(
            canvas_height(rows, row_px, gap) < canvas_height(rows + 1, row_px, gap)
        );
    }

    #[test]
    fn cell_at_stays_inside_the_columns(
        x in -100_000.0f32..100_000.0,
        y in -100_000.0f32..100_000.0,
        container in 0.0f32..10_000.0,
    ) {
        let metrics = GridMetrics::measure(&Settings::default(), container);
        let (col, row) = metrics.cell_at(x, y);
        prop_assert!((1..=COLS).contains(&col));
        prop_assert!(row >= 1);
    }
}
