#![forbid(unsafe_code)]

//! Core vocabulary for the Gridboard layout engine.
//!
//! # Role in Gridboard
//! `gridboard-core` is the dependency-light foundation the rest of the
//! workspace builds on. It knows nothing about widgets, rendering, or
//! persistence wiring.
//!
//! # This crate provides
//! - [`geometry`] — pure pixel ⇄ cell conversion math, [`CellRect`], and the
//!   [`GridMetrics`] snapshot a drag gesture freezes at its start.
//! - [`pointer`] — the pointer-event vocabulary hosts feed into the
//!   interaction controller.
//! - [`settings`] — the flat, validated [`Settings`] model whose `gap_px`
//!   and `row_px` fields parameterize all geometry math.
//!
//! # How it fits in the system
//! `gridboard-model` places widgets in the cell space defined here,
//! `gridboard-runtime` converts pointer deltas into cell deltas with the
//! geometry functions, and hosts use [`GridMetrics`] to position rendered
//! panels in pixel space.

/// Pixel ⇄ cell conversion math and grid rectangles.
pub mod geometry;
/// Pointer-event vocabulary for the interaction controller.
pub mod pointer;
/// Dashboard settings with validation and serde-default merging.
pub mod settings;

pub use geometry::{
    COLS, CellRect, GridMetrics, MIN_H, MIN_ROWS, MIN_W, canvas_height, cell_width,
    px_delta_to_cell_delta,
};
pub use pointer::{PointerButton, PointerEvent, PointerEventKind};
pub use settings::{BackgroundPattern, CornerRadius, Settings, Surface};
