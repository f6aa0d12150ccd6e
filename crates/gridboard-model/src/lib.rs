#![forbid(unsafe_code)]

//! The Gridboard layout model: placed widgets and their pure mutations.
//!
//! # Role in Gridboard
//! This crate owns the authoritative collection of placed widgets. It never
//! reaches into rendering or input; the interaction controller and hosts
//! call its operations and hold the current [`Layout`] value themselves.
//!
//! # Design
//! The model is value-oriented: every operation takes `&self` and returns
//! the next [`Layout`] value instead of mutating shared state. That keeps
//! persistence (serialize whatever value you hold) and testing (compare
//! values) trivial, and pushes reference-holding to a single owning
//! context.
//!
//! # Invariants
//!
//! After every operation and after [`Layout::sanitize`]:
//!
//! 1. `w ≥ 2`, `h ≥ 1`.
//! 2. `1 ≤ col` and `col + w − 1 ≤ COLS`.
//! 3. `row ≥ 1` (rows are unbounded above; the canvas grows to fit).
//! 4. `0.2 ≤ opacity ≤ 1.0`.
//!
//! Violating inputs are clamped, never rejected: the engine always
//! produces a renderable layout. Overlapping placement is legal by design;
//! insertion order is preserved only for stable z-stacking.

/// The layout collection and its mutation operations.
pub mod layout;
/// Widget instance records and identifiers.
pub mod widget;

pub use layout::{Layout, StylePatch};
pub use widget::{OPACITY_MAX, OPACITY_MIN, WidgetId, WidgetInstance, WidgetKind};
