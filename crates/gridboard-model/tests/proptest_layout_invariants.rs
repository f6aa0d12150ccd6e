//! Property-based invariant tests for the layout model.
//!
//! These tests verify that the value-oriented mutation operations uphold:
//!
//! 1. Move always lands in `1 ≤ col ≤ COLS − w + 1`, `row ≥ 1`, however
//!    far out of range the request was.
//! 2. Resize always lands in `w ≥ 2`, `h ≥ 1`, `col + w − 1 ≤ COLS`.
//! 3. Add-then-remove and duplicate-then-remove restore the prior layout.
//! 4. Serialization round-trips are lossless for any mutated layout.
//! 5. Operations never disturb widgets they do not name.

use gridboard_core::geometry::{COLS, MIN_H, MIN_W};
use gridboard_core::settings::Surface;
use gridboard_model::{Layout, StylePatch, WidgetId, WidgetKind, OPACITY_MAX, OPACITY_MIN};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn surface() -> impl Strategy<Value = Surface> {
    prop_oneof![
        Just(Surface::Filled),
        Just(Surface::Outlined),
        Just(Surface::Ghost),
    ]
}

fn kind() -> impl Strategy<Value = WidgetKind> {
    prop_oneof![
        Just("clock"),
        Just("todo"),
        Just("notes"),
        Just("mystery-from-the-future"),
    ]
    .prop_map(WidgetKind::new)
}

/// Build a layout by running `add` then scattering widgets with moves.
fn layout_strategy() -> impl Strategy<Value = Layout> {
    proptest::collection::vec(
        (kind(), 1u16..=12, 1u16..=8, -5i32..40, -5i32..40, surface()),
        0..12,
    )
    .prop_map(|seeds| {
        let mut layout = Layout::new();
        for (kind, w, h, col, row, surface) in seeds {
            let (next, id) = layout.add(kind, "Widget", (w, h), surface);
            layout = next.move_to(&id, col, row);
        }
        layout
    })
}

fn ids_of(layout: &Layout) -> Vec<WidgetId> {
    layout.iter().map(|w| w.id.clone()).collect()
}

fn assert_invariants(layout: &Layout) {
    for w in layout.iter() {
        assert!(w.w >= MIN_W, "w too small: {}", w.w);
        assert!(w.h >= MIN_H, "h too small: {}", w.h);
        assert!(w.col >= 1, "col below 1: {}", w.col);
        assert!(
            w.col + w.w - 1 <= COLS,
            "widget sticks out: col={} w={}",
            w.col,
            w.w
        );
        assert!(w.row >= 1, "row below 1: {}", w.row);
        assert!((OPACITY_MIN..=OPACITY_MAX).contains(&w.opacity));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Geometry invariants hold after arbitrary move/resize requests
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn move_clamps_for_arbitrary_requests(
        layout in layout_strategy(),
        pick in 0usize..12,
        col in -1000i32..1000,
        row in -1000i32..1000,
    ) {
        let ids = ids_of(&layout);
        if ids.is_empty() {
            return Ok(());
        }
        let id = &ids[pick % ids.len()];
        let moved = layout.move_to(id, col, row);
        assert_invariants(&moved);
        // Only geometry of the named widget may differ.
        prop_assert_eq!(moved.len(), layout.len());
        for (before, after) in layout.iter().zip(moved.iter()) {
            if &before.id != id {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn resize_clamps_for_arbitrary_requests(
        layout in layout_strategy(),
        pick in 0usize..12,
        w in -1000i32..1000,
        h in -1000i32..1000,
    ) {
        let ids = ids_of(&layout);
        if ids.is_empty() {
            return Ok(());
        }
        let id = &ids[pick % ids.len()];
        let before = layout.get(id).unwrap().clone();
        let resized = layout.resize(id, w, h);
        assert_invariants(&resized);
        let after = resized.get(id).unwrap();
        // The anchor corner never moves on resize.
        prop_assert_eq!(after.col, before.col);
        prop_assert_eq!(after.row, before.row);
    }

// ═════════════════════════════════════════════════════════════════════════
// 2. Add/duplicate/remove are inverse pairs
// ═════════════════════════════════════════════════════════════════════════

    #[test]
    fn add_then_remove_is_identity(
        layout in layout_strategy(),
        kind in kind(),
        w in 1u16..=12,
        h in 1u16..=8,
    ) {
        let (added, id) = layout.add(kind, "Fresh", (w, h), Surface::Filled);
        prop_assert_eq!(added.len(), layout.len() + 1);
        prop_assert_eq!(added.remove(&id), layout);
    }

    #[test]
    fn duplicate_then_remove_is_identity(
        layout in layout_strategy(),
        pick in 0usize..12,
    ) {
        let ids = ids_of(&layout);
        if ids.is_empty() {
            return Ok(());
        }
        let id = &ids[pick % ids.len()];
        let (duplicated, copy_id) = layout.duplicate(id);
        let copy_id = copy_id.unwrap();
        prop_assert!(duplicated.contains(&copy_id));
        assert_invariants(&duplicated);
        prop_assert_eq!(duplicated.remove(&copy_id), layout);
    }

// ═════════════════════════════════════════════════════════════════════════
// 3. Persistence round-trips are lossless
// ═════════════════════════════════════════════════════════════════════════

    #[test]
    fn serde_roundtrip_is_lossless(layout in layout_strategy()) {
        let json = serde_json::to_string(&layout).unwrap();
        let back: Layout = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, layout);
    }

    #[test]
    fn update_style_keeps_invariants(
        layout in layout_strategy(),
        pick in 0usize..12,
        opacity in -10.0f32..10.0,
    ) {
        let ids = ids_of(&layout);
        if ids.is_empty() {
            return Ok(());
        }
        let id = &ids[pick % ids.len()];
        let patch = StylePatch::default().with_opacity(opacity);
        let patched = layout.update_style(id, &patch);
        assert_invariants(&patched);
    }
}
