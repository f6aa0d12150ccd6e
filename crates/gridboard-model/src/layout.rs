//! The layout collection and its value-oriented mutation operations.
//!
//! Every operation returns the next [`Layout`] value; an operation naming
//! an unknown [`WidgetId`] returns the input unchanged. Out-of-range
//! geometry requests are clamped, never rejected — see the crate docs for
//! the full invariant list.

use gridboard_core::geometry::{COLS, MIN_H, MIN_ROWS, MIN_W};
use gridboard_core::settings::Surface;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::widget::{OPACITY_MAX, OPACITY_MIN, WidgetId, WidgetInstance, WidgetKind};

/// The ordered collection of placed widgets.
///
/// Insertion order is preserved for stable z-stacking of overlapping
/// panels; it never affects geometry. Serializes transparently as a JSON
/// array of widget records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    widgets: Vec<WidgetInstance>,
}

impl Layout {
    /// An empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placed widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the layout has no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Iterate widgets in insertion (z-stacking) order.
    pub fn iter(&self) -> impl Iterator<Item = &WidgetInstance> {
        self.widgets.iter()
    }

    /// Look up a widget by id.
    #[must_use]
    pub fn get(&self, id: &WidgetId) -> Option<&WidgetInstance> {
        self.widgets.iter().find(|w| &w.id == id)
    }

    /// Whether a widget with this id exists.
    #[must_use]
    pub fn contains(&self, id: &WidgetId) -> bool {
        self.get(id).is_some()
    }

    /// The lowest occupied row, floored at [`MIN_ROWS`].
    ///
    /// Drives the derived canvas height; the floor keeps an empty
    /// dashboard from collapsing to nothing.
    #[must_use]
    pub fn max_occupied_row(&self) -> u16 {
        self.widgets
            .iter()
            .map(|w| w.row.saturating_add(w.h) - 1)
            .max()
            .unwrap_or(0)
            .max(MIN_ROWS)
    }

    /// Next fresh id: `w-<n>` with `n` one past the highest numeric suffix
    /// present, so ids never collide with a persisted snapshot.
    fn next_id(&self) -> WidgetId {
        let max_suffix = self
            .widgets
            .iter()
            .filter_map(|w| w.id.as_str().strip_prefix("w-"))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        WidgetId::new(format!("w-{}", max_suffix + 1))
    }

    /// Clone-and-mutate helper: applies `f` to the widget with `id`, or
    /// returns the layout unchanged if the id is unknown.
    fn with_instance(&self, id: &WidgetId, f: impl FnOnce(&mut WidgetInstance)) -> Layout {
        let mut next = self.clone();
        if let Some(widget) = next.widgets.iter_mut().find(|w| &w.id == id) {
            f(widget);
            widget.clamp_to_grid();
        }
        next
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new widget below everything else.
    ///
    /// Placement is `col = 1`, `row = max_occupied_row() + 1`; size and
    /// title come from the caller (the catalog entry, resolved by the
    /// registry before this call). Returns the new layout and the fresh id.
    #[must_use]
    pub fn add(
        &self,
        kind: WidgetKind,
        title: impl Into<String>,
        default_size: (u16, u16),
        surface: Surface,
    ) -> (Layout, WidgetId) {
        let id = self.next_id();
        let mut widget = WidgetInstance {
            id: id.clone(),
            kind,
            col: 1,
            row: self.max_occupied_row().saturating_add(1),
            w: default_size.0,
            h: default_size.1,
            title: title.into(),
            surface: Some(surface),
            opacity: OPACITY_MAX,
            config: Map::new(),
        };
        widget.clamp_to_grid();
        let mut next = self.clone();
        next.widgets.push(widget);
        (next, id)
    }

    /// Move a widget's top-left cell.
    ///
    /// `col` clamps into `[1, COLS − w + 1]`, `row` into `[1, ∞)`. No
    /// overlap check: overlapping placement is permitted by design.
    #[must_use]
    pub fn move_to(&self, id: &WidgetId, col: i32, row: i32) -> Layout {
        self.with_instance(id, |w| {
            // Signed arithmetic: an unsanitized snapshot may hold w > COLS.
            let max_col = (i32::from(COLS) - i32::from(w.w) + 1).max(1);
            w.col = col.clamp(1, max_col) as u16;
            w.row = row.clamp(1, i32::from(u16::MAX)) as u16;
        })
    }

    /// Resize a widget, keeping its top-left cell as the anchor.
    ///
    /// `w` clamps into `[MIN_W, COLS − col + 1]`, `h` into `[MIN_H, ∞)`.
    #[must_use]
    pub fn resize(&self, id: &WidgetId, w: i32, h: i32) -> Layout {
        self.with_instance(id, |widget| {
            // Signed arithmetic: an unsanitized snapshot may hold col > COLS.
            let max_w = (i32::from(COLS) - i32::from(widget.col) + 1).max(i32::from(MIN_W));
            widget.w = w.clamp(i32::from(MIN_W), max_w) as u16;
            widget.h = h.clamp(i32::from(MIN_H), i32::from(u16::MAX)) as u16;
        })
    }

    /// Remove a widget. No-op if the id is unknown.
    #[must_use]
    pub fn remove(&self, id: &WidgetId) -> Layout {
        let mut next = self.clone();
        next.widgets.retain(|w| &w.id != id);
        next
    }

    /// Copy a widget, placing the copy immediately below the source
    /// (same column and width). The copy may overlap siblings; that is
    /// acceptable under the overlap policy. Returns `None` for the id if
    /// the source is unknown.
    #[must_use]
    pub fn duplicate(&self, id: &WidgetId) -> (Layout, Option<WidgetId>) {
        let Some(source) = self.get(id) else {
            return (self.clone(), None);
        };
        let new_id = self.next_id();
        let mut copy = source.clone();
        copy.id = new_id.clone();
        copy.row = source.row.saturating_add(source.h);
        copy.clamp_to_grid();
        let mut next = self.clone();
        next.widgets.push(copy);
        (next, Some(new_id))
    }

    /// Shallow-merge a style patch into a widget.
    ///
    /// Only the fields present in the patch change; config entries merge
    /// per key and existing keys not named by the patch are preserved.
    /// Opacity clamps into `[OPACITY_MIN, OPACITY_MAX]`.
    #[must_use]
    pub fn update_style(&self, id: &WidgetId, patch: &StylePatch) -> Layout {
        self.with_instance(id, |w| {
            if let Some(title) = &patch.title {
                w.title = title.clone();
            }
            if let Some(surface) = patch.surface {
                w.surface = Some(surface);
            }
            if let Some(opacity) = patch.opacity {
                w.opacity = opacity;
            }
            if let Some(config) = &patch.config {
                for (key, value) in config {
                    w.config.insert(key.clone(), value.clone());
                }
            }
        })
    }

    /// Clamp every widget into the model invariants.
    ///
    /// Applied after deserializing a persisted snapshot, so hand-edited or
    /// out-of-range records still produce a renderable layout.
    #[must_use]
    pub fn sanitize(&self) -> Layout {
        let mut next = self.clone();
        for widget in &mut next.widgets {
            widget.clamp_to_grid();
        }
        next
    }
}

/// A partial style update for [`Layout::update_style`].
///
/// `None` fields leave the widget untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePatch {
    /// Replacement display label.
    pub title: Option<String>,
    /// Replacement surface treatment.
    pub surface: Option<Surface>,
    /// Replacement opacity, clamped on apply.
    pub opacity: Option<f32>,
    /// Config entries to merge in (per-key, shallow).
    pub config: Option<Map<String, Value>>,
}

impl StylePatch {
    /// Patch only the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Patch only the surface.
    #[must_use]
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Patch only the opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Merge one config entry.
    #[must_use]
    pub fn with_config_entry(mut self, key: impl Into<String>, value: Value) -> Self {
        self.config
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }
}
