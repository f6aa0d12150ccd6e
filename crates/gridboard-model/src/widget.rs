//! Widget instance records and identifiers.

use std::fmt;

use gridboard_core::geometry::{CellRect, COLS, MIN_H, MIN_W};
use gridboard_core::settings::Surface;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lower opacity bound for widget panels.
pub const OPACITY_MIN: f32 = 0.2;

/// Upper opacity bound for widget panels.
pub const OPACITY_MAX: f32 = 1.0;

/// Opaque, unique, stable identifier of a placed widget.
///
/// Assigned once at creation and never reused within a layout. Fresh ids
/// are `w-<n>` counters derived from the layout they are added to, so they
/// stay collision-free against persisted snapshots and deterministic in
/// tests — but nothing may rely on the format; treat the value as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    /// Wrap an existing id string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Open identifier of a widget type, resolved by the widget registry.
///
/// Deliberately a string rather than an enum: a layout persisted by a
/// newer catalog may contain kinds this build does not know, and those
/// must load, render as placeholders, and save back untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetKind(String);

impl WidgetKind {
    /// Wrap a kind identifier.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The kind as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WidgetKind {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn default_opacity() -> f32 {
    OPACITY_MAX
}

/// One placed, independently configured widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WidgetInstance {
    /// Stable identity, immutable for the instance's lifetime.
    pub id: WidgetId,
    /// Registry identifier, immutable after creation.
    pub kind: WidgetKind,
    /// Leftmost occupied column (1-based).
    pub col: u16,
    /// Topmost occupied row (1-based).
    pub row: u16,
    /// Width in cells.
    pub w: u16,
    /// Height in cells.
    pub h: u16,
    /// Display label; defaults to the catalog name at creation.
    pub title: String,
    /// Visual treatment; `None` inherits the global default surface.
    #[serde(default)]
    pub surface: Option<Surface>,
    /// Panel opacity in `[0.2, 1.0]`.
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    /// Per-type configuration, owned and interpreted by the renderer.
    ///
    /// Opaque to the engine: preserved through every mutation and
    /// round-trip, including keys written by other catalog versions.
    #[serde(default)]
    pub config: Map<String, Value>,
}

impl WidgetInstance {
    /// The occupied cell rectangle.
    #[must_use]
    pub fn cell_rect(&self) -> CellRect {
        CellRect::new(self.col, self.row, self.w, self.h)
    }

    /// The surface to render, falling back to the global default.
    #[must_use]
    pub fn effective_surface(&self, default_surface: Surface) -> Surface {
        self.surface.unwrap_or(default_surface)
    }

    /// Clamp geometry and opacity into the model invariants.
    ///
    /// Used on every mutation and when loading persisted snapshots, so a
    /// hand-edited or out-of-range record still renders.
    pub fn clamp_to_grid(&mut self) {
        self.w = self.w.clamp(MIN_W, COLS);
        self.h = self.h.max(MIN_H);
        self.col = self.col.clamp(1, COLS - self.w + 1);
        self.row = self.row.max(1);
        self.opacity = if self.opacity.is_finite() {
            self.opacity.clamp(OPACITY_MIN, OPACITY_MAX)
        } else {
            OPACITY_MAX
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> WidgetInstance {
        WidgetInstance {
            id: WidgetId::new("w-1"),
            kind: WidgetKind::new("clock"),
            col: 1,
            row: 1,
            w: 4,
            h: 2,
            title: "Clock".to_string(),
            surface: None,
            opacity: 1.0,
            config: Map::new(),
        }
    }

    #[test]
    fn clamp_pulls_geometry_into_grid() {
        let mut w = instance();
        w.col = 11;
        w.w = 40;
        w.row = 0;
        w.h = 0;
        w.opacity = 3.0;
        w.clamp_to_grid();
        assert_eq!(w.w, COLS);
        assert_eq!(w.col, 1);
        assert_eq!(w.row, 1);
        assert_eq!(w.h, 1);
        assert_eq!(w.opacity, OPACITY_MAX);
    }

    #[test]
    fn clamp_replaces_non_finite_opacity() {
        let mut w = instance();
        w.opacity = f32::NAN;
        w.clamp_to_grid();
        assert_eq!(w.opacity, OPACITY_MAX);
        w.opacity = 0.05;
        w.clamp_to_grid();
        assert_eq!(w.opacity, OPACITY_MIN);
    }

    #[test]
    fn effective_surface_inherits_when_unset() {
        let mut w = instance();
        assert_eq!(w.effective_surface(Surface::Outlined), Surface::Outlined);
        w.surface = Some(Surface::Ghost);
        assert_eq!(w.effective_surface(Surface::Outlined), Surface::Ghost);
    }

    #[test]
    fn unknown_kind_and_config_survive_roundtrip() {
        let mut w = instance();
        w.kind = WidgetKind::new("hologram");
        w.config
            .insert("target".to_string(), Value::from("2031-01-01T00:00:00Z"));
        w.config.insert("depth".to_string(), Value::from(3));
        let json = serde_json::to_string(&w).unwrap();
        let back: WidgetInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"id":"w-9","kind":"clock","col":1,"row":1,"w":4,"h":2,"title":"Clock"}"#;
        let w: WidgetInstance = serde_json::from_str(json).unwrap();
        assert_eq!(w.surface, None);
        assert_eq!(w.opacity, OPACITY_MAX);
        assert!(w.config.is_empty());
    }
}
