//! Dashboard settings: a flat, persisted options record.
//!
//! Settings are persisted independently of the layout. The schema is
//! forward-compatible in both directions:
//!
//! - Loading an older snapshot fills missing fields from
//!   [`Settings::default`] (struct-level `#[serde(default)]`), so new
//!   options introduced later are not lost for returning users.
//! - A snapshot that fails to parse entirely is replaced by the defaults.
//!
//! Most fields are opaque to the engine (palette and typeface keys are
//! resolved by an external theme layer). `gap_px` and `row_px` are load
//! bearing: all geometry math consumes them, so [`Settings::sanitize`]
//! must run before they reach [`GridMetrics`](crate::geometry::GridMetrics).

use serde::{Deserialize, Serialize};

/// Default cell gap in pixels.
pub const DEFAULT_GAP_PX: f32 = 12.0;

/// Default row height in pixels.
pub const DEFAULT_ROW_PX: f32 = 96.0;

/// Default widget inner padding in pixels.
pub const DEFAULT_PADDING_PX: f32 = 16.0;

/// A widget's background treatment, independent of its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    /// Solid panel background.
    #[default]
    Filled,
    /// Border only, transparent body.
    Outlined,
    /// No border, no background.
    Ghost,
}

/// Corner radius preset applied to widget panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerRadius {
    Sharp,
    #[default]
    Soft,
    Round,
    Pill,
}

/// Canvas background pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundPattern {
    #[default]
    None,
    Dots,
    Grid,
    Noise,
}

/// The persisted dashboard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Settings {
    /// Palette key, resolved by the external theme layer.
    pub palette: String,
    /// Typeface key, resolved by the external theme layer.
    pub typeface: String,
    /// Optional accent color override (e.g. `"#7c5cff"`).
    pub accent: Option<String>,
    /// Corner radius preset for widget panels.
    pub corner_radius: CornerRadius,
    /// Gap between grid cells in pixels. Load bearing for geometry.
    pub gap_px: f32,
    /// Row height in pixels. Load bearing for geometry.
    pub row_px: f32,
    /// Inner padding of widget panels in pixels.
    pub padding_px: f32,
    /// Surface used by widgets that do not set their own.
    pub default_surface: Surface,
    /// Canvas background pattern.
    pub background: BackgroundPattern,
    /// Vignette overlay toggle.
    pub vignette: bool,
    /// Film-grain overlay toggle.
    pub grain: bool,
    /// Display name shown by identity-aware widgets.
    pub display_name: String,
    /// Free-form context string passed to AI-backed widgets.
    pub ai_context: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: "aurora".to_string(),
            typeface: "inter".to_string(),
            accent: None,
            corner_radius: CornerRadius::default(),
            gap_px: DEFAULT_GAP_PX,
            row_px: DEFAULT_ROW_PX,
            padding_px: DEFAULT_PADDING_PX,
            default_surface: Surface::default(),
            background: BackgroundPattern::default(),
            vignette: false,
            grain: false,
            display_name: String::new(),
            ai_context: String::new(),
        }
    }
}

impl Settings {
    /// Reset any pixel field that geometry math cannot consume.
    ///
    /// Non-finite or negative `gap_px` / `row_px` / `padding_px` values
    /// (possible in hand-edited snapshots) fall back to their defaults.
    /// Must run after deserialization, before any [`GridMetrics`] are
    /// measured.
    ///
    /// [`GridMetrics`]: crate::geometry::GridMetrics
    pub fn sanitize(&mut self) {
        if !self.gap_px.is_finite() || self.gap_px < 0.0 {
            self.gap_px = DEFAULT_GAP_PX;
        }
        if !self.row_px.is_finite() || self.row_px < 0.0 {
            self.row_px = DEFAULT_ROW_PX;
        }
        if !self.padding_px.is_finite() || self.padding_px < 0.0 {
            self.padding_px = DEFAULT_PADDING_PX;
        }
    }
}
