//! The static widget catalog.
//!
//! Catalog entries describe widget *types*, not instances: the display
//! name and icon shown in the add-widget picker, the default cell size a
//! new instance spawns with, and the picker category. The catalog never
//! changes at runtime.

use gridboard_model::WidgetKind;

/// Picker category, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Time,
    Productivity,
    Intelligence,
    Utility,
    Ambient,
}

/// Static description of one widget type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Registry identifier new instances are created with.
    pub kind: WidgetKind,
    /// Display name; becomes the instance's default title.
    pub name: String,
    /// Icon key for the picker (resolved by the host's icon set).
    pub icon: String,
    /// Default width in cells.
    pub default_w: u16,
    /// Default height in cells.
    pub default_h: u16,
    /// Picker category.
    pub category: Category,
}

impl CatalogEntry {
    /// Build an entry.
    #[must_use]
    pub fn new(
        kind: &str,
        name: &str,
        icon: &str,
        default_w: u16,
        default_h: u16,
        category: Category,
    ) -> Self {
        Self {
            kind: WidgetKind::new(kind),
            name: name.to_string(),
            icon: icon.to_string(),
            default_w,
            default_h,
            category,
        }
    }

    /// Default size as the tuple [`Layout::add`] takes.
    ///
    /// [`Layout::add`]: gridboard_model::Layout::add
    #[must_use]
    pub fn default_size(&self) -> (u16, u16) {
        (self.default_w, self.default_h)
    }
}

/// The built-in widget set.
#[must_use]
pub fn builtin_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("clock", "Clock", "clock", 8, 2, Category::Time),
        CatalogEntry::new("countdown", "Countdown", "hourglass", 4, 2, Category::Time),
        CatalogEntry::new("todo", "To-do", "check-square", 4, 4, Category::Productivity),
        CatalogEntry::new("notes", "Notes", "file-text", 4, 3, Category::Productivity),
        CatalogEntry::new("scratchpad", "Scratchpad", "edit", 6, 4, Category::Productivity),
        CatalogEntry::new("ai-text", "AI Text", "sparkles", 6, 3, Category::Intelligence),
        CatalogEntry::new("quote", "Quote", "quote", 6, 2, Category::Intelligence),
        CatalogEntry::new("calculator", "Calculator", "hash", 4, 4, Category::Utility),
        CatalogEntry::new("converter", "Converter", "repeat", 4, 3, Category::Utility),
        CatalogEntry::new("weather", "Weather", "cloud", 4, 2, Category::Ambient),
    ]
}
