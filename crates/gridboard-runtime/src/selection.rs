//! Transient selection state: at most one selected widget.
//!
//! Selection exists only while edit mode is active and is never persisted.
//! When the selected widget disappears (delete, or a stale id after a
//! reset), [`Selection::invalidate`] clears it.

use gridboard_model::{Layout, WidgetId};

/// At most one selected widget id, or none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<WidgetId>,
}

impl Selection {
    /// No selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a widget, replacing any previous selection.
    pub fn select(&mut self, id: WidgetId) {
        self.current = Some(id);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The selected id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&WidgetId> {
        self.current.as_ref()
    }

    /// Whether this id is the selected one.
    #[must_use]
    pub fn is_selected(&self, id: &WidgetId) -> bool {
        self.current.as_ref() == Some(id)
    }

    /// Drop the selection if it references a widget the layout no longer
    /// contains. Call after delete/duplicate/reset mutations.
    pub fn invalidate(&mut self, layout: &Layout) {
        if let Some(id) = &self.current
            && !layout.contains(id)
        {
            self.current = None;
        }
    }
}
