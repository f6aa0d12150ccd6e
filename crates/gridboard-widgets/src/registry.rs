//! Kind → renderer registry with placeholder fallback.
//!
//! # Invariants
//!
//! 1. [`WidgetRegistry::renderer`] is total: every kind resolves to a
//!    renderer, with unknown kinds getting the fallback placeholder. A
//!    layout persisted by a future catalog version must render (inertly),
//!    never crash.
//! 2. Catalog entries and renderers are registered at startup; there is
//!    no runtime mutation beyond registration.

use ahash::AHashMap;
use gridboard_core::settings::Surface;
use gridboard_model::{Layout, WidgetId, WidgetKind};

use crate::catalog::{CatalogEntry, Category, builtin_catalog};

/// Catalog lookup plus renderer dispatch.
///
/// `R` is the host's renderer representation — a draw closure, a
/// component factory, whatever paints one widget's content. The engine
/// never calls into it; it only routes lookups.
#[derive(Debug)]
pub struct WidgetRegistry<R> {
    entries: AHashMap<WidgetKind, CatalogEntry>,
    renderers: AHashMap<WidgetKind, R>,
    fallback: R,
}

impl<R> WidgetRegistry<R> {
    /// An empty registry with only the fallback renderer.
    #[must_use]
    pub fn new(fallback: R) -> Self {
        Self {
            entries: AHashMap::new(),
            renderers: AHashMap::new(),
            fallback,
        }
    }

    /// A registry pre-populated with the built-in catalog.
    ///
    /// Renderers still need to be registered per kind; until then every
    /// kind renders the fallback.
    #[must_use]
    pub fn with_builtin_catalog(fallback: R) -> Self {
        let mut registry = Self::new(fallback);
        for entry in builtin_catalog() {
            registry.register_entry(entry);
        }
        registry
    }

    /// Add or replace a catalog entry.
    pub fn register_entry(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.kind.clone(), entry);
    }

    /// Register the renderer for a kind.
    pub fn register_renderer(&mut self, kind: WidgetKind, renderer: R) {
        self.renderers.insert(kind, renderer);
    }

    /// Catalog entry for a kind, `None` when unknown.
    #[must_use]
    pub fn entry(&self, kind: &WidgetKind) -> Option<&CatalogEntry> {
        self.entries.get(kind)
    }

    /// The renderer for a kind — the registered one, or the inert
    /// placeholder fallback for kinds this build does not know.
    #[must_use]
    pub fn renderer(&self, kind: &WidgetKind) -> &R {
        self.renderers.get(kind).unwrap_or(&self.fallback)
    }

    /// All catalog entries, sorted for a stable picker: by category, then
    /// name.
    #[must_use]
    pub fn picker_entries(&self) -> Vec<&CatalogEntry> {
        let mut entries: Vec<&CatalogEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| (a.category, &a.name).cmp(&(b.category, &b.name)));
        entries
    }

    /// Catalog entries in one category, sorted by name.
    #[must_use]
    pub fn entries_in(&self, category: Category) -> Vec<&CatalogEntry> {
        let mut entries: Vec<&CatalogEntry> = self
            .entries
            .values()
            .filter(|e| e.category == category)
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// The add-widget flow: resolve the kind, then place a new instance
    /// below everything else with the catalog defaults.
    ///
    /// Returns `None` for unknown kinds — the add flow simply does not
    /// run (the picker only offers known kinds; this guards hosts that
    /// wire kinds from elsewhere).
    #[must_use]
    pub fn add_from_catalog(
        &self,
        layout: &Layout,
        kind: &WidgetKind,
        default_surface: Surface,
    ) -> Option<(Layout, WidgetId)> {
        let entry = self.entry(kind)?;
        Some(layout.add(
            kind.clone(),
            entry.name.clone(),
            entry.default_size(),
            default_surface,
        ))
    }
}
