#![forbid(unsafe_code)]

//! Widget catalog and renderer registry for Gridboard.
//!
//! # Role in Gridboard
//! The engine positions and sizes widgets but never understands their
//! content. This crate is the boundary: a static [`catalog`] describing
//! every known widget kind (name, icon, default size, category) and a
//! [`registry`] that maps a kind to a host-supplied renderer, falling back
//! to an inert placeholder for kinds this build does not know.
//!
//! The renderer type is generic — a host may register draw closures,
//! component handles, or anything else; the engine only routes lookups.

/// Static widget catalog: kinds, names, icons, default sizes.
pub mod catalog;
/// Kind → renderer registry with placeholder fallback.
pub mod registry;

pub use catalog::{CatalogEntry, Category, builtin_catalog};
pub use registry::WidgetRegistry;
