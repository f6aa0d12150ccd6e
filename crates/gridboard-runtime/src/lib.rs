#![forbid(unsafe_code)]

//! Runtime layer for Gridboard: interaction and persistence.
//!
//! # Role in Gridboard
//! Everything stateful between the pure model and a host UI lives here:
//!
//! - [`drag`] — the pointer-gesture state machine that turns drag
//!   sequences into [`Layout`](gridboard_model::Layout) move/resize calls,
//!   with the preview being the committed state.
//! - [`selection`] — the at-most-one selected widget, transient and never
//!   persisted.
//! - [`store`] — the [`KvStore`](store::KvStore) abstraction over the
//!   external key-value store, with in-memory and JSON-file
//!   implementations.
//! - [`persist`] — startup load with default fallback, debounced
//!   fire-and-forget background saves, and reset-to-defaults.
//!
//! # Concurrency
//! Single-threaded and event-driven, like the model: all layout mutations
//! happen synchronously on the calling event. The only background work is
//! the [`Saver`](persist::Saver) thread, which must never delay a
//! pointer-move update; saves are serialized on the calling thread and
//! handed off through a channel.

/// Pointer-gesture state machine (move/resize drags, click selection).
pub mod drag;
/// Startup load, debounced save, reset-to-defaults.
pub mod persist;
/// Transient single-widget selection.
pub mod selection;
/// Key-value store abstraction and implementations.
pub mod store;

pub use drag::{DragController, DragKind, DragSession, PointerTarget};
pub use persist::{LAYOUT_KEY, SETTINGS_KEY, Saver, load_state, reset_to_defaults};
pub use selection::Selection;
pub use store::{JsonFileStore, KvStore, MemoryStore, StoreError};
