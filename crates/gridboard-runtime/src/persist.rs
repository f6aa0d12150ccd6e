//! Persistence adapter: startup load, debounced save, reset.
//!
//! Layout and settings are persisted under two independent keys. The load
//! path never fails: an absent key, an unreadable store, or malformed
//! JSON all fall back to the built-in defaults (settings merge field-wise
//! on top of defaults via serde; a layout snapshot replaces wholesale and
//! is then sanitized).
//!
//! Saves go through [`Saver`], a background thread fed by a channel:
//! serialization happens on the calling thread (cheap), the store write on
//! the worker, so a slow store never delays a pointer-move update. Writes
//! for the same key coalesce within a debounce window, latest value wins.
//! A failed write is logged at warn and dropped — no retry; the next load
//! simply will not see that change.
//!
//! Typical host startup:
//!
//! ```no_run
//! use gridboard_runtime::{JsonFileStore, Saver, load_state};
//!
//! let store = JsonFileStore::open("dashboard.json").unwrap();
//! let (layout, settings) = load_state(&store);
//! let saver = Saver::spawn(store, Saver::DEFAULT_DEBOUNCE);
//! // ... on every committed change:
//! saver.save_layout(&layout);
//! ```

use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use gridboard_core::settings::Settings;
use gridboard_model::Layout;
use tracing::{debug, warn};

use crate::store::KvStore;

/// Store key for the persisted layout.
pub const LAYOUT_KEY: &str = "gridboard.layout";

/// Store key for the persisted settings.
pub const SETTINGS_KEY: &str = "gridboard.settings";

/// Load both models, falling back to built-in defaults.
///
/// Issued once at startup. Never fails: every failure path is logged and
/// defaulted, so the host always starts with a renderable state.
#[must_use]
pub fn load_state<S: KvStore>(store: &S) -> (Layout, Settings) {
    let layout = match store.get(LAYOUT_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<Layout>(&raw) {
            Ok(layout) => layout.sanitize(),
            Err(err) => {
                warn!(error = %err, "persisted layout is unparseable, starting empty");
                Layout::default()
            }
        },
        Ok(None) => Layout::default(),
        Err(err) => {
            warn!(error = %err, "layout load failed, starting empty");
            Layout::default()
        }
    };

    let mut settings = match store.get(SETTINGS_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<Settings>(&raw) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(error = %err, "persisted settings are unparseable, using defaults");
                Settings::default()
            }
        },
        Ok(None) => Settings::default(),
        Err(err) => {
            warn!(error = %err, "settings load failed, using defaults");
            Settings::default()
        }
    };
    settings.sanitize();

    debug!(widgets = layout.len(), "dashboard state loaded");
    (layout, settings)
}

/// Clear both persisted keys and return the built-in defaults.
///
/// Synchronous: the host swaps its in-memory state to the returned values
/// immediately. A failed removal is logged; the defaults are returned
/// regardless.
#[must_use]
pub fn reset_to_defaults<S: KvStore>(store: &mut S) -> (Layout, Settings) {
    for key in [LAYOUT_KEY, SETTINGS_KEY] {
        if let Err(err) = store.remove(key) {
            warn!(key, error = %err, "reset could not clear persisted key");
        }
    }
    (Layout::default(), Settings::default())
}

// ---------------------------------------------------------------------------
// Saver
// ---------------------------------------------------------------------------

enum SaverMsg {
    Put { key: &'static str, json: String },
    Flush(Sender<()>),
    Shutdown,
}

/// Fire-and-forget debounced writer on a background thread.
///
/// Dropping the saver flushes pending writes and joins the worker.
pub struct Saver {
    tx: Sender<SaverMsg>,
    handle: Option<JoinHandle<()>>,
}

impl Saver {
    /// Default debounce window between a change and its store write.
    pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

    /// Start the worker thread, taking ownership of the store.
    ///
    /// Load state first ([`load_state`]) — after this call the store
    /// belongs to the worker.
    #[must_use]
    pub fn spawn<S: KvStore + 'static>(store: S, debounce: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || worker(store, debounce, rx));
        Self {
            tx,
            handle: Some(handle),
        }
    }

    /// Queue a layout save. Serializes now, writes later.
    pub fn save_layout(&self, layout: &Layout) {
        match serde_json::to_string(layout) {
            Ok(json) => self.send(SaverMsg::Put {
                key: LAYOUT_KEY,
                json,
            }),
            Err(err) => warn!(error = %err, "layout serialization failed, save dropped"),
        }
    }

    /// Queue a settings save. Serializes now, writes later.
    pub fn save_settings(&self, settings: &Settings) {
        match serde_json::to_string(settings) {
            Ok(json) => self.send(SaverMsg::Put {
                key: SETTINGS_KEY,
                json,
            }),
            Err(err) => warn!(error = %err, "settings serialization failed, save dropped"),
        }
    }

    /// Write every pending value now and wait for completion.
    ///
    /// For host shutdown and tests; the normal save path never blocks.
    pub fn flush(&self) {
        let (ack_tx, ack_rx) = mpsc::channel();
        if self.tx.send(SaverMsg::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv();
        }
    }

    fn send(&self, msg: SaverMsg) {
        if self.tx.send(msg).is_err() {
            warn!("saver worker is gone, save dropped");
        }
    }
}

impl Drop for Saver {
    fn drop(&mut self) {
        let _ = self.tx.send(SaverMsg::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn worker<S: KvStore>(mut store: S, debounce: Duration, rx: Receiver<SaverMsg>) {
    let mut pending: BTreeMap<&'static str, String> = BTreeMap::new();
    loop {
        let msg = if pending.is_empty() {
            rx.recv().ok()
        } else {
            match rx.recv_timeout(debounce) {
                Ok(msg) => Some(msg),
                Err(RecvTimeoutError::Timeout) => {
                    write_pending(&mut store, &mut pending);
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => None,
            }
        };
        match msg {
            Some(SaverMsg::Put { key, json }) => {
                // Latest value wins; the debounce window restarts.
                pending.insert(key, json);
            }
            Some(SaverMsg::Flush(ack)) => {
                write_pending(&mut store, &mut pending);
                let _ = ack.send(());
            }
            Some(SaverMsg::Shutdown) | None => {
                write_pending(&mut store, &mut pending);
                break;
            }
        }
    }
}

fn write_pending<S: KvStore>(store: &mut S, pending: &mut BTreeMap<&'static str, String>) {
    for (key, json) in std::mem::take(pending) {
        match store.set(key, &json) {
            Ok(()) => debug!(key, "state saved"),
            Err(err) => warn!(key, error = %err, "save failed, change dropped"),
        }
    }
}
