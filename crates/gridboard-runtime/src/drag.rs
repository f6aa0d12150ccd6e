//! Pointer-drag state machine: one gesture, one widget, one axis pair.
//!
//! [`DragController`] converts a pointer-drag sequence into continuous
//! [`Layout`] mutations. There is no separate ghost preview: every
//! pointer-move applies `move_to`/`resize` directly, so the preview *is*
//! the committed state.
//!
//! # State machine
//!
//! - **Idle** → primary-button down on a widget body or resize handle
//!   (edit mode only) → **Dragging**: the widget's origin geometry and the
//!   current [`GridMetrics`] are captured.
//! - **Dragging** → pointer move → **Dragging**: candidate geometry is
//!   `origin ± px_delta_to_cell_delta(pointer delta)`, clamped by the
//!   model's own rules.
//! - **Dragging** → pointer up, anywhere in the viewport → **Idle**.
//!
//! # Invariants
//!
//! 1. A move gesture changes `col`/`row` only; a resize gesture changes
//!    `w`/`h` only (the anchor corner stays put).
//! 2. At most one session exists; a new press overwrites a stale session
//!    left behind by a lost pointer-up.
//! 3. Metrics are frozen at press: a container resize mid-drag does not
//!    change the pixel-to-cell conversion (deliberate, avoids jitter).
//!
//! # Failure modes
//!
//! - A move or up event with no active session is ignored.
//! - A press naming an id the layout does not contain starts no session.

use gridboard_core::geometry::{CellRect, GridMetrics, px_delta_to_cell_delta};
use gridboard_core::pointer::{PointerButton, PointerEvent, PointerEventKind};
use gridboard_model::{Layout, WidgetId};

use crate::selection::Selection;

/// Which geometry pair a gesture drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Dragging the widget body: changes `col`/`row`.
    Move,
    /// Dragging the resize handle: changes `w`/`h`.
    Resize,
}

/// What the pointer went down on, as reported by the render layer's hit
/// testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// A widget body (`DragKind::Move`) or resize handle
    /// (`DragKind::Resize`).
    Widget { id: WidgetId, kind: DragKind },
    /// The empty canvas background.
    Background,
}

/// The transient state of one gesture.
///
/// Discarded on release; the controller never stores widget state beyond
/// this.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// The widget being dragged.
    pub id: WidgetId,
    /// Move or resize.
    pub kind: DragKind,
    /// Pointer position at press, canvas pixels.
    pub origin_px: (f32, f32),
    /// Widget geometry at press.
    pub origin: CellRect,
    /// Grid metrics frozen at press.
    pub metrics: GridMetrics,
}

/// The interaction controller: selection plus at most one drag session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragController {
    edit_mode: bool,
    session: Option<DragSession>,
    selection: Selection,
}

impl DragController {
    /// A controller outside edit mode with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether edit mode is active.
    #[must_use]
    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Enter or leave edit mode. Leaving cancels any session and clears
    /// the selection.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        self.edit_mode = enabled;
        if !enabled {
            self.session = None;
            self.selection.clear();
        }
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Drop the selection if its widget left the layout (after a delete
    /// or reset applied by the host).
    pub fn sync_selection(&mut self, layout: &Layout) {
        self.selection.invalidate(layout);
    }

    /// The active session, if a gesture is in flight.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Whether a gesture is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    // -----------------------------------------------------------------------
    // Gesture lifecycle
    // -----------------------------------------------------------------------

    /// Pointer-down on a widget. Selects it and opens a session.
    ///
    /// Gated on edit mode; a press on an unknown id is ignored. Any
    /// existing session (including a stale one whose pointer-up was lost)
    /// is overwritten. Returns whether a session started.
    pub fn press(
        &mut self,
        id: &WidgetId,
        kind: DragKind,
        x: f32,
        y: f32,
        metrics: GridMetrics,
        layout: &Layout,
    ) -> bool {
        if !self.edit_mode {
            return false;
        }
        let Some(widget) = layout.get(id) else {
            return false;
        };
        self.selection.select(id.clone());
        self.session = Some(DragSession {
            id: id.clone(),
            kind,
            origin_px: (x, y),
            origin: widget.cell_rect(),
            metrics,
        });
        true
    }

    /// Pointer-down on the empty canvas: clears selection and any stale
    /// session.
    pub fn press_background(&mut self) {
        self.session = None;
        self.selection.clear();
    }

    /// Pointer-move: recompute candidate geometry and apply it.
    ///
    /// Returns the next layout, or `None` when no gesture is active (such
    /// move events are malformed and ignored).
    #[must_use]
    pub fn track(&self, x: f32, y: f32, layout: &Layout) -> Option<Layout> {
        let session = self.session.as_ref()?;
        let dx = x - session.origin_px.0;
        let dy = y - session.origin_px.1;
        let m = &session.metrics;
        let dcols = px_delta_to_cell_delta(dx, m.cell_px, m.gap_px);
        let drows = px_delta_to_cell_delta(dy, m.row_px, m.gap_px);
        let next = match session.kind {
            DragKind::Move => layout.move_to(
                &session.id,
                i32::from(session.origin.col) + dcols,
                i32::from(session.origin.row) + drows,
            ),
            DragKind::Resize => layout.resize(
                &session.id,
                i32::from(session.origin.w) + dcols,
                i32::from(session.origin.h) + drows,
            ),
        };
        Some(next)
    }

    /// Pointer-up, anywhere in the viewport: ends the gesture.
    ///
    /// Returns the dragged widget's id (a press with zero movement and an
    /// immediate release is a plain click; its selection was already set
    /// at press). Ignored when idle.
    pub fn release(&mut self) -> Option<WidgetId> {
        self.session.take().map(|s| s.id)
    }

    // -----------------------------------------------------------------------
    // Event dispatch
    // -----------------------------------------------------------------------

    /// Route a raw pointer event through the gesture state machine.
    ///
    /// `target` is the render layer's hit-test result and is only
    /// consulted for primary-button down events. Returns a new layout only
    /// when a tracked move changed geometry.
    pub fn dispatch(
        &mut self,
        event: &PointerEvent,
        target: &PointerTarget,
        metrics: &GridMetrics,
        layout: &Layout,
    ) -> Option<Layout> {
        match event.kind {
            PointerEventKind::Down(PointerButton::Primary) => {
                match target {
                    PointerTarget::Widget { id, kind } => {
                        self.press(id, *kind, event.x, event.y, *metrics, layout);
                    }
                    PointerTarget::Background => self.press_background(),
                }
                None
            }
            PointerEventKind::Moved => self.track(event.x, event.y, layout),
            PointerEventKind::Up(PointerButton::Primary) => {
                self.release();
                None
            }
            _ => None,
        }
    }
}
