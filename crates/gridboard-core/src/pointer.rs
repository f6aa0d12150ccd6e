//! Pointer-event vocabulary.
//!
//! Hosts translate their native mouse/pointer input into [`PointerEvent`]s
//! and feed them to the interaction controller. Coordinates are pixels
//! relative to the grid canvas origin; a single pointer drives the whole
//! dashboard (no touch/multi-pointer input).

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (usually left). The only button that starts drags.
    Primary,
    /// Secondary button (usually right).
    Secondary,
    /// Auxiliary button (usually middle).
    Auxiliary,
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEventKind {
    /// Button pressed down.
    Down(PointerButton),
    /// Pointer moved (with or without a button held).
    Moved,
    /// Button released.
    Up(PointerButton),
}

/// A pointer event in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,
    /// X position in pixels from the canvas left edge.
    pub x: f32,
    /// Y position in pixels from the canvas top edge.
    pub y: f32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }

    /// Create a button-down event.
    #[must_use]
    pub const fn down(button: PointerButton, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down(button), x, y)
    }

    /// Create a move event.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Moved, x, y)
    }

    /// Create a button-up event.
    #[must_use]
    pub const fn up(button: PointerButton, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up(button), x, y)
    }

    /// Get the position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind_and_position() {
        let down = PointerEvent::down(PointerButton::Primary, 10.0, 20.0);
        assert_eq!(down.kind, PointerEventKind::Down(PointerButton::Primary));
        assert_eq!(down.position(), (10.0, 20.0));

        let moved = PointerEvent::moved(1.5, 2.5);
        assert_eq!(moved.kind, PointerEventKind::Moved);

        let up = PointerEvent::up(PointerButton::Secondary, 0.0, 0.0);
        assert_eq!(up.kind, PointerEventKind::Up(PointerButton::Secondary));
    }
}
