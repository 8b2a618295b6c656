#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! These are the events a host feeds into the resize engine. All events
//! derive `Clone` and `PartialEq` for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - Pointer coordinates are page coordinates in surface pixels, the same
//!   space [`Rect`](crate::geometry::Rect) values are reported in.

/// Canonical input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A pointer event.
    Mouse(MouseEvent),

    /// The host viewport was resized.
    Resize {
        /// New viewport width in pixels.
        width: f64,
        /// New viewport height in pixels.
        height: f64,
    },

    /// Focus gained or lost.
    ///
    /// `true` = focus gained, `false` = focus lost.
    Focus(bool),
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    /// The type of pointer event.
    pub kind: MouseEventKind,

    /// Horizontal page coordinate.
    pub x: f64,

    /// Vertical page coordinate.
    pub y: f64,
}

impl MouseEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: MouseEventKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }
}

/// Types of pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Button pressed down.
    Down(MouseButton),

    /// Button released.
    Up(MouseButton),

    /// Pointer moved while a button is held.
    Drag(MouseButton),

    /// Pointer moved (no button pressed).
    Moved,
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// Left (primary) button.
    #[default]
    Left,

    /// Right button.
    Right,

    /// Middle button (scroll wheel click).
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_event_keeps_page_coordinates() {
        let event = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 4.0, 8.5);
        assert_eq!(event.kind, MouseEventKind::Down(MouseButton::Left));
        assert_eq!((event.x, event.y), (4.0, 8.5));
    }

    #[test]
    fn left_is_the_default_button() {
        assert_eq!(MouseButton::default(), MouseButton::Left);
        assert_ne!(
            MouseEventKind::Drag(MouseButton::Right),
            MouseEventKind::Drag(MouseButton::Left)
        );
    }
}
