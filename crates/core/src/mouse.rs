//! Handle mouse events.
use crate::Point;
use crate::keyboard::Modifiers;

/// The button of a mouse.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum Button {
    /// The left mouse button.
    Left,

    /// The right mouse button.
    Right,

    /// The middle (wheel) button.
    Middle,

    /// Some other button.
    Other(u16),
}

/// A mouse event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The mouse cursor entered the window.
    CursorEntered,

    /// The mouse cursor left the window.
    CursorLeft,

    /// The mouse cursor was moved.
    CursorMoved {
        /// The new position of the mouse cursor, in global coordinates.
        position: Point,
    },

    /// A mouse button was pressed.
    ButtonPressed {
        /// The pressed button.
        button: Button,

        /// The state of the modifier keys.
        modifiers: Modifiers,
    },

    /// A mouse button was released.
    ButtonReleased {
        /// The released button.
        button: Button,

        /// The state of the modifier keys.
        modifiers: Modifiers,
    },
}
