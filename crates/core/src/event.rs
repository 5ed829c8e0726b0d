//! Handle events of a user interface.
use crate::keyboard;
use crate::mouse;
use crate::touch;
use crate::window;

/// A user interface event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keyboard event
    Keyboard(keyboard::Event),

    /// A mouse event
    Mouse(mouse::Event),

    /// A window event
    Window(window::Event),

    /// A touch event
    Touch(touch::Event),
}

impl Event {
    /// Returns true if the event is a pointer going down: a mouse button press
    /// or a finger touching the screen.
    pub fn is_press(&self) -> bool {
        matches!(
            self,
            Event::Mouse(mouse::Event::ButtonPressed { .. })
                | Event::Touch(touch::Event::FingerPressed { .. })
        )
    }

    /// Returns true if the event is a keyboard event.
    ///
    /// Keyboard events are routed to the focused node when dispatched
    /// without an explicit target.
    pub fn is_keyboard(&self) -> bool {
        matches!(self, Event::Keyboard(_))
    }
}

/// The status of an [`Event`] after being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The [`Event`] was **NOT** handled by any listener.
    Ignored,

    /// The [`Event`] was handled and must not travel any further.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use sun_ui_core::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Captured), Status::Captured);
    /// ```
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn test_presses() {
        let click = Event::Mouse(mouse::Event::ButtonPressed {
            button: mouse::Button::Left,
            modifiers: keyboard::Modifiers::empty(),
        });
        let finger = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: Point::ORIGIN,
        });
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::ORIGIN,
        });

        assert!(click.is_press());
        assert!(finger.is_press());
        assert!(!moved.is_press());
        assert!(!moved.is_keyboard());
    }
}
