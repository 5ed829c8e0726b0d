//! Build touch events.
use crate::Point;

/// A unique identifier representing a finger on a touch interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Finger(pub u64);

/// A touch interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A touch interaction was started.
    FingerPressed {
        /// The finger that touched the screen.
        id: Finger,
        /// Where the finger went down, in global coordinates.
        position: Point,
    },

    /// An ongoing touch interaction was moved.
    FingerMoved {
        /// The moving finger.
        id: Finger,
        /// The new position, in global coordinates.
        position: Point,
    },

    /// A touch interaction was ended.
    FingerLifted {
        /// The lifted finger.
        id: Finger,
        /// Where the finger left the screen, in global coordinates.
        position: Point,
    },

    /// A touch interaction was canceled by the platform.
    FingerLost {
        /// The lost finger.
        id: Finger,
        /// The last known position, in global coordinates.
        position: Point,
    },
}
