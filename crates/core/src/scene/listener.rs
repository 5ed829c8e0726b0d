use crate::event::{Event, Status};
use crate::scene::{NodeId, Scene};

/// Something that reacts to events dispatched through a [`Scene`].
///
/// Closures with the same signature implement this trait.
pub trait InputListener {
    /// Handles an event travelling through the node the listener is attached
    /// to. `target` is the node the event was aimed at, if any.
    ///
    /// Returning [`Status::Captured`] stops the propagation.
    fn on_event(&self, scene: &Scene, event: &Event, target: Option<NodeId>) -> Status;
}

impl<F> InputListener for F
where
    F: Fn(&Scene, &Event, Option<NodeId>) -> Status,
{
    fn on_event(&self, scene: &Scene, event: &Event, target: Option<NodeId>) -> Status {
        self(scene, event, target)
    }
}
