//! Build window-based GUI applications.
mod event;

pub use event::Event;
