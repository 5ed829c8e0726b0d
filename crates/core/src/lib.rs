//! The core library of [sun_ui].
//!
//! This library holds basic types that can be reused and re-exported in
//! different runtime implementations: geometry, input events, observable
//! properties and the scene graph the widgets are built on.
//!
//! [sun_ui]: https://github.com/sun-ui/sun_ui
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod alignment;
pub mod event;
pub mod keyboard;
pub mod mouse;
pub mod property;
pub mod scene;
pub mod time;
pub mod touch;
pub mod window;

mod point;
mod rectangle;
mod size;
mod transformation;
mod vector;

pub use alignment::Alignment;
pub use event::Event;
pub use point::Point;
pub use property::{Property, ReadOnlyProperty, Subscription};
pub use rectangle::Rectangle;
pub use scene::{InputListener, ListenerId, Node, NodeId, Scene};
pub use size::Size;
pub use transformation::Transformation;
pub use vector::Vector;
