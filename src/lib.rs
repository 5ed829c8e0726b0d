//! sun_ui builds interactive simulations out of a scene graph of scaled and
//! translated nodes.
//!
//! The host owns a [`Scene`], creates displays with [`Scene::add_display`]
//! and feeds them input with [`Scene::dispatch`]. Widgets create the nodes
//! they show, attach listeners to them and keep their state in observable
//! [`Property`] values the rest of the application can watch.
//!
//! # Combo boxes
//! A [`ComboBox`] edits a [`Property`] by letting the user pick from a list
//! that floats on top of everything else. The button and the list may live
//! under different parents; the list is scaled and moved so it lines up
//! with the button anyway.
//!
//! ```
//! use sun_ui::combo_box::{ComboBox, Config, Item};
//! use sun_ui::scene::Node;
//! use sun_ui::{Property, Scene, Size, Vector};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Gravity {
//!     Earth,
//!     Moon,
//!     Jupiter,
//! }
//!
//! let scene = Scene::new();
//! let display = scene.add_display();
//!
//! let panel = scene.add_node(
//!     Some(display),
//!     Node::new().translation(Vector::new(100.0, 40.0)).scale(1.5),
//! );
//! let popups = scene.add_node(Some(display), Node::new());
//!
//! let gravity = Property::new(Gravity::Earth);
//! let label = |scene: &Scene| scene.add_node(None, Node::new().size(Size::new(60.0, 14.0)));
//!
//! let combo_box = ComboBox::new(
//!     &scene,
//!     gravity.clone(),
//!     vec![
//!         Item::new(Gravity::Earth, label),
//!         Item::new(Gravity::Moon, label),
//!         Item::new(Gravity::Jupiter, label).visible(false),
//!     ],
//!     popups,
//!     Config::default(),
//! )?;
//!
//! let _ = scene.append_child(panel, combo_box.node());
//!
//! combo_box.open()?;
//! assert_eq!(scene.scale(combo_box.popup_node()), 1.5);
//!
//! combo_box.close();
//! assert_eq!(gravity.get(), Gravity::Earth);
//! # Ok::<(), sun_ui::Error>(())
//! ```
//!
//! # Carousels
//! [`ComboBox::carousel`] pages through long lists a few items at a time.
//! The [`Carousel`] it builds exposes its page as a [`ReadOnlyProperty`], so
//! a [`PageIndicator`] or anything else can follow it.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use sun_ui_core as core;
pub use sun_ui_widget as widget;

pub use crate::core::alignment;
pub use crate::core::property;
pub use crate::core::scene;
pub use crate::core::time;
pub use crate::core::{
    Alignment, Point, Property, ReadOnlyProperty, Rectangle, Scene, Size, Subscription,
    Transformation, Vector,
};
pub use crate::widget::{
    Carousel, ComboBox, Error, Feedback, Item, PageIndicator, Result, carousel, combo_box,
};

pub mod event {
    //! Handle events of a user interface.
    pub use crate::core::event::{Event, Status};
    pub use crate::core::scene::InputListener;
}

pub mod keyboard {
    //! Listen and react to keyboard events.
    pub use crate::core::keyboard::key;
    pub use crate::core::keyboard::{Event, Key, Modifiers};
}

pub mod mouse {
    //! Listen and react to mouse events.
    pub use crate::core::mouse::{Button, Event};
}

pub mod touch {
    //! Listen and react to touch events.
    pub use crate::core::touch::{Event, Finger};
}

pub mod window {
    //! React to changes of the window hosting a scene.
    pub use crate::core::window::Event;
}
