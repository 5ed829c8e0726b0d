//! Use the built-in widgets or create your own.
//!
//! The widgets are built on the scene graph of [`sun_ui_core`]: each one
//! creates and owns the nodes it displays and reacts to the events the host
//! dispatches through the [`Scene`](core::Scene).
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use sun_ui_core as core;

pub mod carousel;
pub mod combo_box;

mod error;

pub use carousel::{Carousel, PageIndicator};
pub use combo_box::{ComboBox, Config, Feedback, Item};
pub use error::{Error, Result};
