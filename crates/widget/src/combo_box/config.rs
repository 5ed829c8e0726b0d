//! Configure a combo box.
use crate::core::alignment;
use crate::core::time::Duration;
use crate::core::{NodeId, Scene};
use crate::{Error, Result};

use super::Feedback;

use std::fmt;
use std::rc::Rc;

/// Where the list opens relative to its anchor button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// The list opens above the button.
    Above,

    /// The list opens below the button.
    #[default]
    Below,
}

/// The margins around each item of the list, which also size the highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    /// The horizontal margin on each side of an item.
    pub x_margin: f32,

    /// The vertical margin on each side of an item.
    pub y_margin: f32,

    /// The corner radius of the highlight rectangle.
    pub corner_radius: f32,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            x_margin: 6.0,
            y_margin: 2.0,
            corner_radius: 4.0,
        }
    }
}

/// Finds the display a combo box registers its dismiss listener on.
///
/// It receives the anchor button node and the parent of the list.
#[derive(Clone)]
pub struct DisplayResolver(Rc<dyn Fn(&Scene, NodeId, NodeId) -> Option<NodeId>>);

impl DisplayResolver {
    /// Creates a [`DisplayResolver`] from a closure.
    pub fn new(resolve: impl Fn(&Scene, NodeId, NodeId) -> Option<NodeId> + 'static) -> Self {
        Self(Rc::new(resolve))
    }

    /// Resolves the display shared by the anchor and the list parent.
    pub fn resolve(&self, scene: &Scene, anchor: NodeId, list_parent: NodeId) -> Option<NodeId> {
        (self.0)(scene, anchor, list_parent)
    }
}

impl Default for DisplayResolver {
    /// Both nodes must be attached to the same display.
    fn default() -> Self {
        Self::new(|scene, anchor, list_parent| {
            let display = scene.display_of(anchor)?;

            (scene.display_of(list_parent) == Some(display)).then_some(display)
        })
    }
}

impl fmt::Debug for DisplayResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DisplayResolver(..)")
    }
}

/// The options of a combo box.
#[derive(Clone)]
pub struct Config {
    pub(crate) placement: Placement,
    pub(crate) align: alignment::Horizontal,
    pub(crate) highlight: Highlight,
    pub(crate) close_on_anchor_press: bool,
    pub(crate) items_per_page: usize,
    pub(crate) page_transition: Duration,
    pub(crate) arrow_width: f32,
    pub(crate) button_margin: f32,
    pub(crate) page_button_height: f32,
    pub(crate) resolver: DisplayResolver,
    pub(crate) on_feedback: Option<Rc<dyn Fn(Feedback)>>,
}

impl Config {
    /// Sets where the list opens relative to the button.
    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the horizontal alignment of items in the list and in the button.
    #[must_use]
    pub fn align(mut self, align: alignment::Horizontal) -> Self {
        self.align = align;
        self
    }

    /// Sets the [`Highlight`] margins of the list items.
    #[must_use]
    pub fn highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }

    /// Sets whether pressing the button while the list is open closes it.
    #[must_use]
    pub fn close_on_anchor_press(mut self, close: bool) -> Self {
        self.close_on_anchor_press = close;
        self
    }

    /// Sets how many items a carousel page shows.
    #[must_use]
    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// Sets the duration of the carousel page animation.
    #[must_use]
    pub fn page_transition(mut self, duration: Duration) -> Self {
        self.page_transition = duration;
        self
    }

    /// Sets the width of the arrow region of the button.
    #[must_use]
    pub fn arrow_width(mut self, width: f32) -> Self {
        self.arrow_width = width;
        self
    }

    /// Sets the margin around the content of the button.
    #[must_use]
    pub fn button_margin(mut self, margin: f32) -> Self {
        self.button_margin = margin;
        self
    }

    /// Sets the height of the carousel previous and next buttons.
    #[must_use]
    pub fn page_button_height(mut self, height: f32) -> Self {
        self.page_button_height = height;
        self
    }

    /// Sets the [`DisplayResolver`].
    #[must_use]
    pub fn display_resolver(mut self, resolver: DisplayResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Sets the closure receiving the [`Feedback`] of the combo box.
    #[must_use]
    pub fn on_feedback(mut self, on_feedback: impl Fn(Feedback) + 'static) -> Self {
        self.on_feedback = Some(Rc::new(on_feedback));
        self
    }

    /// Returns the configured [`Placement`].
    pub fn get_placement(&self) -> Placement {
        self.placement
    }

    /// Checks that the options can be used.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("highlight x margin", self.highlight.x_margin),
            ("highlight y margin", self.highlight.y_margin),
            ("highlight corner radius", self.highlight.corner_radius),
            ("arrow width", self.arrow_width),
            ("button margin", self.button_margin),
            ("page button height", self.page_button_height),
        ];

        for (name, length) in lengths {
            if !length.is_finite() || length < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be a finite, non-negative length, got {length}"
                )));
            }
        }

        if self.items_per_page == 0 {
            return Err(Error::InvalidConfig(
                "items per page must be at least 1".to_owned(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            align: alignment::Horizontal::Left,
            highlight: Highlight::default(),
            close_on_anchor_press: true,
            items_per_page: 4,
            page_transition: Duration::from_millis(250),
            arrow_width: 16.0,
            button_margin: 4.0,
            page_button_height: 12.0,
            resolver: DisplayResolver::default(),
            on_feedback: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("placement", &self.placement)
            .field("align", &self.align)
            .field("highlight", &self.highlight)
            .field("close_on_anchor_press", &self.close_on_anchor_press)
            .field("items_per_page", &self.items_per_page)
            .field("page_transition", &self.page_transition)
            .field("arrow_width", &self.arrow_width)
            .field("button_margin", &self.button_margin)
            .field("page_button_height", &self.page_button_height)
            .field("on_feedback", &self.on_feedback.is_some())
            .finish_non_exhaustive()
    }
}
