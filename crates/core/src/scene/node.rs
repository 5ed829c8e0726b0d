use crate::{Rectangle, Size, Vector};

use smol_str::SmolStr;

/// The description of a node to insert in a [`Scene`](super::Scene).
///
/// ```
/// use sun_ui_core::scene::{Node, Scene};
/// use sun_ui_core::{Size, Vector};
///
/// let scene = Scene::new();
/// let display = scene.add_display();
///
/// let label = scene.add_node(
///     Some(display),
///     Node::new()
///         .size(Size::new(40.0, 12.0))
///         .translation(Vector::new(5.0, 5.0))
///         .name("label"),
/// );
///
/// assert_eq!(scene.parent(label), Some(display));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) content: Rectangle,
    pub(crate) translation: Vector,
    pub(crate) scale: f32,
    pub(crate) visible: bool,
    pub(crate) focusable: bool,
    pub(crate) name: Option<SmolStr>,
}

impl Node {
    /// Creates an empty, visible [`Node`] with no content.
    pub fn new() -> Self {
        Self {
            content: Rectangle::ZERO,
            translation: Vector::ZERO,
            scale: 1.0,
            visible: true,
            focusable: false,
            name: None,
        }
    }

    /// Sets the content rectangle of the [`Node`], in its local coordinates.
    #[must_use]
    pub fn content(mut self, content: Rectangle) -> Self {
        self.content = content;
        self
    }

    /// Sets a content rectangle of the given [`Size`] at the local origin.
    #[must_use]
    pub fn size(self, size: Size) -> Self {
        self.content(Rectangle::with_size(size))
    }

    /// Sets the translation of the [`Node`] relative to its parent.
    #[must_use]
    pub fn translation(mut self, translation: Vector) -> Self {
        self.translation = translation;
        self
    }

    /// Sets the uniform scale of the [`Node`].
    #[must_use]
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets whether the [`Node`] is visible.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets whether the [`Node`] can receive keyboard focus.
    #[must_use]
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    /// Sets a name shown in logs and debug output.
    #[must_use]
    pub fn name(mut self, name: impl Into<SmolStr>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
