//! The floating surface a combo box opens.
use crate::core::alignment::{Alignment, Horizontal};
use crate::core::scene::Node;
use crate::core::time::Instant;
use crate::core::{NodeId, Rectangle, Scene, Size, Transformation, Vector};

use super::item::{Item, ItemRegistry, VisibleItems};

use rustc_hash::FxHashMap;

/// A surface listing the items of a combo box.
///
/// The combo box positions, scales, shows and hides the surface and routes
/// input to it; the surface lays out the items and tracks the highlight.
pub trait Popup<T> {
    /// Returns the root node of the surface.
    fn node(&self) -> NodeId;

    /// Lays out the visible items.
    ///
    /// Implementations skip the work when nothing they depend on changed.
    fn layout(&mut self, scene: &Scene, registry: &ItemRegistry<T>);

    /// Returns the items keyboard traversal walks over right now.
    fn visible_items(&self, registry: &ItemRegistry<T>) -> VisibleItems;

    /// Returns the node wrapping an item, once the surface created it.
    fn item_node(&self, index: usize) -> Option<NodeId>;

    /// Returns the item a node of the surface belongs to.
    fn item_at(&self, scene: &Scene, node: NodeId) -> Option<usize>;

    /// Focuses and highlights an item, returning whether it took focus.
    fn focus_item(&mut self, scene: &Scene, index: usize) -> bool;

    /// Highlights an item, or clears the highlight.
    fn highlight(&mut self, scene: &Scene, index: Option<usize>);

    /// Returns the highlighted item.
    fn highlighted(&self) -> Option<usize>;

    /// Prepares the surface right before it is shown, with `selected` being
    /// the item holding the current selection.
    fn will_open(&mut self, _scene: &Scene, _registry: &ItemRegistry<T>, _selected: usize) {}

    /// Advances any running animation.
    fn tick(&mut self, _scene: &Scene, _now: Instant) {}

    /// Moves to the next or the previous page of a paged surface, returning
    /// whether the page changed.
    fn turn_page(&mut self, _scene: &Scene, _forward: bool) -> bool {
        false
    }

    /// Returns the notifications the surface postponed while the combo box
    /// held its state, for the combo box to run once it let go of it.
    fn publish(&self) -> Option<Box<dyn FnOnce()>> {
        None
    }

    /// Removes every node and listener the surface created.
    fn dispose(&mut self, scene: &Scene);
}

/// The node wrapping an item inside a surface: a focusable cell, its
/// highlight rectangle and the display node of the item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cell {
    pub(crate) node: NodeId,
    highlight: NodeId,
    content: NodeId,
}

impl Cell {
    pub(crate) fn new<T>(scene: &Scene, parent: NodeId, item: &Item<T>) -> Self {
        let node = scene.add_node(Some(parent), Node::new().focusable(true).name("cell"));
        let highlight = scene.add_node(
            Some(node),
            Node::new().visible(false).name("highlight"),
        );
        let content = item.create_node(scene);
        let _ = scene.append_child(node, content);

        Self {
            node,
            highlight,
            content,
        }
    }

    /// Returns the extent of the item content in cell coordinates, ignoring
    /// its translation.
    pub(crate) fn extent(&self, scene: &Scene) -> Rectangle {
        content_extent(scene, self.content)
    }

    pub(crate) fn arrange(&self, scene: &Scene, size: Size, margin: Vector, align: Horizontal) {
        let frame = Rectangle::with_size(size);
        let extent = self.extent(scene);
        let inner = Size::new(size.width - margin.x * 2.0, size.height - margin.y * 2.0);

        scene.set_content(self.node, frame);
        scene.set_content(self.highlight, frame);
        scene.set_translation(
            self.content,
            Vector::new(
                margin.x + Alignment::from(align).offset(inner.width, extent.width) - extent.x,
                margin.y + Alignment::Center.offset(inner.height, extent.height) - extent.y,
            ),
        );
    }

    pub(crate) fn set_highlighted(&self, scene: &Scene, highlighted: bool) {
        scene.set_visible(self.highlight, highlighted);
    }
}

/// Returns the extent of a node in its parent coordinates, ignoring its
/// translation.
pub(crate) fn content_extent(scene: &Scene, node: NodeId) -> Rectangle {
    Transformation::scale(scene.scale(node)).transform_rectangle(scene.local_bounds(node))
}

/// Returns the largest extent among the given nodes.
pub(crate) fn uniform_size(extents: impl IntoIterator<Item = Rectangle>) -> Size {
    extents
        .into_iter()
        .map(|extent| extent.size())
        .fold(Size::ZERO, Size::max)
}

/// Walks up from `node` until it reaches a cell of the surface rooted at
/// `root`.
pub(crate) fn find_cell(
    scene: &Scene,
    root: NodeId,
    cells: &FxHashMap<NodeId, usize>,
    node: NodeId,
) -> Option<usize> {
    let mut current = Some(node);

    while let Some(id) = current {
        if let Some(index) = cells.get(&id) {
            return Some(*index);
        }

        if id == root {
            return None;
        }

        current = scene.parent(id);
    }

    None
}
