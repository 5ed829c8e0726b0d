//! Arrange nodes in a tree and route input through it.
//!
//! A [`Scene`] is a cheap handle to a tree of nodes. Every node has a
//! translation and a uniform scale relative to its parent, a content
//! rectangle in its own coordinates and an ordered list of children. The
//! last child paints on top.
//!
//! Roots created with [`Scene::add_display`] are _displays_: the roots events
//! are dispatched from. Listeners attached to a display see every event that
//! travels through it.
mod listener;
mod node;


pub use listener::InputListener;
pub use node::Node;

use crate::event::{self, Event};
use crate::{Point, Rectangle, Transformation, Vector};

use slotmap::{SlotMap, new_key_type};
use smol_str::SmolStr;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

new_key_type! {
    /// The identifier of a node in a [`Scene`].
    pub struct NodeId;

    /// The identifier of an [`InputListener`] attached to a [`Scene`].
    pub struct ListenerId;
}

/// A tree of nodes and the listeners attached to them.
///
/// Cloning a [`Scene`] clones the handle, not the tree.
#[derive(Clone, Default)]
pub struct Scene {
    graph: Rc<RefCell<Graph>>,
}

#[derive(Default)]
struct Graph {
    nodes: SlotMap<NodeId, NodeData>,
    listeners: SlotMap<ListenerId, Registration>,
    focused: Option<NodeId>,
    revision: u64,
}

struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    content: Rectangle,
    translation: Vector,
    scale: f32,
    visible: bool,
    focusable: bool,
    display: bool,
    name: Option<SmolStr>,
    listeners: Vec<ListenerId>,
}

struct Registration {
    node: NodeId,
    listener: Rc<dyn InputListener>,
}

impl NodeData {
    fn new(node: Node, display: bool) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            content: node.content,
            translation: node.translation,
            scale: node.scale,
            visible: node.visible,
            focusable: node.focusable,
            display,
            name: node.name,
            listeners: Vec::new(),
        }
    }

    fn transformation(&self) -> Transformation {
        Transformation::translate(self.translation) * Transformation::scale(self.scale)
    }
}

impl Graph {
    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|data| data.parent)
    }

    fn root(&self, mut node: NodeId) -> NodeId {
        while let Some(parent) = self.parent(node) {
            node = parent;
        }

        node
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        if !self.nodes.contains_key(node) {
            return false;
        }

        let mut current = Some(node);

        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }

            current = self.parent(candidate);
        }

        false
    }

    fn global_transformation(&self, node: NodeId) -> Transformation {
        let mut transformation = Transformation::IDENTITY;
        let mut current = Some(node);

        while let Some(id) = current {
            let Some(data) = self.nodes.get(id) else {
                break;
            };

            transformation = data.transformation() * transformation;
            current = data.parent;
        }

        transformation
    }

    fn local_bounds(&self, node: NodeId) -> Option<Rectangle> {
        let data = self.nodes.get(node)?;

        let own = (data.content.width > 0.0 || data.content.height > 0.0).then_some(data.content);

        data.children
            .iter()
            .filter_map(|child| {
                let child_data = self.nodes.get(*child)?;

                if !child_data.visible {
                    return None;
                }

                let bounds = self.local_bounds(*child)?;

                Some(child_data.transformation().transform_rectangle(bounds))
            })
            .fold(own, |union, bounds| match union {
                Some(union) => Some(union.union(&bounds)),
                None => Some(bounds),
            })
    }

    fn is_rendered(&self, node: NodeId) -> bool {
        let mut current = Some(node);

        while let Some(id) = current {
            let Some(data) = self.nodes.get(id) else {
                return false;
            };

            if !data.visible {
                return false;
            }

            if data.parent.is_none() {
                return data.display;
            }

            current = data.parent;
        }

        false
    }

    fn unlink(&mut self, node: NodeId) {
        let Some(parent) = self.parent(node) else {
            return;
        };

        if let Some(data) = self.nodes.get_mut(parent) {
            data.children.retain(|child| *child != node);
        }

        if let Some(data) = self.nodes.get_mut(node) {
            data.parent = None;
        }
    }

    fn blur_within(&mut self, node: NodeId) {
        if let Some(focused) = self.focused
            && self.contains(node, focused)
        {
            self.focused = None;
        }
    }

    fn pick(&self, node: NodeId, point: Point) -> Option<NodeId> {
        let data = self.nodes.get(node)?;

        if !data.visible || data.scale == 0.0 {
            return None;
        }

        let local = data.transformation().inverse().transform_point(point);

        data.children
            .iter()
            .rev()
            .find_map(|child| self.pick(*child, local))
            .or_else(|| data.content.contains(local).then_some(node))
    }
}

impl Scene {
    /// Creates an empty [`Scene`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new display: a root node events are dispatched from.
    pub fn add_display(&self) -> NodeId {
        let mut graph = self.graph.borrow_mut();
        graph.bump();

        graph
            .nodes
            .insert(NodeData::new(Node::new().name("display"), true))
    }

    /// Inserts a [`Node`] as the topmost child of `parent`, or detached when
    /// `parent` is `None`.
    pub fn add_node(&self, parent: Option<NodeId>, node: Node) -> NodeId {
        let mut graph = self.graph.borrow_mut();
        graph.bump();

        let id = graph.nodes.insert(NodeData::new(node, false));

        if let Some(parent) = parent {
            if let Some(data) = graph.nodes.get_mut(parent) {
                data.children.push(id);
            } else {
                log::warn!("Scene: parent {parent:?} does not exist, {id:?} stays detached");
                return id;
            }

            if let Some(data) = graph.nodes.get_mut(id) {
                data.parent = Some(parent);
            }
        }

        id
    }

    /// Moves an existing node to the top of `parent`'s children.
    ///
    /// Returns `false`, and changes nothing, if either node is missing or if
    /// `child` is `parent` or one of its ancestors.
    pub fn append_child(&self, parent: NodeId, child: NodeId) -> bool {
        let mut graph = self.graph.borrow_mut();

        if !graph.nodes.contains_key(parent) || graph.contains(child, parent) {
            log::warn!("Scene: cannot append {child:?} to {parent:?}");
            return false;
        }

        graph.unlink(child);

        if let Some(data) = graph.nodes.get_mut(parent) {
            data.children.push(child);
        }

        if let Some(data) = graph.nodes.get_mut(child) {
            data.parent = Some(parent);
        }

        graph.bump();

        true
    }

    /// Detaches a node from its parent, keeping its subtree and listeners.
    pub fn detach(&self, node: NodeId) {
        let mut graph = self.graph.borrow_mut();

        if graph.parent(node).is_some() {
            graph.blur_within(node);
            graph.unlink(node);
            graph.bump();
        }
    }

    /// Removes a node, its whole subtree and every listener attached to it.
    pub fn remove(&self, node: NodeId) {
        let mut graph = self.graph.borrow_mut();

        if !graph.nodes.contains_key(node) {
            return;
        }

        graph.blur_within(node);
        graph.unlink(node);

        let mut pending = vec![node];

        while let Some(id) = pending.pop() {
            if let Some(data) = graph.nodes.remove(id) {
                for listener in data.listeners {
                    let _ = graph.listeners.remove(listener);
                }

                pending.extend(data.children);
            }
        }

        graph.bump();
    }

    /// Raises a node to the topmost paint order within its parent.
    pub fn move_to_front(&self, node: NodeId) {
        let mut graph = self.graph.borrow_mut();

        let Some(parent) = graph.parent(node) else {
            return;
        };

        let Some(data) = graph.nodes.get_mut(parent) else {
            return;
        };

        if data.children.last() == Some(&node) {
            return;
        }

        data.children.retain(|child| *child != node);
        data.children.push(node);

        graph.bump();
    }

    /// Returns true if the node exists in the [`Scene`].
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.graph.borrow().nodes.contains_key(node)
    }

    /// Returns the number of nodes in the [`Scene`].
    pub fn node_count(&self) -> usize {
        self.graph.borrow().nodes.len()
    }

    /// Returns the parent of a node.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.graph.borrow().parent(node)
    }

    /// Returns the children of a node, bottom to top.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.graph
            .borrow()
            .nodes
            .get(node)
            .map(|data| data.children.clone())
            .unwrap_or_default()
    }

    /// Returns true if `node` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.graph.borrow().contains(ancestor, node)
    }

    /// Returns the display a node is attached to, if any.
    pub fn display_of(&self, node: NodeId) -> Option<NodeId> {
        let graph = self.graph.borrow();

        if !graph.nodes.contains_key(node) {
            return None;
        }

        let root = graph.root(node);

        graph
            .nodes
            .get(root)
            .filter(|data| data.display)
            .map(|_| root)
    }

    /// Returns the name given to a node, if any.
    pub fn name(&self, node: NodeId) -> Option<SmolStr> {
        self.graph
            .borrow()
            .nodes
            .get(node)
            .and_then(|data| data.name.clone())
    }

    /// Returns the translation of a node relative to its parent.
    pub fn translation(&self, node: NodeId) -> Vector {
        self.read(node, Vector::ZERO, |data| data.translation)
    }

    /// Sets the translation of a node relative to its parent.
    pub fn set_translation(&self, node: NodeId, translation: Vector) {
        self.write(node, |data| {
            std::mem::replace(&mut data.translation, translation) != translation
        });
    }

    /// Returns the uniform scale of a node.
    pub fn scale(&self, node: NodeId) -> f32 {
        self.read(node, 1.0, |data| data.scale)
    }

    /// Sets the uniform scale of a node.
    pub fn set_scale(&self, node: NodeId, scale: f32) {
        self.write(node, |data| std::mem::replace(&mut data.scale, scale) != scale);
    }

    /// Returns the content rectangle of a node, in its local coordinates.
    pub fn content(&self, node: NodeId) -> Rectangle {
        self.read(node, Rectangle::ZERO, |data| data.content)
    }

    /// Sets the content rectangle of a node, in its local coordinates.
    pub fn set_content(&self, node: NodeId, content: Rectangle) {
        self.write(node, |data| {
            std::mem::replace(&mut data.content, content) != content
        });
    }

    /// Returns true if the node itself is visible.
    pub fn is_visible(&self, node: NodeId) -> bool {
        self.read(node, false, |data| data.visible)
    }

    /// Shows or hides a node. Hiding a node blurs any focus inside it.
    pub fn set_visible(&self, node: NodeId, visible: bool) {
        self.write(node, |data| {
            std::mem::replace(&mut data.visible, visible) != visible
        });

        if !visible {
            self.graph.borrow_mut().blur_within(node);
        }
    }

    /// Returns true if the node and all its ancestors are visible and the
    /// node is attached to a display.
    pub fn is_rendered(&self, node: NodeId) -> bool {
        self.graph.borrow().is_rendered(node)
    }

    /// Returns true if the node can receive keyboard focus.
    pub fn is_focusable(&self, node: NodeId) -> bool {
        self.read(node, false, |data| data.focusable)
    }

    /// Sets whether the node can receive keyboard focus.
    pub fn set_focusable(&self, node: NodeId, focusable: bool) {
        let mut graph = self.graph.borrow_mut();

        if let Some(data) = graph.nodes.get_mut(node) {
            data.focusable = focusable;
        }

        if !focusable && graph.focused == Some(node) {
            graph.focused = None;
        }
    }

    /// Returns the transformation of a node relative to its parent.
    pub fn transformation(&self, node: NodeId) -> Transformation {
        self.read(node, Transformation::IDENTITY, NodeData::transformation)
    }

    /// Returns the transformation from the local coordinates of a node to
    /// global coordinates.
    pub fn global_transformation(&self, node: NodeId) -> Transformation {
        self.graph.borrow().global_transformation(node)
    }

    /// Converts a point in the local coordinates of a node to global
    /// coordinates.
    pub fn local_to_global(&self, node: NodeId, point: Point) -> Point {
        self.global_transformation(node).transform_point(point)
    }

    /// Converts a point in global coordinates to the local coordinates of a
    /// node.
    pub fn global_to_local(&self, node: NodeId, point: Point) -> Point {
        self.global_transformation(node)
            .inverse()
            .transform_point(point)
    }

    /// Returns the bounds of a node in its local coordinates: the union of
    /// its content and of the transformed bounds of its visible children.
    pub fn local_bounds(&self, node: NodeId) -> Rectangle {
        self.graph
            .borrow()
            .local_bounds(node)
            .unwrap_or(Rectangle::ZERO)
    }

    /// Returns the bounds of a node in global coordinates.
    pub fn global_bounds(&self, node: NodeId) -> Rectangle {
        let graph = self.graph.borrow();
        let bounds = graph.local_bounds(node).unwrap_or(Rectangle::ZERO);

        graph
            .global_transformation(node)
            .transform_rectangle(bounds)
    }

    /// Returns the topmost visible node under a global point.
    pub fn pick(&self, display: NodeId, point: Point) -> Option<NodeId> {
        self.graph.borrow().pick(display, point)
    }

    /// Focuses a node.
    ///
    /// Only nodes that are focusable and rendered can be focused; returns
    /// whether the focus moved.
    pub fn focus(&self, node: NodeId) -> bool {
        let mut graph = self.graph.borrow_mut();

        let focusable = graph.nodes.get(node).is_some_and(|data| data.focusable);

        if !focusable || !graph.is_rendered(node) {
            log::debug!("Scene: {node:?} cannot take focus");
            return false;
        }

        graph.focused = Some(node);

        true
    }

    /// Clears the keyboard focus.
    pub fn blur(&self) {
        self.graph.borrow_mut().focused = None;
    }

    /// Returns the focused node, if any.
    pub fn focused(&self) -> Option<NodeId> {
        self.graph.borrow().focused
    }

    /// Returns a counter that changes whenever the structure, geometry or
    /// visibility of any node changes.
    pub fn revision(&self) -> u64 {
        self.graph.borrow().revision
    }

    /// Attaches an [`InputListener`] to a node.
    ///
    /// Listeners attached to a display see every event dispatched from it.
    pub fn add_input_listener(
        &self,
        node: NodeId,
        listener: impl InputListener + 'static,
    ) -> ListenerId {
        let mut graph = self.graph.borrow_mut();

        let id = graph.listeners.insert(Registration {
            node,
            listener: Rc::new(listener),
        });

        match graph.nodes.get_mut(node) {
            Some(data) => data.listeners.push(id),
            None => log::warn!("Scene: listener {id:?} attached to missing node {node:?}"),
        }

        id
    }

    /// Detaches a listener.
    ///
    /// Returns `false` if the listener was not attached, which makes removal
    /// idempotent.
    pub fn remove_input_listener(&self, id: ListenerId) -> bool {
        let mut graph = self.graph.borrow_mut();

        let Some(registration) = graph.listeners.remove(id) else {
            return false;
        };

        if let Some(data) = graph.nodes.get_mut(registration.node) {
            data.listeners.retain(|listener| *listener != id);
        }

        true
    }

    /// Returns true if the listener is attached.
    pub fn has_input_listener(&self, id: ListenerId) -> bool {
        self.graph.borrow().listeners.contains_key(id)
    }

    /// Returns the number of listeners attached to a node.
    pub fn input_listener_count(&self, node: NodeId) -> usize {
        self.read(node, 0, |data| data.listeners.len())
    }

    /// Dispatches an [`Event`] from a display.
    ///
    /// The event bubbles from `target` up to the display: listeners of the
    /// target run first and the display's own listeners run last. Keyboard
    /// events without a target go to the focused node.
    ///
    /// The listeners are collected before any of them runs. A listener removed
    /// while the event travels is skipped, one added is not called.
    pub fn dispatch(
        &self,
        display: NodeId,
        event: &Event,
        target: Option<NodeId>,
    ) -> event::Status {
        let target = match target {
            Some(target) => Some(target),
            None if event.is_keyboard() => self.focused(),
            None => None,
        };

        let listeners: Vec<(ListenerId, Rc<dyn InputListener>)> = {
            let graph = self.graph.borrow();

            if !graph.nodes.contains_key(display) {
                log::warn!("Scene: cannot dispatch from missing display {display:?}");
                return event::Status::Ignored;
            }

            let mut trail = Vec::new();

            if let Some(target) = target.filter(|target| graph.contains(display, *target)) {
                let mut current = Some(target);

                while let Some(node) = current
                    && node != display
                {
                    trail.push(node);
                    current = graph.parent(node);
                }
            }

            trail.push(display);

            trail
                .iter()
                .filter_map(|node| graph.nodes.get(*node))
                .flat_map(|data| data.listeners.iter())
                .filter_map(|id| {
                    graph
                        .listeners
                        .get(*id)
                        .map(|registration| (*id, Rc::clone(&registration.listener)))
                })
                .collect()
        };

        for (id, listener) in listeners {
            if !self.has_input_listener(id) {
                continue;
            }

            if listener.on_event(self, event, target) == event::Status::Captured {
                return event::Status::Captured;
            }
        }

        event::Status::Ignored
    }

    fn read<R>(&self, node: NodeId, default: R, f: impl FnOnce(&NodeData) -> R) -> R {
        self.graph.borrow().nodes.get(node).map_or(default, f)
    }

    fn write(&self, node: NodeId, f: impl FnOnce(&mut NodeData) -> bool) {
        let mut graph = self.graph.borrow_mut();

        let changed = graph.nodes.get_mut(node).is_some_and(f);

        if changed {
            graph.bump();
        }
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.graph.borrow();

        f.debug_struct("Scene")
            .field("nodes", &graph.nodes.len())
            .field("listeners", &graph.listeners.len())
            .field("focused", &graph.focused)
            .field("revision", &graph.revision)
            .finish()
    }
}
