//! The button showing the selected item of a combo box.
use crate::core::alignment::Alignment;
use crate::core::event::{self, Event};
use crate::core::keyboard::{self, Key, key};
use crate::core::mouse;
use crate::core::scene::Node;
use crate::core::touch;
use crate::core::{ListenerId, NodeId, Point, Rectangle, Scene, Size, Vector};

use super::config::Config;
use super::item::ItemRegistry;
use super::popup;

use std::cell::Cell;
use std::rc::Rc;

/// How a button press was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A mouse button or a finger.
    Pointer,

    /// `Enter` or `Space` while the button is focused.
    Keyboard,
}

/// A focusable button displaying the selected item, followed by an arrow.
///
/// The button knows nothing about the list it opens: it only reports
/// presses.
#[derive(Debug)]
pub struct AnchorButton {
    node: NodeId,
    arrow: NodeId,
    items: Vec<NodeId>,
    shown: Option<usize>,
    enabled: Rc<Cell<bool>>,
    listener: Option<ListenerId>,
}

impl AnchorButton {
    /// Creates a detached [`AnchorButton`] showing the item at `selected`.
    ///
    /// A display node is created for every item so the button keeps the same
    /// size whatever the selection.
    pub fn new<T>(
        scene: &Scene,
        registry: &ItemRegistry<T>,
        selected: usize,
        config: &Config,
    ) -> Self {
        let node = scene.add_node(None, Node::new().focusable(true).name("combo box button"));

        let items = registry
            .iter()
            .map(|item| {
                let content = item.create_node(scene);
                let _ = scene.append_child(node, content);

                content
            })
            .collect();

        let arrow = scene.add_node(Some(node), Node::new().name("arrow"));

        let mut button = Self {
            node,
            arrow,
            items,
            shown: None,
            enabled: Rc::new(Cell::new(true)),
            listener: None,
        };

        button.layout(scene, config);
        button.show(scene, selected);

        button
    }

    /// Returns the node of the button.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Returns the index of the item currently shown.
    pub fn shown(&self) -> Option<usize> {
        self.shown
    }

    /// Returns the display node of an item inside the button.
    pub fn item_node(&self, index: usize) -> Option<NodeId> {
        self.items.get(index).copied()
    }

    fn layout(&self, scene: &Scene, config: &Config) {
        let margin = config.button_margin;
        let content = popup::uniform_size(
            self.items
                .iter()
                .map(|item| popup::content_extent(scene, *item)),
        );

        for item in &self.items {
            let extent = popup::content_extent(scene, *item);

            scene.set_translation(
                *item,
                Vector::new(
                    margin + Alignment::from(config.align).offset(content.width, extent.width)
                        - extent.x,
                    margin + Alignment::Center.offset(content.height, extent.height) - extent.y,
                ),
            );
        }

        scene.set_content(
            self.arrow,
            Rectangle::new(
                Point::new(content.width + margin * 2.0, margin),
                Size::new(config.arrow_width, content.height),
            ),
        );

        scene.set_content(
            self.node,
            Rectangle::with_size(Size::new(
                content.width + config.arrow_width + margin * 3.0,
                content.height + margin * 2.0,
            )),
        );
    }

    /// Shows the item at `index` and hides the others.
    pub fn show(&mut self, scene: &Scene, index: usize) {
        if index >= self.items.len() {
            log::error!("AnchorButton: no item at index {index}");
            return;
        }

        for (candidate, item) in self.items.iter().enumerate() {
            scene.set_visible(*item, candidate == index);
        }

        self.shown = Some(index);
    }

    /// Returns true if the button reacts to presses.
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Enables or disables the button. A disabled button cannot be focused
    /// and reports no presses.
    pub fn set_enabled(&self, scene: &Scene, enabled: bool) {
        self.enabled.set(enabled);
        scene.set_focusable(self.node, enabled);
    }

    /// Starts reporting presses to `on_press`.
    ///
    /// Calling it again replaces the previous callback.
    pub fn listen(&mut self, scene: &Scene, on_press: impl Fn(&Scene, Activation) + 'static) {
        if let Some(listener) = self.listener.take() {
            let _ = scene.remove_input_listener(listener);
        }

        let node = self.node;
        let enabled = Rc::clone(&self.enabled);

        self.listener = Some(scene.add_input_listener(
            node,
            move |scene: &Scene, event: &Event, _target: Option<NodeId>| {
                if !enabled.get() {
                    return event::Status::Ignored;
                }

                match event {
                    Event::Mouse(mouse::Event::ButtonPressed {
                        button: mouse::Button::Left,
                        ..
                    })
                    | Event::Touch(touch::Event::FingerPressed { .. }) => {
                        on_press(scene, Activation::Pointer);

                        event::Status::Captured
                    }
                    Event::Keyboard(keyboard::Event::KeyPressed {
                        key: Key::Named(key::Named::Enter | key::Named::Space),
                        ..
                    }) if scene.focused() == Some(node) => {
                        on_press(scene, Activation::Keyboard);

                        event::Status::Captured
                    }
                    _ => event::Status::Ignored,
                }
            },
        ));
    }

    /// Removes the nodes and the listener of the button.
    pub fn dispose(&mut self, scene: &Scene) {
        if let Some(listener) = self.listener.take() {
            let _ = scene.remove_input_listener(listener);
        }

        scene.remove(self.node);
        self.items.clear();
        self.shown = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combo_box::Item;

    use std::cell::RefCell;

    fn button() -> (Scene, NodeId, AnchorButton) {
        let scene = Scene::new();
        let display = scene.add_display();
        let registry = ItemRegistry::new(vec![
            Item::new('a', |scene: &Scene| {
                scene.add_node(None, Node::new().size(Size::new(10.0, 10.0)))
            }),
            Item::new('b', |scene: &Scene| {
                scene.add_node(None, Node::new().size(Size::new(30.0, 6.0)))
            }),
        ])
        .expect("valid registry");

        let config = Config::default().button_margin(2.0).arrow_width(8.0);
        let button = AnchorButton::new(&scene, &registry, 1, &config);
        let _ = scene.append_child(display, button.node());

        (scene, display, button)
    }

    #[test]
    fn test_button_fits_the_largest_item() {
        let (scene, _display, button) = button();

        assert_eq!(
            scene.content(button.node()),
            Rectangle::with_size(Size::new(30.0 + 8.0 + 6.0, 14.0))
        );
    }

    #[test]
    fn test_show_hides_other_items() {
        let (scene, _display, mut button) = button();

        assert_eq!(button.shown(), Some(1));
        assert!(scene.is_visible(button.item_node(1).expect("item")));
        assert!(!scene.is_visible(button.item_node(0).expect("item")));

        button.show(&scene, 0);

        assert!(scene.is_visible(button.item_node(0).expect("item")));
        assert!(!scene.is_visible(button.item_node(1).expect("item")));
    }

    #[test]
    fn test_presses_are_reported() {
        let (scene, display, mut button) = button();
        let presses = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&presses);
        button.listen(&scene, move |_, activation| sink.borrow_mut().push(activation));

        let click = Event::Mouse(mouse::Event::ButtonPressed {
            button: mouse::Button::Left,
            modifiers: keyboard::Modifiers::empty(),
        });
        let space = Event::Keyboard(keyboard::Event::key_pressed(key::Named::Space));

        assert_eq!(
            scene.dispatch(display, &click, Some(button.node())),
            event::Status::Captured
        );
        assert_eq!(scene.dispatch(display, &space, None), event::Status::Ignored);

        assert!(scene.focus(button.node()));
        assert_eq!(scene.dispatch(display, &space, None), event::Status::Captured);

        assert_eq!(
            *presses.borrow(),
            vec![Activation::Pointer, Activation::Keyboard]
        );
    }

    #[test]
    fn test_disabled_button_ignores_presses() {
        let (scene, display, mut button) = button();
        let presses = Rc::new(Cell::new(0));

        let counter = Rc::clone(&presses);
        button.listen(&scene, move |_, _| counter.set(counter.get() + 1));
        button.set_enabled(&scene, false);

        let finger = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(0),
            position: Point::ORIGIN,
        });

        assert_eq!(
            scene.dispatch(display, &finger, Some(button.node())),
            event::Status::Ignored
        );
        assert!(!scene.focus(button.node()));
        assert_eq!(presses.get(), 0);
    }
}
