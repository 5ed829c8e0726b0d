//! Combo boxes let users pick a value from a floating list anchored to a
//! button.
//!
//! The selected value lives in a [`Property`] owned by the caller. The
//! button shows the item holding that value; pressing it opens the list on
//! top of a separate parent node, scaled and positioned so it lines up with
//! the button even when both live under differently transformed subtrees.
//!
//! # Example
//! ```
//! use sun_ui_widget::combo_box::{ComboBox, Config, Item};
//! use sun_ui_widget::core::scene::Node;
//! use sun_ui_widget::core::{Property, Scene, Size};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Fruit {
//!     Apple,
//!     Orange,
//! }
//!
//! let scene = Scene::new();
//! let display = scene.add_display();
//! let selection = Property::new(Fruit::Apple);
//!
//! let label = |scene: &Scene| scene.add_node(None, Node::new().size(Size::new(40.0, 12.0)));
//!
//! let combo_box = ComboBox::new(
//!     &scene,
//!     selection.clone(),
//!     vec![Item::new(Fruit::Apple, label), Item::new(Fruit::Orange, label)],
//!     display,
//!     Config::default(),
//! )?;
//!
//! let _ = scene.append_child(display, combo_box.node());
//!
//! combo_box.open()?;
//! assert!(combo_box.is_open());
//! # Ok::<(), sun_ui_widget::Error>(())
//! ```
mod button;
mod config;
mod item;
mod list_box;

pub(crate) mod popup;

#[cfg(test)]
mod tests;

pub use button::{Activation, AnchorButton};
pub use config::{Config, DisplayResolver, Highlight, Placement};
pub use item::{Item, ItemRegistry, VisibleItems};
pub use list_box::ListBox;
pub use popup::Popup;

use crate::carousel::Carousel;
use crate::core::event::{self, Event};
use crate::core::keyboard::{self, Key, key};
use crate::core::mouse;
use crate::core::time::Instant;
use crate::core::touch;
use crate::core::window;
use crate::core::{
    InputListener, ListenerId, NodeId, Property, ReadOnlyProperty, Rectangle, Scene,
    Subscription, Vector,
};
use crate::{Error, Result};

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// What a combo box reports to its feedback closure, for sounds and
/// announcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// The list opened.
    Opened,

    /// The user picked a value different from the previous one.
    Changed,

    /// The user picked the value that was already selected.
    Unchanged,

    /// The list closed without the user picking anything.
    ClosedWithoutSelection,
}

/// A dropdown selector: an [`AnchorButton`] and the [`Popup`] it opens.
pub struct ComboBox<T> {
    scene: Scene,
    inner: Rc<RefCell<Inner<T>>>,
    carousel: Option<Carousel>,
}

struct Inner<T> {
    registry: ItemRegistry<T>,
    selection: Property<T>,
    button: AnchorButton,
    popup: Box<dyn Popup<T>>,
    list_parent: NodeId,
    config: Config,
    state: State,
    open: Property<bool>,
    enabled: bool,
    subscription: Option<Subscription>,
    listener: Option<ListenerId>,
}

enum State {
    Closed,
    Open(Session),
}

/// The state of an open list.
///
/// The bounds are global and taken right after the last reconciliation.
struct Session {
    dismiss: ListenerId,
    display: NodeId,
    anchor_bounds: Rectangle,
    surface_bounds: Rectangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Close {
    Commit,
    Cancel { focus_anchor: bool },
}

impl<T> Inner<T> {
    fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }
}

impl<T> ComboBox<T>
where
    T: Clone + PartialEq + 'static,
{
    /// Creates a [`ComboBox`] opening a [`ListBox`] under `list_parent`.
    ///
    /// The button is created detached: attach [`ComboBox::node`] wherever it
    /// belongs. Fails if the items are empty or repeat a value, if the
    /// selection matches no item, or if the [`Config`] is invalid.
    pub fn new(
        scene: &Scene,
        selection: Property<T>,
        items: Vec<Item<T>>,
        list_parent: NodeId,
        config: Config,
    ) -> Result<Self> {
        let (registry, selected) = prepare(&selection, items, &config)?;
        let list = ListBox::new(scene, list_parent, &config);

        Ok(Self::build(
            scene,
            selection,
            registry,
            selected,
            Box::new(list),
            list_parent,
            config,
        ))
    }

    /// Creates a [`ComboBox`] opening a paged [`Carousel`] under
    /// `list_parent`.
    pub fn carousel(
        scene: &Scene,
        selection: Property<T>,
        items: Vec<Item<T>>,
        list_parent: NodeId,
        config: Config,
    ) -> Result<Self> {
        let (registry, selected) = prepare(&selection, items, &config)?;
        let carousel = Carousel::new(scene, list_parent, &config);

        let mut combo_box = Self::build(
            scene,
            selection,
            registry,
            selected,
            Box::new(carousel.clone()),
            list_parent,
            config,
        );
        combo_box.carousel = Some(carousel);

        Ok(combo_box)
    }

    fn build(
        scene: &Scene,
        selection: Property<T>,
        registry: ItemRegistry<T>,
        selected: usize,
        popup: Box<dyn Popup<T>>,
        list_parent: NodeId,
        config: Config,
    ) -> Self {
        let button = AnchorButton::new(scene, &registry, selected, &config);
        let popup_node = popup.node();

        let inner = Rc::new(RefCell::new(Inner {
            registry,
            selection: selection.clone(),
            button,
            popup,
            list_parent,
            config,
            state: State::Closed,
            open: Property::new(false),
            enabled: true,
            subscription: None,
            listener: None,
        }));

        let weak = Rc::downgrade(&inner);

        inner.borrow_mut().button.listen(scene, {
            let weak = weak.clone();

            move |scene: &Scene, activation: Activation| {
                if let Some(inner) = weak.upgrade() {
                    press(&inner, scene, activation);
                }
            }
        });

        let subscription = selection.subscribe({
            let weak = weak.clone();
            let scene = scene.clone();

            move |value: &T, _old: &T| {
                if let Some(inner) = weak.upgrade() {
                    show_selection(&inner, &scene, value);
                }
            }
        });

        let listener = scene.add_input_listener(
            popup_node,
            move |scene: &Scene, event: &Event, target: Option<NodeId>| {
                weak.upgrade().map_or(event::Status::Ignored, |inner| {
                    on_popup_event(&inner, scene, event, target)
                })
            },
        );

        {
            let mut inner = inner.borrow_mut();
            inner.subscription = Some(subscription);
            inner.listener = Some(listener);
        }

        Self {
            scene: scene.clone(),
            inner,
            carousel: None,
        }
    }

    /// Returns the node of the [`AnchorButton`].
    pub fn node(&self) -> NodeId {
        self.inner.borrow().button.node()
    }

    /// Returns the root node of the [`Popup`].
    pub fn popup_node(&self) -> NodeId {
        self.inner.borrow().popup.node()
    }

    /// Returns the selection the combo box edits.
    pub fn selection(&self) -> Property<T> {
        self.inner.borrow().selection.clone()
    }

    /// Returns the [`Carousel`] of a combo box built with
    /// [`ComboBox::carousel`].
    pub fn as_carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    /// Scrolls a carousel, without animation, to the page holding `value`.
    ///
    /// Does nothing for a plain list.
    pub fn scroll_to_item(&self, value: &T) -> Result<()> {
        let index = self.inner.borrow().registry.index_of(value)?;

        if let Some(carousel) = &self.carousel {
            carousel.scroll_to_item(&self.scene, index);
        }

        Ok(())
    }

    /// Opens the list without moving the keyboard focus.
    ///
    /// Does nothing if the list is already open or the combo box is
    /// disabled. Fails, changing nothing, if the button and the list do not
    /// resolve to a display.
    pub fn open(&self) -> Result<()> {
        open(&self.inner, &self.scene, Activation::Pointer)
    }

    /// Closes the list without selecting anything.
    pub fn close(&self) {
        let _ = close(&self.inner, &self.scene, Close::Cancel { focus_anchor: false });
    }

    /// Opens the list if it is closed, closes it otherwise.
    pub fn toggle(&self) -> Result<()> {
        if self.is_open() {
            self.close();
            Ok(())
        } else {
            self.open()
        }
    }

    /// Returns true if the list is open.
    pub fn is_open(&self) -> bool {
        self.inner.borrow().is_open()
    }

    /// Returns a property tracking whether the list is open.
    pub fn open_property(&self) -> ReadOnlyProperty<bool> {
        self.inner.borrow().open.read_only()
    }

    /// Returns the highlighted item of the list.
    pub fn highlighted(&self) -> Option<T> {
        let inner = self.inner.borrow();

        inner
            .popup
            .highlighted()
            .and_then(|index| inner.registry.get(index))
            .map(|item| item.value().clone())
    }

    /// Shows or hides the item holding `value`.
    ///
    /// An open list is laid out again right away. Hiding the focused item
    /// moves the focus to its nearest visible neighbour.
    pub fn set_item_visible(&self, value: &T, visible: bool) -> Result<()> {
        let focused_item = {
            let mut inner = self.inner.borrow_mut();

            if !inner.registry.set_visible(value, visible)? {
                return Ok(());
            }

            if !inner.is_open() {
                return Ok(());
            }

            self.scene
                .focused()
                .and_then(|node| inner.popup.item_at(&self.scene, node))
        };

        self.refresh();

        if let Some(index) = focused_item
            && self.scene.focused().is_none()
        {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;

            let visible = inner.popup.visible_items(&inner.registry);

            if let Some(neighbour) = visible
                .next_after(index)
                .or_else(|| visible.previous_before(index))
            {
                let _ = inner.popup.focus_item(&self.scene, neighbour);
            }
        }

        Ok(())
    }

    /// Returns true if the item holding `value` is visible.
    pub fn is_item_visible(&self, value: &T) -> Result<bool> {
        self.inner.borrow().registry.is_visible(value)
    }

    /// Returns the values of the visible items, in order.
    pub fn visible_values(&self) -> Vec<T> {
        let inner = self.inner.borrow();

        inner
            .registry
            .visible_items()
            .iter()
            .filter_map(|index| inner.registry.get(index))
            .map(|item| item.value().clone())
            .collect()
    }

    /// Returns true if the combo box reacts to presses.
    pub fn is_enabled(&self) -> bool {
        self.inner.borrow().enabled
    }

    /// Enables or disables the combo box. Disabling closes the list.
    pub fn set_enabled(&self, enabled: bool) {
        if !enabled {
            self.close();
        }

        let mut inner = self.inner.borrow_mut();
        inner.enabled = enabled;
        inner.button.set_enabled(&self.scene, enabled);
    }

    /// Lays out an open list again, then scales and positions it if either
    /// the list or the button moved.
    pub fn refresh(&self) {
        {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;

            let State::Open(session) = &mut inner.state else {
                return;
            };

            inner.popup.layout(&self.scene, &inner.registry);

            let anchor = inner.button.node();
            let surface = inner.popup.node();

            if self.scene.global_bounds(anchor) != session.anchor_bounds
                || self.scene.global_bounds(surface) != session.surface_bounds
            {
                reconcile(&self.scene, anchor, surface, inner.config.placement);

                session.anchor_bounds = self.scene.global_bounds(anchor);
                session.surface_bounds = self.scene.global_bounds(surface);

                log::debug!("ComboBox: list moved to {:?}", session.surface_bounds);
            }
        }

        publish(&self.inner);
    }

    /// Advances the paging animation of a carousel.
    pub fn tick(&self, now: Instant) {
        self.inner.borrow_mut().popup.tick(&self.scene, now);
    }

    /// Reacts to a window event: losing focus closes the list and redraws
    /// advance animations.
    pub fn handle_window_event(&self, event: &window::Event) {
        match event {
            window::Event::Unfocused => self.close(),
            window::Event::RedrawRequested(now) => self.tick(*now),
            _ => {}
        }
    }

    /// Closes the list and removes every node, listener and subscription
    /// the combo box created.
    pub fn dispose(self) {
        self.close();

        let mut inner = self.inner.borrow_mut();

        if let Some(subscription) = inner.subscription.take() {
            let _ = inner.selection.unsubscribe(subscription);
        }

        if let Some(listener) = inner.listener.take() {
            let _ = self.scene.remove_input_listener(listener);
        }

        inner.popup.dispose(&self.scene);
        inner.button.dispose(&self.scene);
    }
}

impl<T> fmt::Debug for ComboBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();

        f.debug_struct("ComboBox")
            .field("button", &inner.button.node())
            .field("popup", &inner.popup.node())
            .field("open", &inner.is_open())
            .field("enabled", &inner.enabled)
            .field("carousel", &self.carousel.is_some())
            .finish()
    }
}

fn prepare<T>(
    selection: &Property<T>,
    items: Vec<Item<T>>,
    config: &Config,
) -> Result<(ItemRegistry<T>, usize)>
where
    T: Clone + PartialEq + 'static,
{
    config.validate()?;

    let registry = ItemRegistry::new(items)?;
    let selected = selection
        .with(|value| registry.index_of(value))
        .map_err(|_| Error::StaleSelection)?;

    Ok((registry, selected))
}

fn emit(on_feedback: Option<&Rc<dyn Fn(Feedback)>>, feedback: Feedback) {
    log::debug!("ComboBox: {feedback:?}");

    if let Some(on_feedback) = on_feedback {
        on_feedback(feedback);
    }
}

/// Runs the notifications the list held back while `this` was borrowed.
fn publish<T>(this: &RefCell<Inner<T>>) {
    let publish = this.borrow().popup.publish();

    if let Some(publish) = publish {
        publish();
    }
}

fn show_selection<T>(inner: &RefCell<Inner<T>>, scene: &Scene, value: &T)
where
    T: PartialEq,
{
    let mut guard = inner.borrow_mut();
    let inner = &mut *guard;

    match inner.registry.index_of(value) {
        Ok(index) => inner.button.show(scene, index),
        Err(error) => {
            log::error!("ComboBox: the selection matches no item ({error})");
            debug_assert!(false, "ComboBox: the selection matches no item");
        }
    }
}

fn press<T>(this: &Rc<RefCell<Inner<T>>>, scene: &Scene, activation: Activation)
where
    T: Clone + PartialEq + 'static,
{
    let (is_open, close_on_press) = {
        let inner = this.borrow();

        (inner.is_open(), inner.config.close_on_anchor_press)
    };

    if !is_open {
        if let Err(error) = open(this, scene, activation) {
            log::warn!("ComboBox: cannot open: {error}");
        }
    } else if close_on_press {
        let _ = close(this, scene, Close::Cancel { focus_anchor: false });
    }
}

fn open<T>(this: &Rc<RefCell<Inner<T>>>, scene: &Scene, activation: Activation) -> Result<()>
where
    T: Clone + PartialEq + 'static,
{
    let (open, on_feedback) = {
        let mut guard = this.borrow_mut();
        let inner = &mut *guard;

        if inner.is_open() {
            return Ok(());
        }

        if !inner.enabled {
            log::debug!("ComboBox: disabled, not opening");
            return Ok(());
        }

        let anchor = inner.button.node();
        let surface = inner.popup.node();

        let Some(display) = inner.config.resolver.resolve(scene, anchor, inner.list_parent) else {
            log::error!("ComboBox: {}", Error::MissingDisplay);
            return Err(Error::MissingDisplay);
        };

        let selected = match inner.selection.with(|value| inner.registry.index_of(value)) {
            Ok(selected) => selected,
            Err(_) => {
                log::error!("ComboBox: {}", Error::StaleSelection);
                return Err(Error::StaleSelection);
            }
        };

        inner.popup.layout(scene, &inner.registry);
        inner.popup.will_open(scene, &inner.registry, selected);

        reconcile(scene, anchor, surface, inner.config.placement);
        scene.move_to_front(surface);

        let dismiss = scene.add_input_listener(display, dismiss_listener(Rc::downgrade(this)));

        inner.state = State::Open(Session {
            dismiss,
            display,
            anchor_bounds: scene.global_bounds(anchor),
            surface_bounds: scene.global_bounds(surface),
        });

        scene.set_visible(surface, true);

        // A hidden selection starts the list on its first entry.
        let visible = inner.popup.visible_items(&inner.registry);
        let initial = if visible.contains(selected) {
            Some(selected)
        } else {
            visible.first()
        };

        inner.popup.highlight(scene, initial);

        if activation == Activation::Keyboard
            && let Some(initial) = initial
            && !inner.popup.focus_item(scene, initial)
        {
            log::warn!("ComboBox: cannot focus item {initial}");
        }

        log::debug!("ComboBox: opened on {display:?}");

        (inner.open.clone(), inner.config.on_feedback.clone())
    };

    publish(this);
    open.set(true);
    emit(on_feedback.as_ref(), Feedback::Opened);

    Ok(())
}

fn close<T>(this: &RefCell<Inner<T>>, scene: &Scene, how: Close) -> bool {
    let (open, on_feedback) = {
        let mut guard = this.borrow_mut();
        let inner = &mut *guard;

        let State::Open(session) = std::mem::replace(&mut inner.state, State::Closed) else {
            return false;
        };

        let _ = scene.remove_input_listener(session.dismiss);

        let anchor = inner.button.node();
        let surface = inner.popup.node();
        let focus_inside = scene
            .focused()
            .is_some_and(|focused| scene.contains(surface, focused));

        inner.popup.highlight(scene, None);
        scene.set_visible(surface, false);

        if focus_inside || how == (Close::Cancel { focus_anchor: true }) {
            let _ = scene.focus(anchor);
        }

        log::debug!("ComboBox: closed on {:?} ({how:?})", session.display);

        (inner.open.clone(), inner.config.on_feedback.clone())
    };

    open.set(false);

    if how != Close::Commit {
        emit(on_feedback.as_ref(), Feedback::ClosedWithoutSelection);
    }

    true
}

/// Selects the item at `index` and closes the list.
fn commit<T>(this: &Rc<RefCell<Inner<T>>>, scene: &Scene, index: usize) -> event::Status
where
    T: Clone + PartialEq + 'static,
{
    let (selection, value, on_selected, anchor, on_feedback) = {
        let inner = this.borrow();

        if !inner.is_open() {
            return event::Status::Ignored;
        }

        let Some(item) = inner.registry.get(index) else {
            return event::Status::Ignored;
        };

        (
            inner.selection.clone(),
            item.value().clone(),
            item.selection_hook(),
            inner.button.node(),
            inner.config.on_feedback.clone(),
        )
    };

    let previous = selection.get();

    let _ = scene.focus(anchor);
    selection.set(value.clone());
    let _ = close(this, scene, Close::Commit);

    if value == previous {
        emit(on_feedback.as_ref(), Feedback::Unchanged);
    } else {
        if let Some(on_selected) = on_selected {
            on_selected(&value);
        }

        emit(on_feedback.as_ref(), Feedback::Changed);
    }

    event::Status::Captured
}

fn on_popup_event<T>(
    this: &Rc<RefCell<Inner<T>>>,
    scene: &Scene,
    event: &Event,
    target: Option<NodeId>,
) -> event::Status
where
    T: Clone + PartialEq + 'static,
{
    match event {
        Event::Mouse(mouse::Event::CursorMoved { .. }) => {
            let mut guard = this.borrow_mut();
            let inner = &mut *guard;

            if inner.is_open()
                && let Some(index) = target.and_then(|target| inner.popup.item_at(scene, target))
            {
                inner.popup.highlight(scene, Some(index));
            }

            event::Status::Ignored
        }
        Event::Mouse(mouse::Event::ButtonPressed {
            button: mouse::Button::Left,
            ..
        })
        | Event::Touch(touch::Event::FingerPressed { .. }) => {
            let index = {
                let inner = this.borrow();

                if !inner.is_open() {
                    return event::Status::Ignored;
                }

                // Cells of a page sliding away stay pickable until they are
                // hidden.
                let visible = inner.registry.visible_items();

                target
                    .filter(|target| scene.is_rendered(*target))
                    .and_then(|target| inner.popup.item_at(scene, target))
                    .filter(|index| visible.contains(*index))
            };

            match index {
                Some(index) => commit(this, scene, index),
                None => event::Status::Ignored,
            }
        }
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => on_key(this, scene, key),
        _ => event::Status::Ignored,
    }
}

enum Action {
    Cancel,
    Commit(usize),
    Paged,
}

fn on_key<T>(this: &Rc<RefCell<Inner<T>>>, scene: &Scene, key: &Key) -> event::Status
where
    T: Clone + PartialEq + 'static,
{
    let Key::Named(named) = key else {
        return event::Status::Ignored;
    };

    let action = {
        let mut guard = this.borrow_mut();
        let inner = &mut *guard;

        if !inner.is_open() {
            return event::Status::Ignored;
        }

        let visible = inner.popup.visible_items(&inner.registry);
        let current = scene
            .focused()
            .and_then(|node| inner.popup.item_at(scene, node));

        match named {
            key::Named::Escape | key::Named::Tab => Action::Cancel,
            key::Named::Enter | key::Named::Space => {
                match current.filter(|index| visible.contains(*index)) {
                    Some(index) => Action::Commit(index),
                    None => return event::Status::Ignored,
                }
            }
            key::Named::PageDown | key::Named::PageUp => {
                if !inner
                    .popup
                    .turn_page(scene, *named == key::Named::PageDown)
                {
                    return event::Status::Ignored;
                }

                let page = inner.popup.visible_items(&inner.registry);

                if let Some(first) = page.first() {
                    let _ = inner.popup.focus_item(scene, first);
                }

                Action::Paged
            }
            _ => {
                let destination = match named {
                    key::Named::ArrowDown => match current {
                        Some(index) => visible.next_after(index),
                        None => visible.first(),
                    },
                    key::Named::ArrowUp => match current {
                        Some(index) => visible.previous_before(index),
                        None => visible.last(),
                    },
                    key::Named::Home => visible.first(),
                    key::Named::End => visible.last(),
                    _ => return event::Status::Ignored,
                };

                // No wraparound: past either end the focus stays put.
                if let Some(index) = destination {
                    let _ = inner.popup.focus_item(scene, index);
                }

                return event::Status::Captured;
            }
        }
    };

    match action {
        Action::Cancel => {
            let _ = close(this, scene, Close::Cancel { focus_anchor: true });

            event::Status::Captured
        }
        Action::Commit(index) => commit(this, scene, index),
        Action::Paged => {
            publish(this);

            event::Status::Captured
        }
    }
}

fn dismiss_listener<T>(this: Weak<RefCell<Inner<T>>>) -> impl InputListener + 'static
where
    T: 'static,
{
    move |scene: &Scene, event: &Event, target: Option<NodeId>| {
        let Some(this) = this.upgrade() else {
            return event::Status::Ignored;
        };

        if event.is_press() {
            let (anchor, surface) = {
                let inner = this.borrow();

                (inner.button.node(), inner.popup.node())
            };

            let inside = target.is_some_and(|target| {
                scene.contains(anchor, target) || scene.contains(surface, target)
            });

            if !inside {
                log::debug!("ComboBox: press outside, closing");
                let _ = close(&this, scene, Close::Cancel { focus_anchor: false });
            }

            return event::Status::Ignored;
        }

        if let Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(key::Named::Escape),
            ..
        }) = event
            && close(&this, scene, Close::Cancel { focus_anchor: true })
        {
            return event::Status::Captured;
        }

        event::Status::Ignored
    }
}

/// Scales the surface so it renders at the scale of the anchor, then places
/// it against the anchor's bottom edge, or its top edge when placed above.
fn reconcile(scene: &Scene, anchor: NodeId, surface: NodeId, placement: Placement) {
    let anchor_ratio = ratio(scene.global_bounds(anchor), scene.local_bounds(anchor));
    let surface_ratio = ratio(scene.global_bounds(surface), scene.local_bounds(surface));

    scene.set_scale(surface, scene.scale(surface) * anchor_ratio / surface_ratio);

    let Some(parent) = scene.parent(surface) else {
        log::warn!("ComboBox: the list has no parent to be positioned in");
        return;
    };

    let anchor_bounds = scene.local_bounds(anchor);
    let corner = match placement {
        Placement::Below => anchor_bounds.bottom_left(),
        Placement::Above => anchor_bounds.position(),
    };
    let target = scene.global_to_local(parent, scene.local_to_global(anchor, corner));

    let bounds = scene.local_bounds(surface);
    let origin = match placement {
        Placement::Below => bounds.position(),
        Placement::Above => bounds.bottom_left(),
    };
    let scale = scene.scale(surface);

    scene.set_translation(
        surface,
        Vector::new(target.x - origin.x * scale, target.y - origin.y * scale),
    );
}

fn ratio(global: Rectangle, local: Rectangle) -> f32 {
    if global.width == 0.0 || local.width == 0.0 {
        1.0
    } else {
        global.width / local.width
    }
}
