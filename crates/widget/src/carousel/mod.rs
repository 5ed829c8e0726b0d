//! Carousels show the items of a combo box a page at a time.
//!
//! A [`Carousel`] is a [`Popup`] grouping the visible items into pages of
//! [`Config::items_per_page`](crate::combo_box::Config::items_per_page)
//! entries, with a previous and a next button around a window showing the
//! current page. Changing pages slides the content linearly; the animation is
//! driven by [`Carousel::tick`] and never holds up the combo box.
mod page_indicator;

pub use page_indicator::PageIndicator;

use crate::combo_box::{Config, ItemRegistry, Popup, VisibleItems};
use crate::combo_box::popup::{self, Cell};
use crate::core::alignment::Horizontal;
use crate::core::event::{self, Event};
use crate::core::keyboard::{self, Key, key};
use crate::core::scene::Node;
use crate::core::time::{Duration, Instant};
use crate::core::{
    InputListener, ListenerId, NodeId, Point, Property, ReadOnlyProperty, Rectangle, Scene, Size,
    Vector,
};

use rustc_hash::FxHashMap;

use std::cell::RefCell;
use std::fmt;
use std::ops::RangeInclusive;
use std::rc::{Rc, Weak};

/// A paged list of items with previous and next buttons.
///
/// Cloning a [`Carousel`] clones the handle.
#[derive(Clone)]
pub struct Carousel {
    state: Rc<RefCell<State>>,
    page_number: Property<usize>,
    number_of_pages: Property<usize>,
}

struct State {
    node: NodeId,
    window: NodeId,
    content: NodeId,
    previous: NodeId,
    next: NodeId,
    cells: Vec<Option<Cell>>,
    lookup: FxHashMap<NodeId, usize>,
    visible: VisibleItems,
    margin: Vector,
    align: Horizontal,
    items_per_page: usize,
    transition: Duration,
    button_height: f32,
    cell_size: Size,
    memo: Option<(u64, Vec<Rectangle>)>,
    page: usize,
    offset: f32,
    animation: Option<Animation>,
    highlighted: Option<usize>,
    listeners: Vec<ListenerId>,
}

#[derive(Debug, Clone)]
struct Animation {
    from: f32,
    to: f32,
    start: Option<Instant>,
    pages: RangeInclusive<usize>,
}

impl State {
    fn page_count(&self) -> usize {
        self.visible.len().div_ceil(self.items_per_page).max(1)
    }

    fn page_height(&self) -> f32 {
        self.cell_size.height * self.items_per_page as f32
    }

    fn page_of(&self, index: usize) -> Option<usize> {
        self.visible
            .position(index)
            .map(|position| position / self.items_per_page)
    }

    fn current_page(&self) -> VisibleItems {
        let start = self.page * self.items_per_page;

        self.visible.slice(start..start + self.items_per_page)
    }

    /// Shows the cells of the pages on screen and scrolls the content.
    ///
    /// With `keep_focus`, a focused cell hidden by the change hands the focus
    /// to the first item of the current page.
    fn apply(&mut self, scene: &Scene, keep_focus: bool) {
        let had_focus = scene
            .focused()
            .is_some_and(|focused| scene.contains(self.node, focused));

        let pages = self
            .animation
            .as_ref()
            .map_or(self.page..=self.page, |animation| animation.pages.clone());

        for (index, cell) in self.cells.iter().enumerate() {
            let Some(cell) = cell else {
                continue;
            };

            let shown = self.page_of(index).is_some_and(|page| pages.contains(&page));

            scene.set_visible(cell.node, shown);
        }

        scene.set_translation(self.content, Vector::new(0.0, -self.offset));

        if keep_focus
            && had_focus
            && scene.focused().is_none()
            && let Some(first) = self.current_page().first()
        {
            let _ = self.focus(scene, first);
        }
    }

    fn focus(&mut self, scene: &Scene, index: usize) -> bool {
        let Some(cell) = self.cells.get(index).copied().flatten() else {
            return false;
        };

        if !scene.focus(cell.node) {
            return false;
        }

        self.highlight(scene, Some(index));

        true
    }

    fn highlight(&mut self, scene: &Scene, index: Option<usize>) {
        if self.highlighted == index {
            return;
        }

        for (index, highlighted) in [(self.highlighted, false), (index, true)] {
            if let Some(cell) = index.and_then(|index| self.cells.get(index).copied().flatten()) {
                cell.set_highlighted(scene, highlighted);
            }
        }

        self.highlighted = index;
    }

    fn is_previous_enabled(&self) -> bool {
        self.page > 0
    }

    fn is_next_enabled(&self) -> bool {
        self.page + 1 < self.page_count()
    }
}

impl Carousel {
    /// Creates a hidden [`Carousel`] under `parent`.
    pub fn new(scene: &Scene, parent: NodeId, config: &Config) -> Self {
        let node = scene.add_node(Some(parent), Node::new().visible(false).name("carousel"));
        let previous = scene.add_node(
            Some(node),
            Node::new().focusable(true).name("previous page"),
        );
        let window = scene.add_node(Some(node), Node::new().name("page window"));
        let content = scene.add_node(Some(window), Node::new().name("pages"));
        let next = scene.add_node(Some(node), Node::new().focusable(true).name("next page"));

        let carousel = Self {
            state: Rc::new(RefCell::new(State {
                node,
                window,
                content,
                previous,
                next,
                cells: Vec::new(),
                lookup: FxHashMap::default(),
                visible: VisibleItems::new(Vec::new(), 0),
                margin: Vector::new(config.highlight.x_margin, config.highlight.y_margin),
                align: config.align,
                items_per_page: config.items_per_page.max(1),
                transition: config.page_transition,
                button_height: config.page_button_height,
                cell_size: Size::ZERO,
                memo: None,
                page: 0,
                offset: 0.0,
                animation: None,
                highlighted: None,
                listeners: Vec::new(),
            })),
            page_number: Property::new(0),
            number_of_pages: Property::new(1),
        };

        let listeners = vec![
            scene.add_input_listener(previous, carousel.page_button(previous, false)),
            scene.add_input_listener(next, carousel.page_button(next, true)),
        ];
        carousel.state.borrow_mut().listeners = listeners;

        carousel
    }

    /// Pages on a press, or on `Enter` and `Space` while `button` is
    /// focused.
    fn page_button(&self, button: NodeId, forward: bool) -> impl InputListener + 'static {
        let state: Weak<RefCell<State>> = Rc::downgrade(&self.state);
        let page_number = self.page_number.clone();
        let number_of_pages = self.number_of_pages.clone();

        move |scene: &Scene, event: &Event, _target: Option<NodeId>| {
            let activated = event.is_press()
                || matches!(
                    event,
                    Event::Keyboard(keyboard::Event::KeyPressed {
                        key: Key::Named(key::Named::Enter | key::Named::Space),
                        ..
                    }) if scene.focused() == Some(button)
                );

            if !activated {
                return event::Status::Ignored;
            }

            let Some(state) = state.upgrade() else {
                return event::Status::Ignored;
            };

            let carousel = Carousel {
                state,
                page_number: page_number.clone(),
                number_of_pages: number_of_pages.clone(),
            };

            if forward {
                carousel.next_page(scene);
            } else {
                carousel.previous_page(scene);
            }

            event::Status::Captured
        }
    }

    /// Returns the root node of the [`Carousel`].
    pub fn node(&self) -> NodeId {
        self.state.borrow().node
    }

    /// Returns the node of the previous page button.
    pub fn previous_button(&self) -> NodeId {
        self.state.borrow().previous
    }

    /// Returns the node of the next page button.
    pub fn next_button(&self) -> NodeId {
        self.state.borrow().next
    }

    /// Returns the current page, starting at zero.
    pub fn page_number(&self) -> ReadOnlyProperty<usize> {
        self.page_number.read_only()
    }

    /// Returns the number of pages. There is always at least one.
    pub fn number_of_pages(&self) -> ReadOnlyProperty<usize> {
        self.number_of_pages.read_only()
    }

    /// Returns true if there is a page before the current one.
    pub fn is_previous_enabled(&self) -> bool {
        self.state.borrow().is_previous_enabled()
    }

    /// Returns true if there is a page after the current one.
    pub fn is_next_enabled(&self) -> bool {
        self.state.borrow().is_next_enabled()
    }

    /// Returns the current scroll offset of the pages.
    pub fn offset(&self) -> f32 {
        self.state.borrow().offset
    }

    /// Returns true while the pages slide.
    pub fn is_animating(&self) -> bool {
        self.state.borrow().animation.is_some()
    }

    /// Creates a [`PageIndicator`] under `parent` mirroring this
    /// [`Carousel`].
    pub fn page_indicator(&self, scene: &Scene, parent: NodeId) -> PageIndicator {
        PageIndicator::new(scene, parent, self.page_number(), self.number_of_pages())
    }

    /// Slides to the next page, if any.
    pub fn next_page(&self, scene: &Scene) {
        let page = self.state.borrow().page;

        self.set_page(scene, page + 1);
    }

    /// Slides to the previous page, if any.
    pub fn previous_page(&self, scene: &Scene) {
        let page = self.state.borrow().page;

        if let Some(page) = page.checked_sub(1) {
            self.set_page(scene, page);
        }
    }

    /// Slides to the given page, clamped to the existing ones.
    pub fn set_page(&self, scene: &Scene, page: usize) {
        let _ = self.go_to(scene, page, true);
        self.sync();
    }

    /// Jumps, without animation, to the page holding the item at `index`.
    pub fn scroll_to_item(&self, scene: &Scene, index: usize) {
        let page = self.state.borrow().page_of(index);

        match page {
            Some(page) => {
                let _ = self.go_to(scene, page, false);
                self.sync();
            }
            None => log::warn!("Carousel: item {index} is not visible"),
        }
    }

    /// Advances the page animation.
    pub fn tick(&self, scene: &Scene, now: Instant) {
        let mut state = self.state.borrow_mut();

        let Some(animation) = state.animation.as_mut() else {
            return;
        };

        let start = *animation.start.get_or_insert(now);
        let (from, to) = (animation.from, animation.to);

        let progress = if state.transition.is_zero() {
            1.0
        } else {
            (now.saturating_duration_since(start).as_secs_f32() / state.transition.as_secs_f32())
                .min(1.0)
        };

        state.offset = from + (to - from) * progress;

        if progress >= 1.0 {
            state.animation = None;
        }

        state.apply(scene, true);
    }

    /// Moves to `page` without publishing it, returning whether anything
    /// changed.
    fn go_to(&self, scene: &Scene, page: usize, animate: bool) -> bool {
        let mut state = self.state.borrow_mut();

        let page = page.min(state.page_count() - 1);
        let to = page as f32 * state.page_height();

        let settled = state.animation.is_none() && state.offset == to;

        if page == state.page && (settled || animate) {
            return false;
        }

        log::debug!("Carousel: page {} -> {page}", state.page);

        let previous = state.page;
        state.page = page;

        if animate && !state.transition.is_zero() {
            state.animation = Some(Animation {
                from: state.offset,
                to,
                start: None,
                pages: previous.min(page)..=previous.max(page),
            });
        } else {
            state.animation = None;
            state.offset = to;
        }

        state.apply(scene, true);

        true
    }

    fn layout_items<T>(&self, scene: &Scene, registry: &ItemRegistry<T>) {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;

        let visible = registry.visible_items();

        if state.cells.len() < registry.len() {
            state.cells.resize(registry.len(), None);
        }

        for index in visible.iter() {
            if state.cells[index].is_some() {
                continue;
            }

            if let Some(item) = registry.get(index) {
                let cell = Cell::new(scene, state.content, item);
                let _ = state.lookup.insert(cell.node, index);
                state.cells[index] = Some(cell);
            }
        }

        let extents: Vec<Rectangle> = visible
            .iter()
            .filter_map(|index| state.cells[index].map(|cell| cell.extent(scene)))
            .collect();

        let memo = (visible.generation(), extents);

        if state.memo.as_ref() == Some(&memo) {
            return;
        }

        let cell_size = popup::uniform_size(memo.1.iter().copied()).expand(state.margin);

        for (position, index) in visible.iter().enumerate() {
            if let Some(cell) = state.cells[index] {
                cell.arrange(scene, cell_size, state.margin, state.align);
                scene.set_translation(
                    cell.node,
                    Vector::new(0.0, position as f32 * cell_size.height),
                );
            }
        }

        state.visible = visible;
        state.cell_size = cell_size;
        state.memo = Some(memo);

        let page_height = state.page_height();
        let width = cell_size.width;
        let button_height = state.button_height;

        scene.set_content(
            state.previous,
            Rectangle::with_size(Size::new(width, button_height)),
        );
        scene.set_translation(state.window, Vector::new(0.0, button_height));
        scene.set_content(
            state.window,
            Rectangle::with_size(Size::new(width, page_height)),
        );
        scene.set_translation(
            state.next,
            Vector::new(0.0, button_height + page_height),
        );
        scene.set_content(
            state.next,
            Rectangle::with_size(Size::new(width, button_height)),
        );
        scene.set_content(
            state.node,
            Rectangle::new(
                Point::ORIGIN,
                Size::new(width, button_height * 2.0 + page_height),
            ),
        );

        state.page = state.page.min(state.page_count() - 1);
        state.animation = None;
        state.offset = state.page as f32 * page_height;

        log::debug!(
            "Carousel: {} items on {} pages",
            state.visible.len(),
            state.page_count()
        );

        state.apply(scene, false);
    }

    /// Publishes the page and the page count.
    fn sync(&self) {
        let (page, pages) = {
            let state = self.state.borrow();

            (state.page, state.page_count())
        };

        self.number_of_pages.set(pages);
        self.page_number.set(page);
    }

    fn cell(&self, index: usize) -> Option<Cell> {
        self.state.borrow().cells.get(index).copied().flatten()
    }
}

impl<T> Popup<T> for Carousel {
    fn node(&self) -> NodeId {
        self.state.borrow().node
    }

    fn layout(&mut self, scene: &Scene, registry: &ItemRegistry<T>) {
        self.layout_items(scene, registry);
    }

    fn visible_items(&self, _registry: &ItemRegistry<T>) -> VisibleItems {
        self.state.borrow().current_page()
    }

    fn item_node(&self, index: usize) -> Option<NodeId> {
        self.cell(index).map(|cell| cell.node)
    }

    fn item_at(&self, scene: &Scene, node: NodeId) -> Option<usize> {
        let state = self.state.borrow();

        popup::find_cell(scene, state.node, &state.lookup, node)
    }

    fn focus_item(&mut self, scene: &Scene, index: usize) -> bool {
        self.state.borrow_mut().focus(scene, index)
    }

    fn highlight(&mut self, scene: &Scene, index: Option<usize>) {
        self.state.borrow_mut().highlight(scene, index);
    }

    fn highlighted(&self) -> Option<usize> {
        self.state.borrow().highlighted
    }

    fn will_open(&mut self, scene: &Scene, _registry: &ItemRegistry<T>, selected: usize) {
        let page = self.state.borrow().page_of(selected);

        if let Some(page) = page {
            let _ = self.go_to(scene, page, false);
        }
    }

    fn tick(&mut self, scene: &Scene, now: Instant) {
        Carousel::tick(self, scene, now);
    }

    fn turn_page(&mut self, scene: &Scene, forward: bool) -> bool {
        let page = self.state.borrow().page;

        match page.checked_add_signed(if forward { 1 } else { -1 }) {
            Some(page) => self.go_to(scene, page, true),
            None => false,
        }
    }

    fn publish(&self) -> Option<Box<dyn FnOnce()>> {
        let carousel = self.clone();

        Some(Box::new(move || carousel.sync()))
    }

    fn dispose(&mut self, scene: &Scene) {
        let mut state = self.state.borrow_mut();

        for listener in state.listeners.drain(..) {
            let _ = scene.remove_input_listener(listener);
        }

        scene.remove(state.node);

        state.cells.clear();
        state.lookup.clear();
        state.memo = None;
        state.animation = None;
        state.highlighted = None;
    }
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();

        f.debug_struct("Carousel")
            .field("node", &state.node)
            .field("page", &state.page)
            .field("pages", &state.page_count())
            .field("offset", &state.offset)
            .field("animating", &state.animation.is_some())
            .finish()
    }
}
