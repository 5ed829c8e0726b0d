use super::*;
use crate::core::scene::Node;
use crate::core::{Point, Size};

use std::cell::Cell as Counter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Circle,
    Square,
    Triangle,
    Hexagon,
}

struct Harness {
    scene: Scene,
    display: NodeId,
    anchor_parent: NodeId,
    list_parent: NodeId,
    selection: Property<Shape>,
    combo_box: ComboBox<Shape>,
    feedback: Rc<RefCell<Vec<Feedback>>>,
}

fn label(scene: &Scene) -> NodeId {
    scene.add_node(None, Node::new().size(Size::new(20.0, 10.0)))
}

fn items(shapes: &[Shape]) -> Vec<Item<Shape>> {
    shapes.iter().map(|shape| Item::new(*shape, label)).collect()
}

fn harness(items: Vec<Item<Shape>>, config: Config) -> Harness {
    build(items, config, false)
}

fn build(items: Vec<Item<Shape>>, config: Config, carousel: bool) -> Harness {
    let scene = Scene::new();
    let display = scene.add_display();
    let anchor_parent = scene.add_node(
        Some(display),
        Node::new().translation(Vector::new(20.0, 30.0)),
    );
    let list_parent = scene.add_node(Some(display), Node::new());
    let selection = Property::new(Shape::Circle);
    let feedback = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&feedback);
    let config = config.on_feedback(move |feedback| sink.borrow_mut().push(feedback));

    let combo_box = if carousel {
        ComboBox::carousel(&scene, selection.clone(), items, list_parent, config)
    } else {
        ComboBox::new(&scene, selection.clone(), items, list_parent, config)
    }
    .expect("valid combo box");

    assert!(scene.append_child(anchor_parent, combo_box.node()));

    Harness {
        scene,
        display,
        anchor_parent,
        list_parent,
        selection,
        combo_box,
        feedback,
    }
}

fn three_shapes() -> Vec<Item<Shape>> {
    items(&[Shape::Circle, Shape::Square, Shape::Triangle])
}

fn click() -> Event {
    Event::Mouse(mouse::Event::ButtonPressed {
        button: mouse::Button::Left,
        modifiers: keyboard::Modifiers::empty(),
    })
}

impl Harness {
    fn click(&self, target: Option<NodeId>) -> event::Status {
        self.scene.dispatch(self.display, &click(), target)
    }

    fn key(&self, key: key::Named) -> event::Status {
        self.scene.dispatch(
            self.display,
            &Event::Keyboard(keyboard::Event::key_pressed(key)),
            None,
        )
    }

    fn open_with_keyboard(&self) {
        assert!(self.scene.focus(self.combo_box.node()));
        assert_eq!(self.key(key::Named::Enter), event::Status::Captured);
        assert!(self.combo_box.is_open());
    }

    fn cell(&self, shape: Shape) -> NodeId {
        let inner = self.combo_box.inner.borrow();
        let index = inner.registry.index_of(&shape).expect("registered shape");

        inner.popup.item_node(index).expect("cell created")
    }

    fn focused_shape(&self) -> Option<Shape> {
        let inner = self.combo_box.inner.borrow();
        let node = self.scene.focused()?;
        let index = inner.popup.item_at(&self.scene, node)?;

        inner.registry.get(index).map(|item| *item.value())
    }

    fn dismiss_listeners(&self) -> usize {
        self.scene.input_listener_count(self.display)
    }

    fn feedback(&self) -> Vec<Feedback> {
        self.feedback.borrow().clone()
    }
}

#[test]
fn test_at_most_one_dismiss_listener() {
    let harness = harness(three_shapes(), Config::default());
    let combo_box = &harness.combo_box;

    let check = |expected_open: bool| {
        assert_eq!(combo_box.is_open(), expected_open);
        assert_eq!(harness.dismiss_listeners(), usize::from(expected_open));
    };

    check(false);

    combo_box.open().expect("open");
    check(true);
    combo_box.open().expect("open");
    check(true);

    combo_box.close();
    check(false);
    combo_box.close();
    check(false);

    combo_box.toggle().expect("toggle");
    check(true);

    let _ = harness.click(Some(combo_box.node()));
    check(false);
    let _ = harness.click(Some(combo_box.node()));
    check(true);

    let _ = harness.click(None);
    check(false);

    harness.open_with_keyboard();
    check(true);
    let _ = harness.key(key::Named::Escape);
    check(false);
}

#[test]
fn test_arrow_keys_stop_at_the_ends() {
    let harness = harness(three_shapes(), Config::default());

    harness.open_with_keyboard();
    assert_eq!(harness.focused_shape(), Some(Shape::Circle));

    assert_eq!(harness.key(key::Named::ArrowUp), event::Status::Captured);
    assert_eq!(harness.focused_shape(), Some(Shape::Circle));

    let _ = harness.key(key::Named::End);
    assert_eq!(harness.focused_shape(), Some(Shape::Triangle));

    assert_eq!(harness.key(key::Named::ArrowDown), event::Status::Captured);
    assert_eq!(harness.focused_shape(), Some(Shape::Triangle));

    let _ = harness.key(key::Named::ArrowUp);
    assert_eq!(harness.focused_shape(), Some(Shape::Square));
    assert_eq!(harness.combo_box.highlighted(), Some(Shape::Square));
}

#[test]
fn test_traversal_skips_hidden_items() {
    let mut items = three_shapes();
    items[1] = Item::new(Shape::Square, label).visible(false);

    let harness = harness(items, Config::default());

    harness.open_with_keyboard();

    let _ = harness.key(key::Named::Home);
    assert_eq!(harness.focused_shape(), Some(Shape::Circle));

    let _ = harness.key(key::Named::ArrowDown);
    assert_eq!(harness.focused_shape(), Some(Shape::Triangle));
}

#[test]
fn test_commit_happens_in_order() {
    let harness = harness(three_shapes(), Config::default());
    let events = Rc::new(RefCell::new(Vec::new()));

    let open = harness.combo_box.open_property();
    let anchor = harness.combo_box.node();

    let _ = harness.selection.subscribe({
        let events = Rc::clone(&events);
        let scene = harness.scene.clone();
        let open = open.clone();

        move |_: &Shape, _: &Shape| {
            assert_eq!(scene.focused(), Some(anchor));
            assert!(open.get());

            events.borrow_mut().push("selection");
        }
    });

    let _ = open.subscribe({
        let events = Rc::clone(&events);

        move |open: &bool, _: &bool| {
            if !open {
                events.borrow_mut().push("closed");
            }
        }
    });

    harness.open_with_keyboard();
    let _ = harness.key(key::Named::ArrowDown);

    assert_eq!(harness.key(key::Named::Enter), event::Status::Captured);

    assert_eq!(*events.borrow(), vec!["selection", "closed"]);
    assert_eq!(harness.selection.get(), Shape::Square);
    assert_eq!(
        harness.feedback(),
        vec![Feedback::Opened, Feedback::Changed]
    );

    harness.open_with_keyboard();
    let _ = harness.key(key::Named::Space);

    assert_eq!(harness.selection.get(), Shape::Square);
    assert_eq!(harness.feedback().last(), Some(&Feedback::Unchanged));
    assert_eq!(
        harness
            .feedback()
            .iter()
            .filter(|feedback| **feedback == Feedback::Changed)
            .count(),
        1
    );
}

#[test]
fn test_pointer_commit_runs_the_item_hook() {
    let selected = Rc::new(Counter::new(0));

    let mut items = three_shapes();
    items[2] = Item::new(Shape::Triangle, label).on_selected({
        let selected = Rc::clone(&selected);

        move |_| selected.set(selected.get() + 1)
    });

    let harness = harness(items, Config::default());

    let _ = harness.click(Some(harness.combo_box.node()));
    assert!(harness.combo_box.is_open());

    let content = harness.scene.children(harness.cell(Shape::Triangle))[1];
    assert_eq!(harness.click(Some(content)), event::Status::Captured);

    assert!(!harness.combo_box.is_open());
    assert_eq!(harness.selection.get(), Shape::Triangle);
    assert_eq!(selected.get(), 1);
    assert_eq!(
        harness.combo_box.inner.borrow().button.shown(),
        Some(2)
    );
}

#[test]
fn test_programmatic_selection_skips_the_hook() {
    let selected = Rc::new(Counter::new(0));

    let mut items = three_shapes();
    items[1] = Item::new(Shape::Square, label).on_selected({
        let selected = Rc::clone(&selected);

        move |_| selected.set(selected.get() + 1)
    });

    let harness = harness(items, Config::default());

    harness.selection.set(Shape::Square);

    assert_eq!(harness.combo_box.inner.borrow().button.shown(), Some(1));
    assert_eq!(selected.get(), 0);
    assert!(harness.feedback().is_empty());
}

#[test]
fn test_scale_matches_across_subtrees() {
    let harness = harness(three_shapes(), Config::default());

    harness.scene.set_scale(harness.anchor_parent, 2.0);
    harness.scene.set_scale(harness.list_parent, 0.5);

    harness.combo_box.open().expect("open");

    let popup = harness.combo_box.popup_node();
    assert_eq!(harness.scene.scale(popup), 4.0);

    let in_button = harness
        .combo_box
        .inner
        .borrow()
        .button
        .item_node(0)
        .expect("item");
    let in_list = harness.scene.children(harness.cell(Shape::Circle))[1];

    assert_eq!(
        harness.scene.global_bounds(in_button).width,
        harness.scene.global_bounds(in_list).width
    );
}

#[test]
fn test_list_opens_below_the_button() {
    let harness = harness(three_shapes(), Config::default());

    harness.combo_box.open().expect("open");

    let anchor = harness.scene.global_bounds(harness.combo_box.node());
    let list = harness.scene.global_bounds(harness.combo_box.popup_node());

    assert_eq!(list.position(), anchor.bottom_left());
    assert_eq!(list.position(), Point::new(20.0, 48.0));
}

#[test]
fn test_list_opens_above_the_button() {
    let harness = harness(
        three_shapes(),
        Config::default().placement(Placement::Above),
    );

    harness.combo_box.open().expect("open");

    let anchor = harness.scene.global_bounds(harness.combo_box.node());
    let list = harness.scene.global_bounds(harness.combo_box.popup_node());

    assert_eq!(list.bottom_left(), anchor.position());
}

#[test]
fn test_open_raises_the_list() {
    let harness = harness(three_shapes(), Config::default());
    let sibling = harness.scene.add_node(Some(harness.list_parent), Node::new());

    harness.combo_box.open().expect("open");

    assert_eq!(
        harness.scene.children(harness.list_parent),
        vec![sibling, harness.combo_box.popup_node()]
    );
}

#[test]
fn test_visibility_round_trip_restores_order() {
    let harness = harness(three_shapes(), Config::default());

    harness
        .combo_box
        .set_item_visible(&Shape::Square, false)
        .expect("known shape");
    assert_eq!(
        harness.combo_box.visible_values(),
        vec![Shape::Circle, Shape::Triangle]
    );
    assert_eq!(harness.combo_box.is_item_visible(&Shape::Square), Ok(false));

    harness
        .combo_box
        .set_item_visible(&Shape::Square, true)
        .expect("known shape");
    assert_eq!(
        harness.combo_box.visible_values(),
        vec![Shape::Circle, Shape::Square, Shape::Triangle]
    );

    assert_eq!(
        harness.combo_box.set_item_visible(&Shape::Hexagon, false),
        Err(Error::UnknownValue)
    );
}

#[test]
fn test_hiding_the_focused_item_moves_focus() {
    let harness = harness(three_shapes(), Config::default());

    harness.open_with_keyboard();
    let _ = harness.key(key::Named::ArrowDown);
    assert_eq!(harness.focused_shape(), Some(Shape::Square));

    harness
        .combo_box
        .set_item_visible(&Shape::Square, false)
        .expect("known shape");

    assert_eq!(harness.focused_shape(), Some(Shape::Triangle));
}

#[test]
fn test_outside_press_closes_without_selecting() {
    let harness = harness(three_shapes(), Config::default());
    let elsewhere = harness.scene.add_node(
        Some(harness.display),
        Node::new().size(Size::new(5.0, 5.0)),
    );

    harness.combo_box.open().expect("open");

    assert_eq!(harness.click(Some(elsewhere)), event::Status::Ignored);

    assert!(!harness.combo_box.is_open());
    assert_eq!(harness.selection.get(), Shape::Circle);
    assert_eq!(harness.dismiss_listeners(), 0);
    assert!(!harness.scene.is_visible(harness.combo_box.popup_node()));
    assert_eq!(
        harness.feedback(),
        vec![Feedback::Opened, Feedback::ClosedWithoutSelection]
    );
}

#[test]
fn test_finger_press_outside_closes() {
    let harness = harness(three_shapes(), Config::default());

    harness.combo_box.open().expect("open");

    let finger = Event::Touch(touch::Event::FingerPressed {
        id: touch::Finger(3),
        position: Point::new(500.0, 500.0),
    });
    let _ = harness.scene.dispatch(harness.display, &finger, None);

    assert!(!harness.combo_box.is_open());
}

#[test]
fn test_press_inside_the_list_keeps_it_open() {
    let harness = harness(three_shapes(), Config::default());

    harness.combo_box.open().expect("open");
    let _ = harness.click(Some(harness.combo_box.popup_node()));

    assert!(harness.combo_box.is_open());
}

#[test]
fn test_hover_highlights() {
    let harness = harness(three_shapes(), Config::default());

    harness.combo_box.open().expect("open");
    assert_eq!(harness.combo_box.highlighted(), Some(Shape::Circle));

    let hover = Event::Mouse(mouse::Event::CursorMoved {
        position: Point::ORIGIN,
    });
    let _ = harness
        .scene
        .dispatch(harness.display, &hover, Some(harness.cell(Shape::Triangle)));

    assert_eq!(harness.combo_box.highlighted(), Some(Shape::Triangle));
    assert_eq!(harness.scene.focused(), None);
}

#[test]
fn test_anchor_press_can_be_ignored_while_open() {
    let harness = harness(
        three_shapes(),
        Config::default().close_on_anchor_press(false),
    );

    let _ = harness.click(Some(harness.combo_box.node()));
    let _ = harness.click(Some(harness.combo_box.node()));

    assert!(harness.combo_box.is_open());
    assert_eq!(harness.dismiss_listeners(), 1);
}

#[test]
fn test_escape_and_tab_return_focus() {
    for named in [key::Named::Escape, key::Named::Tab] {
        let harness = harness(three_shapes(), Config::default());

        harness.open_with_keyboard();
        assert_eq!(harness.key(named), event::Status::Captured);

        assert!(!harness.combo_box.is_open());
        assert_eq!(harness.scene.focused(), Some(harness.combo_box.node()));
        assert_eq!(harness.selection.get(), Shape::Circle);
        assert_eq!(
            harness.feedback(),
            vec![Feedback::Opened, Feedback::ClosedWithoutSelection]
        );
    }
}

#[test]
fn test_window_unfocus_closes() {
    let harness = harness(three_shapes(), Config::default());

    harness.combo_box.open().expect("open");
    harness
        .combo_box
        .handle_window_event(&window::Event::Unfocused);

    assert!(!harness.combo_box.is_open());
}

#[test]
fn test_disabled_combo_box_stays_closed() {
    let harness = harness(three_shapes(), Config::default());

    harness.combo_box.open().expect("open");
    harness.combo_box.set_enabled(false);
    assert!(!harness.combo_box.is_open());

    let _ = harness.click(Some(harness.combo_box.node()));
    harness.combo_box.open().expect("open");

    assert!(!harness.combo_box.is_open());
    assert!(!harness.scene.focus(harness.combo_box.node()));

    harness.combo_box.set_enabled(true);
    harness.combo_box.open().expect("open");
    assert!(harness.combo_box.is_open());
}

#[test]
fn test_missing_display_leaves_the_list_closed() {
    let scene = Scene::new();
    let display = scene.add_display();
    let detached = scene.add_node(None, Node::new());
    let selection = Property::new(Shape::Circle);

    let combo_box = ComboBox::new(
        &scene,
        selection,
        three_shapes(),
        detached,
        Config::default(),
    )
    .expect("valid combo box");
    assert!(scene.append_child(display, combo_box.node()));

    assert_eq!(combo_box.open(), Err(Error::MissingDisplay));

    let _ = scene.dispatch(display, &click(), Some(combo_box.node()));

    assert!(!combo_box.is_open());
    assert!(!scene.is_visible(combo_box.popup_node()));
    assert_eq!(scene.input_listener_count(display), 0);
}

#[test]
fn test_custom_display_resolver() {
    let scene = Scene::new();
    let display = scene.add_display();
    let detached = scene.add_node(None, Node::new());

    let combo_box = ComboBox::new(
        &scene,
        Property::new(Shape::Circle),
        three_shapes(),
        detached,
        Config::default().display_resolver(DisplayResolver::new(move |_, _, _| Some(display))),
    )
    .expect("valid combo box");

    combo_box.open().expect("open");

    assert_eq!(scene.input_listener_count(display), 1);
}

#[test]
fn test_construction_errors() {
    let scene = Scene::new();
    let display = scene.add_display();

    let stale = ComboBox::new(
        &scene,
        Property::new(Shape::Hexagon),
        three_shapes(),
        display,
        Config::default(),
    );
    assert!(matches!(stale, Err(Error::StaleSelection)));

    let empty = ComboBox::new(
        &scene,
        Property::new(Shape::Circle),
        Vec::new(),
        display,
        Config::default(),
    );
    assert!(matches!(empty, Err(Error::EmptyRegistry)));

    let invalid = ComboBox::new(
        &scene,
        Property::new(Shape::Circle),
        three_shapes(),
        display,
        Config::default().button_margin(-2.0),
    );
    assert!(matches!(invalid, Err(Error::InvalidConfig(_))));

    assert_eq!(scene.node_count(), 1);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "the selection matches no item")]
fn test_stale_selection_at_runtime_asserts() {
    let harness = harness(three_shapes(), Config::default());

    harness.selection.set(Shape::Hexagon);
}

#[test]
fn test_dispose_removes_everything() {
    let harness = harness(three_shapes(), Config::default());
    let Harness {
        scene,
        display,
        selection,
        combo_box,
        ..
    } = harness;

    combo_box.open().expect("open");
    combo_box.dispose();

    assert_eq!(scene.node_count(), 3);
    assert_eq!(scene.input_listener_count(display), 0);
    assert_eq!(selection.subscriber_count(), 0);
}

#[test]
fn test_carousel_traversal_stays_in_the_page() {
    let harness = build(
        items(&[Shape::Circle, Shape::Square, Shape::Triangle, Shape::Hexagon]),
        Config::default().items_per_page(2),
        true,
    );
    let carousel = harness.combo_box.as_carousel().expect("carousel").clone();

    harness.open_with_keyboard();
    assert_eq!(harness.focused_shape(), Some(Shape::Circle));

    let _ = harness.key(key::Named::End);
    assert_eq!(harness.focused_shape(), Some(Shape::Square));

    let _ = harness.key(key::Named::ArrowDown);
    assert_eq!(harness.focused_shape(), Some(Shape::Square));

    assert_eq!(
        harness.click(Some(carousel.next_button())),
        event::Status::Captured
    );
    assert!(harness.combo_box.is_open());
    assert_eq!(carousel.page_number().get(), 1);

    let _ = harness.key(key::Named::Home);
    assert_eq!(harness.focused_shape(), Some(Shape::Triangle));

    let _ = harness.key(key::Named::ArrowDown);
    let _ = harness.key(key::Named::ArrowDown);
    assert_eq!(harness.focused_shape(), Some(Shape::Hexagon));

    assert_eq!(harness.selection.get(), Shape::Circle);
}

#[test]
fn test_carousel_opens_on_the_selected_page() {
    let harness = build(
        items(&[Shape::Circle, Shape::Square, Shape::Triangle, Shape::Hexagon]),
        Config::default().items_per_page(2),
        true,
    );
    let carousel = harness.combo_box.as_carousel().expect("carousel").clone();

    harness.selection.set(Shape::Hexagon);
    harness.combo_box.open().expect("open");

    assert_eq!(carousel.page_number().get(), 1);
    assert!(!carousel.is_animating());
    assert_eq!(harness.combo_box.highlighted(), Some(Shape::Hexagon));

    harness.combo_box.close();
    harness
        .combo_box
        .scroll_to_item(&Shape::Circle)
        .expect("known shape");
    assert_eq!(carousel.page_number().get(), 0);
}

#[test]
fn test_carousel_animation_follows_redraws() {
    let harness = build(
        items(&[Shape::Circle, Shape::Square, Shape::Triangle]),
        Config::default().items_per_page(1),
        true,
    );
    let carousel = harness.combo_box.as_carousel().expect("carousel").clone();

    harness.combo_box.open().expect("open");
    carousel.next_page(&harness.scene);
    assert!(carousel.is_animating());

    let start = Instant::now();
    harness
        .combo_box
        .handle_window_event(&window::Event::RedrawRequested(start));
    harness.combo_box.handle_window_event(&window::Event::RedrawRequested(
        start + crate::core::time::Duration::from_secs(1),
    ));

    assert!(!carousel.is_animating());
    assert!(harness.combo_box.is_open());
    assert_eq!(harness.selection.get(), Shape::Circle);
}

fn four_shapes() -> Vec<Item<Shape>> {
    items(&[Shape::Circle, Shape::Square, Shape::Triangle, Shape::Hexagon])
}

#[test]
fn test_keyboard_open_skips_a_hidden_selection() {
    let harness = harness(three_shapes(), Config::default());

    harness
        .combo_box
        .set_item_visible(&Shape::Circle, false)
        .expect("known shape");

    harness.open_with_keyboard();
    assert_eq!(harness.focused_shape(), Some(Shape::Square));
    assert_eq!(harness.combo_box.highlighted(), Some(Shape::Square));

    let _ = harness.key(key::Named::ArrowDown);
    assert_eq!(harness.focused_shape(), Some(Shape::Triangle));

    let _ = harness.key(key::Named::Enter);
    assert_eq!(harness.selection.get(), Shape::Triangle);
}

#[test]
fn test_commit_compares_with_the_current_selection() {
    let harness = harness(three_shapes(), Config::default());

    harness.open_with_keyboard();
    harness.selection.set(Shape::Square);

    let _ = harness.key(key::Named::ArrowDown);
    assert_eq!(harness.focused_shape(), Some(Shape::Square));
    let _ = harness.key(key::Named::Enter);

    assert_eq!(
        harness.feedback(),
        vec![Feedback::Opened, Feedback::Unchanged]
    );
}

#[test]
fn test_refresh_follows_moved_parents() {
    let harness = harness(three_shapes(), Config::default());
    let popup = harness.combo_box.popup_node();

    harness.combo_box.open().expect("open");

    harness
        .scene
        .set_translation(harness.list_parent, Vector::new(100.0, 0.0));
    harness.combo_box.refresh();

    let anchor = harness.scene.global_bounds(harness.combo_box.node());
    assert_eq!(harness.scene.global_bounds(popup).position(), anchor.bottom_left());

    harness
        .scene
        .set_translation(harness.anchor_parent, Vector::new(40.0, 60.0));
    harness.combo_box.refresh();

    let anchor = harness.scene.global_bounds(harness.combo_box.node());
    assert_eq!(harness.scene.global_bounds(popup).position(), anchor.bottom_left());
    assert_eq!(anchor.bottom_left(), Point::new(40.0, 78.0));
}

#[test]
fn test_page_keys_are_ignored_by_a_plain_list() {
    let harness = harness(three_shapes(), Config::default());

    harness.open_with_keyboard();

    assert_eq!(harness.key(key::Named::PageDown), event::Status::Ignored);
    assert_eq!(harness.focused_shape(), Some(Shape::Circle));
}

#[test]
fn test_carousel_keeps_focus_after_the_slide() {
    let harness = build(four_shapes(), Config::default().items_per_page(2), true);
    let carousel = harness.combo_box.as_carousel().expect("carousel").clone();

    harness.open_with_keyboard();
    let _ = harness.key(key::Named::End);
    assert_eq!(harness.focused_shape(), Some(Shape::Square));

    let _ = harness.click(Some(carousel.next_button()));

    let start = Instant::now();
    harness
        .combo_box
        .handle_window_event(&window::Event::RedrawRequested(start));
    assert_eq!(harness.focused_shape(), Some(Shape::Square));

    harness.combo_box.handle_window_event(&window::Event::RedrawRequested(
        start + crate::core::time::Duration::from_secs(1),
    ));

    assert!(!carousel.is_animating());
    assert_eq!(harness.focused_shape(), Some(Shape::Triangle));
    assert_eq!(harness.combo_box.highlighted(), Some(Shape::Triangle));

    let _ = harness.key(key::Named::ArrowDown);
    assert_eq!(harness.focused_shape(), Some(Shape::Hexagon));
}

#[test]
fn test_carousel_keeps_focus_without_a_transition() {
    let harness = build(
        four_shapes(),
        Config::default()
            .items_per_page(2)
            .page_transition(crate::core::time::Duration::ZERO),
        true,
    );
    let carousel = harness.combo_box.as_carousel().expect("carousel").clone();

    harness.open_with_keyboard();
    let _ = harness.click(Some(carousel.next_button()));

    assert_eq!(carousel.page_number().get(), 1);
    assert_eq!(harness.focused_shape(), Some(Shape::Triangle));

    let _ = harness.key(key::Named::Home);
    assert_eq!(harness.focused_shape(), Some(Shape::Triangle));
}

#[test]
fn test_carousel_pages_with_keys() {
    let harness = build(four_shapes(), Config::default().items_per_page(2), true);
    let carousel = harness.combo_box.as_carousel().expect("carousel").clone();

    harness.open_with_keyboard();

    assert_eq!(harness.key(key::Named::PageUp), event::Status::Ignored);
    assert_eq!(harness.key(key::Named::PageDown), event::Status::Captured);
    assert_eq!(carousel.page_number().get(), 1);
    assert_eq!(harness.focused_shape(), Some(Shape::Triangle));

    assert_eq!(harness.key(key::Named::PageDown), event::Status::Ignored);
    assert_eq!(harness.focused_shape(), Some(Shape::Triangle));

    assert_eq!(harness.key(key::Named::PageUp), event::Status::Captured);
    assert_eq!(carousel.page_number().get(), 0);
    assert_eq!(harness.focused_shape(), Some(Shape::Circle));

    assert!(harness.combo_box.is_open());
    assert_eq!(harness.selection.get(), Shape::Circle);
}

#[test]
fn test_carousel_page_buttons_take_the_focus() {
    let harness = build(four_shapes(), Config::default().items_per_page(2), true);
    let carousel = harness.combo_box.as_carousel().expect("carousel").clone();

    harness.open_with_keyboard();
    assert!(harness.scene.focus(carousel.next_button()));

    assert_eq!(harness.key(key::Named::Enter), event::Status::Captured);
    assert_eq!(carousel.page_number().get(), 1);
    assert!(harness.combo_box.is_open());
    assert_eq!(harness.selection.get(), Shape::Circle);

    assert!(harness.scene.focus(carousel.previous_button()));
    assert_eq!(harness.key(key::Named::Space), event::Status::Captured);
    assert_eq!(carousel.page_number().get(), 0);
}

#[test]
fn test_page_subscribers_may_read_the_combo_box() {
    let harness = build(four_shapes(), Config::default().items_per_page(2), true);
    let carousel = harness.combo_box.as_carousel().expect("carousel").clone();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let _ = carousel.page_number().subscribe({
        let seen = Rc::clone(&seen);
        let inner = Rc::clone(&harness.combo_box.inner);

        move |page: &usize, _: &usize| seen.borrow_mut().push((*page, inner.borrow().is_open()))
    });
    let _ = carousel.number_of_pages().subscribe({
        let seen = Rc::clone(&seen);
        let inner = Rc::clone(&harness.combo_box.inner);

        move |pages: &usize, _: &usize| {
            seen.borrow_mut().push((*pages * 10, inner.borrow().is_open()));
        }
    });

    harness.selection.set(Shape::Hexagon);
    harness.combo_box.open().expect("open");

    harness
        .combo_box
        .set_item_visible(&Shape::Circle, false)
        .expect("known shape");
    harness
        .combo_box
        .set_item_visible(&Shape::Square, false)
        .expect("known shape");

    assert_eq!(
        *seen.borrow(),
        vec![(20, true), (1, true), (10, true), (0, true)]
    );
}

#[test]
fn test_carousel_commits_a_press_during_the_slide() {
    let harness = build(four_shapes(), Config::default().items_per_page(2), true);
    let carousel = harness.combo_box.as_carousel().expect("carousel").clone();

    let _ = harness.click(Some(harness.combo_box.node()));
    let _ = harness.click(Some(carousel.next_button()));
    assert!(carousel.is_animating());

    let content = harness.scene.children(harness.cell(Shape::Square))[1];
    assert_eq!(harness.click(Some(content)), event::Status::Captured);

    assert!(!harness.combo_box.is_open());
    assert_eq!(harness.selection.get(), Shape::Square);
    assert_eq!(harness.feedback().last(), Some(&Feedback::Changed));
}
