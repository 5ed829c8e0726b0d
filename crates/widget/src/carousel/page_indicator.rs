use crate::core::scene::Node;
use crate::core::{NodeId, Point, ReadOnlyProperty, Rectangle, Scene, Size, Subscription, Vector};

use std::cell::RefCell;
use std::rc::Rc;

const DIAMETER: f32 = 6.0;
const SPACING: f32 = 4.0;

/// A row of dots, one per page of a [`Carousel`](super::Carousel), with a
/// marker on the current one.
#[derive(Debug)]
pub struct PageIndicator {
    node: NodeId,
    dots: Rc<RefCell<Dots>>,
    page_number: ReadOnlyProperty<usize>,
    number_of_pages: ReadOnlyProperty<usize>,
    subscriptions: (Subscription, Subscription),
}

#[derive(Debug)]
struct Dots {
    node: NodeId,
    marker: NodeId,
    dots: Vec<NodeId>,
    active: usize,
}

impl Dots {
    fn resize(&mut self, scene: &Scene, count: usize) {
        while self.dots.len() > count {
            if let Some(dot) = self.dots.pop() {
                scene.remove(dot);
            }
        }

        while self.dots.len() < count {
            let x = self.dots.len() as f32 * (DIAMETER + SPACING);
            let dot = scene.add_node(
                Some(self.node),
                Node::new()
                    .size(Size::new(DIAMETER, DIAMETER))
                    .translation(Vector::new(x, 0.0))
                    .name("page dot"),
            );

            self.dots.push(dot);
        }

        let width = (count as f32 * (DIAMETER + SPACING) - SPACING).max(0.0);
        scene.set_content(
            self.node,
            Rectangle::new(Point::ORIGIN, Size::new(width, DIAMETER)),
        );

        scene.move_to_front(self.marker);
        self.activate(scene, self.active);
    }

    fn activate(&mut self, scene: &Scene, page: usize) {
        self.active = page;

        let dot = page.min(self.dots.len().saturating_sub(1));
        scene.set_translation(
            self.marker,
            Vector::new(dot as f32 * (DIAMETER + SPACING), 0.0),
        );
    }
}

impl PageIndicator {
    /// Creates a [`PageIndicator`] under `parent` that follows the given
    /// page properties.
    pub fn new(
        scene: &Scene,
        parent: NodeId,
        page_number: ReadOnlyProperty<usize>,
        number_of_pages: ReadOnlyProperty<usize>,
    ) -> Self {
        let node = scene.add_node(Some(parent), Node::new().name("page indicator"));
        let marker = scene.add_node(
            Some(node),
            Node::new()
                .size(Size::new(DIAMETER, DIAMETER))
                .name("current page"),
        );

        let dots = Rc::new(RefCell::new(Dots {
            node,
            marker,
            dots: Vec::new(),
            active: 0,
        }));

        let pages = number_of_pages.link({
            let dots = Rc::clone(&dots);
            let scene = scene.clone();

            move |count: &usize, _: &usize| dots.borrow_mut().resize(&scene, *count)
        });

        let page = page_number.link({
            let dots = Rc::clone(&dots);
            let scene = scene.clone();

            move |page: &usize, _: &usize| dots.borrow_mut().activate(&scene, *page)
        });

        Self {
            node,
            dots,
            page_number,
            number_of_pages,
            subscriptions: (pages, page),
        }
    }

    /// Returns the node of the indicator.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Returns the number of dots.
    pub fn count(&self) -> usize {
        self.dots.borrow().dots.len()
    }

    /// Returns the page the marker sits on.
    pub fn active(&self) -> usize {
        self.dots.borrow().active
    }

    /// Stops following the carousel and removes the indicator from the
    /// scene.
    pub fn dispose(self, scene: &Scene) {
        let (pages, page) = self.subscriptions;

        let _ = self.number_of_pages.unsubscribe(pages);
        let _ = self.page_number.unsubscribe(page);

        scene.remove(self.node);
    }
}
