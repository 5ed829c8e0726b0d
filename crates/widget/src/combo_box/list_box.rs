//! The list a combo box opens by default.
use crate::core::alignment::Horizontal;
use crate::core::scene::Node;
use crate::core::{NodeId, Rectangle, Scene, Size, Vector};

use super::config::Config;
use super::item::{ItemRegistry, VisibleItems};
use super::popup::{self, Cell, Popup};

use rustc_hash::FxHashMap;

/// A floating panel stacking the visible items of a combo box.
///
/// Every visible item gets a cell of the same size: the largest visible item
/// plus the highlight margins. Hidden items take no space.
#[derive(Debug)]
pub struct ListBox {
    node: NodeId,
    cells: Vec<Option<Cell>>,
    lookup: FxHashMap<NodeId, usize>,
    margin: Vector,
    align: Horizontal,
    cell_size: Size,
    memo: Option<Memo>,
    layouts: usize,
    highlighted: Option<usize>,
}

#[derive(Debug, PartialEq)]
struct Memo {
    generation: u64,
    extents: Vec<Rectangle>,
}

impl ListBox {
    /// Creates a hidden [`ListBox`] under `parent`.
    ///
    /// Item nodes are created the first time the list is laid out.
    pub fn new(scene: &Scene, parent: NodeId, config: &Config) -> Self {
        let node = scene.add_node(
            Some(parent),
            Node::new().visible(false).name("combo box list"),
        );

        Self {
            node,
            cells: Vec::new(),
            lookup: FxHashMap::default(),
            margin: Vector::new(config.highlight.x_margin, config.highlight.y_margin),
            align: config.align,
            cell_size: Size::ZERO,
            memo: None,
            layouts: 0,
            highlighted: None,
        }
    }

    /// Returns the size shared by every cell.
    pub fn cell_size(&self) -> Size {
        self.cell_size
    }

    /// Returns the cell node of an item, if it was created.
    pub fn cell(&self, index: usize) -> Option<NodeId> {
        self.cells.get(index).copied().flatten().map(|cell| cell.node)
    }

    /// Returns how many times the layout actually ran.
    pub fn layout_count(&self) -> usize {
        self.layouts
    }

    fn ensure_cells<T>(&mut self, scene: &Scene, registry: &ItemRegistry<T>, visible: &VisibleItems) {
        if self.cells.len() < registry.len() {
            self.cells.resize(registry.len(), None);
        }

        for index in visible.iter() {
            if self.cells[index].is_some() {
                continue;
            }

            let Some(item) = registry.get(index) else {
                continue;
            };

            let cell = Cell::new(scene, self.node, item);
            let _ = self.lookup.insert(cell.node, index);
            self.cells[index] = Some(cell);
        }
    }
}

impl<T> Popup<T> for ListBox {
    fn node(&self) -> NodeId {
        self.node
    }

    fn layout(&mut self, scene: &Scene, registry: &ItemRegistry<T>) {
        let visible = registry.visible_items();

        self.ensure_cells(scene, registry, &visible);

        let memo = Memo {
            generation: visible.generation(),
            extents: visible
                .iter()
                .filter_map(|index| self.cells[index].map(|cell| cell.extent(scene)))
                .collect(),
        };

        if self.memo.as_ref() == Some(&memo) {
            return;
        }

        let cell_size = popup::uniform_size(memo.extents.iter().copied()).expand(self.margin);
        let mut y = 0.0;

        for (index, cell) in self.cells.iter().enumerate() {
            let Some(cell) = cell else {
                continue;
            };

            if visible.contains(index) {
                cell.arrange(scene, cell_size, self.margin, self.align);
                scene.set_translation(cell.node, Vector::new(0.0, y));
                scene.set_visible(cell.node, true);

                y += cell_size.height;
            } else {
                scene.set_visible(cell.node, false);
            }
        }

        scene.set_content(
            self.node,
            Rectangle::with_size(Size::new(cell_size.width, y)),
        );

        log::debug!(
            "ListBox: laid out {} items in {}x{} cells",
            visible.len(),
            cell_size.width,
            cell_size.height
        );

        self.cell_size = cell_size;
        self.memo = Some(memo);
        self.layouts += 1;
    }

    fn visible_items(&self, registry: &ItemRegistry<T>) -> VisibleItems {
        registry.visible_items()
    }

    fn item_node(&self, index: usize) -> Option<NodeId> {
        self.cell(index)
    }

    fn item_at(&self, scene: &Scene, node: NodeId) -> Option<usize> {
        popup::find_cell(scene, self.node, &self.lookup, node)
    }

    fn focus_item(&mut self, scene: &Scene, index: usize) -> bool {
        let Some(cell) = self.cells.get(index).copied().flatten() else {
            return false;
        };

        if !scene.focus(cell.node) {
            return false;
        }

        Popup::<T>::highlight(self, scene, Some(index));

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

    fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    fn dispose(&mut self, scene: &Scene) {
        scene.remove(self.node);

        self.cells.clear();
        self.lookup.clear();
        self.memo = None;
        self.highlighted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combo_box::Item;
    use crate::combo_box::config::Highlight;

    fn labelled(width: f32, height: f32) -> impl Fn(&Scene) -> NodeId + 'static {
        move |scene: &Scene| scene.add_node(None, Node::new().size(Size::new(width, height)))
    }

    fn setup() -> (Scene, NodeId, ItemRegistry<u8>, ListBox) {
        let scene = Scene::new();
        let display = scene.add_display();
        let registry = ItemRegistry::new(vec![
            Item::new(1, labelled(10.0, 5.0)),
            Item::new(2, labelled(40.0, 8.0)),
            Item::new(3, labelled(20.0, 12.0)),
        ])
        .expect("valid registry");

        let config = Config::default().highlight(Highlight {
            x_margin: 2.0,
            y_margin: 1.0,
            corner_radius: 0.0,
        });

        let list = ListBox::new(&scene, display, &config);

        (scene, display, registry, list)
    }

    #[test]
    fn test_cells_share_the_largest_visible_size() {
        let (scene, _display, registry, mut list) = setup();

        Popup::layout(&mut list, &scene, &registry);

        assert_eq!(list.cell_size(), Size::new(44.0, 14.0));
        assert_eq!(
            scene.local_bounds(Popup::<u8>::node(&list)),
            Rectangle::with_size(Size::new(44.0, 42.0))
        );

        let third = list.cell(2).expect("cell created");
        assert_eq!(scene.translation(third), Vector::new(0.0, 28.0));
    }

    #[test]
    fn test_hidden_items_do_not_size_cells() {
        let (scene, _display, mut registry, mut list) = setup();

        let _ = registry.set_visible(&2, false);
        Popup::layout(&mut list, &scene, &registry);

        assert_eq!(list.cell_size(), Size::new(24.0, 14.0));
        assert!(list.cell(1).is_none());

        let third = list.cell(2).expect("cell created");
        assert_eq!(scene.translation(third), Vector::new(0.0, 14.0));
    }

    #[test]
    fn test_layout_is_memoized() {
        let (scene, _display, mut registry, mut list) = setup();

        Popup::layout(&mut list, &scene, &registry);
        Popup::layout(&mut list, &scene, &registry);
        assert_eq!(list.layout_count(), 1);

        let _ = registry.set_visible(&1, false);
        Popup::layout(&mut list, &scene, &registry);
        assert_eq!(list.layout_count(), 2);
    }

    #[test]
    fn test_layout_follows_item_size_changes() {
        let (scene, _display, registry, mut list) = setup();

        Popup::layout(&mut list, &scene, &registry);

        let first = list.cell(0).expect("cell created");
        let content = scene.children(first)[1];
        scene.set_content(content, Rectangle::with_size(Size::new(100.0, 5.0)));

        Popup::layout(&mut list, &scene, &registry);

        assert_eq!(list.layout_count(), 2);
        assert_eq!(list.cell_size(), Size::new(104.0, 14.0));
    }

    #[test]
    fn test_item_at_walks_up_to_the_cell() {
        let (scene, _display, registry, mut list) = setup();

        Popup::layout(&mut list, &scene, &registry);

        let cell = list.cell(1).expect("cell created");
        let content = scene.children(cell)[1];

        assert_eq!(Popup::<u8>::item_at(&list, &scene, content), Some(1));
        assert_eq!(
            Popup::<u8>::item_at(&list, &scene, Popup::<u8>::node(&list)),
            None
        );
    }

    #[test]
    fn test_highlight_is_single() {
        let (scene, _display, registry, mut list) = setup();

        Popup::layout(&mut list, &scene, &registry);
        Popup::<u8>::highlight(&mut list, &scene, Some(0));
        Popup::<u8>::highlight(&mut list, &scene, Some(2));

        let highlight_of = |index: usize| scene.children(list.cell(index).expect("cell"))[0];

        assert!(!scene.is_visible(highlight_of(0)));
        assert!(scene.is_visible(highlight_of(2)));
        assert_eq!(Popup::<u8>::highlighted(&list), Some(2));
    }
}
