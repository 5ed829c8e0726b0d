//! Register the entries a combo box selects from.
use crate::core::{NodeId, Scene};
use crate::{Error, Result};

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

/// A selectable entry of a combo box.
pub struct Item<T> {
    value: T,
    create_node: Box<dyn Fn(&Scene) -> NodeId>,
    visible: bool,
    on_selected: Option<Rc<dyn Fn(&T)>>,
    accessible_name: Option<String>,
}

impl<T> Item<T> {
    /// Creates a new [`Item`] holding `value`, displayed by the node that
    /// `create_node` builds.
    ///
    /// The factory is called lazily and at most once by each part of the
    /// combo box showing the item.
    pub fn new(value: T, create_node: impl Fn(&Scene) -> NodeId + 'static) -> Self {
        Self {
            value,
            create_node: Box::new(create_node),
            visible: true,
            on_selected: None,
            accessible_name: None,
        }
    }

    /// Sets whether the [`Item`] starts visible.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets a hook run when the user selects this [`Item`].
    ///
    /// Setting the selection programmatically does not run it.
    #[must_use]
    pub fn on_selected(mut self, on_selected: impl Fn(&T) + 'static) -> Self {
        self.on_selected = Some(Rc::new(on_selected));
        self
    }

    /// Sets the name assistive technology announces for this [`Item`].
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name = Some(name.into());
        self
    }

    /// Returns the value of the [`Item`].
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns true if the [`Item`] is currently offered.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the accessible name of the [`Item`], if any.
    pub fn name(&self) -> Option<&str> {
        self.accessible_name.as_deref()
    }

    /// Builds a new display node for the [`Item`].
    pub fn create_node(&self, scene: &Scene) -> NodeId {
        (self.create_node)(scene)
    }

    pub(crate) fn selection_hook(&self) -> Option<Rc<dyn Fn(&T)>> {
        self.on_selected.clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for Item<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("value", &self.value)
            .field("visible", &self.visible)
            .field("accessible_name", &self.accessible_name)
            .finish_non_exhaustive()
    }
}

/// An immutable snapshot of the visible items, as registry indices in
/// registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleItems {
    indices: Rc<[usize]>,
    generation: u64,
}

impl VisibleItems {
    pub(crate) fn new(indices: impl Into<Rc<[usize]>>, generation: u64) -> Self {
        Self {
            indices: indices.into(),
            generation,
        }
    }

    /// Returns the indices in order.
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the number of visible items.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if no item is visible.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the generation of the registry this snapshot was taken from.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true if the item is part of the snapshot.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Returns the position of the item within the snapshot.
    pub fn position(&self, index: usize) -> Option<usize> {
        self.indices.binary_search(&index).ok()
    }

    /// Returns the first visible item.
    pub fn first(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    /// Returns the last visible item.
    pub fn last(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    /// Returns the first visible item registered after `index`.
    ///
    /// `index` itself does not need to be visible.
    pub fn next_after(&self, index: usize) -> Option<usize> {
        let position = self.indices.partition_point(|candidate| *candidate <= index);

        self.indices.get(position).copied()
    }

    /// Returns the last visible item registered before `index`.
    ///
    /// `index` itself does not need to be visible.
    pub fn previous_before(&self, index: usize) -> Option<usize> {
        let position = self.indices.partition_point(|candidate| *candidate < index);

        position
            .checked_sub(1)
            .and_then(|position| self.indices.get(position).copied())
    }

    /// Returns the indices in order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Returns the snapshot restricted to the items at the given positions.
    pub(crate) fn slice(&self, range: std::ops::Range<usize>) -> Self {
        let start = range.start.min(self.indices.len());
        let end = range.end.clamp(start, self.indices.len());

        Self::new(&self.indices[start..end], self.generation)
    }
}

/// The ordered list of [`Item`]s of a combo box.
///
/// Items are never removed nor reordered; hiding an item only takes it out
/// of the [`VisibleItems`].
pub struct ItemRegistry<T> {
    items: Vec<Item<T>>,
    generation: u64,
    visible: OnceCell<VisibleItems>,
}

impl<T: PartialEq> ItemRegistry<T> {
    /// Creates a new [`ItemRegistry`].
    ///
    /// Fails if there are no items or if two items hold the same value.
    pub fn new(items: Vec<Item<T>>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        for (index, item) in items.iter().enumerate() {
            if let Some(first) = items[..index]
                .iter()
                .position(|other| other.value == item.value)
            {
                return Err(Error::DuplicateValue { first, index });
            }
        }

        Ok(Self {
            items,
            generation: 0,
            visible: OnceCell::new(),
        })
    }

    /// Shows or hides the item holding `value`.
    ///
    /// Returns whether the visibility changed.
    pub fn set_visible(&mut self, value: &T, visible: bool) -> Result<bool> {
        let index = self.index_of(value)?;
        let item = &mut self.items[index];

        if item.visible == visible {
            return Ok(false);
        }

        item.visible = visible;
        self.generation += 1;
        self.visible = OnceCell::new();

        Ok(true)
    }

    /// Returns true if the item holding `value` is visible.
    pub fn is_visible(&self, value: &T) -> Result<bool> {
        self.item_for(value).map(Item::is_visible)
    }

    /// Returns the index of the item holding `value`.
    pub fn index_of(&self, value: &T) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.value == *value)
            .ok_or(Error::UnknownValue)
    }

    /// Returns the item holding `value`.
    pub fn item_for(&self, value: &T) -> Result<&Item<T>> {
        self.index_of(value).map(|index| &self.items[index])
    }
}

impl<T> ItemRegistry<T> {
    /// Returns the [`VisibleItems`] of the registry.
    ///
    /// The snapshot is computed once per generation and shared.
    pub fn visible_items(&self) -> VisibleItems {
        self.visible
            .get_or_init(|| {
                let indices: Vec<usize> = self
                    .items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| item.visible)
                    .map(|(index, _)| index)
                    .collect();

                VisibleItems::new(indices, self.generation)
            })
            .clone()
    }

    /// Returns the item at `index`.
    pub fn get(&self, index: usize) -> Option<&Item<T>> {
        self.items.get(index)
    }

    /// Returns the number of items, visible or not.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the registry has no items.
    ///
    /// A constructed registry always has at least one.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Item<T>> + '_ {
        self.items.iter()
    }

    /// Returns a counter bumped on every visibility change.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<T: fmt::Debug> fmt::Debug for ItemRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemRegistry")
            .field("items", &self.items)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
