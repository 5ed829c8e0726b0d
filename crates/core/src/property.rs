//! Observe values that change over time.
//!
//! A [`Property`] is a shared, single-threaded cell that notifies its
//! subscribers with `(new, old)` whenever its value changes. Values are
//! compared with [`PartialEq`]; setting an equal value is a no-op.
//!
//! Subscribers run after the value has been stored and without any internal
//! borrow held, so they are free to read the property, set other properties
//! or unsubscribe themselves.
use slotmap::{SlotMap, new_key_type};

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

new_key_type! {
    /// The key of a subscriber registered on a [`Property`].
    pub struct Subscription;
}

type Listener<T> = Rc<dyn Fn(&T, &T)>;

struct Inner<T> {
    value: T,
    listeners: SlotMap<Subscription, Listener<T>>,
}

/// An observable value.
pub struct Property<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Property<T>
where
    T: Clone + PartialEq + 'static,
{
    /// Creates a new [`Property`] holding the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                listeners: SlotMap::with_key(),
            })),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Calls `f` with a reference to the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Stores a new value and notifies the subscribers if it differs from the
    /// current one.
    pub fn set(&self, value: T) {
        let (old, listeners) = {
            let mut inner = self.inner.borrow_mut();

            if inner.value == value {
                return;
            }

            let old = std::mem::replace(&mut inner.value, value.clone());
            let listeners: Vec<_> = inner
                .listeners
                .iter()
                .map(|(key, listener)| (key, Rc::clone(listener)))
                .collect();

            (old, listeners)
        };

        for (key, listener) in listeners {
            // A subscriber may have unsubscribed another one.
            if self.inner.borrow().listeners.contains_key(key) {
                listener(&value, &old);
            }
        }
    }

    /// Registers a subscriber called with `(new, old)` on every change.
    pub fn subscribe(&self, listener: impl Fn(&T, &T) + 'static) -> Subscription {
        self.inner.borrow_mut().listeners.insert(Rc::new(listener))
    }

    /// Registers a subscriber and immediately calls it with the current value
    /// as both the new and the old value.
    pub fn link(&self, listener: impl Fn(&T, &T) + 'static) -> Subscription {
        let value = self.get();
        listener(&value, &value);

        self.subscribe(listener)
    }

    /// Removes a subscriber.
    ///
    /// Returns `false` if it was not registered, which makes removal
    /// idempotent.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.inner
            .borrow_mut()
            .listeners
            .remove(subscription)
            .is_some()
    }

    /// Returns the number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Returns a view of this [`Property`] that cannot be set.
    pub fn read_only(&self) -> ReadOnlyProperty<T> {
        ReadOnlyProperty(self.clone())
    }

    /// Returns true if both handles point to the same [`Property`].
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Default for Property<T>
where
    T: Clone + PartialEq + Default + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();

        f.debug_struct("Property")
            .field("value", &inner.value)
            .field("subscribers", &inner.listeners.len())
            .finish()
    }
}

/// A [`Property`] exposed as an output: it can be observed, not set.
pub struct ReadOnlyProperty<T>(Property<T>);

impl<T> Clone for ReadOnlyProperty<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> ReadOnlyProperty<T>
where
    T: Clone + PartialEq + 'static,
{
    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.0.get()
    }

    /// Calls `f` with a reference to the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.0.with(f)
    }

    /// See [`Property::subscribe`].
    pub fn subscribe(&self, listener: impl Fn(&T, &T) + 'static) -> Subscription {
        self.0.subscribe(listener)
    }

    /// See [`Property::link`].
    pub fn link(&self, listener: impl Fn(&T, &T) + 'static) -> Subscription {
        self.0.link(listener)
    }

    /// See [`Property::unsubscribe`].
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.0.unsubscribe(subscription)
    }

    /// Returns the number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.0.subscriber_count()
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadOnlyProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
