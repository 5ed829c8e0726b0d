//! Errors reported by the widgets.

/// An error building or driving a widget.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A combo box was given no items.
    #[error("a combo box needs at least one item")]
    EmptyRegistry,

    /// Two items share the same value.
    #[error("item {index} has the same value as item {first}")]
    DuplicateValue {
        /// The index of the first item holding the value.
        first: usize,
        /// The index of the item repeating it.
        index: usize,
    },

    /// No item holds the given value.
    #[error("no item holds the given value")]
    UnknownValue,

    /// The selection holds a value that no item holds.
    #[error("the selection matches no item")]
    StaleSelection,

    /// The configuration cannot be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The anchor and the list are not attached to the same display.
    #[error("the combo box is not attached to a display")]
    MissingDisplay,
}

/// The result of a widget operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;
