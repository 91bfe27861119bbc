//! Event results and the focus vocabulary shared by the handlers.

use crate::model::OptionId;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, the host should run its default action.
    Ignored,
    /// Event was consumed: default action prevented, propagation stopped.
    Consumed,
}

/// Which part of the widget carries the visual focus ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRegion {
    /// The search area around the text field.
    Search,
    /// The open dropdown, navigated through the active descendant.
    List,
    /// The chip list (multi-select only).
    Chips,
}

/// Externally observable keyboard state of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboboxState {
    SearchInputClosed,
    SearchInputOpenUnfocused,
    ListFocused,
    ChipsFocused,
}

/// What a pointer event landed on, resolved from an element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// Text field, open button, or the chip container background.
    SearchArea,
    /// An option row, by row index.
    Row(usize),
    Chip(OptionId),
    ChipRemove(OptionId),
}
