//! Error type for the search-and-select widget.

use thiserror::Error;

/// Errors raised by the widget.
///
/// These signal contract violations by calling code or malformed input
/// documents. User-input edge cases (no results, re-selecting a selected
/// item, keying past the end of the list) never produce one.
#[derive(Debug, Error)]
pub enum SearchSelectError {
    /// A selection mutator was called with an id that is not a row of this
    /// widget, or with a disabled row.
    #[error("invalid element: {0}")]
    InvalidElement(String),
    /// The selection source has no associated label.
    #[error("no label associated with select {0}")]
    MissingLabel(String),
    /// A selection source could not be loaded from JSON.
    #[error("invalid selection source: {0}")]
    Source(#[from] serde_json::Error),
    /// A theme could not be loaded from JSON.
    #[error("invalid theme: {0}")]
    Theme(serde_json::Error),
}
