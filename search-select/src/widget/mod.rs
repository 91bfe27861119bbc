//! Search-and-select widget - a searchable combobox over a select source.

mod keyboard;
mod pointer;
pub mod render;
mod state;
mod sync;

pub use state::{SearchSelect, WidgetIds};
