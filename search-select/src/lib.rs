//! Accessible search-and-select combobox.
//!
//! Enhances a [`SelectSource`] (the native single or multi-valued select)
//! with a searchable dropdown listbox and, in multi-select mode, a list of
//! removable chips. All state lives in typed fields on the widget; markup is
//! produced as a projection and every selection change is written back to
//! the source.

pub mod chips;
pub mod collection;
pub mod engine;
pub mod error;
pub mod events;
pub mod filter;
pub mod items;
pub mod model;
pub mod source;
pub mod theme;
pub mod widget;

pub use chips::{Chip, ChipList};
pub use collection::SearchSelects;
pub use engine::{Engine, MultiSelect, SelectionEngine, SelectionMode, SingleSelect};
pub use error::SearchSelectError;
pub use events::{ComboboxState, EventResult, FocusRegion, PointerTarget};
pub use filter::{label_matches, LabelFilter};
pub use items::{AvailableItems, AvailableRow, GroupSection};
pub use model::{parse, parse_nodes, OptionGroup, OptionId, OptionItem, OTHER_GROUP_LABEL};
pub use source::{SelectSource, SourceGroup, SourceNode, SourceOption, SourceSpec};
pub use theme::Theme;
pub use widget::render::NO_RESULTS_TEXT;
pub use widget::{SearchSelect, WidgetIds};
