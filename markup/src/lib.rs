pub mod document;
pub mod element;
pub mod event;
pub mod render;
pub mod text_input;

pub use document::{Document, PointerListener, Subscription};
pub use element::{find_element, Content, Element};
pub use event::{from_key_event, Key, Modifiers};
pub use render::to_html;
pub use text_input::{TextEditResult, TextInput};
