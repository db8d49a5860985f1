pub mod document;
pub mod element;
pub mod event;
pub mod selector;
pub mod text_input;

pub use document::Document;
pub use element::{Content, Element, InputType, Tag};
pub use event::{Event, Key, Modifiers};
pub use selector::{Selector, SelectorError};
pub use text_input::{process_events, type_text};
