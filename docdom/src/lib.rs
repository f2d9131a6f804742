pub mod document;
pub mod element;
pub mod event;
pub mod layout;
pub mod markdown;
pub mod table;
pub mod text;
pub mod types;

pub use document::{Document, Location};
pub use element::{Content, Element};
pub use event::{Event, EventResult};
pub use layout::{Block, LayoutResult};
pub use types::*;
