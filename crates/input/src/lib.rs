//! Terminal input module.
//!
//! Independent of any UI framework beyond `crossterm` event types. It maps
//! key and mouse events to board commands and keeps the keyboard cursor that
//! turns a reveal command into a [`crate::types::GameAction`].

pub mod cursor;
pub mod map;

pub use memory_pairs_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, handle_mouse_event, should_quit, KeyCommand};
