//! Terminal presentation for the memory board.
//!
//! Renders into a plain framebuffer (no widget toolkit) that is diffed and
//! flushed to the terminal. Tiles are drawn with emoji faces, so the buffer
//! tracks two-column glyphs explicitly.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use memory_pairs_core as core;
pub use memory_pairs_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
