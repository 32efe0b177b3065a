//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, the board generator and the session
//! controller. It has **no dependencies** on terminal I/O or input handling,
//! making it:
//!
//! - **Deterministic**: Same seed deals identical boards
//! - **Testable**: Time is virtual and only moves when the caller advances it
//! - **Portable**: Can run behind any front-end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: Tile grid and the shuffled pair generator
//! - [`session`]: Game session controller (selection, input lock, clock, completion)
//! - [`scheduler`]: Virtual-time timers with cancellable handles
//! - [`rng`]: Seeded random sources
//! - [`snapshot`]: Read-only view consumed by renderers
//!
//! # Game Rules
//!
//! - Every symbol is on exactly two face-down tiles
//! - A turn reveals two tiles; a matching pair stays face-up
//! - A mismatched pair stays visible for one second while input is locked,
//!   then flips back
//! - Every reveal counts as a move
//! - The game ends when every tile is face-up; the clock stops then
//!
//! # Example
//!
//! ```
//! use memory_pairs_core::{GameSession, Phase};
//! use memory_pairs_types::{BoardSize, Coord};
//!
//! let mut game = GameSession::new(BoardSize::new(4, 4).unwrap(), 12345);
//! game.start();
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! game.on_tile_click(Coord::new(0, 0));
//! assert_eq!(game.move_count(), 1);
//!
//! // One simulated second later the clock has ticked once.
//! game.advance(1000);
//! assert_eq!(game.elapsed_display(), "1s");
//! ```
//!
//! # Timing
//!
//! The runtime calls [`GameSession::advance`](session::GameSession::advance)
//! every frame with the elapsed milliseconds. The session's scheduler turns
//! that into one-second clock ticks and the delayed flip-back of mismatches.

pub mod board;
pub mod rng;
pub mod scheduler;
pub mod session;
pub mod snapshot;

pub use memory_pairs_types as types;

// Re-export commonly used types for convenience
pub use board::{generate, generate_board, Grid, Tile};
pub use rng::{entropy_seed, seeded, BoardRng};
pub use scheduler::{Scheduler, TimerHandle};
pub use session::{GameSession, Phase, Selection};
pub use snapshot::{GameSnapshot, TileFace, TileSnapshot};
