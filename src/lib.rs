//! Memory pairs (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and holds the pieces
//! only the binary needs: configuration, log setup and frame pacing.

pub use memory_pairs_core as core;
pub use memory_pairs_input as input;
pub use memory_pairs_term as term;
pub use memory_pairs_types as types;

pub mod clock;
pub mod config;
pub mod logging;
