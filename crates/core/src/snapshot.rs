use crate::session::Phase;
use crate::types::Symbol;

/// How a tile should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileFace {
    Hidden,
    /// Face-up and part of the current, unresolved turn
    Selected,
    /// Face-up for good
    Matched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub symbol: Symbol,
    pub face: TileFace,
}

/// Read-only view of a session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major tiles
    pub tiles: Vec<TileSnapshot>,
    pub phase: Phase,
    pub episode_id: u32,
    pub move_count: u32,
    pub seconds_elapsed: u32,
    pub input_locked: bool,
    pub pairs_found: usize,
    pub total_pairs: usize,
}

impl GameSnapshot {
    pub fn tile(&self, row: usize, col: usize) -> Option<&TileSnapshot> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.tiles.get(row * self.width + col)
    }

    /// Whether the board accepts clicks right now.
    pub fn playable(&self) -> bool {
        matches!(self.phase, Phase::Playing)
    }
}
