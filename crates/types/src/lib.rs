//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable from the core
//! session logic, the input layer and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! A board is `height` rows by `width` columns. Every symbol on the board
//! appears exactly twice, so the cell count must be even and there must be
//! enough symbols in [`SYMBOLS`] to fill half of it. [`BoardSize::new`] is the
//! validating constructor used at the application boundary.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Tick period of the runtime loop (~60 FPS) |
//! | `CLOCK_INTERVAL_MS` | 1000 | Period of the elapsed-time clock |
//! | `MISMATCH_DELAY_MS` | 1000 | How long a mismatched pair stays face-up |
//!
//! # Examples
//!
//! ```
//! use memory_pairs_types::{format_elapsed, BoardSize, Coord};
//!
//! let size = BoardSize::new(4, 3).unwrap();
//! assert_eq!(size.cells(), 12);
//! assert_eq!(size.pairs(), 6);
//! assert!(size.contains(Coord::new(2, 3)));
//! assert!(!size.contains(Coord::new(3, 0)));
//!
//! assert!(BoardSize::new(3, 3).is_err());
//!
//! assert_eq!(format_elapsed(125), "2m 5s");
//! ```

use std::fmt;

/// Runtime loop tick period in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Period of the elapsed-time clock (one second).
pub const CLOCK_INTERVAL_MS: u32 = 1000;

/// Time a mismatched pair stays face-up before flipping back.
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Default board width (columns).
pub const DEFAULT_WIDTH: usize = 6;

/// Default board height (rows).
pub const DEFAULT_HEIGHT: usize = 5;

/// A tile position on the board, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Reasons a requested board size cannot be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardSizeError {
    #[error("board dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },
    #[error("board must have an even number of cells (got {width}x{height})")]
    OddCellCount { width: usize, height: usize },
    #[error("board needs {needed} distinct symbols but only {available} are available")]
    NotEnoughSymbols { needed: usize, available: usize },
}

/// Validated board dimensions.
///
/// Holding a `BoardSize` means the size is playable with the default
/// [`SYMBOLS`] alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    width: usize,
    height: usize,
}

impl BoardSize {
    /// Validate `width` x `height`.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_pairs_types::{BoardSize, BoardSizeError};
    ///
    /// assert!(BoardSize::new(6, 5).is_ok());
    /// assert_eq!(
    ///     BoardSize::new(0, 4),
    ///     Err(BoardSizeError::ZeroDimension { width: 0, height: 4 })
    /// );
    /// assert_eq!(
    ///     BoardSize::new(5, 5),
    ///     Err(BoardSizeError::OddCellCount { width: 5, height: 5 })
    /// );
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self, BoardSizeError> {
        if width == 0 || height == 0 {
            return Err(BoardSizeError::ZeroDimension { width, height });
        }
        let cells = width
            .checked_mul(height)
            .ok_or(BoardSizeError::NotEnoughSymbols {
                needed: usize::MAX,
                available: SYMBOLS.len(),
            })?;
        if cells % 2 != 0 {
            return Err(BoardSizeError::OddCellCount { width, height });
        }
        if cells / 2 > SYMBOLS.len() {
            return Err(BoardSizeError::NotEnoughSymbols {
                needed: cells / 2,
                available: SYMBOLS.len(),
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> usize {
        self.width * self.height
    }

    pub fn pairs(&self) -> usize {
        self.cells() / 2
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Opaque tile content. Two tiles sharing a symbol form a matching pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(pub char);

impl Symbol {
    pub fn glyph(&self) -> char {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default symbol alphabet (food emoji, one code point each).
pub const SYMBOLS: [Symbol; 113] = [
    Symbol('🍇'), Symbol('🍈'), Symbol('🍉'), Symbol('🍊'), Symbol('🍋'), Symbol('🍌'),
    Symbol('🍍'), Symbol('🥭'), Symbol('🍎'), Symbol('🍏'), Symbol('🍐'), Symbol('🍑'),
    Symbol('🍒'), Symbol('🍓'), Symbol('🥝'), Symbol('🍅'), Symbol('🥥'), Symbol('🥑'),
    Symbol('🍆'), Symbol('🥔'), Symbol('🥕'), Symbol('🌽'), Symbol('🥒'), Symbol('🥬'),
    Symbol('🥦'), Symbol('🧄'), Symbol('🧅'), Symbol('🍄'), Symbol('🥜'), Symbol('🌰'),
    Symbol('🍞'), Symbol('🥐'), Symbol('🥖'), Symbol('🥨'), Symbol('🥯'), Symbol('🥞'),
    Symbol('🧇'), Symbol('🧀'), Symbol('🍖'), Symbol('🍗'), Symbol('🥩'), Symbol('🥓'),
    Symbol('🍔'), Symbol('🍟'), Symbol('🍕'), Symbol('🌭'), Symbol('🥪'), Symbol('🌮'),
    Symbol('🌯'), Symbol('🥙'), Symbol('🧆'), Symbol('🥚'), Symbol('🍳'), Symbol('🥘'),
    Symbol('🍲'), Symbol('🥣'), Symbol('🥗'), Symbol('🍿'), Symbol('🧈'), Symbol('🧂'),
    Symbol('🥫'), Symbol('🍱'), Symbol('🍘'), Symbol('🍙'), Symbol('🍚'), Symbol('🍛'),
    Symbol('🍜'), Symbol('🍝'), Symbol('🍠'), Symbol('🍢'), Symbol('🍣'), Symbol('🍤'),
    Symbol('🍥'), Symbol('🥮'), Symbol('🍡'), Symbol('🥟'), Symbol('🥠'), Symbol('🥡'),
    Symbol('🦪'), Symbol('🍦'), Symbol('🍧'), Symbol('🍨'), Symbol('🍩'), Symbol('🍪'),
    Symbol('🎂'), Symbol('🍰'), Symbol('🧁'), Symbol('🥧'), Symbol('🍫'), Symbol('🍬'),
    Symbol('🍭'), Symbol('🍮'), Symbol('🍯'), Symbol('🍼'), Symbol('🥛'), Symbol('☕'),
    Symbol('🍵'), Symbol('🍶'), Symbol('🍾'), Symbol('🍷'), Symbol('🍸'), Symbol('🍹'),
    Symbol('🍺'), Symbol('🍻'), Symbol('🥂'), Symbol('🥃'), Symbol('🥤'), Symbol('🧃'),
    Symbol('🧉'), Symbol('🧊'), Symbol('🥢'), Symbol('🍴'), Symbol('🥄'),
];

/// Cursor movement direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Actions that drive a game session.
///
/// Produced by keyboard/mouse input and consumed by
/// `GameSession::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Reveal the tile at the given coordinate
    Click(Coord),
    /// Start over on a freshly shuffled board of the same size
    Restart,
}

/// Render a duration in whole seconds the way the header shows it.
///
/// # Examples
///
/// ```
/// use memory_pairs_types::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "0s");
/// assert_eq!(format_elapsed(59), "59s");
/// assert_eq!(format_elapsed(60), "1m 0s");
/// assert_eq!(format_elapsed(125), "2m 5s");
/// ```
pub fn format_elapsed(seconds: u32) -> String {
    if seconds < 60 {
        return format!("{}s", seconds);
    }
    format!("{}m {}s", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(CLOCK_INTERVAL_MS, 1000);
        assert_eq!(MISMATCH_DELAY_MS, 1000);
    }

    #[test]
    fn symbols_are_distinct() {
        let unique: HashSet<Symbol> = SYMBOLS.iter().copied().collect();
        assert_eq!(unique.len(), SYMBOLS.len());
    }

    #[test]
    fn default_size_is_playable() {
        let size = BoardSize::default();
        assert_eq!(BoardSize::new(size.width(), size.height()), Ok(size));
        assert_eq!(size.pairs(), 15);
    }

    #[test]
    fn rejects_boards_larger_than_the_alphabet() {
        let err = BoardSize::new(20, 20).unwrap_err();
        assert_eq!(
            err,
            BoardSizeError::NotEnoughSymbols {
                needed: 200,
                available: SYMBOLS.len()
            }
        );
    }

    #[test]
    fn alphabet_covers_the_largest_boards() {
        assert_eq!(SYMBOLS.len(), 113);
        assert!(BoardSize::new(2, 113).is_ok());
        assert!(BoardSize::new(2, 114).is_err());
    }

    #[test]
    fn elapsed_formatting_boundaries() {
        assert_eq!(format_elapsed(0), "0s");
        assert_eq!(format_elapsed(59), "59s");
        assert_eq!(format_elapsed(60), "1m 0s");
        assert_eq!(format_elapsed(125), "2m 5s");
        assert_eq!(format_elapsed(3600), "60m 0s");
    }
}
