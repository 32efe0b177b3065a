//! Board module - the grid of tiles and its generator
//!
//! The grid is `height` rows by `width` columns stored as a flat row-major
//! vector. Coordinates are `(row, col)`, row 0 at the top.
//! Every symbol on a generated grid appears on exactly two tiles.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{BoardSize, Coord, Symbol};

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub revealed: bool,
    pub symbol: Symbol,
}

impl Tile {
    /// A face-down tile
    pub const fn hidden(symbol: Symbol) -> Self {
        Self {
            revealed: false,
            symbol,
        }
    }
}

/// The game grid - `height` rows x `width` columns using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of tiles, row-major order (row * width + col)
    tiles: Vec<Tile>,
}

impl Grid {
    /// A grid with no tiles (a session that has not been started yet).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a face-down grid from explicit rows of symbols.
    ///
    /// Panics unless the rows form a non-empty rectangle in which every
    /// symbol appears exactly twice.
    pub fn from_rows<Row: AsRef<[Symbol]>>(rows: &[Row]) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        assert!(width > 0 && height > 0, "grid must not be empty");
        assert!(
            rows.iter().all(|r| r.as_ref().len() == width),
            "grid rows must all have the same length"
        );

        let tiles = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().copied().map(Tile::hidden))
            .collect();
        let grid = Self {
            width,
            height,
            tiles,
        };
        assert!(
            grid.has_paired_symbols(),
            "every symbol must appear on exactly two tiles"
        );
        grid
    }

    /// Turn the tiles at `coords` face-up, e.g. to resume a partly solved board.
    ///
    /// Panics if any coordinate is outside the grid, or if a tile is revealed
    /// without its partner: only solved pairs can start face-up.
    pub fn with_revealed(mut self, coords: &[Coord]) -> Self {
        for &coord in coords {
            self.tile_mut(coord).revealed = true;
        }
        assert!(
            self.revealed_in_pairs(),
            "revealed tiles must form matched pairs"
        );
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row >= self.height || coord.col >= self.width {
            return None;
        }
        Some(coord.row * self.width + coord.col)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Get the tile at `coord`, or `None` if out of bounds
    pub fn get(&self, coord: Coord) -> Option<&Tile> {
        self.index(coord).map(|i| &self.tiles[i])
    }

    /// Get the tile at `coord`.
    ///
    /// Panics when `coord` is outside the grid.
    pub fn tile(&self, coord: Coord) -> &Tile {
        match self.index(coord) {
            Some(i) => &self.tiles[i],
            None => panic!(
                "coordinate {coord} is outside the {}x{} grid",
                self.width, self.height
            ),
        }
    }

    pub(crate) fn tile_mut(&mut self, coord: Coord) -> &mut Tile {
        match self.index(coord) {
            Some(i) => &mut self.tiles[i],
            None => panic!(
                "coordinate {coord} is outside the {}x{} grid",
                self.width, self.height
            ),
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // chunks(0) panics; an empty grid simply has no rows.
        self.tiles.chunks(self.width.max(1))
    }

    /// Iterate over every tile with its coordinate, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Tile)> {
        let width = self.width.max(1);
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (Coord::new(i / width, i % width), tile))
    }

    pub fn revealed_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.revealed).count()
    }

    /// True when the grid has tiles and every one of them is face-up.
    pub fn all_revealed(&self) -> bool {
        !self.tiles.is_empty() && self.tiles.iter().all(|t| t.revealed)
    }

    /// True when every face-up tile's partner is face-up too.
    pub fn revealed_in_pairs(&self) -> bool {
        self.tiles.iter().filter(|t| t.revealed).all(|t| {
            self.tiles
                .iter()
                .filter(|other| other.symbol == t.symbol)
                .all(|other| other.revealed)
        })
    }

    /// Check the pairing invariant: each symbol present appears exactly twice.
    pub fn has_paired_symbols(&self) -> bool {
        let mut counts: HashMap<Symbol, usize> = HashMap::with_capacity(self.tiles.len() / 2);
        for tile in &self.tiles {
            *counts.entry(tile.symbol).or_insert(0) += 1;
        }
        counts.values().all(|&n| n == 2)
    }

    pub fn distinct_symbols(&self) -> usize {
        let mut seen: Vec<Symbol> = self.tiles.iter().map(|t| t.symbol).collect();
        seen.sort_by_key(|s| s.0);
        seen.dedup();
        seen.len()
    }
}

/// Generate a shuffled, fully paired, face-down grid.
///
/// Draws `width * height / 2` distinct symbols from `alphabet` and places
/// each on two random cells. Both the symbol draw and the cell order use
/// Fisher-Yates shuffles, so every layout is equally likely.
///
/// # Panics
///
/// Panics if either dimension is zero, the cell count is odd, or
/// `alphabet` has fewer symbols than the board has pairs. These are caller
/// bugs; validate user input with [`BoardSize::new`] first.
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    alphabet: &[Symbol],
    rng: &mut R,
) -> Grid {
    assert!(width > 0 && height > 0, "board dimensions must be non-zero");
    let cells = width * height;
    assert!(cells % 2 == 0, "the size of the board should be even");
    let pairs = cells / 2;
    assert!(
        alphabet.len() >= pairs,
        "alphabet has {} symbols, board needs {}",
        alphabet.len(),
        pairs
    );

    let mut symbols = alphabet.to_vec();
    symbols.shuffle(rng);
    symbols.truncate(pairs);

    let mut coords: Vec<Coord> = (0..cells)
        .map(|i| Coord::new(i / width, i % width))
        .collect();
    coords.shuffle(rng);

    let mut slots: Vec<Option<Tile>> = vec![None; cells];
    for (symbol, pair) in symbols.iter().zip(coords.chunks_exact(2)) {
        for coord in pair {
            slots[coord.row * width + coord.col] = Some(Tile::hidden(*symbol));
        }
    }

    let tiles: Vec<Tile> = slots.into_iter().flatten().collect();
    assert_eq!(tiles.len(), cells, "every cell must receive a symbol");

    Grid {
        width,
        height,
        tiles,
    }
}

/// Generate a grid for a validated size using the default alphabet.
pub fn generate_board<R: Rng + ?Sized>(size: BoardSize, rng: &mut R) -> Grid {
    generate(size.width(), size.height(), &crate::types::SYMBOLS, rng)
}
