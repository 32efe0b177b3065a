//! Keyboard cursor over the board.

use crate::map::KeyCommand;
use crate::types::{BoardSize, Coord, Direction, GameAction};

/// Tile the keyboard is pointing at. Always inside the board it was sized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: Coord,
    size: BoardSize,
}

impl Cursor {
    pub fn new(size: BoardSize) -> Self {
        Self {
            position: Coord::new(0, 0),
            size,
        }
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    /// Fit the cursor to a new board, keeping it in place when possible.
    pub fn resize(&mut self, size: BoardSize) {
        self.size = size;
        self.position = Coord::new(
            self.position.row.min(size.height() - 1),
            self.position.col.min(size.width() - 1),
        );
    }

    /// Move one tile, stopping at the edges.
    pub fn step(&mut self, direction: Direction) {
        let Coord { row, col } = self.position;
        self.position = match direction {
            Direction::Up => Coord::new(row.saturating_sub(1), col),
            Direction::Down => Coord::new((row + 1).min(self.size.height() - 1), col),
            Direction::Left => Coord::new(row, col.saturating_sub(1)),
            Direction::Right => Coord::new(row, (col + 1).min(self.size.width() - 1)),
        };
    }

    /// Put the cursor on a clicked tile.
    pub fn jump_to(&mut self, coord: Coord) {
        if self.size.contains(coord) {
            self.position = coord;
        }
    }

    /// Apply a key command. Returns the game action it produces, if any.
    pub fn apply(&mut self, command: KeyCommand) -> Option<GameAction> {
        match command {
            KeyCommand::Move(direction) => {
                self.step(direction);
                None
            }
            KeyCommand::Reveal => Some(GameAction::Click(self.position)),
            KeyCommand::Restart => Some(GameAction::Restart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(w: usize, h: usize) -> BoardSize {
        BoardSize::new(w, h).unwrap()
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let mut cursor = Cursor::new(size(3, 2));
        cursor.step(Direction::Up);
        cursor.step(Direction::Left);
        assert_eq!(cursor.position(), Coord::new(0, 0));

        for _ in 0..5 {
            cursor.step(Direction::Right);
            cursor.step(Direction::Down);
        }
        assert_eq!(cursor.position(), Coord::new(1, 2));
    }

    #[test]
    fn test_reveal_clicks_cursor_tile() {
        let mut cursor = Cursor::new(size(4, 4));
        assert_eq!(cursor.apply(KeyCommand::Move(Direction::Right)), None);
        assert_eq!(cursor.apply(KeyCommand::Move(Direction::Down)), None);
        assert_eq!(
            cursor.apply(KeyCommand::Reveal),
            Some(GameAction::Click(Coord::new(1, 1)))
        );
        assert_eq!(cursor.apply(KeyCommand::Restart), Some(GameAction::Restart));
    }

    #[test]
    fn test_resize_clamps_position() {
        let mut cursor = Cursor::new(size(6, 5));
        cursor.jump_to(Coord::new(4, 5));
        cursor.resize(size(2, 2));
        assert_eq!(cursor.position(), Coord::new(1, 1));
    }

    #[test]
    fn test_jump_ignores_off_board() {
        let mut cursor = Cursor::new(size(2, 2));
        cursor.jump_to(Coord::new(5, 5));
        assert_eq!(cursor.position(), Coord::new(0, 0));
    }
}
