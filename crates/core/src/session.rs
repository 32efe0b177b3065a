//! Game session module - the stateful controller of one board
//!
//! The session owns the grid, the current turn's selection, the move counter
//! and the elapsed-time clock. All mutation happens in response to three
//! kinds of events, each processed to completion: tile clicks, timer events
//! delivered through [`GameSession::advance`], and resets.
//!
//! Completion is re-checked synchronously at the end of every operation that
//! touches the grid.

use arrayvec::ArrayVec;
use rand::RngCore;
use tracing::{debug, info};

use crate::board::{self, Grid};
use crate::rng::{seeded, BoardRng};
use crate::scheduler::{Scheduler, TimerHandle};
use crate::snapshot::{GameSnapshot, TileFace, TileSnapshot};
use crate::types::{
    format_elapsed, BoardSize, Coord, GameAction, CLOCK_INTERVAL_MS, MISMATCH_DELAY_MS,
};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Created but not dealt yet
    #[default]
    Idle,
    /// Accepting clicks
    Playing,
    /// A mismatched pair is on display; clicks are rejected
    Resolving,
    /// Every tile is revealed; the clock is stopped
    Complete,
}

/// Timer events owned by the session's scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerEvent {
    Clock,
    FlipBack,
}

/// Tiles face-up in the current turn (at most two).
pub type Selection = ArrayVec<Coord, 2>;

/// Complete state of one memory game
#[derive(Debug, Clone)]
pub struct GameSession<R = BoardRng> {
    size: BoardSize,
    grid: Grid,
    selection: Selection,
    move_count: u32,
    seconds_elapsed: u32,
    input_locked: bool,
    complete: bool,
    started: bool,
    /// Monotonic id of the current board (increments on every reset).
    episode_id: u32,
    scheduler: Scheduler<TimerEvent>,
    /// Repeating one-second clock, `None` once stopped.
    clock: Option<TimerHandle>,
    /// Pending flip-back of a mismatched pair.
    flip_back: Option<TimerHandle>,
    rng: R,
}

impl GameSession<BoardRng> {
    /// Create an idle session that will deal boards from `seed`.
    pub fn new(size: BoardSize, seed: u64) -> Self {
        Self::with_rng(size, seeded(seed))
    }
}

impl<R: RngCore> GameSession<R> {
    /// Create an idle session with an explicit random source.
    pub fn with_rng(size: BoardSize, rng: R) -> Self {
        Self {
            size,
            grid: Grid::empty(),
            selection: Selection::new(),
            move_count: 0,
            seconds_elapsed: 0,
            input_locked: false,
            complete: false,
            started: false,
            episode_id: 0,
            scheduler: Scheduler::new(),
            clock: None,
            flip_back: None,
            rng,
        }
    }

    /// Start playing on a prepared grid instead of a shuffled one.
    ///
    /// Later resets deal random boards of the same size from `rng`.
    ///
    /// # Panics
    ///
    /// Panics if a face-up tile's partner is face-down; a grid copied in the
    /// middle of a turn cannot be resumed.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        assert!(
            grid.revealed_in_pairs(),
            "resumed grid has a revealed tile without its pair"
        );
        let size = match BoardSize::new(grid.width(), grid.height()) {
            Ok(size) => size,
            Err(err) => panic!("grid has an unplayable size: {err}"),
        };
        let mut session = Self::with_rng(size, rng);
        session.begin(size, grid);
        session
    }

    /// Deal the first board. Does nothing once started.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.reset(self.size.width(), self.size.height());
    }

    /// Deal a new `width` x `height` board and start over.
    ///
    /// Cancels any pending flip-back and the running clock first, so no
    /// timer from the previous board can touch the new one. Callable in any
    /// phase; always ends in [`Phase::Playing`].
    ///
    /// # Panics
    ///
    /// Panics if the size is not playable (zero dimension, odd cell count, or
    /// more pairs than available symbols).
    pub fn reset(&mut self, width: usize, height: usize) {
        let size = match BoardSize::new(width, height) {
            Ok(size) => size,
            Err(err) => panic!("reset with invalid board size: {err}"),
        };
        let grid = board::generate_board(size, &mut self.rng);
        self.begin(size, grid);
    }

    /// Deal a new board of the current size ("try again").
    pub fn restart(&mut self) {
        self.reset(self.size.width(), self.size.height());
    }

    /// Stop all timers and return to [`Phase::Idle`].
    pub fn teardown(&mut self) {
        self.cancel_timers();
        self.grid = Grid::empty();
        self.selection.clear();
        self.input_locked = false;
        self.complete = false;
        self.started = false;
        debug!(episode = self.episode_id, "session torn down");
    }

    fn begin(&mut self, size: BoardSize, grid: Grid) {
        self.cancel_timers();

        self.size = size;
        self.grid = grid;
        self.selection.clear();
        self.move_count = 0;
        self.seconds_elapsed = 0;
        self.input_locked = false;
        self.complete = false;
        self.started = true;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.clock = Some(
            self.scheduler
                .schedule_repeating(CLOCK_INTERVAL_MS, TimerEvent::Clock),
        );

        info!(episode = self.episode_id, size = %size, "new board dealt");
        self.refresh_completion();
    }

    fn cancel_timers(&mut self) {
        if let Some(handle) = self.flip_back.take() {
            if self.scheduler.cancel(handle) {
                debug!(episode = self.episode_id, "cancelled pending flip-back");
            }
        }
        if let Some(handle) = self.clock.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Reveal the tile at `coord`.
    ///
    /// Returns false without touching any state if the session is idle, input
    /// is locked, or the tile is already face-up. Selecting the second tile
    /// of a turn resolves the turn before this returns.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the board.
    pub fn on_tile_click(&mut self, coord: Coord) -> bool {
        if !self.started {
            return false;
        }
        assert!(
            self.grid.contains(coord),
            "tile click at {coord} is outside the {} board",
            self.size
        );
        if self.input_locked || self.grid.tile(coord).revealed {
            return false;
        }

        self.grid.tile_mut(coord).revealed = true;
        self.move_count += 1;
        self.selection.push(coord);

        if self.selection.is_full() {
            self.resolve_selection();
        }

        self.refresh_completion();
        true
    }

    fn resolve_selection(&mut self) {
        let (first, second) = (self.selection[0], self.selection[1]);

        if self.grid.tile(first).symbol == self.grid.tile(second).symbol {
            debug!(%first, %second, moves = self.move_count, "pair matched");
            self.selection.clear();
            return;
        }

        debug!(%first, %second, delay_ms = MISMATCH_DELAY_MS, "mismatch, flipping back");
        self.input_locked = true;
        self.flip_back = Some(
            self.scheduler
                .schedule_once(MISMATCH_DELAY_MS, TimerEvent::FlipBack),
        );
    }

    fn flip_back_mismatch(&mut self) {
        self.flip_back = None;
        for coord in self.selection.drain(..) {
            self.grid.tile_mut(coord).revealed = false;
        }
        self.input_locked = false;
        debug!(episode = self.episode_id, "mismatch flipped back");
        self.refresh_completion();
    }

    fn refresh_completion(&mut self) {
        let complete = self.grid.all_revealed();
        if complete && !self.complete {
            if let Some(handle) = self.clock.take() {
                self.scheduler.cancel(handle);
            }
            info!(
                episode = self.episode_id,
                moves = self.move_count,
                elapsed = %format_elapsed(self.seconds_elapsed),
                "board cleared"
            );
        }
        self.complete = complete;
    }

    /// One second of play has passed.
    ///
    /// Ignored while idle or after completion. Normally delivered by the
    /// session's own clock through [`Self::advance`].
    pub fn on_timer_tick(&mut self) -> bool {
        if !self.started || self.complete {
            return false;
        }
        self.seconds_elapsed += 1;
        true
    }

    /// Advance session time by `elapsed_ms`, firing due timers in order.
    pub fn advance(&mut self, elapsed_ms: u32) {
        let until = self.scheduler.now_ms() + elapsed_ms as u64;
        while let Some((handle, event)) = self.scheduler.pop_due(until) {
            match event {
                TimerEvent::Clock if self.clock == Some(handle) => {
                    self.on_timer_tick();
                }
                TimerEvent::FlipBack if self.flip_back == Some(handle) => {
                    self.flip_back_mismatch();
                }
                _ => {
                    debug!(?event, "ignoring timer from a replaced board");
                }
            }
        }
        self.scheduler.advance_to(until);
    }

    /// Apply an input action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Click(coord) => self.on_tile_click(coord),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::Idle
        } else if self.complete {
            Phase::Complete
        } else if self.input_locked {
            Phase::Resolving
        } else {
            Phase::Playing
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> &[Coord] {
        &self.selection
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn seconds_elapsed(&self) -> u32 {
        self.seconds_elapsed
    }

    /// Elapsed time as shown to the player, e.g. `"2m 5s"`.
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.seconds_elapsed)
    }

    pub fn input_locked(&self) -> bool {
        self.input_locked
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Whether the elapsed-time clock is still running
    pub fn clock_running(&self) -> bool {
        self.clock.is_some_and(|h| self.scheduler.is_pending(h))
    }

    /// Whether a mismatched pair is waiting to flip back
    pub fn flip_back_pending(&self) -> bool {
        self.flip_back.is_some_and(|h| self.scheduler.is_pending(h))
    }

    /// Pairs found so far: face-up tiles outside the current turn, halved.
    pub fn pairs_found(&self) -> usize {
        (self.grid.revealed_count() - self.selection.len()) / 2
    }

    pub fn total_pairs(&self) -> usize {
        self.grid.len() / 2
    }

    fn face_of(&self, coord: Coord, revealed: bool) -> TileFace {
        if !revealed {
            TileFace::Hidden
        } else if self.selection.contains(&coord) {
            TileFace::Selected
        } else {
            TileFace::Matched
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.tiles.clear();
        out.tiles.extend(self.grid.iter().map(|(coord, tile)| TileSnapshot {
            symbol: tile.symbol,
            face: self.face_of(coord, tile.revealed),
        }));
        out.phase = self.phase();
        out.episode_id = self.episode_id;
        out.move_count = self.move_count;
        out.seconds_elapsed = self.seconds_elapsed;
        out.input_locked = self.input_locked;
        out.pairs_found = self.pairs_found();
        out.total_pairs = self.total_pairs();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    const A: Symbol = Symbol('a');
    const B: Symbol = Symbol('b');

    fn scripted() -> GameSession {
        GameSession::with_grid(Grid::from_rows(&[[A, B], [B, A]]), seeded(1))
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::new(BoardSize::default(), 42);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.grid().is_empty());
        assert!(!session.is_complete());
        assert!(!session.clock_running());
        assert_eq!(session.episode_id(), 0);
    }

    #[test]
    fn test_idle_session_ignores_clicks_and_ticks() {
        let mut session = GameSession::new(BoardSize::default(), 42);
        assert!(!session.on_tile_click(Coord::new(0, 0)));
        assert!(!session.on_timer_tick());
        session.advance(5000);
        assert_eq!(session.seconds_elapsed(), 0);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_start_deals_once() {
        let mut session = GameSession::new(BoardSize::default(), 42);
        session.start();
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.grid().len(), 30);
        assert!(session.clock_running());
        let dealt = session.grid().clone();

        session.start();
        assert_eq!(session.grid(), &dealt);
        assert_eq!(session.episode_id(), 1);
    }

    #[test]
    fn test_phase_follows_turns() {
        let mut session = scripted();
        assert_eq!(session.phase(), Phase::Playing);

        session.on_tile_click(Coord::new(0, 0));
        assert_eq!(session.phase(), Phase::Playing);

        session.on_tile_click(Coord::new(0, 1));
        assert_eq!(session.phase(), Phase::Resolving);
        assert!(session.flip_back_pending());

        session.advance(MISMATCH_DELAY_MS);
        assert_eq!(session.phase(), Phase::Playing);
        assert!(!session.flip_back_pending());
    }

    #[test]
    fn test_flip_back_waits_full_delay() {
        let mut session = scripted();
        session.on_tile_click(Coord::new(0, 0));
        session.on_tile_click(Coord::new(0, 1));

        session.advance(MISMATCH_DELAY_MS - 1);
        assert!(session.input_locked());
        assert!(session.grid().tile(Coord::new(0, 0)).revealed);

        session.advance(1);
        assert!(!session.input_locked());
        assert!(!session.grid().tile(Coord::new(0, 0)).revealed);
        assert!(!session.grid().tile(Coord::new(0, 1)).revealed);
    }

    #[test]
    fn test_teardown_stops_timers() {
        let mut session = scripted();
        session.on_tile_click(Coord::new(0, 0));
        session.on_tile_click(Coord::new(0, 1));
        session.teardown();

        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.clock_running());
        assert!(!session.flip_back_pending());
        session.advance(10_000);
        assert_eq!(session.seconds_elapsed(), 0);
    }

    #[test]
    fn test_restart_action_deals_same_size() {
        let mut session = scripted();
        assert!(session.apply_action(GameAction::Restart));
        assert_eq!(session.episode_id(), 2);
        assert_eq!(session.grid().width(), 2);
        assert_eq!(session.grid().height(), 2);
        assert_eq!(session.grid().revealed_count(), 0);
    }

    #[test]
    fn test_pairs_found_excludes_open_turn() {
        let mut session = scripted();
        session.on_tile_click(Coord::new(0, 0));
        session.on_tile_click(Coord::new(1, 1));
        assert_eq!(session.pairs_found(), 1);

        session.on_tile_click(Coord::new(0, 1));
        assert_eq!(session.pairs_found(), 1);
        assert_eq!(session.total_pairs(), 2);
    }

    #[test]
    fn test_snapshot_marks_faces() {
        let mut session = scripted();
        session.on_tile_click(Coord::new(0, 0));
        session.on_tile_click(Coord::new(1, 1));
        session.on_tile_click(Coord::new(0, 1));

        let snap = session.snapshot();
        assert_eq!(snap.width, 2);
        assert_eq!(snap.tile(0, 0).unwrap().face, TileFace::Matched);
        assert_eq!(snap.tile(1, 1).unwrap().face, TileFace::Matched);
        assert_eq!(snap.tile(0, 1).unwrap().face, TileFace::Selected);
        assert_eq!(snap.tile(1, 0).unwrap().face, TileFace::Hidden);
        assert_eq!(snap.move_count, 3);
        assert_eq!(snap.pairs_found, 1);
        assert!(snap.playable());
    }

    #[test]
    fn test_resumed_board_completes_and_stops_clock() {
        let grid = Grid::from_rows(&[[A, B], [B, A]])
            .with_revealed(&[Coord::new(0, 0), Coord::new(1, 1)]);
        let mut session = GameSession::with_grid(grid, seeded(1));
        assert_eq!(session.pairs_found(), 1);

        session.on_tile_click(Coord::new(0, 1));
        session.on_tile_click(Coord::new(1, 0));
        assert_eq!(session.phase(), Phase::Complete);
        assert!(!session.clock_running());
        assert!(!session.flip_back_pending());
    }

    #[test]
    #[should_panic(expected = "without its pair")]
    fn test_with_grid_rejects_an_open_turn() {
        let mut session = scripted();
        session.on_tile_click(Coord::new(0, 0));
        GameSession::with_grid(session.grid().clone(), seeded(2));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_bounds_click_panics() {
        let mut session = scripted();
        session.on_tile_click(Coord::new(2, 0));
    }

    #[test]
    #[should_panic(expected = "invalid board size")]
    fn test_reset_with_odd_board_panics() {
        let mut session = scripted();
        session.reset(3, 3);
    }
}
