//! Terminal memory pairs runner (default binary).
//!
//! Tick-paced loop: render, poll input until the next tick, then advance the
//! session's timers by the wall-clock time that actually passed.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use memory_pairs::clock::FrameClock;
use memory_pairs::config::{AppConfig, Args};
use memory_pairs::core::{entropy_seed, GameSession, GameSnapshot};
use memory_pairs::input::{handle_key_event, handle_mouse_event, should_quit, Cursor};
use memory_pairs::logging;
use memory_pairs::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use memory_pairs::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let config = AppConfig::from_env().with_args(Args::parse());
    let size = config.board_size()?;
    if let Some(path) = &config.log_path {
        logging::init(path)?;
    }

    let seed = config.seed.unwrap_or_else(entropy_seed);
    info!(%size, seed, "starting");
    let mut session = GameSession::new(size, seed);
    session.start();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    session.teardown();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    let view = GameView::default();
    let mut cursor = Cursor::new(session.size());
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut clock = FrameClock::new(Instant::now());
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.snapshot_into(&mut snap);
        view.render_into_with_cursor(&snap, Some(cursor.position()), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = clock.until_next(tick_duration, Instant::now());

        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    handle_key_event(key).and_then(|command| cursor.apply(command))
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse)
                    .and_then(|(x, y)| view.tile_at(&snap, viewport, x, y))
                    .map(|coord| {
                        cursor.jump_to(coord);
                        GameAction::Click(coord)
                    }),
                Event::Resize(_, _) => {
                    term.invalidate();
                    None
                }
                _ => None,
            };

            if let Some(action) = action {
                session.apply_action(action);
                if action == GameAction::Restart {
                    cursor.resize(session.size());
                }
            }
        }

        // Tick.
        let now = Instant::now();
        if clock.until_next(tick_duration, now).is_zero() {
            session.advance(clock.take_elapsed_ms(now));
        }
    }
}
