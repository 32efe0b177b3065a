use memory_pairs::core::{seeded, GameSession, GameSnapshot, Grid, TileFace};
use memory_pairs::term::{AnchorY, GameView, Viewport};
use memory_pairs::types::{Coord, Symbol};

const A: Symbol = Symbol('🍎');
const B: Symbol = Symbol('🍌');

fn session() -> GameSession {
    GameSession::with_grid(Grid::from_rows(&[[A, B], [B, A]]), seeded(1))
}

// A 2x2 board with 4x1 tiles and 1-cell gaps is a 13x7 frame; with the
// header and status rows the block is 9 rows tall. In a 40x9 viewport the
// frame starts at (13, 1) and the first tile at (15, 3).
fn viewport() -> Viewport {
    Viewport::new(40, 9)
}

fn screen_text(fb: &memory_pairs::term::FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let fb = GameView::default().render(&session().snapshot(), viewport());

    assert_eq!(fb.get(13, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(13, 7).unwrap().ch, '└');
    assert_eq!(fb.get(25, 7).unwrap().ch, '┘');
}

#[test]
fn term_view_hides_symbols_until_revealed() {
    let fb = GameView::default().render(&session().snapshot(), viewport());
    let text = screen_text(&fb);
    assert!(!text.contains('🍎'));
    assert!(!text.contains('🍌'));
}

#[test]
fn term_view_draws_revealed_symbol_as_wide_glyph() {
    let mut s = session();
    s.on_tile_click(Coord::new(0, 0));
    let fb = GameView::default().render(&s.snapshot(), viewport());

    // Centered in the 4-wide tile: glyph at column 16, continuation at 17.
    assert_eq!(fb.get(16, 3).unwrap().ch, '🍎');
    assert!(fb.get(17, 3).unwrap().is_continuation());
    assert!(fb.row_text(3).contains('🍎'));
}

#[test]
fn term_view_mismatch_uses_a_different_color_than_selection() {
    let mut s = session();
    s.on_tile_click(Coord::new(0, 0));
    let selected = GameView::default().render(&s.snapshot(), viewport());

    s.on_tile_click(Coord::new(0, 1));
    let snap = s.snapshot();
    assert_eq!(snap.tile(0, 0).unwrap().face, TileFace::Selected);
    let mismatch = GameView::default().render(&snap, viewport());

    assert_ne!(
        selected.get(15, 3).unwrap().style.bg,
        mismatch.get(15, 3).unwrap().style.bg
    );
    assert!(mismatch.row_text(8).contains("No match"));
}

#[test]
fn term_view_header_shows_time_moves_and_pairs() {
    let mut s = session();
    s.on_tile_click(Coord::new(0, 0));
    s.on_tile_click(Coord::new(1, 1));
    s.advance(65_000);
    let fb = GameView::default().render(&s.snapshot(), viewport());

    let header = fb.row_text(0);
    assert!(header.contains("TIME 1m 5s"), "header was {header:?}");
    assert!(header.contains("MOVES 2"), "header was {header:?}");
    assert!(header.contains("PAIRS 1/2"), "header was {header:?}");
}

#[test]
fn term_view_draws_cursor_brackets() {
    let view = GameView::default();
    let fb = view.render_with_cursor(&session().snapshot(), Some(Coord::new(0, 0)), viewport());
    assert_eq!(fb.get(14, 3).unwrap().ch, '[');
    assert_eq!(fb.get(19, 3).unwrap().ch, ']');

    let fb = view.render_with_cursor(&session().snapshot(), Some(Coord::new(1, 1)), viewport());
    assert_eq!(fb.get(19, 5).unwrap().ch, '[');
    assert_eq!(fb.get(24, 5).unwrap().ch, ']');
}

#[test]
fn term_view_announces_completion() {
    let mut s = session();
    for coord in [(0, 0), (1, 1), (0, 1), (1, 0)] {
        s.on_tile_click(Coord::new(coord.0, coord.1));
    }
    assert!(s.is_complete());

    let fb = GameView::default().render(&s.snapshot(), viewport());
    let status = fb.row_text(8);
    assert!(status.contains("You did it!"), "status was {status:?}");
    assert!(status.contains("try again"), "status was {status:?}");
}

#[test]
fn term_view_idle_prompts_for_a_board() {
    let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(40, 9));
    assert!(screen_text(&fb).contains("Press r to deal a board"));
}

#[test]
fn term_view_tile_at_maps_cells_to_tiles() {
    let view = GameView::default();
    let snap = session().snapshot();
    let vp = viewport();

    assert_eq!(view.tile_at(&snap, vp, 15, 3), Some(Coord::new(0, 0)));
    assert_eq!(view.tile_at(&snap, vp, 18, 3), Some(Coord::new(0, 0)));
    assert_eq!(view.tile_at(&snap, vp, 20, 3), Some(Coord::new(0, 1)));
    assert_eq!(view.tile_at(&snap, vp, 15, 5), Some(Coord::new(1, 0)));
    assert_eq!(view.tile_at(&snap, vp, 23, 5), Some(Coord::new(1, 1)));

    // Gaps, border and outside the frame.
    assert_eq!(view.tile_at(&snap, vp, 19, 3), None);
    assert_eq!(view.tile_at(&snap, vp, 15, 4), None);
    assert_eq!(view.tile_at(&snap, vp, 13, 3), None);
    assert_eq!(view.tile_at(&snap, vp, 25, 3), None);
    assert_eq!(view.tile_at(&snap, vp, 15, 8), None);
    assert_eq!(view.tile_at(&snap, vp, 0, 0), None);

    assert_eq!(view.tile_at(&GameSnapshot::default(), vp, 15, 3), None);
}

#[test]
fn term_view_can_anchor_top() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&session().snapshot(), Viewport::new(40, 20));
    assert_eq!(fb.get(13, 1).unwrap().ch, '┌');

    let centered = GameView::default().render(&session().snapshot(), Viewport::new(40, 20));
    // (20 - 9) / 2 = 5 rows above the header.
    assert_eq!(centered.get(13, 6).unwrap().ch, '┌');
}

#[test]
fn term_view_render_into_reuses_buffer_across_resizes() {
    let view = GameView::default();
    let snap = session().snapshot();
    let mut fb = memory_pairs::term::FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(40, 9), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 9));

    view.render_into(&snap, Viewport::new(60, 12), &mut fb);
    assert_eq!((fb.width(), fb.height()), (60, 12));
    assert_eq!(fb, view.render(&snap, Viewport::new(60, 12)));
}
