//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: one header row (time, moves, pairs), the bordered
//! board, one status row. Tiles are `tile_w` x `tile_h` boxes separated by
//! one-cell gaps; the keyboard cursor is drawn as brackets in the gaps.

use crate::core::{GameSnapshot, Phase, TileFace, TileSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Coord;

const GAP_X: u16 = 1;
const GAP_Y: u16 = 1;
const HEADER_ROWS: u16 = 1;
const FOOTER_ROWS: u16 = 1;
const HEADER_MIN_W: u16 = 32;

const FELT: Rgb = Rgb::new(30, 30, 40);
const PLAY_AREA: CellStyle = CellStyle::new(Rgb::new(80, 80, 90), FELT);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const CURSOR: CellStyle = CellStyle::new(Rgb::new(250, 210, 80), FELT).bold();
const LABEL: CellStyle = CellStyle::new(Rgb::LIGHT, Rgb::BLACK).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const HINT: CellStyle = VALUE.dim();
const NO_MATCH: CellStyle = CellStyle::new(Rgb::new(230, 120, 120), Rgb::BLACK);
const WON: CellStyle = CellStyle::new(Rgb::new(120, 230, 140), Rgb::BLACK).bold();

const TILE_FG: Rgb = Rgb::new(235, 235, 235);
const HIDDEN_BG: Rgb = Rgb::new(70, 90, 150);
const SELECTED_BG: Rgb = Rgb::new(190, 190, 200);
const MISMATCH_BG: Rgb = Rgb::new(170, 70, 70);
const MATCHED_BG: Rgb = Rgb::new(70, 140, 90);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board frame placement (border included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the memory board.
pub struct GameView {
    /// Tile width in terminal columns (at least 2 to fit an emoji).
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            tile_w: 4,
            tile_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(2),
            tile_h: tile_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn frame_size(&self, cols: usize, rows: usize) -> (u16, u16) {
        let cols = cols.min(u16::MAX as usize) as u16;
        let rows = rows.min(u16::MAX as usize) as u16;
        let inner_w = cols
            .saturating_mul(self.tile_w)
            .saturating_add(cols.saturating_add(1).saturating_mul(GAP_X));
        let inner_h = rows
            .saturating_mul(self.tile_h)
            .saturating_add(rows.saturating_add(1).saturating_mul(GAP_Y));
        (inner_w.saturating_add(2), inner_h.saturating_add(2))
    }

    fn layout(&self, cols: usize, rows: usize, viewport: Viewport) -> Layout {
        let (w, h) = self.frame_size(cols, rows);
        let block_h = h + HEADER_ROWS + FOOTER_ROWS;
        let x = viewport.width.saturating_sub(w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
            AnchorY::Top => 0,
        };
        Layout {
            x,
            y: top + HEADER_ROWS,
            w,
            h,
        }
    }

    fn tile_origin(&self, layout: Layout, row: usize, col: usize) -> (u16, u16) {
        let x = layout.x + 1 + GAP_X + (col as u16) * (self.tile_w + GAP_X);
        let y = layout.y + 1 + GAP_Y + (row as u16) * (self.tile_h + GAP_Y);
        (x, y)
    }

    /// Which tile is under terminal cell `(x, y)`, if any.
    ///
    /// Gaps and the border hit nothing.
    pub fn tile_at(&self, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) -> Option<Coord> {
        if snap.width == 0 || snap.height == 0 {
            return None;
        }
        let layout = self.layout(snap.width, snap.height, viewport);
        let (ox, oy) = self.tile_origin(layout, 0, 0);
        if x < ox || y < oy {
            return None;
        }

        let (dx, dy) = (x - ox, y - oy);
        let (pitch_x, pitch_y) = (self.tile_w + GAP_X, self.tile_h + GAP_Y);
        if dx % pitch_x >= self.tile_w || dy % pitch_y >= self.tile_h {
            return None;
        }

        let (col, row) = ((dx / pitch_x) as usize, (dy / pitch_y) as usize);
        if col >= snap.width || row >= snap.height {
            return None;
        }
        Some(Coord::new(row, col))
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_cursor(snap, None, viewport, fb);
    }

    pub fn render_into_with_cursor(
        &self,
        snap: &GameSnapshot,
        cursor: Option<Coord>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        if snap.width == 0 || snap.height == 0 {
            let y = viewport.height / 2;
            draw_centered(fb, 0, viewport.width, y, "Press r to deal a board", LABEL);
            return;
        }

        let layout = self.layout(snap.width, snap.height, viewport);

        fb.fill_rect(layout.x + 1, layout.y + 1, layout.w - 2, layout.h - 2, ' ', PLAY_AREA);
        draw_frame(fb, layout);

        // Tiles.
        let mismatch = snap.input_locked;
        for row in 0..snap.height {
            for col in 0..snap.width {
                if let Some(tile) = snap.tile(row, col) {
                    let (x, y) = self.tile_origin(layout, row, col);
                    self.draw_tile(fb, x, y, tile, mismatch);
                }
            }
        }

        if let Some(coord) = cursor.filter(|c| c.row < snap.height && c.col < snap.width) {
            self.draw_cursor(fb, layout, coord);
        }

        self.draw_header(fb, snap, layout);
        self.draw_footer(fb, snap, layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_cursor(
        &self,
        snap: &GameSnapshot,
        cursor: Option<Coord>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_cursor(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, tile: &TileSnapshot, mismatch: bool) {
        let bg = match tile.face {
            TileFace::Hidden => HIDDEN_BG,
            TileFace::Selected if mismatch => MISMATCH_BG,
            TileFace::Selected => SELECTED_BG,
            TileFace::Matched => MATCHED_BG,
        };
        let style = CellStyle::new(TILE_FG, bg);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);

        let cx = x + (self.tile_w - 2) / 2;
        let cy = y + self.tile_h / 2;
        match tile.face {
            TileFace::Hidden => {
                fb.put_str(cx, cy, "░░", style.dim());
            }
            TileFace::Selected | TileFace::Matched => {
                fb.put_wide(cx, cy, tile.symbol.glyph(), style);
            }
        }
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, layout: Layout, coord: Coord) {
        let (x, y) = self.tile_origin(layout, coord.row, coord.col);
        for dy in 0..self.tile_h {
            fb.put_char(x - 1, y + dy, '[', CURSOR);
            fb.put_char(x + self.tile_w, y + dy, ']', CURSOR);
        }
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: Layout) {
        let y = layout.y - HEADER_ROWS;
        let (header_x, header_w) = text_span(layout);

        fb.put_str(header_x, y, "TIME", LABEL);
        let x = put_elapsed(fb, header_x + 5, y, snap.seconds_elapsed, VALUE) + 3;
        fb.put_str(x, y, "MOVES", LABEL);
        fb.put_u32(x + 6, y, snap.move_count, VALUE);

        // Pairs counter, right-aligned.
        let (found, total) = (snap.pairs_found as u32, snap.total_pairs as u32);
        let pairs_w = 6 + digits(found) + 1 + digits(total);
        let px = (header_x + header_w).saturating_sub(pairs_w);
        fb.put_str(px, y, "PAIRS", LABEL);
        let px = fb.put_u32(px + 6, y, found, VALUE);
        fb.put_char(px, y, '/', VALUE);
        fb.put_u32(px + 1, y, total, VALUE);
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: Layout) {
        let y = layout.y + layout.h;
        let (text, style) = match snap.phase {
            Phase::Complete => ("You did it! Press r to try again", WON),
            Phase::Resolving => ("No match", NO_MATCH),
            Phase::Playing | Phase::Idle => ("space reveal · r restart · q quit", HINT),
        };
        let (x, w) = text_span(layout);
        draw_centered(fb, x, w, y, text, style);
    }
}

/// Columns used by the header and status rows. Small boards are narrower
/// than the header, so the span widens around the frame.
fn text_span(layout: Layout) -> (u16, u16) {
    let w = layout.w.max(HEADER_MIN_W);
    let x = (layout.x + layout.w / 2).saturating_sub(w / 2);
    (x, w)
}

fn draw_frame(fb: &mut FrameBuffer, layout: Layout) {
    let Layout { x, y, w, h } = layout;
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);

    for cx in x + 1..right {
        fb.put_char(cx, y, '─', BORDER);
        fb.put_char(cx, bottom, '─', BORDER);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', BORDER);
        fb.put_char(right, cy, '│', BORDER);
    }
    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(right, y, '┐', BORDER);
    fb.put_char(x, bottom, '└', BORDER);
    fb.put_char(right, bottom, '┘', BORDER);
}

/// Same text as `types::format_elapsed`, written without allocating.
/// Returns the column after it.
fn put_elapsed(fb: &mut FrameBuffer, mut x: u16, y: u16, seconds: u32, style: CellStyle) -> u16 {
    if seconds >= 60 {
        x = fb.put_u32(x, y, seconds / 60, style);
        fb.put_char(x, y, 'm', style);
        x += 2;
    }
    x = fb.put_u32(x, y, seconds % 60, style);
    fb.put_char(x, y, 's', style);
    x + 1
}

fn digits(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

fn draw_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let start = x.saturating_add(w.saturating_sub(text_w) / 2);
    fb.put_str(start, y, text, style);
}
