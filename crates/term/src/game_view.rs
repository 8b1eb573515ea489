//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The layout is a fixed 73x22 character screen:
//!
//! ```text
//! LINES CLEARED:    0 <! .  .  .  .  .  .  .  .  .  . !>
//! LEVEL:            1 <! .  .  .  .  .  .  .  .  .  . !> 7: left  9: right
//!   SCORE:       0    <! .  .  .  .  .  .  .  .  .  . !>    8: rotate
//!                     <! .  .  .  .  .  .  .  .  .  . !>   4: speed up
//!                     ...
//!                     <!==============================!>
//!                       \/\/\/\/\/\/\/\/\/\/\/\/\/\/\/
//! ```
//!
//! When the viewport is larger the screen is centred; when it is smaller the
//! screen is clipped at the right and bottom edges.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Width of the fixed layout in columns.
pub const SCREEN_WIDTH: u16 = 73;
/// Height of the fixed layout in rows.
pub const SCREEN_HEIGHT: u16 = 22;

const COUNTER_X: u16 = 15;
const COUNTER_WIDTH: u16 = 4;
const SCORE_X: u16 = 8;
const SCORE_WIDTH: u16 = 8;

const BUCKET_LEFT: u16 = 20;
const BUCKET_INNER: u16 = 22;
const BUCKET_RIGHT: u16 = BUCKET_INNER + 3 * BOARD_WIDTH as u16;
const FLOOR_ROW: u16 = BOARD_HEIGHT as u16;

const PREVIEW_LABEL: (u16, u16) = (10, 9);
const PREVIEW_CENTER: (u16, u16) = (12, 12);

const LEGEND: [(u16, u16, &str); 5] = [
    (55, 1, "7: left  9: right"),
    (58, 2, "8: rotate"),
    (57, 3, "4: speed up"),
    (56, 4, "space - reset"),
    (58, 5, "q: quit"),
];

const GAME_OVER_ROW: u16 = 9;

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

impl Default for Viewport {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

/// Renders snapshots in the classic bucket layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::PLAIN.into_cell(' '));

        let ox = viewport.width.saturating_sub(SCREEN_WIDTH) / 2;
        let oy = viewport.height.saturating_sub(SCREEN_HEIGHT) / 2;

        self.draw_counters(fb, ox, oy, snap);
        self.draw_bucket(fb, ox, oy, snap);
        self.draw_next(fb, ox, oy, snap);
        for (x, y, text) in LEGEND {
            fb.put_str(ox + x, oy + y, text, CellStyle::PLAIN);
        }
        if snap.game_over {
            self.draw_game_over(fb, ox, oy);
        }
    }

    /// Render into a new framebuffer sized to the viewport.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_counters(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, snap: &GameSnapshot) {
        let label = CellStyle::PLAIN;
        let value = CellStyle::BOLD;

        fb.put_str(ox, oy, "LINES CLEARED:", label);
        fb.put_number(ox + COUNTER_X, oy, COUNTER_WIDTH, snap.lines, value);

        fb.put_str(ox, oy + 1, "LEVEL:", label);
        fb.put_number(ox + COUNTER_X, oy + 1, COUNTER_WIDTH, snap.level, value);

        fb.put_str(ox + 2, oy + 2, "SCORE:", label);
        fb.put_number(ox + SCORE_X, oy + 2, SCORE_WIDTH, snap.score, value);
    }

    fn draw_bucket(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, snap: &GameSnapshot) {
        let wall = CellStyle::PLAIN;

        for (y, row) in snap.grid.iter().enumerate() {
            let y = oy + y as u16;
            fb.put_str(ox + BUCKET_LEFT, y, "<!", wall);
            for (x, &occupied) in row.iter().enumerate() {
                let cx = ox + BUCKET_INNER + 3 * x as u16;
                if occupied {
                    fb.put_str(cx, y, "[ ]", CellStyle::BOLD);
                } else {
                    fb.put_str(cx, y, " . ", CellStyle::DIM);
                }
            }
            fb.put_str(ox + BUCKET_RIGHT, y, "!>", wall);
        }

        let floor_y = oy + FLOOR_ROW;
        fb.put_str(ox + BUCKET_LEFT, floor_y, "<!", wall);
        for x in BUCKET_INNER..BUCKET_RIGHT {
            fb.put_char(ox + x, floor_y, '=', wall);
        }
        fb.put_str(ox + BUCKET_RIGHT, floor_y, "!>", wall);

        for i in 0..(BUCKET_RIGHT - BUCKET_INNER) / 2 {
            fb.put_str(ox + BUCKET_INNER + 2 * i, floor_y + 1, "\\/", wall);
        }
    }

    fn draw_next(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, snap: &GameSnapshot) {
        let (lx, ly) = PREVIEW_LABEL;
        fb.put_str(ox + lx, oy + ly, "NEXT", CellStyle::PLAIN);

        let (cx, cy) = PREVIEW_CENTER;
        for (dx, dy) in snap.next.offsets() {
            let x = i32::from(cx) + 3 * i32::from(dx);
            let y = i32::from(cy) + i32::from(dy);
            if x < 0 || y < 0 {
                continue;
            }
            fb.put_str(ox + x as u16, oy + y as u16, "[ ]", CellStyle::BOLD);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, ox: u16, oy: u16) {
        let inner = BUCKET_RIGHT - BUCKET_INNER;
        for (i, text) in [" GAME OVER ", " SPACE: RESET "].into_iter().enumerate() {
            let x = BUCKET_INNER + (inner - text.len() as u16) / 2;
            fb.put_str(ox + x, oy + GAME_OVER_ROW + i as u16, text, CellStyle::BOLD);
        }
    }
}
