//! Game state module - the engine driving one game
//!
//! Owns the board, the active and next pieces, the counters and the gravity
//! timer. The driver sets intents (move, rotate, soft drop, reset) and calls
//! [`GameState::tick`] with fixed-size time slices; each tick applies the
//! intents, runs gravity, and locks/clears rows when the piece can no longer
//! descend.
//!
//! Between ticks the active piece is written into the board so the renderer
//! can read a single grid. Each tick vacates it first, so collision checks
//! never see the piece colliding with itself.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::{try_rotate, Piece};
use crate::rng::PieceGenerator;
use crate::scoring::{
    crosses_level_boundary, gravity_interval_ns, line_clear_score, next_base_gravity_ns,
};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    next: Piece,
    generator: PieceGenerator,
    score: u32,
    level: u32,
    lines: u32,
    /// Time since the last forced descent
    gravity_timer_ns: u64,
    /// Level gravity
    base_gravity_ns: u64,
    /// Gravity in effect (base, or accelerated while soft dropping)
    gravity_ns: u64,
    soft_drop: bool,
    pending_move: MoveDirection,
    pending_rotate: bool,
    game_over: bool,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_generator(PieceGenerator::new(seed))
    }

    fn with_generator(mut generator: PieceGenerator) -> Self {
        let next = generator.next_piece();
        Self {
            board: Board::new(),
            active: None,
            next,
            generator,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            gravity_timer_ns: 0,
            base_gravity_ns: BASE_GRAVITY_NS,
            gravity_ns: BASE_GRAVITY_NS,
            soft_drop: false,
            pending_move: MoveDirection::None,
            pending_rotate: false,
            game_over: false,
            last_event: None,
        }
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Cumulative cleared lines
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn next_piece(&self) -> Piece {
        self.next
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The 20x10 occupancy grid, active piece included
    pub fn grid(&self) -> &Grid {
        self.board.grid()
    }

    /// Gravity interval currently in effect
    pub fn gravity_interval_ns(&self) -> u64 {
        self.gravity_ns
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = *self.board.grid();
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Queue a one-column shift for the next tick (`None` cancels it)
    pub fn set_move(&mut self, direction: MoveDirection) {
        if self.game_over {
            return;
        }
        self.pending_move = direction;
    }

    /// Queue a clockwise rotation for the next tick
    pub fn request_rotate(&mut self) {
        if self.game_over {
            return;
        }
        self.pending_rotate = true;
    }

    /// Switch accelerated gravity on or off
    pub fn set_soft_drop(&mut self, active: bool) {
        if self.game_over {
            return;
        }
        self.soft_drop = active;
        self.gravity_ns = gravity_interval_ns(self.base_gravity_ns, active);
    }

    /// Start over with an empty board and fresh counters.
    ///
    /// The piece generator keeps running, so the new game gets a freshly
    /// drawn next piece rather than replaying the old sequence.
    pub fn reset(&mut self) {
        let generator = self.generator.clone();
        *self = Self::with_generator(generator);
        debug!(seed = self.seed(), "game reset");
    }

    /// Apply a game action
    ///
    /// Returns true only for actions that change what is on screen right away
    /// (reset); intents become visible on the next tick.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.set_move(MoveDirection::Left),
            GameAction::MoveRight => self.set_move(MoveDirection::Right),
            GameAction::Rotate => self.request_rotate(),
            GameAction::SoftDropStart => self.set_soft_drop(true),
            GameAction::SoftDropStop => self.set_soft_drop(false),
            GameAction::Reset => {
                self.reset();
                return true;
            }
        }
        false
    }

    /// Advance the game by one fixed time slice.
    ///
    /// Returns whether anything visible changed: a spawn, a successful move or
    /// rotation, a descent, or rows removed by a lock.
    pub fn tick(&mut self, elapsed_ns: u64) -> bool {
        if self.game_over {
            return false;
        }

        let mut changed = false;
        let mut piece = match self.active {
            Some(piece) => piece,
            None => match self.spawn_piece() {
                Some(piece) => {
                    changed = true;
                    piece
                }
                None => return false,
            },
        };

        self.board.vacate(&piece.minos());

        if std::mem::take(&mut self.pending_rotate) {
            changed |= self.rotate_piece(&mut piece);
        }

        let direction = std::mem::take(&mut self.pending_move);
        if direction != MoveDirection::None {
            changed |= self.shift_piece(&mut piece, direction.dx());
        }

        let mut blocked = false;
        self.gravity_timer_ns = self.gravity_timer_ns.saturating_add(elapsed_ns);
        if self.gravity_timer_ns >= self.gravity_ns {
            self.gravity_timer_ns = 0;
            let dropped = piece.translated(0, 1);
            if self.board.fits(&dropped.minos()) {
                piece = dropped;
                changed = true;
            } else {
                blocked = true;
            }
        }

        self.board.occupy(&piece.minos());

        if blocked {
            let filled = self.lock_piece(&piece);
            changed |= filled > 0;
            self.active = None;
        } else {
            self.active = Some(piece);
        }

        changed
    }

    /// Promote the next piece to the spawn anchor and draw a new next piece.
    ///
    /// Sets game over instead when the spawn cells are already taken; the
    /// board is left untouched in that case.
    fn spawn_piece(&mut self) -> Option<Piece> {
        let piece = self.next.spawned();
        if self.board.overlaps(&piece.minos()) {
            self.game_over = true;
            info!(
                score = self.score,
                level = self.level,
                lines = self.lines,
                "game over"
            );
            return None;
        }

        self.next = self.generator.next_piece();
        debug!(kind = piece.kind().as_str(), next = self.next.kind().as_str(), "spawn");
        Some(piece)
    }

    /// Rotate clockwise using the kick search.
    ///
    /// When no candidate fits the piece keeps its shape and anchor, but its
    /// orientation index still advances.
    fn rotate_piece(&self, piece: &mut Piece) -> bool {
        let board = &self.board;
        match try_rotate(piece, |x, y| board.is_free(x, y)) {
            Some((rotated, _kick)) => {
                *piece = rotated;
                true
            }
            None => {
                piece.advance_orientation();
                false
            }
        }
    }

    fn shift_piece(&self, piece: &mut Piece, dx: i8) -> bool {
        let shifted = piece.translated(dx, 0);
        if self.board.fits(&shifted.minos()) {
            *piece = shifted;
            true
        } else {
            false
        }
    }

    /// Remove full rows touched by the locked piece and update the counters.
    ///
    /// Rows are visited top to bottom; collapsing a row only moves rows above
    /// it, so the remaining lower rows keep their indices. Returns the number
    /// of rows removed.
    fn lock_piece(&mut self, piece: &Piece) -> u32 {
        let mut rows: ArrayVec<i8, 4> = ArrayVec::new();
        for (_, y) in piece.minos() {
            if !rows.contains(&y) {
                rows.push(y);
            }
        }
        rows.sort_unstable();

        let mut filled = 0u32;
        for y in rows {
            debug_assert!(y >= 0, "locked piece above the bucket");
            let y = y as usize;
            if self.board.is_row_full(y) {
                self.board.clear_row(y);
                filled += 1;
            }
        }

        let points = line_clear_score(filled);
        self.score = self.score.saturating_add(points);

        let level_up = crosses_level_boundary(self.lines, filled);
        self.lines += filled;
        if level_up {
            self.level += 1;
            self.base_gravity_ns = next_base_gravity_ns(self.level, self.base_gravity_ns);
            self.gravity_ns = gravity_interval_ns(self.base_gravity_ns, self.soft_drop);
            info!(
                level = self.level,
                gravity_ms = self.base_gravity_ns / NANOS_PER_MILLI,
                "level up"
            );
        }

        self.last_event = Some(LockEvent {
            lines_filled: filled,
            points,
            level_up,
        });
        debug!(kind = piece.kind().as_str(), filled, points, "lock");

        filled
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
