//! Pieces module - tetromino geometry and the clockwise SRS kick search
//!
//! Offsets are relative to each shape's pivot cell with y growing downward, so
//! `(dx, dy) -> (-dy, dx)` turns a shape 90° clockwise on screen. The I piece
//! pivots on the centre of its 4x1 bar rather than on a cell, so it reads its
//! offsets from a per-orientation table instead.
//!
//! Only clockwise rotation exists; the kick tables are keyed by the
//! orientation the piece had *before* rotating.

use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// Five candidate anchor offsets per pre-rotation orientation
pub type KickTable = [[(i8, i8); 5]; 4];

/// Spawn (orientation 0) offsets for a piece kind
pub fn spawn_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => I_SHAPES[0],
        PieceKind::J => [(-1, -1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::L => [(-1, 0), (0, 0), (1, 0), (1, -1)],
        PieceKind::O => [(-1, -1), (0, -1), (-1, 0), (0, 0)],
        PieceKind::S => [(-1, 0), (0, 0), (0, -1), (1, -1)],
        PieceKind::T => [(-1, 0), (0, 0), (1, 0), (0, -1)],
        PieceKind::Z => [(-1, -1), (0, -1), (0, 0), (1, 0)],
    }
}

/// I piece offsets by orientation.
///
/// ```text
///  0            1            2            3
///  .  .  .  .   .  . [ ] .   .  .  .  .   . [ ] .  .
/// [ ][ ][ ][ ]  .  . [ ] .   .  .  .  .   . [ ] .  .
///  .  .  .  .   .  . [ ] .  [ ][ ][ ][ ]  . [ ] .  .
///  .  .  .  .   .  . [ ] .   .  .  .  .   . [ ] .  .
/// ```
const I_SHAPES: [PieceShape; 4] = [
    [(-2, 0), (-1, 0), (0, 0), (1, 0)],
    [(0, 2), (0, 1), (0, 0), (0, -1)],
    [(-2, 1), (-1, 1), (0, 1), (1, 1)],
    [(-1, 2), (-1, 1), (-1, 0), (-1, -1)],
];

/// Kick candidates shared by J, L, S, T and Z
const JLSTZ_KICKS: KickTable = [
    // 0 -> 1
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 1 -> 2
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 2 -> 3
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 3 -> 0
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
];

/// Kick candidates for the I piece
const I_KICKS: KickTable = [
    // 0 -> 1
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // 1 -> 2
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // 2 -> 3
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // 3 -> 0
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
];

/// Get the kick table for a piece kind.
///
/// O never changes shape, so it has none.
pub fn kick_table(kind: PieceKind) -> Option<&'static KickTable> {
    match kind {
        PieceKind::O => None,
        PieceKind::I => Some(&I_KICKS),
        _ => Some(&JLSTZ_KICKS),
    }
}

/// A tetromino: fixed kind, mutable anchor and orientation.
///
/// The offsets are stored rather than derived from the orientation because a
/// rotation whose kick search fails still advances the orientation while the
/// shape stays put (see [`Piece::advance_orientation`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    orientation: u8,
    pub x: i8,
    pub y: i8,
    offsets: PieceShape,
}

impl Piece {
    /// Create a piece in orientation 0 anchored at the origin
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            orientation: 0,
            x: 0,
            y: 0,
            offsets: spawn_shape(kind),
        }
    }

    pub fn i() -> Self {
        Self::new(PieceKind::I)
    }

    pub fn j() -> Self {
        Self::new(PieceKind::J)
    }

    pub fn l() -> Self {
        Self::new(PieceKind::L)
    }

    pub fn o() -> Self {
        Self::new(PieceKind::O)
    }

    pub fn s() -> Self {
        Self::new(PieceKind::S)
    }

    pub fn t() -> Self {
        Self::new(PieceKind::T)
    }

    pub fn z() -> Self {
        Self::new(PieceKind::Z)
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Orientation index in 0..4
    pub fn orientation(&self) -> u8 {
        self.orientation
    }

    /// Anchor-relative offsets of the four minos
    pub fn offsets(&self) -> PieceShape {
        self.offsets
    }

    /// Same piece moved to the given anchor
    pub fn at(self, x: i8, y: i8) -> Self {
        Self { x, y, ..self }
    }

    /// Same piece moved to the spawn anchor
    pub fn spawned(self) -> Self {
        self.at(SPAWN_X, SPAWN_Y)
    }

    /// Same piece shifted by (dx, dy)
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Rotate 90° clockwise about the pivot, ignoring the board
    pub fn rotate(&mut self) {
        self.orientation = (self.orientation + 1) % 4;
        match self.kind {
            PieceKind::O => {}
            PieceKind::I => self.offsets = I_SHAPES[self.orientation as usize],
            _ => {
                for mino in &mut self.offsets {
                    *mino = (-mino.1, mino.0);
                }
            }
        }
    }

    /// Copy of this piece rotated once
    pub fn rotated(&self) -> Self {
        let mut piece = *self;
        piece.rotate();
        piece
    }

    /// Advance the orientation index without touching the shape.
    ///
    /// This is what a rotate intent leaves behind when every kick candidate is
    /// blocked: the shape and anchor roll back, the orientation does not. The
    /// next rotation then starts from the advanced index.
    pub(crate) fn advance_orientation(&mut self) {
        self.orientation = (self.orientation + 1) % 4;
    }

    /// Absolute board cells (anchor + offsets)
    pub fn minos(&self) -> PieceShape {
        self.offsets.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Try to rotate a piece clockwise with wall kicks.
///
/// The piece is rotated at its current anchor, then each candidate offset for
/// its pre-rotation orientation is tried in table order. Returns the placed
/// piece and the accepted offset, or `None` when every candidate is blocked.
pub fn try_rotate(piece: &Piece, is_free: impl Fn(i8, i8) -> bool) -> Option<(Piece, (i8, i8))> {
    let rotated = piece.rotated();
    let kicks: &[(i8, i8)] = match kick_table(piece.kind) {
        Some(table) => &table[piece.orientation as usize],
        None => &[(0, 0)],
    };

    for &(dx, dy) in kicks {
        let candidate = rotated.translated(dx, dy);
        if candidate.minos().iter().all(|&(x, y)| is_free(x, y)) {
            return Some((candidate, (dx, dy)));
        }
    }

    None
}
