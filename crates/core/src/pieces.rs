//! Pieces module - shape templates and integer quarter-turn rotation
//!
//! Each kind stores 4 offsets pre-scaled by 2 relative to its rotation
//! center (`(0, 0)`; `(1, 1)` for I and O so their spin stays visually
//! centered). A quarter turn is the exact matrix transform `(x, y) -> (-y, x)`
//! on the scaled offsets; adding the center always lands on even coordinates,
//! so the final halving is exact. No trigonometry, no rounding, no floats.

use crate::types::{Orientation, PieceKind};

/// Offset of a single mino relative to the piece anchor, in grid cells
pub type MinoOffset = (i8, i8);

/// Footprint of a piece - 4 mino offsets from the piece anchor
pub type PieceShape = [MinoOffset; 4];

/// Rotation center, in the same 2x-scaled space as the raw offsets
fn center(kind: PieceKind) -> (i8, i8) {
    match kind {
        PieceKind::I | PieceKind::O => (1, 1),
        _ => (0, 0),
    }
}

/// Raw mino offsets, scaled by 2, relative to the kind's rotation center
fn raw_offsets(kind: PieceKind) -> [(i8, i8); 4] {
    match kind {
        PieceKind::I => [(-3, 1), (-1, 1), (1, 1), (3, 1)],
        PieceKind::O => [(1, 1), (-1, 1), (-1, -1), (1, -1)],
        PieceKind::T => [(-2, 0), (0, 0), (0, 2), (2, 0)],
        PieceKind::S => [(-2, 2), (0, 2), (0, 0), (2, 0)],
        PieceKind::Z => [(-2, 0), (0, 2), (0, 0), (2, 2)],
        PieceKind::J => [(-2, 2), (-2, 0), (0, 0), (2, 0)],
        PieceKind::L => [(2, 2), (-2, 0), (0, 0), (2, 0)],
    }
}

/// Exact integer quarter turn: (x, y) -> (-y, x)
pub fn rotate90((x, y): (i8, i8)) -> (i8, i8) {
    (-y, x)
}

/// Get the shape (mino offsets) for a piece kind and orientation
///
/// Applies `rotate90` to each raw offset once per quarter turn, shifts by the
/// kind's center, and halves back to grid scale. The scaled offsets and the
/// center share parity per kind, so every halving divides an even number.
pub fn get_shape(kind: PieceKind, orientation: Orientation) -> PieceShape {
    let (cx, cy) = center(kind);
    let mut shape = raw_offsets(kind);
    for mino in &mut shape {
        for _ in 0..orientation.quarter_turns() {
            *mino = rotate90(*mino);
        }
        *mino = ((mino.0 + cx) / 2, (mino.1 + cy) / 2);
    }
    shape
}

/// Spawn anchor for new pieces (x, y): top row, near the center column.
/// Every kind's North footprint fits the grid from here.
pub const SPAWN_POSITION: (i8, i8) = (4, 0);
