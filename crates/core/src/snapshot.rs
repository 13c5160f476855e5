//! Snapshot module - read-only view for an external renderer
//!
//! A renderer draws from plain copied data and can never mutate engine
//! state. `Engine::snapshot_into` fills a caller-owned snapshot without
//! allocating; `Engine::snapshot` is the convenience form.

use crate::engine::Tetromino;
use crate::types::{Cell, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Resolved view of the active piece: its kind (color) and the 4 absolute
/// grid cells it occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: [(i8, i8); 4],
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            cells: value.cells(),
        }
    }
}

/// One frame of game state, row-major, ready to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cells: [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        self.active = None;
        self.game_over = false;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: None,
            game_over: false,
        }
    }
}
