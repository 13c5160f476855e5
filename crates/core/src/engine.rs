//! Engine module - the game-state machine
//!
//! Owns the grid and the active piece. Every move and rotation is
//! propose-then-commit: build a candidate [`Tetromino`], test its whole
//! footprint against the grid, and replace the active piece only when every
//! cell is free. A rejected transition leaves the state untouched and is
//! reported as `false`, not as an error.
//!
//! The engine has no notion of wall-clock time. The driver decides the
//! gravity cadence and calls [`Engine::gravity_tick`]; when the piece cannot
//! step down, the tick freezes it into the grid, collapses full rows, and
//! spawns the next piece as one atomic step.

use crate::grid::Grid;
use crate::pieces::{get_shape, PieceShape, SPAWN_POSITION};
use crate::rng::PieceDealer;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, Orientation, PieceKind};

/// Active falling piece
///
/// Plain `Copy` value: transformations build new candidates instead of
/// mutating in place, so legality can be tested before committing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub orientation: Orientation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            orientation: Orientation::North,
            x,
            y,
        }
    }

    /// Get the shape (mino offsets) for the current orientation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.orientation)
    }

    /// Absolute grid cells occupied by the piece
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut cells = self.shape();
        for cell in &mut cells {
            cell.0 += self.x;
            cell.1 += self.y;
        }
        cells
    }

    /// Candidate shifted by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Candidate rotated one quarter turn clockwise, same anchor
    pub fn rotated(&self) -> Self {
        Self {
            orientation: self.orientation.rotate_cw(),
            ..*self
        }
    }

    /// Check that every cell of the footprint is in bounds and empty
    pub fn fits(&self, grid: &Grid) -> bool {
        self.cells().iter().all(|&(x, y)| grid.is_free(x, y))
    }
}

/// Record of the most recent freeze (consumed by observers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Number of rows collapsed by the freeze
    pub lines_cleared: u8,
}

/// The game-state engine: one grid, one active piece, one piece source
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    active: Option<Tetromino>,
    dealer: PieceDealer,
    /// Last freeze record (consumed by observers).
    last_lock: Option<LockEvent>,
    game_over: bool,
}

impl Engine {
    /// Create an engine with a seeded piece source and spawn the first piece
    pub fn new(seed: u32) -> Self {
        let mut engine = Self {
            grid: Grid::new(),
            active: None,
            dealer: PieceDealer::new(seed),
            last_lock: None,
            game_over: false,
        };
        engine.spawn_piece();
        engine
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Absolute cells of the active piece (for rendering)
    pub fn active_cells(&self) -> Option<[(i8, i8); 4]> {
        self.active.map(|piece| piece.cells())
    }

    /// Move the active piece one cell left; false if blocked
    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1, 0)
    }

    /// Move the active piece one cell right; false if blocked
    pub fn move_right(&mut self) -> bool {
        self.try_shift(1, 0)
    }

    /// Rotate one quarter turn clockwise, same anchor
    ///
    /// No wall kicks: a candidate that does not fit is simply dropped.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let candidate = active.rotated();
        if candidate.fits(&self.grid) {
            self.active = Some(candidate);
            return true;
        }
        false
    }

    /// Step the active piece down until blocked; returns rows dropped
    ///
    /// Never freezes - only [`Engine::gravity_tick`] does.
    pub fn soft_drop(&mut self) -> u32 {
        let mut rows = 0;
        while self.move_down() {
            rows += 1;
        }
        rows
    }

    /// Forced downward step; returns whether the piece moved
    ///
    /// When the piece cannot step down it freezes: its cells are written to
    /// the grid at the piece's kind, full rows collapse, and the next piece
    /// spawns. No intermediate state is observable.
    pub fn gravity_tick(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        if self.move_down() {
            return true;
        }
        self.freeze();
        false
    }

    /// Take and clear the record of the most recent freeze
    pub fn take_last_lock(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }

    /// Command dispatch for an external input layer
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::SoftDrop => self.soft_drop() > 0,
        }
    }

    /// Fill a caller-owned snapshot (zero-allocation path)
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.cells);
        out.active = self.active.map(ActiveSnapshot::from);
        out.game_over = self.game_over;
    }

    /// Build a fresh renderer snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }

    /// Try to move the active piece by (dx, dy)
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let candidate = active.shifted(dx, dy);
        if candidate.fits(&self.grid) {
            self.active = Some(candidate);
            return true;
        }
        false
    }

    fn move_down(&mut self) -> bool {
        self.try_shift(0, 1)
    }

    /// Freeze the active piece, collapse full rows, spawn the next piece
    fn freeze(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        for (x, y) in active.cells() {
            self.grid.set(x, y, Some(active.kind));
        }

        let collapsed = self.grid.collapse_full_rows();
        self.last_lock = Some(LockEvent {
            lines_cleared: collapsed.len() as u8,
        });

        self.spawn_piece();
    }

    /// Spawn a fresh piece from the dealer
    ///
    /// A blocked spawn ends the game: the grid is left untouched and no
    /// active piece exists, so every later operation is a no-op.
    fn spawn_piece(&mut self) -> bool {
        let piece = Tetromino::spawn(self.dealer.draw());
        if piece.fits(&self.grid) {
            self.active = Some(piece);
            true
        } else {
            self.game_over = true;
            self.active = None;
            false
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}
