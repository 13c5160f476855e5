//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole game-state machine: the playfield grid, the
//! piece geometry, and the engine that ties them together. It has **zero
//! dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every game rule
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: 10x22 playfield with row collapse
//! - [`pieces`]: shape templates and integer quarter-turn rotation
//! - [`engine`]: active piece, legality checks, gravity, freezing
//! - [`rng`]: seeded piece selection for reproducible games
//! - [`snapshot`]: read-only view for an external renderer
//!
//! # Game Rules
//!
//! - Moves and rotations are propose-then-commit: a candidate piece is built,
//!   its whole footprint is tested, and only a fully free candidate replaces
//!   the active piece. Rejected transitions are silent no-ops.
//! - Rotation has no wall kicks; a blocked rotation is simply dropped.
//! - The engine has no notion of wall-clock time. The driver calls
//!   [`Engine::gravity_tick`](engine::Engine::gravity_tick) at whatever
//!   cadence it wants; a blocked tick freezes the piece, collapses full
//!   rows, and spawns the next piece in one atomic step.
//!
//! # Example
//!
//! ```
//! use blockfall_core::Engine;
//! use blockfall_types::Command;
//!
//! let mut game = Engine::new(12345);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.apply(Command::SoftDrop);
//!
//! // A gravity tick on the rested piece freezes it and spawns the next one.
//! game.gravity_tick();
//! assert!(game.active().is_some() || game.game_over());
//! ```

pub mod engine;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use engine::{Engine, LockEvent, Tetromino};
pub use grid::Grid;
pub use pieces::{get_shape, rotate90, SPAWN_POSITION};
pub use rng::{PieceDealer, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
