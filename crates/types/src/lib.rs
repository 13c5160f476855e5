//! Shared types - grid dimensions, piece kinds, orientations, commands
//!
//! Pure data structures with no external dependencies, usable in any context
//! (engine, tests, or a renderer/input layer built on top).
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 22 rows (indexed 0-21, top to bottom)
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Orientation, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 22);
//!
//! // Orientations cycle through four quarter turns
//! let o = Orientation::North;
//! assert_eq!(o.rotate_cw(), Orientation::East);
//! assert_eq!(o.rotate_cw().quarter_turns(), 1);
//!
//! // One of each kind exists in PieceKind::ALL
//! assert_eq!(PieceKind::ALL.len(), 7);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (22 rows)
pub const GRID_HEIGHT: u8 = 22;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
///
/// The kind doubles as the color of its frozen cells; the mapping is
/// bijective, so no separate color table exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds in a fixed order, usable for uniform random draws.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Quarter-turn orientation states
///
/// - **North**: Spawn orientation (0 quarter turns)
/// - **East**: Rotated 90° clockwise
/// - **South**: Rotated 180°
/// - **West**: Rotated 270° clockwise
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Orientation;
    ///
    /// assert_eq!(Orientation::North.rotate_cw(), Orientation::East);
    /// assert_eq!(Orientation::East.rotate_cw(), Orientation::South);
    /// assert_eq!(Orientation::South.rotate_cw(), Orientation::West);
    /// assert_eq!(Orientation::West.rotate_cw(), Orientation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// Number of clockwise quarter turns from the spawn orientation
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }
}

/// Discrete commands an input layer can feed the engine
///
/// Each command maps to one engine operation. Gravity is not a command; the
/// driver invokes it directly at its own cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece straight down until it rests on something
    SoftDrop,
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell frozen with the specified piece kind
///
/// Used by the grid as a flat array of cells.
pub type Cell = Option<PieceKind>;
