//! Rule engine for a 2048-style sliding-tile puzzle.
//!
//! The engine owns a square grid of tile values and a score, applies
//! directional moves that slide and merge tiles, spawns new tiles from an
//! injected random source, and detects terminal positions.

pub mod direction;
pub mod error;
pub mod game;
pub mod grid;
pub mod line;

pub use direction::Direction;
pub use error::{GridError, ParseDirectionError};
pub use game::{Game, MoveOutcome};
pub use grid::{Grid, Spawn};

/// Side length of the grid.
pub const GRID_SIZE: usize = 4;

/// A tile value. `0` is an empty cell, anything else is a power of two from 2 to `MAX_TILE`.
pub type Cell = u32;

/// Points earned from merges; each merge adds the value of the new tile.
pub type Score = u32;

/// Largest tile a 4×4 grid can hold. Two of these never merge, so tile
/// values stay within `Cell`.
pub const MAX_TILE: Cell = 1 << 17;

/// Value of the tile spawned nine times out of ten.
pub const COMMON_TILE: Cell = 2;
/// Value of the tile spawned one time out of ten.
pub const RARE_TILE: Cell = 4;

pub const fn is_valid_cell(cell: Cell) -> bool {
    cell == 0 || (cell >= 2 && cell <= MAX_TILE && cell.is_power_of_two())
}

/// Whether two neighbouring tiles combine when slid together.
pub const fn can_merge(a: Cell, b: Cell) -> bool {
    a != 0 && a == b && a < MAX_TILE
}
