//! Errors for parsing or building positions from untrusted input.
//!
//! Engine operations themselves are total and never return these.

use thiserror::Error;

use crate::Cell;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A cell holds something other than 0 or a power of two up to `MAX_TILE`
    #[error("invalid tile {value} at row {row}, column {col} (must be 0 or a power of two from 2 to 131072)")]
    InvalidTile { row: usize, col: usize, value: Cell },

    /// Wrong number of rows, or a row with the wrong number of cells
    #[error("expected 4 rows of 4 cells, found {found} in {what}")]
    WrongShape { what: String, found: usize },

    /// A cell could not be read as an integer
    #[error("cannot read {token:?} as a tile value")]
    InvalidNumber { token: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown direction {0:?} (expected up, down, left or right)")]
pub struct ParseDirectionError(pub String);
