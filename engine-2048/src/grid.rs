use std::{array, fmt, str::FromStr};

use rand::Rng;

use crate::{
    can_merge, direction::Direction, error::GridError, is_valid_cell, line::slide_line, Cell,
    Score, COMMON_TILE, GRID_SIZE, RARE_TILE,
};

/// A square grid of tile values, indexed `[row][col]` from the top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

/// Where a tile was spawned and with which value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Cell,
}

impl Grid {
    pub const fn empty() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    pub fn from_rows(rows: [[Cell; GRID_SIZE]; GRID_SIZE]) -> Result<Self, GridError> {
        for (row, cells) in rows.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if !is_valid_cell(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
            }
        }

        Ok(Self { cells: rows })
    }

    pub const fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    pub const fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells[row][col] == 0)
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell == 0).count()
    }

    pub fn highest_tile(&self) -> Cell {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values. Moves preserve it; only spawns increase it.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&cell| u64::from(cell)).sum()
    }

    /// Applies a move to every line without spawning, returning the new
    /// grid and the score gained from merges.
    pub fn slide(&self, direction: Direction) -> (Self, Score) {
        let mut grid = *self;
        let mut score = 0;

        for index in 0..GRID_SIZE {
            let coords = direction.line(index);
            let mut line = coords.map(|(row, col)| grid.cells[row][col]);

            score += slide_line(&mut line);

            for ((row, col), cell) in coords.into_iter().zip(line) {
                grid.cells[row][col] = cell;
            }
        }

        (grid, score)
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        self.slide(direction).0 != *self
    }

    fn has_adjacent_pair(&self) -> bool {
        let row_pair = |cells: &[[Cell; GRID_SIZE]; GRID_SIZE]| {
            cells
                .iter()
                .any(|row| row.windows(2).any(|pair| can_merge(pair[0], pair[1])))
        };

        row_pair(&self.cells) || row_pair(&self.transpose().cells)
    }

    /// True when the grid is full and no two orthogonal neighbours are equal
    /// (tiles at [`MAX_TILE`](crate::MAX_TILE) never count as a pair).
    pub fn is_terminal(&self) -> bool {
        self.count_empty() == 0 && !self.has_adjacent_pair()
    }

    /// Rotates the grid a quarter turn clockwise.
    pub fn rotate_cw(&self) -> Self {
        let last = GRID_SIZE - 1;

        Self {
            cells: array::from_fn(|row| array::from_fn(|col| self.cells[last - col][row])),
        }
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        Self {
            cells: array::from_fn(|row| array::from_fn(|col| self.cells[col][row])),
        }
    }

    /// Reverses every row.
    pub fn mirror(&self) -> Self {
        let last = GRID_SIZE - 1;

        Self {
            cells: array::from_fn(|row| array::from_fn(|col| self.cells[row][last - col])),
        }
    }

    /// Places a 2 (nine times in ten) or a 4 on a uniformly chosen empty cell.
    ///
    /// A full grid is left unchanged and `None` is returned.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Spawn> {
        let slot_count = self.count_empty();

        if slot_count == 0 {
            return None;
        }

        let rand = rng.gen_range(0..(slot_count * 10));

        let slot_idx = rand / 10;
        let value = if rand % 10 == 0 { RARE_TILE } else { COMMON_TILE };

        let (row, col) = self.empty_cells().nth(slot_idx)?;
        self.cells[row][col] = value;

        Some(Spawn { row, col, value })
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses rows separated by `/` or newlines, cells by `,` or whitespace.
    /// `.` marks an empty cell, as does `0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != GRID_SIZE {
            return Err(GridError::WrongShape {
                what: "grid".to_owned(),
                found: rows.len(),
            });
        }

        let mut cells = [[0; GRID_SIZE]; GRID_SIZE];

        for (row_idx, row) in rows.into_iter().enumerate() {
            let tokens: Vec<&str> = row
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .collect();

            if tokens.len() != GRID_SIZE {
                return Err(GridError::WrongShape {
                    what: format!("row {row_idx}"),
                    found: tokens.len(),
                });
            }

            for (cell, token) in cells[row_idx].iter_mut().zip(tokens) {
                *cell = match token {
                    "." => 0,
                    _ => token.parse().map_err(|_| GridError::InvalidNumber {
                        token: token.to_owned(),
                    })?,
                };
            }
        }

        Self::from_rows(cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                match *cell {
                    0 => write!(f, "{:>6}", ".")?,
                    _ => write!(f, "{cell:>6}")?,
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
