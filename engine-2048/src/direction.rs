use std::str::FromStr;

use crate::{error::ParseDirectionError, GRID_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Right = 2,
    Left = 3,
}

impl Direction {
    pub fn iter() -> impl Iterator<Item = Self> {
        [Self::Up, Self::Down, Self::Right, Self::Left].into_iter()
    }

    /// Coordinates of line `index` in processing order, leading edge first.
    ///
    /// For `Left` and `Right` a line is a row, for `Up` and `Down` a column.
    pub fn line(self, index: usize) -> [(usize, usize); GRID_SIZE] {
        debug_assert!(index < GRID_SIZE);

        let last = GRID_SIZE - 1;

        std::array::from_fn(|step| match self {
            Self::Left => (index, step),
            Self::Right => (index, last - step),
            Self::Up => (step, index),
            Self::Down => (last - step, index),
        })
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "up" => Ok(Self::Up),
            "d" | "down" => Ok(Self::Down),
            "r" | "right" => Ok(Self::Right),
            "l" | "left" => Ok(Self::Left),
            _ => Err(ParseDirectionError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_starts_at_leading_edge() {
        assert_eq!(Direction::Left.line(1), [(1, 0), (1, 1), (1, 2), (1, 3)]);
        assert_eq!(Direction::Right.line(1), [(1, 3), (1, 2), (1, 1), (1, 0)]);
        assert_eq!(Direction::Up.line(2), [(0, 2), (1, 2), (2, 2), (3, 2)]);
        assert_eq!(Direction::Down.line(2), [(3, 2), (2, 2), (1, 2), (0, 2)]);
    }

    #[test]
    fn lines_cover_grid_once() {
        for direction in Direction::iter() {
            let mut seen = [[0u8; GRID_SIZE]; GRID_SIZE];

            for index in 0..GRID_SIZE {
                for (row, col) in direction.line(index) {
                    seen[row][col] += 1;
                }
            }

            assert!(seen.iter().flatten().all(|&count| count == 1), "{direction:?}");
        }
    }

    #[test]
    fn parse_direction() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("D".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!(" Left ".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("r".parse::<Direction>(), Ok(Direction::Right));
        assert!("sideways".parse::<Direction>().is_err());
    }
}
