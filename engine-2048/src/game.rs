use log::{debug, info, trace};
use rand::Rng;

use crate::{
    direction::Direction,
    grid::{Grid, Spawn},
    Score,
};

/// Result of [`Game::make_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether any cell moved or merged. A tile is spawned only if so.
    pub changed: bool,
    /// Sum of the tiles created by merges in this move.
    pub merged_score: Score,
    pub spawned: Option<Spawn>,
}

/// A game session: the grid, the score and the random source for spawns.
///
/// State only changes through [`Game::make_move`] and [`Game::restart`].
/// A move is computed on a copy and committed together with its spawn, so
/// a reader never sees a half-applied move.
#[derive(Clone, Debug)]
pub struct Game<R> {
    grid: Grid,
    score: Score,
    rng: R,
}

impl<R> Game<R>
where
    R: Rng,
{
    /// Starts a session with two random tiles on an empty grid.
    pub fn new(rng: R) -> Self {
        let mut game = Self::from_parts(Grid::empty(), 0, rng);
        game.place_opening_tiles();

        game
    }

    /// Resumes a session from a known position.
    pub const fn from_parts(grid: Grid, score: Score, rng: R) -> Self {
        Self { grid, score, rng }
    }

    fn place_opening_tiles(&mut self) {
        let first = self.spawn_random_tile();
        let second = self.spawn_random_tile();

        debug!("opening tiles {first:?} {second:?}");
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn score(&self) -> Score {
        self.score
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Slides every line towards `direction`, then spawns a tile if the
    /// grid changed. A move that changes nothing is a silent no-op.
    pub fn make_move(&mut self, direction: Direction) -> MoveOutcome {
        let (mut new_grid, merged_score) = self.grid.slide(direction);

        if new_grid == self.grid {
            trace!("{direction:?} leaves the grid unchanged");

            return MoveOutcome {
                changed: false,
                merged_score: 0,
                spawned: None,
            };
        }

        let spawned = new_grid.spawn_tile(&mut self.rng);

        self.grid = new_grid;
        self.score = self.score.saturating_add(merged_score);

        debug!(
            "{direction:?}: +{merged_score} (score {}), spawned {spawned:?}",
            self.score
        );

        MoveOutcome {
            changed: true,
            merged_score,
            spawned,
        }
    }

    /// Places one tile on a random empty cell. Does nothing on a full grid.
    pub fn spawn_random_tile(&mut self) -> Option<Spawn> {
        self.grid.spawn_tile(&mut self.rng)
    }

    pub fn is_terminal(&self) -> bool {
        self.grid.is_terminal()
    }

    /// Directions that would change the grid.
    pub fn available_moves(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::iter().filter(|&direction| self.grid.can_move(direction))
    }

    /// Throws away the grid and score and starts a fresh session.
    pub fn restart(&mut self) {
        info!("restarting at score {}", self.score);

        self.grid = Grid::empty();
        self.score = 0;
        self.place_opening_tiles();
    }
}
