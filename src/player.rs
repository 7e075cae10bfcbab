use engine_2048::{Direction, Grid};
use rand::{seq::IteratorRandom, Rng};

pub trait Player {
    /// Picks the next move, or `None` to stop playing.
    fn next_move(&mut self, grid: &Grid) -> Option<Direction>;
}

/// Replays a fixed list of moves, including ones that change nothing.
pub struct ScriptedPlayer {
    moves: std::vec::IntoIter<Direction>,
}

impl ScriptedPlayer {
    pub fn new(moves: Vec<Direction>) -> Self {
        Self {
            moves: moves.into_iter(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn next_move(&mut self, _grid: &Grid) -> Option<Direction> {
        self.moves.next()
    }
}

/// Picks uniformly among the moves that change the grid.
pub struct RandomPlayer<R> {
    rng: R,
}

impl<R> RandomPlayer<R>
where
    R: Rng,
{
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> Player for RandomPlayer<R>
where
    R: Rng,
{
    fn next_move(&mut self, grid: &Grid) -> Option<Direction> {
        Direction::iter()
            .filter(|&direction| grid.can_move(direction))
            .choose(&mut self.rng)
    }
}
