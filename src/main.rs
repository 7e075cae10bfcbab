use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use engine_2048::{Direction, Game, Grid, ParseDirectionError};
use env_logger::Env;
use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

mod player;

use player::{Player, RandomPlayer, ScriptedPlayer};

/// Headless driver for the 2048 board engine.
#[derive(Parser, Debug)]
struct Args {
    /// Seed for tile spawns and random moves (seeded from entropy if omitted)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Starting position, rows separated by '/', e.g. "2 . . 2/. . . ./. . . ./4 . . ."
    #[arg(long, value_name = "GRID")]
    grid: Option<Grid>,
    /// Moves to apply in order, e.g. "left,up,r,d"
    #[arg(long, value_name = "LIST", conflicts_with = "random")]
    moves: Option<String>,
    /// Play random legal moves until the game is over
    #[arg(long)]
    random: bool,
    /// Stop after this many moves
    #[arg(long, value_name = "N")]
    max_moves: Option<usize>,
    /// Once the game is over, restart and print the fresh position
    #[arg(long)]
    restart: bool,
}

fn parse_moves(list: &str) -> Result<Vec<Direction>, ParseDirectionError> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// Feeds moves from `player` into `game` until the player stops, the game
/// is over or `max_moves` have been applied. Returns the number applied.
fn play<R: Rng>(
    game: &mut Game<R>,
    player: &mut dyn Player,
    max_moves: Option<usize>,
) -> usize {
    let mut applied = 0;

    while max_moves.map_or(true, |max| applied < max) && !game.is_terminal() {
        let Some(direction) = player.next_move(game.grid()) else {
            break;
        };

        let outcome = game.make_move(direction);

        if !outcome.changed {
            info!("{direction:?} changed nothing");
        }

        applied += 1;
    }

    applied
}

fn report<R: Rng>(out: &mut impl Write, game: &Game<R>, applied: usize) -> io::Result<()> {
    write!(out, "Score: {}\n{}", game.score(), game.grid())?;
    writeln!(out, "Highest tile: {}", game.grid().highest_tile())?;
    writeln!(out, "Moves: {applied}")?;

    if game.is_terminal() {
        out.write_all(b"Game over\n")?;
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut game = match args.grid {
        Some(grid) => Game::from_parts(grid, 0, rng),
        None => Game::new(rng),
    };

    let mut player: Box<dyn Player> = if args.random {
        let rng = ChaCha8Rng::from_rng(game.rng_mut()).context("failed to seed move picker")?;

        Box::new(RandomPlayer::new(rng))
    } else {
        let moves = parse_moves(args.moves.as_deref().unwrap_or_default())?;

        Box::new(ScriptedPlayer::new(moves))
    };

    let applied = play(&mut game, player.as_mut(), args.max_moves);

    let mut stdout = io::stdout().lock();
    report(&mut stdout, &game, applied)?;

    if args.restart {
        if game.is_terminal() {
            game.restart();

            stdout.write_all(b"\nRestarted\n")?;
            report(&mut stdout, &game, 0)?;
        } else {
            warn!("--restart ignored: the game is not over");
        }
    }

    Ok(())
}
