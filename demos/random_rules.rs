//! Evolve a grid with a fresh random rule on every generation.
//!
//! Run with `cargo run --example random_rules [seed]`. The run is capped:
//! the engine keeps its whole history in memory, so an unbounded driver is
//! on the hook for its own memory use.

use anyhow::Result;
use cella::{Grid, History, Rule};
use rand::SeedableRng;

const GENERATIONS: usize = 120;

fn main() -> Result<()> {
    let seed: u64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 1,
    };
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let mut grid = Grid::with_size(History::One, 79);
    grid.initialise(None)?;

    for _ in 0..GENERATIONS {
        let rule = Rule::random(History::One, &mut rng);
        grid.evolve(&rule)?;
    }

    println!("seed {}, {} generations", seed, grid.generation());
    for row in grid.state() {
        let line: String = row.cells().map(|c| if c == 1 { '#' } else { ' ' }).collect();
        println!("{}", line);
    }

    Ok(())
}
