//! Render the full history of a single elementary rule as ASCII art.
//!
//! Run with `cargo run --example rule30`. Pass a rule number to render a
//! different rule, e.g. `cargo run --example rule30 -- 110`.

use anyhow::Result;
use cella::{Grid, History, Rule};

fn main() -> Result<()> {
    let index: u8 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 30,
    };

    let rule = Rule::wolfram(index);
    let mut grid = Grid::with_size(History::One, 79);
    grid.initialise(None)?;

    for _ in 0..40 {
        grid.evolve(&rule)?;
    }

    println!("rule {}", index);
    for row in grid.state() {
        let line: String = row.cells().map(|c| if c == 1 { '#' } else { ' ' }).collect();
        println!("{}", line);
    }

    Ok(())
}
