//! Cella - One-Dimensional Cellular Automaton Engine
//!
//! Cella simulates one-dimensional cellular automata: sequences of binary
//! cell rows that evolve generation by generation under a local update rule
//! applied uniformly across a circular array of cells.
//!
//! # Key Characteristics
//!
//! - Bit-packed cell rows for a cheap-to-retain full evolution history
//! - Rules compiled to dense integer-indexed lookup tables
//! - Periodic boundary conditions on both ends of the lattice
//! - History depth 1 (classic elementary rules) or 2 (second-order rules)
//!
//! # Architecture
//!
//! The engine is built around three core components:
//!
//! - **CellRow**: One generation of binary cells, backed by `bitvec`
//! - **Rule**: An immutable, total neighborhood-to-cell lookup table
//! - **Grid**: The growing generation history, advanced by `evolve`
//!
//! # Examples
//!
//! ## Evolving an elementary rule
//!
//! ```
//! use cella::{Grid, History, Rule};
//!
//! let rule = Rule::wolfram(30);
//! let mut grid = Grid::with_size(History::One, 100);
//! grid.initialise(None).unwrap();
//!
//! for _ in 0..50 {
//!     grid.evolve(&rule).unwrap();
//! }
//!
//! // The full history is available for rendering: one row per generation.
//! assert_eq!(grid.state().len(), 51);
//! assert!(grid.state().iter().all(|row| row.len() == 100));
//! ```
//!
//! ## A different rule on every generation
//!
//! ```
//! use cella::{Grid, History, Rule};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut grid = Grid::with_size(History::One, 64);
//! grid.initialise(None).unwrap();
//!
//! for _ in 0..20 {
//!     let rule = Rule::random(History::One, &mut rng);
//!     grid.evolve(&rule).unwrap();
//! }
//!
//! assert_eq!(grid.generation(), 20);
//! ```
//!
//! # Performance
//!
//! Evolution is a straightforward O(size) pass per generation. Rule lookup
//! is a single array index; no string formatting or hashing happens after
//! rule construction. Memory grows without bound as generations accumulate,
//! so a driver that evolves indefinitely should cap its own run length.

// Module declarations
pub mod error;
pub mod grid;
pub mod row;
pub mod rule;

// Re-exports for convenient access
pub use error::{CellaError, Result};
pub use grid::{Grid, DEFAULT_SIZE};
pub use row::CellRow;
pub use rule::{History, Rule};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name
pub const NAME: &str = "Cella";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(ver.contains("Cella"));
        assert!(ver.contains("1.0.0"));
    }

    #[test]
    fn test_re_exports() {
        let _row = CellRow::new(32);
        let _rule = Rule::wolfram(30);
        let _grid = Grid::new(History::One);
        let _result: Result<()> = Ok(());
        assert_eq!(DEFAULT_SIZE, 200);
    }
}
