//! Grid - Owns and advances the full simulation state over discrete time.
//!
//! A `Grid` holds every generation ever computed: an ordered sequence of
//! `CellRow`s that grows by exactly one row per `evolve` call and is never
//! truncated. Retaining the whole history is deliberate, so an external
//! renderer can draw the complete evolution as a 2D image (rows are
//! generations, columns are cell positions). A long-running driver that
//! evolves indefinitely is responsible for bounding its own generation
//! count.
//!
//! # Examples
//!
//! ```
//! use cella::{Grid, History, Rule};
//!
//! let rule = Rule::wolfram(90);
//! let mut grid = Grid::with_size(History::One, 64);
//! grid.initialise(None).unwrap();
//!
//! for _ in 0..32 {
//!     grid.evolve(&rule).unwrap();
//! }
//!
//! assert_eq!(grid.generation(), 32);
//! assert_eq!(grid.state().len(), 33);
//! ```

use crate::error::{CellaError, Result};
use crate::row::CellRow;
use crate::rule::{History, Rule};
use serde::{Deserialize, Serialize};

/// Number of cells per generation when none is specified.
pub const DEFAULT_SIZE: usize = 200;

/// The evolving state of a one-dimensional cellular automaton.
///
/// `size` and `history` are fixed at construction. The state starts as one
/// all-zero generation per unit of history depth; `initialise` seeds those
/// rows, and each `evolve` call appends one new generation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    history: History,
    generation: usize,
    state: Vec<CellRow>,
}

impl Grid {
    /// Create a grid of `DEFAULT_SIZE` cells.
    pub fn new(history: History) -> Self {
        Self::with_size(history, DEFAULT_SIZE)
    }

    /// Create a grid with an explicit cell count.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use cella::{Grid, History};
    ///
    /// let grid = Grid::with_size(History::Two, 100);
    /// assert_eq!(grid.size(), 100);
    /// assert_eq!(grid.generation(), 0);
    /// assert_eq!(grid.state().len(), 2);
    /// ```
    pub fn with_size(history: History, size: usize) -> Self {
        assert!(size > 0, "size must be greater than 0");
        Self {
            size,
            history,
            generation: 0,
            state: vec![CellRow::new(size); history.depth()],
        }
    }

    /// Seed the starting generation(s).
    ///
    /// With no initial condition, a single live cell is placed at the
    /// center index (`size / 2`) of every seed generation. With a supplied
    /// condition, every seed generation becomes a copy of it. Intended to
    /// be called once, before the first `evolve`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInitialCondition` if the supplied sequence does not
    /// have exactly `size` cells, or contains a value other than 0 or 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use cella::{Grid, History};
    ///
    /// let mut grid = Grid::with_size(History::One, 100);
    /// grid.initialise(None).unwrap();
    /// assert_eq!(grid.state()[0].get(50), 1);
    /// assert_eq!(grid.state()[0].count_live(), 1);
    /// ```
    pub fn initialise(&mut self, ic: Option<&[u8]>) -> Result<()> {
        let depth = self.history.depth();
        match ic {
            None => {
                let center = self.size / 2;
                for row in &mut self.state[..depth] {
                    row.set(center, 1);
                }
            }
            Some(cells) => {
                if cells.len() != self.size {
                    return Err(CellaError::InvalidInitialCondition(format!(
                        "expected {} cells, got {}",
                        self.size,
                        cells.len()
                    )));
                }
                let row = CellRow::from_cells(cells)?;
                for slot in &mut self.state[..depth] {
                    *slot = row.clone();
                }
            }
        }
        Ok(())
    }

    /// Advance the state by one generation under `rule`.
    ///
    /// Applies the rule to the most recently computed generation(s),
    /// appends the result, and increments the generation counter. The rule
    /// may differ between calls.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedRule` if the rule's history depth does not
    /// match the grid's, and propagates `UndefinedTransition` from a
    /// non-total rule table.
    pub fn evolve(&mut self, rule: &Rule) -> Result<()> {
        if rule.history() != self.history {
            return Err(CellaError::UnsupportedRule {
                rule: rule.history(),
                grid: self.history,
            });
        }
        let window = &self.state[self.generation..self.generation + self.history.depth()];
        let update = rule.apply(window)?;
        self.state.push(update);
        self.generation += 1;
        Ok(())
    }

    /// Number of cells per generation.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// History depth the grid was built with.
    #[inline]
    pub fn history(&self) -> History {
        self.history
    }

    /// Lattice dimension. Always 1.
    #[inline]
    pub const fn dimension(&self) -> usize {
        1
    }

    /// Index of the most recently computed generation.
    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The full accumulated history, oldest generation first.
    ///
    /// Holds `generation + depth` rows: the seed generation(s) plus one
    /// row per `evolve` call.
    #[inline]
    pub fn state(&self) -> &[CellRow] {
        &self.state
    }

    /// The most recently computed generation.
    #[inline]
    pub fn current(&self) -> &CellRow {
        &self.state[self.state.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_default_size() {
        let grid = Grid::new(History::One);
        assert_eq!(grid.size(), DEFAULT_SIZE);
        assert_eq!(grid.dimension(), 1);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.state().len(), 1);
        assert_eq!(grid.state()[0].count_live(), 0);
    }

    #[test]
    fn test_depth_two_seeds_two_rows() {
        let grid = Grid::with_size(History::Two, 16);
        assert_eq!(grid.state().len(), 2);
        assert_eq!(grid.state()[0].count_live(), 0);
        assert_eq!(grid.state()[1].count_live(), 0);
    }

    #[test]
    fn test_initialise_default_center() {
        let mut grid = Grid::with_size(History::One, 100);
        grid.initialise(None).unwrap();

        let seed = &grid.state()[0];
        assert_eq!(seed.count_live(), 1);
        assert_eq!(seed.get(50), 1);
    }

    #[test]
    fn test_initialise_default_center_depth_two() {
        let mut grid = Grid::with_size(History::Two, 9);
        grid.initialise(None).unwrap();

        for row in grid.state() {
            assert_eq!(row.count_live(), 1);
            assert_eq!(row.get(4), 1);
        }
    }

    #[test]
    fn test_initialise_custom() {
        let mut grid = Grid::with_size(History::One, 5);
        grid.initialise(Some(&[1, 0, 1, 1, 0])).unwrap();
        assert_eq!(grid.state()[0].to_vec(), vec![1, 0, 1, 1, 0]);
    }

    #[test]
    fn test_initialise_wrong_length() {
        let mut grid = Grid::with_size(History::One, 5);
        let err = grid.initialise(Some(&[1, 0, 1])).unwrap_err();
        assert!(matches!(err, CellaError::InvalidInitialCondition(_)));
        assert!(err.to_string().contains("expected 5 cells, got 3"));
    }

    #[test]
    fn test_initialise_non_binary() {
        let mut grid = Grid::with_size(History::One, 3);
        let err = grid.initialise(Some(&[0, 3, 0])).unwrap_err();
        assert!(matches!(err, CellaError::InvalidInitialCondition(_)));
    }

    #[test]
    fn test_evolve_counts() {
        let rule = Rule::wolfram(90);
        let mut grid = Grid::with_size(History::One, 32);
        grid.initialise(None).unwrap();

        for n in 1..=10 {
            grid.evolve(&rule).unwrap();
            assert_eq!(grid.generation(), n);
            assert_eq!(grid.state().len(), n + 1);
            assert_eq!(grid.current().len(), 32);
        }
    }

    #[test]
    fn test_evolve_history_mismatch() {
        let rule = Rule::wolfram(30);
        let mut grid = Grid::with_size(History::Two, 32);
        grid.initialise(None).unwrap();

        let err = grid.evolve(&rule).unwrap_err();
        assert!(matches!(
            err,
            CellaError::UnsupportedRule {
                rule: History::One,
                grid: History::Two,
            }
        ));
    }

    #[test]
    #[should_panic(expected = "size must be greater than 0")]
    fn test_zero_size() {
        Grid::with_size(History::One, 0);
    }
}
