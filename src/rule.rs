//! Rule - Local update rules mapping neighborhood patterns to cell values.
//!
//! A rule is an immutable, total mapping from every neighborhood pattern to
//! an output cell. The neighborhood of a cell is its left neighbor, itself,
//! and its right neighbor, read from each remembered generation; with
//! history depth 1 that is 3 cells (8 patterns), with depth 2 it is 6 cells
//! (64 patterns, older generation first).
//!
//! Rules constructed from a string-keyed table are compiled once into a
//! dense lookup indexed by the integer encoding of the pattern (first digit
//! is the most significant bit), so no string formatting happens during
//! evolution. The Wolfram numbering of the 256 elementary rules falls out
//! of the same encoding: the output for pattern `p` is bit `p` of the rule
//! index.
//!
//! # Examples
//!
//! ```
//! use cella::{CellRow, History, Rule};
//!
//! // Rule 30, the classic chaotic elementary rule
//! let rule = Rule::wolfram(30);
//! assert_eq!(rule.history(), History::One);
//!
//! let state = CellRow::from_cells(&[0, 0, 1, 0, 0]).unwrap();
//! let next = rule.apply(std::slice::from_ref(&state)).unwrap();
//! assert_eq!(next.to_vec(), vec![0, 1, 1, 1, 0]);
//! ```

use crate::error::{CellaError, Result};
use crate::row::CellRow;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Number of neighborhood cells contributed by one generation.
const NEIGHBORHOOD: usize = 3;

/// How many preceding generations a rule consults.
///
/// The depth is fixed for the lifetime of a rule or grid and the two sides
/// must agree before a rule can evolve a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum History {
    /// The rule reads the most recent generation only.
    One,
    /// The rule reads the two most recent generations, older first.
    Two,
}

impl History {
    /// Number of generations in the rule's window.
    #[inline]
    pub const fn depth(self) -> usize {
        match self {
            History::One => 1,
            History::Two => 2,
        }
    }

    /// Number of cells in one neighborhood pattern.
    #[inline]
    pub const fn window_len(self) -> usize {
        NEIGHBORHOOD * self.depth()
    }

    /// Number of entries a total rule table must have.
    #[inline]
    pub const fn table_len(self) -> usize {
        1 << self.window_len()
    }

    /// Derive the depth from a rule table size, if the size is valid.
    fn from_table_len(len: usize) -> Option<Self> {
        match len {
            8 => Some(History::One),
            64 => Some(History::Two),
            _ => None,
        }
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.depth())
    }
}

/// An immutable local update rule.
///
/// Stateless and reusable: one rule can drive any number of grids, and a
/// grid may be evolved with a different rule on every call as long as the
/// history depths match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    history: History,
    /// Dense lookup, indexed by pattern. `None` marks a gap left by a
    /// malformed or missing key in the source table.
    table: Box<[Option<u8>]>,
}

impl Rule {
    /// Build a rule from a string-keyed table such as
    /// `{"111": 0, "110": 0, ...}`.
    ///
    /// The table must have exactly 8 entries (history depth 1) or exactly
    /// 64 entries (depth 2); the depth is derived from the size. Keys are
    /// fixed-length strings of binary digits, left neighbor first, with the
    /// older generation's triple preceding the newer one at depth 2.
    ///
    /// Keys that do not parse as a pattern of the right length leave their
    /// pattern undefined; the gap surfaces as `UndefinedTransition` when
    /// `apply` first needs it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRule` if the table size is neither 8 nor 64, or if
    /// any output value is not 0 or 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use cella::{History, Rule};
    /// use std::collections::HashMap;
    ///
    /// let mut table = HashMap::new();
    /// for pattern in 0..8u32 {
    ///     // Every neighborhood keeps its own center cell
    ///     let key = format!("{:03b}", pattern);
    ///     let center = ((pattern >> 1) & 1) as u8;
    ///     table.insert(key, center);
    /// }
    ///
    /// let rule = Rule::from_table(&table).unwrap();
    /// assert_eq!(rule.history(), History::One);
    /// ```
    pub fn from_table(table: &HashMap<String, u8>) -> Result<Self> {
        let history = History::from_table_len(table.len()).ok_or_else(|| {
            CellaError::InvalidRule(format!(
                "expected 8 or 64 entries, got {}",
                table.len()
            ))
        })?;

        let mut compiled = vec![None; history.table_len()].into_boxed_slice();
        for (key, &out) in table {
            if out > 1 {
                return Err(CellaError::InvalidRule(format!(
                    "output for \"{}\" is {}, outputs must be 0 or 1",
                    key, out
                )));
            }
            if let Some(pattern) = parse_pattern(key, history.window_len()) {
                compiled[pattern] = Some(out);
            }
        }

        Ok(Self {
            history,
            table: compiled,
        })
    }

    /// Build one of the 256 elementary rules by Wolfram number.
    ///
    /// The output for neighborhood pattern `p` (read as a 3-bit integer,
    /// left neighbor in the high bit) is bit `p` of `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cella::Rule;
    ///
    /// let rule = Rule::wolfram(110);
    /// assert_eq!(rule, Rule::from_bits(110, cella::History::One));
    /// ```
    pub fn wolfram(index: u8) -> Self {
        Self::from_bits(index as u64, History::One)
    }

    /// Build a total rule from a packed bit index.
    ///
    /// Generalizes the Wolfram numbering to both depths: the output for
    /// pattern `p` is bit `p` of `bits`. Depth 1 uses the low 8 bits,
    /// depth 2 uses all 64.
    pub fn from_bits(bits: u64, history: History) -> Self {
        let table = (0..history.table_len())
            .map(|p| Some(((bits >> p) & 1) as u8))
            .collect();
        Self { history, table }
    }

    /// Build a uniformly random total rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use cella::{History, Rule};
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let rule = Rule::random(History::One, &mut rng);
    /// assert_eq!(rule.history(), History::One);
    /// ```
    pub fn random<R: Rng>(history: History, rng: &mut R) -> Self {
        Self::from_bits(rng.gen::<u64>(), history)
    }

    /// History depth this rule was built for.
    #[inline]
    pub fn history(&self) -> History {
        self.history
    }

    /// Apply the rule to a window of generations and produce the next one.
    ///
    /// `window` holds the most recent generations, oldest first, one per
    /// unit of history depth. The boundary is periodic on both sides: the
    /// left neighbor of cell 0 is the last cell and the right neighbor of
    /// the last cell is cell 0.
    ///
    /// Pure and deterministic: identical inputs always produce identical
    /// outputs, and no state is retained between calls.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedTransition` if a neighborhood pattern has no
    /// table entry. Cannot happen for rules built by `wolfram`,
    /// `from_bits`, or `random`, which are total by construction.
    ///
    /// # Panics
    ///
    /// Panics if `window.len()` differs from the rule's history depth, or
    /// if the rows in the window differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use cella::{CellRow, Rule};
    ///
    /// // Rule 0 kills every cell
    /// let rule = Rule::wolfram(0);
    /// let state = CellRow::from_cells(&[1, 1, 1, 1]).unwrap();
    /// let next = rule.apply(std::slice::from_ref(&state)).unwrap();
    /// assert_eq!(next.count_live(), 0);
    /// ```
    pub fn apply(&self, window: &[CellRow]) -> Result<CellRow> {
        let depth = self.history.depth();
        assert_eq!(
            window.len(),
            depth,
            "window must hold exactly {} generation(s)",
            depth
        );
        let size = window[0].len();
        for row in window {
            assert_eq!(row.len(), size, "window rows must have equal length");
        }

        let mut next = CellRow::new(size);
        for i in 0..size {
            let mut pattern = 0usize;
            for row in window {
                let left = if i == 0 { row.get(size - 1) } else { row.get(i - 1) };
                let center = row.get(i);
                let right = if i + 1 == size { row.get(0) } else { row.get(i + 1) };
                pattern = (pattern << NEIGHBORHOOD)
                    | (left as usize) << 2
                    | (center as usize) << 1
                    | right as usize;
            }
            match self.table[pattern] {
                Some(out) => next.set(i, out),
                None => {
                    return Err(CellaError::UndefinedTransition {
                        pattern: format_pattern(pattern, self.history),
                    })
                }
            }
        }
        Ok(next)
    }
}

/// Parse a digit-string key into its pattern index, or `None` if the key
/// is not `window_len` binary digits.
fn parse_pattern(key: &str, window_len: usize) -> Option<usize> {
    if key.len() != window_len || !key.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    usize::from_str_radix(key, 2).ok()
}

/// Render a pattern index back to its digit-string form for error reports.
fn format_pattern(pattern: usize, history: History) -> String {
    format!("{:0width$b}", pattern, width = history.window_len())
}
