//! Error types for the Cella engine.
//!
//! This module provides a unified error type for all operations in the
//! engine, using the `thiserror` crate for ergonomic error handling.

use crate::rule::History;
use thiserror::Error;

/// The main error type for Cella operations.
///
/// Every failure mode is fatal to the offending call; the engine performs
/// no internal retry or recovery.
#[derive(Error, Debug)]
pub enum CellaError {
    /// Rule table rejected at construction
    #[error("invalid rule table: {0}")]
    InvalidRule(String),

    /// A neighborhood pattern has no entry in the rule table
    #[error("no transition defined for neighborhood \"{pattern}\"")]
    UndefinedTransition {
        /// The neighborhood pattern that missed, as a digit string
        pattern: String,
    },

    /// Initial condition rejected by `Grid::initialise`
    #[error("invalid initial condition: {0}")]
    InvalidInitialCondition(String),

    /// Rule and grid disagree on history depth
    #[error("rule with history depth {rule} cannot evolve a grid with history depth {grid}")]
    UnsupportedRule {
        /// History depth the rule was built for
        rule: History,
        /// History depth the grid was built with
        grid: History,
    },
}

/// A specialized `Result` type for Cella operations.
///
/// This is a type alias for `Result<T, CellaError>` and is used
/// throughout the Cella codebase for consistency.
pub type Result<T> = std::result::Result<T, CellaError>;
