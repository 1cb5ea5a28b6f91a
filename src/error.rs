//! Error types.

use crate::model::Category;
use thiserror::Error;

/// Errors produced by roster search and its I/O adapters.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Misuse of [`SolutionState`](crate::state::SolutionState): pushing a used
    /// or over-quota player, popping an empty state, or an out-of-range index.
    ///
    /// Never raised by correct search control flow.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// Greedy construction could not fill the quota of `category` within the
    /// budget and price cap.
    #[error("greedy construction cannot fill {category} within the budget")]
    ConstructionInfeasible {
        /// First category whose quota could not be filled.
        category: Category,
    },

    /// The exact search exhausted the space without completing a roster.
    #[error("no feasible roster exists for the given constraints")]
    NoFeasibleSolution,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A query or record could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Shorthand for results in this crate.
pub type Result<T> = std::result::Result<T, RosterError>;
