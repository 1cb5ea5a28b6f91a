//! Exact branch-and-bound search.
//!
//! Enumerates every feasible roster exactly once, category by category,
//! and reports each strict improvement. When the enumeration is exhausted
//! the last reported roster is the global optimum.
//!
//! # References
//!
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete
//!   Programming Problems"
//! - Knuth (2011), *The Art of Computer Programming* 4A, §7.2.1.3
//!   (generating all combinations)

mod config;
mod runner;

pub use config::ExactConfig;
pub use runner::{ExactResult, ExactRunner, SearchStatus};
