//! Budget-constrained roster selection.
//!
//! Picks one goalkeeper plus a configurable number of defenders,
//! midfielders and strikers from a player pool, maximizing the summed
//! score under a total budget and a per-player price cap.
//!
//! Two engines share the same state and reporting machinery:
//!
//! - **Exact search** ([`exact`]): depth-first branch-and-bound over
//!   per-category combinations. Proves optimality when it runs to
//!   completion.
//! - **Simulated Annealing** ([`sa`]): greedy construction followed by
//!   single-swap annealing rounds with a pluggable cooling schedule.
//!
//! [`portfolio`] runs both and keeps the better roster. Every strict
//! improvement of a run is pushed synchronously to a
//! [`SolutionSink`](sink::SolutionSink), so a caller always holds the best
//! roster found so far even if the run is interrupted.
//!
//! # Example
//!
//! ```
//! use u_roster::exact::{ExactConfig, ExactRunner};
//! use u_roster::model::{Category, Constraints, Player, PlayerPool, Quotas};
//! use u_roster::sink::CollectSink;
//!
//! let pool = PlayerPool::new(vec![
//!     Player::new("GK1", Category::Goalkeeper, 5, 10),
//!     Player::new("D1", Category::Defender, 4, 8),
//!     Player::new("D2", Category::Defender, 3, 6),
//!     Player::new("M1", Category::Midfielder, 5, 9),
//!     Player::new("S1", Category::Striker, 7, 12),
//! ]);
//! let constraints = Constraints::new(Quotas::new(2, 1, 1), 30, 10);
//!
//! let mut sink = CollectSink::new();
//! let result = ExactRunner::run(&pool, &constraints, &ExactConfig::default(), &mut sink).unwrap();
//! assert!(result.is_optimal());
//! assert_eq!(result.best.unwrap().score, 45);
//! ```
//!
//! # Errors
//!
//! Fallible operations return [`RosterError`].

pub mod error;
pub mod exact;
pub mod io;
pub mod model;
pub mod ordering;
pub mod portfolio;
pub mod sa;
pub mod sink;
pub mod state;
pub mod termination;

pub use error::{Result, RosterError};
