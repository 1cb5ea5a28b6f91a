//! Search state shared by both engines.
//!
//! - [`SolutionState`]: the mutable partial roster with O(1) push/pop/swap.
//! - [`Incumbent`]: the best complete roster of one run.
//! - [`Roster`]: an owned snapshot handed to sinks and returned to callers.

mod incumbent;
mod roster;
mod solution;

pub use incumbent::Incumbent;
pub use roster::Roster;
pub use solution::{Slot, SolutionState};
