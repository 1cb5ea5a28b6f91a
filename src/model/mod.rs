//! Domain model: players, positions, the candidate pool, and the query.

mod category;
mod constraints;
mod player;
mod pool;

pub use category::{Category, UnknownCategory};
pub use constraints::{Constraints, Quotas};
pub use player::Player;
pub use pool::PlayerPool;
