//! File adapters: the player database and query loaders, and the solution
//! writer.
//!
//! Player records are `name;position;price;team;points` with positions
//! `por`, `def`, `mig` and `dav`. A query is five integers: defenders,
//! midfielders and strikers quotas, the total budget and the per-player
//! price cap.

pub mod loader;
pub mod writer;

pub use loader::{load_constraints, load_pool, parse_constraints, read_players};
pub use writer::{format_solution, FileSink, WriteMode};
