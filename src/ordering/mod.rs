//! Player ordering strategies.
//!
//! One comparator, parameterized by [`RankBy`], serves every call site
//! that needs players in a particular order:
//!
//! - **Efficiency**: pool order, consumed by greedy construction and by the
//!   annealer's candidate scan.
//! - **Score**: highest points first, cheapest first among equals.
//! - **Category**: output grouping by position.
//!
//! All sorts are stable, so players that compare equal keep their input
//! order.

mod rank;

pub use rank::RankBy;
