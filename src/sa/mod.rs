//! Greedy construction + Simulated Annealing (SA).
//!
//! A roster is built greedily from the most efficient players, then
//! improved by single-player swaps. Each round visits the slots in random
//! order and applies the first acceptable swap: any swap that raises the
//! score within budget and price cap, or a worsening swap with Boltzmann
//! probability `exp(-loss / T)`. The temperature cools after every slot
//! visited; the run ends when a round accepts nothing or a budget expires.
//!
//! Anytime: every new incumbent is reported as soon as it is found, and
//! the last one reported is the answer if the run is interrupted.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod construction;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use construction::construct_greedy;
pub use runner::{SaResult, SaRunner};
