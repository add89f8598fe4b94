//! Salary-capped daily-fantasy lineup optimization.
//!
//! Builds the projection-maximal NFL roster from a pool of candidate
//! players, subject to a salary cap and per-position slot bounds, by
//! solving the roster problem as a 0/1 integer program:
//!
//! - **Pool**: Candidate players (name, position, projected points,
//!   salary) with a CSV loader for the standard projections export.
//! - **BIP (Binary Integer Programming)**: Domain-agnostic 0/1 model
//!   with budget and cardinality constraints, solved exactly by
//!   depth-first branch-and-bound with fractional-relaxation bounds.
//! - **Lineup**: Contest rules (DraftKings NFL classic by default),
//!   the optimizer encoding pool + rules into a BIP, and the solved
//!   roster with its totals.
//!
//! # Architecture
//!
//! The `bip` layer contains no fantasy-sports concepts; players,
//! positions, and salary caps exist only in `pool` and `lineup`, which
//! translate a roster problem into variables and constraints and read
//! the solved assignment back into players. Swapping the contest
//! structure means changing [`lineup::RosterRules`], not the solver.

pub mod bip;
pub mod lineup;
pub mod pool;
