//! Daily-fantasy lineup construction on top of the [`bip`](crate::bip)
//! solver.
//!
//! # Key Components
//!
//! - [`RosterRules`]: contest structure, salary cap, roster size and
//!   per-position slot bounds. Defaults to the DraftKings NFL classic
//!   contest.
//! - [`LineupOptimizer`]: encodes a [`PlayerPool`](crate::pool::PlayerPool)
//!   and its rules as a binary integer program and solves it exactly.
//! - [`Lineup`]: the selected players with projection and salary totals,
//!   formatted for terminal display.
//!
//! # Design
//!
//! The flex seat common to these contests is not modeled as a slot.
//! Per-position bounds overlap (RB 2..=3, WR 3..=4, TE 1..=2) while the
//! roster size is pinned at nine, so exactly one position group runs
//! one above its minimum in any valid roster. Which group that is falls
//! out of the optimization rather than being assigned up front.

mod optimizer;
mod rules;
mod solution;

pub use optimizer::{LineupOptimizer, OptimizeError};
pub use rules::{RosterRules, SlotBounds, DRAFTKINGS_ROSTER_SIZE, DRAFTKINGS_SALARY_CAP};
pub use solution::{Lineup, LineupTotals};
