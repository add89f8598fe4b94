//! Candidate player pool.
//!
//! Domain types for the players a lineup is chosen from, plus CSV
//! ingestion with salary normalization.
//!
//! # Key Components
//!
//! - **Types**: [`Position`], [`Player`], [`PlayerPool`]; a player's pool
//!   index is its decision-variable id in the lineup model
//! - **Loading**: [`load_pool`] / [`load_pool_from_reader`], fail-fast
//!   CSV ingestion with `"$6,500"` style salaries normalized to numbers

mod loader;
mod player;

pub use loader::{load_pool, load_pool_from_reader, PoolError};
pub use player::{Player, PlayerPool, Position};
