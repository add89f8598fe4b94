//! Binary integer programming (BIP).
//!
//! A modeling and exact-solving layer for 0/1 integer programs: every
//! decision variable is binary, the objective is a linear maximization,
//! and constraints are weighted budgets and selection-count ranges.
//!
//! # Key Components
//!
//! - **Model**: [`BipModel`], scores plus [`Constraint`] budget/choose
//!   constraints
//! - **Solver**: [`BipSolver`], the interface solver implementations fill
//! - **Branch and bound**: [`BranchAndBound`], the shipped exact solver
//!
//! # Design
//!
//! This module is domain-agnostic: it knows nothing about players or
//! rosters. Each solve call builds fresh search state from the model, so
//! nothing accumulates across calls. The constraint vocabulary is closed
//! on purpose: both shapes admit cheap admissible bounds, which is what
//! makes exact solving practical at roster-selection sizes.
//!
//! # References
//!
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete
//!   Programming Problems"
//! - Dantzig (1957), "Discrete-Variable Extremum Problems"
//! - Martello & Toth (1990), "Knapsack Problems: Algorithms and Computer
//!   Implementations"

mod model;
mod solver;

pub use model::{BipModel, Constraint};
pub use solver::{BipSolution, BipSolver, BranchAndBound, SolveStats, SolverConfig, SolverStatus};
