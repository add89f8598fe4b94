//! Lineup optimization: candidate pool to optimal roster.

use super::rules::RosterRules;
use super::solution::Lineup;
use crate::bip::{BipModel, BipSolver, BranchAndBound, SolverConfig, SolverStatus};
use crate::pool::{PlayerPool, Position};
use tracing::debug;

/// Error from a lineup optimization.
#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    /// A player record is malformed. Surfaced before the model is built;
    /// the pool must be fixed, not retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No roster satisfies the rules for this pool. Retrying the same
    /// pool cannot succeed.
    #[error("no feasible lineup: {0}")]
    Infeasible(String),

    /// The solver exceeded its time limit before proving optimality.
    #[error("solver exceeded time limit of {limit_ms} ms")]
    SolverTimeout { limit_ms: u64 },

    /// The roster rules or solver configuration cannot admit any roster.
    #[error("invalid configuration: {0}")]
    InvalidRules(String),
}

/// Builds the projection-maximal roster for a candidate pool.
///
/// Holds the contest rules and solver configuration; each
/// [`optimize`](Self::optimize) call is an independent solve against a
/// borrowed pool. The pool is never mutated and nothing carries over
/// between calls.
///
/// # Examples
///
/// ```
/// use dfs_optimizer::lineup::{LineupOptimizer, RosterRules};
/// use dfs_optimizer::pool::{Player, PlayerPool, Position};
///
/// let pool = PlayerPool::new(vec![
///     Player::new("QB A", Position::QB, 21.0, 6400.0),
///     Player::new("RB A", Position::RB, 17.0, 6000.0),
///     Player::new("RB B", Position::RB, 14.0, 5200.0),
///     Player::new("WR A", Position::WR, 16.0, 6600.0),
///     Player::new("WR B", Position::WR, 13.0, 5400.0),
///     Player::new("WR C", Position::WR, 11.0, 4400.0),
///     Player::new("WR D", Position::WR, 9.0, 3600.0),
///     Player::new("TE A", Position::TE, 10.0, 3900.0),
///     Player::new("DST A", Position::DST, 7.0, 2700.0),
/// ]);
///
/// let lineup = LineupOptimizer::new(RosterRules::default())
///     .optimize(&pool)
///     .unwrap();
/// assert_eq!(lineup.len(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct LineupOptimizer {
    rules: RosterRules,
    solver_config: SolverConfig,
}

impl LineupOptimizer {
    /// Creates an optimizer for the given rules, with no solver time
    /// limit.
    pub fn new(rules: RosterRules) -> Self {
        Self {
            rules,
            solver_config: SolverConfig::default(),
        }
    }

    /// Sets the solver configuration.
    pub fn with_solver_config(mut self, config: SolverConfig) -> Self {
        self.solver_config = config;
        self
    }

    /// The contest rules this optimizer solves under.
    pub fn rules(&self) -> &RosterRules {
        &self.rules
    }

    /// Solves for the optimal lineup.
    ///
    /// Validates the rules and the pool, proves cheap structural
    /// infeasibility early, then encodes the roster problem as a binary
    /// integer program and solves it exactly. On success the lineup has
    /// exactly `roster_size` players, within the salary cap and slot
    /// bounds, with maximal total projection.
    pub fn optimize(&self, pool: &PlayerPool) -> Result<Lineup, OptimizeError> {
        self.rules.validate().map_err(OptimizeError::InvalidRules)?;
        self.solver_config
            .validate()
            .map_err(OptimizeError::InvalidRules)?;
        validate_pool(pool)?;
        self.precheck(pool)?;

        let model = self.build_model(pool);
        debug!(
            "lineup model: {} variables, {} constraints",
            model.num_vars(),
            model.constraint_count()
        );

        let solution = BranchAndBound::new().solve(&model, &self.solver_config);
        debug!(
            "solve finished: {:?}, {} nodes explored, {} pruned, {} ms",
            solution.status,
            solution.stats.nodes_explored,
            solution.stats.nodes_pruned,
            solution.stats.solve_time_ms
        );

        match solution.status {
            SolverStatus::Optimal => match solution.values {
                Some(values) => Ok(extract_lineup(pool, &values)),
                None => Err(OptimizeError::Infeasible(
                    "solver returned no assignment".into(),
                )),
            },
            SolverStatus::Infeasible => Err(OptimizeError::Infeasible(
                "no roster satisfies the salary cap and slot bounds".into(),
            )),
            SolverStatus::Timeout => Err(OptimizeError::SolverTimeout {
                limit_ms: self.solver_config.time_limit_ms.unwrap_or(0),
            }),
            SolverStatus::ModelInvalid => Err(OptimizeError::InvalidInput(
                "lineup model rejected by solver".into(),
            )),
        }
    }

    /// Structural feasibility, before any solve: enough players overall
    /// and at every position. The solver remains the authority for
    /// budget-driven infeasibility.
    fn precheck(&self, pool: &PlayerPool) -> Result<(), OptimizeError> {
        if (pool.len() as u32) < self.rules.roster_size {
            return Err(OptimizeError::Infeasible(format!(
                "pool has {} players, roster needs {}",
                pool.len(),
                self.rules.roster_size
            )));
        }
        for position in Position::ALL {
            let available = pool.position_count(position) as u32;
            let needed = self.rules.bounds(position).min;
            if available < needed {
                return Err(OptimizeError::Infeasible(format!(
                    "only {available} {position} available, need at least {needed}"
                )));
            }
        }
        Ok(())
    }

    /// Encodes the roster problem: projections as scores, one budget
    /// over salaries, an exact count over all variables, and one count
    /// range per position group. The flex slot is not a variable; it
    /// emerges from the overlapping ranges against the pinned total.
    fn build_model(&self, pool: &PlayerPool) -> BipModel {
        let scores = pool.players.iter().map(|p| p.projection).collect();
        let mut model = BipModel::maximize(scores);

        let salaries = pool.players.iter().map(|p| p.salary).collect();
        model.add_budget(salaries, self.rules.salary_cap);
        model.add_choose_exactly((0..pool.len()).collect(), self.rules.roster_size);
        for position in Position::ALL {
            let bounds = self.rules.bounds(position);
            model.add_choose(pool.position_indices(position), bounds.min, bounds.max);
        }
        model
    }
}

fn validate_pool(pool: &PlayerPool) -> Result<(), OptimizeError> {
    for (i, p) in pool.players.iter().enumerate() {
        if !p.projection.is_finite() {
            return Err(OptimizeError::InvalidInput(format!(
                "player {i} ({}): projection {} is not finite",
                p.name, p.projection
            )));
        }
        if p.projection < 0.0 {
            return Err(OptimizeError::InvalidInput(format!(
                "player {i} ({}): projection {} is negative",
                p.name, p.projection
            )));
        }
        if !p.salary.is_finite() {
            return Err(OptimizeError::InvalidInput(format!(
                "player {i} ({}): salary {} is not finite",
                p.name, p.salary
            )));
        }
        if p.salary < 0.0 {
            return Err(OptimizeError::InvalidInput(format!(
                "player {i} ({}): salary {} is negative",
                p.name, p.salary
            )));
        }
    }
    Ok(())
}

/// Reads the exact boolean assignment back into players, in pool order.
fn extract_lineup(pool: &PlayerPool, values: &[bool]) -> Lineup {
    let players = pool
        .players
        .iter()
        .zip(values)
        .filter(|(_, &selected)| selected)
        .map(|(p, _)| p.clone())
        .collect();
    Lineup::from_players(players)
}
