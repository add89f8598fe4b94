//! BIP solver interface and branch-and-bound implementation.

use super::model::{BipModel, Constraint};
use std::time::{Duration, Instant};

/// Status of the solver after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// Proven optimal solution found.
    Optimal,
    /// Proven that no feasible solution exists.
    Infeasible,
    /// Model or solver configuration is invalid.
    ModelInvalid,
    /// Solver exceeded its time limit before proving optimality.
    Timeout,
}

/// Search statistics from a solve.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveStats {
    /// Nodes expanded during the search.
    pub nodes_explored: u64,
    /// Nodes discarded because their bound could not beat the incumbent.
    pub nodes_pruned: u64,
    /// Wall-clock solve time in milliseconds.
    pub solve_time_ms: u64,
}

/// Solution from a BIP solver.
#[derive(Debug, Clone)]
pub struct BipSolution {
    /// Solver status.
    pub status: SolverStatus,
    /// Objective value of `values`, if an assignment was found.
    pub objective_value: Option<f64>,
    /// Assignment of each variable, if one was found.
    ///
    /// With status [`SolverStatus::Timeout`] this is the best feasible
    /// incumbent at the moment the limit tripped, not a proven optimum.
    pub values: Option<Vec<bool>>,
    /// Search statistics.
    pub stats: SolveStats,
}

impl BipSolution {
    /// Creates an empty solution with the given status.
    pub fn empty(status: SolverStatus) -> Self {
        Self {
            status,
            objective_value: None,
            values: None,
            stats: SolveStats::default(),
        }
    }

    /// Whether a feasible assignment is attached.
    pub fn is_solution_found(&self) -> bool {
        self.values.is_some()
    }
}

/// Solver configuration.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Maximum solve time in milliseconds.
    ///
    /// `None` disables time-based termination (the default). When the
    /// limit trips, the solve ends with [`SolverStatus::Timeout`] and the
    /// incumbent found so far, if any.
    pub time_limit_ms: Option<u64>,
}

impl SolverConfig {
    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}

/// Trait for BIP solver implementations.
pub trait BipSolver {
    /// Solves the model and returns a solution.
    fn solve(&self, model: &BipModel, config: &SolverConfig) -> BipSolution;
}

/// Exact depth-first branch-and-bound solver.
///
/// Variables are branched in descending score order (ties by index),
/// include branch first. Each node is bounded by the tighter of a
/// count relaxation and a fractional-knapsack (Dantzig) relaxation of
/// each budget; a node dies when its bound cannot strictly beat the
/// incumbent. Because the branch order is fixed and ties never replace
/// the incumbent, repeated solves of the same model return the same
/// assignment.
///
/// # Limitations
///
/// - Exponential worst case: intended for models up to a few hundred
///   variables with tight budget and count structure, not general MIPs.
/// - Maximization only; the model layer negates scores to minimize.
pub struct BranchAndBound;

impl BranchAndBound {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BranchAndBound {
    fn default() -> Self {
        Self::new()
    }
}

impl BipSolver for BranchAndBound {
    fn solve(&self, model: &BipModel, config: &SolverConfig) -> BipSolution {
        if model.validate().is_err() || config.validate().is_err() {
            return BipSolution::empty(SolverStatus::ModelInvalid);
        }

        let start = Instant::now();
        let deadline = config
            .time_limit_ms
            .map(|ms| start + Duration::from_millis(ms));

        let mut search = Search::new(model, deadline);
        if search.root_feasible() {
            search.branch(0, 0.0);
        }

        let mut stats = search.stats;
        stats.solve_time_ms = start.elapsed().as_millis() as u64;

        let status = if search.timed_out {
            SolverStatus::Timeout
        } else if search.incumbent.is_some() {
            SolverStatus::Optimal
        } else {
            SolverStatus::Infeasible
        };

        match search.incumbent {
            Some((objective, values)) => BipSolution {
                status,
                objective_value: Some(objective),
                values: Some(values),
                stats,
            },
            None => BipSolution {
                status,
                objective_value: None,
                values: None,
                stats,
            },
        }
    }
}

struct BudgetState<'a> {
    weights: &'a [f64],
    capacity: f64,
    spent: f64,
    /// Positive-score variables by score/weight density, descending.
    /// Zero-weight variables count as infinitely dense.
    density_order: Vec<usize>,
}

struct ChooseState {
    min: u32,
    max: u32,
    chosen: u32,
    undecided: u32,
    /// Whether the member set is every variable in the model. Only such
    /// constraints cap the count relaxation globally.
    covers_all: bool,
}

struct Search<'a> {
    scores: &'a [f64],
    /// Branch order: score descending, index ascending.
    order: Vec<usize>,
    /// Position of each variable in `order`. Variables at positions
    /// below the current depth are decided on the active path.
    pos_in_order: Vec<usize>,
    assignment: Vec<bool>,
    budgets: Vec<BudgetState<'a>>,
    chooses: Vec<ChooseState>,
    /// For each variable, the choose constraints containing it.
    memberships: Vec<Vec<usize>>,
    incumbent: Option<(f64, Vec<bool>)>,
    deadline: Option<Instant>,
    timed_out: bool,
    stats: SolveStats,
}

impl<'a> Search<'a> {
    fn new(model: &'a BipModel, deadline: Option<Instant>) -> Self {
        let scores = model.scores.as_slice();
        let n = scores.len();

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
        let mut pos_in_order = vec![0usize; n];
        for (pos, &v) in order.iter().enumerate() {
            pos_in_order[v] = pos;
        }

        let mut budgets = Vec::new();
        let mut chooses = Vec::new();
        let mut memberships: Vec<Vec<usize>> = vec![Vec::new(); n];

        for constraint in &model.constraints {
            match constraint {
                Constraint::Budget { weights, capacity } => {
                    let mut density_order: Vec<usize> =
                        (0..n).filter(|&v| scores[v] > 0.0).collect();
                    density_order.sort_by(|&a, &b| {
                        let density = |v: usize| {
                            if weights[v] > 0.0 {
                                scores[v] / weights[v]
                            } else {
                                f64::INFINITY
                            }
                        };
                        density(b).total_cmp(&density(a)).then(a.cmp(&b))
                    });
                    budgets.push(BudgetState {
                        weights: weights.as_slice(),
                        capacity: *capacity,
                        spent: 0.0,
                        density_order,
                    });
                }
                Constraint::Choose { vars, min, max } => {
                    let idx = chooses.len();
                    for &v in vars {
                        memberships[v].push(idx);
                    }
                    chooses.push(ChooseState {
                        min: *min,
                        max: *max,
                        chosen: 0,
                        undecided: vars.len() as u32,
                        covers_all: vars.len() == n,
                    });
                }
            }
        }

        Self {
            scores,
            order,
            pos_in_order,
            assignment: vec![false; n],
            budgets,
            chooses,
            memberships,
            incumbent: None,
            deadline,
            timed_out: false,
            stats: SolveStats::default(),
        }
    }

    /// Whether the empty selection is a valid starting point: no budget
    /// is already exceeded and every count minimum is still reachable.
    fn root_feasible(&self) -> bool {
        self.budgets.iter().all(|b| b.capacity >= 0.0)
            && self.chooses.iter().all(|c| c.undecided >= c.min)
    }

    fn branch(&mut self, depth: usize, current_score: f64) {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.timed_out = true;
                return;
            }
        }
        self.stats.nodes_explored += 1;

        if depth == self.order.len() {
            // Every variable is decided. Budgets and count maxima were
            // enforced on include; count minima follow from the exclude
            // guard, so this assignment is feasible.
            let improved = match &self.incumbent {
                Some((best, _)) => current_score > *best,
                None => true,
            };
            if improved {
                self.incumbent = Some((current_score, self.assignment.clone()));
            }
            return;
        }

        if let Some((best, _)) = &self.incumbent {
            if self.upper_bound(depth, current_score) <= *best {
                self.stats.nodes_pruned += 1;
                return;
            }
        }

        let var = self.order[depth];

        if self.can_include(var) {
            self.include(var);
            self.branch(depth + 1, current_score + self.scores[var]);
            self.unwind_include(var);
            if self.timed_out {
                return;
            }
        }

        if self.can_exclude(var) {
            self.exclude(var);
            self.branch(depth + 1, current_score);
            self.unwind_exclude(var);
        }
    }

    fn can_include(&self, var: usize) -> bool {
        for b in &self.budgets {
            if b.spent + b.weights[var] > b.capacity {
                return false;
            }
        }
        for &c in &self.memberships[var] {
            if self.chooses[c].chosen + 1 > self.chooses[c].max {
                return false;
            }
        }
        true
    }

    fn can_exclude(&self, var: usize) -> bool {
        for &c in &self.memberships[var] {
            let state = &self.chooses[c];
            if state.chosen + state.undecided - 1 < state.min {
                return false;
            }
        }
        true
    }

    fn include(&mut self, var: usize) {
        self.assignment[var] = true;
        for b in &mut self.budgets {
            b.spent += b.weights[var];
        }
        for &c in &self.memberships[var] {
            self.chooses[c].chosen += 1;
            self.chooses[c].undecided -= 1;
        }
    }

    fn unwind_include(&mut self, var: usize) {
        self.assignment[var] = false;
        for b in &mut self.budgets {
            b.spent -= b.weights[var];
        }
        for &c in &self.memberships[var] {
            self.chooses[c].chosen -= 1;
            self.chooses[c].undecided += 1;
        }
    }

    fn exclude(&mut self, var: usize) {
        for &c in &self.memberships[var] {
            self.chooses[c].undecided -= 1;
        }
    }

    fn unwind_exclude(&mut self, var: usize) {
        for &c in &self.memberships[var] {
            self.chooses[c].undecided += 1;
        }
    }

    /// Admissible upper bound on any completion of the current node:
    /// the tighter of the count relaxation and each budget's fractional
    /// relaxation. Both only ever overestimate, so pruning on them is
    /// exact.
    fn upper_bound(&self, depth: usize, current_score: f64) -> f64 {
        let mut bound = current_score + self.count_headroom(depth);
        for b in &self.budgets {
            let budget_bound = current_score + self.budget_headroom(b, depth);
            if budget_bound < bound {
                bound = budget_bound;
            }
        }
        bound
    }

    /// Sum of the largest undecided positive scores that the tightest
    /// all-covering count cap still admits, ignoring budgets.
    fn count_headroom(&self, depth: usize) -> f64 {
        let mut slack = (self.order.len() - depth) as u32;
        for c in &self.chooses {
            if c.covers_all && c.max - c.chosen < slack {
                slack = c.max - c.chosen;
            }
        }

        let mut headroom = 0.0;
        let mut taken = 0u32;
        for &v in &self.order[depth..] {
            if taken == slack {
                break;
            }
            let s = self.scores[v];
            if s <= 0.0 {
                // Order is score-descending: nothing positive remains.
                break;
            }
            headroom += s;
            taken += 1;
        }
        headroom
    }

    /// Fractional-knapsack (Dantzig) bound for one budget: fill the
    /// remaining capacity with undecided positive-score variables in
    /// density order, splitting the first that does not fit.
    fn budget_headroom(&self, budget: &BudgetState<'_>, depth: usize) -> f64 {
        let mut remaining = budget.capacity - budget.spent;
        let mut headroom = 0.0;
        for &v in &budget.density_order {
            if self.pos_in_order[v] < depth {
                continue; // decided on the active path
            }
            let w = budget.weights[v];
            if w <= remaining {
                headroom += self.scores[v];
                remaining -= w;
            } else {
                if w > 0.0 && remaining > 0.0 {
                    headroom += self.scores[v] * (remaining / w);
                }
                break;
            }
        }
        headroom
    }
}
