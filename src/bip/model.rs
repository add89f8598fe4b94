//! BIP model definition.

/// A constraint in a binary integer program.
///
/// These are the two constraint shapes a roster-selection problem needs.
/// Keeping the enum closed (instead of generic coefficient rows with a
/// sense) lets the solver exploit their structure for bounding.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Weighted budget over all variables.
    ///
    /// The summed weight of selected variables must not exceed `capacity`.
    Budget {
        /// Weight of each variable (parallel to the score vector).
        weights: Vec<f64>,
        /// Maximum total weight. Weights must be non-negative.
        capacity: f64,
    },

    /// Selection-count range over a member set.
    ///
    /// The number of selected variables among `vars` must lie in
    /// `min..=max`. `min == max` expresses an exact count.
    Choose {
        /// Variable indices the count ranges over. Must be duplicate-free.
        vars: Vec<usize>,
        /// Minimum selected count.
        min: u32,
        /// Maximum selected count.
        max: u32,
    },
}

/// A binary integer program.
///
/// One binary decision variable per score entry; the objective maximizes
/// the summed score of the selected variables. There is no minimization
/// constructor: callers minimizing a quantity negate their scores.
///
/// # Examples
///
/// ```
/// use dfs_optimizer::bip::BipModel;
///
/// let mut model = BipModel::maximize(vec![3.0, 1.0, 2.0]);
/// model.add_budget(vec![2.0, 1.0, 1.0], 3.0);
/// model.add_choose_exactly(vec![0, 1, 2], 2);
/// assert!(model.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct BipModel {
    /// Objective coefficient of each variable.
    pub scores: Vec<f64>,
    /// Constraints.
    pub constraints: Vec<Constraint>,
}

impl BipModel {
    /// Creates a model maximizing the given per-variable scores.
    pub fn maximize(scores: Vec<f64>) -> Self {
        Self {
            scores,
            constraints: Vec::new(),
        }
    }

    /// Number of decision variables.
    pub fn num_vars(&self) -> usize {
        self.scores.len()
    }

    /// Number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Adds a constraint.
    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Convenience: add a budget constraint.
    pub fn add_budget(&mut self, weights: Vec<f64>, capacity: f64) {
        self.constraints.push(Constraint::Budget { weights, capacity });
    }

    /// Convenience: add a selection-count range.
    pub fn add_choose(&mut self, vars: Vec<usize>, min: u32, max: u32) {
        self.constraints.push(Constraint::Choose { vars, min, max });
    }

    /// Convenience: add an exact selection count.
    pub fn add_choose_exactly(&mut self, vars: Vec<usize>, count: u32) {
        self.constraints.push(Constraint::Choose {
            vars,
            min: count,
            max: count,
        });
    }

    /// Validates the model for structural consistency.
    ///
    /// Infeasibility is not a validation concern: a model whose
    /// constraints admit no assignment is valid, and the solver proves
    /// the infeasibility.
    pub fn validate(&self) -> Result<(), String> {
        for (i, score) in self.scores.iter().enumerate() {
            if !score.is_finite() {
                return Err(format!("score {i} is not finite"));
            }
        }

        for constraint in &self.constraints {
            match constraint {
                Constraint::Budget { weights, capacity } => {
                    if weights.len() != self.scores.len() {
                        return Err(format!(
                            "budget: {} weights for {} variables",
                            weights.len(),
                            self.scores.len()
                        ));
                    }
                    if !capacity.is_finite() {
                        return Err("budget: capacity is not finite".into());
                    }
                    for (i, w) in weights.iter().enumerate() {
                        if !w.is_finite() || *w < 0.0 {
                            return Err(format!(
                                "budget: weight {i} must be finite and non-negative, got {w}"
                            ));
                        }
                    }
                }
                Constraint::Choose { vars, min, max } => {
                    if min > max {
                        return Err(format!("choose: min {min} exceeds max {max}"));
                    }
                    let mut seen = vec![false; self.scores.len()];
                    for &v in vars {
                        if v >= self.scores.len() {
                            return Err(format!("choose: variable index {v} out of range"));
                        }
                        if seen[v] {
                            return Err(format!("choose: duplicate variable index {v}"));
                        }
                        seen[v] = true;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let mut model = BipModel::maximize(vec![3.0, 1.0, 2.0]);
        model.add_budget(vec![2.0, 1.0, 1.0], 3.0);
        model.add_choose_exactly(vec![0, 1, 2], 2);

        assert_eq!(model.num_vars(), 3);
        assert_eq!(model.constraint_count(), 2);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_empty_model_is_valid() {
        let model = BipModel::maximize(vec![]);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_budget_length_mismatch() {
        let mut model = BipModel::maximize(vec![1.0, 2.0]);
        model.add_budget(vec![1.0], 5.0);
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_budget_negative_weight() {
        let mut model = BipModel::maximize(vec![1.0, 2.0]);
        model.add_budget(vec![1.0, -0.5], 5.0);
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_budget_non_finite_capacity() {
        let mut model = BipModel::maximize(vec![1.0]);
        model.add_budget(vec![1.0], f64::NAN);
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_negative_capacity_is_valid() {
        // Infeasible, but structurally fine: the solver proves it.
        let mut model = BipModel::maximize(vec![1.0]);
        model.add_budget(vec![1.0], -1.0);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_choose_min_exceeds_max() {
        let mut model = BipModel::maximize(vec![1.0, 2.0]);
        model.add_choose(vec![0, 1], 2, 1);
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_choose_index_out_of_range() {
        let mut model = BipModel::maximize(vec![1.0, 2.0]);
        model.add_choose(vec![0, 2], 0, 1);
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_choose_duplicate_index() {
        let mut model = BipModel::maximize(vec![1.0, 2.0]);
        model.add_choose(vec![0, 0], 0, 1);
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_choose_min_above_member_count_is_valid() {
        // Infeasible (can never pick 3 from 2 members), not malformed.
        let mut model = BipModel::maximize(vec![1.0, 2.0]);
        model.add_choose(vec![0, 1], 3, 5);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_non_finite_score() {
        let model = BipModel::maximize(vec![1.0, f64::INFINITY]);
        assert!(model.validate().is_err());
    }
}
