//! Roster rules.
//!
//! [`RosterRules`] holds the contest parameters the lineup model is built
//! from: salary cap, roster size, and per-position slot bounds.

use crate::pool::Position;

/// DraftKings NFL classic salary cap, in dollars.
pub const DRAFTKINGS_SALARY_CAP: f64 = 50_000.0;

/// DraftKings NFL classic roster size.
pub const DRAFTKINGS_ROSTER_SIZE: u32 = 9;

/// Allowed selection count for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotBounds {
    /// Minimum players at this position.
    pub min: u32,
    /// Maximum players at this position.
    pub max: u32,
}

impl SlotBounds {
    /// Creates bounds for a position.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Rules of a salary-capped roster contest.
///
/// There is no explicit flex slot. The position ranges overlap (RB 2-3,
/// WR 3-4, TE 1-2 by default) while the roster size is pinned, so in any
/// feasible roster exactly one of RB/WR/TE runs one above its minimum.
/// [`validate`](Self::validate) re-derives the arithmetic this depends
/// on: the per-position minima must sum to at most the roster size, and
/// the maxima to at least it. Edited rules that break the identity fail
/// validation instead of silently admitting no roster.
///
/// # Defaults
///
/// ```
/// use dfs_optimizer::lineup::RosterRules;
///
/// let rules = RosterRules::default();
/// assert_eq!(rules.salary_cap, 50_000.0);
/// assert_eq!(rules.roster_size, 9);
/// assert_eq!((rules.rb.min, rules.rb.max), (2, 3));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use dfs_optimizer::lineup::{RosterRules, SlotBounds};
/// use dfs_optimizer::pool::Position;
///
/// let rules = RosterRules::default()
///     .with_salary_cap(60_000.0)
///     .with_position_bounds(Position::TE, SlotBounds::new(1, 3));
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterRules {
    /// Maximum total salary of a roster.
    pub salary_cap: f64,
    /// Exact number of players in a roster.
    pub roster_size: u32,
    /// Quarterback slot bounds.
    pub qb: SlotBounds,
    /// Running back slot bounds.
    pub rb: SlotBounds,
    /// Wide receiver slot bounds.
    pub wr: SlotBounds,
    /// Tight end slot bounds.
    pub te: SlotBounds,
    /// Defense / special teams slot bounds.
    pub dst: SlotBounds,
}

impl Default for RosterRules {
    /// DraftKings NFL classic: $50,000 cap, 9 players, QB 1, RB 2-3,
    /// WR 3-4, TE 1-2, DST 1.
    fn default() -> Self {
        Self {
            salary_cap: DRAFTKINGS_SALARY_CAP,
            roster_size: DRAFTKINGS_ROSTER_SIZE,
            qb: SlotBounds::new(1, 1),
            rb: SlotBounds::new(2, 3),
            wr: SlotBounds::new(3, 4),
            te: SlotBounds::new(1, 2),
            dst: SlotBounds::new(1, 1),
        }
    }
}

impl RosterRules {
    /// Sets the salary cap.
    pub fn with_salary_cap(mut self, cap: f64) -> Self {
        self.salary_cap = cap;
        self
    }

    /// Sets the roster size.
    pub fn with_roster_size(mut self, size: u32) -> Self {
        self.roster_size = size;
        self
    }

    /// Sets the slot bounds for one position.
    pub fn with_position_bounds(mut self, position: Position, bounds: SlotBounds) -> Self {
        match position {
            Position::QB => self.qb = bounds,
            Position::RB => self.rb = bounds,
            Position::WR => self.wr = bounds,
            Position::TE => self.te = bounds,
            Position::DST => self.dst = bounds,
        }
        self
    }

    /// Slot bounds for the given position.
    pub fn bounds(&self, position: Position) -> SlotBounds {
        match position {
            Position::QB => self.qb,
            Position::RB => self.rb,
            Position::WR => self.wr,
            Position::TE => self.te,
            Position::DST => self.dst,
        }
    }

    /// Validates the rules.
    ///
    /// Returns `Err` with a description if any parameter is invalid or
    /// if the slot bounds cannot fill the roster size.
    pub fn validate(&self) -> Result<(), String> {
        if !self.salary_cap.is_finite() || self.salary_cap < 0.0 {
            return Err(format!(
                "salary_cap must be finite and non-negative, got {}",
                self.salary_cap
            ));
        }
        for position in Position::ALL {
            let b = self.bounds(position);
            if b.min > b.max {
                return Err(format!("{position}: min {} exceeds max {}", b.min, b.max));
            }
        }
        let min_sum: u32 = Position::ALL.iter().map(|&p| self.bounds(p).min).sum();
        let max_sum: u32 = Position::ALL.iter().map(|&p| self.bounds(p).max).sum();
        if min_sum > self.roster_size {
            return Err(format!(
                "position minima sum to {min_sum}, above roster size {}",
                self.roster_size
            ));
        }
        if max_sum < self.roster_size {
            return Err(format!(
                "position maxima sum to {max_sum}, below roster size {}",
                self.roster_size
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_draftkings_classic() {
        let rules = RosterRules::default();
        assert_eq!(rules.salary_cap, DRAFTKINGS_SALARY_CAP);
        assert_eq!(rules.roster_size, DRAFTKINGS_ROSTER_SIZE);
        assert_eq!(rules.qb, SlotBounds::new(1, 1));
        assert_eq!(rules.rb, SlotBounds::new(2, 3));
        assert_eq!(rules.wr, SlotBounds::new(3, 4));
        assert_eq!(rules.te, SlotBounds::new(1, 2));
        assert_eq!(rules.dst, SlotBounds::new(1, 1));
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_default_flex_identity() {
        // Minima sum to 8, maxima to 11, bracketing the roster size 9:
        // one flex among RB/WR/TE, never a second QB or DST.
        let rules = RosterRules::default();
        let min_sum: u32 = Position::ALL.iter().map(|&p| rules.bounds(p).min).sum();
        let max_sum: u32 = Position::ALL.iter().map(|&p| rules.bounds(p).max).sum();
        assert_eq!(min_sum, 8);
        assert_eq!(max_sum, 11);
    }

    #[test]
    fn test_builder_pattern() {
        let rules = RosterRules::default()
            .with_salary_cap(60_000.0)
            .with_roster_size(10)
            .with_position_bounds(Position::WR, SlotBounds::new(3, 5));

        assert_eq!(rules.salary_cap, 60_000.0);
        assert_eq!(rules.roster_size, 10);
        assert_eq!(rules.wr, SlotBounds::new(3, 5));
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_bounds_accessor() {
        let rules = RosterRules::default();
        for position in Position::ALL {
            let b = rules.bounds(position);
            assert!(b.min <= b.max);
        }
        assert_eq!(rules.bounds(Position::RB), rules.rb);
    }

    #[test]
    fn test_validate_min_above_max() {
        let rules =
            RosterRules::default().with_position_bounds(Position::RB, SlotBounds::new(3, 2));
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_validate_minima_exceed_roster() {
        let rules = RosterRules::default().with_roster_size(7);
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_validate_maxima_below_roster() {
        let rules = RosterRules::default().with_roster_size(12);
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_validate_negative_cap() {
        let rules = RosterRules::default().with_salary_cap(-1.0);
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_validate_nan_cap() {
        let rules = RosterRules::default().with_salary_cap(f64::NAN);
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_roster_size_edges_of_identity() {
        // 8 and 11 are the exact edges the default bounds admit.
        assert!(RosterRules::default().with_roster_size(8).validate().is_ok());
        assert!(RosterRules::default().with_roster_size(11).validate().is_ok());
    }
}
