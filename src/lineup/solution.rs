//! Optimized lineup and its totals.

use crate::pool::Player;
use std::fmt;

/// Summed projection and salary of a lineup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineupTotals {
    /// Total projected points.
    pub projection: f64,
    /// Total salary in dollars.
    pub salary: f64,
}

impl fmt::Display for LineupTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Projection: {:.2}", self.projection)?;
        writeln!(f, "Salary: ${:.0}", self.salary)
    }
}

/// An optimized lineup: the selected players in candidate-pool order,
/// with their projection and salary column sums.
#[derive(Debug, Clone)]
pub struct Lineup {
    /// Selected players, in pool order.
    pub players: Vec<Player>,
    /// Column sums over the selected players.
    pub totals: LineupTotals,
}

impl Lineup {
    /// Builds a lineup from the selected players, computing totals.
    pub fn from_players(players: Vec<Player>) -> Self {
        let totals = LineupTotals {
            projection: players.iter().map(|p| p.projection).sum(),
            salary: players.iter().map(|p| p.salary).sum(),
        };
        Self { players, totals }
    }

    /// Number of players in the lineup.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the lineup is empty.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Four-column table, one row per player, trailing newline included.
impl fmt::Display for Lineup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self
            .players
            .iter()
            .map(|p| p.name.len())
            .chain(std::iter::once("Name".len()))
            .max()
            .unwrap_or(4);

        writeln!(
            f,
            "{:<name_width$}  {:<4} {:>6} {:>8}",
            "Name", "Pos", "Proj", "Salary"
        )?;
        for p in &self.players {
            writeln!(
                f,
                "{:<name_width$}  {:<4} {:>6.1} {:>8.0}",
                p.name, p.position, p.projection, p.salary
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Position;

    fn sample_lineup() -> Lineup {
        Lineup::from_players(vec![
            Player::new("Patrick Mahomes", Position::QB, 24.5, 7800.0),
            Player::new("Austin Ekeler", Position::RB, 18.2, 6500.0),
            Player::new("Bears", Position::DST, 7.5, 2900.0),
        ])
    }

    #[test]
    fn test_totals_are_column_sums() {
        let lineup = sample_lineup();
        assert!((lineup.totals.projection - 50.2).abs() < 1e-9);
        assert!((lineup.totals.salary - 17200.0).abs() < 1e-9);
        assert_eq!(lineup.len(), 3);
    }

    #[test]
    fn test_display_table() {
        let text = sample_lineup().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].contains("Patrick Mahomes"));
        assert!(lines[1].contains("QB"));
        assert!(lines[3].contains("2900"));
    }

    #[test]
    fn test_empty_lineup_display() {
        let lineup = Lineup::from_players(vec![]);
        assert!(lineup.is_empty());
        assert_eq!(lineup.to_string().lines().count(), 1);
        assert!((lineup.totals.projection - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_totals_display() {
        let text = sample_lineup().totals.to_string();
        assert!(text.contains("Projection: 50.20"));
        assert!(text.contains("Salary: $17200"));
    }
}
