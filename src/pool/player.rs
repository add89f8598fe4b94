//! Candidate player domain types.

use std::fmt;
use std::str::FromStr;

/// Roster position category.
///
/// The five categories of the DraftKings NFL classic contest. The enum is
/// closed: a player with any other position label cannot be constructed,
/// so it can never leak into a positional constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Quarterback.
    QB,
    /// Running back.
    RB,
    /// Wide receiver.
    WR,
    /// Tight end.
    TE,
    /// Defense / special teams.
    DST,
}

impl Position {
    /// All positions, in display order.
    pub const ALL: [Position; 5] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::DST,
    ];

    /// Canonical label for this position.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DST => "DST",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad, not write_str, so table columns can width-format this
        f.pad(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    /// Parses a position label, case-insensitively, ignoring surrounding
    /// whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfs_optimizer::pool::Position;
    ///
    /// assert_eq!(" qb ".parse::<Position>(), Ok(Position::QB));
    /// assert!("K".parse::<Position>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "DST" => Ok(Position::DST),
            other => Err(format!("unknown position: {other:?}")),
        }
    }
}

/// A candidate player.
///
/// Names are display identity only and need not be unique; a pool may
/// carry two players with the same name and different salaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Roster position.
    pub position: Position,
    /// Projected fantasy points.
    pub projection: f64,
    /// Contest salary in dollars.
    pub salary: f64,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, position: Position, projection: f64, salary: f64) -> Self {
        Self {
            name: name.into(),
            position,
            projection,
            salary,
        }
    }
}

/// An ordered pool of candidate players.
///
/// A player's index in the pool is its stable identity: decision variable
/// `i` of the lineup model corresponds to `players[i]`, and lineups list
/// their players in pool order.
#[derive(Debug, Clone, Default)]
pub struct PlayerPool {
    /// The candidates, in load order.
    pub players: Vec<Player>,
}

impl PlayerPool {
    /// Creates a pool from a list of players.
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Number of players in the pool.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Indices of all players at the given position, in pool order.
    pub fn position_indices(&self, position: Position) -> Vec<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.position == position)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of players at the given position.
    pub fn position_count(&self, position: Position) -> usize {
        self.players
            .iter()
            .filter(|p| p.position == position)
            .count()
    }
}

impl From<Vec<Player>> for PlayerPool {
    fn from(players: Vec<Player>) -> Self {
        Self::new(players)
    }
}
