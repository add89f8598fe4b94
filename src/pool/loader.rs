//! CSV loading and normalization for candidate pools.
//!
//! Expects the projection-export format: `Name`, `Position`, `Projection`
//! and `Salary` columns, extra columns ignored. Salaries may carry dollar
//! signs and comma grouping separators (`"$6,500"`); they are normalized
//! to plain numbers on load.
//!
//! Loading is fail-fast: the first malformed row aborts with an error
//! naming the 1-based data row, rather than silently shrinking the pool.

use super::player::{Player, PlayerPool, Position};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Error loading a candidate pool.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    /// The file could not be opened.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// A record could not be parsed as CSV or deserialized.
    #[error("malformed CSV record at data row {row}: {source}")]
    Csv { row: usize, source: csv::Error },

    /// A record parsed but failed normalization.
    #[error("data row {row}: {reason}")]
    Row { row: usize, reason: String },
}

#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawPlayerRow {
    Name: String,
    Position: String,
    Projection: f64,
    Salary: String,
}

/// Strips dollar signs and comma separators, then parses as a number.
///
/// `"$6,500"` normalizes to `6500.0`.
fn parse_salary(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    cleaned.parse::<f64>().ok()
}

/// Loads a candidate pool from CSV bytes.
pub fn load_pool_from_reader<R: Read>(rdr: R) -> Result<PlayerPool, PoolError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut players = Vec::new();

    for (i, result) in reader.deserialize::<RawPlayerRow>().enumerate() {
        let row = i + 1;
        let raw = result.map_err(|e| PoolError::Csv { row, source: e })?;

        let position: Position = raw
            .Position
            .parse()
            .map_err(|reason| PoolError::Row { row, reason })?;

        let salary = parse_salary(&raw.Salary)
            .filter(|s| s.is_finite())
            .ok_or_else(|| PoolError::Row {
                row,
                reason: format!("salary {:?} is not a finite number", raw.Salary),
            })?;

        if !raw.Projection.is_finite() {
            return Err(PoolError::Row {
                row,
                reason: format!("projection {} is not finite", raw.Projection),
            });
        }

        players.push(Player {
            name: raw.Name.trim().to_string(),
            position,
            projection: raw.Projection,
            salary,
        });
    }

    let pool = PlayerPool::new(players);
    debug!("loaded {} candidate players", pool.len());
    Ok(pool)
}

/// Loads a candidate pool from a CSV file.
pub fn load_pool(path: &Path) -> Result<PlayerPool, PoolError> {
    let file = std::fs::File::open(path).map_err(|e| PoolError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_pool_from_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_basic() {
        let csv_data = "\
Name,Position,Projection,Salary
Patrick Mahomes,QB,24.5,\"$7,800\"
Austin Ekeler,RB,18.2,6500
Tyreek Hill,wr,19.1,\"$8,100\"";

        let pool = load_pool_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(pool.len(), 3);

        assert_eq!(pool.players[0].name, "Patrick Mahomes");
        assert_eq!(pool.players[0].position, Position::QB);
        assert!((pool.players[0].projection - 24.5).abs() < f64::EPSILON);
        assert!((pool.players[0].salary - 7800.0).abs() < f64::EPSILON);

        assert!((pool.players[1].salary - 6500.0).abs() < f64::EPSILON);
        assert_eq!(pool.players[2].position, Position::WR);
    }

    #[test]
    fn test_salary_normalization() {
        assert_eq!(parse_salary("$6,500"), Some(6500.0));
        assert_eq!(parse_salary("6500"), Some(6500.0));
        assert_eq!(parse_salary(" $1,234,500 "), Some(1234500.0));
        assert_eq!(parse_salary("6500.50"), Some(6500.5));
        assert_eq!(parse_salary("$6,5x0"), None);
        assert_eq!(parse_salary(""), None);
        assert_eq!(parse_salary("$"), None);
    }

    #[test]
    fn test_unparsable_salary_fails_load() {
        let csv_data = "\
Name,Position,Projection,Salary
Good Player,QB,20.0,\"$7,000\"
Bad Player,RB,15.0,\"$6,5x0\"";

        let err = load_pool_from_reader(csv_data.as_bytes()).unwrap_err();
        match err {
            PoolError::Row { row, reason } => {
                assert_eq!(row, 2);
                assert!(reason.contains("salary"));
            }
            other => panic!("expected Row error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_position_fails_load() {
        let csv_data = "\
Name,Position,Projection,Salary
Good Player,QB,20.0,7000
Kicker Guy,K,8.0,4000";

        let err = load_pool_from_reader(csv_data.as_bytes()).unwrap_err();
        match err {
            PoolError::Row { row, reason } => {
                assert_eq!(row, 2);
                assert!(reason.contains("unknown position"));
            }
            other => panic!("expected Row error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_column_fails_load() {
        let csv_data = "\
Name,Position,Projection
No Salary,QB,20.0";

        let err = load_pool_from_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(err, PoolError::Csv { row: 1, .. }));
    }

    #[test]
    fn test_non_finite_projection_fails_load() {
        let csv_data = "\
Name,Position,Projection,Salary
NaN Player,QB,NaN,7000";

        let err = load_pool_from_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(err, PoolError::Row { row: 1, .. }));
    }

    #[test]
    fn test_infinite_salary_fails_load() {
        let csv_data = "\
Name,Position,Projection,Salary
Inf Player,QB,20.0,inf";

        let err = load_pool_from_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(err, PoolError::Row { row: 1, .. }));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv_data = "\
Name,Team,Position,Projection,Salary,Ownership
Player One,KC,QB,20.0,7000,12%";

        let pool = load_pool_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.players[0].position, Position::QB);
    }

    #[test]
    fn test_empty_csv_is_empty_pool() {
        let csv_data = "Name,Position,Projection,Salary";
        let pool = load_pool_from_reader(csv_data.as_bytes()).unwrap();
        assert!(pool.is_empty());
    }

    #[test]
    fn test_names_trimmed() {
        let csv_data = "\
Name,Position,Projection,Salary
  Patrick Mahomes  ,QB,24.5,7800";

        let pool = load_pool_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(pool.players[0].name, "Patrick Mahomes");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_pool(Path::new("/nonexistent/slate.csv")).unwrap_err();
        assert!(matches!(err, PoolError::Io { .. }));
    }
}
