use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::StorageError;

/// Competition result format: average of 3 or average of 5 attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultFormat {
    Ao3,
    Ao5,
}

impl ResultFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ao3 => "ao3",
            Self::Ao5 => "ao5",
        }
    }

    pub fn solve_count(&self) -> usize {
        match self {
            Self::Ao3 => 3,
            Self::Ao5 => 5,
        }
    }
}

impl std::str::FromStr for ResultFormat {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ao3" => Ok(Self::Ao3),
            "ao5" => Ok(Self::Ao5),
            other => Err(StorageError::ConstraintViolation(format!(
                "Unknown result format: {other}"
            ))),
        }
    }
}

/// One row per (round, competitor). Solves are integer milliseconds,
/// `-1` = DNF, NULL = DNS. `best` and `average` are derived and recomputed
/// whenever the solves change.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RoundResult {
    pub result_id: Uuid,
    pub round_id: Uuid,
    pub competitor_id: Uuid,
    pub solve1: Option<i64>,
    pub solve2: Option<i64>,
    pub solve3: Option<i64>,
    pub solve4: Option<i64>,
    pub solve5: Option<i64>,
    pub best: Option<i64>,
    pub average: Option<i64>,
    pub group_no: String,
    pub result_format: String,
    pub created_at: chrono::NaiveDateTime,
}

impl RoundResult {
    /// Solves in slot order, DNS slots omitted.
    pub fn entered_solves(&self) -> Vec<i64> {
        [
            self.solve1,
            self.solve2,
            self.solve3,
            self.solve4,
            self.solve5,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
