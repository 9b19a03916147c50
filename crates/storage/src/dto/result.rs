use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::RoundResult;
use crate::services::solve_time;

/// One solve slot as entered by an operator: either the packed timer
/// integer or a punctuated display string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SolveInput {
    Millis(i64),
    Display(String),
}

impl SolveInput {
    /// Canonical milliseconds, or `None` for a malformed display string or
    /// an out-of-range packed value (the stored solve is then left
    /// unchanged).
    pub fn to_millis(&self) -> Option<i64> {
        match self {
            Self::Millis(packed) => solve_time::parse_compressed(*packed),
            Self::Display(s) => solve_time::parse_display(s),
        }
    }
}

/// Five optional slots; a `null` slot leaves the stored solve untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveSolvesRequest {
    pub solves: Vec<Option<SolveInput>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultResponse {
    pub result_id: Uuid,
    pub round_id: Uuid,
    pub competitor_id: Uuid,
    pub group_no: String,
    pub result_format: String,
    /// Display strings for the five slots ("DNS" / "DNF" included).
    pub solves: Vec<String>,
    pub best: String,
    pub average: String,
    pub best_ms: Option<i64>,
    pub average_ms: Option<i64>,
}

impl From<RoundResult> for ResultResponse {
    fn from(r: RoundResult) -> Self {
        let solves = [r.solve1, r.solve2, r.solve3, r.solve4, r.solve5]
            .into_iter()
            .map(solve_time::format_ms)
            .collect();

        Self {
            result_id: r.result_id,
            round_id: r.round_id,
            competitor_id: r.competitor_id,
            group_no: r.group_no,
            result_format: r.result_format,
            solves,
            best: solve_time::format_ms(r.best),
            average: solve_time::format_ms(r.average),
            best_ms: r.best,
            average_ms: r.average,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_input_converts() {
        assert_eq!(SolveInput::Millis(1_234).to_millis(), Some(12_340));
        assert_eq!(SolveInput::Millis(-1).to_millis(), Some(-1));
    }

    #[test]
    fn test_overflowing_packed_input_is_rejected() {
        assert_eq!(SolveInput::Millis(i64::MAX).to_millis(), None);
    }

    #[test]
    fn test_malformed_display_input_is_rejected() {
        assert_eq!(SolveInput::Display("oops".into()).to_millis(), None);
        assert_eq!(
            SolveInput::Display("1:05.0".into()).to_millis(),
            Some(65_000)
        );
    }
}
