use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Competitor;

/// Request payload for registering a user to a competition
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterCompetitorRequest {
    pub user_id: Uuid,

    #[validate(range(min = 0, max = 10, message = "Guest count must be between 0 and 10"))]
    #[serde(default)]
    pub guest_count: i32,

    /// Events the competitor enters; reconciled on later updates.
    #[serde(default)]
    pub cube_type_ids: Vec<Uuid>,
}

/// Desired event set for an existing competitor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetCompetitorCubeTypesRequest {
    pub cube_type_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompetitorResponse {
    pub competitor_id: Uuid,
    pub competition_id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub guest_count: i32,
    pub verified_at: Option<chrono::NaiveDateTime>,
    pub province_id: Option<Uuid>,
    pub district_id: Option<Uuid>,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Competitor> for CompetitorResponse {
    fn from(c: Competitor) -> Self {
        Self {
            competitor_id: c.competitor_id,
            competition_id: c.competition_id,
            user_id: c.user_id,
            status: c.status,
            guest_count: c.guest_count,
            verified_at: c.verified_at,
            province_id: c.province_id,
            district_id: c.district_id,
            created_at: c.created_at,
        }
    }
}
