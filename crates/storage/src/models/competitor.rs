use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Registration lifecycle. Competitors are never hard-deleted; cancellation
/// is a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitorStatus {
    Created,
    Verified,
    Cancelled,
}

impl CompetitorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Verified => "verified",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Competitor {
    pub competitor_id: Uuid,
    pub competition_id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub guest_count: i32,
    pub verified_at: Option<chrono::NaiveDateTime>,
    /// Copied from the user at registration time so later profile edits do
    /// not move already-set records between regions.
    pub province_id: Option<Uuid>,
    pub district_id: Option<Uuid>,
    pub created_at: chrono::NaiveDateTime,
}
