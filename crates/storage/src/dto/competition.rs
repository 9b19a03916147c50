use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Competition;

/// Request payload for creating a new competition
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCompetitionRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Slug must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[validate(custom(function = "validate_status"))]
    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default)]
    pub base_fee: Decimal,

    /// Added per selected cube type when invoicing a competitor.
    #[serde(default)]
    pub cube_type_fee: Decimal,

    #[serde(default)]
    pub guest_fee: Decimal,
}

/// Request payload for updating an existing competition
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCompetitionRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,

    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,

    pub base_fee: Option<Decimal>,

    pub cube_type_fee: Option<Decimal>,

    pub guest_fee: Option<Decimal>,
}

/// Desired cube-type association set; the endpoint reconciles against the
/// stored rows.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetCubeTypesRequest {
    pub cube_type_ids: Vec<Uuid>,
}

/// Response containing competition details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompetitionResponse {
    pub competition_id: Uuid,
    pub name: String,
    pub slug: String,
    pub status: String,
    pub base_fee: Decimal,
    pub cube_type_fee: Decimal,
    pub guest_fee: Decimal,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Competition> for CompetitionResponse {
    fn from(c: Competition) -> Self {
        Self {
            competition_id: c.competition_id,
            name: c.name,
            slug: c.slug,
            status: c.status,
            base_fee: c.base_fee,
            cube_type_fee: c.cube_type_fee,
            guest_fee: c.guest_fee,
            created_at: c.created_at,
        }
    }
}

// Validation helpers
fn default_status() -> String {
    "draft".to_string()
}

fn validate_slug(slug: &str) -> Result<(), validator::ValidationError> {
    let is_valid = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--");

    if is_valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_slug"))
    }
}

fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    const VALID_STATUSES: &[&str] = &["draft", "upcoming", "live", "completed", "cancelled"];

    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_validation() {
        assert!(validate_slug("spring-open-2026").is_ok());
        assert!(validate_slug("Spring").is_err());
        assert!(validate_slug("-spring").is_err());
        assert!(validate_slug("spring--open").is_err());
    }
}
