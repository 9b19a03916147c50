use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use storage::{Database, models::User};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    pub province_id: Option<Uuid>,

    pub district_id: Option<Uuid>,
}

fn validate_gender(gender: &str) -> Result<(), validator::ValidationError> {
    if gender == "male" || gender == "female" {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_gender"))
    }
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(db): State<Database>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let user = services::create_user(
        db.pool(),
        &req.name,
        &req.gender,
        req.province_id,
        req.district_id,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, WebError> {
    let user = services::get_user(db.pool(), id).await?;

    Ok(Json(user))
}
