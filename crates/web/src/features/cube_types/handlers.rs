use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use storage::{Database, models::CubeType};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCubeTypeRequest {
    /// Scrambler puzzle key, e.g. `333` or `pyram`.
    #[validate(length(min = 1, max = 50))]
    pub name: String,

    #[serde(default)]
    pub display_order: i32,
}

#[utoipa::path(
    get,
    path = "/api/cube-types",
    responses(
        (status = 200, description = "All cube types in display order", body = Vec<CubeType>)
    ),
    tag = "cube-types"
)]
pub async fn list_cube_types(State(db): State<Database>) -> Result<Json<Vec<CubeType>>, WebError> {
    let cube_types = services::list_cube_types(db.pool()).await?;

    Ok(Json(cube_types))
}

#[utoipa::path(
    post,
    path = "/api/cube-types",
    request_body = CreateCubeTypeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Cube type created", body = CubeType),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Cube type already exists")
    ),
    tag = "cube-types"
)]
pub async fn create_cube_type(
    State(db): State<Database>,
    Json(req): Json<CreateCubeTypeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let cube_type = services::create_cube_type(db.pool(), &req.name, req.display_order).await?;

    Ok((StatusCode::CREATED, Json(cube_type)).into_response())
}
