use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, models::ScrambleGroup};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/competitions/{slug}/scrambles/generate",
    params(
        ("slug" = String, Path, description = "Competition slug")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Scramble groups generated for every cube type and round", body = Vec<ScrambleGroup>),
        (status = 400, description = "Unknown puzzle name"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found")
    ),
    tag = "scrambles"
)]
pub async fn generate_scrambles(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let groups = services::generate_scrambles(db.pool(), &slug).await?;

    Ok((StatusCode::CREATED, Json(groups)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/rounds/{id}/scramble-groups",
    params(
        ("id" = Uuid, Path, description = "Round ID")
    ),
    responses(
        (status = 200, description = "Scramble groups of the round", body = Vec<ScrambleGroup>)
    ),
    tag = "scrambles"
)]
pub async fn list_scramble_groups(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ScrambleGroup>>, WebError> {
    let groups = services::list_by_round(db.pool(), id).await?;

    Ok(Json(groups))
}
