use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::round::{CreateRoundRequest, RoundResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/competitions/{slug}/rounds",
    params(
        ("slug" = String, Path, description = "Competition slug")
    ),
    request_body = CreateRoundRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Round created", body = RoundResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found")
    ),
    tag = "rounds"
)]
pub async fn create_round(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Json(req): Json<CreateRoundRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let round = services::create_round(db.pool(), &slug, &req).await?;

    Ok((StatusCode::CREATED, Json(RoundResponse::from(round))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitions/{slug}/rounds",
    params(
        ("slug" = String, Path, description = "Competition slug")
    ),
    responses(
        (status = 200, description = "Rounds of the competition", body = Vec<RoundResponse>),
        (status = 404, description = "Competition not found")
    ),
    tag = "rounds"
)]
pub async fn list_rounds(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<RoundResponse>>, WebError> {
    let rounds = services::list_by_competition(db.pool(), &slug).await?;

    Ok(Json(rounds.into_iter().map(RoundResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/rounds/{id}",
    params(
        ("id" = Uuid, Path, description = "Round ID")
    ),
    responses(
        (status = 200, description = "Round found", body = RoundResponse),
        (status = 404, description = "Round not found")
    ),
    tag = "rounds"
)]
pub async fn get_round(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoundResponse>, WebError> {
    let round = services::get_round(db.pool(), id).await?;

    Ok(Json(RoundResponse::from(round)))
}

#[utoipa::path(
    delete,
    path = "/api/rounds/{id}",
    params(
        ("id" = Uuid, Path, description = "Round ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Round deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Round not found")
    ),
    tag = "rounds"
)]
pub async fn delete_round(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_round(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
