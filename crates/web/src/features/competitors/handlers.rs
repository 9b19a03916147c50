use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::competitor::{
        CompetitorResponse, RegisterCompetitorRequest, SetCompetitorCubeTypesRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/competitions/{slug}/competitors",
    params(
        ("slug" = String, Path, description = "Competition slug")
    ),
    request_body = RegisterCompetitorRequest,
    responses(
        (status = 201, description = "Registration created", body = CompetitorResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Competition or user not found"),
        (status = 409, description = "User already registered")
    ),
    tag = "competitors"
)]
pub async fn register_competitor(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Json(req): Json<RegisterCompetitorRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let competitor = services::register(db.pool(), &slug, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(CompetitorResponse::from(competitor)),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitions/{slug}/competitors",
    params(
        ("slug" = String, Path, description = "Competition slug")
    ),
    responses(
        (status = 200, description = "Registrations in registration order", body = Vec<CompetitorResponse>),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitors"
)]
pub async fn list_competitors(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<CompetitorResponse>>, WebError> {
    let competitors = services::list_by_competition(db.pool(), &slug).await?;

    Ok(Json(
        competitors.into_iter().map(CompetitorResponse::from).collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/competitors/{id}/verify",
    params(
        ("id" = Uuid, Path, description = "Competitor ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Competitor verified", body = CompetitorResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competitor not found")
    ),
    tag = "competitors"
)]
pub async fn verify_competitor(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompetitorResponse>, WebError> {
    let competitor = services::verify(db.pool(), id).await?;

    Ok(Json(CompetitorResponse::from(competitor)))
}

#[utoipa::path(
    post,
    path = "/api/competitors/{id}/cancel",
    params(
        ("id" = Uuid, Path, description = "Competitor ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Registration cancelled", body = CompetitorResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competitor not found")
    ),
    tag = "competitors"
)]
pub async fn cancel_competitor(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompetitorResponse>, WebError> {
    let competitor = services::cancel(db.pool(), id).await?;

    Ok(Json(CompetitorResponse::from(competitor)))
}

#[utoipa::path(
    get,
    path = "/api/competitors/{id}/cube-types",
    params(
        ("id" = Uuid, Path, description = "Competitor ID")
    ),
    responses(
        (status = 200, description = "Selected cube type IDs", body = Vec<Uuid>)
    ),
    tag = "competitors"
)]
pub async fn list_competitor_cube_types(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Uuid>>, WebError> {
    let ids = services::list_cube_type_ids(db.pool(), id).await?;

    Ok(Json(ids))
}

#[utoipa::path(
    put,
    path = "/api/competitors/{id}/cube-types",
    params(
        ("id" = Uuid, Path, description = "Competitor ID")
    ),
    request_body = SetCompetitorCubeTypesRequest,
    responses(
        (status = 204, description = "Event selection reconciled"),
        (status = 404, description = "Competitor not found")
    ),
    tag = "competitors"
)]
pub async fn set_competitor_cube_types(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetCompetitorCubeTypesRequest>,
) -> Result<Response, WebError> {
    services::set_cube_types(db.pool(), id, &req.cube_type_ids).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
