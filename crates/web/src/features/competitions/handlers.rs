use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::competition::{
        CompetitionResponse, CreateCompetitionRequest, SetCubeTypesRequest,
        UpdateCompetitionRequest,
    },
    models::CubeType,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions",
    responses(
        (status = 200, description = "List all competitions", body = Vec<CompetitionResponse>)
    ),
    tag = "competitions"
)]
pub async fn list_competitions(
    State(db): State<Database>,
) -> Result<Json<Vec<CompetitionResponse>>, WebError> {
    let competitions = services::list_competitions(db.pool()).await?;

    let response: Vec<CompetitionResponse> = competitions
        .into_iter()
        .map(CompetitionResponse::from)
        .collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/competitions/{slug}",
    params(
        ("slug" = String, Path, description = "Competition slug")
    ),
    responses(
        (status = 200, description = "Competition found", body = CompetitionResponse),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn get_competition(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let competition = services::get_competition_by_slug(db.pool(), &slug).await?;

    Ok(Json(CompetitionResponse::from(competition)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/competitions",
    request_body = CreateCompetitionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Competition created", body = CompetitionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Slug already exists")
    ),
    tag = "competitions"
)]
pub async fn create_competition(
    State(db): State<Database>,
    Json(req): Json<CreateCompetitionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let competition = services::create_competition(db.pool(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(CompetitionResponse::from(competition)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/competitions/{slug}",
    params(
        ("slug" = String, Path, description = "Competition slug")
    ),
    request_body = UpdateCompetitionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Competition updated", body = CompetitionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn update_competition(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Json(update_req): Json<UpdateCompetitionRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_competition(db.pool(), &slug, &update_req).await?;

    Ok(Json(CompetitionResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/competitions/{slug}",
    params(
        ("slug" = String, Path, description = "Competition slug")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Competition deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn delete_competition(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    services::delete_competition(db.pool(), &slug).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitions/{slug}/cube-types",
    params(
        ("slug" = String, Path, description = "Competition slug")
    ),
    responses(
        (status = 200, description = "Cube types offered by the competition", body = Vec<CubeType>),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn list_competition_cube_types(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<CubeType>>, WebError> {
    let cube_types = services::list_cube_types(db.pool(), &slug).await?;

    Ok(Json(cube_types))
}

#[utoipa::path(
    put,
    path = "/api/competitions/{slug}/cube-types",
    params(
        ("slug" = String, Path, description = "Competition slug")
    ),
    request_body = SetCubeTypesRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Cube types reconciled"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn set_competition_cube_types(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Json(req): Json<SetCubeTypesRequest>,
) -> Result<Response, WebError> {
    services::set_cube_types(db.pool(), &slug, &req.cube_type_ids).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
