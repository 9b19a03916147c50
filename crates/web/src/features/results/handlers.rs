use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::{
    Database,
    dto::{
        record::RecordResponse,
        result::{ResultResponse, SaveSolvesRequest},
    },
    services::record_detection::RecordSelection,
};
use utoipa::IntoParams;
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
pub struct FinishRoundParams {
    /// `first` (default) keeps the first qualifying result in fetch order,
    /// `best` keeps the minimum among all qualifiers.
    pub selection: Option<String>,
}

impl FinishRoundParams {
    fn record_selection(&self) -> Result<RecordSelection, WebError> {
        match self.selection.as_deref() {
            None | Some("first") => Ok(RecordSelection::FirstQualifier),
            Some("best") => Ok(RecordSelection::BestQualifier),
            Some(other) => Err(WebError::BadRequest(format!(
                "Unknown record selection policy: {other}"
            ))),
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/rounds/{id}/results/generate",
    params(
        ("id" = Uuid, Path, description = "Round ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Empty result rows seeded per verified competitor", body = Vec<ResultResponse>),
        (status = 400, description = "No verified competitors"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Round not found")
    ),
    tag = "results"
)]
pub async fn generate_results(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let results = services::generate_results(db.pool(), id).await?;

    let response: Vec<ResultResponse> = results.into_iter().map(ResultResponse::from).collect();

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/rounds/{id}/results",
    params(
        ("id" = Uuid, Path, description = "Round ID")
    ),
    responses(
        (status = 200, description = "Results of the round with display strings", body = Vec<ResultResponse>)
    ),
    tag = "results"
)]
pub async fn list_results(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ResultResponse>>, WebError> {
    let results = services::list_by_round(db.pool(), id).await?;

    Ok(Json(results.into_iter().map(ResultResponse::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/results/{id}/solves",
    params(
        ("id" = Uuid, Path, description = "Result ID")
    ),
    request_body = SaveSolvesRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Solves stored, best and average recomputed", body = ResultResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn save_solves(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<SaveSolvesRequest>,
) -> Result<Json<ResultResponse>, WebError> {
    if req.solves.len() > 5 {
        return Err(WebError::BadRequest(
            "At most five solve slots are accepted".to_string(),
        ));
    }

    let result = services::save_solves(db.pool(), id, &req.solves).await?;

    Ok(Json(ResultResponse::from(result)))
}

#[utoipa::path(
    post,
    path = "/api/rounds/{id}/finish",
    params(
        ("id" = Uuid, Path, description = "Round ID"),
        FinishRoundParams
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Record detection finished; new record rows returned", body = Vec<RecordResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Round not found")
    ),
    tag = "results"
)]
pub async fn finish_round(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Query(params): Query<FinishRoundParams>,
) -> Result<Json<Vec<RecordResponse>>, WebError> {
    let selection = params.record_selection()?;

    let records = services::finish_round(db.pool(), id, selection).await?;

    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}
