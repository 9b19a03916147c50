use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::record::{CreateRecordRequest, RecordResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/records",
    responses(
        (status = 200, description = "Current record per combination", body = Vec<RecordResponse>)
    ),
    tag = "records"
)]
pub async fn list_records(
    State(db): State<Database>,
) -> Result<Json<Vec<RecordResponse>>, WebError> {
    let records = services::list_current(db.pool()).await?;

    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/cube-types/{id}/records",
    params(
        ("id" = Uuid, Path, description = "Cube type ID")
    ),
    responses(
        (status = 200, description = "Current records for the cube type", body = Vec<RecordResponse>)
    ),
    tag = "records"
)]
pub async fn list_cube_type_records(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<RecordResponse>>, WebError> {
    let records = services::list_by_cube_type(db.pool(), id).await?;

    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/records",
    request_body = CreateRecordRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Record combination seeded", body = RecordResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "records"
)]
pub async fn create_record(
    State(db): State<Database>,
    Json(req): Json<CreateRecordRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    if matches!(req.scope.as_str(), "province" | "district") && req.region_id.is_none() {
        return Err(WebError::BadRequest(
            "region_id is required for province and district scopes".to_string(),
        ));
    }

    let record = services::create_record(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(RecordResponse::from(record))).into_response())
}
