use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::invoice::{InvoiceResponse, PaymentCallbackRequest},
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/competitors/{id}/invoices",
    params(
        ("id" = Uuid, Path, description = "Competitor ID")
    ),
    responses(
        (status = 201, description = "Invoice created", body = InvoiceResponse),
        (status = 404, description = "Competitor not found")
    ),
    tag = "invoices"
)]
pub async fn create_invoice(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let invoice = services::create_invoice(db.pool(), id).await?;

    Ok((StatusCode::CREATED, Json(InvoiceResponse::from(invoice))).into_response())
}

/// Clients poll this until `is_paid` flips.
#[utoipa::path(
    get,
    path = "/api/invoices/{id}",
    params(
        ("id" = Uuid, Path, description = "Invoice ID")
    ),
    responses(
        (status = 200, description = "Invoice state", body = InvoiceResponse),
        (status = 404, description = "Invoice not found")
    ),
    tag = "invoices"
)]
pub async fn get_invoice(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvoiceResponse>, WebError> {
    let invoice = services::find_invoice(db.pool(), id).await?;

    Ok(Json(InvoiceResponse::from(invoice)))
}

#[utoipa::path(
    post,
    path = "/api/qpay/{id}",
    params(
        ("id" = Uuid, Path, description = "Invoice ID")
    ),
    request_body = PaymentCallbackRequest,
    responses(
        (status = 200, description = "Payment recorded", body = InvoiceResponse),
        (status = 404, description = "Invoice not found"),
        (status = 409, description = "Paid amount does not cover the invoice")
    ),
    tag = "invoices"
)]
pub async fn payment_callback(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<PaymentCallbackRequest>,
) -> Result<Json<InvoiceResponse>, WebError> {
    let invoice = services::confirm_payment(db.pool(), id, req.paid_amount).await?;

    Ok(Json(InvoiceResponse::from(invoice)))
}
