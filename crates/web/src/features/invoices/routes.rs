use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_invoice, get_invoice, payment_callback};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/competitors/:id/invoices", post(create_invoice))
        .route("/invoices/:id", get(get_invoice))
        .route("/qpay/:id", post(payment_callback))
}
