use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_record, list_cube_type_records, list_records};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/records", post(create_record))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/records", get(list_records))
        .route("/cube-types/:id/records", get(list_cube_type_records))
        .merge(protected)
}
