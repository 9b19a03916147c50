use axum::{Router, middleware, routing::get, routing::post};
use storage::Database;

use super::handlers::{generate_scrambles, list_scramble_groups};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route(
            "/competitions/:slug/scrambles/generate",
            post(generate_scrambles),
        )
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/rounds/:id/scramble-groups", get(list_scramble_groups))
        .merge(protected)
}
