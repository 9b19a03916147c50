use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    cancel_competitor, list_competitor_cube_types, list_competitors, register_competitor,
    set_competitor_cube_types, verify_competitor,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/competitors/:id/verify", post(verify_competitor))
        .route("/competitors/:id/cancel", post(cancel_competitor))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route(
            "/competitions/:slug/competitors",
            post(register_competitor).get(list_competitors),
        )
        .route(
            "/competitors/:id/cube-types",
            get(list_competitor_cube_types).put(set_competitor_cube_types),
        )
        .merge(protected)
}
