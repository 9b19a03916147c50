use axum::{Router, middleware, routing::get, routing::post};
use storage::Database;

use super::handlers::{create_cube_type, list_cube_types};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/cube-types", post(create_cube_type))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/cube-types", get(list_cube_types))
        .merge(protected)
}
