use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{create_round, delete_round, get_round, list_rounds};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/competitions/:slug/rounds", post(create_round))
        .route("/rounds/:id", delete(delete_round))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/competitions/:slug/rounds", get(list_rounds))
        .route("/rounds/:id", get(get_round))
        .merge(protected)
}
