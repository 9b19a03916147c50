use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{finish_round, generate_results, list_results, save_solves};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/rounds/:id/results/generate", post(generate_results))
        .route("/rounds/:id/finish", post(finish_round))
        .route("/results/:id/solves", put(save_solves))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/rounds/:id/results", get(list_results))
        .merge(protected)
}
