use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_competition, delete_competition, get_competition, list_competition_cube_types,
    list_competitions, set_competition_cube_types, update_competition,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/competitions", post(create_competition))
        .route("/competitions/:slug", put(update_competition))
        .route("/competitions/:slug", delete(delete_competition))
        .route(
            "/competitions/:slug/cube-types",
            put(set_competition_cube_types),
        )
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/competitions", get(list_competitions))
        .route("/competitions/:slug", get(get_competition))
        .route(
            "/competitions/:slug/cube-types",
            get(list_competition_cube_types),
        )
        .merge(protected)
}
