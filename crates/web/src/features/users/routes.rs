use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_user, get_user};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", get(get_user))
}
