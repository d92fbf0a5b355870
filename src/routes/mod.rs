pub mod contact;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/contact", post(contact::submit))
        .route("/api/submissions", get(contact::list))
}
