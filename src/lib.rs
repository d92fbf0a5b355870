pub mod config;
pub mod email;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod validate;

use std::sync::Arc;

use axum::Router;
use chrono::Utc;
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::email::Notifier;
use crate::state::{AppState, SharedState};
use crate::store::SubmissionStore;

pub fn build_app(store: SubmissionStore, config: Config) -> Router {
    let mailer = match Notifier::new(&config.smtp) {
        Ok(mailer) => {
            tracing::info!("SMTP notifier configured for {}", config.smtp.server);
            Some(mailer)
        }
        Err(e) => {
            tracing::warn!("SMTP not available, notifications disabled: {e}");
            None
        }
    };

    let state: SharedState = Arc::new(AppState {
        store,
        mailer,
        config,
    });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
