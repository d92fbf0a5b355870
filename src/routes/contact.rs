use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::ContactPayload;
use crate::state::SharedState;
use crate::validate;

/// POST /api/contact. Validate, persist, then attempt the email
/// notification. Persistence always happens before the notification attempt,
/// and a failed notification still counts as a successful submission.
pub async fn submit(
    State(state): State<SharedState>,
    Json(payload): Json<ContactPayload>,
) -> Response {
    if validate::require_fields(&payload).is_err() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Missing required fields",
            })),
        )
            .into_response();
    }

    let submission = match state.store.append(&payload).await {
        Ok(submission) => submission,
        Err(e) => {
            tracing::error!("Failed to store submission: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": format!("Error processing request: {e}"),
                })),
            )
                .into_response();
        }
    };

    let email_sent = match &state.mailer {
        Some(mailer) => {
            mailer
                .send(
                    submission.name.as_deref().unwrap_or_default(),
                    submission.email.as_deref().unwrap_or_default(),
                    submission.subject.as_deref().unwrap_or_default(),
                    submission.message.as_deref().unwrap_or_default(),
                )
                .await
        }
        None => false,
    };

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Message received successfully!",
            "email_sent": email_sent,
        })),
    )
        .into_response()
}

/// GET /api/submissions. Unauthenticated by design; see DESIGN.md.
pub async fn list(State(state): State<SharedState>) -> Response {
    match state.store.load_all().await {
        Ok(submissions) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "count": submissions.len(),
                "submissions": submissions,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to load submissions: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": format!("Error retrieving submissions: {e}"),
                })),
            )
                .into_response()
        }
    }
}
