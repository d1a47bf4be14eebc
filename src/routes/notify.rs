use crate::models::responses::StatusResponse;
use crate::routes::ApiError;
use crate::AppState;
use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

#[derive(Debug, Deserialize)]
pub struct SlackMessage {
    pub text: Option<String>,
}

pub async fn send_slack_message(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SlackMessage>,
) -> Result<Json<StatusResponse>, ApiError> {
    let message = body
        .text
        .unwrap_or_else(|| "No message provided".to_string());

    match state.slack.send(&message).await {
        Ok(()) => Ok(Json(StatusResponse {
            status: "Message sent successfully".to_string(),
        })),
        Err(e) => {
            error!("Failed to send Slack message: {}", e);
            Err(ApiError::upstream(format!(
                "Failed to send Slack message: {}",
                e
            )))
        }
    }
}
