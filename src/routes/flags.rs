use crate::models::responses::StatusResponse;
use crate::routes::ApiError;
use crate::AppState;
use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct FlagToggle {
    #[serde(default)]
    pub value: bool,
}

pub async fn toggle_last_button_flag(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FlagToggle>,
) -> Result<Json<StatusResponse>, ApiError> {
    info!("Toggling last-button flag to {}", body.value);

    match state.flags.set_last_button(body.value).await {
        Ok(()) => Ok(Json(StatusResponse {
            status: "Feature flag toggled successfully".to_string(),
        })),
        Err(e) => {
            error!("Failed to toggle feature flag: {}", e);
            Err(ApiError::upstream(format!(
                "Failed to toggle feature flag: {}",
                e
            )))
        }
    }
}
