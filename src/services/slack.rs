use crate::services::UpstreamError;
use reqwest::Client;

/// Relays text messages to the team chat webhook. The payload is forwarded
/// untransformed as `{"text": ...}`.
pub struct SlackNotifier {
    http: Client,
    webhook_url: Option<String>,
}

impl SlackNotifier {
    pub fn new(http: Client, webhook_url: Option<String>) -> Self {
        Self { http, webhook_url }
    }

    pub async fn send(&self, text: &str) -> Result<(), UpstreamError> {
        let url = self
            .webhook_url
            .as_deref()
            .ok_or(UpstreamError::MissingConfig("SLACK_WEBHOOK_URL"))?;

        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        Ok(())
    }
}
