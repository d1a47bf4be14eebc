use crate::services::UpstreamError;
use reqwest::Client;

pub const LD_FLAG_URL: &str = "https://app.launchdarkly.com/api/v2/flags/default/last-button";

/// Relays boolean toggles to the flag-management service as a JSON-patch
/// PATCH against the `last-button` flag's test environment.
pub struct FlagClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl FlagClient {
    pub fn with_base_url(http: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
        }
    }

    pub async fn set_last_button(&self, value: bool) -> Result<(), UpstreamError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(UpstreamError::MissingConfig("LD_API_KEY"))?;

        let payload = serde_json::json!({
            "patch": [
                {
                    "op": "replace",
                    "path": "/environments/test/on",
                    "value": value
                }
            ]
        });

        let response = self
            .http
            .patch(&self.base_url)
            .header("Authorization", api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        Ok(())
    }
}
