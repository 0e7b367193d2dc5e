use std::time::Duration;

use crate::domain::ChangelogPayload;
use crate::error::{ChangelogError, Result};
use crate::remote::MessageDelivery;

/// HTTP delivery of the rendered payload to a message API.
///
/// Posts `{ channel, text, blocks }` per destination, with an optional bearer
/// token. Transport specifics end here; the pipeline only sees
/// [MessageDelivery].
pub struct WebhookDelivery {
    client: reqwest::blocking::Client,
    endpoint: String,
    token: Option<String>,
}

impl WebhookDelivery {
    pub fn new(endpoint: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ChangelogError::config(format!("HTTP client setup failed: {}", e)))?;

        Ok(WebhookDelivery {
            client,
            endpoint: endpoint.into(),
            token,
        })
    }
}

impl MessageDelivery for WebhookDelivery {
    fn deliver(&self, destination: &str, payload: &ChangelogPayload) -> Result<()> {
        let body = serde_json::json!({
            "channel": destination,
            "text": payload.text,
            "blocks": payload.blocks,
        });

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| ChangelogError::delivery(destination, e.to_string()))?;

        let status = response.status();
        let response_body = response.text().unwrap_or_default();
        if !status.is_success() {
            return Err(ChangelogError::delivery(
                destination,
                format!("{}: {}", status, response_body),
            ));
        }

        Ok(())
    }
}
