use crate::error::AdapterError;
use serde_json::{json, Value};
use tokio::time::Duration;

const GEMINI_MODEL: &str = "gemini-2.5-flash";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Thin client for the Gemini `generateContent` endpoint.
///
/// Holds a reusable `reqwest::Client`; cloning is cheap and safe across
/// concurrent requests. One attempt per call, no retry.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, GEMINI_BASE_URL.to_string())
    }

    /// Point the client at an alternative endpoint (used by tests to stand
    /// in for the hosted service).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            api_key,
            base_url,
        }
    }

    /// Submit a prompt and return the model's text response unmodified.
    pub async fn generate(&self, prompt: &str) -> Result<String, AdapterError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, GEMINI_MODEL, self.api_key
        );

        let payload = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        let res = self.client.post(&url).json(&payload).send().await?;

        if !res.status().is_success() {
            let status = res.status();
            let err_text = res.text().await.unwrap_or_default();
            log::error!("API Error: {}", err_text);
            return Err(AdapterError::GenerationFailed(format!(
                "API Error {status}: {err_text}"
            )));
        }

        let body: Value = res.json().await?;

        let text = body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| AdapterError::GenerationFailed("No text content returned".into()))?;

        Ok(text.to_string())
    }
}
