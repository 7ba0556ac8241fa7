//! Google Gemini `generateContent` client
//!
//! One POST per question, no retries. The API key is read from the
//! environment each time a client is built so a key exported after launch
//! is picked up on the next question.

use super::AiError;
use crate::constants::API_KEY_VARS;
use crate::settings::Settings;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
    /// Thought summaries are flagged and never shown
    #[serde(default)]
    thought: bool,
}

pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
    thinking_budget: u32,
}

/// First non-empty API key among the configured environment variables
pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|key| !key.trim().is_empty())
}

impl GeminiClient {
    pub fn new(http: Client, api_key: String, settings: &Settings) -> Self {
        Self {
            http,
            api_key,
            base_url: settings.ai_base_url.trim_end_matches('/').to_string(),
            model: settings.ai_model.clone(),
            thinking_budget: settings.ai_thinking_budget,
        }
    }

    /// Build a client using the API key from the environment
    pub fn from_settings(http: Client, settings: &Settings) -> Result<Self, AiError> {
        let api_key =
            api_key_from_env().ok_or_else(|| AiError::MissingApiKey(API_KEY_VARS.join(" / ")))?;
        Ok(Self::new(http, api_key, settings))
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }],
            "generationConfig": {
                "thinkingConfig": { "thinkingBudget": self.thinking_budget },
            },
        })
    }

    /// Send the prompt and return the completion text, `None` when the
    /// model answered with no visible text.
    pub async fn ask(&self, prompt: &str) -> Result<Option<String>, AiError> {
        let url = self.endpoint();
        debug!(model = %self.model, prompt_len = prompt.len(), "Sending completion request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.build_request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AiError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let text = extract_text(&body)?;
        debug!(answer_len = text.as_ref().map_or(0, |t| t.len()), "Completion received");
        Ok(text)
    }
}

/// Concatenate the visible text parts of the first candidate
pub(super) fn extract_text(body: &str) -> Result<Option<String>, AiError> {
    if body.trim().is_empty() {
        return Err(AiError::InvalidResponse("empty response body".into()));
    }
    let parsed: GenerateResponse = serde_json::from_str(body)?;
    // A blocked prompt carries only `promptFeedback` and no candidates
    let Some(candidate) = parsed.candidates.into_iter().next() else {
        return Ok(None);
    };

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter(|p| !p.thought)
        .filter_map(|p| p.text)
        .collect();

    let text = text.trim();
    Ok((!text.is_empty()).then(|| text.to_string()))
}

/// Pull `error.message` out of an error body, falling back to the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> GeminiClient {
        let settings = Settings {
            ai_base_url: base_url.to_string(),
            ..Settings::default()
        };
        GeminiClient::new(Client::new(), "test-key".to_string(), &settings)
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let c = client("https://example.test/");
        assert_eq!(
            c.endpoint(),
            "https://example.test/v1beta/models/gemini-3-pro-preview:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = client("https://example.test").build_request_body("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            body["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            1000
        );
    }

    #[test]
    fn test_extract_text_joins_parts_and_skips_thoughts() {
        let body = r#"{"candidates":[{"content":{"parts":[
            {"text":"thinking...","thought":true},
            {"text":"He uses Kafka "},
            {"text":"for async billing."}
        ]}}]}"#;
        assert_eq!(
            extract_text(body).unwrap().as_deref(),
            Some("He uses Kafka for async billing.")
        );
    }

    #[test]
    fn test_extract_text_empty_is_none() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#;
        assert!(extract_text(body).unwrap().is_none());

        let body = r#"{"candidates":[{"finishReason":"SAFETY"}]}"#;
        assert!(extract_text(body).unwrap().is_none());
    }

    #[test]
    fn test_extract_text_without_candidates_is_none() {
        let blocked = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        assert!(extract_text(blocked).unwrap().is_none());
        assert!(extract_text(r#"{"candidates":[]}"#).unwrap().is_none());
    }

    #[test]
    fn test_extract_text_malformed_body_is_error() {
        let err = extract_text("<html>").unwrap_err();
        assert!(matches!(err, AiError::Json(_)));

        let err = extract_text(r#"{"candidates":"oops"}"#).unwrap_err();
        assert!(matches!(err, AiError::Json(_)));

        let err = extract_text("  ").unwrap_err();
        assert!(matches!(err, AiError::InvalidResponse(_)));
    }

    #[test]
    fn test_error_message_prefers_api_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid."}}"#;
        assert_eq!(error_message(body), "API key not valid.");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let c = client("http://127.0.0.1:9");
        let err = c.ask("hello").await.unwrap_err();
        assert!(matches!(err, AiError::Network(_)));
    }
}
