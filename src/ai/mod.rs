//! Assistant relay: compose a prompt from the portfolio content, forward it
//! to the completion endpoint and turn the outcome into display text.

mod error;
mod gemini;
pub mod prompt;

pub use error::AiError;
pub use gemini::GeminiClient;

use crate::i18n::{tr, Text};
use crate::settings::Settings;
use crate::state::{AiRequest, AssistantReply};
use tracing::{info, warn};

/// Map a relay outcome to the text shown under the question box.
/// Failures never leak their raw message; they become the localized error.
pub fn resolve_answer(
    result: Result<Option<String>, AiError>,
    request: &AiRequest,
) -> AssistantReply {
    let lang = request.lang;
    let (text, is_error) = match result {
        Ok(Some(text)) => (text, false),
        Ok(None) => (tr(Text::AssistantEmpty, lang, request.theme).to_string(), false),
        Err(e) => {
            warn!(error = %e, kind = e.kind(), "Assistant request failed");
            (tr(Text::AssistantError, lang, request.theme).to_string(), true)
        }
    };
    AssistantReply { text, is_error }
}

/// Run one question end to end and return the display text
pub async fn relay(
    http: reqwest::Client,
    settings: Settings,
    request: AiRequest,
) -> AssistantReply {
    info!(theme = ?request.theme, lang = ?request.lang, "Forwarding question to assistant");
    let result = match GeminiClient::from_settings(http, &settings) {
        Ok(client) => client.ask(&prompt::compose(&request)).await,
        Err(e) => Err(e),
    };
    resolve_answer(result, &request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Language, Theme};

    fn request(lang: Language) -> AiRequest {
        AiRequest {
            question: "Kafka?".to_string(),
            theme: Theme::Coffee,
            lang,
        }
    }

    #[test]
    fn test_success_passes_text_through() {
        let reply = resolve_answer(Ok(Some("Yes.".to_string())), &request(Language::En));
        assert_eq!(reply.text, "Yes.");
        assert!(!reply.is_error);
    }

    #[test]
    fn test_empty_completion_uses_fallback() {
        let reply = resolve_answer(Ok(None), &request(Language::Pt));
        assert_eq!(reply.text, "Desculpe, não consegui processar isso.");
        assert!(!reply.is_error);
        assert_eq!(
            resolve_answer(Ok(None), &request(Language::En)).text,
            "Sorry, I couldn't process that."
        );
    }

    #[test]
    fn test_blocked_prompt_uses_fallback_not_error() {
        let blocked = gemini::extract_text(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        let reply = resolve_answer(blocked, &request(Language::En));
        assert_eq!(reply.text, "Sorry, I couldn't process that.");
        assert!(!reply.is_error);
    }

    #[test]
    fn test_failure_shows_localized_error_not_raw() {
        let err = AiError::Api {
            status: 500,
            message: "internal".to_string(),
        };
        let reply = resolve_answer(Err(err), &request(Language::En));
        assert_eq!(reply.text, "Error connecting to AI.");
        assert!(reply.is_error);
        assert!(!reply.text.contains("internal"));

        let err = AiError::InvalidResponse("bad".to_string());
        assert_eq!(
            resolve_answer(Err(err), &request(Language::Pt)).text,
            "Erro ao conectar com a IA."
        );
    }

    #[tokio::test]
    async fn test_relay_failure_yields_localized_error() {
        let settings = Settings {
            ai_base_url: "http://127.0.0.1:9".to_string(),
            ..Settings::default()
        };
        // Either the key is missing or the endpoint refuses; both map to the same text
        let reply = relay(reqwest::Client::new(), settings, request(Language::Pt)).await;
        assert_eq!(reply.text, "Erro ao conectar com a IA.");
        assert!(reply.is_error);
    }
}
