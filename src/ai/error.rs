//! Assistant relay error types

use thiserror::Error;

/// Errors that can occur while asking the completion endpoint
#[derive(Debug, Error)]
pub enum AiError {
    #[error("No API key found in {0}")]
    MissingApiKey(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AiError {
    /// Short category name used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            AiError::MissingApiKey(_) => "missing_api_key",
            AiError::Api { .. } => "api",
            AiError::Network(_) => "network",
            AiError::InvalidResponse(_) => "invalid_response",
            AiError::Json(_) => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status() {
        let err = AiError::Api {
            status: 403,
            message: "API key not valid".to_string(),
        };
        assert_eq!(err.to_string(), "API error 403: API key not valid");
        assert_eq!(err.kind(), "api");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: AiError = parse.unwrap_err().into();
        assert_eq!(err.kind(), "json");
    }
}
