use crate::config::ProviderType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key was configured for the provider. Raised on first use, never at construction.
    #[error("Missing credentials for {provider}: set {env_var}")]
    MissingCredentials {
        provider: ProviderType,
        env_var: &'static str,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} API error ({status}): {message}")]
    Api {
        provider: ProviderType,
        status: u16,
        message: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rejected locally before anything was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, LlmError>;

impl LlmError {
    /// Map a non-success provider response to [`LlmError::Api`].
    ///
    /// Both providers wrap failures as `{"error": {"message": ...}}`; anything
    /// else is reported verbatim.
    pub(crate) fn from_status(provider: ProviderType, status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
            .filter(|m| !m.trim().is_empty())
            .or_else(|| (!body.trim().is_empty()).then(|| body.to_string()))
            .unwrap_or_else(|| {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("no response body")
                    .to_string()
            });

        LlmError::Api {
            provider,
            status,
            message,
        }
    }

    /// Consume an error response. A body that cannot be read is logged and
    /// treated as empty.
    pub(crate) async fn from_response(provider: ProviderType, response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        tracing::warn!(%provider, status, "Provider returned an error");

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(%provider, status, error = %e, "Failed to read error body");
                String::new()
            }
        };

        Self::from_status(provider, status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_extracts_error_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let err = LlmError::from_status(ProviderType::OpenAI, 401, body);

        assert_eq!(err.to_string(), "OpenAI API error (401): Incorrect API key provided");
    }

    #[test]
    fn test_from_status_falls_back_to_body() {
        let err = LlmError::from_status(ProviderType::Anthropic, 502, "Bad Gateway");
        assert!(matches!(err, LlmError::Api { status: 502, ref message, .. } if message == "Bad Gateway"));
    }

    #[test]
    fn test_from_status_empty_body_uses_reason_phrase() {
        let err = LlmError::from_status(ProviderType::OpenAI, 503, "");
        assert_eq!(err.to_string(), "OpenAI API error (503): Service Unavailable");

        let err = LlmError::from_status(ProviderType::Anthropic, 529, "  ");
        assert!(matches!(err, LlmError::Api { ref message, .. } if message == "no response body"));
    }
}
