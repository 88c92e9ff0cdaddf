//! HTTP implementation of the inference client.
//!
//! One `POST /api/chat` per submission, no retry. Expected failure classes
//! all resolve into `RemoteError`; the session manager turns them into a
//! visible conversation entry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use vignan_core::client::{InferenceClient, RemoteError};
use vignan_core::config::BackendConfig;
use vignan_core::error::{AssistantError, Result};
use vignan_core::session::ChatMode;

const CHAT_PATH: &str = "/api/chat";

/// Client for the assistant backend's chat endpoint.
#[derive(Clone)]
pub struct HttpInferenceClient {
    client: Client,
    base_url: String,
}

impl HttpInferenceClient {
    /// Creates a client from backend configuration.
    ///
    /// The configured request timeout bounds the whole exchange; a timeout
    /// resolves the single attempt as a `Transport` failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AssistantError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Probes the backend's status endpoint (`GET /`).
    ///
    /// Advisory only: the caller may warn the user, but a failed probe does
    /// not block chatting.
    pub async fn health(&self) -> std::result::Result<(), RemoteError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .map_err(map_transport_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(RemoteError::status(
                response.status().as_u16(),
                "Backend status endpoint returned an error",
            ))
        }
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn send(&self, message: &str, mode: ChatMode) -> std::result::Result<String, RemoteError> {
        let url = format!("{}{}", self.base_url, CHAT_PATH);
        tracing::debug!("POST {} (mode: {})", url, mode);

        let response = self
            .client
            .post(url)
            .json(&ChatRequest {
                message,
                mode: mode.as_str(),
            })
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|err| RemoteError::MalformedResponse(err.to_string()))?;

        Ok(parsed.response)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    mode: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    response: String,
}

/// Error body shape the backend uses for failed requests.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

fn map_transport_error(err: reqwest::Error) -> RemoteError {
    RemoteError::Transport {
        message: err.to_string(),
        is_timeout: err.is_timeout(),
    }
}

fn map_http_error(status: StatusCode, body: String) -> RemoteError {
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|wrapper| wrapper.detail)
        .unwrap_or(body);

    RemoteError::status(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = ChatRequest {
            message: "exam fee?",
            mode: ChatMode::University.as_str(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"message": "exam fee?", "mode": "university"})
        );
    }

    #[test]
    fn test_response_wire_shape() {
        let parsed: ChatResponse =
            serde_json::from_str(r#"{"response":"The exam fee is ₹500."}"#).unwrap();
        assert_eq!(parsed.response, "The exam fee is ₹500.");
    }

    #[test]
    fn test_http_error_prefers_detail_field() {
        let err = map_http_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"detail":"model overloaded"}"#.to_string(),
        );
        assert_eq!(err, RemoteError::status(500, "model overloaded"));
    }

    #[test]
    fn test_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert_eq!(err, RemoteError::status(502, "upstream down"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let config = BackendConfig {
            base_url: "http://127.0.0.1:8000/".to_string(),
            request_timeout_secs: None,
        };
        let client = HttpInferenceClient::from_config(&config).unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:8000");
    }
}
