// src/api/client.rs

use super::{config, errors::OllamaError};
use crate::models::request_payload::RequestPayload;
use reqwest::{Client, StatusCode};

/// API client for the local Ollama generate endpoint.
pub struct OllamaApi {
    client: Client,
    base_url: String,
}

impl OllamaApi {
    /// Creates a new `OllamaApi` pointed at the local service.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: config::BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder().no_proxy().build().unwrap_or_default(),
            base_url: base_url.into(),
        }
    }

    /// Posts the payload and returns the complete raw response body.
    ///
    /// The body is buffered in full; fragments are not consumed as they
    /// arrive. Anything other than `200 OK` is an `HttpFailure`.
    pub async fn generate(&self, payload: &RequestPayload) -> Result<String, OllamaError> {
        log::info!("Waiting for response...");
        log::debug!(
            "POST {}{} (model {}, {} prompt bytes)",
            self.base_url,
            config::GENERATE_PATH,
            payload.model,
            payload.prompt.len()
        );

        let response = self
            .client
            .post(format!("{}{}", self.base_url, config::GENERATE_PATH))
            .json(payload)
            .send()
            .await?;

        log::info!("Response from server received.");

        let status = response.status();
        if status != StatusCode::OK {
            return Err(OllamaError::HttpFailure(status));
        }

        let raw_response = response.text().await?;
        log::debug!("Raw response body: {} bytes", raw_response.len());
        Ok(raw_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::spawn_generate_server;
    use axum::http::StatusCode as AxumStatus;

    #[tokio::test]
    async fn generate_returns_raw_body_on_ok() {
        let body = "{\"response\":\"Hello\"}\n{\"response\":\" World\"}\n";
        let server = spawn_generate_server(AxumStatus::OK, body).await;
        let api = OllamaApi::with_base_url(server.base_url.clone());

        let raw = api
            .generate(&RequestPayload::new("Review:", "int x;"))
            .await
            .unwrap();
        assert_eq!(raw, body);
    }

    #[tokio::test]
    async fn generate_sends_payload_fields() {
        let server = spawn_generate_server(AxumStatus::OK, "").await;
        let api = OllamaApi::with_base_url(server.base_url.clone());

        api.generate(&RequestPayload::new("Review:", "int x;"))
            .await
            .unwrap();

        let payload = server.received.lock().unwrap().clone().unwrap();
        assert_eq!(payload["model"], "codellama");
        assert_eq!(payload["prompt"], "Review: int x;");
        assert_eq!(payload["max_tokens"], 100);
        assert!((payload["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[tokio::test]
    async fn non_ok_status_is_http_failure() {
        let server =
            spawn_generate_server(AxumStatus::INTERNAL_SERVER_ERROR, "model not found").await;
        let api = OllamaApi::with_base_url(server.base_url.clone());

        let err = api
            .generate(&RequestPayload::new("Review:", "int x;"))
            .await
            .unwrap_err();
        match err {
            OllamaError::HttpFailure(status) => assert_eq!(status.as_u16(), 500),
            other => panic!("expected HttpFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn other_success_codes_are_still_failures() {
        let server = spawn_generate_server(AxumStatus::ACCEPTED, "").await;
        let api = OllamaApi::with_base_url(server.base_url.clone());

        let err = api
            .generate(&RequestPayload::new("", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, OllamaError::HttpFailure(s) if s.as_u16() == 202));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_request_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let api = OllamaApi::with_base_url(format!("http://{addr}"));

        let err = api
            .generate(&RequestPayload::new("", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, OllamaError::RequestError(_)));
    }
}
