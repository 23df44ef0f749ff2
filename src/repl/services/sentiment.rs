//! # Sentiment Service
//!
//! Sends text to the sentiment endpoint and reports results back to the
//! event loop through a channel, so the view keeps redrawing while a request
//! is in flight.

use crate::config::backend_base;
use crate::error::{AnalysisError, ServiceError};
use crate::repl::models::{BackendHealth, PendingRequest};
use anyhow::Result;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use tokio::sync::mpsc;

/// Request body sent to the endpoint
#[derive(Debug, Serialize)]
pub struct SentimentRequestBody<'a> {
    pub text: &'a str,
}

/// Response body expected from the endpoint
#[derive(Debug, Deserialize)]
pub struct SentimentResponseBody {
    pub sentiment: String,
}

/// Message type for async response handling
#[derive(Debug)]
pub enum SentimentResponseMessage {
    /// The backend returned a label for the request
    Success {
        request: PendingRequest,
        sentiment: String,
    },
    /// The request failed; details were already logged
    Error {
        request: PendingRequest,
        error: AnalysisError,
    },
    /// Result of a health probe
    Health { health: BackendHealth },
}

/// Service for talking to the sentiment backend
pub struct SentimentService {
    client: Client,
    endpoint: Url,
    /// Channel for receiving async responses
    response_receiver: mpsc::Receiver<SentimentResponseMessage>,
    /// Channel sender for async tasks to send responses
    response_sender: mpsc::Sender<SentimentResponseMessage>,
}

impl SentimentService {
    pub fn new(endpoint: Url) -> Result<Self> {
        tracing::debug!("Creating SentimentService for {}", endpoint);
        let (response_sender, response_receiver) = mpsc::channel(16);

        let client = Client::builder()
            .user_agent(concat!("sentiline/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            response_receiver,
            response_sender,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Scheme, host and port of the endpoint
    pub fn backend_base(&self) -> String {
        backend_base(&self.endpoint)
    }

    /// URL of the health probe, a sibling of the endpoint at `/health`
    pub fn health_url(&self) -> Result<Url> {
        Ok(self.endpoint.join("/health")?)
    }

    /// POST the text and return the raw label
    async fn send(client: &Client, endpoint: &Url, text: &str) -> Result<String, ServiceError> {
        let url = endpoint.to_string();

        let response = client
            .post(endpoint.clone())
            .json(&SentimentRequestBody { text })
            .send()
            .await
            .map_err(|source| ServiceError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status { url, status });
        }

        let body: SentimentResponseBody = response
            .json()
            .await
            .map_err(|source| ServiceError::Decode { url, source })?;

        Ok(body.sentiment)
    }

    /// Log the detailed failure and reduce it to the user-facing error
    fn to_analysis_error(error: &ServiceError, backend: &str) -> AnalysisError {
        // Show full error chain using the source iterator
        let mut message = format!("{error}");
        let mut cause = error.source();
        while let Some(inner) = cause {
            message.push_str(&format!("\n  Caused by: {inner}"));
            cause = inner.source();
        }
        tracing::error!("Sentiment request failed: {message}");

        AnalysisError::Transport {
            backend: backend.to_string(),
        }
    }

    /// Analyze text and wait for the answer
    pub async fn analyze(&self, text: &str) -> Result<String, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        Self::send(&self.client, &self.endpoint, text)
            .await
            .map_err(|e| Self::to_analysis_error(&e, &self.backend_base()))
    }

    /// Execute a request asynchronously
    ///
    /// Spawns a tokio task that sends the request and posts the outcome back
    /// through the internal channel. Nothing guards against overlapping calls.
    pub fn execute_async(&self, request: PendingRequest) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let backend = self.backend_base();
        let result_sender = self.response_sender.clone();

        tracing::info!("Sending analysis #{} to {}", request.sequence, endpoint);

        tokio::spawn(async move {
            let message = match Self::send(&client, &endpoint, &request.text).await {
                Ok(sentiment) => SentimentResponseMessage::Success { request, sentiment },
                Err(e) => {
                    let error = Self::to_analysis_error(&e, &backend);
                    SentimentResponseMessage::Error { request, error }
                }
            };

            // Ignore send errors (receiver might have been dropped)
            let _ = result_sender.send(message).await;
        });
    }

    /// Probe the backend health endpoint asynchronously
    ///
    /// Returns false when no probe was started, so no `Health` message will
    /// follow.
    pub fn check_health_async(&self) -> bool {
        let client = self.client.clone();
        let result_sender = self.response_sender.clone();
        let url = match self.health_url() {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Cannot derive health URL from {}: {}", self.endpoint, e);
                return false;
            }
        };

        tokio::spawn(async move {
            let health = match client.get(url.clone()).send().await {
                Ok(response) if response.status().is_success() => BackendHealth::Online,
                Ok(response) => {
                    tracing::warn!("Health probe {} answered {}", url, response.status());
                    BackendHealth::Offline
                }
                Err(e) => {
                    tracing::warn!("Health probe {} failed: {}", url, e);
                    BackendHealth::Offline
                }
            };
            let _ = result_sender
                .send(SentimentResponseMessage::Health { health })
                .await;
        });
        true
    }

    /// Check if there are any pending responses (non-blocking)
    pub fn poll_response(&mut self) -> Option<SentimentResponseMessage> {
        self.response_receiver.try_recv().ok()
    }

    /// Wait for the next response
    pub async fn next_response(&mut self) -> Option<SentimentResponseMessage> {
        self.response_receiver.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> SentimentService {
        let endpoint = Url::parse("http://localhost:8000/sentiment").unwrap();
        SentimentService::new(endpoint).unwrap()
    }

    #[test]
    fn request_body_should_serialize_as_text_field() {
        let body = SentimentRequestBody { text: "hi \"there\"" };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"text":"hi \"there\""}"#);
    }

    #[test]
    fn response_body_should_require_sentiment_field() {
        let ok: Result<SentimentResponseBody, _> =
            serde_json::from_str(r#"{"sentiment":"neutral","extra":1}"#);
        assert_eq!(ok.unwrap().sentiment, "neutral");

        let missing: Result<SentimentResponseBody, _> = serde_json::from_str(r#"{"label":"x"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn health_url_should_sit_next_to_endpoint() {
        let service = create_test_service();
        assert_eq!(
            service.health_url().unwrap().as_str(),
            "http://localhost:8000/health"
        );
        assert_eq!(service.backend_base(), "http://localhost:8000");
    }

    #[test]
    fn health_check_should_not_start_for_opaque_endpoint() {
        let endpoint = Url::parse("foo:bar").unwrap();
        let mut service = SentimentService::new(endpoint).unwrap();
        assert!(service.health_url().is_err());
        assert!(!service.check_health_async());
        assert!(service.poll_response().is_none());
    }

    #[test]
    fn transport_failures_should_reduce_to_generic_message() {
        let error = ServiceError::Status {
            url: "http://localhost:8000/sentiment".to_string(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        let analysis = SentimentService::to_analysis_error(&error, "http://localhost:8000");
        assert_eq!(
            analysis,
            AnalysisError::Transport {
                backend: "http://localhost:8000".to_string()
            }
        );
        assert!(!analysis.to_string().contains("500"));
    }

    #[tokio::test]
    async fn analyze_should_reject_blank_text_without_network() {
        // Port 9 (discard) would fail if a request were attempted
        let endpoint = Url::parse("http://127.0.0.1:9/sentiment").unwrap();
        let service = SentimentService::new(endpoint).unwrap();
        assert_eq!(service.analyze("  \n").await, Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn poll_response_should_be_empty_initially() {
        let mut service = create_test_service();
        assert!(service.poll_response().is_none());
    }
}
