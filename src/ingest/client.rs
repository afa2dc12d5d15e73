//! HTTP client for the lead-ingestion endpoint
//!
//! Sends accepted drafts as a single JSON POST with a bearer credential.
//! There is no retry or backoff; one call means one attempt.

use crate::config::CaptureConfig;
use crate::state::Industry;
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use super::traits::LeadIngest;

/// Default ingestion endpoint
const DEFAULT_ENDPOINT: &str = "https://ingest.leadcap.io/functions/v1/capture-lead";

/// Bound on how long a single submission may take
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure modes of a submission attempt
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("endpoint rejected the lead (status {status})")]
    Http { status: u16 },
    #[error("could not reach the ingestion endpoint: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Outbound lead payload.
///
/// The submission timestamp is deliberately absent: the endpoint's own
/// receive time is authoritative, the client stamp is local bookkeeping.
#[derive(Debug, Serialize)]
struct LeadPayload<'a> {
    name: &'a str,
    email: &'a str,
    industry: Industry,
}

/// Client for the lead-ingestion endpoint
pub struct IngestClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl IngestClient {
    /// Create a new ingestion client.
    ///
    /// Endpoint and token resolve from the environment first
    /// (`LEADCAP_ENDPOINT`, `LEADCAP_TOKEN`), then the config file, then
    /// the compiled-in default.
    pub fn new(config: &CaptureConfig) -> Result<Self> {
        let endpoint = std::env::var("LEADCAP_ENDPOINT")
            .ok()
            .or_else(|| config.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let token = std::env::var("LEADCAP_TOKEN")
            .ok()
            .or_else(|| config.token.clone())
            .unwrap_or_default();

        let timeout = config
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint,
            token,
        })
    }
}

#[async_trait]
impl LeadIngest for IngestClient {
    async fn submit_lead(
        &self,
        name: &str,
        email: &str,
        industry: Industry,
    ) -> Result<(), IngestError> {
        let payload = LeadPayload {
            name,
            email,
            industry,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Http {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_carries_exactly_the_wire_fields() {
        let payload = LeadPayload {
            name: "Ada Lovelace",
            email: "ada@example.com",
            industry: Industry::Retail,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "industry": "retail",
            })
        );
    }

    #[test]
    fn test_payload_omits_submission_timestamp() {
        let payload = LeadPayload {
            name: "Ada",
            email: "ada@example.com",
            industry: Industry::Other,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("submitted_at").is_none());
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_http_error_names_the_status() {
        let err = IngestError::Http { status: 503 };
        assert_eq!(err.to_string(), "endpoint rejected the lead (status 503)");
    }

    #[test]
    fn test_client_builds_from_default_config() {
        let client = IngestClient::new(&CaptureConfig::default()).unwrap();
        assert!(!client.endpoint.is_empty());
    }

    #[test]
    fn test_unreachable_endpoint_reports_transport_error() {
        let config = CaptureConfig {
            // Port 9 (discard) refuses connections on any sane host
            endpoint: Some("http://127.0.0.1:9/leads".to_string()),
            token: Some("test-token".to_string()),
            request_timeout_secs: Some(1),
        };
        let client = IngestClient::new(&config).unwrap();

        let result =
            tokio_test::block_on(client.submit_lead("Ada", "ada@example.com", Industry::Other));
        assert!(matches!(result, Err(IngestError::Transport(_))));
    }
}
