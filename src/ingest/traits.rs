//! Trait abstraction for the ingestion client to enable mocking in tests

use super::client::IngestError;
use crate::state::Industry;
use async_trait::async_trait;

/// Trait for lead ingestion operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadIngest: Send + Sync {
    /// Submit a validated lead to the ingestion endpoint.
    ///
    /// One attempt per call; the caller decides what to do with a failure.
    async fn submit_lead(
        &self,
        name: &str,
        email: &str,
        industry: Industry,
    ) -> Result<(), IngestError>;
}
