//! ListHistoryHandler - lists the user's past tests.

use std::sync::Arc;

use crate::domain::results::TestSummary;
use crate::ports::{GatewayError, TestGateway};

/// Handler for listing the authenticated user's test history.
pub struct ListHistoryHandler {
    gateway: Arc<dyn TestGateway>,
}

impl ListHistoryHandler {
    pub fn new(gateway: Arc<dyn TestGateway>) -> Self {
        Self { gateway }
    }

    /// Entries come back in the backend's order, most recent first.
    pub async fn handle(&self) -> Result<Vec<TestSummary>, GatewayError> {
        tracing::debug!("fetching test history");
        self.gateway.fetch_history().await
    }

    /// Like [`handle`](Self::handle), but keeps only tests that can be
    /// opened in the result viewer.
    pub async fn handle_completed_only(&self) -> Result<Vec<TestSummary>, GatewayError> {
        let mut entries = self.handle().await?;
        entries.retain(TestSummary::has_results);
        Ok(entries)
    }
}
