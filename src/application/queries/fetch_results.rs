//! FetchResultsHandler - reads the scored document of a completed test.

use std::sync::Arc;

use crate::domain::foundation::TestId;
use crate::domain::results::ResultDocument;
use crate::ports::{GatewayError, TestGateway};

/// Handler for fetching a test's scored results.
pub struct FetchResultsHandler {
    gateway: Arc<dyn TestGateway>,
}

impl FetchResultsHandler {
    pub fn new(gateway: Arc<dyn TestGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, test_id: &TestId) -> Result<ResultDocument, GatewayError> {
        tracing::debug!(test_id = %test_id, "fetching results");
        self.gateway.fetch_results(test_id).await
    }
}
