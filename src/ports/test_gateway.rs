//! Test gateway port - the scoring backend boundary.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{ResponseRating, TestId};
use crate::domain::intake::{AnswerSheet, StressorNarrative};
use crate::domain::results::{ResultDocument, TestSummary};

/// Failures reported by the scoring backend boundary.
///
/// The client never retries automatically; a retry, if any, is the user
/// re-attempting the same validated transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The backend answered with a non-2xx status. `detail` is the
    /// server-reported message, extracted from the response body and
    /// surfaced verbatim.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// The request never completed (connection refused, timeout, DNS...).
    #[error("Error de conexión con el servidor")]
    Connection(String),

    /// A 2xx response carried a body the client could not understand.
    #[error("Respuesta inesperada del servidor: {0}")]
    UnexpectedPayload(String),
}

impl GatewayError {
    pub fn rejected(status: u16, detail: impl Into<String>) -> Self {
        GatewayError::Rejected {
            status,
            detail: detail.into(),
        }
    }

    pub fn connection(reason: impl Into<String>) -> Self {
        GatewayError::Connection(reason.into())
    }

    pub fn unexpected_payload(reason: impl Into<String>) -> Self {
        GatewayError::UnexpectedPayload(reason.into())
    }
}

/// Port to the remote scoring service.
///
/// `start_test` and `submit_answers` are each called at most once per
/// test session, and `submit_answers` only with a `TestId` obtained from
/// a successful `start_test`.
#[async_trait]
pub trait TestGateway: Send + Sync {
    /// Creates a new scoring record for the given narrative and returns
    /// its identifier.
    async fn start_test(&self, narrative: &StressorNarrative) -> Result<TestId, GatewayError>;

    /// Finalizes a test with the full 40-slot mapping plus the capacity
    /// rating, triggering server-side scoring.
    async fn submit_answers(
        &self,
        test_id: &TestId,
        answers: &AnswerSheet,
        capacity: ResponseRating,
    ) -> Result<(), GatewayError>;

    /// Fetches the scored result document of a completed test.
    async fn fetch_results(&self, test_id: &TestId) -> Result<ResultDocument, GatewayError>;

    /// Lists the authenticated user's tests, most recent first as the
    /// backend orders them.
    async fn fetch_history(&self) -> Result<Vec<TestSummary>, GatewayError>;
}
