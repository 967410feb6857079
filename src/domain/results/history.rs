//! Test history entries.

use crate::domain::foundation::{TestId, Timestamp};

/// One entry of the user's test history, as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSummary {
    /// Identifier of the test.
    pub test_id: TestId,
    /// When the test was started.
    pub started_at: Timestamp,
    /// Whether the test was completed and scored.
    pub completed: bool,
    /// Completion time, present only for completed tests.
    pub completed_at: Option<Timestamp>,
}

impl TestSummary {
    /// True for records that can be opened in the result viewer.
    pub fn has_results(&self) -> bool {
        self.completed
    }
}
