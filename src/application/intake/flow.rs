//! IntakeFlow - the write path of a test session.
//!
//! Wraps one [`TestSession`] and the scoring gateway, adding the
//! single-outstanding-call guarantee the aggregate itself cannot give:
//! while a gateway call is in flight, further network-touching calls
//! fail with [`IntakeError::CallInFlight`].

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::intake::validation::{
    validate_capacity, validate_completeness, validate_narrative,
};
use crate::domain::intake::{
    IntakeError, IntakeStage, StressorNarrative, TestSession,
};
use crate::domain::foundation::{ItemNumber, ResponseRating, TestId};
use crate::ports::TestGateway;

/// Drives one test intake from instructions to submission.
///
/// All narrative and answer validation runs locally before any network
/// call, so a validation failure never reaches the gateway. On gateway
/// failure the session stays in its current stage and the error carries
/// the server's message verbatim, so the caller can retry.
pub struct IntakeFlow {
    session: TestSession,
    gateway: Arc<dyn TestGateway>,
    // Mirrors the UI's disabled-button state. Exclusive access already
    // serializes the calls; the flag exists so a caller can render "busy"
    // and so a future dropped mid-await cannot leave the flow stuck.
    in_flight: bool,
    correlation_id: Uuid,
}

/// Clears the busy flag on drop, including when the surrounding future is
/// dropped mid-await.
struct InFlightGuard<'a>(&'a mut bool);

impl<'a> InFlightGuard<'a> {
    fn set(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

impl IntakeFlow {
    pub fn new(gateway: Arc<dyn TestGateway>) -> Self {
        Self {
            session: TestSession::new(),
            gateway,
            in_flight: false,
            correlation_id: Uuid::new_v4(),
        }
    }

    /// The underlying session, read-only.
    pub fn session(&self) -> &TestSession {
        &self.session
    }

    /// Current stage of the flow.
    pub fn stage(&self) -> IntakeStage {
        self.session.stage()
    }

    /// Whether a gateway call is currently outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Instructions -> NarrativeEntry.
    pub fn advance_to_narrative(&mut self) -> Result<(), IntakeError> {
        self.session.advance_to_narrative()
    }

    /// NarrativeEntry -> Instructions. Only legal while no test has been
    /// started; once a scoring record exists there is no way back.
    pub fn back_to_instructions(&mut self) -> Result<(), IntakeError> {
        self.session.back_to_instructions()
    }

    /// Validates the narrative, starts a scoring record on the backend
    /// and moves the session into the questionnaire.
    ///
    /// On gateway failure the session stays in `NarrativeEntry` so the
    /// user can retry with the same text.
    ///
    /// # Errors
    ///
    /// - `Validation` if the narrative is too short or too long
    /// - `CallInFlight` if another gateway call is outstanding
    /// - `InvalidTransition` outside `NarrativeEntry`
    /// - `Gateway` with the backend's detail message
    pub async fn begin_questionnaire(&mut self, text: &str) -> Result<(), IntakeError> {
        if self.in_flight {
            return Err(IntakeError::CallInFlight);
        }
        validate_narrative(text)?;
        let narrative = StressorNarrative::new(text)?;

        if self.session.stage() != IntakeStage::NarrativeEntry {
            return Err(IntakeError::InvalidTransition(
                "La narrativa solo puede enviarse desde su pantalla".to_string(),
            ));
        }

        tracing::debug!(
            correlation_id = %self.correlation_id,
            chars = narrative.char_count(),
            "starting test"
        );

        let guard = InFlightGuard::set(&mut self.in_flight);
        let started = self.gateway.start_test(&narrative).await;
        drop(guard);

        let test_id = started.inspect_err(|e| {
            tracing::warn!(correlation_id = %self.correlation_id, error = %e, "start_test failed");
        })?;

        self.session.enter_questionnaire(narrative, test_id)
    }

    /// Records a rating for one item, returning the previous rating of
    /// that slot.
    pub fn record_response(
        &mut self,
        item: ItemNumber,
        rating: ResponseRating,
    ) -> Result<Option<ResponseRating>, IntakeError> {
        self.session.record_response(item, rating)
    }

    /// Records the capacity-of-coping rating.
    pub fn record_capacity(
        &mut self,
        rating: ResponseRating,
    ) -> Result<Option<ResponseRating>, IntakeError> {
        self.session.record_capacity(rating)
    }

    /// Submits the completed answer sheet and finalizes the session,
    /// yielding the test identifier for the result screen.
    ///
    /// Completeness and capacity are checked locally first; an
    /// incompleteness failure carries a scroll-to-top hint
    /// ([`IntakeError::needs_scroll_to_top`]). On gateway failure the
    /// session stays in `Questionnaire` and a retry is allowed.
    ///
    /// # Errors
    ///
    /// - `Validation` if any slot or the capacity rating is unanswered
    /// - `CallInFlight` if another gateway call is outstanding
    /// - `InvalidTransition` outside `Questionnaire`
    /// - `Gateway` with the backend's detail message
    pub async fn submit(&mut self) -> Result<TestId, IntakeError> {
        if self.in_flight {
            return Err(IntakeError::CallInFlight);
        }
        if self.session.stage() != IntakeStage::Questionnaire {
            return Err(IntakeError::InvalidTransition(
                "Solo puede enviarse durante el cuestionario".to_string(),
            ));
        }

        let sheet = self.session.answers().ok_or_else(|| {
            IntakeError::InvalidTransition(
                "La hoja de respuestas no está inicializada".to_string(),
            )
        })?;
        validate_completeness(sheet)?;
        validate_capacity(self.session.capacity())?;

        let test_id = self.session.test_id().ok_or_else(|| {
            IntakeError::InvalidTransition("Falta el identificador del test".to_string())
        })?;
        // validate_capacity just passed
        let capacity = self.session.capacity().ok_or_else(|| {
            IntakeError::Validation(
                crate::domain::intake::IntakeValidationError::MissingCapacityRating,
            )
        })?;

        tracing::debug!(
            correlation_id = %self.correlation_id,
            test_id = %test_id,
            "submitting answers"
        );

        let guard = InFlightGuard::set(&mut self.in_flight);
        let submitted = self
            .gateway
            .submit_answers(test_id, sheet, capacity)
            .await;
        drop(guard);

        submitted.inspect_err(|e| {
            tracing::warn!(correlation_id = %self.correlation_id, error = %e, "submit failed");
        })?;

        self.session.complete()
    }
}

impl std::fmt::Debug for IntakeFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntakeFlow")
            .field("stage", &self.session.stage())
            .field("in_flight", &self.in_flight)
            .field("correlation_id", &self.correlation_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::{AnswerSheet, IntakeValidationError};
    use crate::domain::results::{ResultDocument, TestSummary};
    use crate::ports::GatewayError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ─────────────────────────────────────────────────────────────────────
    // Mock gateway
    // ─────────────────────────────────────────────────────────────────────

    #[derive(Default)]
    struct MockGateway {
        started_narratives: Mutex<Vec<String>>,
        submitted: Mutex<Vec<(String, usize, u8)>>,
        fail_start: Option<GatewayError>,
        fail_submit: Mutex<Option<GatewayError>>,
    }

    impl MockGateway {
        fn new() -> Self {
            Self::default()
        }

        fn failing_start(error: GatewayError) -> Self {
            Self {
                fail_start: Some(error),
                ..Self::default()
            }
        }

        fn failing_submit_once(error: GatewayError) -> Self {
            Self {
                fail_submit: Mutex::new(Some(error)),
                ..Self::default()
            }
        }

        fn started(&self) -> Vec<String> {
            self.started_narratives.lock().unwrap().clone()
        }

        fn submissions(&self) -> Vec<(String, usize, u8)> {
            self.submitted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TestGateway for MockGateway {
        async fn start_test(
            &self,
            narrative: &StressorNarrative,
        ) -> Result<TestId, GatewayError> {
            if let Some(err) = &self.fail_start {
                return Err(err.clone());
            }
            self.started_narratives
                .lock()
                .unwrap()
                .push(narrative.as_str().to_string());
            Ok(TestId::new("test-001").unwrap())
        }

        async fn submit_answers(
            &self,
            test_id: &TestId,
            answers: &AnswerSheet,
            capacity: ResponseRating,
        ) -> Result<(), GatewayError> {
            if let Some(err) = self.fail_submit.lock().unwrap().take() {
                return Err(err);
            }
            self.submitted.lock().unwrap().push((
                test_id.as_str().to_string(),
                answers.answered_count(),
                capacity.value(),
            ));
            Ok(())
        }

        async fn fetch_results(&self, _: &TestId) -> Result<ResultDocument, GatewayError> {
            Err(GatewayError::unexpected_payload("not used in these tests"))
        }

        async fn fetch_history(&self) -> Result<Vec<TestSummary>, GatewayError> {
            Ok(vec![])
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Test helpers
    // ─────────────────────────────────────────────────────────────────────

    const NARRATIVE: &str = "Me despidieron del trabajo ayer";

    fn flow_with(gateway: Arc<MockGateway>) -> IntakeFlow {
        IntakeFlow::new(gateway)
    }

    async fn flow_in_questionnaire(gateway: Arc<MockGateway>) -> IntakeFlow {
        let mut flow = flow_with(gateway);
        flow.advance_to_narrative().unwrap();
        flow.begin_questionnaire(NARRATIVE).await.unwrap();
        flow
    }

    fn answer_everything(flow: &mut IntakeFlow) {
        for item in ItemNumber::all() {
            flow.record_response(item, ResponseRating::Somewhat).unwrap();
        }
        flow.record_capacity(ResponseRating::Much).unwrap();
    }

    // ─────────────────────────────────────────────────────────────────────
    // begin_questionnaire
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn short_narrative_never_reaches_the_gateway() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_with(gateway.clone());
        flow.advance_to_narrative().unwrap();

        let err = flow.begin_questionnaire("muy corto").await.unwrap_err();
        assert!(matches!(
            err,
            IntakeError::Validation(IntakeValidationError::TooShort { .. })
        ));
        assert!(gateway.started().is_empty());
        assert_eq!(flow.stage(), IntakeStage::NarrativeEntry);
    }

    #[tokio::test]
    async fn valid_narrative_starts_test_and_enters_questionnaire() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_with(gateway.clone());
        flow.advance_to_narrative().unwrap();

        flow.begin_questionnaire(NARRATIVE).await.unwrap();

        assert_eq!(flow.stage(), IntakeStage::Questionnaire);
        assert_eq!(gateway.started(), vec![NARRATIVE.to_string()]);
        assert_eq!(flow.session().test_id().unwrap().as_str(), "test-001");
        assert_eq!(flow.session().answers().unwrap().answered_count(), 0);
        assert!(!flow.is_busy());
    }

    #[tokio::test]
    async fn gateway_failure_keeps_flow_in_narrative_entry() {
        let gateway = Arc::new(MockGateway::failing_start(GatewayError::connection(
            "refused",
        )));
        let mut flow = flow_with(gateway);
        flow.advance_to_narrative().unwrap();

        let err = flow.begin_questionnaire(NARRATIVE).await.unwrap_err();
        assert_eq!(err.to_string(), "Error de conexión con el servidor");
        assert_eq!(flow.stage(), IntakeStage::NarrativeEntry);
        assert!(!flow.is_busy());
    }

    #[tokio::test]
    async fn begin_questionnaire_requires_narrative_entry_stage() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_with(gateway);

        let err = flow.begin_questionnaire(NARRATIVE).await.unwrap_err();
        assert!(matches!(err, IntakeError::InvalidTransition(_)));
    }

    #[tokio::test]
    async fn no_way_back_after_test_started() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_in_questionnaire(gateway).await;

        assert!(flow.back_to_instructions().is_err());
    }

    // ─────────────────────────────────────────────────────────────────────
    // submit
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn incomplete_sheet_fails_with_scroll_hint() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_in_questionnaire(gateway.clone()).await;

        for item in ItemNumber::all().take(39) {
            flow.record_response(item, ResponseRating::ALittle).unwrap();
        }
        flow.record_capacity(ResponseRating::Much).unwrap();

        let err = flow.submit().await.unwrap_err();
        assert!(err.needs_scroll_to_top());
        assert!(matches!(
            err,
            IntakeError::Validation(IntakeValidationError::IncompleteAnswers {
                answered: 39,
                total: 40
            })
        ));
        assert!(gateway.submissions().is_empty());
        assert_eq!(flow.stage(), IntakeStage::Questionnaire);
    }

    #[tokio::test]
    async fn missing_capacity_fails_without_scroll_hint() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_in_questionnaire(gateway.clone()).await;

        for item in ItemNumber::all() {
            flow.record_response(item, ResponseRating::ALittle).unwrap();
        }

        let err = flow.submit().await.unwrap_err();
        assert!(matches!(
            err,
            IntakeError::Validation(IntakeValidationError::MissingCapacityRating)
        ));
        assert!(!err.needs_scroll_to_top());
        assert!(gateway.submissions().is_empty());
    }

    #[tokio::test]
    async fn complete_submission_yields_test_id() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_in_questionnaire(gateway.clone()).await;
        answer_everything(&mut flow);

        let test_id = flow.submit().await.unwrap();

        assert_eq!(test_id.as_str(), "test-001");
        assert_eq!(flow.stage(), IntakeStage::Submitted);
        assert_eq!(
            gateway.submissions(),
            vec![("test-001".to_string(), 40, 3)]
        );
    }

    #[tokio::test]
    async fn rejected_submission_allows_retry() {
        let gateway = Arc::new(MockGateway::failing_submit_once(GatewayError::rejected(
            422,
            "field required",
        )));
        let mut flow = flow_in_questionnaire(gateway.clone()).await;
        answer_everything(&mut flow);

        let err = flow.submit().await.unwrap_err();
        assert_eq!(err.to_string(), "field required");
        assert_eq!(flow.stage(), IntakeStage::Questionnaire);
        assert!(!flow.is_busy());

        // same sheet, second attempt succeeds
        let test_id = flow.submit().await.unwrap();
        assert_eq!(test_id.as_str(), "test-001");
        assert_eq!(flow.stage(), IntakeStage::Submitted);
    }

    struct HangingGateway;

    #[async_trait]
    impl TestGateway for HangingGateway {
        async fn start_test(
            &self,
            _: &StressorNarrative,
        ) -> Result<TestId, GatewayError> {
            std::future::pending().await
        }

        async fn submit_answers(
            &self,
            _: &TestId,
            _: &AnswerSheet,
            _: ResponseRating,
        ) -> Result<(), GatewayError> {
            std::future::pending().await
        }

        async fn fetch_results(&self, _: &TestId) -> Result<ResultDocument, GatewayError> {
            std::future::pending().await
        }

        async fn fetch_history(&self) -> Result<Vec<TestSummary>, GatewayError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn dropping_a_pending_call_clears_the_busy_flag() {
        let mut flow = IntakeFlow::new(Arc::new(HangingGateway));
        flow.advance_to_narrative().unwrap();

        // timeout drops the begin_questionnaire future mid-await
        let result = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            flow.begin_questionnaire(NARRATIVE),
        )
        .await;
        assert!(result.is_err());

        assert!(!flow.is_busy());
        assert_eq!(flow.stage(), IntakeStage::NarrativeEntry);
    }

    #[tokio::test]
    async fn submit_twice_is_rejected() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_in_questionnaire(gateway.clone()).await;
        answer_everything(&mut flow);

        flow.submit().await.unwrap();
        let err = flow.submit().await.unwrap_err();
        assert!(matches!(err, IntakeError::InvalidTransition(_)));
        assert_eq!(gateway.submissions().len(), 1);
    }
}
