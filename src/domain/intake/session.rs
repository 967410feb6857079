//! Test session aggregate.
//!
//! The client-held record of one in-progress CSI administration. Created
//! on the instructions screen, handed to the backend at exactly two points
//! (start, completion), and discarded once the result identifier has been
//! passed on to the result viewer.

use crate::domain::foundation::{
    ItemNumber, ResponseRating, StateMachine, TestId,
};

use super::answer_sheet::AnswerSheet;
use super::errors::IntakeError;
use super::narrative::StressorNarrative;
use super::stage::IntakeStage;
use super::validation::{validate_capacity, validate_completeness};

/// One in-progress CSI test, owned exclusively by the client.
///
/// # Invariants
///
/// - `test_id` is `None` until the backend acknowledges the start call,
///   and is assigned exactly once.
/// - The answer sheet exists from the moment the questionnaire stage is
///   entered and always holds exactly 40 slots.
/// - Stage changes follow [`IntakeStage`]'s transition table; there is no
///   path from `Questionnaire` back to `NarrativeEntry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSession {
    stage: IntakeStage,
    narrative: Option<StressorNarrative>,
    test_id: Option<TestId>,
    answers: Option<AnswerSheet>,
    capacity: Option<ResponseRating>,
}

impl TestSession {
    /// Creates a fresh session on the instructions screen.
    pub fn new() -> Self {
        Self {
            stage: IntakeStage::Instructions,
            narrative: None,
            test_id: None,
            answers: None,
            capacity: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Current screen stage.
    pub fn stage(&self) -> IntakeStage {
        self.stage
    }

    /// The stressor narrative, once entered.
    pub fn narrative(&self) -> Option<&StressorNarrative> {
        self.narrative.as_ref()
    }

    /// The server-issued test identifier, once the start call succeeded.
    pub fn test_id(&self) -> Option<&TestId> {
        self.test_id.as_ref()
    }

    /// The answer sheet, present from the questionnaire stage onwards.
    pub fn answers(&self) -> Option<&AnswerSheet> {
        self.answers.as_ref()
    }

    /// The capacity-of-coping rating, if selected.
    pub fn capacity(&self) -> Option<ResponseRating> {
        self.capacity
    }

    // ─────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────

    /// Instructions -> NarrativeEntry. Unconditional, user-triggered.
    pub fn advance_to_narrative(&mut self) -> Result<(), IntakeError> {
        self.stage = self.stage.transition_to(IntakeStage::NarrativeEntry)?;
        Ok(())
    }

    /// NarrativeEntry -> Instructions. Only possible before a test has
    /// been started server-side; once a `test_id` exists the session is
    /// already past this stage.
    pub fn back_to_instructions(&mut self) -> Result<(), IntakeError> {
        self.stage = self.stage.transition_to(IntakeStage::Instructions)?;
        Ok(())
    }

    /// NarrativeEntry -> Questionnaire, once the backend has acknowledged
    /// the start call with a test identifier.
    ///
    /// Stores the narrative and the identifier, and initializes all 40
    /// item slots plus the capacity slot to unanswered.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if not in `NarrativeEntry`, or if a test
    ///   identifier was already assigned
    pub fn enter_questionnaire(
        &mut self,
        narrative: StressorNarrative,
        test_id: TestId,
    ) -> Result<(), IntakeError> {
        if self.test_id.is_some() {
            return Err(IntakeError::InvalidTransition(
                "El test ya fue iniciado".to_string(),
            ));
        }
        self.stage = self.stage.transition_to(IntakeStage::Questionnaire)?;
        self.narrative = Some(narrative);
        self.test_id = Some(test_id);
        self.answers = Some(AnswerSheet::new());
        self.capacity = None;
        Ok(())
    }

    /// Records a rating for one item. Idempotent single-slot overwrite;
    /// returns the previous rating of that slot.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` outside the questionnaire stage
    pub fn record_response(
        &mut self,
        item: ItemNumber,
        rating: ResponseRating,
    ) -> Result<Option<ResponseRating>, IntakeError> {
        let sheet = self.answers_mut()?;
        Ok(sheet.record(item, rating))
    }

    /// Records the capacity-of-coping rating, overwriting any previous
    /// selection.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` outside the questionnaire stage
    pub fn record_capacity(
        &mut self,
        rating: ResponseRating,
    ) -> Result<Option<ResponseRating>, IntakeError> {
        if self.stage != IntakeStage::Questionnaire {
            return Err(IntakeError::InvalidTransition(
                "Solo puede responderse durante el cuestionario".to_string(),
            ));
        }
        Ok(self.capacity.replace(rating))
    }

    /// Questionnaire -> Submitted, after the backend accepted the answers.
    ///
    /// Re-checks completeness and capacity so a `Submitted` session can
    /// never hold an unanswered slot, and yields the test identifier for
    /// the result viewer.
    ///
    /// # Errors
    ///
    /// - `Validation` if any slot is unanswered
    /// - `InvalidTransition` outside the questionnaire stage
    pub fn complete(&mut self) -> Result<TestId, IntakeError> {
        let sheet = self.answers_mut()?;
        validate_completeness(sheet)?;
        validate_capacity(self.capacity)?;

        self.stage = self.stage.transition_to(IntakeStage::Submitted)?;
        // test_id is necessarily set: Questionnaire is only reachable
        // through enter_questionnaire.
        self.test_id
            .clone()
            .ok_or_else(|| IntakeError::InvalidTransition("Falta el identificador del test".to_string()))
    }

    fn answers_mut(&mut self) -> Result<&mut AnswerSheet, IntakeError> {
        if self.stage != IntakeStage::Questionnaire {
            return Err(IntakeError::InvalidTransition(
                "Solo puede responderse durante el cuestionario".to_string(),
            ));
        }
        self.answers.as_mut().ok_or_else(|| {
            IntakeError::InvalidTransition("La hoja de respuestas no está inicializada".to_string())
        })
    }
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}
