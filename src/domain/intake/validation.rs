//! Pure validators gating intake stage transitions.
//!
//! No side effects, no I/O. Each validator is checked independently; the
//! intake flow decides ordering and user-facing messaging per failure.

use thiserror::Error;

use super::answer_sheet::AnswerSheet;
use super::narrative::{MAX_NARRATIVE_LENGTH, MIN_NARRATIVE_LENGTH};
use crate::domain::foundation::{ResponseRating, ITEM_COUNT};

/// Local validation failures. These never reach the network; they block
/// only the transition they gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeValidationError {
    #[error("La situación debe describirse con al menos {MIN_NARRATIVE_LENGTH} caracteres (hay {actual})")]
    TooShort { actual: usize },

    #[error("La descripción supera el máximo de {MAX_NARRATIVE_LENGTH} caracteres")]
    TooLong { actual: usize },

    #[error("Por favor, responde todas las preguntas ({answered} de {total} respondidas)")]
    IncompleteAnswers { answered: usize, total: usize },

    #[error("Por favor, evalúa tu capacidad de afrontamiento")]
    MissingCapacityRating,
}

impl IntakeValidationError {
    /// True when the questionnaire view should scroll back to the top so
    /// the message is visible above the 40-item list.
    pub fn needs_scroll_to_top(&self) -> bool {
        matches!(self, IntakeValidationError::IncompleteAnswers { .. })
    }
}

/// Fails with `TooShort` when the text has fewer than 10 characters.
pub fn validate_narrative(text: &str) -> Result<(), IntakeValidationError> {
    let count = text.chars().count();
    if count < MIN_NARRATIVE_LENGTH {
        return Err(IntakeValidationError::TooShort { actual: count });
    }
    if count > MAX_NARRATIVE_LENGTH {
        return Err(IntakeValidationError::TooLong { actual: count });
    }
    Ok(())
}

/// Fails with `IncompleteAnswers` when any of the 40 items is unanswered.
pub fn validate_completeness(sheet: &AnswerSheet) -> Result<(), IntakeValidationError> {
    let answered = sheet.answered_count();
    if answered < ITEM_COUNT as usize {
        return Err(IntakeValidationError::IncompleteAnswers {
            answered,
            total: ITEM_COUNT as usize,
        });
    }
    Ok(())
}

/// Fails with `MissingCapacityRating` when the capacity slot is unanswered.
pub fn validate_capacity(
    capacity: Option<ResponseRating>,
) -> Result<(), IntakeValidationError> {
    match capacity {
        Some(_) => Ok(()),
        None => Err(IntakeValidationError::MissingCapacityRating),
    }
}
