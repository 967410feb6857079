//! Intake-specific error types.

use thiserror::Error;

use super::validation::IntakeValidationError;
use crate::domain::foundation::ValidationError;
use crate::ports::GatewayError;

/// Errors surfaced by the intake flow.
///
/// Every variant is locally recoverable: the state machine stays in its
/// pre-call stage and the same transition may be re-attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// A local validator blocked the transition; nothing was sent.
    #[error(transparent)]
    Validation(#[from] IntakeValidationError),

    /// The backend rejected or failed the call.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The requested stage change is not part of the intake sequence.
    #[error("Transición de pantalla no permitida: {0}")]
    InvalidTransition(String),

    /// A start or submit call is already outstanding for this session.
    #[error("Hay una operación en curso; espera a que termine")]
    CallInFlight,
}

impl IntakeError {
    /// True when the questionnaire view should scroll back to the top so
    /// the message is visible above the item list.
    pub fn needs_scroll_to_top(&self) -> bool {
        matches!(
            self,
            IntakeError::Validation(inner) if inner.needs_scroll_to_top()
        )
    }
}

impl From<ValidationError> for IntakeError {
    fn from(err: ValidationError) -> Self {
        IntakeError::InvalidTransition(err.to_string())
    }
}
