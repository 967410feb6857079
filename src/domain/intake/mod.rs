//! Intake module - the in-progress CSI test.
//!
//! Holds the test session aggregate, the screen-stage state machine, the
//! fixed questionnaire content, and the pure validators gating each stage
//! transition.

mod answer_sheet;
mod errors;
mod narrative;
mod questionnaire;
mod session;
mod stage;
pub mod validation;

pub use answer_sheet::AnswerSheet;
pub use errors::IntakeError;
pub use narrative::{StressorNarrative, MAX_NARRATIVE_LENGTH, MIN_NARRATIVE_LENGTH};
pub use questionnaire::{capacity_prompt, item_text, items, SCALE_LEGEND};
pub use session::TestSession;
pub use stage::IntakeStage;
pub use validation::IntakeValidationError;
