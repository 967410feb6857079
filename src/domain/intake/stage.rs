//! Intake stage state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Screen stage of an in-progress test.
///
/// Strictly forward-progressing once a test has been started server-side:
/// the user may step back from the narrative screen to the instructions,
/// but never from the questionnaire back to the narrative, because starting
/// a test is a one-way commitment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStage {
    #[default]
    Instructions,
    NarrativeEntry,
    Questionnaire,
    Submitted,
}

impl StateMachine for IntakeStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use IntakeStage::*;
        matches!(
            (self, target),
            (Instructions, NarrativeEntry)
                | (NarrativeEntry, Instructions)
                | (NarrativeEntry, Questionnaire)
                | (Questionnaire, Submitted)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use IntakeStage::*;
        match self {
            Instructions => vec![NarrativeEntry],
            NarrativeEntry => vec![Instructions, Questionnaire],
            Questionnaire => vec![Submitted],
            Submitted => vec![],
        }
    }
}
