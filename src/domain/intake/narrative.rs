//! Stressor narrative value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::{validate_narrative, IntakeValidationError};

/// Minimum narrative length in characters.
pub const MIN_NARRATIVE_LENGTH: usize = 10;

/// Maximum narrative length accepted by the backend.
pub const MAX_NARRATIVE_LENGTH: usize = 2000;

/// Free-text description of the stressful situation being evaluated.
///
/// # Invariants
///
/// - At least [`MIN_NARRATIVE_LENGTH`] characters
/// - At most [`MAX_NARRATIVE_LENGTH`] characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StressorNarrative(String);

impl StressorNarrative {
    /// Creates a narrative, applying the length rules.
    ///
    /// # Errors
    ///
    /// - `TooShort` below the minimum
    /// - `TooLong` above the backend's maximum
    pub fn new(text: impl Into<String>) -> Result<Self, IntakeValidationError> {
        let text = text.into();
        validate_narrative(&text)?;
        Ok(Self(text))
    }

    /// Returns the narrative text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the character count (what the length rules are measured in).
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl TryFrom<String> for StressorNarrative {
    type Error = IntakeValidationError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<StressorNarrative> for String {
    fn from(narrative: StressorNarrative) -> String {
        narrative.0
    }
}

impl fmt::Display for StressorNarrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
