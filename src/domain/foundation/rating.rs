//! Response rating value object for the CSI 0-4 scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// CSI response rating: 0 (not at all) to 4 (completely).
///
/// Used both for the 40 questionnaire items and for the supplementary
/// capacity-of-coping self-assessment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ResponseRating {
    NotAtAll = 0,
    ALittle = 1,
    Somewhat = 2,
    Much = 3,
    Completely = 4,
}

impl ResponseRating {
    /// Creates a rating from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            0 => Ok(ResponseRating::NotAtAll),
            1 => Ok(ResponseRating::ALittle),
            2 => Ok(ResponseRating::Somewhat),
            3 => Ok(ResponseRating::Much),
            4 => Ok(ResponseRating::Completely),
            _ => Err(ValidationError::out_of_range("rating", 0, 4, value as i32)),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the Spanish scale label shown next to each radio option.
    pub fn label(&self) -> &'static str {
        match self {
            ResponseRating::NotAtAll => "En absoluto",
            ResponseRating::ALittle => "Un poco",
            ResponseRating::Somewhat => "Bastante",
            ResponseRating::Much => "Mucho",
            ResponseRating::Completely => "Totalmente",
        }
    }

    /// All ratings in ascending order, for rendering the scale.
    pub fn all() -> [ResponseRating; 5] {
        [
            ResponseRating::NotAtAll,
            ResponseRating::ALittle,
            ResponseRating::Somewhat,
            ResponseRating::Much,
            ResponseRating::Completely,
        ]
    }
}

impl TryFrom<u8> for ResponseRating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value)
    }
}

impl From<ResponseRating> for u8 {
    fn from(rating: ResponseRating) -> u8 {
        rating.value()
    }
}

impl fmt::Display for ResponseRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_u8_accepts_valid_values() {
        assert_eq!(
            ResponseRating::try_from_u8(0).unwrap(),
            ResponseRating::NotAtAll
        );
        assert_eq!(
            ResponseRating::try_from_u8(2).unwrap(),
            ResponseRating::Somewhat
        );
        assert_eq!(
            ResponseRating::try_from_u8(4).unwrap(),
            ResponseRating::Completely
        );
    }

    #[test]
    fn try_from_u8_rejects_out_of_range() {
        assert!(ResponseRating::try_from_u8(5).is_err());
        assert!(ResponseRating::try_from_u8(255).is_err());
    }

    #[test]
    fn value_round_trips() {
        for rating in ResponseRating::all() {
            assert_eq!(ResponseRating::try_from_u8(rating.value()).unwrap(), rating);
        }
    }

    #[test]
    fn labels_match_scale_legend() {
        assert_eq!(ResponseRating::NotAtAll.label(), "En absoluto");
        assert_eq!(ResponseRating::Completely.label(), "Totalmente");
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&ResponseRating::Much).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn deserializes_from_number() {
        let rating: ResponseRating = serde_json::from_str("4").unwrap();
        assert_eq!(rating, ResponseRating::Completely);
        assert!(serde_json::from_str::<ResponseRating>("5").is_err());
    }

    #[test]
    fn ordering_follows_scale() {
        assert!(ResponseRating::NotAtAll < ResponseRating::ALittle);
        assert!(ResponseRating::Much < ResponseRating::Completely);
    }
}
