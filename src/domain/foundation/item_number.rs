//! Questionnaire item ordinal value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Number of items in the CSI questionnaire.
pub const ITEM_COUNT: u8 = 40;

/// Ordinal of a questionnaire item, 1 through 40.
///
/// Values outside that range are unconstructible, so an answer sheet keyed
/// by `ItemNumber` can never hold a stray slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct ItemNumber(u8);

impl ItemNumber {
    /// Creates an item number, returning error if outside 1..=40.
    pub fn new(ordinal: u8) -> Result<Self, ValidationError> {
        if (1..=ITEM_COUNT).contains(&ordinal) {
            Ok(Self(ordinal))
        } else {
            Err(ValidationError::out_of_range(
                "item_number",
                1,
                ITEM_COUNT as i32,
                ordinal as i32,
            ))
        }
    }

    /// Returns the ordinal value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Iterates all 40 item numbers in order.
    pub fn all() -> impl Iterator<Item = ItemNumber> {
        (1..=ITEM_COUNT).map(ItemNumber)
    }
}

impl TryFrom<u8> for ItemNumber {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemNumber> for u8 {
    fn from(item: ItemNumber) -> u8 {
        item.0
    }
}

impl fmt::Display for ItemNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
