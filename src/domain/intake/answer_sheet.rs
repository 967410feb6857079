//! Answer sheet for the 40 questionnaire items.

use std::collections::BTreeMap;

use crate::domain::foundation::{ItemNumber, ResponseRating, ITEM_COUNT};

/// In-progress responses to the 40 CSI items.
///
/// # Invariants
///
/// - The key set is exactly 1..=40 from construction onwards; no key can be
///   added or removed, only overwritten.
/// - A slot holds `None` until the user selects a rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    slots: BTreeMap<ItemNumber, Option<ResponseRating>>,
}

impl AnswerSheet {
    /// Creates a sheet with all 40 slots unanswered.
    pub fn new() -> Self {
        Self {
            slots: ItemNumber::all().map(|item| (item, None)).collect(),
        }
    }

    /// Records a rating for one item, overwriting any previous value.
    ///
    /// Re-selecting the same value is a no-op; no history is kept. Returns
    /// the previous rating of the slot.
    pub fn record(
        &mut self,
        item: ItemNumber,
        rating: ResponseRating,
    ) -> Option<ResponseRating> {
        // The key is always present: the key set is fixed at construction.
        self.slots.insert(item, Some(rating)).flatten()
    }

    /// Returns the rating recorded for an item, if any.
    pub fn response(&self, item: ItemNumber) -> Option<ResponseRating> {
        self.slots.get(&item).copied().flatten()
    }

    /// Number of items answered so far.
    pub fn answered_count(&self) -> usize {
        self.slots.values().filter(|slot| slot.is_some()).count()
    }

    /// True when all 40 items have a rating.
    pub fn is_complete(&self) -> bool {
        self.answered_count() == ITEM_COUNT as usize
    }

    /// Iterates the slots in item order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemNumber, Option<ResponseRating>)> + '_ {
        self.slots.iter().map(|(item, slot)| (*item, *slot))
    }

    /// The completed responses keyed by ordinal, for submission.
    ///
    /// Only meaningful once [`is_complete`](Self::is_complete) holds;
    /// unanswered slots are simply absent from the result.
    pub fn completed_responses(&self) -> BTreeMap<u8, u8> {
        self.slots
            .iter()
            .filter_map(|(item, slot)| slot.map(|rating| (item.value(), rating.value())))
            .collect()
    }
}

impl Default for AnswerSheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(n: u8) -> ItemNumber {
        ItemNumber::new(n).unwrap()
    }

    #[test]
    fn new_sheet_has_forty_unanswered_slots() {
        let sheet = AnswerSheet::new();
        assert_eq!(sheet.answered_count(), 0);
        assert!(!sheet.is_complete());
        assert_eq!(sheet.iter().count(), 40);
    }

    #[test]
    fn record_overwrites_a_single_slot() {
        let mut sheet = AnswerSheet::new();
        sheet.record(item(7), ResponseRating::ALittle);
        assert_eq!(sheet.response(item(7)), Some(ResponseRating::ALittle));

        let previous = sheet.record(item(7), ResponseRating::Completely);
        assert_eq!(previous, Some(ResponseRating::ALittle));
        assert_eq!(sheet.response(item(7)), Some(ResponseRating::Completely));
        assert_eq!(sheet.answered_count(), 1);
    }

    #[test]
    fn reapplying_same_rating_leaves_sheet_unchanged() {
        let mut sheet = AnswerSheet::new();
        sheet.record(item(3), ResponseRating::Much);
        let before = sheet.clone();

        sheet.record(item(3), ResponseRating::Much);
        assert_eq!(sheet, before);
    }

    #[test]
    fn key_set_stays_fixed_at_forty() {
        let mut sheet = AnswerSheet::new();
        for i in ItemNumber::all() {
            sheet.record(i, ResponseRating::NotAtAll);
        }
        assert_eq!(sheet.iter().count(), 40);
        assert!(sheet.is_complete());
    }

    #[test]
    fn completed_responses_uses_ordinals_and_values() {
        let mut sheet = AnswerSheet::new();
        for i in ItemNumber::all() {
            sheet.record(i, ResponseRating::try_from_u8(i.value() % 5).unwrap());
        }
        let responses = sheet.completed_responses();
        assert_eq!(responses.len(), 40);
        assert_eq!(responses[&1], 1);
        assert_eq!(responses[&5], 0);
        assert_eq!(responses[&40], 0);
    }

    #[test]
    fn completed_responses_omits_unanswered_slots() {
        let mut sheet = AnswerSheet::new();
        sheet.record(item(1), ResponseRating::Much);
        let responses = sheet.completed_responses();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[&1], 3);
    }
}
