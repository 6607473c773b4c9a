//! Deck line items.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardType};

/// One line of a deck: a catalog reference plus a copy count.
///
/// The type is denormalized from the catalog so the deck can be counted
/// without lookups. Characters, locations and missions conceptually hold a
/// single copy, but the quantity is still carried and tolerated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    /// Referenced catalog card.
    pub card_id: CardId,

    /// Catalog type of the referenced card.
    pub card_type: CardType,

    /// Number of copies. Zero-quantity entries are ignored by every computation.
    pub quantity: u32,
}

impl DeckEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(card_id: impl Into<CardId>, card_type: CardType, quantity: u32) -> Self {
        Self {
            card_id: card_id.into(),
            card_type,
            quantity,
        }
    }

    /// Single copy of a card.
    #[must_use]
    pub fn single(card_id: impl Into<CardId>, card_type: CardType) -> Self {
        Self::new(card_id, card_type, 1)
    }

    /// Does this entry take part in counting?
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.quantity > 0
    }

    /// Does this entry contribute to the draw pile?
    #[must_use]
    pub fn in_draw_pile(&self) -> bool {
        self.is_live() && self.card_type.is_draw_pile()
    }

    /// Same (type, id) pair as another reference?
    #[must_use]
    pub fn matches(&self, card_type: CardType, card_id: &CardId) -> bool {
        self.card_type == card_type && &self.card_id == card_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liveness() {
        assert!(DeckEntry::single("a", CardType::Power).is_live());
        assert!(!DeckEntry::new("a", CardType::Power, 0).is_live());
    }

    #[test]
    fn test_draw_pile_membership() {
        assert!(DeckEntry::new("p", CardType::Power, 3).in_draw_pile());
        assert!(!DeckEntry::new("p", CardType::Power, 0).in_draw_pile());
        assert!(!DeckEntry::single("c", CardType::Character).in_draw_pile());
        assert!(!DeckEntry::single("m", CardType::Mission).in_draw_pile());
    }

    #[test]
    fn test_matches() {
        let entry = DeckEntry::single("x", CardType::Special);
        assert!(entry.matches(CardType::Special, &CardId::new("x")));
        assert!(!entry.matches(CardType::Aspect, &CardId::new("x")));
        assert!(!entry.matches(CardType::Special, &CardId::new("y")));
    }
}
