//! Deck threat total.
//!
//! Threat is the sum of character and location threat levels times their
//! quantities. A character designated as the reserve uses the override
//! from `DeckRules::reserve_overrides` when its name has one.

use crate::cards::{CardCatalog, CardType};
use crate::core::DeckRules;
use crate::deck::{Deck, DeckEntry};

/// Computes the threat total of a deck.
#[derive(Clone, Copy, Debug)]
pub struct ThreatCalculator<'r> {
    rules: &'r DeckRules,
}

impl<'r> ThreatCalculator<'r> {
    #[must_use]
    pub fn new(rules: &'r DeckRules) -> Self {
        Self { rules }
    }

    /// Total threat of the deck. Unknown cards contribute nothing.
    #[must_use]
    pub fn total(&self, deck: &Deck, catalog: &CardCatalog) -> i64 {
        deck.live_entries()
            .map(|entry| self.entry_threat(entry, deck, catalog))
            .fold(0i64, i64::saturating_add)
            .max(0)
    }

    /// Threat contributed by a single entry.
    #[must_use]
    pub fn entry_threat(&self, entry: &DeckEntry, deck: &Deck, catalog: &CardCatalog) -> i64 {
        if !matches!(entry.card_type, CardType::Character | CardType::Location) {
            return 0;
        }
        let Some(card) = catalog.resolve(&entry.card_id, entry.card_type) else {
            return 0;
        };

        let mut threat = card.threat();
        if entry.card_type == CardType::Character && deck.reserve() == Some(&entry.card_id) {
            if let Some(reserve_threat) = self.rules.reserve_override(&card.name) {
                threat = reserve_threat;
            }
        }
        threat.saturating_mul(i64::from(entry.quantity))
    }
}
