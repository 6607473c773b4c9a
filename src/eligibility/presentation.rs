//! Visual attributes for the card palette.
//!
//! The engine computes; this adapter only translates a merged
//! [`Eligibility`] into the three attributes the palette renders.

use serde::Serialize;

use super::engine::{Eligibility, EligibilityResult};
use crate::cards::CardId;

/// Interactive state of one palette card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CardPresentation {
    pub draggable: bool,
    pub disabled: bool,
    /// Tooltip text; empty when the card is enabled.
    pub title: String,
}

impl CardPresentation {
    #[must_use]
    pub fn from_eligibility(eligibility: &Eligibility) -> Self {
        let enabled = eligibility.is_enabled();
        Self {
            draggable: enabled,
            disabled: !enabled,
            title: eligibility.message(),
        }
    }

    /// Presentation for every card of a result, ordered by id.
    pub fn for_result(
        result: &EligibilityResult,
    ) -> impl Iterator<Item = (&CardId, CardPresentation)> {
        result.iter().map(|(id, e)| (id, Self::from_eligibility(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCatalog, CardDefinition, CardType};
    use crate::deck::Deck;
    use crate::eligibility::EligibilityEngine;

    #[test]
    fn test_enabled_card() {
        let presentation = CardPresentation::from_eligibility(&Eligibility::default());
        assert!(presentation.draggable);
        assert!(!presentation.disabled);
        assert!(presentation.title.is_empty());
    }

    #[test]
    fn test_blocked_card_titles() {
        let catalog = CardCatalog::from_cards([
            CardDefinition::new("c1", "Hero", CardType::Character),
            CardDefinition::new("k1", "Flood", CardType::Special).cataclysm(),
            CardDefinition::new("k2", "Quake", CardType::Special).cataclysm(),
        ])
        .unwrap();
        let deck = Deck::new()
            .with_card("c1", CardType::Character, 1)
            .with_card("k1", CardType::Special, 1);
        let result = EligibilityEngine::default().evaluate(&deck, &catalog);

        let titles: Vec<_> = CardPresentation::for_result(&result)
            .map(|(id, p)| (id.as_str().to_string(), p))
            .collect();

        assert_eq!(titles[0].0, "c1");
        assert!(titles[0].1.disabled);
        assert_eq!(titles[0].1.title, "This character is already in your deck");
        assert_eq!(titles[1].1.title, "Cataclysm - already in deck");
        assert_eq!(titles[2].1.title, "Cataclysm - another cataclysm already selected");
        assert!(!titles[2].1.draggable);
    }
}
