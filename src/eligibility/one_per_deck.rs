//! One-per-deck cards.
//!
//! Governs every card type except characters and missions, which have their
//! own count evaluators. A flagged card already in the deck is blocked;
//! everything else it governs is enabled.

use super::evaluator::ConstraintEvaluator;
use super::reason::{Block, EvaluatorKind, ReasonCode, Verdict};
use crate::cards::{CardDefinition, CardType};
use crate::deck::DeckIndex;

const SCOPE: [CardType; 10] = [
    CardType::Location,
    CardType::Event,
    CardType::Power,
    CardType::Special,
    CardType::Aspect,
    CardType::Teamwork,
    CardType::Training,
    CardType::BasicUniverse,
    CardType::AdvancedUniverse,
    CardType::AllyUniverse,
];

/// Blocks one-per-deck cards that are already present.
#[derive(Clone, Copy, Debug, Default)]
pub struct OnePerDeckEvaluator;

impl ConstraintEvaluator for OnePerDeckEvaluator {
    fn kind(&self) -> EvaluatorKind {
        EvaluatorKind::OnePerDeck
    }

    fn card_types(&self) -> &[CardType] {
        &SCOPE
    }

    fn evaluate(&self, index: &DeckIndex<'_>, governed: &[&CardDefinition]) -> Vec<Verdict> {
        governed
            .iter()
            .map(|card| {
                if card.one_per_deck && index.contains(card.card_type, &card.id) {
                    Verdict::Blocked(Block::new(EvaluatorKind::OnePerDeck, ReasonCode::OnePerDeck))
                } else {
                    Verdict::Enabled
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCatalog;
    use crate::deck::Deck;

    #[test]
    fn test_scope_excludes_characters_and_missions() {
        let evaluator = OnePerDeckEvaluator;
        let character = CardDefinition::new("c", "C", CardType::Character).one_per_deck();
        let mission = CardDefinition::new("m", "M", CardType::Mission).one_per_deck();
        assert!(!evaluator.governs(&character));
        assert!(!evaluator.governs(&mission));
        assert!(evaluator.governs(&CardDefinition::new("l", "L", CardType::Location)));
        assert!(evaluator.governs(&CardDefinition::new("s", "S", CardType::Special)));
    }

    #[test]
    fn test_blocks_present_flagged_card() {
        let catalog = CardCatalog::from_cards([
            CardDefinition::new("u1", "Relic", CardType::Special).one_per_deck(),
            CardDefinition::new("u2", "Other Relic", CardType::Special).one_per_deck(),
            CardDefinition::new("s1", "Common", CardType::Special),
        ])
        .unwrap();
        let deck = Deck::new()
            .with_card("u1", CardType::Special, 1)
            .with_card("s1", CardType::Special, 3);
        let index = DeckIndex::build(&deck, &catalog);

        let cards: Vec<_> = ["u1", "u2", "s1"]
            .iter()
            .map(|id| catalog.get(&(*id).into()).unwrap())
            .collect();
        let verdicts = OnePerDeckEvaluator.evaluate(&index, &cards);

        assert!(matches!(verdicts[0], Verdict::Blocked(b) if b.reason == ReasonCode::OnePerDeck));
        assert_eq!(verdicts[1], Verdict::Enabled);
        assert_eq!(verdicts[2], Verdict::Enabled);
    }
}
