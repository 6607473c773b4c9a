//! Count-limited card types: characters, missions, locations.
//!
//! A card already in the deck is blocked as `AlreadyInDeck`. Once the deck
//! holds `limit` distinct cards of the type, every other card of the type is
//! blocked as `LimitReached`. Otherwise the evaluator enables the card; it is
//! the sole authority for its type's count.

use super::evaluator::ConstraintEvaluator;
use super::reason::{Block, EvaluatorKind, ReasonCode, Verdict};
use crate::cards::{CardDefinition, CardType};
use crate::deck::DeckIndex;

/// Per-type distinct-card limit.
#[derive(Clone, Debug)]
pub struct LimitEvaluator {
    kind: EvaluatorKind,
    card_type: [CardType; 1],
    limit: usize,
}

impl LimitEvaluator {
    /// Distinct characters allowed.
    #[must_use]
    pub fn characters(limit: usize) -> Self {
        Self {
            kind: EvaluatorKind::CharacterLimit,
            card_type: [CardType::Character],
            limit,
        }
    }

    /// Distinct missions allowed.
    #[must_use]
    pub fn missions(limit: usize) -> Self {
        Self {
            kind: EvaluatorKind::MissionLimit,
            card_type: [CardType::Mission],
            limit,
        }
    }

    /// Distinct locations allowed.
    #[must_use]
    pub fn locations(limit: usize) -> Self {
        Self {
            kind: EvaluatorKind::LocationLimit,
            card_type: [CardType::Location],
            limit,
        }
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl ConstraintEvaluator for LimitEvaluator {
    fn kind(&self) -> EvaluatorKind {
        self.kind
    }

    fn card_types(&self) -> &[CardType] {
        &self.card_type
    }

    fn evaluate(&self, index: &DeckIndex<'_>, governed: &[&CardDefinition]) -> Vec<Verdict> {
        let present = index.distinct_ids(self.card_type[0]);
        let full = present.len() >= self.limit;

        governed
            .iter()
            .map(|card| {
                if present.contains(&card.id) {
                    Verdict::Blocked(Block::new(self.kind, ReasonCode::AlreadyInDeck))
                } else if full {
                    let block = Block::new(self.kind, ReasonCode::LimitReached);
                    Verdict::Blocked(block.with_limit(self.limit))
                } else {
                    Verdict::Enabled
                }
            })
            .collect()
    }
}
