//! Mutually exclusive card groups (cataclysm, assist, ambush, fortification).
//!
//! A deck may hold at most one card of each group. While one is present,
//! every flagged card of the group is blocked: the present one as
//! `AlreadyInDeck`, the rest with the group's conflict reason. The evaluator
//! only governs flagged cards; the rest of the type is left alone.

use super::evaluator::ConstraintEvaluator;
use super::reason::{Block, EvaluatorKind, ReasonCode, Verdict};
use crate::cards::{CardDefinition, CardType};
use crate::deck::DeckIndex;

/// A catalog flag that makes cards mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExclusiveGroup {
    Cataclysm,
    Assist,
    Ambush,
    Fortification,
}

impl ExclusiveGroup {
    pub const ALL: [ExclusiveGroup; 4] = [
        ExclusiveGroup::Cataclysm,
        ExclusiveGroup::Assist,
        ExclusiveGroup::Ambush,
        ExclusiveGroup::Fortification,
    ];

    #[must_use]
    pub const fn card_type(self) -> CardType {
        match self {
            ExclusiveGroup::Fortification => CardType::Aspect,
            _ => CardType::Special,
        }
    }

    #[must_use]
    pub const fn kind(self) -> EvaluatorKind {
        match self {
            ExclusiveGroup::Cataclysm => EvaluatorKind::Cataclysm,
            ExclusiveGroup::Assist => EvaluatorKind::Assist,
            ExclusiveGroup::Ambush => EvaluatorKind::Ambush,
            ExclusiveGroup::Fortification => EvaluatorKind::Fortification,
        }
    }

    #[must_use]
    pub const fn conflict(self) -> ReasonCode {
        match self {
            ExclusiveGroup::Cataclysm => ReasonCode::CataclysmConflict,
            ExclusiveGroup::Assist => ReasonCode::AssistConflict,
            ExclusiveGroup::Ambush => ReasonCode::AmbushConflict,
            ExclusiveGroup::Fortification => ReasonCode::FortificationConflict,
        }
    }

    /// Is the card a member of this group?
    #[must_use]
    pub fn contains(self, card: &CardDefinition) -> bool {
        card.card_type == self.card_type()
            && match self {
                ExclusiveGroup::Cataclysm => card.is_cataclysm,
                ExclusiveGroup::Assist => card.is_assist,
                ExclusiveGroup::Ambush => card.is_ambush,
                ExclusiveGroup::Fortification => card.is_fortification,
            }
    }
}

/// Enforces one card per exclusive group.
#[derive(Clone, Debug)]
pub struct ExclusiveFlagEvaluator {
    group: ExclusiveGroup,
    card_type: [CardType; 1],
}

impl ExclusiveFlagEvaluator {
    #[must_use]
    pub fn new(group: ExclusiveGroup) -> Self {
        Self {
            group,
            card_type: [group.card_type()],
        }
    }

    #[must_use]
    pub fn cataclysm() -> Self {
        Self::new(ExclusiveGroup::Cataclysm)
    }

    #[must_use]
    pub fn group(&self) -> ExclusiveGroup {
        self.group
    }
}

impl ConstraintEvaluator for ExclusiveFlagEvaluator {
    fn kind(&self) -> EvaluatorKind {
        self.group.kind()
    }

    fn card_types(&self) -> &[CardType] {
        &self.card_type
    }

    fn governs(&self, card: &CardDefinition) -> bool {
        self.group.contains(card)
    }

    fn evaluate(&self, index: &DeckIndex<'_>, governed: &[&CardDefinition]) -> Vec<Verdict> {
        let present = index.distinct_ids_where(|card| self.group.contains(card));
        let kind = self.kind();

        governed
            .iter()
            .map(|card| {
                if present.contains(&card.id) {
                    Verdict::Blocked(Block::new(kind, ReasonCode::AlreadyInDeck))
                } else if !present.is_empty() {
                    Verdict::Blocked(Block::new(kind, self.group.conflict()))
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

    fn catalog() -> CardCatalog {
        CardCatalog::from_cards([
            CardDefinition::new("k1", "Flood", CardType::Special).cataclysm(),
            CardDefinition::new("k2", "Quake", CardType::Special).cataclysm(),
            CardDefinition::new("s1", "Plain Special", CardType::Special),
            CardDefinition::new("a1", "Helping Hand", CardType::Special).assist(),
            CardDefinition::new("f1", "Wall", CardType::Aspect).fortification(),
        ])
        .unwrap()
    }

    #[test]
    fn test_governs_only_flagged_cards() {
        let evaluator = ExclusiveFlagEvaluator::cataclysm();
        let catalog = catalog();
        let governed: Vec<_> = catalog
            .iter()
            .filter(|c| evaluator.governs(c))
            .map(|c| c.id.as_str())
            .collect();

        assert_eq!(governed.len(), 2);
        assert!(governed.contains(&"k1"));
        assert!(governed.contains(&"k2"));
    }

    #[test]
    fn test_present_card_blocks_group() {
        let catalog = catalog();
        let deck = Deck::new().with_card("k1", CardType::Special, 1);
        let index = DeckIndex::build(&deck, &catalog);
        let evaluator = ExclusiveFlagEvaluator::cataclysm();

        let k1 = catalog.get(&"k1".into()).unwrap();
        let k2 = catalog.get(&"k2".into()).unwrap();
        let verdicts = evaluator.evaluate(&index, &[k1, k2]);

        assert_eq!(
            verdicts,
            vec![
                Verdict::Blocked(Block::new(EvaluatorKind::Cataclysm, ReasonCode::AlreadyInDeck)),
                Verdict::Blocked(Block::new(
                    EvaluatorKind::Cataclysm,
                    ReasonCode::CataclysmConflict
                )),
            ]
        );
    }

    #[test]
    fn test_empty_group_enables() {
        let catalog = catalog();
        let deck = Deck::new().with_card("a1", CardType::Special, 1);
        let index = DeckIndex::build(&deck, &catalog);
        let evaluator = ExclusiveFlagEvaluator::cataclysm();

        let k1 = catalog.get(&"k1".into()).unwrap();
        assert_eq!(evaluator.evaluate(&index, &[k1]), vec![Verdict::Enabled]);
    }

    #[test]
    fn test_fortification_is_aspect_scoped() {
        let evaluator = ExclusiveFlagEvaluator::new(ExclusiveGroup::Fortification);
        assert_eq!(evaluator.card_types(), &[CardType::Aspect]);
        let misplaced = CardDefinition::new("x", "X", CardType::Special).fortification();
        assert!(!evaluator.governs(&misplaced));
    }
}
