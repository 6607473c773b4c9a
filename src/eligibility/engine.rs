//! Eligibility engine: runs every evaluator and merges their verdicts.
//!
//! ## Merge
//!
//! 1. The type-to-evaluator table (built once, at construction) decides
//!    which evaluators may speak for each catalog card.
//! 2. Every evaluator runs to completion over the cards it governs.
//! 3. A card is blocked if any governing evaluator blocked it; the blocks
//!    are kept in evaluator order. Cards no evaluator governs are enabled.
//!
//! The result is a fresh value derived only from (deck, catalog), so
//! repeated calls on the same inputs return equal results.

use im::OrdMap;
use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;

use super::evaluator::ConstraintEvaluator;
use super::exclusive::{ExclusiveFlagEvaluator, ExclusiveGroup};
use super::limits::LimitEvaluator;
use super::one_per_deck::OnePerDeckEvaluator;
use super::reason::{Block, ReasonCode, Verdict};
use crate::cards::{CardCatalog, CardDefinition, CardId, CardType};
use crate::core::DeckRules;
use crate::deck::{Deck, DeckIndex};

/// Merged eligibility of one catalog card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Eligibility {
    blocks: SmallVec<[Block; 2]>,
}

impl Eligibility {
    /// Can the card be added right now?
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Primary reason: the first blocking evaluator's, or `None`.
    #[must_use]
    pub fn reason(&self) -> ReasonCode {
        self.blocks.first().map_or(ReasonCode::None, |b| b.reason)
    }

    /// Every block, in evaluator order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Human-readable reason for the primary block; empty when enabled.
    #[must_use]
    pub fn message(&self) -> String {
        self.blocks.first().map(Block::message).unwrap_or_default()
    }
}

/// Eligibility of every catalog card, ordered by id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EligibilityResult {
    cards: OrdMap<CardId, Eligibility>,
}

impl EligibilityResult {
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Eligibility> {
        self.cards.get(id)
    }

    /// Enabled state of a catalog card. Unknown ids are never enabled.
    #[must_use]
    pub fn is_enabled(&self, id: &CardId) -> bool {
        self.cards.get(id).is_some_and(Eligibility::is_enabled)
    }

    /// Primary reason code. Unknown ids report `None`.
    #[must_use]
    pub fn reason(&self, id: &CardId) -> ReasonCode {
        self.cards.get(id).map_or(ReasonCode::None, Eligibility::reason)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CardId, &Eligibility)> {
        self.cards.iter()
    }

    /// Ids of blocked cards, ordered.
    pub fn blocked(&self) -> impl Iterator<Item = &CardId> {
        self.cards.iter().filter(|(_, e)| !e.is_enabled()).map(|(id, _)| id)
    }

    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.blocked().count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Composes independent constraint evaluators into one eligibility map.
///
/// ## Example
///
/// ```
/// use deck_rules::cards::{CardCatalog, CardDefinition, CardId, CardType};
/// use deck_rules::core::DeckRules;
/// use deck_rules::deck::Deck;
/// use deck_rules::eligibility::{EligibilityEngine, ReasonCode};
///
/// let catalog = CardCatalog::from_cards([
///     CardDefinition::new("k1", "Flood", CardType::Special).cataclysm(),
///     CardDefinition::new("k2", "Quake", CardType::Special).cataclysm(),
/// ])
/// .unwrap();
/// let deck = Deck::new().with_card("k1", CardType::Special, 1);
///
/// let engine = EligibilityEngine::standard(&DeckRules::default());
/// let result = engine.evaluate(&deck, &catalog);
///
/// assert_eq!(result.reason(&CardId::new("k2")), ReasonCode::CataclysmConflict);
/// ```
pub struct EligibilityEngine {
    evaluators: Vec<Box<dyn ConstraintEvaluator>>,
    /// Evaluator indices per card type, in registration order.
    table: FxHashMap<CardType, SmallVec<[usize; 4]>>,
}

impl std::fmt::Debug for EligibilityEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EligibilityEngine")
            .field("evaluators", &self.evaluators.iter().map(|e| e.kind()).collect::<Vec<_>>())
            .finish()
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::standard(&DeckRules::default())
    }
}

impl EligibilityEngine {
    /// Engine with no evaluators: every card is enabled.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            evaluators: Vec::new(),
            table: FxHashMap::default(),
        }
    }

    /// The editor's evaluator set, with limits from `rules`.
    #[must_use]
    pub fn standard(rules: &DeckRules) -> Self {
        let mut engine = Self::empty()
            .with_evaluator(LimitEvaluator::characters(rules.required_characters))
            .with_evaluator(LimitEvaluator::missions(rules.max_missions))
            .with_evaluator(LimitEvaluator::locations(rules.max_locations));
        for group in ExclusiveGroup::ALL {
            engine = engine.with_evaluator(ExclusiveFlagEvaluator::new(group));
        }
        engine.with_evaluator(OnePerDeckEvaluator)
    }

    /// Register an evaluator (builder pattern).
    #[must_use]
    pub fn with_evaluator(mut self, evaluator: impl ConstraintEvaluator + 'static) -> Self {
        let slot = self.evaluators.len();
        for &card_type in evaluator.card_types() {
            let entry = self.table.entry(card_type).or_default();
            if !entry.contains(&slot) {
                entry.push(slot);
            }
        }
        self.evaluators.push(Box::new(evaluator));
        self
    }

    /// Number of registered evaluators.
    #[must_use]
    pub fn evaluator_count(&self) -> usize {
        self.evaluators.len()
    }

    /// Recompute eligibility of every catalog card for the current deck.
    #[must_use]
    pub fn evaluate(&self, deck: &Deck, catalog: &CardCatalog) -> EligibilityResult {
        let index = DeckIndex::build(deck, catalog);

        // Route each catalog card to the evaluators that govern it.
        let mut governed: Vec<Vec<&CardDefinition>> = vec![Vec::new(); self.evaluators.len()];
        for card in catalog.iter() {
            let Some(slots) = self.table.get(&card.card_type) else {
                continue;
            };
            for &slot in slots {
                if self.evaluators[slot].governs(card) {
                    governed[slot].push(card);
                }
            }
        }

        let mut blocks: FxHashMap<&CardId, SmallVec<[Block; 2]>> = FxHashMap::default();
        for (slot, evaluator) in self.evaluators.iter().enumerate() {
            let cards = &governed[slot];
            let verdicts = evaluator.evaluate(&index, cards);
            debug_assert_eq!(
                verdicts.len(),
                cards.len(),
                "{:?} must decide every governed card",
                evaluator.kind()
            );

            for (card, verdict) in cards.iter().zip(verdicts) {
                if let Verdict::Blocked(block) = verdict {
                    blocks.entry(&card.id).or_default().push(block);
                }
            }
        }

        let cards: OrdMap<CardId, Eligibility> = catalog
            .iter()
            .map(|card| {
                let eligibility = Eligibility {
                    blocks: blocks.remove(&card.id).unwrap_or_default(),
                };
                (card.id.clone(), eligibility)
            })
            .collect();
        let result = EligibilityResult { cards };

        tracing::debug!(
            cards = result.len(),
            blocked = result.blocked_count(),
            evaluators = self.evaluators.len(),
            "eligibility recomputed"
        );
        result
    }
}
