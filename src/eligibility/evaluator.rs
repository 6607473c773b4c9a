//! Constraint evaluator trait.
//!
//! Each evaluator is authoritative for a fixed set of card types (and,
//! within those, optionally a subset of cards). The engine only hands an
//! evaluator the catalog cards it governs, and only reads back verdicts for
//! those cards; everything else is left untouched. Merging is an OR over
//! blocks, so an `Enabled` verdict can never lift another evaluator's block.

use super::reason::{EvaluatorKind, Verdict};
use crate::cards::{CardDefinition, CardType};
use crate::deck::DeckIndex;

/// A pure, type-scoped eligibility constraint.
///
/// ## Implementation Notes
///
/// - `card_types`: Fixed at construction; the engine builds its
///   type-to-evaluator table from it
/// - `governs`: Must only accept cards whose type is in `card_types`
/// - `evaluate`: Returns exactly one verdict per governed card, in order
pub trait ConstraintEvaluator: Send + Sync {
    /// Identity used in block reasons.
    fn kind(&self) -> EvaluatorKind;

    /// Card types this evaluator may speak for.
    fn card_types(&self) -> &[CardType];

    /// Is this evaluator authoritative for the card?
    fn governs(&self, card: &CardDefinition) -> bool {
        self.card_types().contains(&card.card_type)
    }

    /// Decide every governed card against the current deck.
    fn evaluate(&self, index: &DeckIndex<'_>, governed: &[&CardDefinition]) -> Vec<Verdict>;
}
