//! Practice-hand sampling.
//!
//! The draw pile is a logical multiset: one slot per copy of every playable
//! deck entry. Slots are picked by rejection sampling with a fixed attempt
//! ceiling, so a draw always terminates without shuffling the whole pile.
//! If the ceiling runs out, the hand keeps whatever was collected.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::cards::{CardCatalog, CardDefinition, CardId, CardType};
use crate::core::{DeckRng, DeckRules};
use crate::deck::{Deck, DeckEntry};

/// One card of a drawn hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DrawnCard {
    pub card_id: CardId,
    pub card_type: CardType,
    pub name: String,
    /// Draw-pile slot this card came from.
    pub slot: usize,
}

impl DrawnCard {
    #[must_use]
    pub fn is_event(&self) -> bool {
        self.card_type == CardType::Event
    }
}

/// An ordered practice hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: Vec<DrawnCard>,
    pile_size: usize,
    attempts: usize,
    bonus: bool,
}

impl Hand {
    #[must_use]
    pub fn cards(&self) -> &[DrawnCard] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawnCard> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw-pile size the hand was sampled from.
    #[must_use]
    pub fn pile_size(&self) -> usize {
        self.pile_size
    }

    /// Sampling attempts used, bonus draw included.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Was the extra card for events drawn?
    #[must_use]
    pub fn has_bonus_card(&self) -> bool {
        self.bonus
    }

    #[must_use]
    pub fn has_event(&self) -> bool {
        self.cards.iter().any(DrawnCard::is_event)
    }

    /// Move the card at `from` to position `to`.
    ///
    /// Returns false, leaving the hand untouched, if either index is out of
    /// range.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from >= self.cards.len() || to >= self.cards.len() {
            return false;
        }
        let card = self.cards.remove(from);
        self.cards.insert(to, card);
        true
    }

    /// Swap two cards. Returns false if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.cards.len() || b >= self.cards.len() {
            return false;
        }
        self.cards.swap(a, b);
        true
    }
}

/// Draws bounded random hands from a deck's draw pile.
///
/// ## Example
///
/// ```
/// use deck_rules::cards::{CardCatalog, CardDefinition, CardType};
/// use deck_rules::core::{DeckRng, DeckRules};
/// use deck_rules::deck::Deck;
/// use deck_rules::hand::HandSampler;
///
/// let catalog = CardCatalog::from_cards([
///     CardDefinition::new("p1", "Punch", CardType::Power),
/// ])
/// .unwrap();
/// let deck = Deck::new().with_card("p1", CardType::Power, 12);
///
/// let rules = DeckRules::default();
/// let hand = HandSampler::new(&rules).draw(&deck, &catalog, &mut DeckRng::new(7));
/// assert_eq!(hand.len(), 8);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct HandSampler<'r> {
    rules: &'r DeckRules,
}

impl<'r> HandSampler<'r> {
    #[must_use]
    pub fn new(rules: &'r DeckRules) -> Self {
        Self { rules }
    }

    /// The draw pile, one slot per copy, in deck order.
    ///
    /// Unknown ids and `exclude_from_draw` cards contribute no slots.
    #[must_use]
    pub fn draw_pile<'a>(&self, deck: &'a Deck, catalog: &'a CardCatalog) -> DrawPile<'a> {
        let mut pile = DrawPile::default();
        for entry in deck.live_entries().filter(|e| e.in_draw_pile()) {
            let Some(card) = catalog.resolve(&entry.card_id, entry.card_type) else {
                continue;
            };
            if card.exclude_from_draw {
                continue;
            }
            pile.push(entry, card);
        }
        pile
    }

    /// Is the pile large enough for a full base hand?
    #[must_use]
    pub fn can_draw(&self, deck: &Deck, catalog: &CardCatalog) -> bool {
        self.draw_pile(deck, catalog).len() >= self.rules.base_hand_size
    }

    /// Draw a hand: up to the base size, plus one bonus card when an event
    /// was drawn and the pile has more slots than the base size.
    pub fn draw(&self, deck: &Deck, catalog: &CardCatalog, rng: &mut DeckRng) -> Hand {
        let pile = self.draw_pile(deck, catalog);
        let pile_size = pile.len();
        let mut used = FxHashSet::default();
        let mut hand = Hand {
            cards: Vec::with_capacity(self.rules.max_hand_size),
            pile_size,
            attempts: 0,
            bonus: false,
        };

        let target = self.rules.base_hand_size.min(pile_size);
        let ceiling = self.rules.draw_attempt_factor.saturating_mul(pile_size);
        hand.attempts += sample(&pile, &mut used, &mut hand.cards, target, ceiling, rng);
        if hand.cards.len() < target {
            tracing::debug!(
                pile_size,
                drawn = hand.cards.len(),
                target,
                ceiling,
                "draw attempt ceiling exhausted"
            );
        }

        let bonus_allowed = pile_size > self.rules.base_hand_size
            && hand.cards.len() < self.rules.max_hand_size;
        if hand.has_event() && bonus_allowed {
            let target = hand.cards.len() + 1;
            let ceiling = self.rules.bonus_draw_attempt_factor.saturating_mul(pile_size);
            hand.attempts += sample(&pile, &mut used, &mut hand.cards, target, ceiling, rng);
            hand.bonus = hand.cards.len() == target;
            if !hand.bonus {
                tracing::debug!(pile_size, ceiling, "bonus draw attempt ceiling exhausted");
            }
        }

        tracing::debug!(
            pile_size,
            hand_size = hand.cards.len(),
            attempts = hand.attempts,
            bonus = hand.bonus,
            "hand drawn"
        );
        hand
    }
}

/// Logical draw pile: runs of identical slots, one run per playable entry.
///
/// Slots are addressed by position without materializing one element per
/// copy, so very large quantities cost one run each.
#[derive(Clone, Debug, Default)]
pub struct DrawPile<'a> {
    /// Exclusive end slot of each run, ascending.
    ends: Vec<usize>,
    runs: Vec<(&'a DeckEntry, &'a CardDefinition)>,
}

impl<'a> DrawPile<'a> {
    fn push(&mut self, entry: &'a DeckEntry, card: &'a CardDefinition) {
        let copies = usize::try_from(entry.quantity).unwrap_or(usize::MAX);
        self.ends.push(self.len().saturating_add(copies));
        self.runs.push((entry, card));
    }

    /// Number of slots. Saturates at `usize::MAX`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ends.last().copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The card occupying a slot.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<(&'a DeckEntry, &'a CardDefinition)> {
        let run = self.ends.partition_point(|&end| end <= slot);
        self.runs.get(run).copied()
    }

    /// Playable entries with their slot counts, in deck order.
    pub fn runs(&self) -> impl Iterator<Item = (&'a DeckEntry, &'a CardDefinition)> + '_ {
        self.runs.iter().copied()
    }
}

/// Pick unused slots until `cards` holds `target` or `ceiling` attempts are
/// spent. Returns the attempts used.
fn sample(
    pile: &DrawPile<'_>,
    used: &mut FxHashSet<usize>,
    cards: &mut Vec<DrawnCard>,
    target: usize,
    ceiling: usize,
    rng: &mut DeckRng,
) -> usize {
    let mut attempts = 0;
    while cards.len() < target && attempts < ceiling {
        attempts += 1;
        let slot = rng.gen_index(pile.len());
        if !used.insert(slot) {
            continue;
        }
        let Some((entry, card)) = pile.get(slot) else {
            continue;
        };
        cards.push(DrawnCard {
            card_id: entry.card_id.clone(),
            card_type: entry.card_type,
            name: card.name.clone(),
            slot,
        });
    }
    attempts
}
