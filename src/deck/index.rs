//! Per-call derived view of a deck against a catalog.
//!
//! A `DeckIndex` is built once per computation and shared by every rule
//! and evaluator in it, so they all count the same snapshot the same way.
//! It borrows both inputs and owns nothing between calls.

use rustc_hash::{FxHashMap, FxHashSet};

use super::composition::Deck;
use super::entry::DeckEntry;
use crate::cards::{CardCatalog, CardDefinition, CardId, CardType};

/// Counts and catalog resolutions for one (deck, catalog) snapshot.
#[derive(Debug)]
pub struct DeckIndex<'a> {
    deck: &'a Deck,
    /// Live entries whose (id, type) resolved in the catalog.
    resolved: Vec<(&'a DeckEntry, &'a CardDefinition)>,
    /// Live entries with no matching catalog card.
    unknown: Vec<&'a DeckEntry>,
    /// Live entry count per type, resolved or not.
    entry_counts: FxHashMap<CardType, usize>,
    /// Summed copies per resolved (type, id).
    copies: FxHashMap<(CardType, &'a CardId), u64>,
}

impl<'a> DeckIndex<'a> {
    /// Index a deck. Zero-quantity entries are dropped here.
    #[must_use]
    pub fn build(deck: &'a Deck, catalog: &'a CardCatalog) -> Self {
        let mut resolved = Vec::with_capacity(deck.len());
        let mut unknown = Vec::new();
        let mut entry_counts: FxHashMap<CardType, usize> = FxHashMap::default();
        let mut copies: FxHashMap<(CardType, &'a CardId), u64> = FxHashMap::default();

        for entry in deck.live_entries() {
            *entry_counts.entry(entry.card_type).or_default() += 1;

            match catalog.resolve(&entry.card_id, entry.card_type) {
                Some(card) => {
                    let slot = copies.entry((entry.card_type, &entry.card_id)).or_default();
                    *slot = slot.saturating_add(u64::from(entry.quantity));
                    resolved.push((entry, card));
                }
                None => {
                    tracing::trace!(
                        card = %entry.card_id,
                        card_type = %entry.card_type,
                        "deck entry has no catalog match"
                    );
                    unknown.push(entry);
                }
            }
        }

        Self {
            deck,
            resolved,
            unknown,
            entry_counts,
            copies,
        }
    }

    /// The indexed deck.
    #[must_use]
    pub fn deck(&self) -> &'a Deck {
        self.deck
    }

    /// Live entries paired with their catalog definitions, in deck order.
    pub fn resolved(&self) -> impl Iterator<Item = (&'a DeckEntry, &'a CardDefinition)> + '_ {
        self.resolved.iter().copied()
    }

    /// Resolved entries of one type.
    pub fn resolved_of(
        &self,
        card_type: CardType,
    ) -> impl Iterator<Item = (&'a DeckEntry, &'a CardDefinition)> + '_ {
        self.resolved().filter(move |(e, _)| e.card_type == card_type)
    }

    /// Catalog definitions of the deck's characters.
    pub fn characters(&self) -> impl Iterator<Item = &'a CardDefinition> + '_ {
        self.resolved_of(CardType::Character).map(|(_, card)| card)
    }

    /// Live entries that reference unknown cards.
    #[must_use]
    pub fn unknown(&self) -> &[&'a DeckEntry] {
        &self.unknown
    }

    /// Live entries of a type, counting unknown references too.
    #[must_use]
    pub fn entry_count(&self, card_type: CardType) -> usize {
        self.entry_counts.get(&card_type).copied().unwrap_or(0)
    }

    /// Summed copies of a resolved card.
    #[must_use]
    pub fn copies(&self, card_type: CardType, card_id: &CardId) -> u64 {
        self.copies.get(&(card_type, card_id)).copied().unwrap_or(0)
    }

    /// Is a resolved card of this type present?
    #[must_use]
    pub fn contains(&self, card_type: CardType, card_id: &CardId) -> bool {
        self.copies(card_type, card_id) > 0
    }

    /// Distinct resolved ids of a type.
    #[must_use]
    pub fn distinct_ids(&self, card_type: CardType) -> FxHashSet<&'a CardId> {
        self.resolved_of(card_type).map(|(e, _)| &e.card_id).collect()
    }

    /// Distinct resolved ids whose card satisfies a predicate.
    pub fn distinct_ids_where<F>(&self, predicate: F) -> FxHashSet<&'a CardId>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.resolved()
            .filter(|(_, card)| predicate(card))
            .map(|(e, _)| &e.card_id)
            .collect()
    }

    /// Draw-pile copies over all live entries.
    #[must_use]
    pub fn draw_pile_size(&self) -> u64 {
        self.deck.draw_pile_size()
    }

    /// Does the deck hold any event entry?
    #[must_use]
    pub fn has_events(&self) -> bool {
        self.entry_count(CardType::Event) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CardCatalog {
        CardCatalog::from_cards([
            CardDefinition::new("c1", "Hero", CardType::Character),
            CardDefinition::new("c2", "Villain", CardType::Character),
            CardDefinition::new("s1", "Trick", CardType::Special),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolves_and_skips_unknown() {
        let catalog = catalog();
        let deck = Deck::new()
            .with_card("c1", CardType::Character, 1)
            .with_card("ghost", CardType::Character, 1)
            .with_card("s1", CardType::Special, 2);
        let index = DeckIndex::build(&deck, &catalog);

        assert_eq!(index.entry_count(CardType::Character), 2);
        assert_eq!(index.characters().count(), 1);
        assert_eq!(index.unknown().len(), 1);
        assert_eq!(index.copies(CardType::Special, &CardId::new("s1")), 2);
    }

    #[test]
    fn test_type_mismatch_is_unknown() {
        let catalog = catalog();
        let deck = Deck::new().with_card("s1", CardType::Aspect, 1);
        let index = DeckIndex::build(&deck, &catalog);

        assert_eq!(index.unknown().len(), 1);
        assert!(!index.contains(CardType::Aspect, &CardId::new("s1")));
    }

    #[test]
    fn test_zero_quantity_dropped() {
        let catalog = catalog();
        let deck = Deck::new()
            .with_card("c1", CardType::Character, 0)
            .with_card("c2", CardType::Character, 1);
        let index = DeckIndex::build(&deck, &catalog);

        assert_eq!(index.entry_count(CardType::Character), 1);
        assert!(!index.contains(CardType::Character, &CardId::new("c1")));
        assert_eq!(index.distinct_ids(CardType::Character).len(), 1);
    }

    #[test]
    fn test_duplicates_add_up() {
        let catalog = catalog();
        let deck = Deck::from_entries([
            DeckEntry::single("s1", CardType::Special),
            DeckEntry::single("s1", CardType::Special),
        ]);
        let index = DeckIndex::build(&deck, &catalog);

        assert_eq!(index.entry_count(CardType::Special), 2);
        assert_eq!(index.copies(CardType::Special, &CardId::new("s1")), 2);
        assert_eq!(index.distinct_ids(CardType::Special).len(), 1);
    }

    #[test]
    fn test_huge_duplicates_do_not_overflow() {
        let catalog = catalog();
        let deck = Deck::from_entries([
            DeckEntry::new("s1", CardType::Special, u32::MAX),
            DeckEntry::new("s1", CardType::Special, u32::MAX),
            DeckEntry::new("s1", CardType::Special, 1),
        ]);
        let index = DeckIndex::build(&deck, &catalog);
        let expected = 2 * u64::from(u32::MAX) + 1;

        assert_eq!(index.copies(CardType::Special, &CardId::new("s1")), expected);
        assert_eq!(index.draw_pile_size(), expected);
    }
}
