//! Deck composition: the ordered entry list plus the reserve designation.
//!
//! The surrounding editor owns and mutates a `Deck`; every computation in
//! this crate takes `&Deck` and never changes it. Entries live in an
//! `im::Vector`, so handing a snapshot to a computation is an O(1) clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::entry::DeckEntry;
use crate::cards::{CardId, CardType};

/// An ordered deck plus its optional reserve character.
///
/// ## Usage
///
/// ```
/// use deck_rules::cards::CardType;
/// use deck_rules::deck::Deck;
///
/// let mut deck = Deck::new()
///     .with_card("hero", CardType::Character, 1)
///     .with_card("blast", CardType::Power, 3);
///
/// deck.add_card("blast", CardType::Power, 2);
/// assert_eq!(deck.len(), 2);
/// assert_eq!(deck.draw_pile_size(), 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    entries: Vector<DeckEntry>,
    reserve: Option<CardId>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw entries, keeping duplicates as given.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = DeckEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            reserve: None,
        }
    }

    /// Add copies of a card (builder pattern).
    #[must_use]
    pub fn with_card(
        mut self,
        card_id: impl Into<CardId>,
        card_type: CardType,
        quantity: u32,
    ) -> Self {
        self.add_card(card_id, card_type, quantity);
        self
    }

    /// Designate the reserve character (builder pattern).
    #[must_use]
    pub fn with_reserve(mut self, card_id: impl Into<CardId>) -> Self {
        self.reserve = Some(card_id.into());
        self
    }

    /// Add copies of a card, merging into an existing (type, id) entry.
    pub fn add_card(&mut self, card_id: impl Into<CardId>, card_type: CardType, quantity: u32) {
        let card_id = card_id.into();
        if let Some(index) = self.position(card_type, &card_id) {
            let entry = &mut self.entries[index];
            entry.quantity = entry.quantity.saturating_add(quantity);
        } else {
            self.entries.push_back(DeckEntry::new(card_id, card_type, quantity));
        }
    }

    /// Append an entry without merging.
    pub fn push_entry(&mut self, entry: DeckEntry) {
        self.entries.push_back(entry);
    }

    /// Set the copy count of an existing entry. Returns false if absent.
    pub fn set_quantity(&mut self, card_type: CardType, card_id: &CardId, quantity: u32) -> bool {
        match self.position(card_type, card_id) {
            Some(index) => {
                self.entries[index].quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove one copy; the entry disappears when its count reaches zero.
    pub fn remove_one(&mut self, card_type: CardType, card_id: &CardId) -> bool {
        let Some(index) = self.position(card_type, card_id) else {
            return false;
        };
        if self.entries[index].quantity > 1 {
            self.entries[index].quantity -= 1;
        } else {
            self.remove_at(index);
        }
        true
    }

    /// Remove an entry entirely. Clears the reserve if it pointed at it.
    pub fn remove_card(&mut self, card_type: CardType, card_id: &CardId) -> bool {
        match self.position(card_type, card_id) {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    fn remove_at(&mut self, index: usize) {
        let removed = self.entries.remove(index);
        if removed.card_type == CardType::Character
            && self.reserve.as_ref() == Some(&removed.card_id)
        {
            self.reserve = None;
        }
    }

    fn position(&self, card_type: CardType, card_id: &CardId) -> Option<usize> {
        self.entries.iter().position(|e| e.matches(card_type, card_id))
    }

    /// Designate or clear the reserve character.
    pub fn set_reserve(&mut self, card_id: Option<CardId>) {
        self.reserve = card_id;
    }

    /// The reserve character id, if any.
    #[must_use]
    pub fn reserve(&self) -> Option<&CardId> {
        self.reserve.as_ref()
    }

    /// All entries in deck order, including zero-quantity ones.
    pub fn entries(&self) -> impl Iterator<Item = &DeckEntry> {
        self.entries.iter()
    }

    /// Entries with a positive quantity.
    pub fn live_entries(&self) -> impl Iterator<Item = &DeckEntry> {
        self.entries.iter().filter(|e| e.is_live())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total copies of a (type, id) pair, summing duplicate entries.
    #[must_use]
    pub fn copies_of(&self, card_type: CardType, card_id: &CardId) -> u64 {
        self.live_entries()
            .filter(|e| e.matches(card_type, card_id))
            .fold(0, |acc, e| acc.saturating_add(u64::from(e.quantity)))
    }

    /// Copies outside characters, locations and missions.
    #[must_use]
    pub fn draw_pile_size(&self) -> u64 {
        self.live_entries()
            .filter(|e| e.in_draw_pile())
            .fold(0, |acc, e| acc.saturating_add(u64::from(e.quantity)))
    }
}
