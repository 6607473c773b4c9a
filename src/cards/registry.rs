//! Card catalog for definition lookup.
//!
//! The `CardCatalog` is a read-only snapshot of every card a deck may use.
//! It provides fast lookup by `CardId` and supports iteration.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardType};
use crate::error::CatalogError;

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use deck_rules::cards::{CardCatalog, CardDefinition, CardId, CardType};
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .register(CardDefinition::new("m1", "The Lost World", CardType::Mission))
///     .unwrap();
///
/// let found = catalog.get(&CardId::new("m1")).unwrap();
/// assert_eq!(found.name, "The Lost World");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from definitions, rejecting duplicate ids.
    pub fn from_cards(
        cards: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.register(card)?;
        }
        Ok(catalog)
    }

    /// Decode a catalog snapshot from a JSON array of definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<CardDefinition> = serde_json::from_str(json)?;
        Self::from_cards(cards)
    }

    /// Register a card definition.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::DuplicateId(card.id));
        }
        self.cards.insert(card.id.clone(), card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    /// Resolve a deck reference: the id must exist and carry the expected type.
    #[must_use]
    pub fn resolve(&self, id: &CardId, card_type: CardType) -> Option<&CardDefinition> {
        self.cards.get(id).filter(|c| c.card_type == card_type)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog
            .register(CardDefinition::new("c1", "Test Card", CardType::Character))
            .unwrap();

        let found = catalog.get(&CardId::new("c1"));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Test Card");

        assert!(catalog.get(&CardId::new("missing")).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = CardCatalog::new();
        catalog
            .register(CardDefinition::new("x", "Card A", CardType::Power))
            .unwrap();

        let err = catalog
            .register(CardDefinition::new("x", "Card B", CardType::Power))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ref id) if id.as_str() == "x"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_resolve_checks_type() {
        let catalog = CardCatalog::from_cards([
            CardDefinition::new("e1", "Eclipse", CardType::Event),
        ])
        .unwrap();

        assert!(catalog.resolve(&CardId::new("e1"), CardType::Event).is_some());
        assert!(catalog.resolve(&CardId::new("e1"), CardType::Special).is_none());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            { "id": "c1", "name": "Hero", "card_type": "character", "threat_level": 18 },
            { "id": "s1", "name": "Doom", "card_type": "special", "is_cataclysm": true }
        ]"#;
        let catalog = CardCatalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&CardId::new("c1")).unwrap().threat_level, Some(18));
        assert!(catalog.get(&CardId::new("s1")).unwrap().is_cataclysm);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = CardCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
