//! Deck summary numbers for the deck header.

use serde::Serialize;

use super::threat::ThreatCalculator;
use crate::cards::{CardCatalog, CardType, StatKind};
use crate::core::DeckRules;
use crate::deck::{Deck, DeckIndex};

/// Types whose stat icons count toward the summary.
const ICON_TYPES: [CardType; 5] = [
    CardType::Power,
    CardType::Teamwork,
    CardType::AllyUniverse,
    CardType::Special,
    CardType::Aspect,
];

/// Copies showing each stat icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IconTotals {
    pub energy: u64,
    pub combat: u64,
    pub brute_force: u64,
    pub intelligence: u64,
}

impl IconTotals {
    /// Copies showing `stat`. Always zero for `AnyPower`.
    #[must_use]
    pub fn get(&self, stat: StatKind) -> u64 {
        match stat {
            StatKind::Energy => self.energy,
            StatKind::Combat => self.combat,
            StatKind::BruteForce => self.brute_force,
            StatKind::Intelligence => self.intelligence,
            StatKind::AnyPower => 0,
        }
    }

    fn add(&mut self, stat: StatKind, copies: u64) {
        let slot = match stat {
            StatKind::Energy => &mut self.energy,
            StatKind::Combat => &mut self.combat,
            StatKind::BruteForce => &mut self.brute_force,
            StatKind::Intelligence => &mut self.intelligence,
            StatKind::AnyPower => return,
        };
        *slot = slot.saturating_add(copies);
    }

    fn compute(index: &DeckIndex<'_>) -> Self {
        let mut totals = Self::default();
        for (entry, card) in index.resolved().filter(|(e, _)| ICON_TYPES.contains(&e.card_type)) {
            for stat in card.icon_stats() {
                totals.add(stat, u64::from(entry.quantity));
            }
        }
        totals
    }
}

/// Headline counts shown next to a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DeckSummary {
    pub total_threat: i64,
    pub max_total_threat: i64,
    pub character_count: usize,
    pub draw_pile_size: u64,
    pub required_draw_pile: u32,
    pub icon_totals: IconTotals,
}

impl DeckSummary {
    #[must_use]
    pub fn compute(deck: &Deck, catalog: &CardCatalog, rules: &DeckRules) -> Self {
        let index = DeckIndex::build(deck, catalog);
        Self {
            total_threat: ThreatCalculator::new(rules).total(deck, catalog),
            max_total_threat: rules.max_total_threat,
            character_count: index.entry_count(CardType::Character),
            draw_pile_size: index.draw_pile_size(),
            required_draw_pile: rules.required_draw_pile(index.has_events()),
            icon_totals: IconTotals::compute(&index),
        }
    }

    #[must_use]
    pub fn threat_exceeded(&self) -> bool {
        self.total_threat > self.max_total_threat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;

    #[test]
    fn test_summary() {
        let catalog = CardCatalog::from_cards([
            CardDefinition::new("c1", "Hero", CardType::Character).with_threat(20),
            CardDefinition::new("e1", "Storm", CardType::Event),
            CardDefinition::new("p1", "Punch", CardType::Power),
        ])
        .unwrap();
        let deck = Deck::new()
            .with_card("c1", CardType::Character, 1)
            .with_card("e1", CardType::Event, 1)
            .with_card("p1", CardType::Power, 10);

        let summary = DeckSummary::compute(&deck, &catalog, &DeckRules::default());
        assert_eq!(summary.total_threat, 20);
        assert_eq!(summary.character_count, 1);
        assert_eq!(summary.draw_pile_size, 11);
        assert_eq!(summary.required_draw_pile, 56);
        assert!(!summary.threat_exceeded());
        assert_eq!(summary.icon_totals, IconTotals::default());
    }

    #[test]
    fn test_icon_totals() {
        let all = [
            StatKind::Energy,
            StatKind::Combat,
            StatKind::BruteForce,
            StatKind::Intelligence,
        ];
        let catalog = CardCatalog::from_cards([
            CardDefinition::new("p1", "Punch", CardType::Power).requires(StatKind::Combat, 5),
            CardDefinition::new("p2", "Surge", CardType::Power).requires(StatKind::AnyPower, 6),
            CardDefinition::new("p3", "Multi", CardType::Power).with_icons(all),
            CardDefinition::new("t1", "Pair Up", CardType::Teamwork)
                .requires(StatKind::Energy, 6)
                .with_icons([StatKind::Energy, StatKind::Intelligence]),
            CardDefinition::new("s1", "Trick", CardType::Special)
                .with_icons([StatKind::BruteForce]),
            CardDefinition::new("b1", "Blast", CardType::BasicUniverse)
                .requires(StatKind::Energy, 6),
        ])
        .unwrap();
        let deck = Deck::new()
            .with_card("p1", CardType::Power, 3)
            .with_card("p2", CardType::Power, 4)
            .with_card("p3", CardType::Power, 1)
            .with_card("t1", CardType::Teamwork, 2)
            .with_card("s1", CardType::Special, 1)
            .with_card("b1", CardType::BasicUniverse, 5)
            .with_card("ghost", CardType::Power, 9);

        let totals = DeckSummary::compute(&deck, &catalog, &DeckRules::default()).icon_totals;
        assert_eq!(totals.get(StatKind::Energy), 3);
        assert_eq!(totals.get(StatKind::Combat), 4);
        assert_eq!(totals.get(StatKind::BruteForce), 2);
        assert_eq!(totals.get(StatKind::Intelligence), 3);
        assert_eq!(totals.get(StatKind::AnyPower), 0);
    }
}
