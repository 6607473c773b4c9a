//! Deck legality validation.
//!
//! Every rule is checked independently against the same `DeckIndex` and
//! appends its own violations; no rule short-circuits another. Entries with
//! no catalog match are skipped by every rule that needs catalog data and
//! surface as warnings instead.

use rustc_hash::FxHashSet;

use super::report::{Report, Violation};
use super::threat::ThreatCalculator;
use crate::cards::{CardCatalog, CardDefinition, CardId, CardType, Stats};
use crate::core::DeckRules;
use crate::deck::{Deck, DeckIndex};

/// Validates full decks against `DeckRules`.
///
/// ## Example
///
/// ```
/// use deck_rules::cards::CardCatalog;
/// use deck_rules::core::DeckRules;
/// use deck_rules::deck::Deck;
/// use deck_rules::rules::LegalityValidator;
///
/// let rules = DeckRules::default();
/// let report = LegalityValidator::new(&rules).validate(&Deck::new(), &CardCatalog::new());
///
/// assert!(!report.is_valid());
/// assert!(report.has_error("character_count"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LegalityValidator<'r> {
    rules: &'r DeckRules,
}

impl<'r> LegalityValidator<'r> {
    #[must_use]
    pub fn new(rules: &'r DeckRules) -> Self {
        Self { rules }
    }

    /// Validate a deck. Never fails; violations are reported as data.
    #[must_use]
    pub fn validate(&self, deck: &Deck, catalog: &CardCatalog) -> Report {
        let index = DeckIndex::build(deck, catalog);
        let mut report = Report::new();

        self.check_character_count(&index, &mut report);
        self.check_solo_characters(&index, &mut report);
        self.check_structural_limits(&index, &mut report);
        let total_threat = self.check_threat(deck, catalog, &mut report);
        self.check_draw_pile(&index, &mut report);
        self.check_one_per_deck(&index, &mut report);
        self.check_unusable_with(&index, &mut report);
        self.check_stat_requirements(&index, &mut report);

        self.warn_unknown_cards(&index, &mut report);
        self.warn_reserve(&index, &mut report);

        tracing::debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            total_threat,
            draw_pile = index.draw_pile_size(),
            "deck validated"
        );
        report
    }

    fn check_character_count(&self, index: &DeckIndex<'_>, report: &mut Report) {
        let found = index.entry_count(CardType::Character);
        if found != self.rules.required_characters {
            report.error(Violation::CharacterCount {
                found,
                required: self.rules.required_characters,
            });
        }
    }

    fn check_solo_characters(&self, index: &DeckIndex<'_>, report: &mut Report) {
        let characters: Vec<&CardDefinition> = index.characters().collect();
        let mut reported: FxHashSet<&CardId> = FxHashSet::default();

        for solo in characters.iter().filter(|c| c.solo_exclusive) {
            if !reported.insert(&solo.id) {
                continue;
            }
            let others: Vec<String> = characters
                .iter()
                .filter(|c| c.id != solo.id)
                .map(|c| c.name.clone())
                .collect();
            if !others.is_empty() {
                report.error(Violation::SoloCharacterConflict {
                    name: solo.name.clone(),
                    others,
                });
            }
        }
    }

    fn check_structural_limits(&self, index: &DeckIndex<'_>, report: &mut Report) {
        let missions = index.entry_count(CardType::Mission);
        if missions > self.rules.max_missions {
            report.error(Violation::TooManyMissions {
                found: missions,
                max: self.rules.max_missions,
            });
        }

        let events = index.entry_count(CardType::Event);
        if events > self.rules.max_events {
            report.error(Violation::TooManyEvents {
                found: events,
                max: self.rules.max_events,
            });
        }

        let locations = index.entry_count(CardType::Location);
        if locations > self.rules.max_locations {
            report.error(Violation::TooManyLocations {
                found: locations,
                max: self.rules.max_locations,
            });
        }
    }

    fn check_threat(&self, deck: &Deck, catalog: &CardCatalog, report: &mut Report) -> i64 {
        let total = ThreatCalculator::new(self.rules).total(deck, catalog);
        if total > self.rules.max_total_threat {
            report.error(Violation::ThreatTooHigh {
                total,
                max: self.rules.max_total_threat,
            });
        }
        total
    }

    fn check_draw_pile(&self, index: &DeckIndex<'_>, report: &mut Report) {
        let found = index.draw_pile_size();
        let required = self.rules.required_draw_pile(index.has_events());
        if found < u64::from(required) {
            report.error(Violation::DrawPileTooSmall { found, required });
        }
    }

    fn check_one_per_deck(&self, index: &DeckIndex<'_>, report: &mut Report) {
        let mut seen: FxHashSet<(CardType, &CardId)> = FxHashSet::default();

        for (entry, card) in index.resolved().filter(|(_, card)| card.one_per_deck) {
            if !seen.insert((entry.card_type, &entry.card_id)) {
                continue;
            }
            let count = index.copies(entry.card_type, &entry.card_id);
            if count > u64::from(self.rules.max_one_per_deck_copies) {
                report.error(Violation::OnePerDeckExceeded {
                    card_id: card.id.clone(),
                    name: card.name.clone(),
                    count,
                    max: self.rules.max_one_per_deck_copies,
                });
            }
        }
    }

    fn check_unusable_with(&self, index: &DeckIndex<'_>, report: &mut Report) {
        let characters: Vec<(&str, String)> = index
            .characters()
            .map(|c| (c.name.as_str(), c.name.to_lowercase()))
            .collect();
        let mut seen: FxHashSet<(CardType, &CardId)> = FxHashSet::default();

        for (entry, card) in index.resolved().filter(|(_, card)| !card.unusable_with.is_empty()) {
            if !seen.insert((entry.card_type, &entry.card_id)) {
                continue;
            }
            let banned: Vec<String> = card
                .unusable_with
                .iter()
                .map(|n| n.trim().to_lowercase())
                .collect();
            let matching: Vec<String> = characters
                .iter()
                .filter(|(_, lower)| {
                    banned
                        .iter()
                        .any(|b| !b.is_empty() && lower.contains(b.as_str()))
                })
                .map(|(name, _)| (*name).to_string())
                .collect();

            if !matching.is_empty() {
                report.error(Violation::UnusableWithCharacter {
                    card_id: card.id.clone(),
                    name: card.name.clone(),
                    unusable_with: card.unusable_with.clone(),
                    characters: matching,
                });
            }
        }
    }

    fn check_stat_requirements(&self, index: &DeckIndex<'_>, report: &mut Report) {
        let stats: Vec<Stats> = index.characters().map(|c| c.stats.unwrap_or_default()).collect();
        let mut seen: FxHashSet<(CardType, &CardId)> = FxHashSet::default();

        for (entry, card) in index.resolved().filter(|(e, _)| e.card_type.is_stat_gated()) {
            let Some(requirement) = card.stat_requirement else {
                continue;
            };
            if !seen.insert((entry.card_type, &entry.card_id)) {
                continue;
            }
            if !stats.iter().any(|s| requirement.is_met_by(s)) {
                report.error(Violation::StatRequirementUnmet {
                    card_id: card.id.clone(),
                    name: card.name.clone(),
                    stat: requirement.stat,
                    value: requirement.value,
                });
            }
        }
    }

    fn warn_unknown_cards(&self, index: &DeckIndex<'_>, report: &mut Report) {
        for entry in index.unknown() {
            report.warn(Violation::UnknownCard {
                card_id: entry.card_id.clone(),
                card_type: entry.card_type,
            });
        }
    }

    fn warn_reserve(&self, index: &DeckIndex<'_>, report: &mut Report) {
        if let Some(reserve) = index.deck().reserve() {
            if !index.contains(CardType::Character, reserve) {
                report.warn(Violation::ReserveNotInDeck {
                    card_id: reserve.clone(),
                });
            }
        }
    }
}
