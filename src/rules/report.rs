//! Legality report: errors, warnings and the badge status.
//!
//! Rule violations are data, not failures. Each `Violation` renders its own
//! message through `Display`; `Report` groups them into errors (which make a
//! deck illegal) and warnings (which do not).

use serde::Serialize;
use thiserror::Error;

use crate::cards::{CardId, CardType, StatKind};

/// A single broken or questionable deck-building rule.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
pub enum Violation {
    #[error("Deck must have exactly {required} characters ({found}/{required})")]
    CharacterCount { found: usize, required: usize },

    #[error("{name} cannot be used with other characters ({})", .others.join(", "))]
    SoloCharacterConflict { name: String, others: Vec<String> },

    #[error("Deck can have at most {max} mission ({found} missions)")]
    TooManyMissions { found: usize, max: usize },

    #[error("Deck can have at most {max} event ({found} events)")]
    TooManyEvents { found: usize, max: usize },

    #[error("Deck can have at most {max} location ({found} locations)")]
    TooManyLocations { found: usize, max: usize },

    #[error("Total threat level must be ≤ {max} (current: {total})")]
    ThreatTooHigh { total: i64, max: i64 },

    #[error("Deck must have at least {required} cards in draw pile ({found}/{required})")]
    DrawPileTooSmall { found: u64, required: u32 },

    #[error("\"{name}\" can only have {max} copy in deck ({count} copies)")]
    OnePerDeckExceeded {
        card_id: CardId,
        name: String,
        count: u64,
        max: u32,
    },

    #[error("\"{name}\" cannot be used with {}", .unusable_with.join(", "))]
    UnusableWithCharacter {
        card_id: CardId,
        name: String,
        unusable_with: Vec<String>,
        characters: Vec<String>,
    },

    #[error("\"{name}\" requires a character with {value}+ {stat}")]
    StatRequirementUnmet {
        card_id: CardId,
        name: String,
        stat: StatKind,
        value: i64,
    },

    #[error("{card_type} card {card_id} is not in the card catalog")]
    UnknownCard { card_id: CardId, card_type: CardType },

    #[error("Reserve {card_id} is not a character in this deck")]
    ReserveNotInDeck { card_id: CardId },
}

impl Violation {
    /// Stable machine-readable rule name.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        match self {
            Violation::CharacterCount { .. } => "character_count",
            Violation::SoloCharacterConflict { .. } => "solo_character",
            Violation::TooManyMissions { .. } => "mission_count",
            Violation::TooManyEvents { .. } => "event_count",
            Violation::TooManyLocations { .. } => "location_count",
            Violation::ThreatTooHigh { .. } => "threat_level",
            Violation::DrawPileTooSmall { .. } => "deck_size",
            Violation::OnePerDeckExceeded { .. } => "one_per_deck",
            Violation::UnusableWithCharacter { .. } => "unusable_with",
            Violation::StatRequirementUnmet { .. } => "stat_requirement",
            Violation::UnknownCard { .. } => "unknown_card",
            Violation::ReserveNotInDeck { .. } => "reserve_character",
        }
    }
}

/// Badge shown next to the deck title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LegalityStatus {
    Legal,
    NotLegal,
    HasWarnings,
}

impl LegalityStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            LegalityStatus::Legal => "Legal",
            LegalityStatus::NotLegal => "Not Legal",
            LegalityStatus::HasWarnings => "Has Warnings",
        }
    }
}

impl std::fmt::Display for LegalityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of validating a deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub errors: Vec<Violation>,
    pub warnings: Vec<Violation>,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A deck is legal exactly when it has no errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&mut self, violation: Violation) {
        self.errors.push(violation);
    }

    pub fn warn(&mut self, violation: Violation) {
        self.warnings.push(violation);
    }

    /// Does any error carry this rule name?
    #[must_use]
    pub fn has_error(&self, rule: &str) -> bool {
        self.errors.iter().any(|v| v.rule() == rule)
    }

    /// Does any warning carry this rule name?
    #[must_use]
    pub fn has_warning(&self, rule: &str) -> bool {
        self.warnings.iter().any(|v| v.rule() == rule)
    }

    #[must_use]
    pub fn status(&self) -> LegalityStatus {
        if !self.errors.is_empty() {
            LegalityStatus::NotLegal
        } else if !self.warnings.is_empty() {
            LegalityStatus::HasWarnings
        } else {
            LegalityStatus::Legal
        }
    }

    /// Error messages, in rule order.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Warning messages, in discovery order.
    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Badge tooltip: errors if any, otherwise warnings, one per line.
    #[must_use]
    pub fn tooltip(&self) -> String {
        let shown = if self.errors.is_empty() {
            &self.warnings
        } else {
            &self.errors
        };
        shown
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
