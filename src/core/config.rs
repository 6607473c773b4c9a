//! Deck-building rule configuration.
//!
//! `DeckRules` holds every numeric limit the validator, eligibility engine
//! and hand sampler consult, plus the reserve-character threat table.
//! Defaults match the constructed format; callers override single limits
//! with the `with_*` builders or load a whole document with `from_json`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Numeric deck-building limits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckRules {
    /// Exact number of characters a legal deck holds.
    pub required_characters: usize,

    /// Mission entries allowed.
    pub max_missions: usize,

    /// Event entries allowed.
    pub max_events: usize,

    /// Location entries allowed.
    pub max_locations: usize,

    /// Highest legal total threat.
    pub max_total_threat: i64,

    /// Minimum draw pile with no events.
    pub min_draw_pile: u32,

    /// Minimum draw pile once any event is present.
    pub min_draw_pile_with_events: u32,

    /// Copies allowed of a one-per-deck card.
    pub max_one_per_deck_copies: u32,

    /// Cards in a practice hand before the event bonus.
    pub base_hand_size: usize,

    /// Hard cap on a practice hand.
    pub max_hand_size: usize,

    /// Attempt ceiling for the base draw, as a multiple of the pile size.
    pub draw_attempt_factor: usize,

    /// Attempt ceiling for the event bonus draw, as a multiple of the pile size.
    pub bonus_draw_attempt_factor: usize,

    /// Character name -> threat used when that character is the reserve.
    pub reserve_overrides: FxHashMap<String, i64>,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            required_characters: 4,
            max_missions: 1,
            max_events: 1,
            max_locations: 1,
            max_total_threat: 76,
            min_draw_pile: 51,
            min_draw_pile_with_events: 56,
            max_one_per_deck_copies: 1,
            base_hand_size: 8,
            max_hand_size: 9,
            draw_attempt_factor: 10,
            bonus_draw_attempt_factor: 2,
            reserve_overrides: FxHashMap::default(),
        }
    }
}

impl DeckRules {
    /// Standard constructed-format rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and validate a rules document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check the limits are mutually consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_hand_size == 0 {
            return Err(ConfigError::Invalid("base hand size must be positive".into()));
        }
        if self.base_hand_size > self.max_hand_size {
            return Err(ConfigError::Invalid(format!(
                "base hand size {} exceeds max hand size {}",
                self.base_hand_size, self.max_hand_size
            )));
        }
        if self.min_draw_pile_with_events < self.min_draw_pile {
            return Err(ConfigError::Invalid(format!(
                "draw pile minimum with events ({}) is below the plain minimum ({})",
                self.min_draw_pile_with_events, self.min_draw_pile
            )));
        }
        if self.draw_attempt_factor == 0 || self.bonus_draw_attempt_factor == 0 {
            return Err(ConfigError::Invalid("attempt factors must be positive".into()));
        }
        Ok(())
    }

    /// Register a reserve threat override for a character name.
    #[must_use]
    pub fn with_reserve_override(mut self, character_name: impl Into<String>, threat: i64) -> Self {
        self.reserve_overrides.insert(character_name.into(), threat);
        self
    }

    #[must_use]
    pub fn with_max_total_threat(mut self, threat: i64) -> Self {
        self.max_total_threat = threat;
        self
    }

    #[must_use]
    pub fn with_required_characters(mut self, count: usize) -> Self {
        self.required_characters = count;
        self
    }

    #[must_use]
    pub fn with_draw_pile_minimums(mut self, plain: u32, with_events: u32) -> Self {
        self.min_draw_pile = plain;
        self.min_draw_pile_with_events = with_events;
        self
    }

    #[must_use]
    pub fn with_hand_sizes(mut self, base: usize, max: usize) -> Self {
        self.base_hand_size = base;
        self.max_hand_size = max;
        self
    }

    /// Threat override for a character name when it is the reserve.
    #[must_use]
    pub fn reserve_override(&self, character_name: &str) -> Option<i64> {
        self.reserve_overrides.get(character_name).copied()
    }

    /// Required draw pile for a deck with or without events.
    #[must_use]
    pub fn required_draw_pile(&self, has_events: bool) -> u32 {
        if has_events {
            self.min_draw_pile_with_events
        } else {
            self.min_draw_pile
        }
    }
}
