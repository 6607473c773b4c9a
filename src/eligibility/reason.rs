//! Why a card is blocked, and which evaluator said so.

use serde::Serialize;

/// Reason code attached to a blocked card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    None,
    AlreadyInDeck,
    LimitReached,
    OnePerDeck,
    CataclysmConflict,
    AssistConflict,
    AmbushConflict,
    FortificationConflict,
}

/// Identifies an evaluator in the engine's table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EvaluatorKind {
    CharacterLimit,
    MissionLimit,
    LocationLimit,
    Cataclysm,
    Assist,
    Ambush,
    Fortification,
    OnePerDeck,
}

/// One evaluator's decision to block a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Block {
    pub evaluator: EvaluatorKind,
    pub reason: ReasonCode,
    /// Limit that was reached, for count-based evaluators.
    pub limit: Option<usize>,
}

impl Block {
    #[must_use]
    pub const fn new(evaluator: EvaluatorKind, reason: ReasonCode) -> Self {
        Self {
            evaluator,
            reason,
            limit: None,
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Tooltip text shown on the disabled card.
    #[must_use]
    pub fn message(&self) -> String {
        let limit = self.limit.unwrap_or(1);
        match (self.evaluator, self.reason) {
            (EvaluatorKind::CharacterLimit, ReasonCode::AlreadyInDeck) => {
                "This character is already in your deck".to_string()
            }
            (EvaluatorKind::CharacterLimit, ReasonCode::LimitReached) => {
                format!("Character limit reached (max {limit} different characters)")
            }
            (EvaluatorKind::MissionLimit, ReasonCode::AlreadyInDeck) => {
                "This mission is already in your deck".to_string()
            }
            (EvaluatorKind::MissionLimit, ReasonCode::LimitReached) => {
                format!("Mission limit reached (max {limit} mission)")
            }
            (EvaluatorKind::LocationLimit, ReasonCode::AlreadyInDeck) => {
                "This location is already in your deck".to_string()
            }
            (EvaluatorKind::LocationLimit, ReasonCode::LimitReached) => {
                format!("Location limit reached (max {limit} location)")
            }
            (EvaluatorKind::OnePerDeck, _) => "One Per Deck - already in deck".to_string(),
            (kind, ReasonCode::AlreadyInDeck) => format!("{} - already in deck", kind.label()),
            (kind, _) => format!(
                "{} - another {} already selected",
                kind.label(),
                kind.label().to_lowercase()
            ),
        }
    }
}

impl EvaluatorKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            EvaluatorKind::CharacterLimit => "Character",
            EvaluatorKind::MissionLimit => "Mission",
            EvaluatorKind::LocationLimit => "Location",
            EvaluatorKind::Cataclysm => "Cataclysm",
            EvaluatorKind::Assist => "Assist",
            EvaluatorKind::Ambush => "Ambush",
            EvaluatorKind::Fortification => "Fortification",
            EvaluatorKind::OnePerDeck => "One Per Deck",
        }
    }
}

/// An authoritative evaluator's decision for one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Enabled,
    Blocked(Block),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_messages() {
        let block =
            Block::new(EvaluatorKind::CharacterLimit, ReasonCode::LimitReached).with_limit(4);
        assert_eq!(block.message(), "Character limit reached (max 4 different characters)");

        let block = Block::new(EvaluatorKind::CharacterLimit, ReasonCode::AlreadyInDeck);
        assert_eq!(block.message(), "This character is already in your deck");
    }

    #[test]
    fn test_exclusive_messages() {
        let block = Block::new(EvaluatorKind::Cataclysm, ReasonCode::AlreadyInDeck);
        assert_eq!(block.message(), "Cataclysm - already in deck");

        let block = Block::new(EvaluatorKind::Cataclysm, ReasonCode::CataclysmConflict);
        assert_eq!(block.message(), "Cataclysm - another cataclysm already selected");

        let block = Block::new(EvaluatorKind::Fortification, ReasonCode::FortificationConflict);
        assert_eq!(block.message(), "Fortification - another fortification already selected");
    }

    #[test]
    fn test_one_per_deck_message() {
        let block = Block::new(EvaluatorKind::OnePerDeck, ReasonCode::OnePerDeck);
        assert_eq!(block.message(), "One Per Deck - already in deck");
    }
}
