//! Construction-time errors.
//!
//! The legality, eligibility, threat and hand computations never fail;
//! these errors only come from building their inputs.

use thiserror::Error;

use crate::cards::CardId;

/// Failure building a `CardCatalog`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("card {0} is already registered")]
    DuplicateId(CardId),
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure building a `DeckRules` configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid rules document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid rules: {0}")]
    Invalid(String),
}
