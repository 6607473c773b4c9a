//! # deck-rules
//!
//! Deck legality and card eligibility for a constructible card game editor.
//!
//! ## Design Principles
//!
//! 1. **Pure Computations**: Every operation takes the deck and catalog
//!    snapshot as arguments and returns a fresh value. Nothing is cached
//!    between calls and no input is mutated.
//!
//! 2. **Violations Are Data**: An illegal deck yields a `Report` of
//!    `Violation`s. Only construction-time input (catalog JSON, rules JSON)
//!    can fail with an error.
//!
//! 3. **Configuration Over Constants**: Limits, threat caps, hand sizes and
//!    reserve overrides live in `DeckRules`.
//!
//! ## Architecture
//!
//! - **Shared Index**: A `DeckIndex` resolves the deck against the catalog
//!   once per computation, so every rule and evaluator counts the same way.
//!   Unknown card ids are skipped, never fatal.
//!
//! - **Merged Evaluators**: Card eligibility is the OR of independent
//!   type-scoped evaluators' blocks. One evaluator cannot re-enable a card
//!   another has blocked.
//!
//! - **Bounded Sampling**: Hand draws use rejection sampling with fixed
//!   attempt ceilings over a seedable `DeckRng`.
//!
//! ## Modules
//!
//! - `cards`: Card ids, types, definitions, catalog
//! - `deck`: Deck entries, composition, per-call index
//! - `core`: Rules configuration and RNG
//! - `rules`: Threat, legality validation, reports, deck summary
//! - `eligibility`: Constraint evaluators and their merge
//! - `hand`: Practice-hand sampling
//! - `error`: Construction-time errors

pub mod cards;
pub mod core;
pub mod deck;
pub mod eligibility;
pub mod error;
pub mod hand;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{DeckRng, DeckRngState, DeckRules};

pub use crate::cards::{
    CardCatalog, CardDefinition, CardId, CardType, StatKind, StatRequirement, Stats,
};

pub use crate::deck::{Deck, DeckEntry, DeckIndex};

pub use crate::rules::{
    DeckSummary, IconTotals, LegalityStatus, LegalityValidator, Report, ThreatCalculator, Violation,
};

pub use crate::eligibility::{
    Block, CardPresentation, ConstraintEvaluator, Eligibility, EligibilityEngine, EligibilityResult,
    EvaluatorKind, ReasonCode, Verdict,
};

pub use crate::hand::{DrawPile, DrawnCard, Hand, HandSampler};

pub use crate::error::{CatalogError, ConfigError};
