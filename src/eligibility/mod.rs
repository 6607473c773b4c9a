//! Card eligibility for the deck editor's palette.
//!
//! Each [`ConstraintEvaluator`] is a pure function of the deck snapshot,
//! authoritative for a fixed set of card types. The [`EligibilityEngine`]
//! runs all of them and merges the blocks; [`CardPresentation`] turns the
//! merged result into visual attributes.

pub mod engine;
pub mod evaluator;
pub mod exclusive;
pub mod limits;
pub mod one_per_deck;
pub mod presentation;
pub mod reason;

pub use engine::{Eligibility, EligibilityEngine, EligibilityResult};
pub use evaluator::ConstraintEvaluator;
pub use exclusive::{ExclusiveFlagEvaluator, ExclusiveGroup};
pub use limits::LimitEvaluator;
pub use one_per_deck::OnePerDeckEvaluator;
pub use presentation::CardPresentation;
pub use reason::{Block, EvaluatorKind, ReasonCode, Verdict};
