//! Deck legality rules.
//!
//! - `ThreatCalculator`: character + location threat with reserve overrides
//! - `LegalityValidator`: full-deck validation into a `Report`
//! - `DeckSummary`: headline numbers for the deck header
//!
//! Nothing here mutates its inputs or fails; illegal decks produce
//! `Violation`s, not errors.

pub mod legality;
pub mod report;
pub mod summary;
pub mod threat;

pub use legality::LegalityValidator;
pub use report::{LegalityStatus, Report, Violation};
pub use summary::{DeckSummary, IconTotals};
pub use threat::ThreatCalculator;
