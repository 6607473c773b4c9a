//! Shared infrastructure: rule configuration and the sampling RNG.
//!
//! Nothing in here knows about specific cards; the rules, eligibility and
//! hand modules read their limits from `DeckRules` and their randomness
//! from `DeckRng`.

pub mod config;
pub mod rng;

pub use config::DeckRules;
pub use rng::{DeckRng, DeckRngState};
