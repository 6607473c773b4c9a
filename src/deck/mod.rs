//! Deck composition and its per-call index.
//!
//! ## Key Types
//!
//! - `DeckEntry`: Catalog reference, denormalized type, copy count
//! - `Deck`: Ordered entries plus the optional reserve character
//! - `DeckIndex`: Counts and catalog resolutions shared within one computation

pub mod composition;
pub mod entry;
pub mod index;

pub use composition::Deck;
pub use entry::DeckEntry;
pub use index::DeckIndex;
