//! Card catalog: definitions and lookup.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for catalog cards
//! - `CardType`: The twelve catalog types
//! - `CardDefinition`: Static card data (threat, flags, stat gates)
//! - `CardCatalog`: Read-only lookup by `CardId`

pub mod definition;
pub mod registry;

pub use definition::{CardDefinition, CardId, CardType, StatKind, StatRequirement, Stats};
pub use registry::CardCatalog;
