//! Practice-hand drawing for the deck editor.

pub mod sampler;

pub use sampler::{DrawPile, DrawnCard, Hand, HandSampler};
