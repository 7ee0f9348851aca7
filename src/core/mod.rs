//! Core engine types: configuration, phases, errors, RNG.
//!
//! Everything here is independent of card data; `cards` and `draft`
//! build on top of it.

pub mod config;
pub mod error;
pub mod phase;
pub mod rng;

pub use config::{DraftConfig, DRAFT_SIZE, RANDOM_CARDS_COUNT};
pub use error::{CardDataError, DraftError};
pub use phase::DraftPhase;
pub use rng::{DraftRng, DraftRngState};
