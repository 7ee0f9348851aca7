//! # souper-draft
//!
//! Scoring engine for a single-player card drafting game.
//!
//! A player is shown a random offer of cards, holds one, confirms it into
//! their draft, and repeats until the draft is full. The finished draft is
//! scored for overall rating and chemistry.
//!
//! ## Design Principles
//!
//! 1. **Validated at the edge**: malformed rows and unknown category codes
//!    are rejected when the catalog is built, so scoring never fails.
//!
//! 2. **Explicit state machine**: `DraftSession` moves between the phases in
//!    `DraftPhase`; out-of-order calls return `InvalidStateTransition`.
//!
//! 3. **Injectable randomness**: every random draw takes `&mut impl Rng`.
//!    `DraftRng` gives seeded, reproducible offers.
//!
//! ## Modules
//!
//! - `core`: Configuration, phases, errors, RNG
//! - `cards`: Card attributes, ratings, catalog, delimited-text loader
//! - `draft`: Draft sessions and draft-level scoring
//!
//! The engine performs no I/O and installs no logger; it reports through
//! the `log` facade.

pub mod cards;
pub mod core;
pub mod draft;

// Re-export commonly used types
pub use crate::core::{
    CardDataError, DraftConfig, DraftError, DraftPhase, DraftRng, DraftRngState, DRAFT_SIZE,
    RANDOM_CARDS_COUNT,
};

pub use crate::cards::{card_rating, listing_order, Card, CardRow, Catalog, Lvct, Msrv, RatingTier};

pub use crate::draft::{
    chemistry, chemistry_breakdown, total_rating, ChemistryBreakdown, DraftSession, PickOutcome,
    Selection,
};
