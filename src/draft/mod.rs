//! Draft sessions and draft-level scoring.
//!
//! - `DraftSession`: offer / select / confirm state machine
//! - `total_rating`, `chemistry`: pure scoring functions over drafted cards

pub mod scoring;
pub mod session;

pub use scoring::{chemistry, chemistry_breakdown, total_rating, ChemistryBreakdown};
pub use session::{DraftSession, PickOutcome, Selection};
