//! Card system: attributes, ratings, definitions, catalog and loader.
//!
//! ## Key Types
//!
//! - `CardRow`: Raw, unvalidated source row
//! - `Card`: Validated card with its rating computed once
//! - `Msrv` / `Lvct`: Categorical attributes with fixed code sets
//! - `RatingTier`: Display tier derived from a rating
//! - `Catalog`: Read-only, ordered card pool

pub mod attributes;
pub mod catalog;
pub mod definition;
pub mod loader;
pub mod rating;

pub use attributes::{Lvct, Msrv};
pub use catalog::{listing_order, Catalog};
pub use definition::{Card, CardRow};
pub use rating::{card_rating, RatingStats, RatingTier, BORDER_COUNT, RATING_SCALE};
