//! Error types.
//!
//! Card data problems are reported as `CardDataError` by the row-level
//! constructors and wrapped with the row index by catalog builders.

use thiserror::Error;

use super::phase::DraftPhase;

/// A single card row could not be turned into a `Card`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CardDataError {
    /// A numeric field did not parse.
    #[error("field `{field}` is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// A numeric field parsed but is NaN or infinite.
    #[error("field `{field}` must be finite (got {value})")]
    NonFiniteNumber { field: &'static str, value: f64 },

    /// A categorical field held a code outside its fixed set.
    #[error("field `{field}` has unknown code {value:?}")]
    UnknownCategory { field: &'static str, value: String },

    /// A delimited row had the wrong number of fields.
    #[error("expected 13 or 14 fields, found {found}")]
    FieldCount { found: usize },

    /// The `(name, year)` pair already exists in the catalog.
    #[error("duplicate card {name} ({year})")]
    DuplicateCard { name: String, year: String },
}

/// Errors raised by catalog building and draft sessions.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DraftError {
    /// A source row was rejected; the whole build is aborted.
    #[error("invalid card data in row {row}: {source}")]
    InvalidCardData {
        row: usize,
        #[source]
        source: CardDataError,
    },

    /// Not enough undrafted cards remain to fill an offer.
    #[error("card pool too small: need {required} eligible cards, have {available}")]
    InsufficientPool { required: usize, available: usize },

    /// An operation was called in a phase that does not allow it.
    #[error("cannot {action} while {phase}")]
    InvalidStateTransition {
        action: &'static str,
        phase: DraftPhase,
    },

    /// The card passed to `select` is not the one in the given offer slot.
    #[error("card {name} is not offered in slot {slot}")]
    CardNotOffered { name: String, slot: usize },

    /// An offer slot index past the end of the current offer.
    #[error("offer slot {slot} out of range (offer has {offer_len} cards)")]
    SlotOutOfRange { slot: usize, offer_len: usize },
}

impl DraftError {
    pub(crate) fn transition(action: &'static str, phase: DraftPhase) -> Self {
        Self::InvalidStateTransition { action, phase }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = DraftError::InvalidCardData {
            row: 3,
            source: CardDataError::UnknownCategory {
                field: "msrv",
                value: "XX".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "invalid card data in row 3: field `msrv` has unknown code \"XX\""
        );

        let err = DraftError::transition("confirm a selection", DraftPhase::AwaitingSelection);
        assert_eq!(
            err.to_string(),
            "cannot confirm a selection while awaiting selection"
        );
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let err = DraftError::InvalidCardData {
            row: 0,
            source: CardDataError::FieldCount { found: 2 },
        };
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("expected 13 or 14 fields, found 2"));
    }
}
