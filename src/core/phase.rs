//! Draft session phases.

use serde::{Deserialize, Serialize};

/// Where a draft session is in its lifecycle.
///
/// `Idle` → `AwaitingSelection` ⇄ `CardHeld` → … → `DraftComplete` → `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftPhase {
    /// No draft in progress; no offer on the table.
    Idle,
    /// An offer is shown and nothing is held.
    AwaitingSelection,
    /// A card from the offer is tentatively held.
    CardHeld,
    /// The draft reached its configured size; scores are final.
    DraftComplete,
}

impl std::fmt::Display for DraftPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::AwaitingSelection => "awaiting selection",
            Self::CardHeld => "card held",
            Self::DraftComplete => "draft complete",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(DraftPhase::Idle.to_string(), "idle");
        assert_eq!(DraftPhase::CardHeld.to_string(), "card held");
    }
}
