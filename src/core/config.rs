//! Draft configuration.
//!
//! `DraftConfig` fixes the size of a finished draft and the number of cards
//! offered each round. The defaults match the shipped game.

use serde::{Deserialize, Serialize};

/// Number of cards in a finished draft.
pub const DRAFT_SIZE: usize = 5;

/// Number of cards offered per round.
pub const RANDOM_CARDS_COUNT: usize = 7;

/// Draft session configuration.
///
/// ```
/// use souper_draft::core::DraftConfig;
///
/// let config = DraftConfig::new().with_draft_size(3).with_offer_size(4);
/// assert_eq!(config.draft_size, 3);
/// assert_eq!(config.offer_size, 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftConfig {
    /// Cards required to complete a draft.
    pub draft_size: usize,

    /// Cards sampled into each round's offer.
    pub offer_size: usize,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            draft_size: DRAFT_SIZE,
            offer_size: RANDOM_CARDS_COUNT,
        }
    }
}

impl DraftConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the draft size.
    #[must_use]
    pub fn with_draft_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Draft size must be at least 1");
        self.draft_size = size;
        self
    }

    /// Set the offer size.
    #[must_use]
    pub fn with_offer_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Offer size must be at least 1");
        self.offer_size = size;
        self
    }

    /// Smallest catalog that can always fill an offer until the draft is
    /// complete. One card is drafted per round, so the last round excludes
    /// `draft_size - 1` cards.
    #[must_use]
    pub fn min_pool_size(&self) -> usize {
        self.offer_size + self.draft_size - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DraftConfig::default();
        assert_eq!(config.draft_size, 5);
        assert_eq!(config.offer_size, 7);
        assert_eq!(config.min_pool_size(), 11);
    }

    #[test]
    fn test_builder() {
        let config = DraftConfig::new().with_draft_size(2).with_offer_size(3);
        assert_eq!(config, DraftConfig { draft_size: 2, offer_size: 3 });
        assert_eq!(config.min_pool_size(), 4);
    }

    #[test]
    #[should_panic(expected = "Draft size must be at least 1")]
    fn test_zero_draft_size() {
        let _ = DraftConfig::new().with_draft_size(0);
    }

    #[test]
    #[should_panic(expected = "Offer size must be at least 1")]
    fn test_zero_offer_size() {
        let _ = DraftConfig::new().with_offer_size(0);
    }

    #[test]
    fn test_serde() {
        let config = DraftConfig::new().with_draft_size(4);
        let json = serde_json::to_string(&config).unwrap();
        let back: DraftConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
