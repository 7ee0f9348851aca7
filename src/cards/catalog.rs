//! Card catalog.
//!
//! The `Catalog` is built once from raw rows and is read-only afterwards.
//! Cards are handed out as `Arc<Card>` so draft sessions can hold them
//! without copying.

use std::cmp::Ordering;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{Card, CardRow};
use crate::core::{CardDataError, DraftError};

/// Ordered, immutable collection of cards.
///
/// ## Example
///
/// ```
/// use souper_draft::cards::{Catalog, CardRow};
///
/// let row = |name: &str, invd: f64| CardRow {
///     name: name.into(), year: "2017".into(),
///     invd, tmwk: 5.0, sklp: 5.0, preh: 5.0, gmit: 5.0,
///     surv: 5.0, race: 5.0, ffa: 5.0,
///     msrv: "E1".into(), lvct: "EU".into(), prif: 5.0,
///     title: String::new(),
/// };
///
/// let catalog = Catalog::build(vec![row("Low", 1.0), row("High", 9.0)]).unwrap();
/// let listing = catalog.sorted_listing();
/// let names: Vec<_> = listing.iter().map(|c| c.name()).collect();
/// assert_eq!(names, vec!["High", "Low"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Arc<Card>>,
    /// (name, year) -> position in `cards`
    index: FxHashMap<(String, String), usize>,
}

impl Catalog {
    /// Build a catalog from raw rows.
    ///
    /// Fails on the first invalid or duplicate row; no partial catalog is
    /// produced.
    pub fn build(rows: impl IntoIterator<Item = CardRow>) -> Result<Self, DraftError> {
        let mut catalog = Self::default();

        for (row, raw) in rows.into_iter().enumerate() {
            let card = Card::from_row(raw).map_err(|source| DraftError::InvalidCardData { row, source })?;

            let key = (card.name().to_string(), card.year().to_string());
            if catalog.index.contains_key(&key) {
                let (name, year) = key;
                return Err(DraftError::InvalidCardData {
                    row,
                    source: CardDataError::DuplicateCard { name, year },
                });
            }

            catalog.index.insert(key, catalog.cards.len());
            catalog.cards.push(Arc::new(card));
        }

        log::info!("built card catalog with {} cards", catalog.cards.len());
        Ok(catalog)
    }

    /// All cards in load order.
    #[must_use]
    pub fn cards(&self) -> &[Arc<Card>] {
        &self.cards
    }

    /// Look up a card by its (name, year) key.
    #[must_use]
    pub fn get(&self, name: &str, year: &str) -> Option<&Arc<Card>> {
        self.index
            .get(&(name.to_string(), year.to_string()))
            .map(|&i| &self.cards[i])
    }

    /// Check if a (name, year) key is present.
    #[must_use]
    pub fn contains(&self, name: &str, year: &str) -> bool {
        self.get(name, year).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.iter()
    }

    /// Cards ordered for the leaderboard listing.
    ///
    /// See [`listing_order`].
    #[must_use]
    pub fn sorted_listing(&self) -> Vec<Arc<Card>> {
        let mut listing = self.cards.clone();
        listing.sort_by(|a, b| listing_order(a, b));
        listing
    }
}

/// Listing order: rating descending, then `invd + tmwk` descending.
///
/// Cards equal on both keys compare `Equal`, so a stable sort keeps their
/// load order.
#[must_use]
pub fn listing_order(a: &Card, b: &Card) -> Ordering {
    b.rating()
        .cmp(&a.rating())
        .then_with(|| b.invd_tmwk().total_cmp(&a.invd_tmwk()))
}
