//! Card definitions.
//!
//! `CardRow` is the raw, unvalidated input shape (one row of the source
//! table). `Card` is the validated, immutable catalog entry with its rating
//! computed once at construction.

use serde::{Deserialize, Serialize};

use super::attributes::{Lvct, Msrv};
use super::rating::{card_rating, RatingStats, RatingTier};
use crate::core::CardDataError;

/// Raw card data as it appears in the source table.
///
/// Field order matches the delimited-text format: name, year, the eight
/// rating stats, msrv, lvct, prif, title.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardRow {
    pub name: String,
    pub year: String,
    pub invd: f64,
    pub tmwk: f64,
    pub sklp: f64,
    pub preh: f64,
    pub gmit: f64,
    pub surv: f64,
    pub race: f64,
    pub ffa: f64,
    pub msrv: String,
    pub lvct: String,
    pub prif: f64,
    #[serde(default)]
    pub title: String,
}

/// A validated catalog card.
///
/// Serializes as its `CardRow`; deserializing revalidates and recomputes
/// the rating.
///
/// ```
/// use souper_draft::cards::{Card, CardRow, Msrv};
///
/// let row = CardRow {
///     name: "Cesnica".into(), year: "2017".into(),
///     invd: 8.0, tmwk: 7.0, sklp: 6.0, preh: 9.0, gmit: 8.0,
///     surv: 7.0, race: 6.0, ffa: 5.0,
///     msrv: "E1".into(), lvct: "EU".into(), prif: 12.0,
///     title: String::new(),
/// };
/// let card = Card::from_row(row).unwrap();
/// assert_eq!(card.rating(), 70);
/// assert_eq!(card.msrv(), Msrv::E1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "CardRow", try_from = "CardRow")]
pub struct Card {
    name: String,
    year: String,
    stats: RatingStats,
    prif: f64,
    msrv: Msrv,
    lvct: Lvct,
    title: String,
    rating: i32,
}

impl Card {
    /// Validate a raw row and compute its rating.
    pub fn from_row(row: CardRow) -> Result<Self, CardDataError> {
        let numbers = [
            ("invd", row.invd),
            ("tmwk", row.tmwk),
            ("sklp", row.sklp),
            ("preh", row.preh),
            ("gmit", row.gmit),
            ("surv", row.surv),
            ("race", row.race),
            ("ffa", row.ffa),
            ("prif", row.prif),
        ];
        if let Some(&(field, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CardDataError::NonFiniteNumber { field, value });
        }

        let msrv = row.msrv.parse::<Msrv>()?;
        let lvct = row.lvct.parse::<Lvct>()?;

        let stats = RatingStats {
            invd: row.invd,
            tmwk: row.tmwk,
            sklp: row.sklp,
            preh: row.preh,
            gmit: row.gmit,
            surv: row.surv,
            race: row.race,
            ffa: row.ffa,
        };

        Ok(Self {
            rating: card_rating(&stats),
            name: row.name,
            year: row.year,
            stats,
            prif: row.prif,
            msrv,
            lvct,
            title: row.title,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Individual rating, fixed at construction.
    #[must_use]
    pub fn rating(&self) -> i32 {
        self.rating
    }

    #[must_use]
    pub fn tier(&self) -> RatingTier {
        RatingTier::from_rating(self.rating)
    }

    /// The raw stats the rating was computed from.
    #[must_use]
    pub fn stats(&self) -> &RatingStats {
        &self.stats
    }

    /// Personality influence.
    #[must_use]
    pub fn prif(&self) -> f64 {
        self.prif
    }

    #[must_use]
    pub fn msrv(&self) -> Msrv {
        self.msrv
    }

    #[must_use]
    pub fn lvct(&self) -> Lvct {
        self.lvct
    }

    /// `invd + tmwk`: the listing tie-breaker and the chemistry
    /// similarity value.
    #[must_use]
    pub fn invd_tmwk(&self) -> f64 {
        self.stats.invd + self.stats.tmwk
    }
}

impl TryFrom<CardRow> for Card {
    type Error = CardDataError;

    fn try_from(row: CardRow) -> Result<Self, Self::Error> {
        Card::from_row(row)
    }
}

impl From<Card> for CardRow {
    fn from(card: Card) -> Self {
        let s = card.stats;
        CardRow {
            name: card.name,
            year: card.year,
            invd: s.invd,
            tmwk: s.tmwk,
            sklp: s.sklp,
            preh: s.preh,
            gmit: s.gmit,
            surv: s.surv,
            race: s.race,
            ffa: s.ffa,
            msrv: card.msrv.code().to_string(),
            lvct: card.lvct.code().to_string(),
            prif: card.prif,
            title: card.title,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) [{}]", self.name, self.year, self.rating)
    }
}
