//! Draft-level scoring: total rating and chemistry.
//!
//! Both scores are pure functions of the drafted cards so they can be
//! tested without a session.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Lvct, Msrv};

/// Divisor applied to the chemistry product.
pub const CHEMISTRY_DIVISOR: f64 = 7.5;

/// Personality influence totals below this are raised to it.
pub const PRIF_FLOOR: f64 = 10.0;

/// Personality influence totals above this are mirrored around it.
pub const PRIF_IDEAL: f64 = 30.0;

/// Two `invd + tmwk` values at most this far apart form a similarity link.
pub const SIMILARITY_TOLERANCE: f64 = 1.0;

/// Overall draft rating.
///
/// The mean rating plus, spread over the draft, how far each above-average
/// card exceeds the mean. Returns 0 for an empty draft.
///
/// ```
/// use souper_draft::draft::total_rating;
///
/// assert_eq!(total_rating(&[]), 0);
/// assert_eq!(total_rating(&[70, 70, 70]), 70);
/// // avg 60, correction 30 -> (180 + 30) / 3
/// assert_eq!(total_rating(&[90, 50, 40]), 70);
/// ```
#[must_use]
pub fn total_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }

    let count = ratings.len() as f64;
    let sum: f64 = ratings.iter().map(|&r| f64::from(r)).sum();
    let average = sum / count;

    let correction: f64 = ratings
        .iter()
        .map(|&r| f64::from(r))
        .filter(|&r| r > average)
        .map(|r| r - average)
        .sum();

    ((sum + correction) / count).floor() as i32
}

/// Intermediate values of a chemistry calculation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChemistryBreakdown {
    /// Cards per server, in `Msrv::ALL` order.
    pub msrv_counts: [usize; 4],
    /// Cards per continent, in `Lvct::ALL` order.
    pub lvct_counts: [usize; 5],
    /// Similarity links found between drafted cards.
    pub similarity_points: usize,
    /// Links left over after redistribution.
    pub unspent_points: usize,
    /// Largest continent bucket after redistribution.
    pub main_lvct: usize,
    /// Largest server bucket after redistribution.
    pub main_msrv: usize,
    /// Personality influence after the floor/mirror adjustment.
    pub total_prif: f64,
    /// Final chemistry score.
    pub score: i32,
}

/// Chemistry score of a draft. See [`chemistry_breakdown`].
#[must_use]
pub fn chemistry<'a>(cards: impl IntoIterator<Item = &'a Card>, draft_size: usize) -> i32 {
    chemistry_breakdown(cards, draft_size).score
}

/// Compute chemistry and keep every intermediate value.
///
/// 1. Count cards per server and per continent.
/// 2. Sum personality influence; below 10 becomes 10, above 30 becomes
///    `60 - total` (so totals above 60 go negative).
/// 3. Count pairs of cards whose non-zero `invd + tmwk` values are within 1.
/// 4. Take the largest continent and server buckets.
/// 5. Spend similarity points to fill the continent bucket up to
///    `draft_size`, then the server bucket. A bucket is only raised when
///    the remaining points cover its whole deficit.
/// 6. `floor(main_lvct * main_msrv * total_prif / 7.5)`.
#[must_use]
pub fn chemistry_breakdown<'a>(
    cards: impl IntoIterator<Item = &'a Card>,
    draft_size: usize,
) -> ChemistryBreakdown {
    let mut msrv_counts = [0usize; Msrv::ALL.len()];
    let mut lvct_counts = [0usize; Lvct::ALL.len()];
    let mut total_prif = 0.0;
    let mut similarity = Vec::new();

    for card in cards {
        msrv_counts[card.msrv().index()] += 1;
        lvct_counts[card.lvct().index()] += 1;
        total_prif += card.prif();
        similarity.push(card.invd_tmwk());
    }

    let similarity_points = similarity_links(&similarity);

    // Ties between buckets share the same count, so the value is all we need.
    let mut main_lvct = lvct_counts.iter().copied().max().unwrap_or(0);
    let mut main_msrv = msrv_counts.iter().copied().max().unwrap_or(0);

    if total_prif < PRIF_FLOOR {
        total_prif = PRIF_FLOOR;
    } else if total_prif > PRIF_IDEAL {
        total_prif = 2.0 * PRIF_IDEAL - total_prif;
    }

    let mut points = similarity_points;
    for main in [&mut main_lvct, &mut main_msrv] {
        if *main != draft_size && points != 0 {
            let deficit = draft_size.saturating_sub(*main);
            if points >= deficit {
                *main += deficit;
                points -= deficit;
            }
        }
    }

    let score = ((main_lvct * main_msrv) as f64 * total_prif / CHEMISTRY_DIVISOR).floor() as i32;

    ChemistryBreakdown {
        msrv_counts,
        lvct_counts,
        similarity_points,
        unspent_points: points,
        main_lvct,
        main_msrv,
        total_prif,
        score,
    }
}

/// Count unordered pairs of non-zero values within `SIMILARITY_TOLERANCE`.
fn similarity_links(values: &[f64]) -> usize {
    let mut links = 0;
    for (i, &a) in values.iter().enumerate() {
        for &b in &values[i + 1..] {
            if a != 0.0 && b != 0.0 && (a - b).abs() <= SIMILARITY_TOLERANCE {
                links += 1;
            }
        }
    }
    links
}
