//! Individual card rating and rating tiers.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Scale applied to the weighted stat sum so ratings land roughly in 0..100.
pub const RATING_SCALE: f64 = 12.54298642534;

/// Number of card border images the tiers map onto.
pub const BORDER_COUNT: usize = 6;

/// Stats that feed the individual rating.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RatingStats {
    pub invd: f64,
    pub tmwk: f64,
    pub sklp: f64,
    pub preh: f64,
    pub gmit: f64,
    pub surv: f64,
    pub race: f64,
    pub ffa: f64,
}

/// Compute a card's rating from its raw stats.
///
/// Only the final product is floored.
///
/// ```
/// use souper_draft::cards::{card_rating, RatingStats};
///
/// let stats = RatingStats {
///     invd: 8.0, tmwk: 7.0, sklp: 6.0,
///     preh: 9.0, gmit: 8.0,
///     surv: 7.0, race: 6.0, ffa: 5.0,
/// };
/// assert_eq!(card_rating(&stats), 70);
/// ```
#[must_use]
pub fn card_rating(s: &RatingStats) -> i32 {
    let teamwork = (s.invd + s.tmwk + s.sklp) / 8.0;
    let hybrid = (s.preh + s.gmit) / 10.0;
    let survival = (s.surv + s.race + s.ffa) / 14.0;
    ((teamwork + (hybrid + survival)) * RATING_SCALE).floor() as i32
}

/// Display tier of a rating, used to pick the card border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingTier {
    /// Below 60.
    Common,
    /// 60..70
    Bronze,
    /// 70..80
    Silver,
    /// 80..90
    Gold,
    /// 90 and above.
    Elite,
}

impl RatingTier {
    #[must_use]
    pub fn from_rating(rating: i32) -> Self {
        match rating {
            r if r >= 90 => Self::Elite,
            r if r >= 80 => Self::Gold,
            r if r >= 70 => Self::Silver,
            r if r >= 60 => Self::Bronze,
            _ => Self::Common,
        }
    }

    /// Border image index for this tier.
    ///
    /// Elite cards draw from `4..BORDER_COUNT - 1`; the last border is
    /// never drawn.
    pub fn border_index(self, rng: &mut impl Rng) -> usize {
        match self {
            Self::Common => 0,
            Self::Bronze => 1,
            Self::Silver => 2,
            Self::Gold => 3,
            Self::Elite => rng.gen_range(4..BORDER_COUNT - 1),
        }
    }
}
