//! Draft session state machine.
//!
//! A `DraftSession` owns one play-through: the cards drafted so far, the
//! current offer and the held selection. Cards themselves are shared with
//! the `Catalog` through `Arc`.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle --start_round--> AwaitingSelection --select--> CardHeld --+
//!   ^                     |      ^                       |  ^    | select
//!   |                     +------+ start_round           |  +----+ (switch)
//!   |                            ^                       |
//!   |                            +---confirm_selection---+
//!   |                                                    |
//!   +----end_draft---- DraftComplete <--confirm_selection-+ (draft full)
//! ```
//!
//! ## Example
//!
//! ```
//! use souper_draft::cards::loader;
//! use souper_draft::core::{DraftPhase, DraftRng};
//! use souper_draft::draft::DraftSession;
//!
//! let text: String = (0..12)
//!     .map(|i| format!("Card{i},2017,{i},5,5,5,5,5,5,5,E1,EU,4\n"))
//!     .collect();
//! let catalog = loader::parse_catalog(&text).unwrap();
//! let mut rng = DraftRng::new(42);
//! let mut session = DraftSession::new();
//!
//! while !session.finished_draft() {
//!     session.start_round(&catalog, &mut rng).unwrap();
//!     session.pick(0).unwrap(); // hold
//!     session.pick(0).unwrap(); // confirm
//! }
//!
//! assert_eq!(session.phase(), DraftPhase::DraftComplete);
//! assert_eq!(session.current_draft().len(), 5);
//! assert_eq!(session.total_chemistry(), 66);
//! ```

use std::sync::Arc;

use rand::Rng;
use smallvec::SmallVec;

use super::scoring::{self, ChemistryBreakdown};
use crate::cards::{Card, Catalog};
use crate::core::{DraftConfig, DraftError, DraftPhase, DRAFT_SIZE, RANDOM_CARDS_COUNT};

/// A card taken from the offer but not yet drafted.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// The held card.
    pub card: Arc<Card>,
    /// Offer slot it was taken from.
    pub slot: usize,
}

/// Result of [`DraftSession::pick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    /// The slot's card is now held.
    Held,
    /// The held card was drafted; carries the phase entered.
    Drafted(DraftPhase),
}

#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Idle,
    AwaitingSelection,
    CardHeld(Selection),
    DraftComplete,
}

/// One player's draft in progress.
#[derive(Clone, Debug)]
pub struct DraftSession {
    config: DraftConfig,
    draft: SmallVec<[Arc<Card>; DRAFT_SIZE]>,
    offer: SmallVec<[Arc<Card>; RANDOM_CARDS_COUNT]>,
    phase: Phase,
}

impl Default for DraftSession {
    fn default() -> Self {
        Self::with_config(DraftConfig::default())
    }
}

impl DraftSession {
    /// Create an idle session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an idle session.
    #[must_use]
    pub fn with_config(config: DraftConfig) -> Self {
        Self {
            config,
            draft: SmallVec::new(),
            offer: SmallVec::new(),
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> DraftPhase {
        match self.phase {
            Phase::Idle => DraftPhase::Idle,
            Phase::AwaitingSelection => DraftPhase::AwaitingSelection,
            Phase::CardHeld(_) => DraftPhase::CardHeld,
            Phase::DraftComplete => DraftPhase::DraftComplete,
        }
    }

    /// Cards drafted so far, in pick order.
    #[must_use]
    pub fn current_draft(&self) -> &[Arc<Card>] {
        &self.draft
    }

    /// This round's offer. Empty while idle.
    #[must_use]
    pub fn offer(&self) -> &[Arc<Card>] {
        &self.offer
    }

    /// The held selection, if any.
    #[must_use]
    pub fn held(&self) -> Option<&Selection> {
        match &self.phase {
            Phase::CardHeld(selection) => Some(selection),
            _ => None,
        }
    }

    /// Whether the card in `slot` is the one currently held.
    #[must_use]
    pub fn is_held(&self, slot: usize) -> bool {
        self.held().is_some_and(|s| s.slot == slot)
    }

    /// Whether the draft has reached its configured size.
    #[must_use]
    pub fn finished_draft(&self) -> bool {
        self.draft.len() >= self.config.draft_size
    }

    /// Draw a fresh offer from `catalog`.
    ///
    /// Cards whose name is already drafted are not eligible (other years
    /// of the same card included). Fails with `InsufficientPool` rather
    /// than offering fewer cards.
    pub fn start_round<R>(&mut self, catalog: &Catalog, rng: &mut R) -> Result<(), DraftError>
    where
        R: Rng + ?Sized,
    {
        match self.phase {
            Phase::Idle | Phase::AwaitingSelection => {}
            _ => return Err(DraftError::transition("start a round", self.phase())),
        }

        let eligible: Vec<&Arc<Card>> = catalog
            .iter()
            .filter(|card| !self.draft.iter().any(|d| d.name() == card.name()))
            .collect();

        let required = self.config.offer_size;
        if eligible.len() < required {
            log::warn!(
                "cannot fill offer: {} eligible cards, {} required",
                eligible.len(),
                required
            );
            return Err(DraftError::InsufficientPool {
                required,
                available: eligible.len(),
            });
        }

        self.offer = rand::seq::index::sample(rng, eligible.len(), required)
            .into_iter()
            .map(|i| Arc::clone(eligible[i]))
            .collect();
        self.phase = Phase::AwaitingSelection;

        log::debug!(
            "round {} started with {} offered cards",
            self.draft.len() + 1,
            self.offer.len()
        );
        Ok(())
    }

    /// Hold `card`, taken from offer `slot`.
    ///
    /// Selecting while a card is already held replaces the held card.
    pub fn select(&mut self, card: Arc<Card>, slot: usize) -> Result<(), DraftError> {
        self.ensure_selectable()?;

        let offered = self.offered(slot)?;
        if offered.name() != card.name() || offered.year() != card.year() {
            return Err(DraftError::CardNotOffered {
                name: card.name().to_string(),
                slot,
            });
        }

        self.phase = Phase::CardHeld(Selection { card, slot });
        Ok(())
    }

    /// Hold whichever card is in offer `slot`.
    pub fn select_slot(&mut self, slot: usize) -> Result<(), DraftError> {
        self.ensure_selectable()?;
        let card = Arc::clone(self.offered(slot)?);
        self.select(card, slot)
    }

    /// Draft the held card.
    ///
    /// The offer is consumed. Returns the phase entered: `DraftComplete`
    /// once the draft is full, otherwise `AwaitingSelection` with an empty
    /// offer until the next `start_round`.
    pub fn confirm_selection(&mut self) -> Result<DraftPhase, DraftError> {
        let selection = match std::mem::replace(&mut self.phase, Phase::AwaitingSelection) {
            Phase::CardHeld(selection) => selection,
            other => {
                self.phase = other;
                return Err(DraftError::transition("confirm a selection", self.phase()));
            }
        };

        log::debug!("drafted {}", selection.card);
        self.draft.push(selection.card);
        self.offer.clear();

        if self.finished_draft() {
            self.phase = Phase::DraftComplete;
            log::info!(
                "draft complete: rating {}, chemistry {}",
                self.total_rating(),
                self.total_chemistry()
            );
        }
        Ok(self.phase())
    }

    /// Select-or-confirm for a single player input on `slot`.
    ///
    /// Confirms when `slot` is already held, otherwise holds its card.
    pub fn pick(&mut self, slot: usize) -> Result<PickOutcome, DraftError> {
        if self.is_held(slot) {
            self.confirm_selection().map(PickOutcome::Drafted)
        } else {
            self.select_slot(slot).map(|()| PickOutcome::Held)
        }
    }

    /// Leave a completed draft and reset to `Idle`.
    pub fn end_draft(&mut self) -> Result<(), DraftError> {
        if self.phase != Phase::DraftComplete {
            return Err(DraftError::transition("end the draft", self.phase()));
        }

        self.draft.clear();
        self.offer.clear();
        self.phase = Phase::Idle;
        Ok(())
    }

    /// End a completed draft (if any) and draw the first offer of the next.
    pub fn restart<R>(&mut self, catalog: &Catalog, rng: &mut R) -> Result<(), DraftError>
    where
        R: Rng + ?Sized,
    {
        if self.phase == Phase::DraftComplete {
            self.end_draft()?;
        }
        self.start_round(catalog, rng)
    }

    /// Overall rating of the cards drafted so far (0 when empty).
    #[must_use]
    pub fn total_rating(&self) -> i32 {
        let ratings: SmallVec<[i32; DRAFT_SIZE]> = self.draft.iter().map(|c| c.rating()).collect();
        scoring::total_rating(&ratings)
    }

    /// Chemistry of the cards drafted so far.
    #[must_use]
    pub fn total_chemistry(&self) -> i32 {
        self.chemistry_breakdown().score
    }

    #[must_use]
    pub fn chemistry_breakdown(&self) -> ChemistryBreakdown {
        scoring::chemistry_breakdown(self.draft.iter().map(|c| &**c), self.config.draft_size)
    }

    /// Highest rated drafted card; later picks win ties.
    #[must_use]
    pub fn highest_rated_card(&self) -> Option<&Arc<Card>> {
        self.draft.iter().max_by_key(|c| c.rating())
    }

    fn ensure_selectable(&self) -> Result<(), DraftError> {
        match self.phase {
            Phase::AwaitingSelection | Phase::CardHeld(_) => Ok(()),
            _ => Err(DraftError::transition("select a card", self.phase())),
        }
    }

    fn offered(&self, slot: usize) -> Result<&Arc<Card>, DraftError> {
        self.offer.get(slot).ok_or(DraftError::SlotOutOfRange {
            slot,
            offer_len: self.offer.len(),
        })
    }
}
