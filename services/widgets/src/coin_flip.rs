//! Coin flip engine
//!
//! Two-state machine (`Idle`, `Flipping`) guarding a single in-flight flip.
//! The outcome is drawn when the flip starts and revealed only once the
//! animation delay has elapsed. Completed flips go to the front of a
//! bounded history.

use std::collections::VecDeque;
use std::time::Duration;

use shared::{CoinSide, FLIP_ANIMATION_MS, MAX_FLIP_HISTORY};
use tokio::time::sleep;
use tracing::{debug, info};

use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipState {
    Idle,
    Flipping { flip_id: u64 },
}

/// Ticket for a flip whose outcome is drawn but not yet revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFlip {
    id: u64,
    outcome: CoinSide,
    delay: Duration,
}

impl PendingFlip {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Time the caller must wait before completing the flip
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug, Clone)]
pub struct CoinFlipEngine {
    state: FlipState,
    history: VecDeque<CoinSide>,
    history_limit: usize,
    delay: Duration,
    last_outcome: Option<CoinSide>,
    next_flip_id: u64,
}

impl CoinFlipEngine {
    /// `history_limit` is clamped to at least one entry
    pub fn new(delay: Duration, history_limit: usize) -> Self {
        let history_limit = history_limit.max(1);
        Self {
            state: FlipState::Idle,
            history: VecDeque::new(),
            history_limit,
            delay,
            last_outcome: None,
            next_flip_id: 1,
        }
    }

    /// Start a flip. Returns `None` while another flip is in flight.
    pub fn request_flip(&mut self, rng: &mut dyn RandomSource) -> Option<PendingFlip> {
        if let FlipState::Flipping { flip_id } = self.state {
            debug!(flip_id, "Flip already in progress, ignoring request");
            return None;
        }

        let flip = PendingFlip {
            id: self.next_flip_id,
            outcome: CoinSide::from_bool(rng.next_bool()),
            delay: self.delay,
        };
        self.next_flip_id += 1;
        self.state = FlipState::Flipping { flip_id: flip.id };

        debug!(flip_id = flip.id, delay_ms = flip.delay.as_millis() as u64, "Flip started");
        Some(flip)
    }

    /// Reveal a flip and return to `Idle`.
    ///
    /// Tickets that do not match the in-flight flip are ignored.
    pub fn complete(&mut self, flip: &PendingFlip) -> Option<CoinSide> {
        match self.state {
            FlipState::Flipping { flip_id } if flip_id == flip.id => {}
            state => {
                debug!(flip_id = flip.id, ?state, "Stale flip completion ignored");
                return None;
            }
        }

        self.state = FlipState::Idle;
        self.last_outcome = Some(flip.outcome);
        self.history.push_front(flip.outcome);
        self.history.truncate(self.history_limit);

        metrics::counter!("widgets_flips_total").increment(1);
        info!(
            flip_id = flip.id,
            outcome = %flip.outcome,
            history_len = self.history.len(),
            "Flip revealed"
        );
        Some(flip.outcome)
    }

    /// Run one whole flip: request, wait out the animation, reveal.
    pub async fn flip(&mut self, rng: &mut dyn RandomSource) -> Option<CoinSide> {
        let flip = self.request_flip(rng)?;
        sleep(flip.delay).await;
        self.complete(&flip)
    }

    pub fn reset_history(&mut self) {
        debug!(cleared = self.history.len(), "Flip history reset");
        self.history.clear();
    }

    pub fn state(&self) -> FlipState {
        self.state
    }

    pub fn is_flipping(&self) -> bool {
        matches!(self.state, FlipState::Flipping { .. })
    }

    /// Completed outcomes, most recent first
    pub fn history(&self) -> impl Iterator<Item = CoinSide> + '_ {
        self.history.iter().copied()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Outcome of the most recently revealed flip
    pub fn last_outcome(&self) -> Option<CoinSide> {
        self.last_outcome
    }
}

impl Default for CoinFlipEngine {
    fn default() -> Self {
        Self::new(Duration::from_millis(FLIP_ANIMATION_MS), MAX_FLIP_HISTORY)
    }
}
