//! Append-only play ledger bound to a seeded RNG and a variant.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::play::{self, PlayError, PlayResult};
use crate::stats::{self, ProfitSummary, StatsError};
use crate::variant::VariantConfig;

/// A player's run against one variant: seeded randomness plus the
/// history of settled rounds. The kernel functions stay pure; this is
/// the only stateful piece and it belongs to the caller.
#[derive(Debug, Clone)]
pub struct GameSession {
    variant: VariantConfig,
    rng: ChaCha20Rng,
    history: Vec<PlayResult>,
}

impl GameSession {
    /// Start a fresh session for a variant with a user-visible seed.
    #[must_use]
    pub fn new(variant: VariantConfig, seed: u64) -> Self {
        Self {
            variant,
            rng: ChaCha20Rng::seed_from_u64(seed),
            history: Vec::new(),
        }
    }

    /// Play one round and append it to the ledger.
    ///
    /// # Errors
    ///
    /// Returns `PlayError::InvalidBet` when `bet <= 0`; nothing is
    /// recorded in that case.
    pub fn play(&mut self, bet: f64) -> Result<PlayResult, PlayError> {
        let result = play::play_round(
            &mut self.rng,
            &self.variant.distribution,
            &self.variant.payout,
            bet,
        )?;
        self.history.push(result);
        Ok(result)
    }

    /// The variant this session plays.
    #[must_use]
    pub const fn variant(&self) -> &VariantConfig {
        &self.variant
    }

    /// Every settled round, oldest first.
    #[must_use]
    pub fn history(&self) -> &[PlayResult] {
        &self.history
    }

    /// Profit projection of the history.
    #[must_use]
    pub fn profits(&self) -> Vec<f64> {
        self.history.iter().map(|r| r.profit).collect()
    }

    #[must_use]
    pub fn total_profit(&self) -> f64 {
        self.history.iter().map(|r| r.profit).sum()
    }

    #[must_use]
    pub const fn plays(&self) -> usize {
        self.history.len()
    }

    /// Most recent round, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PlayResult> {
        self.history.last()
    }

    /// Clear the ledger; the RNG stream is left where it is.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Deterministically restart the randomness stream.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha20Rng::seed_from_u64(seed);
    }

    /// Summarize the ledger at the per-round bet used to generate it.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::NoData` when nothing has been played yet.
    pub fn summary(&self, bet: f64) -> Result<ProfitSummary, StatsError> {
        stats::summarize(&self.profits(), bet)
    }
}
