//! Round resolution: sample a face, settle the payout.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::distribution::Distribution;

/// Errors raised when a round's inputs are invalid. Checked before any
/// randomness is consumed.
#[derive(Debug, Error, PartialEq)]
pub enum PlayError {
    #[error("bet must be positive (got {bet})")]
    InvalidBet { bet: f64 },
}

/// Which face pays out, and the net profit per unit bet on a win.
///
/// The multiplier excludes the returned stake: a rule paying net 5.0 on a
/// one-unit bet yields +5.0 profit on a win and -1.0 on a loss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoutRule {
    pub winning_color: Color,
    pub payout_multiplier: f64,
}

impl PayoutRule {
    #[must_use]
    pub const fn new(winning_color: Color, payout_multiplier: f64) -> Self {
        Self {
            winning_color,
            payout_multiplier,
        }
    }

    /// Signed profit for a sampled face at the given bet.
    #[must_use]
    pub fn settle(&self, outcome: Color, bet: f64) -> f64 {
        if outcome == self.winning_color {
            self.payout_multiplier * bet
        } else {
            -bet
        }
    }
}

/// A single settled round: the face that came up and the signed profit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayResult {
    pub outcome: Color,
    pub profit: f64,
}

impl PlayResult {
    /// Whether the round paid out.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.profit > 0.0
    }
}

/// Draw one face with the probabilities carried by `distribution`.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, distribution: &Distribution) -> Color {
    distribution.cumulative().pick(rng.gen_range(0.0..1.0))
}

/// Play one round at the given bet.
///
/// A zero weight on the winning face is a valid degenerate configuration;
/// the round simply never pays out.
///
/// # Errors
///
/// Returns `PlayError::InvalidBet` when `bet <= 0`.
pub fn play_round<R: Rng + ?Sized>(
    rng: &mut R,
    distribution: &Distribution,
    rule: &PayoutRule,
    bet: f64,
) -> Result<PlayResult, PlayError> {
    check_bet(bet)?;
    let outcome = sample(rng, distribution);
    Ok(PlayResult {
        outcome,
        profit: rule.settle(outcome, bet),
    })
}

/// Run `plays` independent rounds at a fixed bet.
///
/// The inverse-CDF table is computed once for the whole batch; a batch of
/// zero plays yields an empty vec.
///
/// # Errors
///
/// Returns `PlayError::InvalidBet` when `bet <= 0`.
pub fn simulate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    distribution: &Distribution,
    rule: &PayoutRule,
    bet: f64,
    plays: usize,
) -> Result<Vec<PlayResult>, PlayError> {
    check_bet(bet)?;
    let cumulative = distribution.cumulative();
    let mut results = Vec::with_capacity(plays);
    for _ in 0..plays {
        let outcome = cumulative.pick(rng.gen_range(0.0..1.0));
        results.push(PlayResult {
            outcome,
            profit: rule.settle(outcome, bet),
        });
    }
    Ok(results)
}

fn check_bet(bet: f64) -> Result<(), PlayError> {
    if bet > 0.0 {
        Ok(())
    } else {
        Err(PlayError::InvalidBet { bet })
    }
}
