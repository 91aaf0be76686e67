//! Profit statistics recomputed on demand from play history.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::COLOR_COUNT;
use crate::play::PlayResult;

/// Errors raised when a summary cannot be computed.
#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("no plays recorded")]
    NoData,
    #[error("bet must be positive (got {bet})")]
    InvalidBet { bet: f64 },
}

/// Aggregate view over a sequence of signed profits.
///
/// Values carry full f64 precision; rounding happens at presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitSummary {
    pub plays: usize,
    pub total: f64,
    pub mean: f64,
    /// Population standard deviation (divide by n, not n - 1).
    pub std_dev: f64,
    /// Fraction of plays with profit strictly above zero.
    pub win_rate: f64,
    /// Expected fractional loss per unit bet, `-mean / bet`.
    pub house_edge: f64,
}

/// Summarize a profit sequence generated at a fixed per-round bet.
///
/// Pure and order-independent: permuting `profits` changes nothing.
///
/// # Errors
///
/// Returns `StatsError::NoData` for an empty sequence and
/// `StatsError::InvalidBet` when `bet <= 0`.
pub fn summarize(profits: &[f64], bet: f64) -> Result<ProfitSummary, StatsError> {
    if profits.is_empty() {
        return Err(StatsError::NoData);
    }
    if bet <= 0.0 {
        return Err(StatsError::InvalidBet { bet });
    }
    #[allow(clippy::cast_precision_loss)]
    let count = profits.len() as f64;
    let total: f64 = profits.iter().sum();
    let mean = total / count;
    let variance = profits
        .iter()
        .map(|profit| {
            let delta = profit - mean;
            delta * delta
        })
        .sum::<f64>()
        / count;
    let wins = profits.iter().filter(|profit| **profit > 0.0).count();
    #[allow(clippy::cast_precision_loss)]
    let win_rate = wins as f64 / count;
    Ok(ProfitSummary {
        plays: profits.len(),
        total,
        mean,
        std_dev: variance.sqrt(),
        win_rate,
        house_edge: -mean / bet,
    })
}

/// Running cumulative profit series over a play history.
#[must_use]
pub fn cumulative(profits: &[f64]) -> Vec<f64> {
    let mut running = 0.0;
    profits
        .iter()
        .map(|profit| {
            running += profit;
            running
        })
        .collect()
}

/// Observed face counts over a batch of results, in canonical face order.
#[must_use]
pub fn outcome_counts(results: &[PlayResult]) -> [usize; COLOR_COUNT] {
    let mut counts = [0usize; COLOR_COUNT];
    for result in results {
        counts[result.outcome.index()] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn empty_history_is_no_data() {
        assert_eq!(summarize(&[], 1.0), Err(StatsError::NoData));
    }

    #[test]
    fn rejects_non_positive_bet() {
        assert_eq!(
            summarize(&[1.0], 0.0),
            Err(StatsError::InvalidBet { bet: 0.0 })
        );
    }

    #[test]
    fn single_win_summary() {
        let summary = summarize(&[5.0], 1.0).unwrap();
        assert_eq!(summary.plays, 1);
        assert!((summary.total - 5.0).abs() < f64::EPSILON);
        assert!((summary.mean - 5.0).abs() < f64::EPSILON);
        assert!(summary.std_dev.abs() < f64::EPSILON);
        assert!((summary.win_rate - 1.0).abs() < f64::EPSILON);
        assert!((summary.house_edge + 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn population_std_dev_divides_by_n() {
        // Two points at +-1 around a zero mean: population std is exactly 1.
        let summary = summarize(&[1.0, -1.0], 1.0).unwrap();
        assert!(summary.mean.abs() < f64::EPSILON);
        assert!((summary.std_dev - 1.0).abs() < 1e-12);
    }

    #[test]
    fn permuting_profits_changes_nothing() {
        let forward = [5.0, -1.0, -1.0, 5.0, -1.0, -1.0, -1.0];
        let mut reversed = forward;
        reversed.reverse();
        let a = summarize(&forward, 1.0).unwrap();
        let b = summarize(&reversed, 1.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn win_rate_scales_back_to_exact_count() {
        let profits = [5.0, -1.0, 5.0, -1.0, -1.0, -1.0, -1.0, 5.0, -1.0, -1.0];
        let summary = summarize(&profits, 1.0).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let recovered = summary.win_rate * profits.len() as f64;
        assert!((recovered - 3.0).abs() < 1e-9);
    }

    #[test]
    fn house_edge_is_relative_to_bet() {
        let summary = summarize(&[-2.0, -2.0], 2.0).unwrap();
        assert!((summary.house_edge - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cumulative_runs_forward() {
        let series = cumulative(&[1.0, -2.0, 0.5]);
        assert_eq!(series.len(), 3);
        assert!((series[0] - 1.0).abs() < f64::EPSILON);
        assert!((series[1] + 1.0).abs() < f64::EPSILON);
        assert!((series[2] + 0.5).abs() < f64::EPSILON);
        assert!(cumulative(&[]).is_empty());
    }

    #[test]
    fn outcome_counts_follow_canonical_order() {
        let results = [
            PlayResult {
                outcome: Color::Purple,
                profit: -1.0,
            },
            PlayResult {
                outcome: Color::Red,
                profit: 5.0,
            },
            PlayResult {
                outcome: Color::Purple,
                profit: -1.0,
            },
        ];
        let counts = outcome_counts(&results);
        assert_eq!(counts, [1, 0, 0, 0, 0, 2]);
    }
}
