//! Probability weights over the six die faces.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{COLOR_COUNT, Color};

/// Tolerance applied when checking that weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

const UNIFORM_WEIGHT: f64 = 1.0 / COLOR_COUNT as f64;

/// Errors raised when a probability vector violates its invariants.
#[derive(Debug, Error, PartialEq)]
pub enum DistributionError {
    #[error("weight for {color} must be non-negative (got {weight})")]
    NegativeWeight { color: Color, weight: f64 },
    #[error("weights must sum to 1.0 within tolerance (got {sum:.7})")]
    WeightSum { sum: f64 },
}

/// Validated probability vector aligned positionally with [`Color::ALL`].
///
/// Construction checks the invariants once; a held `Distribution` is
/// always safe to sample from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 6]", into = "[f64; 6]")]
pub struct Distribution {
    weights: [f64; COLOR_COUNT],
}

impl Distribution {
    /// Validate and wrap a weight vector.
    ///
    /// # Errors
    ///
    /// Returns `DistributionError` when any weight is negative or the sum
    /// falls outside `1.0 ± WEIGHT_SUM_TOLERANCE`.
    pub fn new(weights: [f64; COLOR_COUNT]) -> Result<Self, DistributionError> {
        for (i, weight) in weights.iter().enumerate() {
            if *weight < 0.0 {
                return Err(DistributionError::NegativeWeight {
                    color: Color::ALL[i],
                    weight: *weight,
                });
            }
        }
        let sum: f64 = weights.iter().sum();
        if sum.is_nan() || (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(DistributionError::WeightSum { sum });
        }
        Ok(Self { weights })
    }

    /// Equal weight on every face.
    #[must_use]
    pub const fn uniform() -> Self {
        Self {
            weights: [UNIFORM_WEIGHT; COLOR_COUNT],
        }
    }

    // Catalog-internal constructor for weights already known to be
    // normalized. External callers go through `new`.
    pub(crate) const fn from_normalized(weights: [f64; COLOR_COUNT]) -> Self {
        Self { weights }
    }

    /// Weight assigned to a single face.
    #[must_use]
    pub const fn weight(&self, color: Color) -> f64 {
        self.weights[color.index()]
    }

    /// The full weight vector in canonical face order.
    #[must_use]
    pub const fn weights(&self) -> &[f64; COLOR_COUNT] {
        &self.weights
    }

    /// Precompute the inverse-CDF table used for repeated draws.
    #[must_use]
    pub fn cumulative(&self) -> Cumulative {
        let mut thresholds = [0.0; COLOR_COUNT];
        let mut running = 0.0;
        for (threshold, weight) in thresholds.iter_mut().zip(self.weights) {
            running += weight;
            *threshold = running;
        }
        Cumulative { thresholds }
    }
}

impl TryFrom<[f64; COLOR_COUNT]> for Distribution {
    type Error = DistributionError;

    fn try_from(weights: [f64; COLOR_COUNT]) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

impl From<Distribution> for [f64; COLOR_COUNT] {
    fn from(value: Distribution) -> Self {
        value.weights
    }
}

/// Running-sum thresholds for a distribution, computed once per batch.
#[derive(Debug, Clone)]
pub struct Cumulative {
    thresholds: [f64; COLOR_COUNT],
}

impl Cumulative {
    /// Map a uniform draw in `[0, 1)` to a face. Zero-weight faces are
    /// never selected because their threshold span is empty.
    #[must_use]
    pub fn pick(&self, roll: f64) -> Color {
        for (i, threshold) in self.thresholds.iter().enumerate() {
            if roll < *threshold {
                return Color::ALL[i];
            }
        }
        // Sum tolerance can leave the last threshold a hair under 1.0.
        Color::ALL[COLOR_COUNT - 1]
    }
}
