//! Named game variants pairing a distribution with a payout rule.
//!
//! The catalog is validated once at load time; malformed presets are
//! rejected at startup rather than at play time.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::color::{COLOR_COUNT, Color};
use crate::distribution::{Distribution, DistributionError};
use crate::play::PayoutRule;

/// Presentation order for the built-in variants. Extra variants from a
/// loaded catalog are appended after these, sorted by id.
pub const BUILTIN_ORDER: [&str; 5] = [
    "fair",
    "reduced-payout",
    "loaded-die",
    "house-classic",
    "almost-impossible",
];

/// Errors raised while loading a variant catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("variant {id}: {source}")]
    BadWeights {
        id: String,
        #[source]
        source: DistributionError,
    },
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct RawVariant {
    pub name: String,
    #[serde(default)]
    pub desc: String,
    pub weights: [f64; COLOR_COUNT],
    #[serde(default = "default_winning_color")]
    pub winning_color: Color,
    pub payout: f64,
}

const fn default_winning_color() -> Color {
    Color::Red
}

/// One playable configuration of the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantConfig {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub distribution: Distribution,
    pub payout: PayoutRule,
}

impl VariantConfig {
    fn from_raw(id: String, raw: RawVariant) -> Result<Self, CatalogError> {
        let distribution = Distribution::new(raw.weights)
            .map_err(|source| CatalogError::BadWeights {
                id: id.clone(),
                source,
            })?;
        Ok(Self {
            id,
            name: raw.name,
            desc: raw.desc,
            distribution,
            payout: PayoutRule::new(raw.winning_color, raw.payout),
        })
    }

    /// Deterministic expected profit per round at the given bet.
    #[must_use]
    pub fn expected_profit(&self, bet: f64) -> f64 {
        let p = self.distribution.weight(self.payout.winning_color);
        p * self.payout.payout_multiplier * bet - (1.0 - p) * bet
    }
}

/// Ordered collection of validated variants.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariantCatalog(pub Vec<VariantConfig>);

impl VariantCatalog {
    #[must_use]
    pub const fn empty() -> Self {
        Self(vec![])
    }

    /// The stock catalog shipped with the game.
    #[must_use]
    pub fn builtin() -> Self {
        let fifth = 0.8 / 5.0;
        Self(vec![
            VariantConfig {
                id: "fair".to_string(),
                name: "Fair".to_string(),
                desc: "Even odds, fair 5-to-1 net payout, zero expected edge.".to_string(),
                distribution: Distribution::uniform(),
                payout: PayoutRule::new(Color::Red, 5.0),
            },
            VariantConfig {
                id: "reduced-payout".to_string(),
                name: "Reduced Payout".to_string(),
                desc: "Even odds with the payout shaved to 4.8-to-1.".to_string(),
                distribution: Distribution::uniform(),
                payout: PayoutRule::new(Color::Red, 4.8),
            },
            VariantConfig {
                id: "loaded-die".to_string(),
                name: "Loaded Die".to_string(),
                desc: "Red comes up 20% of the time, paid at its fair 4-to-1 rate.".to_string(),
                distribution: Distribution::from_normalized([0.2, fifth, fifth, fifth, fifth, fifth]),
                payout: PayoutRule::new(Color::Red, 4.0),
            },
            VariantConfig {
                id: "house-classic".to_string(),
                name: "House Classic".to_string(),
                desc: "The parlor setup: red squeezed to 13% and paid 1.9-to-1.".to_string(),
                distribution: Distribution::from_normalized([
                    0.13, 0.174, 0.174, 0.174, 0.174, 0.174,
                ]),
                payout: PayoutRule::new(Color::Red, 1.9),
            },
            VariantConfig {
                id: "almost-impossible".to_string(),
                name: "Almost Impossible".to_string(),
                desc: "Red never comes up. The payout is generous for a reason.".to_string(),
                distribution: Distribution::from_normalized([0.0, 0.2, 0.2, 0.2, 0.2, 0.2]),
                payout: PayoutRule::new(Color::Red, 5.0),
            },
        ])
    }

    /// Load and validate a catalog from a JSON map keyed by variant id.
    ///
    /// Built-in ids come first in their canonical order; any other ids
    /// follow sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or any entry carries
    /// an invalid weight vector.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mut map: HashMap<String, RawVariant> = serde_json::from_str(json)?;
        let mut variants = Vec::with_capacity(map.len());
        for id in BUILTIN_ORDER {
            if let Some(raw) = map.remove(id) {
                variants.push(VariantConfig::from_raw(id.to_string(), raw)?);
            }
        }
        let mut rest: Vec<String> = map.keys().cloned().collect();
        rest.sort();
        for id in rest {
            if let Some(raw) = map.remove(&id) {
                variants.push(VariantConfig::from_raw(id, raw)?);
            }
        }
        Ok(Self(variants))
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&VariantConfig> {
        self.0.iter().find(|v| v.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VariantConfig> {
        self.0.iter()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.id.as_str()).collect()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a VariantCatalog {
    type Item = &'a VariantConfig;
    type IntoIter = std::slice::Iter<'a, VariantConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
