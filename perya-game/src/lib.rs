//! Perya Game Engine
//!
//! Platform-agnostic core logic for the perya color dice game: a
//! probability-weighted six-face die, per-round payout settlement, a
//! session ledger, and Monte Carlo batch statistics. No UI or
//! platform-specific dependencies live here.

pub mod color;
pub mod distribution;
pub mod play;
pub mod session;
pub mod stats;
pub mod variant;

// Re-export commonly used types
pub use color::{COLOR_COUNT, Color};
pub use distribution::{Cumulative, Distribution, DistributionError, WEIGHT_SUM_TOLERANCE};
pub use play::{PayoutRule, PlayError, PlayResult, play_round, sample, simulate_batch};
pub use session::GameSession;
pub use stats::{ProfitSummary, StatsError, cumulative, outcome_counts, summarize};
pub use variant::{BUILTIN_ORDER, CatalogError, VariantCatalog, VariantConfig};
