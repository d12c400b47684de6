//! Minimum-order eligibility check.

use serde::{Deserialize, Serialize};

use vitrine_core::{Money, WholesaleConfig};

/// Outcome of comparing a cart total against the wholesale minimum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderEligibility {
    /// Whether checkout is allowed. The boundary is inclusive: a total exactly
    /// at the minimum qualifies.
    pub is_eligible: bool,
    /// How much is still missing to reach the minimum (zero once eligible).
    pub remaining: Money,
    /// Fraction of the minimum covered, clamped to `1.0`, for the progress
    /// indicator.
    pub progress_ratio: f64,
}

impl OrderEligibility {
    /// Evaluate `total` against the configured minimum.
    ///
    /// A zero minimum means no wholesale floor: always eligible, full
    /// progress.
    pub fn evaluate(total: Money, config: &WholesaleConfig) -> Self {
        let min = config.min_order_value;
        Self {
            is_eligible: total >= min,
            remaining: min.saturating_sub(total),
            progress_ratio: total.ratio_of(min),
        }
    }
}
