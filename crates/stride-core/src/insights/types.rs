//! Core types for the insight engine

use serde::{Deserialize, Serialize};

/// Recommendation issued when recent activity looks balanced
pub const RECOMMENDATION_BALANCED: &str = "Maintain your current balance.";

/// Recommendation issued on high learning combined with low physical wellness
pub const RECOMMENDATION_REBALANCE: &str =
    "Rebalance your growth plan: High learning detected with low physical wellness.";

/// Thresholds driving the insight rules.
///
/// These are fixed policy in the reference design; the struct exists so the
/// defaults are stated in one place and tests can pin them down.
#[derive(Debug, Clone, Copy)]
pub struct InsightPolicy {
    /// Streak length that earns a full consistency score
    pub streak_target_days: u32,
    /// Minimum health minutes per week before the wellness warning trips
    pub min_weekly_health_minutes: f64,
    /// Learning minutes per week above which the rebalance rule can fire
    pub learning_overload_minutes: f64,
}

impl Default for InsightPolicy {
    fn default() -> Self {
        Self {
            streak_target_days: 7,
            min_weekly_health_minutes: 150.0,
            learning_overload_minutes: 300.0,
        }
    }
}

/// Derived summary returned by the insight engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightSummary {
    /// Consistency score in [0.0, 1.0], rounded to 2 decimal places
    pub consistency_score: f64,
    /// True when recent health activity is below the weekly minimum
    pub wellness_warning: bool,
    /// One of [`RECOMMENDATION_BALANCED`] or [`RECOMMENDATION_REBALANCE`]
    pub recommendation: String,
}
