//! Insight Engine - consistency scoring and wellness recommendations
//!
//! The insight engine derives a summary from the full activity history:
//!
//! - **Consistency score** - streak of consecutive active calendar days,
//!   normalized so a 7-day streak scores 1.0
//! - **Wellness warning** - trips when health activity over the last 7 days
//!   falls below the weekly minimum
//! - **Recommendation** - flags a high-learning/low-health imbalance,
//!   otherwise suggests maintaining the current balance
//!
//! Insights are computed values, not stored entities: every request
//! recomputes from a fresh store snapshot, so there is no staleness to
//! manage.

pub mod engine;
pub mod types;

pub use engine::InsightEngine;
pub use types::{InsightPolicy, InsightSummary};
