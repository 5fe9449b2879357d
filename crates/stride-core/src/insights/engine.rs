//! Insight engine - computes the optimization summary from store state

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::debug;

use crate::error::Result;
use crate::models::{Activity, ActivityType};
use crate::store::ActivityStore;

use super::types::{
    InsightPolicy, InsightSummary, RECOMMENDATION_BALANCED, RECOMMENDATION_REBALANCE,
};

/// Computes consistency and wellness insights from an [`ActivityStore`].
///
/// Pure function of store state and the window anchor: no mutation, no
/// cached results. The only failure mode is a store error from the fetch,
/// propagated unchanged.
pub struct InsightEngine {
    store: Arc<dyn ActivityStore>,
    policy: InsightPolicy,
}

impl InsightEngine {
    /// Create an engine over a shared store handle with default policy
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self::with_policy(store, InsightPolicy::default())
    }

    pub fn with_policy(store: Arc<dyn ActivityStore>, policy: InsightPolicy) -> Self {
        Self { store, policy }
    }

    /// Generate the optimization summary, anchoring the recent window at
    /// the current wall-clock time.
    pub fn generate_optimization_insights(&self) -> Result<InsightSummary> {
        self.insights_as_of(Utc::now())
    }

    /// Generate the optimization summary with an explicit window anchor.
    ///
    /// The recent window is `[now - 7 days, now]` - a sliding 168-hour
    /// window, not calendar-aligned.
    pub fn insights_as_of(&self, now: DateTime<Utc>) -> Result<InsightSummary> {
        let all = self.store.get_all()?;

        let consistency_score = self.consistency_score(&all);

        let window_start = now - Duration::days(7);
        let recent: Vec<&Activity> = all.iter().filter(|a| a.timestamp >= window_start).collect();

        let health_minutes = category_sum(&recent, ActivityType::Health);
        let learning_minutes = category_sum(&recent, ActivityType::Learning);

        debug!(
            total = all.len(),
            recent = recent.len(),
            health_minutes,
            learning_minutes,
            "Insight window computed"
        );

        let health_low = health_minutes < self.policy.min_weekly_health_minutes;
        let recommendation =
            if learning_minutes > self.policy.learning_overload_minutes && health_low {
                RECOMMENDATION_REBALANCE
            } else {
                RECOMMENDATION_BALANCED
            };

        Ok(InsightSummary {
            consistency_score,
            wellness_warning: health_low,
            recommendation: recommendation.to_string(),
        })
    }

    /// Consistency score from the distinct calendar dates in the history.
    ///
    /// Dates are timestamps truncated to UTC days; multiple activities on
    /// the same day count once. A gap of more than one day resets the
    /// streak to 1 (the day itself still counts), never to 0. The score is
    /// `min(max_streak / target, 1.0)` rounded to 2 decimal places, or 0.0
    /// for an empty history.
    fn consistency_score(&self, activities: &[Activity]) -> f64 {
        if activities.is_empty() {
            return 0.0;
        }

        // BTreeSet gives distinct dates in ascending order
        let dates: BTreeSet<NaiveDate> =
            activities.iter().map(|a| a.timestamp.date_naive()).collect();

        let mut max_streak: u32 = 0;
        let mut current_streak: u32 = 0;
        let mut previous: Option<NaiveDate> = None;

        for date in dates {
            current_streak = match previous {
                Some(prev) if date == prev + Duration::days(1) => current_streak + 1,
                _ => 1,
            };
            max_streak = max_streak.max(current_streak);
            previous = Some(date);
        }

        let score =
            (f64::from(max_streak) / f64::from(self.policy.streak_target_days)).min(1.0);
        round2(score)
    }
}

fn category_sum(recent: &[&Activity], activity_type: ActivityType) -> f64 {
    recent
        .iter()
        .filter(|a| a.activity_type == activity_type)
        .map(|a| a.value)
        .sum()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewActivity;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn engine_with_store() -> (InsightEngine, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let engine = InsightEngine::new(store.clone());
        (engine, store)
    }

    fn log(
        store: &MemoryStore,
        goal_id: &str,
        activity_type: ActivityType,
        value: f64,
        timestamp: DateTime<Utc>,
    ) {
        store
            .add(NewActivity {
                goal_id: goal_id.to_string(),
                activity_type,
                value,
                timestamp,
            })
            .unwrap();
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_seven_consecutive_days_scores_full() {
        let (engine, store) = engine_with_store();
        for day in 1..=7 {
            log(&store, "g", ActivityType::Work, 30.0, at(2024, 1, day, 10));
        }

        let summary = engine.insights_as_of(at(2024, 6, 1, 0)).unwrap();
        assert_eq!(summary.consistency_score, 1.0);
    }

    #[test]
    fn test_gap_resets_streak_to_one() {
        let (engine, store) = engine_with_store();
        // Activities on Jan 1, 2, 4 - the gap on Jan 3 caps the streak at 2
        log(&store, "g", ActivityType::Work, 30.0, at(2024, 1, 1, 10));
        log(&store, "g", ActivityType::Work, 30.0, at(2024, 1, 2, 10));
        log(&store, "g", ActivityType::Work, 30.0, at(2024, 1, 4, 10));

        let summary = engine.insights_as_of(at(2024, 6, 1, 0)).unwrap();
        assert_eq!(summary.consistency_score, 0.29); // round(2/7, 2)
    }

    #[test]
    fn test_same_day_activities_count_once() {
        let (engine, store) = engine_with_store();
        // Three activities on one day, inserted out of chronological order
        log(&store, "g", ActivityType::Work, 30.0, at(2024, 1, 1, 18));
        log(&store, "g", ActivityType::Health, 20.0, at(2024, 1, 1, 7));
        log(&store, "g", ActivityType::Learning, 45.0, at(2024, 1, 1, 12));

        let summary = engine.insights_as_of(at(2024, 6, 1, 0)).unwrap();
        assert_eq!(summary.consistency_score, 0.14); // round(1/7, 2)
    }

    #[test]
    fn test_empty_store_defaults() {
        let (engine, _store) = engine_with_store();

        let summary = engine.insights_as_of(at(2024, 6, 1, 0)).unwrap();
        assert_eq!(summary.consistency_score, 0.0);
        assert!(summary.wellness_warning); // 0 < 150
        assert_eq!(summary.recommendation, RECOMMENDATION_BALANCED);
    }

    #[test]
    fn test_rebalance_rule_trips_on_high_learning_low_health() {
        let (engine, store) = engine_with_store();
        let now = at(2024, 6, 10, 12);

        // Within the last 7 days: 100 health minutes, 350 learning minutes
        log(&store, "g", ActivityType::Health, 60.0, now - Duration::days(2));
        log(&store, "g", ActivityType::Health, 40.0, now - Duration::days(1));
        log(&store, "g", ActivityType::Learning, 200.0, now - Duration::days(3));
        log(&store, "g", ActivityType::Learning, 150.0, now - Duration::days(1));

        let summary = engine.insights_as_of(now).unwrap();
        assert!(summary.wellness_warning);
        assert_eq!(summary.recommendation, RECOMMENDATION_REBALANCE);
    }

    #[test]
    fn test_healthy_week_clears_warning_and_keeps_balance() {
        let (engine, store) = engine_with_store();
        let now = at(2024, 6, 10, 12);

        log(&store, "g", ActivityType::Health, 90.0, now - Duration::days(2));
        log(&store, "g", ActivityType::Health, 80.0, now - Duration::days(4));
        log(&store, "g", ActivityType::Learning, 400.0, now - Duration::days(1));

        let summary = engine.insights_as_of(now).unwrap();
        assert!(!summary.wellness_warning); // 170 >= 150
        assert_eq!(summary.recommendation, RECOMMENDATION_BALANCED);
    }

    #[test]
    fn test_activity_eight_days_back_is_outside_the_window() {
        let (engine, store) = engine_with_store();
        let now = at(2024, 6, 10, 12);

        // 8 days back: outside the window. If it leaked in, health would be
        // 600 and the warning could not trip.
        log(&store, "g", ActivityType::Health, 500.0, now - Duration::days(8));
        log(&store, "g", ActivityType::Health, 100.0, now - Duration::days(2));

        let summary = engine.insights_as_of(now).unwrap();
        assert!(summary.wellness_warning); // only the in-window 100 counts
    }

    #[test]
    fn test_activity_six_days_back_is_inside_the_window() {
        let (engine, store) = engine_with_store();
        let now = at(2024, 6, 10, 12);

        // 6 days back: inside the window. A narrower window would drop it,
        // leave health at 0, and trip the warning.
        log(&store, "g", ActivityType::Health, 150.0, now - Duration::days(6));

        let summary = engine.insights_as_of(now).unwrap();
        assert!(!summary.wellness_warning);
    }

    #[test]
    fn test_old_history_still_drives_consistency() {
        let (engine, store) = engine_with_store();
        let now = at(2024, 6, 10, 12);

        // Streak far outside the recent window still scores
        for day in 1..=7 {
            log(&store, "g", ActivityType::Work, 30.0, at(2024, 1, day, 10));
        }

        let summary = engine.insights_as_of(now).unwrap();
        assert_eq!(summary.consistency_score, 1.0);
        // ...but contributes nothing to the weekly sums
        assert!(summary.wellness_warning);
    }

    #[test]
    fn test_learning_threshold_is_strictly_greater() {
        let (engine, store) = engine_with_store();
        let now = at(2024, 6, 10, 12);

        // Exactly 300 learning minutes does not trip the rebalance rule
        log(&store, "g", ActivityType::Learning, 300.0, now - Duration::days(1));

        let summary = engine.insights_as_of(now).unwrap();
        assert!(summary.wellness_warning);
        assert_eq!(summary.recommendation, RECOMMENDATION_BALANCED);
    }
}
