//! Domain models for Stride

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Category of a logged activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Learning,
    Health,
    Work,
    Mindfulness,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Learning => "learning",
            Self::Health => "health",
            Self::Work => "work",
            Self::Mindfulness => "mindfulness",
        }
    }
}

impl std::str::FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "learning" => Ok(Self::Learning),
            "health" => Ok(Self::Health),
            "work" => Ok(Self::Work),
            "mindfulness" => Ok(Self::Mindfulness),
            _ => Err(format!("Unknown activity type: {}", s)),
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input payload for logging a new activity (everything but the id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivity {
    /// Grouping key supplied by the caller
    pub goal_id: String,
    pub activity_type: ActivityType,
    /// Duration in minutes or repetition count, category-dependent. Must be positive.
    pub value: f64,
    /// Caller-supplied point in time; may be backdated
    pub timestamp: DateTime<Utc>,
}

impl NewActivity {
    /// Reject payloads the store must never see (value <= 0)
    pub fn validate(&self) -> Result<()> {
        if self.value <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Activity value must be positive, got {}",
                self.value
            )));
        }
        Ok(())
    }
}

/// A stored activity record. Immutable once created; the id is stamped
/// exactly once, at insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub goal_id: String,
    pub activity_type: ActivityType,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

impl Activity {
    /// Complete a pending payload with a freshly assigned id
    pub fn from_new(id: String, new: NewActivity) -> Self {
        Self {
            id,
            goal_id: new.goal_id,
            activity_type: new.activity_type,
            value: new.value,
            timestamp: new.timestamp,
        }
    }
}
