//! In-memory reference implementation of the activity store

use std::sync::RwLock;

use tracing::debug;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{Activity, NewActivity};

/// Volatile, in-process activity store.
///
/// Holds records in insertion order behind a single read-write lock (the
/// one piece of shared mutable state in the core). Constructed once at
/// process start and passed by handle; state is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Activity>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl super::ActivityStore for MemoryStore {
    fn add(&self, new: NewActivity) -> Result<Activity> {
        let activity = Activity::from_new(Uuid::new_v4().to_string(), new);

        let mut records = self
            .records
            .write()
            .map_err(|_| Error::StorageUnavailable("activity store lock poisoned".to_string()))?;
        records.push(activity.clone());

        debug!(
            id = %activity.id,
            goal_id = %activity.goal_id,
            activity_type = %activity.activity_type,
            "Activity recorded"
        );

        Ok(activity)
    }

    fn get_by_goal(&self, goal_id: &str) -> Result<Vec<Activity>> {
        let records = self
            .records
            .read()
            .map_err(|_| Error::StorageUnavailable("activity store lock poisoned".to_string()))?;
        Ok(records
            .iter()
            .filter(|a| a.goal_id == goal_id)
            .cloned()
            .collect())
    }

    fn get_all(&self) -> Result<Vec<Activity>> {
        let records = self
            .records
            .read()
            .map_err(|_| Error::StorageUnavailable("activity store lock poisoned".to_string()))?;
        Ok(records.clone())
    }
}
