//! Storage abstraction for activity records
//!
//! The store is a capability set (`add`, `get_by_goal`, `get_all`) that any
//! backend must satisfy. The insight engine is written against the trait,
//! so swapping the in-memory reference backend for a database later does
//! not touch the analytics code.

use crate::error::Result;
use crate::models::{Activity, NewActivity};

mod memory;

pub use memory::MemoryStore;

/// Persistence capability set for activity records.
///
/// Records are append-only: there is no update or delete path. `add`
/// establishes insertion order, and every read that starts after an `add`
/// returns observes the appended record.
pub trait ActivityStore: Send + Sync {
    /// Assign a fresh unique id, store the record in insertion order, and
    /// return the stored record.
    ///
    /// The in-memory backend never fails for well-formed input; a
    /// persistent backend may return [`Error::StorageUnavailable`], which
    /// callers surface unchanged.
    ///
    /// [`Error::StorageUnavailable`]: crate::error::Error::StorageUnavailable
    fn add(&self, new: NewActivity) -> Result<Activity>;

    /// All records whose goal id matches, in insertion order. An unknown
    /// goal yields an empty vec, never an error.
    fn get_by_goal(&self, goal_id: &str) -> Result<Vec<Activity>>;

    /// Snapshot of every record in insertion order. The returned vec is an
    /// owned copy; later appends are not visible through it.
    fn get_all(&self) -> Result<Vec<Activity>>;
}
