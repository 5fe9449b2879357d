//! Stride Core Library
//!
//! Shared functionality for the Stride activity tracker:
//! - Domain models (activities, goals, categories)
//! - Storage abstraction with an in-memory reference backend
//! - Insight engine (consistency scoring and wellness recommendations)

pub mod error;
pub mod insights;
pub mod models;
pub mod store;

pub use error::{Error, Result};
pub use insights::{InsightEngine, InsightPolicy, InsightSummary};
pub use models::{Activity, ActivityType, NewActivity};
pub use store::{ActivityStore, MemoryStore};
