//! Activity logging and goal query handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    Json,
};

use crate::{AppError, AppState, MAX_BODY_SIZE};
use stride_core::{Activity, NewActivity};

/// POST /api/activities - Record a new activity
///
/// The payload is validated here, before it reaches the store: the closed
/// activity-type enum and timestamp shape are enforced by deserialization,
/// the positive-value rule by [`NewActivity::validate`].
pub async fn record_activity(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<Activity>, AppError> {
    // Extract JSON body
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let new: NewActivity = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::bad_request(&format!("Invalid JSON: {}", e)))?;

    new.validate()
        .map_err(|e| AppError::bad_request(&e.to_string()))?;

    let activity = state.store.add(new)?;

    Ok(Json(activity))
}

/// GET /api/goals/:goal_id/activities - List activities for a goal
///
/// An unknown goal id yields an empty array, never a 404.
pub async fn list_goal_activities(
    State(state): State<Arc<AppState>>,
    Path(goal_id): Path<String>,
) -> Result<Json<Vec<Activity>>, AppError> {
    let activities = state.store.get_by_goal(&goal_id)?;

    Ok(Json(activities))
}
