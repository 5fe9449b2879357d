//! Insight handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use stride_core::InsightSummary;

/// GET /api/insights/optimization - Compute the optimization summary
///
/// Recomputed from a fresh store snapshot on every request, with the
/// recent window anchored at the current wall-clock time.
pub async fn get_optimization_insights(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InsightSummary>, AppError> {
    let summary = state.engine.generate_optimization_insights()?;

    Ok(Json(summary))
}
