//! Dashboard handler

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use super::profile::{resolve_profile, ProfileQuery};
use crate::{AppError, AppState};
use cashflow_core::models::DashboardMetrics;

/// Response wrapper matching the front end's `dashboard.dashboard` access
#[derive(Serialize)]
pub struct DashboardResponse {
    pub dashboard: DashboardMetrics,
}

/// GET /api/dashboard - Metric cards plus insights
///
/// Uses trailing-30-day ledger totals when the business has recorded
/// transactions; otherwise the Engine projects from onboarding figures.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProfileQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    let profile = resolve_profile(&state, params.email.as_deref())?;

    let totals = state.db.monthly_totals()?;
    let metrics = cashflow_core::build_metrics(&profile, Some(totals));

    Ok(Json(DashboardResponse { dashboard: metrics }))
}
