//! Insight handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use super::profile::{resolve_profile, ProfileQuery};
use crate::{AppError, AppState};
use cashflow_core::health::{self, Insight};
use cashflow_core::models::BusinessCategory;

/// Response wrapper for the insights panel
#[derive(Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<Insight>,
}

/// GET /api/insights - Rule-based advisory insights for the business
///
/// The main list keeps the Engine's fixed ordering (health tier, seasonal,
/// generic); category recommendations are appended after it.
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProfileQuery>,
) -> Result<Json<InsightsResponse>, AppError> {
    let profile = resolve_profile(&state, params.email.as_deref())?;

    let totals = state.db.monthly_totals()?;
    let (revenue, expenses) = if totals.count > 0 {
        (totals.income, totals.expenses)
    } else {
        (profile.monthly_revenue, profile.monthly_expenses)
    };

    let score = health::health_score(revenue, expenses);
    let mut insights = health::generate_insights(&profile.business_type, score);

    let category = BusinessCategory::classify(&profile.business_type);
    insights.extend(health::category_insights(category));

    Ok(Json(InsightsResponse { insights }))
}
