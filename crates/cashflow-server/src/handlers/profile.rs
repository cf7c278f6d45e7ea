//! Business profile handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppError, AppState};
use cashflow_core::models::{BusinessProfile, NewProfile};

/// Query parameters selecting a profile by email
///
/// The identity provider owns real user identity; this API selects by email
/// and falls back to the first stored profile (single-tenant deployments).
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub email: Option<String>,
}

/// Response wrapper matching the front end's `profile.user` access
#[derive(Serialize)]
pub struct ProfileResponse {
    pub user: BusinessProfile,
}

pub(crate) fn resolve_profile(
    state: &AppState,
    email: Option<&str>,
) -> Result<BusinessProfile, AppError> {
    let profile = match email {
        Some(email) => state.db.get_profile(email)?,
        None => state.db.get_default_profile()?,
    };

    profile.ok_or_else(|| AppError::not_found("Profile not found"))
}

/// POST /api/auth/register - Create (or replace) a business profile
pub async fn register_profile(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewProfile>,
) -> Result<Json<ProfileResponse>, AppError> {
    if body.business_name.trim().is_empty() {
        return Err(AppError::bad_request("businessName is required"));
    }
    if body.email.trim().is_empty() {
        return Err(AppError::bad_request("email is required"));
    }

    state.db.upsert_profile(&body)?;
    let profile = resolve_profile(&state, Some(&body.email))?;

    info!(email = %profile.email, business = %profile.business_name, "Profile registered");
    Ok(Json(ProfileResponse { user: profile }))
}

/// GET /api/auth/user/profile - Fetch a profile
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProfileQuery>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = resolve_profile(&state, params.email.as_deref())?;
    Ok(Json(ProfileResponse { user: profile }))
}

/// PUT /api/auth/user/profile - Update a profile (full replace by email)
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewProfile>,
) -> Result<Json<ProfileResponse>, AppError> {
    if state.db.get_profile(&body.email)?.is_none() {
        return Err(AppError::not_found("Profile not found"));
    }

    state.db.upsert_profile(&body)?;
    let profile = resolve_profile(&state, Some(&body.email))?;
    Ok(Json(ProfileResponse { user: profile }))
}
