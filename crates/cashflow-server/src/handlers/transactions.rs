//! Transaction handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState, SuccessResponse};
use cashflow_core::models::{NewTransaction, Period, Transaction};

/// Query parameters for listing transactions
#[derive(Debug, Deserialize)]
pub struct TransactionQuery {
    pub limit: Option<u32>,
}

/// Response wrapper matching the front end's `list.transactions` access
#[derive(Serialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
}

/// GET /api/transactions - List transactions, most recent first
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TransactionQuery>,
) -> Result<Json<TransactionListResponse>, AppError> {
    // Cap the page size to keep responses bounded
    let limit = params.limit.map(|l| l.min(1000));
    let transactions = state.db.list_transactions(limit)?;
    Ok(Json(TransactionListResponse { transactions }))
}

/// GET /api/transactions/period/:period - List transactions within 7d/30d/90d/1y
pub async fn list_transactions_by_period(
    State(state): State<Arc<AppState>>,
    Path(period): Path<String>,
) -> Result<Json<TransactionListResponse>, AppError> {
    let period: Period = period
        .parse()
        .map_err(|e: String| AppError::bad_request(&e))?;

    let transactions = state.db.list_transactions_by_period(period)?;
    Ok(Json(TransactionListResponse { transactions }))
}

/// POST /api/transactions - Record a transaction
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewTransaction>,
) -> Result<Json<Transaction>, AppError> {
    if body.description.trim().is_empty() {
        return Err(AppError::bad_request("description is required"));
    }

    let id = state.db.insert_transaction(&body)?;

    // Return the stored row (amount normalized to a magnitude)
    let stored = state
        .db
        .list_transactions(None)?
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| AppError::not_found("Transaction not found after insert"))?;

    Ok(Json(stored))
}

/// DELETE /api/transactions/:id - Remove a transaction
pub async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    use cashflow_core::Error;

    state.db.delete_transaction(id).map_err(|e| match e {
        Error::NotFound(msg) => AppError::not_found(&msg),
        other => other.into(),
    })?;

    Ok(Json(SuccessResponse { success: true }))
}
