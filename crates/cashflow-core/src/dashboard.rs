//! Dashboard metric assembly
//!
//! Builds the [`DashboardMetrics`] payload from a stored profile and, when
//! the ledger has entries, the trailing-30-day totals. With an empty ledger
//! the figures fall back to the Engine's projection from the onboarding
//! numbers (two simulated months of growth).

use tracing::debug;

use crate::db::{Database, MonthlyTotals};
use crate::error::Result;
use crate::health::{self, PROJECTION_PERIODS};
use crate::models::{BusinessProfile, DashboardMetrics};

/// Compute dashboard metrics from a profile and optional ledger totals.
///
/// Pure given its inputs; the Engine is invoked with whichever revenue and
/// expense figures are available (observed totals preferred, onboarding
/// estimates otherwise).
pub fn build_metrics(profile: &BusinessProfile, totals: Option<MonthlyTotals>) -> DashboardMetrics {
    let (monthly_income, monthly_expenses) = match totals {
        Some(t) if t.count > 0 => (t.income, t.expenses),
        _ => (profile.monthly_revenue, profile.monthly_expenses),
    };

    let current_balance = health::project_balance(
        profile.starting_balance,
        monthly_income,
        monthly_expenses,
        PROJECTION_PERIODS,
    );
    let score = health::health_score(monthly_income, monthly_expenses);
    let runway = health::cash_runway(current_balance, monthly_expenses - monthly_income);
    let insights = health::generate_insights(&profile.business_type, score);

    DashboardMetrics {
        business_name: profile.business_name.clone(),
        business_type: profile.business_type.clone(),
        current_balance,
        monthly_income,
        monthly_expenses,
        health_score: score,
        cash_runway: runway,
        insights,
    }
}

/// Fetch the profile and ledger totals for an email and assemble metrics.
///
/// Returns `Ok(None)` when no profile exists yet (onboarding not completed).
pub fn load_metrics(db: &Database, email: &str) -> Result<Option<DashboardMetrics>> {
    let profile = match db.get_profile(email)? {
        Some(profile) => profile,
        None => return Ok(None),
    };

    let totals = db.monthly_totals()?;
    debug!(
        email,
        entries = totals.count,
        "Assembling dashboard metrics"
    );

    Ok(Some(build_metrics(&profile, Some(totals))))
}
