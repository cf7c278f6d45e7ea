//! Financial Health Engine
//!
//! Pure computation over a business's starting balance, monthly revenue, and
//! monthly expenses: projected balance, 0-100 health score, cash-runway
//! estimate with a status tier, and rule-based advisory insights.
//!
//! Every function here is synchronous, side-effect free, and total: zero,
//! missing, or non-finite inputs degrade to 0 instead of erroring.

mod engine;
mod types;

pub use engine::{
    cash_runway, category_insights, generate_insights, health_score, monthly_profit,
    profit_margin, project_balance, runway_months, PROJECTION_PERIODS,
};
pub use types::{CashRunway, Insight, InsightPriority, InsightType, RunwayDays, RunwayStatus};
