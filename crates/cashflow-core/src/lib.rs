//! CashFlow Core Library
//!
//! Shared functionality for the CashFlow small-business cash-flow tracker:
//! - Financial Health Engine (balance projection, health score, cash runway,
//!   rule-based insights)
//! - Amount parsing for free-text currency input and naira formatting
//! - Database access and migrations (profiles, transactions)
//! - Dashboard metric assembly with Engine fallback
//! - Versioned local session store with legacy migration

pub mod dashboard;
pub mod db;
pub mod error;
pub mod health;
pub mod models;
pub mod money;
pub mod session;

pub use dashboard::{build_metrics, load_metrics};
pub use db::Database;
pub use error::{Error, Result};
pub use health::{
    cash_runway, generate_insights, health_score, project_balance, CashRunway, Insight,
    InsightPriority, InsightType, RunwayDays, RunwayStatus,
};
pub use models::{
    BusinessCategory, BusinessProfile, DashboardMetrics, NewProfile, NewTransaction, Period,
    Transaction, TransactionType,
};
pub use money::{format_naira, parse_amount};
pub use session::{Session, SessionStore};
