//! Engine computations: balance projection, health score, cash runway,
//! and rule-based insights
//!
//! All inputs are coerced to safe defaults before arithmetic: non-finite
//! values become 0, and a revenue of 0 short-circuits the score ratio.
//! Nothing in this module can panic on user-supplied figures.

use crate::models::BusinessCategory;

use super::types::{CashRunway, Insight, InsightPriority, InsightType, RunwayDays, RunwayStatus};

/// Months of simulated growth applied when previewing the current balance
/// from onboarding figures (no real ledger yet).
pub const PROJECTION_PERIODS: u32 = 2;

/// Runway longer than this many days is a healthy tier.
const GOOD_RUNWAY_DAYS: u64 = 180;

/// Runway at or below this many days needs immediate action.
const CRITICAL_RUNWAY_DAYS: u64 = 90;

/// Health score below this is critically low.
const CRITICAL_SCORE: u8 = 30;

/// Health score below this needs attention.
const ATTENTION_SCORE: u8 = 60;

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Project the balance after `periods` months of net cash flow.
///
/// `starting + (revenue - expenses) * periods`. Used with
/// [`PROJECTION_PERIODS`] for the dashboard preview.
pub fn project_balance(starting: f64, revenue: f64, expenses: f64, periods: u32) -> f64 {
    let starting = sanitize(starting);
    let revenue = sanitize(revenue);
    let expenses = sanitize(expenses);

    starting + (revenue - expenses) * periods as f64
}

/// Compute the 0-100 health score from monthly revenue and expenses.
///
/// The raw value is the net margin as a percentage of revenue, rounded.
/// Revenue of 0 yields 0 (the ratio is undefined, not an error). The result
/// is clamped to [0, 100], so every non-positive margin reports the same 0:
/// callers may read a 0 as "not profitable", never as a magnitude of loss.
pub fn health_score(revenue: f64, expenses: f64) -> u8 {
    let revenue = sanitize(revenue);
    let expenses = sanitize(expenses);

    if revenue <= 0.0 {
        return 0;
    }

    let net_monthly = revenue - expenses;
    let raw = ((net_monthly / revenue) * 100.0).round();
    raw.clamp(0.0, 100.0) as u8
}

/// Estimate the cash runway from the current balance and monthly burn.
///
/// `monthly_burn` is `expenses - revenue`: positive means the business is
/// losing money. A non-positive burn (including exactly 0) is the unbounded
/// case, so the division below can never see a zero divisor. Bounded days
/// are `round(balance / burn * 30)` with the balance floored at 0, and the
/// status tiers partition the day count strictly: more than 180 is good,
/// 91-180 warns, 90 or fewer is critical.
pub fn cash_runway(current_balance: f64, monthly_burn: f64) -> CashRunway {
    let current_balance = sanitize(current_balance).max(0.0);
    let monthly_burn = sanitize(monthly_burn);

    if monthly_burn <= 0.0 {
        return CashRunway {
            days: RunwayDays::Infinite,
            status: RunwayStatus::Positive,
            message: "Your business is generating positive cash flow!".to_string(),
            monthly_burn: None,
        };
    }

    let months_remaining = current_balance / monthly_burn;
    let days = (months_remaining * 30.0).round() as u64;

    let (status, message) = if days > GOOD_RUNWAY_DAYS {
        (RunwayStatus::Good, "You have a healthy cash runway")
    } else if days > CRITICAL_RUNWAY_DAYS {
        (RunwayStatus::Warning, "Monitor cash flow closely")
    } else {
        (
            RunwayStatus::Critical,
            "Take immediate action to improve cash flow",
        )
    };

    CashRunway {
        days: RunwayDays::Days(days),
        status,
        message: message.to_string(),
        monthly_burn: Some(monthly_burn),
    }
}

/// Generate the advisory insight list for a business.
///
/// Ordering is a contract (UIs may show only the first N): the health-tier
/// insight always comes first, the category insight (retail/restaurant
/// seasonal stock) second when applicable, and the generic pending-payments
/// insight last.
///
/// The seasonal trigger fires on the classified category, not on literal
/// substrings, so types like "Fast Food" or "Coffee Shop" qualify alongside
/// the ones naming "retail"/"restaurant" outright. Intentional widening: the
/// keyword table in [`BusinessCategory::classify`] owns what counts as a
/// retail or restaurant business.
pub fn generate_insights(business_type: &str, health_score: u8) -> Vec<Insight> {
    let mut insights = Vec::with_capacity(3);

    if health_score < CRITICAL_SCORE {
        insights.push(Insight::new(
            InsightType::Warning,
            "Cash flow is critically low. Consider reducing expenses or increasing revenue urgently.",
            InsightPriority::High,
        ));
    } else if health_score < ATTENTION_SCORE {
        insights.push(Insight::new(
            InsightType::Warning,
            "Cash flow needs attention. Review upcoming expenses and optimize where possible.",
            InsightPriority::Medium,
        ));
    } else {
        insights.push(Insight::new(
            InsightType::Success,
            "Cash flow is healthy! Consider investing in growth opportunities.",
            InsightPriority::Low,
        ));
    }

    let category = BusinessCategory::classify(business_type);
    if matches!(
        category,
        BusinessCategory::Retail | BusinessCategory::Restaurant
    ) {
        insights.push(Insight::new(
            InsightType::Info,
            "Peak season approaching. Consider stocking up inventory 2 weeks early.",
            InsightPriority::Medium,
        ));
    }

    insights.push(Insight::new(
        InsightType::Info,
        "You have 3 pending payments this week. Follow up to ensure timely collection.",
        InsightPriority::Medium,
    ));

    insights
}

/// Category-specific recommendations shown alongside the main insight list.
///
/// Empty for categories without a template.
pub fn category_insights(category: BusinessCategory) -> Vec<Insight> {
    match category {
        BusinessCategory::Restaurant => vec![Insight::new(
            InsightType::Info,
            "Food costs typically account for 28-35% of revenue. Monitor your food cost percentage.",
            InsightPriority::Medium,
        )],
        BusinessCategory::Retail => vec![Insight::new(
            InsightType::Info,
            "Consider seasonal inventory planning to optimize cash flow during peak periods.",
            InsightPriority::Medium,
        )],
        _ => vec![],
    }
}

/// Whole months the starting balance covers at the current expense rate.
///
/// Setup-wizard preview figure. 0 when expenses are not positive.
pub fn runway_months(starting_balance: f64, monthly_expenses: f64) -> u64 {
    let starting_balance = sanitize(starting_balance).max(0.0);
    let monthly_expenses = sanitize(monthly_expenses);

    if monthly_expenses <= 0.0 {
        return 0;
    }

    (starting_balance / monthly_expenses).floor() as u64
}

/// Net margin as a percentage of revenue (unclamped). 0 when revenue is 0.
pub fn profit_margin(revenue: f64, expenses: f64) -> f64 {
    let revenue = sanitize(revenue);
    let expenses = sanitize(expenses);

    if revenue <= 0.0 {
        return 0.0;
    }

    (revenue - expenses) / revenue * 100.0
}

/// Net monthly cash flow
pub fn monthly_profit(revenue: f64, expenses: f64) -> f64 {
    sanitize(revenue) - sanitize(expenses)
}
