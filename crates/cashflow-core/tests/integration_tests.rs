//! End-to-end tests across the Engine, parsing boundary, and database

use cashflow_core::health::{self, InsightPriority, InsightType, RunwayDays, RunwayStatus};
use cashflow_core::models::{NewProfile, NewTransaction, TransactionType};
use cashflow_core::{build_metrics, load_metrics, parse_amount, Database};

fn profile_fixture() -> NewProfile {
    NewProfile {
        email: "tunde@example.com".to_string(),
        first_name: "Tunde".to_string(),
        last_name: "Bello".to_string(),
        business_name: "Bello Logistics".to_string(),
        business_type: "Transportation".to_string(),
        business_location: "Abuja".to_string(),
        phone_number: "+2348098765432".to_string(),
        starting_balance: "₦600,000".to_string(),
        monthly_revenue: "₦150,000".to_string(),
        monthly_expenses: "₦160,000".to_string(),
        financial_goal: "replace_income".to_string(),
        notification_preference: Default::default(),
    }
}

#[test]
fn health_score_is_total_and_bounded() {
    let cases = [
        (0.0, 0.0),
        (0.0, 99999.0),
        (1.0, 0.0),
        (50000.0, 30000.0),
        (10000.0, 30000.0),
        (f64::NAN, 100.0),
        (100.0, f64::INFINITY),
        (-500.0, 100.0),
    ];
    for (revenue, expenses) in cases {
        let score = health::health_score(revenue, expenses);
        assert!(score <= 100, "score {} out of range", score);
    }
}

#[test]
fn runway_formula_matches_contract() {
    // days = round(balance / burn * 30)
    let runway = health::cash_runway(600000.0, 10000.0);
    assert_eq!(runway.days, RunwayDays::Days(1800));
    assert_eq!(runway.status, RunwayStatus::Good);

    let runway = health::cash_runway(270000.0, 3000.0);
    assert_eq!(runway.days, RunwayDays::Days(2700));
}

#[test]
fn onboarding_figures_flow_through_to_dashboard() {
    let db = Database::in_memory().unwrap();
    db.upsert_profile(&profile_fixture()).unwrap();

    let metrics = load_metrics(&db, "tunde@example.com").unwrap().unwrap();

    // Burning ₦10,000/month from ₦600,000 - 2 simulated months of losses
    // leaves ₦580,000; 58 months of runway = 1740 days.
    assert_eq!(metrics.current_balance, 580000.0);
    assert_eq!(metrics.health_score, 0);
    assert_eq!(metrics.cash_runway.days, RunwayDays::Days(1740));
    assert_eq!(metrics.cash_runway.status, RunwayStatus::Good);
    assert_eq!(metrics.cash_runway.monthly_burn, Some(10000.0));

    // Transport business: health-tier insight + generic insight only
    assert_eq!(metrics.insights.len(), 2);
    assert_eq!(metrics.insights[0].insight_type, InsightType::Warning);
    assert_eq!(metrics.insights[0].priority, InsightPriority::High);
}

#[test]
fn ledger_entries_replace_onboarding_estimates() {
    let db = Database::in_memory().unwrap();
    db.upsert_profile(&profile_fixture()).unwrap();

    let today = chrono::Local::now().date_naive();
    db.insert_transaction(&NewTransaction {
        description: "Haulage contract".to_string(),
        amount: 250000.0,
        category: "Sales".to_string(),
        tx_type: TransactionType::Income,
        date: today,
    })
    .unwrap();
    db.insert_transaction(&NewTransaction {
        description: "Fuel".to_string(),
        amount: 50000.0,
        category: "Operations".to_string(),
        tx_type: TransactionType::Expense,
        date: today,
    })
    .unwrap();

    let metrics = load_metrics(&db, "tunde@example.com").unwrap().unwrap();
    assert_eq!(metrics.monthly_income, 250000.0);
    assert_eq!(metrics.monthly_expenses, 50000.0);
    // Net positive now: unbounded runway, healthy score
    assert!(metrics.cash_runway.days.is_infinite());
    assert_eq!(metrics.health_score, 80);
    assert_eq!(metrics.insights[0].insight_type, InsightType::Success);
}

#[test]
fn dashboard_payload_serializes_like_the_api() {
    let db = Database::in_memory().unwrap();
    db.upsert_profile(&profile_fixture()).unwrap();
    let profile = db.get_profile("tunde@example.com").unwrap().unwrap();

    let metrics = build_metrics(&profile, None);
    let json = serde_json::to_value(&metrics).unwrap();

    assert_eq!(json["businessName"], "Bello Logistics");
    assert!(json["cashRunway"]["days"].is_number());
    assert_eq!(json["cashRunway"]["status"], "good");
    assert_eq!(json["insights"][0]["type"], "warning");
    assert_eq!(json["insights"][0]["priority"], "high");
}

#[test]
fn currency_strings_never_break_the_pipeline() {
    let db = Database::in_memory().unwrap();

    let mut profile = profile_fixture();
    profile.starting_balance = "garbage".to_string();
    profile.monthly_revenue = String::new();
    profile.monthly_expenses = "₦".to_string();
    db.upsert_profile(&profile).unwrap();

    // Everything degrades to zero: score 0, runway infinite (burn 0)
    let metrics = load_metrics(&db, "tunde@example.com").unwrap().unwrap();
    assert_eq!(metrics.current_balance, 0.0);
    assert_eq!(metrics.health_score, 0);
    assert_eq!(metrics.cash_runway.status, RunwayStatus::Positive);

    assert_eq!(parse_amount("₦1,000,000"), 1_000_000.0);
}
