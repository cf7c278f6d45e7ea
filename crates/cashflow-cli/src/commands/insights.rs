//! Advisory insight rendering

use std::path::Path;

use anyhow::Result;

use cashflow_core::health::{self, InsightType};
use cashflow_core::models::BusinessCategory;

use super::open_db;

pub fn cmd_insights(db_path: &Path, email: Option<&str>) -> Result<()> {
    let db = open_db(db_path)?;

    let profile = match email {
        Some(email) => db.get_profile(email)?,
        None => db.get_default_profile()?,
    };

    let profile = match profile {
        Some(profile) => profile,
        None => {
            println!("No business profile found. Set one up with 'cashflow setup'.");
            return Ok(());
        }
    };

    let totals = db.monthly_totals()?;
    let (income, expenses) = if totals.count > 0 {
        (totals.income, totals.expenses)
    } else {
        (profile.monthly_revenue, profile.monthly_expenses)
    };
    let score = health::health_score(income, expenses);

    let category = BusinessCategory::classify(&profile.business_type);
    let mut insights = health::generate_insights(&profile.business_type, score);
    insights.extend(health::category_insights(category));

    println!();
    println!("💡 Insights for {}", profile.business_name);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Category: {}  Health score: {}/100", category, score);
    println!();

    for insight in &insights {
        let icon = match insight.insight_type {
            InsightType::Warning => "⚠️",
            InsightType::Success => "✅",
            InsightType::Info => "ℹ️",
        };
        println!("   {} {}", icon, insight.message);
    }

    println!();
    Ok(())
}
