//! Status and dashboard rendering

use std::path::Path;

use anyhow::Result;

use cashflow_core::health::{InsightType, RunwayDays, RunwayStatus};
use cashflow_core::load_metrics;
use cashflow_core::money::format_naira;

use super::open_db;

pub fn cmd_status(db_path: &Path) -> Result<()> {
    use std::fs;

    println!();
    println!("📊 CashFlow Status");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Database: {}", db_path.display());

    if db_path.exists() {
        if let Ok(metadata) = fs::metadata(db_path) {
            let size_kb = metadata.len() as f64 / 1024.0;
            if size_kb < 1024.0 {
                println!("   Size: {:.1} KB", size_kb);
            } else {
                println!("   Size: {:.1} MB", size_kb / 1024.0);
            }
        }
    } else {
        println!("   Size: (database not initialized)");
    }

    if db_path.exists() {
        match open_db(db_path) {
            Ok(db) => {
                let profile = db.get_default_profile()?;
                let transactions = db.count_transactions()?;

                println!();
                match profile {
                    Some(p) => {
                        println!("   Business: {} ({})", p.business_name, p.business_type);
                        println!("   Email: {}", p.email);
                    }
                    None => {
                        println!("   Business: (not set up - run 'cashflow setup')");
                    }
                }
                println!("   Transactions: {}", transactions);
            }
            Err(e) => {
                println!();
                println!("   ❌ Error opening database: {}", e);
            }
        }
    }

    println!();
    Ok(())
}

pub fn cmd_dashboard(db_path: &Path, email: Option<&str>) -> Result<()> {
    let db = open_db(db_path)?;

    let metrics = match email {
        Some(email) => load_metrics(&db, email)?,
        None => match db.get_default_profile()? {
            Some(profile) => load_metrics(&db, &profile.email)?,
            None => None,
        },
    };

    let metrics = match metrics {
        Some(metrics) => metrics,
        None => {
            println!("No business profile found. Set one up with:");
            println!("  cashflow setup --business-name \"...\" --email you@example.com ...");
            return Ok(());
        }
    };

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│          💰 CashFlow Dashboard          │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {} ({})", metrics.business_name, metrics.business_type);
    println!();
    println!("  Current Balance:   {}", format_naira(metrics.current_balance));
    println!("  Monthly Income:    {}", format_naira(metrics.monthly_income));
    println!("  Monthly Expenses:  {}", format_naira(metrics.monthly_expenses));
    println!();

    let score_icon = if metrics.health_score >= 60 {
        "💚"
    } else if metrics.health_score >= 30 {
        "💛"
    } else {
        "❤️"
    };
    println!("  {} Health Score: {}/100", score_icon, metrics.health_score);

    let runway = &metrics.cash_runway;
    let runway_icon = match runway.status {
        RunwayStatus::Positive | RunwayStatus::Good => "✅",
        RunwayStatus::Warning => "⚠️",
        RunwayStatus::Critical => "🚨",
    };
    match runway.days {
        RunwayDays::Infinite => println!("  {} Cash Runway: ∞ (cash-flow positive)", runway_icon),
        RunwayDays::Days(days) => println!("  {} Cash Runway: {} days", runway_icon, days),
    }
    println!("     {}", runway.message);
    if let Some(burn) = runway.monthly_burn {
        println!("     Monthly burn: {}", format_naira(burn));
    }

    if !metrics.insights.is_empty() {
        println!();
        println!("  💡 Insights");
        for insight in &metrics.insights {
            let icon = match insight.insight_type {
                InsightType::Warning => "⚠️",
                InsightType::Success => "✅",
                InsightType::Info => "ℹ️",
            };
            println!("     {} {}", icon, insight.message);
        }
    }

    println!();
    Ok(())
}
