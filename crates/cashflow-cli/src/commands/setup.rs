//! Onboarding command: collect the business profile and preview projections
//!
//! Mirrors the web app's setup wizard. Required fields are validated in the
//! same step order the wizard gates them, the Engine renders a projection
//! preview, and the profile is persisted unless --dry-run is set.

use std::path::Path;

use anyhow::Result;

use cashflow_core::health;
use cashflow_core::models::{NewProfile, NotificationPreference};
use cashflow_core::money::{format_naira, parse_amount};

use super::open_db;

/// The onboarding form, all fields as entered (currency fields are free text)
pub struct SetupForm {
    pub business_name: String,
    pub business_type: String,
    pub location: String,
    pub email: String,
    pub starting_balance: String,
    pub monthly_revenue: String,
    pub monthly_expenses: String,
    pub goal: String,
    pub phone: String,
}

impl SetupForm {
    /// Validate required fields in wizard step order.
    ///
    /// Step 1 is the business identity, step 2 the financial figures,
    /// step 3 the goal. The first missing field is reported, matching
    /// the web wizard's one-step-at-a-time gating.
    fn validate(&self) -> std::result::Result<(), &'static str> {
        if self.business_name.trim().is_empty() {
            return Err("--business-name is required");
        }
        if self.business_type.trim().is_empty() {
            return Err("--business-type is required");
        }
        if self.email.trim().is_empty() {
            return Err("--email is required");
        }
        if self.starting_balance.trim().is_empty() {
            return Err("--starting-balance is required");
        }
        if self.monthly_revenue.trim().is_empty() {
            return Err("--monthly-revenue is required");
        }
        if self.monthly_expenses.trim().is_empty() {
            return Err("--monthly-expenses is required");
        }
        Ok(())
    }
}

pub fn cmd_setup(db_path: &Path, form: &SetupForm, dry_run: bool) -> Result<()> {
    if let Err(msg) = form.validate() {
        anyhow::bail!("{}", msg);
    }

    let balance = parse_amount(&form.starting_balance);
    let revenue = parse_amount(&form.monthly_revenue);
    let expenses = parse_amount(&form.monthly_expenses);

    let months = health::runway_months(balance, expenses);
    let margin = health::profit_margin(revenue, expenses);
    let profit = health::monthly_profit(revenue, expenses);
    let projected = health::project_balance(balance, revenue, expenses, health::PROJECTION_PERIODS);
    let score = health::health_score(revenue, expenses);

    println!();
    println!("📋 Projection preview for {}", form.business_name);
    println!("   ─────────────────────────────────────────────────");
    println!("   Cash on hand:       {}", format_naira(balance));
    println!("   Monthly revenue:    {}", format_naira(revenue));
    println!("   Monthly expenses:   {}", format_naira(expenses));
    println!();
    println!("   Monthly profit:     {}", format_naira(profit));
    println!("   Profit margin:      {:.0}%", margin);
    println!("   Runway (months):    {}", months);
    println!("   Projected balance:  {}", format_naira(projected));
    println!("   Health score:       {}/100", score);
    println!();

    if dry_run {
        println!("   (dry run - nothing saved)");
        return Ok(());
    }

    let db = open_db(db_path)?;
    let profile = NewProfile {
        email: form.email.clone(),
        first_name: String::new(),
        last_name: String::new(),
        business_name: form.business_name.clone(),
        business_type: form.business_type.clone(),
        business_location: form.location.clone(),
        phone_number: form.phone.clone(),
        starting_balance: form.starting_balance.clone(),
        monthly_revenue: form.monthly_revenue.clone(),
        monthly_expenses: form.monthly_expenses.clone(),
        financial_goal: form.goal.clone(),
        notification_preference: NotificationPreference::default(),
    };
    db.upsert_profile(&profile)?;

    println!("✅ Profile saved for {}", form.email);
    println!("   Run 'cashflow dashboard' to see your full dashboard.");

    Ok(())
}
