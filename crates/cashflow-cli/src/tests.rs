//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::path::PathBuf;

use cashflow_core::db::Database;
use cashflow_core::models::TransactionType;
use tempfile::TempDir;

use crate::commands::{self, truncate, SetupForm};

fn db_path_in(dir: &TempDir) -> PathBuf {
    dir.path().join("cashflow.db")
}

fn sample_form() -> SetupForm {
    SetupForm {
        business_name: "Ada's Kitchen".to_string(),
        business_type: "Restaurant/Food Service".to_string(),
        location: "Lagos".to_string(),
        email: "ada@example.com".to_string(),
        starting_balance: "₦500,000".to_string(),
        monthly_revenue: "350000".to_string(),
        monthly_expenses: "₦280,000".to_string(),
        goal: "build_wealth".to_string(),
        phone: String::new(),
    }
}

// ========== Init / Status ==========

#[test]
fn test_cmd_init_creates_database() {
    let dir = TempDir::new().unwrap();
    let path = db_path_in(&dir);

    commands::cmd_init(&path).unwrap();
    assert!(path.exists());

    // Idempotent
    commands::cmd_init(&path).unwrap();
}

#[test]
fn test_cmd_status_without_database() {
    let dir = TempDir::new().unwrap();
    let result = commands::cmd_status(&db_path_in(&dir));
    assert!(result.is_ok());
}

// ========== Setup ==========

#[test]
fn test_cmd_setup_persists_parsed_amounts() {
    let dir = TempDir::new().unwrap();
    let path = db_path_in(&dir);

    commands::cmd_setup(&path, &sample_form(), false).unwrap();

    let db = Database::new(path.to_str().unwrap()).unwrap();
    let profile = db.get_profile("ada@example.com").unwrap().unwrap();
    assert_eq!(profile.business_name, "Ada's Kitchen");
    assert_eq!(profile.starting_balance, 500000.0);
    assert_eq!(profile.monthly_expenses, 280000.0);
}

#[test]
fn test_cmd_setup_dry_run_saves_nothing() {
    let dir = TempDir::new().unwrap();
    let path = db_path_in(&dir);

    commands::cmd_setup(&path, &sample_form(), true).unwrap();
    assert!(!path.exists());
}

#[test]
fn test_cmd_setup_requires_business_name() {
    let dir = TempDir::new().unwrap();
    let mut form = sample_form();
    form.business_name = "  ".to_string();

    let result = commands::cmd_setup(&db_path_in(&dir), &form, false);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("--business-name"));
}

#[test]
fn test_cmd_setup_requires_financial_figures() {
    let dir = TempDir::new().unwrap();
    let mut form = sample_form();
    form.monthly_revenue = String::new();

    let result = commands::cmd_setup(&db_path_in(&dir), &form, false);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("--monthly-revenue"));
}

// ========== Dashboard / Insights ==========

#[test]
fn test_cmd_dashboard_without_profile() {
    let dir = TempDir::new().unwrap();
    let path = db_path_in(&dir);
    commands::cmd_init(&path).unwrap();

    // Prints the onboarding hint rather than erroring
    commands::cmd_dashboard(&path, None).unwrap();
}

#[test]
fn test_cmd_dashboard_with_profile() {
    let dir = TempDir::new().unwrap();
    let path = db_path_in(&dir);
    commands::cmd_setup(&path, &sample_form(), false).unwrap();

    commands::cmd_dashboard(&path, None).unwrap();
    commands::cmd_dashboard(&path, Some("ada@example.com")).unwrap();
}

#[test]
fn test_cmd_insights_with_profile() {
    let dir = TempDir::new().unwrap();
    let path = db_path_in(&dir);
    commands::cmd_setup(&path, &sample_form(), false).unwrap();

    commands::cmd_insights(&path, None).unwrap();
}

// ========== Transactions ==========

#[test]
fn test_cmd_transactions_add_and_list() {
    let db = Database::in_memory().unwrap();

    commands::cmd_transactions_add(&db, "Sales Revenue", "₦45,000", "income", "Sales", None)
        .unwrap();
    commands::cmd_transactions_add(
        &db,
        "Office Supplies",
        "8000",
        "expense",
        "Operations",
        Some("2026-08-20"),
    )
    .unwrap();

    let all = db.list_transactions(None).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].amount, 45000.0);
    assert_eq!(all[0].tx_type, TransactionType::Income);
    assert_eq!(all[1].date.to_string(), "2026-08-20");

    commands::cmd_transactions_list(&db, 20).unwrap();
}

#[test]
fn test_cmd_transactions_add_rejects_bad_kind() {
    let db = Database::in_memory().unwrap();
    let result = commands::cmd_transactions_add(&db, "Sales", "1000", "transfer", "", None);
    assert!(result.is_err());
}

#[test]
fn test_cmd_transactions_add_rejects_bad_date() {
    let db = Database::in_memory().unwrap();
    let result =
        commands::cmd_transactions_add(&db, "Sales", "1000", "income", "", Some("20/08/2026"));
    assert!(result.is_err());
}

#[test]
fn test_cmd_transactions_delete() {
    let db = Database::in_memory().unwrap();
    commands::cmd_transactions_add(&db, "Sales", "1000", "income", "", None).unwrap();
    let id = db.list_transactions(None).unwrap()[0].id;

    commands::cmd_transactions_delete(&db, id).unwrap();
    assert_eq!(db.count_transactions().unwrap(), 0);

    // Deleting again is an error
    assert!(commands::cmd_transactions_delete(&db, id).is_err());
}

// ========== Session ==========

#[test]
fn test_logout_clears_corrupted_session_file() {
    use cashflow_core::session::SessionStore;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = SessionStore::at(&path);
    let email = commands::session::clear_session(&store).unwrap();
    assert_eq!(email, None);
    assert!(!path.exists());
}

#[test]
fn test_logout_reports_signed_in_email() {
    use cashflow_core::session::{Session, SessionStore};

    let dir = TempDir::new().unwrap();
    let store = SessionStore::at(dir.path().join("session.json"));
    store.save(&Session::new("ada@example.com", "tok_abc")).unwrap();

    let email = commands::session::clear_session(&store).unwrap();
    assert_eq!(email.as_deref(), Some("ada@example.com"));
    assert!(store.load().unwrap().is_none());
}

// ========== Helpers ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a longer description", 10), "a longe...");
}

#[test]
fn test_truncate_multibyte_descriptions() {
    // Naira symbols are 3 bytes each; truncation must count chars, not
    // bytes, or the cut can land mid-character and panic
    let mixed = "Paid ₦45,000 to Mama Nkechi for weekly market stock";
    let cut = truncate(mixed, 30);
    assert_eq!(cut.chars().count(), 30);
    assert!(cut.ends_with("..."));

    assert_eq!(truncate("₦₦₦₦₦", 4), "₦...");
    assert_eq!(truncate("₦₦₦", 3), "₦₦₦");
}
