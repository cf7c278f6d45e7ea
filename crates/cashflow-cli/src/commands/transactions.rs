//! Ledger commands (list, add, delete)

use anyhow::Result;
use chrono::NaiveDate;

use cashflow_core::db::Database;
use cashflow_core::models::{NewTransaction, TransactionType};
use cashflow_core::money::{format_naira, parse_amount};

use super::truncate;

pub fn cmd_transactions_list(db: &Database, limit: u32) -> Result<()> {
    let transactions = db.list_transactions(Some(limit))?;

    if transactions.is_empty() {
        println!("No transactions yet. Record one with:");
        println!("  cashflow transactions add --description \"Sales\" --amount 45000 --kind income");
        return Ok(());
    }

    println!();
    println!("🧾 Transactions (most recent first)");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:<6} {:<12} {:<30} {:<10} {:>14}",
        "ID", "Date", "Description", "Type", "Amount"
    );

    for tx in &transactions {
        let signed = match tx.tx_type {
            TransactionType::Income => format!("+{}", format_naira(tx.amount)),
            TransactionType::Expense => format!("-{}", format_naira(tx.amount)),
        };
        println!(
            "   {:<6} {:<12} {:<30} {:<10} {:>14}",
            tx.id,
            tx.date.to_string(),
            truncate(&tx.description, 30),
            tx.tx_type.as_str(),
            signed,
        );
    }

    println!();
    println!("   {} shown", transactions.len());
    Ok(())
}

pub fn cmd_transactions_add(
    db: &Database,
    description: &str,
    amount: &str,
    kind: &str,
    category: &str,
    date: Option<&str>,
) -> Result<()> {
    let tx_type: TransactionType = kind
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let date = match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date '{}' (expected YYYY-MM-DD)", raw))?,
        None => chrono::Local::now().date_naive(),
    };

    let tx = NewTransaction {
        description: description.to_string(),
        amount: parse_amount(amount),
        category: category.to_string(),
        tx_type,
        date,
    };
    let id = db.insert_transaction(&tx)?;

    println!(
        "✅ Recorded {} {} ({}) as #{}",
        tx_type.as_str(),
        format_naira(tx.amount),
        description,
        id
    );
    Ok(())
}

pub fn cmd_transactions_delete(db: &Database, id: i64) -> Result<()> {
    db.delete_transaction(id)?;
    println!("✅ Deleted transaction #{}", id);
    Ok(())
}
