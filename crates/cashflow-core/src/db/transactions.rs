//! Ledger operations and dashboard aggregates

use chrono::NaiveDate;
use rusqlite::{params, Row};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{NewTransaction, Period, Transaction};

/// Income/expense totals over a window, for the dashboard metric cards
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyTotals {
    pub income: f64,
    pub expenses: f64,
    pub count: u64,
}

fn row_to_transaction(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    let tx_type: String = row.get("tx_type")?;
    let date: String = row.get("date")?;
    let created_at: String = row.get("created_at")?;

    Ok(Transaction {
        id: row.get("id")?,
        description: row.get("description")?,
        amount: row.get("amount")?,
        category: row.get("category")?,
        tx_type: tx_type
            .parse()
            .map_err(|e: String| rusqlite::Error::InvalidColumnType(
                0,
                e,
                rusqlite::types::Type::Text,
            ))?,
        date: NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .unwrap_or_else(|_| chrono::Local::now().date_naive()),
        created_at: parse_datetime(&created_at),
    })
}

impl Database {
    /// Insert a ledger entry; the amount is stored as a non-negative magnitude
    pub fn insert_transaction(&self, tx: &NewTransaction) -> Result<i64> {
        if tx.description.trim().is_empty() {
            return Err(Error::InvalidData(
                "transaction description is required".to_string(),
            ));
        }

        let amount = if tx.amount.is_finite() { tx.amount.abs() } else { 0.0 };

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO transactions (description, amount, category, tx_type, date)
            VALUES (?, ?, ?, ?, ?)
            "#,
            params![
                tx.description,
                amount,
                tx.category,
                tx.tx_type.as_str(),
                tx.date.to_string(),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// List transactions, most recent first
    pub fn list_transactions(&self, limit: Option<u32>) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let limit = limit.unwrap_or(100);

        let mut stmt = conn.prepare(
            "SELECT * FROM transactions ORDER BY date DESC, id DESC LIMIT ?",
        )?;
        let rows = stmt.query_map(params![limit], row_to_transaction)?;

        let mut transactions = Vec::new();
        for row in rows {
            transactions.push(row?);
        }
        Ok(transactions)
    }

    /// List transactions within a period ending today
    pub fn list_transactions_by_period(&self, period: Period) -> Result<Vec<Transaction>> {
        let since = chrono::Local::now().date_naive() - chrono::Duration::days(period.days());

        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT * FROM transactions WHERE date >= ? ORDER BY date DESC, id DESC",
        )?;
        let rows = stmt.query_map(params![since.to_string()], row_to_transaction)?;

        let mut transactions = Vec::new();
        for row in rows {
            transactions.push(row?);
        }
        Ok(transactions)
    }

    /// Delete a transaction by id
    pub fn delete_transaction(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM transactions WHERE id = ?", params![id])?;

        if deleted == 0 {
            return Err(Error::NotFound(format!("transaction {}", id)));
        }
        Ok(())
    }

    /// Total number of ledger entries
    pub fn count_transactions(&self) -> Result<u64> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Income/expense totals since a date (inclusive)
    pub fn totals_since(&self, since: NaiveDate) -> Result<MonthlyTotals> {
        let conn = self.conn()?;
        conn.query_row(
            r#"
            SELECT
                COALESCE(SUM(CASE WHEN tx_type = 'income' THEN amount END), 0),
                COALESCE(SUM(CASE WHEN tx_type = 'expense' THEN amount END), 0),
                COUNT(*)
            FROM transactions WHERE date >= ?
            "#,
            params![since.to_string()],
            |row| {
                Ok(MonthlyTotals {
                    income: row.get(0)?,
                    expenses: row.get(1)?,
                    count: row.get::<_, i64>(2)? as u64,
                })
            },
        )
        .map_err(Into::into)
    }

    /// Totals for the trailing 30 days, the dashboard's "monthly" window
    pub fn monthly_totals(&self) -> Result<MonthlyTotals> {
        let since = chrono::Local::now().date_naive() - chrono::Duration::days(30);
        self.totals_since(since)
    }
}
