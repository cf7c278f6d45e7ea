//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CashFlow - Cash-flow tracking for small businesses
#[derive(Parser)]
#[command(name = "cashflow")]
#[command(about = "Track cash flow, health score, and runway for your business", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "cashflow.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Set up your business profile (onboarding)
    Setup {
        /// Business name
        #[arg(long)]
        business_name: String,

        /// Business type (e.g. "Retail/Shop", "Restaurant/Food Service")
        #[arg(long)]
        business_type: String,

        /// Business location
        #[arg(long, default_value = "")]
        location: String,

        /// Account email
        #[arg(long)]
        email: String,

        /// Cash on hand today (accepts "₦500,000" or "500000")
        #[arg(long)]
        starting_balance: String,

        /// Expected monthly revenue
        #[arg(long)]
        monthly_revenue: String,

        /// Expected monthly expenses
        #[arg(long)]
        monthly_expenses: String,

        /// Primary financial goal (supplement_income, replace_income,
        /// build_wealth, financial_independence, other)
        #[arg(long, default_value = "other")]
        goal: String,

        /// Phone number for alerts
        #[arg(long, default_value = "")]
        phone: String,

        /// Preview the projections without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the dashboard (balance, health score, runway, insights)
    Dashboard {
        /// Profile email (defaults to the first stored profile)
        #[arg(long)]
        email: Option<String>,
    },

    /// Show database status
    Status,

    /// Manage transactions
    Transactions {
        #[command(subcommand)]
        action: Option<TransactionsAction>,
    },

    /// Show advisory insights for the business
    Insights {
        /// Profile email (defaults to the first stored profile)
        #[arg(long)]
        email: Option<String>,
    },

    /// Save a session token locally
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Bearer token issued by the identity provider
        #[arg(long)]
        token: String,
    },

    /// Clear the local session
    Logout,

    /// Start the REST API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Disable authentication (for local development only)
        ///
        /// WARNING: Do not use this flag when exposing the server to a
        /// network. By default the server requires a bearer token from
        /// CASHFLOW_API_TOKENS.
        #[arg(long)]
        no_auth: bool,
    },
}

#[derive(Subcommand)]
pub enum TransactionsAction {
    /// List recent transactions
    List {
        /// Maximum number to show
        #[arg(short, long, default_value = "20")]
        limit: u32,
    },

    /// Record a transaction
    Add {
        /// What the money was for
        #[arg(long)]
        description: String,

        /// Amount (accepts "₦45,000" or "45000")
        #[arg(long)]
        amount: String,

        /// income or expense
        #[arg(long)]
        kind: String,

        /// Category label
        #[arg(long, default_value = "")]
        category: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a transaction by id
    Delete {
        /// Transaction id
        id: i64,
    },
}
