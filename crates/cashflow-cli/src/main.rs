//! CashFlow CLI - Cash-flow tracking for small businesses
//!
//! Usage:
//!   cashflow init                  Initialize database
//!   cashflow setup ...             Onboard your business profile
//!   cashflow dashboard             Show balance, health score, and runway
//!   cashflow serve --port 3000     Start the REST API server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Setup {
            business_name,
            business_type,
            location,
            email,
            starting_balance,
            monthly_revenue,
            monthly_expenses,
            goal,
            phone,
            dry_run,
        } => {
            let form = commands::SetupForm {
                business_name,
                business_type,
                location,
                email,
                starting_balance,
                monthly_revenue,
                monthly_expenses,
                goal,
                phone,
            };
            commands::cmd_setup(&cli.db, &form, dry_run)
        }
        Commands::Dashboard { email } => commands::cmd_dashboard(&cli.db, email.as_deref()),
        Commands::Status => commands::cmd_status(&cli.db),
        Commands::Transactions { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None => commands::cmd_transactions_list(&db, 20),
                Some(TransactionsAction::List { limit }) => {
                    commands::cmd_transactions_list(&db, limit)
                }
                Some(TransactionsAction::Add {
                    description,
                    amount,
                    kind,
                    category,
                    date,
                }) => commands::cmd_transactions_add(
                    &db,
                    &description,
                    &amount,
                    &kind,
                    &category,
                    date.as_deref(),
                ),
                Some(TransactionsAction::Delete { id }) => {
                    commands::cmd_transactions_delete(&db, id)
                }
            }
        }
        Commands::Insights { email } => commands::cmd_insights(&cli.db, email.as_deref()),
        Commands::Login { email, token } => commands::cmd_login(&email, &token),
        Commands::Logout => commands::cmd_logout(),
        Commands::Serve {
            port,
            host,
            no_auth,
        } => commands::cmd_serve(&cli.db, &host, port, no_auth).await,
    }
}
