//! Server command implementation

use std::path::Path;

use anyhow::Result;

use cashflow_server::{ServerConfig, ALLOWED_ORIGINS_ENV, API_TOKENS_ENV};

use super::open_db;

pub async fn cmd_serve(db_path: &Path, host: &str, port: u16, no_auth: bool) -> Result<()> {
    println!("🚀 Starting CashFlow API server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);

    let config = ServerConfig::from_env(!no_auth);

    if no_auth {
        println!();
        println!("   ⚠️  Authentication DISABLED - do not expose to network!");
    } else if config.api_tokens.is_empty() {
        println!();
        println!(
            "   ❌ Authentication required but {} is not set",
            API_TOKENS_ENV
        );
        println!("      All API requests will be rejected.");
        println!("      Set {} or use --no-auth for local development.", API_TOKENS_ENV);
    } else {
        println!(
            "   🔑 API tokens: {} configured ({})",
            config.api_tokens.len(),
            API_TOKENS_ENV
        );
    }

    if config.allowed_origins.is_empty() {
        println!("   🌐 CORS: same-origin only");
    } else {
        println!(
            "   🌐 CORS origins: {} ({})",
            config.allowed_origins.join(", "),
            ALLOWED_ORIGINS_ENV
        );
    }

    println!();
    println!("   Press Ctrl+C to stop");

    let db = open_db(db_path)?;
    cashflow_server::serve(db, host, port, config).await?;

    Ok(())
}
