//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Init and shared utilities (open_db)
//! - `setup` - Onboarding wizard with Engine preview
//! - `status` - Status and dashboard rendering
//! - `transactions` - Ledger commands (list, add, delete)
//! - `insights` - Advisory insight rendering
//! - `session` - Local session login/logout
//! - `serve` - REST API server command

pub mod core;
pub mod insights;
pub mod serve;
pub mod session;
pub mod setup;
pub mod status;
pub mod transactions;

// Re-export command functions for main.rs
pub use core::*;
pub use insights::*;
pub use serve::*;
pub use session::*;
pub use setup::*;
pub use status::*;
pub use transactions::*;

/// Truncate a string to a maximum number of characters, adding "..." if
/// truncated. Counts chars rather than bytes so multibyte input (currency
/// symbols, non-ASCII descriptions) never splits mid-character.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
