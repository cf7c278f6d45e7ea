//! Local session commands (login, logout)
//!
//! Tokens are issued by the hosted identity provider; these commands only
//! store and clear them locally so other tools can reuse the session.

use anyhow::{Context, Result};
use chrono::Utc;

use cashflow_core::session::{Session, SessionStore};

pub fn cmd_login(email: &str, token: &str) -> Result<()> {
    let store = SessionStore::open_default().context("Failed to locate session store")?;

    // Keep the original created_at when re-logging the same account
    let session = match store.load() {
        Ok(Some(mut existing)) if existing.email == email => {
            existing.token = token.to_string();
            existing.last_login = Utc::now();
            existing
        }
        _ => Session::new(email, token),
    };

    store.save(&session)?;

    println!("✅ Logged in as {}", email);
    println!("   Session: {}", store.path().display());
    Ok(())
}

pub fn cmd_logout() -> Result<()> {
    let store = SessionStore::open_default().context("Failed to locate session store")?;

    match clear_session(&store)? {
        Some(email) => println!("✅ Logged out {}", email),
        None => println!("No active session."),
    }
    Ok(())
}

/// Remove the session file, returning the signed-in email if one was
/// readable. The file is cleared even when it fails to parse, so a
/// corrupted session can always be removed through logout.
pub(crate) fn clear_session(store: &SessionStore) -> Result<Option<String>> {
    let email = store.load().ok().flatten().map(|s| s.email);
    store.clear()?;
    Ok(email)
}
