//! Local session persistence
//!
//! A single versioned JSON document holding the signed-in user's token and
//! identity, stored under the platform data directory. Earlier releases
//! wrote an unversioned file with separate `token`/`userEmail` keys; that
//! legacy shape is migrated to the current schema once, at load, and the
//! file is rewritten in the new form.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Current session schema version
pub const SESSION_VERSION: u32 = 2;

/// File name under the data directory
const SESSION_FILE: &str = "session.json";

/// The unified (v2) session record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub version: u32,
    pub email: String,
    pub token: String,
    #[serde(default)]
    pub business_name: String,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

impl Session {
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: SESSION_VERSION,
            email: email.into(),
            token: token.into(),
            business_name: String::new(),
            created_at: now,
            last_login: now,
        }
    }
}

/// Legacy (v1) session shape: flat keys, no version field
#[derive(Debug, Deserialize)]
struct LegacySession {
    token: String,
    #[serde(rename = "userEmail")]
    user_email: String,
    #[serde(rename = "businessName", default)]
    business_name: String,
}

/// File-backed session store
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default platform location
    /// (`~/.local/share/cashflow/session.json` on Linux)
    pub fn open_default() -> Result<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| Error::Session("could not determine data directory".to_string()))?;
        Ok(Self::at(base.join("cashflow").join(SESSION_FILE)))
    }

    /// Store at an explicit path (used by tests)
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session, migrating a legacy file in place if found.
    ///
    /// Returns `Ok(None)` when no session file exists. A file that is
    /// neither shape is an error rather than silently discarded.
    pub fn load(&self) -> Result<Option<Session>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value: serde_json::Value = serde_json::from_str(&raw)?;

        if let Some(version) = value.get("version").and_then(|v| v.as_u64()) {
            if version > SESSION_VERSION as u64 {
                return Err(Error::Session(format!(
                    "session file version {} is newer than supported version {}",
                    version, SESSION_VERSION
                )));
            }
            let session: Session = serde_json::from_value(value)?;
            return Ok(Some(session));
        }

        // Unversioned legacy file: migrate and rewrite
        let legacy: LegacySession = serde_json::from_value(value)
            .map_err(|e| Error::Session(format!("unrecognized session file: {}", e)))?;

        let mut session = Session::new(legacy.user_email, legacy.token);
        session.business_name = legacy.business_name;

        info!(path = %self.path.display(), "Migrated legacy session file");
        self.save(&session)?;

        Ok(Some(session))
    }

    /// Persist the session atomically (write temp file, then rename)
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(session)?)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    /// Remove the session file (logout). Missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SessionStore {
        SessionStore::at(dir.path().join("session.json"))
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let session = Session::new("ada@example.com", "tok_abc123");
        store.save(&session).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, session);
        assert_eq!(loaded.version, SESSION_VERSION);
    }

    #[test]
    fn test_legacy_file_migrates_once() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(
            store.path(),
            r#"{"token":"tok_old","userEmail":"ada@example.com","businessName":"Ada's Kitchen"}"#,
        )
        .unwrap();

        let migrated = store.load().unwrap().unwrap();
        assert_eq!(migrated.version, SESSION_VERSION);
        assert_eq!(migrated.email, "ada@example.com");
        assert_eq!(migrated.token, "tok_old");
        assert_eq!(migrated.business_name, "Ada's Kitchen");

        // The file on disk is now versioned
        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], SESSION_VERSION);
    }

    #[test]
    fn test_garbage_file_is_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"something":"else"}"#).unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn test_newer_version_rejected() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"version":99,"email":"a@b.c","token":"t"}"#).unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&Session::new("a@b.c", "t")).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        // Clearing again is fine
        store.clear().unwrap();
    }
}
