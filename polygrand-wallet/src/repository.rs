//! Session persistence
//!
//! The session store writes its persisted subset after every mutation and
//! reads it once at startup. Storage is a single namespaced key/value entry,
//! the same model as browser local storage.

use chrono::Utc;
use parking_lot::Mutex;
use polygrand_core::wallet::WALLET_STORAGE_KEY;
use polygrand_core::{PersistedEnvelope, PersistedSession};
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::types::{Result, WalletError};

/// Storage for the persisted part of a wallet session
pub trait SessionRepository: Send + Sync {
    /// Read the stored session, `None` if nothing was ever saved
    fn load(&self) -> Result<Option<PersistedSession>>;

    /// Replace the stored session
    fn save(&self, session: &PersistedSession) -> Result<()>;

    /// Remove the stored session
    fn clear(&self) -> Result<()>;
}

/// SQLite-backed key/value store
pub struct SqliteSessionRepository {
    db: Mutex<Connection>,
    key: String,
}

impl SqliteSessionRepository {
    /// Open (or create) the store at `path`, using the default namespace key
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                WalletError::Config(format!(
                    "Cannot create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let conn = Connection::open(path)?;
        info!("Opened wallet session store at {}", path.display());
        Self::with_connection(conn, WALLET_STORAGE_KEY)
    }

    /// In-memory database, gone when dropped
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?, WALLET_STORAGE_KEY)
    }

    /// Use an existing connection and a custom namespace key
    pub fn with_connection(conn: Connection, key: impl Into<String>) -> Result<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value JSON NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;

        Ok(Self {
            db: Mutex::new(conn),
            key: key.into(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl SessionRepository for SqliteSessionRepository {
    fn load(&self) -> Result<Option<PersistedSession>> {
        let conn = self.db.lock();
        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![self.key],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(json) => {
                let envelope: PersistedEnvelope = serde_json::from_str(&json)?;
                debug!("Loaded wallet session (version {})", envelope.version);
                Ok(Some(envelope.state))
            }
            None => Ok(None),
        }
    }

    fn save(&self, session: &PersistedSession) -> Result<()> {
        let json = serde_json::to_string(&PersistedEnvelope::new(session.clone()))?;
        self.db.lock().execute(
            r#"
            INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
            params![self.key, json, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.db
            .lock()
            .execute("DELETE FROM kv_store WHERE key = ?1", params![self.key])?;
        Ok(())
    }
}

/// Process-local store, used in tests and when no database is configured
#[derive(Default)]
pub struct MemorySessionRepository {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `session`
    pub fn with_session(session: PersistedSession) -> Result<Self> {
        let repo = Self::new();
        repo.save(&session)?;
        Ok(repo)
    }

    /// Raw stored JSON, for inspection
    pub fn raw(&self) -> Option<String> {
        self.entries.lock().get(WALLET_STORAGE_KEY).cloned()
    }
}

impl SessionRepository for MemorySessionRepository {
    fn load(&self) -> Result<Option<PersistedSession>> {
        match self.raw() {
            Some(json) => Ok(Some(serde_json::from_str::<PersistedEnvelope>(&json)?.state)),
            None => Ok(None),
        }
    }

    fn save(&self, session: &PersistedSession) -> Result<()> {
        let json = serde_json::to_string(&PersistedEnvelope::new(session.clone()))?;
        self.entries.lock().insert(WALLET_STORAGE_KEY.to_string(), json);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.lock().remove(WALLET_STORAGE_KEY);
        Ok(())
    }
}
