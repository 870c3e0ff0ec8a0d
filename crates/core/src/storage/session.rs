//! Session persistence
//!
//! The session record is stored as JSON under a single fixed key. Callers go
//! through [`SessionStore`] so tests can swap in [`MemorySessionStore`].

use std::sync::Mutex;

use tracing::{debug, instrument};

use super::LocalStorage;
use crate::error::Result;
use crate::models::Session;

/// Storage key holding the serialized session
pub const SESSION_KEY: &str = "user";

/// Load, save and clear the signed-in user's session
pub trait SessionStore {
    /// The stored session, if any
    fn load(&self) -> Result<Option<Session>>;

    /// Persist `session`, replacing any previous one
    fn save(&self, session: &Session) -> Result<()>;

    /// Remove the stored session
    fn clear(&self) -> Result<()>;
}

impl SessionStore for LocalStorage {
    #[instrument(skip(self))]
    fn load(&self) -> Result<Option<Session>> {
        match self.get_item(SESSION_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self, session), fields(user_id = session.id))]
    fn save(&self, session: &Session) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        self.set_item(SESSION_KEY, &raw)?;
        debug!(username = %session.username, "Session saved");
        Ok(())
    }

    #[instrument(skip(self))]
    fn clear(&self) -> Result<()> {
        self.remove_item(SESSION_KEY)
    }
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn load(&self) -> Result<Option<Session>> {
        (**self).load()
    }

    fn save(&self, session: &Session) -> Result<()> {
        (**self).save(session)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// In-memory session store holding the serialized record
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an arbitrary raw value under the session key
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// The raw JSON currently stored
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>> {
        match self.raw() {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        *self.raw.lock().unwrap_or_else(|e| e.into_inner()) = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.raw.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}
