//! Session
//!
//! Bearer token held in memory plus its persistent copy.

#[cfg(test)]
use std::cell::RefCell;

use crate::error::{NoteError, Result};

/// In-memory authentication state
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Token for an authenticated request
    pub fn bearer(&self) -> Result<String> {
        match self.token.as_deref() {
            Some(t) if !t.is_empty() => Ok(t.to_string()),
            _ => Err(NoteError::Unauthenticated),
        }
    }
}

/// Persistent key-value slot for the last issued token
pub trait TokenStore {
    fn save(&self, token: &str) -> Result<()>;
}

/// `window.localStorage` under a fixed key
pub struct LocalStorageTokens {
    key: String,
}

impl LocalStorageTokens {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for LocalStorageTokens {
    fn save(&self, token: &str) -> Result<()> {
        let storage = web_sys::window()
            .ok_or_else(|| NoteError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| NoteError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| NoteError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(&self.key, token)
            .map_err(|e| NoteError::Storage(format!("{:?}", e)))
    }
}

/// Token slot kept in memory
#[cfg(test)]
#[derive(Default)]
pub struct MemoryTokens {
    saved: RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryTokens {
    pub fn saved(&self) -> Option<String> {
        self.saved.borrow().clone()
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokens {
    fn save(&self, token: &str) -> Result<()> {
        *self.saved.borrow_mut() = Some(token.to_string());
        Ok(())
    }
}
