//! Persistent storage for the authenticated token/user pair.
//!
//! The admin UI keeps its token in browser local storage; a native client
//! keeps it in a JSON file. [`MemoryTokenStore`] backs tests and callers
//! that don't want persistence.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// The user half of a stored session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Everything persisted between runs: both tokens plus the user they
/// belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAuth {
    pub access_token: String,
    pub refresh_token: String,
    pub user: StoredUser,
}

/// Abstract storage for the session. Implementations must be shareable
/// across the client's clones.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<StoredAuth>, ClientError>;
    fn save(&self, auth: &StoredAuth) -> Result<(), ClientError>;
    fn clear(&self) -> Result<(), ClientError>;
}

/// JSON-file-backed store.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<StoredAuth>, ClientError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, auth: &StoredAuth) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(auth)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: Mutex<Option<StoredAuth>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<StoredAuth>, ClientError> {
        Ok(self.inner.lock().expect("store lock poisoned").clone())
    }

    fn save(&self, auth: &StoredAuth) -> Result<(), ClientError> {
        *self.inner.lock().expect("store lock poisoned") = Some(auth.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self.inner.lock().expect("store lock poisoned") = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_auth() -> StoredAuth {
        StoredAuth {
            access_token: "access-abc".to_string(),
            refresh_token: "refresh-def".to_string(),
            user: StoredUser {
                id: 1,
                name: "Administrator".to_string(),
                email: "admin@gccheapcarrental.com".to_string(),
                role: "admin".to_string(),
            },
        }
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&sample_auth()).unwrap();
        let loaded = store.load().unwrap().expect("saved auth should load");
        assert_eq!(loaded.access_token, "access-abc");

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("auth.json"));

        assert!(store.load().unwrap().is_none(), "missing file means logged out");

        store.save(&sample_auth()).unwrap();
        let loaded = store.load().unwrap().expect("saved auth should load");
        assert_eq!(loaded.user.email, "admin@gccheapcarrental.com");

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested/dir/auth.json"));
        store.save(&sample_auth()).unwrap();
        assert!(store.load().unwrap().is_some());
    }
}
