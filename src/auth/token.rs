//! Token persistence
//!
//! A single authentication token stored under the key `token`. There is no
//! expiry or refresh: the token is kept until it is cleared.

use std::sync::Mutex;

use super::AuthError;

/// Storage key of the token
pub const TOKEN_KEY: &str = "token";

/// Somewhere to keep the token between page loads or CLI runs
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), AuthError>;
    fn clear(&self) -> Result<(), AuthError>;

    fn is_logged_in(&self) -> bool {
        self.load().is_some()
    }
}

/// Token kept for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn save(&self, token: &str) -> Result<(), AuthError> {
        let mut slot = self
            .token
            .lock()
            .map_err(|_| AuthError::Storage("token lock poisoned".to_string()))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        let mut slot = self
            .token
            .lock()
            .map_err(|_| AuthError::Storage("token lock poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}

#[cfg(feature = "native")]
pub use file::FileTokenStore;

#[cfg(feature = "native")]
mod file {
    use serde_json::{Map, Value};
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::{TokenStore, TOKEN_KEY};
    use crate::auth::AuthError;

    /// Token kept in a small JSON file, `{"token": "..."}`
    #[derive(Debug, Clone)]
    pub struct FileTokenStore {
        path: PathBuf,
    }

    impl FileTokenStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<data dir>/studybuddy/session.json`
        pub fn default_path() -> Option<PathBuf> {
            dirs::data_dir().map(|d| d.join("studybuddy").join("session.json"))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read(&self) -> Option<Map<String, Value>> {
            let content = fs::read_to_string(&self.path).ok()?;
            match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(map)) => Some(map),
                Ok(_) | Err(_) => {
                    tracing::warn!(path = %self.path.display(), "Ignoring malformed token file");
                    None
                }
            }
        }
    }

    impl TokenStore for FileTokenStore {
        fn load(&self) -> Option<String> {
            self.read()?
                .get(TOKEN_KEY)
                .and_then(Value::as_str)
                .map(str::to_string)
        }

        fn save(&self, token: &str) -> Result<(), AuthError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent).map_err(|e| AuthError::Storage(e.to_string()))?;
            }

            let mut map = self.read().unwrap_or_default();
            map.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));

            let content = serde_json::to_string_pretty(&Value::Object(map))
                .map_err(|e| AuthError::Storage(e.to_string()))?;
            fs::write(&self.path, content).map_err(|e| AuthError::Storage(e.to_string()))?;

            tracing::debug!(path = %self.path.display(), "Token saved");
            Ok(())
        }

        fn clear(&self) -> Result<(), AuthError> {
            match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(AuthError::Storage(e.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryTokenStore::new();
        assert!(!store.is_logged_in());
        store.save("abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc"));
        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested").join("session.json"));

        assert_eq!(store.load(), None);
        store.save("jwt-1").unwrap();
        assert_eq!(store.load().as_deref(), Some("jwt-1"));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[TOKEN_KEY], "jwt-1");

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_ignores_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileTokenStore::new(path.clone());
        assert_eq!(store.load(), None);
        store.save("fresh").unwrap();
        assert_eq!(store.load().as_deref(), Some("fresh"));
    }
}
