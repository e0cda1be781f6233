use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::warn;

use crate::error::AuthError;
use crate::session::Session;

/// Durable key/value storage for the current [`Session`].
///
/// The store is the only owner of credentials; the API client reads it before
/// every dispatch and writes it only after a successful login, registration,
/// OTP verification or refresh. All operations are synchronous and infallible:
/// storage is assumed available for the lifetime of the process, and `clear`
/// on an already-empty store is a no-op.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;

    fn set_access_token(&self, token: &str);

    fn refresh_token(&self) -> Option<String>;

    fn set_refresh_token(&self, token: &str);

    /// Always sets the access token; sets the refresh token only if provided.
    fn set_tokens(&self, access: &str, refresh: Option<&str>) {
        self.set_access_token(access);
        if let Some(refresh) = refresh {
            self.set_refresh_token(refresh);
        }
    }

    /// Removes both tokens. Idempotent.
    fn clear(&self);
}

/// In-memory store for tests and sessions that should not outlive the process.
#[derive(Default)]
pub struct MemoryTokenStore {
    session: RwLock<Session>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(session),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.session.read().expect("session lock").access_token.clone()
    }

    fn set_access_token(&self, token: &str) {
        self.session.write().expect("session lock").access_token = Some(token.to_string());
    }

    fn refresh_token(&self) -> Option<String> {
        self.session.read().expect("session lock").refresh_token.clone()
    }

    fn set_refresh_token(&self, token: &str) {
        self.session.write().expect("session lock").refresh_token = Some(token.to_string());
    }

    fn clear(&self) {
        *self.session.write().expect("session lock") = Session::default();
    }
}

/// File-backed store persisting the session as JSON under the user cache
/// directory, so a login survives restarts of the client.
///
/// Construction can fail (the cache directory may not be creatable); once
/// constructed, reads come from an in-memory copy and writes persist
/// best-effort, logging instead of failing when the disk write goes wrong.
pub struct FileTokenStore {
    session_path: PathBuf,
    session: RwLock<Session>,
}

impl FileTokenStore {
    pub fn new() -> Result<Self, AuthError> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| AuthError::TokenStorage("Could not find cache directory".to_string()))?
            .join("vitalia");

        if !cache_dir.exists() {
            fs::create_dir_all(&cache_dir).map_err(|e| {
                AuthError::TokenStorage(format!("Failed to create cache directory: {}", e))
            })?;
        }

        Self::at_path(cache_dir.join("session.json"))
    }

    /// Opens a store at an explicit path, loading any previously saved session.
    pub fn at_path(session_path: PathBuf) -> Result<Self, AuthError> {
        let session = match Self::load(&session_path)? {
            Some(session) => session,
            None => Session::default(),
        };

        Ok(Self {
            session_path,
            session: RwLock::new(session),
        })
    }

    fn load(path: &Path) -> Result<Option<Session>, AuthError> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)
            .map_err(|e| AuthError::TokenStorage(format!("Failed to read session: {}", e)))?;

        let session: Session = serde_json::from_str(&json)?;
        Ok(Some(session))
    }

    fn persist(&self, session: &Session) {
        if session.is_empty() {
            if self.session_path.exists() {
                if let Err(e) = fs::remove_file(&self.session_path) {
                    warn!("failed to remove session file: {}", e);
                }
            }
            return;
        }

        let json = match serde_json::to_string_pretty(session) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize session: {}", e);
                return;
            }
        };

        if let Err(e) = fs::write(&self.session_path, json) {
            warn!("failed to save session: {}", e);
            return;
        }

        // Credentials on disk are owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            match fs::metadata(&self.session_path) {
                Ok(metadata) => {
                    let mut perms = metadata.permissions();
                    perms.set_mode(0o600);
                    if let Err(e) = fs::set_permissions(&self.session_path, perms) {
                        warn!("failed to set session file permissions: {}", e);
                    }
                }
                Err(e) => warn!("failed to read session file permissions: {}", e),
            }
        }
    }

    fn update(&self, f: impl FnOnce(&mut Session)) {
        let mut session = self.session.write().expect("session lock");
        f(&mut session);
        self.persist(&session);
    }
}

impl TokenStore for FileTokenStore {
    fn access_token(&self) -> Option<String> {
        self.session.read().expect("session lock").access_token.clone()
    }

    fn set_access_token(&self, token: &str) {
        self.update(|session| session.access_token = Some(token.to_string()));
    }

    fn refresh_token(&self) -> Option<String> {
        self.session.read().expect("session lock").refresh_token.clone()
    }

    fn set_refresh_token(&self, token: &str) {
        self.update(|session| session.refresh_token = Some(token.to_string()));
    }

    fn set_tokens(&self, access: &str, refresh: Option<&str>) {
        self.update(|session| {
            session.access_token = Some(access.to_string());
            if let Some(refresh) = refresh {
                session.refresh_token = Some(refresh.to_string());
            }
        });
    }

    fn clear(&self) {
        self.update(|session| *session = Session::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
    }

    #[test]
    fn set_tokens_sets_refresh_only_when_provided() {
        let store = MemoryTokenStore::new();
        store.set_tokens("A1", Some("R1"));
        assert_eq!(store.access_token().as_deref(), Some("A1"));
        assert_eq!(store.refresh_token().as_deref(), Some("R1"));

        store.set_tokens("A2", None);
        assert_eq!(store.access_token().as_deref(), Some("A2"));
        assert_eq!(store.refresh_token().as_deref(), Some("R1"));
    }

    #[test]
    fn clear_is_idempotent() {
        let store = MemoryTokenStore::new();
        store.clear();
        store.set_tokens("A1", Some("R1"));
        store.clear();
        store.clear();
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
    }

    #[test]
    fn file_store_round_trips_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileTokenStore::at_path(path.clone()).unwrap();
        store.set_tokens("A1", Some("R1"));
        drop(store);

        let reopened = FileTokenStore::at_path(path).unwrap();
        assert_eq!(reopened.access_token().as_deref(), Some("A1"));
        assert_eq!(reopened.refresh_token().as_deref(), Some("R1"));
    }

    #[test]
    fn file_store_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileTokenStore::at_path(path.clone()).unwrap();
        store.set_tokens("A1", Some("R1"));
        assert!(path.exists());

        store.clear();
        assert!(!path.exists());

        let reopened = FileTokenStore::at_path(path).unwrap();
        assert_eq!(reopened.access_token(), None);
    }
}
