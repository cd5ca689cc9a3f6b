//! Credential presence check.
//!
//! The marker is written by the login flow and removed by logout; both live
//! outside this crate. Here it is only read, and only its presence matters.

use serde_json::{Map, Value};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};
use tracing::debug;

/// Storage key of the credential marker.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Answers whether the current client holds a credential marker.
pub trait CredentialPresence {
    fn is_authenticated(&self) -> bool;
}

/// Client persistent key-value storage.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: CredentialPresence + ?Sized> CredentialPresence for &T {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

/// Presence provider backed by the `access_token` entry of a store.
#[derive(Debug, Clone)]
pub struct StoredCredential<S> {
    store: S,
}

impl<S: CredentialStore> StoredCredential<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }
}

impl<S: CredentialStore> CredentialPresence for StoredCredential<S> {
    fn is_authenticated(&self) -> bool {
        // An empty string counts as absent.
        self.store
            .get(ACCESS_TOKEN_KEY)
            .is_some_and(|value| !value.is_empty())
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.into(), value.into());
        }
    }

    pub fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.write() {
            values.remove(key);
        }
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }
}

impl<S: CredentialStore + ?Sized> CredentialStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Storage snapshot kept as a JSON object on disk, for example
/// `{"access_token": "..."}`. The file is read on every lookup.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Option<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                debug!("Credential storage {} not readable: {err}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str::<Map<String, Value>>(&contents) {
            Ok(values) => Some(values),
            Err(err) => {
                debug!("Credential storage {} is not a JSON object: {err}", self.path.display());
                None
            }
        }
    }
}

impl CredentialStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load()?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn memory_store_presence_follows_login_and_logout() {
        let store = MemoryStore::new();
        let credential = StoredCredential::new(&store);
        assert!(!credential.is_authenticated());

        store.set(ACCESS_TOKEN_KEY, "opaque");
        assert!(credential.is_authenticated());

        store.remove(ACCESS_TOKEN_KEY);
        assert!(!credential.is_authenticated());
    }

    #[test]
    fn empty_marker_is_absent() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "");
        assert!(!StoredCredential::new(store).is_authenticated());
    }

    #[test]
    fn other_keys_are_ignored() {
        let store = MemoryStore::new();
        store.set("refresh_token", "value");
        assert!(!StoredCredential::new(store).is_authenticated());
    }

    #[test]
    fn file_store_reads_marker() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"access_token":"abc","theme":"dark"}}"#).unwrap();

        let store = FileStore::new(file.path());
        assert_eq!(store.get(ACCESS_TOKEN_KEY), Some("abc".to_string()));
        assert!(StoredCredential::new(store).is_authenticated());
    }

    #[test]
    fn file_store_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("storage.json"));
        assert!(!StoredCredential::new(store).is_authenticated());
    }

    #[test]
    fn file_store_malformed_or_non_string_is_absent() {
        let mut malformed = tempfile::NamedTempFile::new().unwrap();
        write!(malformed, "not json").unwrap();
        assert!(!StoredCredential::new(FileStore::new(malformed.path())).is_authenticated());

        let mut null_value = tempfile::NamedTempFile::new().unwrap();
        write!(null_value, r#"{{"access_token":null}}"#).unwrap();
        assert!(!StoredCredential::new(FileStore::new(null_value.path())).is_authenticated());
    }

    #[test]
    fn file_store_is_reread_on_each_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let credential = StoredCredential::new(FileStore::new(&path));
        assert!(!credential.is_authenticated());

        fs::write(&path, r#"{"access_token":"abc"}"#).unwrap();
        assert!(credential.is_authenticated());
    }
}
