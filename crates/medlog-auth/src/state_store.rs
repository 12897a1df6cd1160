//! One JSON file per store key under the configured state directory.
//!
//! The directory is created 0700 and every file written 0600 on unix,
//! since the token store holds live credentials.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AuthError;

/// Persisted stores, keyed by their file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Token,
    User,
    Study,
    Drug,
    Proband,
}

impl StoreKey {
    pub const ALL: [Self; 5] = [
        Self::Token,
        Self::User,
        Self::Study,
        Self::Drug,
        Self::Proband,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "TokenStore",
            Self::User => "UserStore",
            Self::Study => "StudyStore",
            Self::Drug => "DrugStore",
            Self::Proband => "ProbandStore",
        }
    }

    fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path(&self, key: StoreKey) -> PathBuf {
        self.dir.join(key.file_name())
    }

    /// Write `value` as pretty JSON under `key`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::StateStoreError` if the directory or file cannot
    /// be written.
    pub fn save<T: Serialize>(&self, key: StoreKey, value: &T) -> Result<(), AuthError> {
        self.ensure_dir()?;
        let path = self.path(key);
        let json = serde_json::to_vec_pretty(value)
            .map_err(|e| AuthError::StateStoreError(format!("serialize {}: {e}", key.as_str())))?;
        fs::write(&path, json)
            .map_err(|e| AuthError::StateStoreError(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::StateStoreError(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    /// Read the value stored under `key`.
    ///
    /// A missing file is `None`. An unreadable or corrupt file is logged and
    /// also treated as `None`, so a bad store never locks the user out.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: StoreKey) -> Option<T> {
        let path = self.path(key);
        let raw = fs::read_to_string(&path).ok()?;
        if raw.trim().is_empty() {
            return None;
        }
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "ignoring corrupt state file");
                None
            }
        }
    }

    /// Remove the file for `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::StateStoreError` if an existing file cannot be
    /// removed.
    pub fn remove(&self, key: StoreKey) -> Result<(), AuthError> {
        let path = self.path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                AuthError::StateStoreError(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }

    /// Remove every store file.
    ///
    /// # Errors
    ///
    /// See [`Self::remove`].
    pub fn clear(&self) -> Result<(), AuthError> {
        for key in StoreKey::ALL {
            self.remove(key)?;
        }
        Ok(())
    }

    fn ensure_dir(&self) -> Result<(), AuthError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| AuthError::StateStoreError(format!("mkdir {}: {e}", self.dir.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }
        Ok(())
    }
}
