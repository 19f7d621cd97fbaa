use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::models::UserProfile;

/// Key under which the profile lives in the store file.
const PROFILE_KEY: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// File-backed key-value store holding the one persisted entry of the
/// whole app: the serialized [`UserProfile`]. Written on login/signup,
/// removed on logout. No schema versioning.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ProfileStore { path: path.into() }
    }

    /// Load the persisted profile, if any. A missing file is an empty
    /// store, not an error.
    pub fn load(&self) -> Result<Option<UserProfile>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut entries: HashMap<String, serde_json::Value> = serde_json::from_str(&raw)?;
        match entries.remove(PROFILE_KEY) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    pub fn save(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let mut entries = HashMap::new();
        entries.insert(PROFILE_KEY.to_string(), serde_json::to_value(profile)?);
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }

    /// Remove the persisted entry. Clearing an already-empty store is fine.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
