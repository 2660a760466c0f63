use crate::domain::error::DomainError;
use crate::domain::ports::credential_store::CredentialStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_KEY_FILE: &str = "./.collarboard_key.json";

/// Premium key persisted as a small plain JSON file.
pub struct FileKeyStore {
    path: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct SavedKey {
    api_key: String,
    saved_at: DateTime<Utc>,
}

impl FileKeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialStore for FileKeyStore {
    fn load(&self) -> Result<Option<String>, DomainError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DomainError::Storage(format!("{}: {e}", self.path.display()))),
        };
        let saved: SavedKey = serde_json::from_str(&raw)
            .map_err(|e| DomainError::Storage(format!("{}: {e}", self.path.display())))?;
        let key = saved.api_key.trim().to_string();
        Ok(if key.is_empty() { None } else { Some(key) })
    }

    fn save(&self, credential: &str) -> Result<(), DomainError> {
        let saved = SavedKey { api_key: credential.trim().to_string(), saved_at: Utc::now() };
        let json = serde_json::to_string_pretty(&saved)
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| DomainError::Storage(format!("{}: {e}", parent.display())))?;
        }
        fs::write(&self.path, json)
            .map_err(|e| DomainError::Storage(format!("{}: {e}", self.path.display())))
    }
}
