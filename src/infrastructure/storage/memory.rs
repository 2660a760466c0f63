use crate::domain::error::DomainError;
use crate::domain::ports::credential_store::CredentialStore;
use std::sync::Mutex;

/// Keeps the key for the lifetime of the process only.
#[derive(Default)]
pub struct MemoryKeyStore {
    key: Mutex<Option<String>>,
}

impl MemoryKeyStore {
    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: Mutex::new(Some(key.into())) }
    }
}

impl CredentialStore for MemoryKeyStore {
    fn load(&self) -> Result<Option<String>, DomainError> {
        self.key
            .lock()
            .map(|k| k.clone())
            .map_err(|e| DomainError::Storage(e.to_string()))
    }

    fn save(&self, credential: &str) -> Result<(), DomainError> {
        let mut k = self.key.lock().map_err(|e| DomainError::Storage(e.to_string()))?;
        *k = Some(credential.to_string());
        Ok(())
    }
}
