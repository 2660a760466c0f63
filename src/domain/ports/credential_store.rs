use crate::domain::error::DomainError;

/// Local persistence for the premium API key. Not a security boundary: the
/// key is a low-value demo credential stored unencrypted.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, DomainError>;
    fn save(&self, credential: &str) -> Result<(), DomainError>;
}
