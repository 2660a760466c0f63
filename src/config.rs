use crate::domain::error::DomainError;
use crate::domain::values::credential_transport::{CredentialTransport, KeyHeader};
use crate::infrastructure::http::collar_api::DEFAULT_BASE_URL;
use crate::infrastructure::storage::file_key_store::DEFAULT_KEY_FILE;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime settings read from `COLLAR_*` variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub transport: CredentialTransport,
    pub timeout: Duration,
    pub key_file: PathBuf,
    /// Used when the key store holds nothing.
    pub premium_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Unset and blank values fall back to
    /// defaults; malformed values are `Config` errors.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let var = |name: &str| {
            get(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let base_url = var("COLLAR_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let base_url = base_url.trim_end_matches('/').to_string();

        let header = match var("COLLAR_KEY_HEADER") {
            Some(v) => v.parse::<KeyHeader>().map_err(DomainError::Config)?,
            None => KeyHeader::ApiKey,
        };
        let deployment = var("COLLAR_DEPLOYMENT").unwrap_or_else(|| "direct".into());
        let transport =
            CredentialTransport::for_deployment(&deployment, header).map_err(DomainError::Config)?;

        let timeout_secs = match var("COLLAR_TIMEOUT_SECS") {
            Some(v) => match v.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(DomainError::Config(format!(
                        "COLLAR_TIMEOUT_SECS must be a positive number of seconds, got {v:?}"
                    )))
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            transport,
            timeout: Duration::from_secs(timeout_secs),
            key_file: var("COLLAR_KEY_FILE").unwrap_or_else(|| DEFAULT_KEY_FILE.into()).into(),
            premium_key: var("COLLAR_PREMIUM_KEY"),
        })
    }
}
