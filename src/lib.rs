pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::dashboard::Dashboard;
use crate::config::Config;
use crate::domain::entities::collar_request::CollarRequest;
use crate::domain::entities::collar_result::CollarResult;
use crate::domain::entities::premium_result::PremiumResult;
use crate::domain::error::DomainError;
use crate::domain::ports::chart_canvas::ChartCanvas;
use crate::domain::ports::credential_store::CredentialStore;
use crate::domain::ports::pricing_service::PricingService;
use crate::domain::values::expiration_list::ExpirationList;
use crate::infrastructure::http::collar_api::HttpPricingService;
use crate::infrastructure::storage::file_key_store::FileKeyStore;
use std::sync::Arc;

pub struct Collarboard {
    service: Arc<dyn PricingService>,
    key_store: Arc<dyn CredentialStore>,
    fallback_key: Option<String>,
}

impl Collarboard {
    /// Configure from `COLLAR_*` environment variables.
    pub fn new() -> Result<Self, DomainError> {
        Ok(Self::from_config(Config::from_env()?))
    }

    pub fn from_config(config: Config) -> Self {
        log::debug!("backend {}, credential transport {}", config.base_url, config.transport);
        let service = HttpPricingService::new(config.base_url, config.transport, config.timeout);
        Self::with_providers(Arc::new(service), Arc::new(FileKeyStore::new(config.key_file)))
            .with_fallback_key(config.premium_key)
    }

    pub fn with_providers(
        service: Arc<dyn PricingService>,
        key_store: Arc<dyn CredentialStore>,
    ) -> Self {
        Self { service, key_store, fallback_key: None }
    }

    /// Premium key to offer when the key store is empty.
    pub fn with_fallback_key(mut self, key: Option<String>) -> Self {
        self.fallback_key = key;
        self
    }

    /// A fresh interactive session drawing into `canvas`.
    pub fn dashboard<C: ChartCanvas>(&self, canvas: C, request: CollarRequest) -> Dashboard<C> {
        Dashboard::with_form(self.service.clone(), self.key_store.clone(), canvas, request)
    }

    pub async fn expirations(&self, ticker: &str) -> Result<ExpirationList, DomainError> {
        self.service.get_expirations(ticker).await
    }

    pub async fn calculate(&self, request: &CollarRequest) -> Result<CollarResult, DomainError> {
        self.service.calculate_collar(request).await
    }

    pub async fn premium(
        &self,
        request: &CollarRequest,
        credential: &str,
    ) -> Result<PremiumResult, DomainError> {
        self.service.calculate_premium(request, credential).await
    }

    /// Key from the credential store, else the configured fallback
    /// (`COLLAR_PREMIUM_KEY`).
    pub fn saved_credential(&self) -> Result<Option<String>, DomainError> {
        if let Some(key) = self.key_store.load()? {
            return Ok(Some(key));
        }
        Ok(self.fallback_key.clone())
    }
}
