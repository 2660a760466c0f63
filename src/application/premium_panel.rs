use crate::application::render::premium_view::PremiumView;
use crate::domain::entities::collar_request::CollarRequest;
use crate::domain::entities::premium_result::PremiumResult;
use crate::domain::error::DomainError;
use crate::domain::ports::credential_store::CredentialStore;
use crate::domain::ports::pricing_service::PricingService;
use std::sync::Arc;

/// Optional analytics flow keyed by a caller-supplied credential.
pub struct PremiumPanel {
    credential: String,
    result: Option<PremiumResult>,
    error: Option<String>,
    loading: bool,
    store: Arc<dyn CredentialStore>,
}

impl PremiumPanel {
    /// Starts with whatever credential the store remembers.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        let credential = match store.load() {
            Ok(saved) => saved.unwrap_or_default(),
            Err(e) => {
                log::warn!("could not read saved premium key: {e}");
                String::new()
            }
        };
        Self { credential, result: None, error: None, loading: false, store }
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    pub fn set_credential(&mut self, credential: impl Into<String>) {
        self.credential = credential.into();
    }

    pub fn result(&self) -> Option<&PremiumResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether `load` would send a request for this form.
    pub fn can_load(&self, form: &CollarRequest) -> bool {
        self.check(form).is_ok()
    }

    pub fn view(&self) -> Option<PremiumView> {
        self.result.as_ref().map(PremiumView::from_result)
    }

    pub fn reset(&mut self) {
        self.result = None;
        self.error = None;
    }

    /// Fetch premium analytics for `form`. Refuses without a request when the
    /// credential or required fields are blank. Failures end up in `error`.
    pub async fn load(&mut self, service: &dyn PricingService, form: &CollarRequest) {
        self.reset();
        let key = match self.check(form) {
            Ok(key) => key,
            Err(e) => {
                self.error = Some(e.to_string());
                return;
            }
        };

        self.loading = true;
        if let Err(e) = self.store.save(&key) {
            log::warn!("could not persist premium key: {e}");
        }

        // entry_price is a placeholder; the backend substitutes live spot.
        let mut request = form.clone();
        request.ticker = request.ticker.trim().to_uppercase();

        match service.calculate_premium(&request, &key).await {
            Ok(res) => self.result = Some(res),
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    fn check(&self, form: &CollarRequest) -> Result<String, DomainError> {
        let key = self.credential.trim();
        if key.is_empty() {
            return Err(DomainError::Validation("Premium key missing.".into()));
        }
        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(DomainError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }
        Ok(key.to_string())
    }
}
