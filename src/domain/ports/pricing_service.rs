use crate::domain::entities::collar_request::CollarRequest;
use crate::domain::entities::collar_result::CollarResult;
use crate::domain::entities::premium_result::PremiumResult;
use crate::domain::error::DomainError;
use crate::domain::values::expiration_list::ExpirationList;
use async_trait::async_trait;

/// Remote pricing backend. Every call is one-shot: no retries, no caching,
/// cancelled only by dropping the future.
#[async_trait]
pub trait PricingService: Send + Sync {
    async fn get_expirations(&self, ticker: &str) -> Result<ExpirationList, DomainError>;

    async fn calculate_collar(&self, request: &CollarRequest) -> Result<CollarResult, DomainError>;

    /// The credential may never reach the wire, depending on how the
    /// implementation was configured.
    async fn calculate_premium(
        &self,
        request: &CollarRequest,
        credential: &str,
    ) -> Result<PremiumResult, DomainError>;
}
