use crate::domain::entities::collar_request::CollarRequest;
use crate::domain::entities::collar_result::CollarResult;
use crate::domain::entities::premium_result::PremiumResult;
use crate::domain::error::DomainError;
use crate::domain::ports::pricing_service::PricingService;
use crate::domain::values::credential_transport::CredentialTransport;
use crate::domain::values::expiration_list::ExpirationList;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://equity-collar-api.onrender.com";

/// `PricingService` over the collar backend's HTTP API.
pub struct HttpPricingService {
    client: Client,
    base_url: String,
    transport: CredentialTransport,
}

impl HttpPricingService {
    pub fn new(base_url: impl Into<String>, transport: CredentialTransport, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::builder()
                .user_agent("collarboard/0.1")
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, DomainError> {
        Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|e| DomainError::Config(format!("bad base URL {}: {e}", self.base_url)))
    }

    /// `{base}/expirations/{ticker}`, ticker encoded as one path segment.
    fn expirations_path_url(&self, ticker: &str) -> Result<Url, DomainError> {
        let mut url = self.endpoint("/expirations")?;
        url.path_segments_mut()
            .map_err(|_| DomainError::Config(format!("base URL cannot take a path: {}", self.base_url)))?
            .push(ticker);
        Ok(url)
    }

    /// `{base}/expirations?symbol={ticker}`
    fn expirations_query_url(&self, ticker: &str) -> Result<Url, DomainError> {
        let mut url = self.endpoint("/expirations")?;
        url.query_pairs_mut().append_pair("symbol", ticker);
        Ok(url)
    }

    async fn fetch_expirations(&self, url: Url) -> Result<ExpirationList, DomainError> {
        log::debug!("GET {url}");
        let resp = self.client.get(url).send().await?;
        let value: Value = read_json(resp, "expirations").await?;
        ExpirationList::from_json(&value)
    }

    /// Attach the credential the way this deployment expects.
    fn authorize(&self, builder: RequestBuilder, body: &mut Value, credential: &str) -> RequestBuilder {
        match self.transport {
            CredentialTransport::Withheld => builder,
            CredentialTransport::Header(header) => builder.header(header.as_str(), credential),
            CredentialTransport::Body => {
                if let Some(obj) = body.as_object_mut() {
                    obj.insert("api_key".into(), Value::String(credential.to_string()));
                }
                builder
            }
        }
    }
}

#[async_trait]
impl PricingService for HttpPricingService {
    async fn get_expirations(&self, ticker: &str) -> Result<ExpirationList, DomainError> {
        let primary = self.expirations_path_url(ticker)?;
        match self.fetch_expirations(primary).await {
            Ok(list) => Ok(list),
            Err(first) => {
                log::warn!("expirations for {ticker} failed ({first}); retrying with ?symbol=");
                let fallback = self.expirations_query_url(ticker)?;
                self.fetch_expirations(fallback).await
            }
        }
    }

    async fn calculate_collar(&self, request: &CollarRequest) -> Result<CollarResult, DomainError> {
        let url = self.endpoint("/calculate")?;
        log::debug!("POST {url} ticker={}", request.ticker);
        let resp = self.client.post(url).json(request).send().await?;
        read_json(resp, "calculate").await
    }

    async fn calculate_premium(
        &self,
        request: &CollarRequest,
        credential: &str,
    ) -> Result<PremiumResult, DomainError> {
        let url = self.endpoint("/premium/calculate")?;
        log::debug!("POST {url} ticker={} via {}", request.ticker, self.transport);
        let mut body = serde_json::to_value(request)
            .map_err(|e| DomainError::Validation(format!("unserializable request: {e}")))?;
        let builder = self.authorize(self.client.post(url), &mut body, credential);
        let resp = builder.json(&body).send().await?;
        read_json(resp, "premium").await
    }
}

/// Non-2xx becomes `HttpStatus` with whatever body text was readable; a 2xx
/// body that does not decode into `T` is a shape mismatch.
async fn read_json<T: DeserializeOwned>(resp: Response, what: &str) -> Result<T, DomainError> {
    let status = resp.status();
    if !status.is_success() {
        let url = resp.url().to_string();
        let body = resp.text().await.unwrap_or_default();
        log::error!("{what} error {} {url} {body}", status.as_u16());
        return Err(DomainError::HttpStatus { status: status.as_u16(), body });
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| DomainError::ShapeMismatch(format!("{what}: {e}")))
}
