use std::fmt;
use std::str::FromStr;

/// Header names the premium backend accepts for the API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHeader {
    ApiKey,
    PremiumKey,
}

impl KeyHeader {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyHeader::ApiKey => "X-API-KEY",
            KeyHeader::PremiumKey => "X-Premium-Key",
        }
    }
}

impl fmt::Display for KeyHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyHeader {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x-api-key" => Ok(KeyHeader::ApiKey),
            "x-premium-key" => Ok(KeyHeader::PremiumKey),
            _ => Err(format!("Unknown key header: {s}")),
        }
    }
}

/// How the premium credential travels to the backend. Selected once from the
/// deployment mode; call sites never branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialTransport {
    /// Same-origin proxy injects the key server-side.
    Withheld,
    Header(KeyHeader),
    /// `api_key` field in the JSON body.
    Body,
}

impl CredentialTransport {
    /// `deployment` is one of `proxy`, `direct`, `direct-body`.
    pub fn for_deployment(deployment: &str, header: KeyHeader) -> Result<Self, String> {
        match deployment.to_lowercase().as_str() {
            "proxy" => Ok(CredentialTransport::Withheld),
            "direct" | "direct-header" => Ok(CredentialTransport::Header(header)),
            "direct-body" => Ok(CredentialTransport::Body),
            _ => Err(format!("Unknown deployment mode: {deployment}")),
        }
    }
}

impl Default for CredentialTransport {
    fn default() -> Self {
        CredentialTransport::Header(KeyHeader::ApiKey)
    }
}

impl fmt::Display for CredentialTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialTransport::Withheld => write!(f, "proxy"),
            CredentialTransport::Header(h) => write!(f, "header ({h})"),
            CredentialTransport::Body => write!(f, "body"),
        }
    }
}
