use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// The request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `body` is empty when it could not be retrieved.
    #[error("HTTP {status}{}", body_suffix(.body))]
    HttpStatus { status: u16, body: String },

    /// 2xx response whose JSON matches no recognized schema.
    #[error("Unexpected response shape: {0}")]
    ShapeMismatch(String),

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {body}")
    }
}

impl DomainError {
    pub fn status(&self) -> Option<u16> {
        match self {
            DomainError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        DomainError::Network(e.to_string())
    }
}
