use crate::domain::error::DomainError;
use serde::Serialize;
use serde_json::Value;

/// Expiration dates offered for one ticker, in backend order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpirationList(Vec<String>);

impl ExpirationList {
    pub fn new(dates: Vec<String>) -> Self {
        ExpirationList(dates)
    }

    /// Accepts a bare list of strings or `{"expirations": [...]}`.
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let items = match value {
            Value::Array(items) => items,
            Value::Object(map) => match map.get("expirations") {
                Some(Value::Array(items)) => items,
                Some(other) => {
                    return Err(DomainError::ShapeMismatch(format!(
                        "`expirations` is not a list: {other}"
                    )))
                }
                None => {
                    return Err(DomainError::ShapeMismatch(
                        "object without `expirations`".into(),
                    ))
                }
            },
            other => {
                return Err(DomainError::ShapeMismatch(format!(
                    "expected list of dates, got {other}"
                )))
            }
        };

        items
            .iter()
            .map(|v| {
                v.as_str().map(String::from).ok_or_else(|| {
                    DomainError::ShapeMismatch(format!("expiration is not a string: {v}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ExpirationList)
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn contains(&self, date: &str) -> bool {
        self.0.iter().any(|d| d == date)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
