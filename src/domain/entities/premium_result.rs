use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `POST /premium/calculate`.
///
/// The backend has shipped several layouts for the same concepts, so the
/// document is kept as raw JSON and read through accessor chains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PremiumResult(Value);

impl PremiumResult {
    pub fn new(value: Value) -> Self {
        PremiumResult(value)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Walk an object key path. `null` counts as absent.
    pub fn at(&self, path: &[&str]) -> Option<&Value> {
        let mut cur = &self.0;
        for key in path {
            cur = cur.as_object()?.get(*key)?;
        }
        if cur.is_null() {
            None
        } else {
            Some(cur)
        }
    }
}
