use serde::{Deserialize, Serialize};

/// Form snapshot posted to both pricing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollarRequest {
    pub ticker: String,
    pub shares: u64,
    pub entry_price: f64,
    pub put_strike: f64,
    pub call_strike: f64,
    pub expiration: String,
}

impl CollarRequest {
    pub fn new(
        ticker: impl Into<String>,
        shares: u64,
        entry_price: f64,
        put_strike: f64,
        call_strike: f64,
        expiration: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            shares,
            entry_price,
            put_strike,
            call_strike,
            expiration: expiration.into(),
        }
    }

    /// Names of the fields a premium request cannot go out without.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.ticker.trim().is_empty() {
            missing.push("ticker");
        }
        if self.expiration.trim().is_empty() {
            missing.push("expiration");
        }
        if !is_strike(self.put_strike) {
            missing.push("put_strike");
        }
        if !is_strike(self.call_strike) {
            missing.push("call_strike");
        }
        missing
    }
}

fn is_strike(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

impl Default for CollarRequest {
    fn default() -> Self {
        Self::new("AAPL", 100, 220.0, 180.0, 250.0, "")
    }
}
