use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Response of `POST /calculate`. Values are passed through untouched; every
/// scalar is optional because the backend omits fields it could not compute.
///
/// Numbers are accepted as JSON numbers or numeric strings. A scalar that is
/// neither decodes as absent; a payoff entry that is neither rejects the
/// whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollarResult {
    #[serde(default, deserialize_with = "lenient_text")]
    pub ticker: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub net_premium: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub max_gain: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub max_loss: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub selected_put_strike: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub selected_call_strike: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub put_premium_paid: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub call_premium_received: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub breakeven_estimate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub spot_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub spot_policy: Option<String>,
    #[serde(default, deserialize_with = "number_series")]
    pub payoff_prices: Vec<f64>,
    #[serde(default, deserialize_with = "number_series")]
    pub payoff_values: Vec<f64>,
}

fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|x| x.is_finite()),
        _ => None,
    }
}

fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<Value>::deserialize(d)?.as_ref().and_then(as_number))
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// `null` reads as an empty series.
fn number_series<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<f64>, D::Error> {
    Option::<Vec<Value>>::deserialize(d)?
        .unwrap_or_default()
        .iter()
        .map(|v| as_number(v).ok_or_else(|| D::Error::custom(format!("non-numeric payoff entry: {v}"))))
        .collect()
}
