/// Placeholder shown wherever a value is unavailable.
pub const DASH: &str = "—";

/// `$` followed by the value at two decimals, sign after the symbol: `$-1994.80`.
pub fn usd(value: f64) -> String {
    format!("${value:.2}")
}

pub fn usd_or_dash(value: Option<f64>) -> String {
    value.map(usd).unwrap_or_else(|| DASH.to_string())
}

/// Plain number, no trailing `.0` for whole values.
pub fn plain(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

pub fn plain_or_dash(value: Option<f64>) -> String {
    value.map(plain).unwrap_or_else(|| DASH.to_string())
}
