use super::field_chain::{self, FieldChain};
use crate::domain::entities::premium_result::PremiumResult;
use crate::domain::values::money::DASH;
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

/// Display model of the premium panel. Built infallibly: any concept the
/// response does not carry shows as a dash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PremiumView {
    pub score: String,
    pub signal: String,
    pub iv_put: String,
    pub iv_call: String,
    pub greeks: Vec<Metric>,
    pub components: Vec<Metric>,
    pub assumptions: Vec<Metric>,
}

impl PremiumView {
    pub fn from_result(res: &PremiumResult) -> Self {
        let greeks = [
            ("Delta", field_chain::DELTA),
            ("Gamma", field_chain::GAMMA),
            ("Theta", field_chain::THETA),
            ("Vega", field_chain::VEGA),
            ("Rho", field_chain::RHO),
        ]
        .iter()
        .map(|(label, chain)| metric(*label, chain, res))
        .collect();

        let components = field_chain::COMPONENTS
            .iter()
            .map(|(label, chain)| metric(*label, chain, res))
            .collect();

        let assumptions = vec![
            metric("r", &field_chain::ASSUMPTION_R, res),
            metric("q", &field_chain::ASSUMPTION_Q, res),
            metric("Time to Exp (yrs)", &field_chain::ASSUMPTION_TIME_TO_EXP, res),
            Metric { label: "Contracts", value: contracts(res) },
        ];

        Self {
            score: display(&field_chain::SCORE, res),
            signal: display(&field_chain::SIGNAL, res),
            iv_put: display(&field_chain::IV_PUT, res),
            iv_call: display(&field_chain::IV_CALL, res),
            greeks,
            components,
            assumptions,
        }
    }

    /// Every displayed value, in panel order.
    pub fn values(&self) -> Vec<&str> {
        let mut out = vec![
            self.score.as_str(),
            self.signal.as_str(),
            self.iv_put.as_str(),
            self.iv_call.as_str(),
        ];
        for m in self.greeks.iter().chain(&self.components).chain(&self.assumptions) {
            out.push(m.value.as_str());
        }
        out
    }
}

fn metric(label: &'static str, chain: &FieldChain, res: &PremiumResult) -> Metric {
    Metric { label, value: display(chain, res) }
}

fn display(chain: &FieldChain, res: &PremiumResult) -> String {
    chain
        .resolve(res)
        .map(|hit| render_value(hit.value))
        .unwrap_or_else(|| DASH.to_string())
}

/// Strings verbatim, everything else as compact JSON. Blank strings are absent.
fn render_value(v: &Value) -> String {
    match v {
        Value::String(s) if s.trim().is_empty() => DASH.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A zero or false contract count means none were reported.
fn contracts(res: &PremiumResult) -> String {
    match field_chain::ASSUMPTION_CONTRACTS.resolve(res).map(|hit| hit.value) {
        Some(Value::Bool(false)) => DASH.to_string(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => DASH.to_string(),
        Some(v) => render_value(v),
        None => DASH.to_string(),
    }
}

impl fmt::Display for PremiumView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Premium: Greeks & AnchorLock")?;
        writeln!(
            f,
            "[ AnchorLock Score: {} ]  [ Signal: {} ]  [ IV (Put / Call): {} / {} ]",
            self.score, self.signal, self.iv_put, self.iv_call
        )?;
        writeln!(f, "Portfolio Greeks (Net)")?;
        for m in &self.greeks {
            writeln!(f, "  {:<20}{}", m.label, m.value)?;
        }
        writeln!(f, "Components")?;
        for m in &self.components {
            writeln!(f, "  {:<20}{}", m.label, m.value)?;
        }
        writeln!(f, "Assumptions")?;
        for m in &self.assumptions {
            writeln!(f, "  {:<20}{}", m.label, m.value)?;
        }
        Ok(())
    }
}

/// Raw view of every known shape location, for diagnosing backend drift.
pub fn debug_dump(res: &PremiumResult) -> Value {
    let at = |path: &[&str]| res.at(path).cloned().unwrap_or(Value::Null);
    json!({
        "topLevelGreeks": {
            "delta": at(&["delta"]),
            "gamma": at(&["gamma"]),
            "vega": at(&["vega"]),
            "theta": at(&["theta"]),
        },
        "greeks": at(&["greeks"]),
        "premiumGreeks": at(&["premium", "greeks"]),
        "anchorlock": at(&["anchorlock"]),
        "signals": at(&["signals"]),
        "premiumAnchor": at(&["premium", "anchorlock"]),
        "premiumSignals": at(&["premium", "signals"]),
        "spot": at(&["spot_price"]),
        "spot_policy": at(&["spot_policy"]),
        "data_source": at(&["data_source"]),
    })
}
