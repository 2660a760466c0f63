use crate::domain::entities::collar_result::CollarResult;
use crate::domain::values::money::{plain, plain_or_dash, usd_or_dash, DASH};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiTile {
    pub title: &'static str,
    pub value: String,
}

/// Two label/value pairs side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub cells: [(&'static str, String); 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub kpis: Vec<KpiTile>,
    pub rows: Vec<TableRow>,
}

impl ResultView {
    pub fn from_result(res: &CollarResult) -> Self {
        let kpis = vec![
            KpiTile { title: "Net Premium", value: usd_or_dash(res.net_premium) },
            KpiTile { title: "Max Gain", value: usd_or_dash(res.max_gain) },
            KpiTile { title: "Max Loss", value: usd_or_dash(res.max_loss) },
        ];

        let spot = format!(
            "{} ({})",
            res.spot_price.map(plain).unwrap_or_else(|| "n/a".into()),
            res.spot_policy
                .as_deref()
                .filter(|p| !p.is_empty())
                .unwrap_or(DASH)
        );

        let rows = vec![
            TableRow {
                cells: [
                    ("Selected Put", plain_or_dash(res.selected_put_strike)),
                    ("Put Premium (paid)", usd_or_dash(res.put_premium_paid)),
                ],
            },
            TableRow {
                cells: [
                    ("Selected Call", plain_or_dash(res.selected_call_strike)),
                    ("Call Premium (rcv)", usd_or_dash(res.call_premium_received)),
                ],
            },
            TableRow {
                cells: [
                    ("Breakeven (est)", usd_or_dash(res.breakeven_estimate)),
                    ("Spot (policy)", spot),
                ],
            },
        ];

        Self { kpis, rows }
    }

    pub fn kpi_values(&self) -> Vec<&str> {
        self.kpis.iter().map(|k| k.value.as_str()).collect()
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for k in &self.kpis {
            write!(f, "[ {}: {} ]  ", k.title, k.value)?;
        }
        writeln!(f)?;
        for row in &self.rows {
            let [(l1, v1), (l2, v2)] = &row.cells;
            writeln!(f, "{l1:<18}{v1:<14}{l2:<20}{v2}")?;
        }
        Ok(())
    }
}
