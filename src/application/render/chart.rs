use crate::domain::entities::collar_result::CollarResult;
use crate::domain::ports::chart_canvas::{ChartCanvas, ChartInstance};
use serde::Serialize;

pub const DATASET_LABEL: &str = "Payoff at Expiration";
pub const X_AXIS_TITLE: &str = "Stock Price at Expiration";
pub const Y_AXIS_TITLE: &str = "P/L ($)";
pub const CHART_NOTE: &str = "Payoff uses delayed data and mid-pricing for premiums.";

/// Everything a canvas needs to draw the payoff line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoffChart {
    pub title: String,
    pub dataset_label: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    /// (price, value), ascending by price.
    pub points: Vec<(f64, f64)>,
    pub stepped: bool,
    pub tension: f64,
    pub point_radius: f64,
    pub show_legend: bool,
    pub animation: bool,
}

impl PayoffChart {
    /// `fallback_ticker` titles the chart when the response carries none.
    pub fn from_result(res: &CollarResult, fallback_ticker: &str) -> Self {
        if res.payoff_prices.len() != res.payoff_values.len() {
            log::warn!(
                "payoff arrays differ in length ({} prices, {} values); truncating",
                res.payoff_prices.len(),
                res.payoff_values.len()
            );
        }
        let ticker = res
            .ticker
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(fallback_ticker);
        Self {
            title: format!("{ticker} Collar Payoff"),
            dataset_label: DATASET_LABEL,
            x_title: X_AXIS_TITLE,
            y_title: Y_AXIS_TITLE,
            points: sorted_pairs(&res.payoff_prices, &res.payoff_values),
            stepped: true,
            tension: 0.0,
            point_radius: 0.0,
            show_legend: false,
            animation: false,
        }
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.0).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.1).collect()
    }
}

/// Zip and sort ascending by price. The backend does not guarantee order.
pub fn sorted_pairs(prices: &[f64], values: &[f64]) -> Vec<(f64, f64)> {
    let mut pairs: Vec<(f64, f64)> = prices.iter().copied().zip(values.iter().copied()).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    pairs
}

/// Owns the single live chart of a view. A new instance is only created
/// after the previous one is destroyed; dropping the slot destroys it too.
pub struct ChartSlot<C: ChartCanvas> {
    canvas: C,
    current: Option<C::Instance>,
}

impl<C: ChartCanvas> ChartSlot<C> {
    pub fn new(canvas: C) -> Self {
        Self { canvas, current: None }
    }

    pub fn show(&mut self, chart: &PayoffChart) -> &C::Instance {
        self.clear();
        self.current.insert(self.canvas.create(chart))
    }

    pub fn clear(&mut self) {
        if let Some(old) = self.current.take() {
            old.destroy();
        }
    }

    pub fn current(&self) -> Option<&C::Instance> {
        self.current.as_ref()
    }
}

impl<C: ChartCanvas> Drop for ChartSlot<C> {
    fn drop(&mut self) {
        self.clear();
    }
}
