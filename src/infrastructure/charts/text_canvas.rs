use crate::application::render::chart::PayoffChart;
use crate::domain::ports::chart_canvas::{ChartCanvas, ChartInstance};
use crate::domain::values::money::plain;
use std::fmt;

/// Draws payoff charts as fixed-size character grids for the terminal.
pub struct TextCanvas {
    width: usize,
    height: usize,
}

impl TextCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width: width.max(2), height: height.max(2) }
    }
}

impl Default for TextCanvas {
    fn default() -> Self {
        Self::new(60, 14)
    }
}

pub struct TextChart {
    lines: Vec<String>,
}

impl TextChart {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for TextChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl ChartInstance for TextChart {
    fn destroy(self) {
        log::debug!("released text chart ({} lines)", self.lines.len());
    }
}

impl ChartCanvas for TextCanvas {
    type Instance = TextChart;

    fn create(&mut self, chart: &PayoffChart) -> TextChart {
        let mut lines = vec![chart.title.clone(), format!("  {}", chart.y_title)];
        if chart.points.is_empty() {
            lines.push("  (no payoff data)".into());
            return TextChart { lines };
        }
        let grid = self.plot(&chart.points);

        let (ymin, ymax) = y_range(&chart.points);
        let top = plain(ymax);
        let bottom = plain(ymin);
        let gutter = top.len().max(bottom.len());
        for (i, row) in grid.iter().enumerate() {
            let label = if i == 0 {
                top.as_str()
            } else if i + 1 == grid.len() {
                bottom.as_str()
            } else {
                ""
            };
            lines.push(format!("{label:>gutter$} |{}", row.iter().collect::<String>()));
        }

        let first = plain(chart.points[0].0);
        let last = plain(chart.points[chart.points.len() - 1].0);
        let pad = self.width.saturating_sub(first.len() + last.len());
        lines.push(format!("{:>gutter$} +{}", "", "-".repeat(self.width)));
        lines.push(format!("{:>gutter$}  {first}{}{last}", "", " ".repeat(pad)));
        lines.push(format!("{:>gutter$}  {}", "", chart.x_title));
        TextChart { lines }
    }
}

impl TextCanvas {
    /// Step interpolation: each column takes the value of the last point at
    /// or left of its price. Vertical jumps are drawn with `|`.
    fn plot(&self, points: &[(f64, f64)]) -> Vec<Vec<char>> {
        let (w, h) = (self.width, self.height);
        let mut grid = vec![vec![' '; w]; h];
        let xmin = points[0].0;
        let xspan = (points[points.len() - 1].0 - xmin).max(f64::EPSILON);
        let (ymin, ymax) = y_range(points);
        let yspan = (ymax - ymin).max(f64::EPSILON);
        let row_of = |y: f64| (((ymax - y) / yspan) * (h - 1) as f64).round() as usize;

        let zero = row_of(0.0).min(h - 1);
        for cell in grid[zero].iter_mut() {
            *cell = '.';
        }

        let mut prev_row: Option<usize> = None;
        for col in 0..w {
            let x = xmin + xspan * col as f64 / (w - 1) as f64;
            let y = points
                .iter()
                .take_while(|p| p.0 <= x)
                .last()
                .map(|p| p.1)
                .unwrap_or(points[0].1);
            let row = row_of(y).min(h - 1);
            if let Some(prev) = prev_row {
                for r in prev.min(row) + 1..prev.max(row) {
                    grid[r][col] = '|';
                }
            }
            grid[row][col] = '*';
            prev_row = Some(row);
        }
        grid
    }
}

/// Value range, always including zero so the break-even line is visible.
fn y_range(points: &[(f64, f64)]) -> (f64, f64) {
    points.iter().fold((0.0_f64, 0.0_f64), |(lo, hi), p| (lo.min(p.1), hi.max(p.1)))
}
