use super::snapshot::Snapshot;
use chrono::{DateTime, Local, Utc};

/// Fraction of the price range added above and below the plotted line.
pub const Y_PADDING_RATIO: f64 = 0.1;

/// Padding used when every price is identical.
pub const Y_FALLBACK_PADDING: f64 = 5.0;

/// Plot-ready price series for the history chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub prices: Vec<f64>,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartSeries {
    /// Sorts snapshots by capture time, oldest first. Snapshots without a price are skipped.
    pub fn from_snapshots(snapshots: &[Snapshot]) -> Self {
        let mut points = priced_points(snapshots);
        points.sort_by_key(|(captured_at, _)| *captured_at);
        Self::from_points(points)
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    fn from_points(points: Vec<(DateTime<Utc>, f64)>) -> Self {
        let (labels, prices): (Vec<String>, Vec<f64>) = points
            .into_iter()
            .map(|(captured_at, price)| {
                let label = captured_at
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string();
                (label, price)
            })
            .unzip();

        let (y_min, y_max) = padded_domain(&prices);

        Self {
            labels,
            prices,
            y_min,
            y_max,
        }
    }
}

fn priced_points(snapshots: &[Snapshot]) -> Vec<(DateTime<Utc>, f64)> {
    snapshots
        .iter()
        .filter_map(|s| s.price.filter(|p| p.is_finite()).map(|p| (s.captured_at, p)))
        .collect()
}

/// Y-axis bounds padded by 10% of the data range, or by a fixed amount when the range is zero.
pub fn padded_domain(prices: &[f64]) -> (f64, f64) {
    if prices.is_empty() {
        return (0.0, Y_FALLBACK_PADDING);
    }

    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    let padding = if range.abs() < f64::EPSILON {
        Y_FALLBACK_PADDING
    } else {
        range * Y_PADDING_RATIO
    };

    (min - padding, max + padding)
}
