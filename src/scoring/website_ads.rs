use super::sales::{aov_dimension, sales_dimension};
use super::tiers::{relative_diff_percent, tier_at_least};
use crate::types::metrics::Metrics;
use crate::types::scoring::{Dimension, Score};

const ROAS_TIERS: [(f64, Score); 3] = [(0.0, 3), (-10.0, 2), (-20.0, 1)];

pub fn dimensions(metrics: &Metrics) -> [Dimension; 3] {
    [
        sales_dimension(metrics),
        roas_dimension(metrics),
        aov_dimension(metrics),
    ]
}

fn roas_dimension(metrics: &Metrics) -> Dimension {
    let percent = relative_diff_percent(
        metrics.number("weekly_roas"),
        metrics.number("target_roas"),
    );
    Dimension {
        label: "ROAS",
        percent_field: "roas_diff_pct",
        score_field: "roas_score",
        percent,
        score: tier_at_least(percent, &ROAS_TIERS),
        max: 3,
    }
}
