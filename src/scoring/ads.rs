use super::sales::{aov_dimension, sales_dimension};
use super::tiers::{relative_diff_percent, tier_at_most};
use crate::types::metrics::Metrics;
use crate::types::scoring::{Dimension, Score};

// ACOS is a cost ratio: lower than target is best.
const ACOS_TIERS: [(f64, Score); 3] = [(0.0, 3), (10.0, 2), (20.0, 1)];

pub fn dimensions(metrics: &Metrics) -> [Dimension; 3] {
    [
        sales_dimension(metrics),
        acos_dimension(metrics),
        aov_dimension(metrics),
    ]
}

fn acos_dimension(metrics: &Metrics) -> Dimension {
    let percent = relative_diff_percent(
        metrics.number("weekly_acos_percent"),
        metrics.number("target_acos_percent"),
    );
    Dimension {
        label: "ACOS",
        percent_field: "acos_diff_pct",
        score_field: "acos_score",
        percent,
        score: tier_at_most(percent, &ACOS_TIERS),
        max: 3,
    }
}
