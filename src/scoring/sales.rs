use super::tiers::{achievement_percent, tier_at_least, tier_at_most};
use crate::types::metrics::Metrics;
use crate::types::scoring::{Dimension, Score};

const SALES_TIERS: [(f64, Score); 4] = [(100.0, 4), (80.0, 3), (60.0, 2), (40.0, 1)];
const AOV_TIERS: [(f64, Score); 3] = [(100.0, 3), (90.0, 2), (80.0, 1)];
// Offsets above the team's target cost percent.
const COST_OFFSETS: [(f64, Score); 3] = [(0.0, 3), (10.0, 2), (20.0, 1)];

pub fn dimensions(metrics: &Metrics) -> [Dimension; 3] {
    [
        sales_dimension(metrics),
        cost_dimension(metrics),
        aov_dimension(metrics),
    ]
}

pub(super) fn sales_dimension(metrics: &Metrics) -> Dimension {
    let percent = achievement_percent(
        metrics.number("weekly_sales"),
        metrics.number("weekly_sales_target"),
    );
    Dimension {
        label: "Sales",
        percent_field: "sales_achievement_percent",
        score_field: "sales_score",
        percent,
        score: tier_at_least(percent, &SALES_TIERS),
        max: 4,
    }
}

pub(super) fn aov_dimension(metrics: &Metrics) -> Dimension {
    let percent = achievement_percent(metrics.number("aov"), metrics.number("aov_target"));
    Dimension {
        label: "AOV",
        percent_field: "aov_achievement_percent",
        score_field: "aov_score",
        percent,
        score: tier_at_least(percent, &AOV_TIERS),
        max: 3,
    }
}

fn cost_dimension(metrics: &Metrics) -> Dimension {
    let percent = achievement_percent(
        metrics.number("weekly_spend"),
        metrics.number("weekly_sales"),
    );
    let target = metrics.number("target_cost_percent");
    let tiers = COST_OFFSETS.map(|(offset, score)| (target + offset, score));
    Dimension {
        label: "Cost",
        percent_field: "cost_percent",
        score_field: "cost_score",
        percent,
        score: tier_at_most(percent, &tiers),
        max: 3,
    }
}
