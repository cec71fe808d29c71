use super::tiers::{achievement_percent, relative_diff_percent, tier_at_least};
use crate::types::metrics::Metrics;
use crate::types::scoring::{Dimension, Score};

// Portfolio holders weigh sales heavier (0-5) and drop AOV for trend and conversion.
const SALES_TIERS: [(f64, Score); 5] = [(100.0, 5), (80.0, 4), (60.0, 3), (40.0, 2), (20.0, 1)];
const CONVERSION_TIERS: [(f64, Score); 2] = [(100.0, 2), (90.0, 1)];

pub fn dimensions(metrics: &Metrics) -> [Dimension; 3] {
    [
        sales_dimension(metrics),
        trend_dimension(metrics),
        conversion_dimension(metrics),
    ]
}

fn sales_dimension(metrics: &Metrics) -> Dimension {
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
        max: 5,
    }
}

fn trend_dimension(metrics: &Metrics) -> Dimension {
    let percent = relative_diff_percent(
        metrics.number("this_week_sales"),
        metrics.number("last_week_sales"),
    );
    Dimension {
        label: "Trend",
        percent_field: "trend_percent",
        score_field: "trend_score",
        percent,
        score: trend_score(percent),
        max: 3,
    }
}

// Growth beats flat, and flat is its own tier rather than a floor.
fn trend_score(percent: Option<f64>) -> Score {
    match percent {
        Some(trend) if trend > 0.0 => 3,
        Some(trend) if trend == 0.0 => 2,
        Some(trend) if trend >= -10.0 => 1,
        _ => 0,
    }
}

fn conversion_dimension(metrics: &Metrics) -> Dimension {
    let percent = achievement_percent(
        metrics.number("conversion_rate"),
        metrics.number("conversion_target"),
    );
    Dimension {
        label: "Conversion",
        percent_field: "conversion_achievement_percent",
        score_field: "conversion_score",
        percent,
        score: tier_at_least(percent, &CONVERSION_TIERS),
        max: 2,
    }
}
