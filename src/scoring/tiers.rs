use crate::types::scoring::Score;

/// `achieved / target * 100`, undefined when the target is zero or the
/// ratio overflows.
pub fn achievement_percent(achieved: f64, target: f64) -> Option<f64> {
    if target == 0.0 {
        return None;
    }
    Some(achieved / target * 100.0).filter(|percent| percent.is_finite())
}

pub fn relative_diff_percent(actual: f64, target: f64) -> Option<f64> {
    if target == 0.0 {
        return None;
    }
    Some((actual - target) / target * 100.0).filter(|percent| percent.is_finite())
}

// Tiers are ordered best first.
pub fn tier_at_least(value: Option<f64>, tiers: &[(f64, Score)]) -> Score {
    let Some(value) = value else {
        return 0;
    };
    tiers
        .iter()
        .find(|(floor, _)| value >= *floor)
        .map(|(_, score)| *score)
        .unwrap_or(0)
}

pub fn tier_at_most(value: Option<f64>, tiers: &[(f64, Score)]) -> Score {
    let Some(value) = value else {
        return 0;
    };
    tiers
        .iter()
        .find(|(ceiling, _)| value <= *ceiling)
        .map(|(_, score)| *score)
        .unwrap_or(0)
}
