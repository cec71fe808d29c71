pub mod ads;
pub mod portfolio;
pub mod sales;
pub mod tiers;
pub mod website_ads;

use crate::team::TeamCategory;
use crate::types::metrics::Metrics;
use crate::types::scoring::ScoreCard;

/// Scores `metrics` for `team`. `None` means the team has no scoring rules.
pub fn compute(team: TeamCategory, metrics: &Metrics) -> Option<ScoreCard> {
    let dimensions = match team {
        TeamCategory::Sales => sales::dimensions(metrics),
        TeamCategory::Ads => ads::dimensions(metrics),
        TeamCategory::WebsiteAds => website_ads::dimensions(metrics),
        TeamCategory::PortfolioHolders => portfolio::dimensions(metrics),
        TeamCategory::Unknown => return None,
    };
    let card = ScoreCard::new(team, dimensions);
    tracing::debug!(
        team = %team,
        total = card.total(),
        performer = card.is_performer_of_the_week(),
        "scored metrics"
    );
    Some(card)
}

pub fn score(team: TeamCategory, metrics: &Metrics) -> Metrics {
    score_with_card(team, metrics).0
}

pub fn score_with_card(team: TeamCategory, metrics: &Metrics) -> (Metrics, Option<ScoreCard>) {
    let mut scored = metrics.clone();
    let card = compute(team, metrics);
    match &card {
        Some(card) => card.apply_to(&mut scored),
        None => tracing::warn!("no scoring rules for team {team}; metrics left unscored"),
    }
    (scored, card)
}

pub fn extract_target_value(team: TeamCategory, metrics: &Metrics) -> f64 {
    if team.is_recognized() {
        if !metrics.contains_key("weekly_sales_target") {
            tracing::debug!(team = %team, "weekly_sales_target missing; target defaults to 0");
        }
        metrics.number("weekly_sales_target")
    } else {
        0.0
    }
}
