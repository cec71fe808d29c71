use crate::team::TeamCategory;
use crate::types::metrics::Metrics;

pub type Score = u8;

pub const TOTAL_SCORE_FIELD: &str = "total_score";
pub const PERFORMER_FIELD: &str = "isPerformerOfTheWeek";

// Every team's dimension maxima add up to exactly this.
pub const PERFORMER_SCORE: Score = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub label: &'static str,
    pub percent_field: &'static str,
    pub score_field: &'static str,
    pub percent: Option<f64>,
    pub score: Score,
    pub max: Score,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub team: TeamCategory,
    pub dimensions: [Dimension; 3],
}

impl ScoreCard {
    pub fn new(team: TeamCategory, dimensions: [Dimension; 3]) -> Self {
        Self { team, dimensions }
    }

    pub fn total(&self) -> Score {
        self.dimensions.iter().map(|dimension| dimension.score).sum()
    }

    pub fn max_total(&self) -> Score {
        self.dimensions.iter().map(|dimension| dimension.max).sum()
    }

    pub fn is_performer_of_the_week(&self) -> bool {
        self.total() == PERFORMER_SCORE
    }

    pub fn apply_to(&self, metrics: &mut Metrics) {
        for dimension in &self.dimensions {
            metrics.insert_percent(dimension.percent_field, dimension.percent);
            metrics.insert(dimension.score_field, dimension.score);
        }
        metrics.insert(TOTAL_SCORE_FIELD, self.total());
        metrics.insert(PERFORMER_FIELD, self.is_performer_of_the_week());
    }
}
