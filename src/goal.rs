use crate::scoring;
use crate::team::TeamCategory;
use crate::types::metrics::Metrics;
use crate::types::scoring::{ScoreCard, PERFORMER_FIELD, TOTAL_SCORE_FIELD};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GoalStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GoalPriority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: u64,
    pub assigned_to_employee_id: u64,
    pub set_by_user_id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_value: f64,
    #[serde(default)]
    pub current_value: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default)]
    pub priority: GoalPriority,
    #[serde(default)]
    pub metrics: Metrics,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub id: u64,
    pub assigned_to_employee_id: u64,
    pub set_by_user_id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub current_value: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default)]
    pub priority: GoalPriority,
    #[serde(default)]
    pub metrics: Metrics,
}

impl Goal {
    pub fn create(new_goal: NewGoal, team: TeamCategory, now: DateTime<Utc>) -> Self {
        let metrics = scoring::score(team, &new_goal.metrics);
        let target_value = scoring::extract_target_value(team, &metrics);
        Self {
            id: new_goal.id,
            assigned_to_employee_id: new_goal.assigned_to_employee_id,
            set_by_user_id: new_goal.set_by_user_id,
            title: new_goal.title,
            description: new_goal.description,
            target_value,
            current_value: new_goal.current_value,
            unit: new_goal.unit,
            start_date: new_goal.start_date,
            deadline: new_goal.deadline,
            status: new_goal.status,
            priority: new_goal.priority,
            metrics,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_metrics_update(
        &mut self,
        update: &Metrics,
        team: TeamCategory,
        now: DateTime<Utc>,
    ) -> Option<ScoreCard> {
        let merged = self.metrics.merged_with(update);
        let (scored, card) = scoring::score_with_card(team, &merged);
        self.target_value = scoring::extract_target_value(team, &scored);
        self.metrics = scored;
        self.updated_at = now;
        card
    }

    pub fn total_score(&self) -> Option<u64> {
        self.metrics
            .get(TOTAL_SCORE_FIELD)
            .and_then(serde_json::Value::as_u64)
    }

    pub fn is_performer_of_the_week(&self) -> bool {
        self.metrics
            .get(PERFORMER_FIELD)
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }
}
