use crate::team::TeamCategory;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub goal_id: u64,
    pub employee_id: u64,
    pub title: String,
    pub team: TeamCategory,
    pub total_score: Option<u8>,
    pub performer: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformerReport {
    pub generated_at: String,
    pub entries: Vec<ReportEntry>,
    pub performers: Vec<u64>,
    pub unscored: usize,
}

impl PerformerReport {
    pub fn sort_entries(&mut self) {
        self.entries.sort_by(|left, right| {
            right
                .total_score
                .cmp(&left.total_score)
                .then_with(|| left.goal_id.cmp(&right.goal_id))
        });
    }
}
