use crate::error::{KpiError, Result};
use crate::goal::Goal;
use crate::scoring;
use crate::team::TeamResolver;
use crate::types::report::{PerformerReport, ReportEntry};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Deserialize)]
pub struct TeamGoal {
    pub team: String,
    #[serde(flatten)]
    pub goal: Goal,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GoalDocument {
    Many(Vec<TeamGoal>),
    One(Box<TeamGoal>),
}

pub fn load_team_goals(path: &Path) -> Result<Vec<TeamGoal>> {
    if !path.exists() {
        return Err(KpiError::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return read_goal_file(path);
    }

    let mut goals = Vec::new();
    for file in list_json_files(path) {
        goals.extend(read_goal_file(&file)?);
    }
    Ok(goals)
}

fn list_json_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect()
}

fn read_goal_file(path: &Path) -> Result<Vec<TeamGoal>> {
    let content = fs::read_to_string(path)?;
    let document: GoalDocument = serde_json::from_str(&content)
        .map_err(|e| KpiError::InvalidGoal(format!("{}: {}", path.display(), e)))?;
    Ok(match document {
        GoalDocument::Many(goals) => goals,
        GoalDocument::One(goal) => vec![*goal],
    })
}

pub fn build_report(
    goals: &[TeamGoal],
    resolver: &TeamResolver,
    now: DateTime<Utc>,
) -> PerformerReport {
    let mut entries = Vec::with_capacity(goals.len());
    let mut unscored = 0;

    for team_goal in goals {
        let goal = &team_goal.goal;
        let team = resolver.resolve(&team_goal.team);
        let card = scoring::compute(team, &goal.metrics);
        if card.is_none() {
            unscored += 1;
            tracing::warn!(
                goal_id = goal.id,
                team = %team_goal.team,
                "goal left unscored: team has no scoring rules"
            );
        }
        entries.push(ReportEntry {
            goal_id: goal.id,
            employee_id: goal.assigned_to_employee_id,
            title: goal.title.clone(),
            team,
            total_score: card.as_ref().map(|card| card.total()),
            performer: card
                .as_ref()
                .is_some_and(|card| card.is_performer_of_the_week()),
        });
    }

    let mut report = PerformerReport {
        generated_at: now.to_rfc3339(),
        entries,
        performers: Vec::new(),
        unscored,
    };
    report.sort_entries();
    report.performers = report
        .entries
        .iter()
        .filter(|entry| entry.performer)
        .map(|entry| entry.goal_id)
        .collect();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::{FallbackPolicy, TeamCategory};
    use chrono::TimeZone;
    use serde_json::json;
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn team_goal(id: u64, team: &str, metrics: serde_json::Value) -> serde_json::Value {
        json!({
            "team": team,
            "id": id,
            "assignedToEmployeeId": id * 10,
            "setByUserId": 1,
            "title": format!("goal {id}"),
            "metrics": metrics,
            "createdAt": "2026-10-12T09:00:00Z",
            "updatedAt": "2026-10-19T09:00:00Z"
        })
    }

    fn perfect_sales() -> serde_json::Value {
        json!({
            "weekly_sales_target": 1000, "weekly_sales": 1000,
            "weekly_spend": 100, "target_cost_percent": 10,
            "aov_target": 50, "aov": 50
        })
    }

    fn sample_goals() -> Vec<TeamGoal> {
        serde_json::from_value(json!([
            team_goal(3, "Engineering", perfect_sales()),
            team_goal(2, "sales team", json!({"weekly_sales_target": 1000, "weekly_sales": 600})),
            team_goal(1, "Sales", perfect_sales()),
        ]))
        .expect("goals should parse")
    }

    #[test]
    fn build_report_ranks_scored_goals_and_lists_performers() {
        let report = build_report(&sample_goals(), &TeamResolver::default(), now());

        let order = report
            .entries
            .iter()
            .map(|entry| entry.goal_id)
            .collect::<Vec<_>>();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(report.performers, vec![1]);
        assert_eq!(report.unscored, 1);
        assert_eq!(report.entries[2].team, TeamCategory::Unknown);
        assert_eq!(report.entries[2].total_score, None);
        assert_eq!(report.entries[1].total_score, Some(5));
    }

    #[test]
    fn build_report_breaks_ties_by_goal_id() {
        let goals: Vec<TeamGoal> = serde_json::from_value(json!([
            team_goal(9, "Sales", perfect_sales()),
            team_goal(4, "Sales", perfect_sales()),
        ]))
        .expect("goals should parse");

        let report = build_report(&goals, &TeamResolver::default(), now());
        assert_eq!(report.performers, vec![4, 9]);
    }

    #[test]
    fn build_report_applies_fallback_policy() {
        let report = build_report(
            &sample_goals(),
            &TeamResolver::new(FallbackPolicy::Sales),
            now(),
        );
        assert_eq!(report.unscored, 0);
        assert_eq!(report.performers, vec![1, 3]);
    }

    #[test]
    fn load_team_goals_walks_directory_for_json_files() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("week-42")).expect("nested dir should create");
        fs::write(
            dir.path().join("a.json"),
            serde_json::to_string(&team_goal(1, "Sales", perfect_sales()))
                .expect("goal should serialize"),
        )
        .expect("single goal should write");
        fs::write(
            dir.path().join("week-42/b.json"),
            serde_json::to_string(&json!([
                team_goal(2, "Ads", json!({})),
                team_goal(3, "Website Ads", json!({}))
            ]))
            .expect("goals should serialize"),
        )
        .expect("goal list should write");
        fs::write(dir.path().join("notes.txt"), "ignored").expect("notes should write");

        let goals = load_team_goals(dir.path()).expect("goals should load");
        let ids = goals.iter().map(|goal| goal.goal.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(goals[2].team, "Website Ads");
    }

    #[test]
    fn load_team_goals_rejects_missing_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_team_goals(&dir.path().join("missing.json"))
            .expect_err("missing path should fail");
        assert!(matches!(err, KpiError::PathNotFound(_)));
    }

    #[test]
    fn load_team_goals_reports_invalid_documents() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"team": "Sales"}"#).expect("broken goal should write");

        let err = load_team_goals(&path).expect_err("goal without fields should fail");
        assert!(matches!(err, KpiError::InvalidGoal(message) if message.contains("broken.json")));
    }
}
