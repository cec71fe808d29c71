use super::ScoreOutput;
use crate::types::report::PerformerReport;

pub fn scorecard_to_markdown(scored: &ScoreOutput<'_>, precision: usize) -> String {
    let mut output = String::new();
    output.push_str("# KPI Scorecard\n\n");
    output.push_str(&format!("Team: {}\n\n", scored.team));

    let Some(card) = scored.card else {
        output.push_str("No scoring rules apply to this team; metrics were left unscored.\n");
        return output;
    };

    output.push_str(&format!(
        "Total score: {} / {}\n",
        card.total(),
        card.max_total()
    ));
    output.push_str(&format!(
        "Performer of the Week: {}\n\n",
        if card.is_performer_of_the_week() {
            "yes"
        } else {
            "no"
        }
    ));

    output.push_str("## Dimensions\n\n");
    for dimension in &card.dimensions {
        let percent = match dimension.percent {
            Some(percent) => format!("{:.*}%", precision, percent),
            None => "n/a".to_string(),
        };
        output.push_str(&format!(
            "- {}: {} ({} {}/{})\n",
            dimension.label, percent, dimension.score_field, dimension.score, dimension.max
        ));
    }

    output
}

pub fn report_to_markdown(report: &PerformerReport) -> String {
    let mut output = String::new();
    output.push_str("# Performer Report\n\n");
    output.push_str(&format!("Generated at: {}\n\n", report.generated_at));

    output.push_str("## Performers of the Week\n\n");
    let performers = report
        .entries
        .iter()
        .filter(|entry| entry.performer)
        .collect::<Vec<_>>();
    if performers.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for entry in performers {
            output.push_str(&format!(
                "- goal {} (employee {}, {}): {}\n",
                entry.goal_id, entry.employee_id, entry.team, entry.title
            ));
        }
        output.push('\n');
    }

    output.push_str("## Leaderboard\n\n");
    if report.entries.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    output.push_str("| rank | goal | employee | team | total |\n");
    output.push_str("|---|---|---|---|---|\n");
    for (index, entry) in report.entries.iter().enumerate() {
        let total = entry
            .total_score
            .map(|total| total.to_string())
            .unwrap_or_else(|| "unscored".to_string());
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            index + 1,
            entry.goal_id,
            entry.employee_id,
            entry.team,
            total
        ));
    }
    if report.unscored > 0 {
        output.push_str(&format!("\n{} goal(s) left unscored.\n", report.unscored));
    }

    output
}
