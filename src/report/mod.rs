pub mod json;
pub mod md;

use crate::error::KpiError;
use crate::team::TeamCategory;
use crate::types::metrics::Metrics;
use crate::types::report::PerformerReport;
use crate::types::scoring::ScoreCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "md" | "markdown" => Some(Self::Md),
            _ => None,
        }
    }
}

pub struct ScoreOutput<'a> {
    pub team: TeamCategory,
    pub card: Option<&'a ScoreCard>,
    pub metrics: &'a Metrics,
}

pub fn render_scorecard(
    output: &ScoreOutput<'_>,
    format: OutputFormat,
    precision: usize,
) -> Result<String, KpiError> {
    match format {
        OutputFormat::Json => json::metrics_to_json(output.metrics).map_err(KpiError::Json),
        OutputFormat::Md => Ok(md::scorecard_to_markdown(output, precision)),
    }
}

pub fn render_report(
    report: &PerformerReport,
    format: OutputFormat,
) -> Result<String, KpiError> {
    match format {
        OutputFormat::Json => json::report_to_json(report).map_err(KpiError::Json),
        OutputFormat::Md => Ok(md::report_to_markdown(report)),
    }
}
