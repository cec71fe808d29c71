use crate::types::metrics::Metrics;
use crate::types::report::PerformerReport;

pub fn metrics_to_json(metrics: &Metrics) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(metrics)
}

pub fn report_to_json(report: &PerformerReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
