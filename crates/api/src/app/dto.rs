use truthlens_ai::Analysis;

use crate::app::report::ReportView;

// -------------------------
// JSON mapping helpers
// -------------------------

/// Body of a successful `POST /api/analyze`.
pub fn analysis_to_json(analysis: &Analysis, report: &ReportView) -> serde_json::Value {
    serde_json::json!({
        "analysis_id": analysis.analysis_id.to_string(),
        "model": analysis.model,
        "prompt_version": analysis.prompt_version,
        "analyzed_at": analysis.analyzed_at.to_rfc3339(),
        "result": analysis.result,
        "report": report,
    })
}
